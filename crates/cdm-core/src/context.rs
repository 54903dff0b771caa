//! Corpus and parse context.
//!
//! The [`CorpusContext`] is passed through every persistence call. It carries
//! the shared [`Corpus`] (reference factory, status sink, options) and the
//! current nesting depth, which bounds recursion through inline definitions.

use std::fmt;
use std::sync::Arc;

use crate::config::ParseOptions;
use crate::error::{Error, Result};
use crate::model::{CdmCollection, CdmObjectType, ObjectReference, ReferenceTarget};
use crate::status::{StatusEvent, StatusLevel, StatusSink, TracingSink};

/// Shared services used while loading documents.
pub struct Corpus {
    options: ParseOptions,
    sink: Arc<dyn StatusSink>,
}

impl Corpus {
    pub fn new(options: ParseOptions, sink: Arc<dyn StatusSink>) -> Self {
        Corpus { options, sink }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Build a reference of kind `object_type` with an empty trait collection.
    pub fn make_ref<D>(
        &self,
        object_type: CdmObjectType,
        target: ReferenceTarget<D>,
        simple_named_reference: bool,
    ) -> ObjectReference<D> {
        debug_assert!(object_type.is_reference(), "{object_type} is not a reference kind");
        ObjectReference {
            object_type,
            target,
            simple_named_reference,
            applied_traits: CdmCollection::new(),
        }
    }

    fn report(&self, level: StatusLevel, component: &str, message: String, operation: &str) {
        if level < self.options.report_level {
            return;
        }
        self.sink.report(StatusEvent {
            level,
            component: component.to_string(),
            operation: operation.to_string(),
            message,
        });
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Corpus::new(ParseOptions::default(), Arc::new(TracingSink))
    }
}

impl fmt::Debug for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Corpus")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Per-call view of the corpus. Cheap to clone.
#[derive(Debug, Clone)]
pub struct CorpusContext {
    corpus: Arc<Corpus>,
    depth: usize,
}

impl CorpusContext {
    pub fn new(corpus: Corpus) -> Self {
        CorpusContext {
            corpus: Arc::new(corpus),
            depth: 0,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Current nesting depth, 0 at document level
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Context for parsing one nesting level deeper.
    ///
    /// Fails with [`Error::RecursionLimit`] once `max_depth` would be exceeded.
    pub fn nested(&self) -> Result<CorpusContext> {
        let limit = self.corpus.options.max_depth;
        if self.depth >= limit {
            return Err(Error::RecursionLimit { limit });
        }
        Ok(CorpusContext {
            corpus: Arc::clone(&self.corpus),
            depth: self.depth + 1,
        })
    }

    pub fn log_error(&self, component: &str, message: impl Into<String>, operation: &str) {
        self.corpus
            .report(StatusLevel::Error, component, message.into(), operation);
    }

    pub fn log_warning(&self, component: &str, message: impl Into<String>, operation: &str) {
        self.corpus
            .report(StatusLevel::Warning, component, message.into(), operation);
    }

    pub fn log_info(&self, component: &str, message: impl Into<String>, operation: &str) {
        self.corpus
            .report(StatusLevel::Info, component, message.into(), operation);
    }
}

impl Default for CorpusContext {
    fn default() -> Self {
        CorpusContext::new(Corpus::default())
    }
}
