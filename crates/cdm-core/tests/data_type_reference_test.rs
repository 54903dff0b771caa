//! Data type reference loading and saving.

use std::sync::Arc;

use cdm_core::config::ParseOptions;
use cdm_core::context::{Corpus, CorpusContext};
use cdm_core::model::{CdmObjectType, DataTypeReference, ReferenceTarget};
use cdm_core::persistence::data_type_reference::{from_data, to_data};
use cdm_core::status::{CollectingSink, StatusLevel};
use rstest::rstest;
use serde_json::{Value, json};

fn collecting_context() -> (CorpusContext, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    let ctx = CorpusContext::new(Corpus::new(ParseOptions::default(), sink.clone()));
    (ctx, sink)
}

fn parse(ctx: &CorpusContext, value: &Value) -> DataTypeReference {
    from_data(ctx, Some(value))
        .expect("Failed to parse reference")
        .expect("Expected a reference")
}

fn trait_names(reference: &DataTypeReference) -> Vec<&str> {
    reference
        .applied_traits()
        .iter()
        .map(|t| t.trait_name.as_str())
        .collect()
}

#[test]
fn test_absent_node_yields_nothing() {
    let (ctx, sink) = collecting_context();
    assert!(from_data(&ctx, None).unwrap().is_none());
    assert!(sink.events().is_empty());
}

#[test]
fn test_simple_reference() {
    let ctx = CorpusContext::default();
    let reference = parse(&ctx, &json!("Foo"));

    assert_eq!(reference.object_type(), CdmObjectType::DataTypeRef);
    assert_eq!(reference.target(), &ReferenceTarget::named("Foo"));
    assert!(reference.is_simple());
    assert!(reference.applied_traits().is_empty());
}

#[test]
fn test_expanded_reference_by_name() {
    let ctx = CorpusContext::default();
    let reference = parse(&ctx, &json!({ "dataTypeReference": "Foo" }));

    assert_eq!(reference.named_reference(), Some("Foo"));
    assert!(!reference.is_simple());
    assert!(reference.applied_traits().is_empty());
}

#[test]
fn test_applied_traits_keep_order() {
    let ctx = CorpusContext::default();
    let reference = parse(
        &ctx,
        &json!({ "dataTypeReference": "Foo", "appliedTraits": ["means.x", "means.y"] }),
    );
    assert_eq!(trait_names(&reference), vec!["means.x", "means.y"]);
}

#[rstest]
#[case::absent(json!({ "dataTypeReference": "Foo" }))]
#[case::null(json!({ "dataTypeReference": "Foo", "appliedTraits": null }))]
#[case::empty(json!({ "dataTypeReference": "Foo", "appliedTraits": [] }))]
fn test_missing_traits_give_empty_collection(#[case] input: Value) {
    let ctx = CorpusContext::default();
    let reference = parse(&ctx, &input);
    assert!(reference.applied_traits().is_empty());
    assert_eq!(reference.applied_traits().len(), 0);
}

#[test]
fn test_inline_definition() {
    let (ctx, sink) = collecting_context();
    let reference = parse(
        &ctx,
        &json!({
            "dataTypeReference": {
                "dataTypeName": "currencyCode",
                "extendsDataType": "string",
                "exhibitsTraits": ["means.currency.code"]
            },
            "appliedTraits": ["is.nullable"]
        }),
    );

    let definition = reference.explicit_reference().expect("Expected inline definition");
    assert_eq!(definition.data_type_name, "currencyCode");
    assert_eq!(
        definition
            .extends_data_type
            .as_ref()
            .and_then(|r| r.named_reference()),
        Some("string")
    );
    assert_eq!(definition.exhibits_traits.len(), 1);
    assert_eq!(trait_names(&reference), vec!["is.nullable"]);
    assert!(sink.events().is_empty());
}

#[test]
fn test_malformed_inline_definition_is_recovered() {
    let (ctx, sink) = collecting_context();
    let reference = parse(
        &ctx,
        &json!({
            "dataTypeReference": { "extendsDataType": "string" },
            "appliedTraits": ["means.x"]
        }),
    );

    assert!(reference.target().is_unset());
    assert!(!reference.is_simple());
    assert_eq!(trait_names(&reference), vec!["means.x"]);

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, StatusLevel::Error);
    assert_eq!(events[0].component, "DataTypeReferencePersistence");
    assert_eq!(events[0].operation, "from_data");
    assert!(
        events[0]
            .message
            .starts_with("There was an error while trying to convert from JSON to DataTypeRef.")
    );
}

#[test]
fn test_failure_deep_inside_is_reported_once() {
    let (ctx, sink) = collecting_context();
    let reference = parse(
        &ctx,
        &json!({
            "dataTypeReference": {
                "dataTypeName": "outer",
                "extendsDataType": {
                    "dataTypeReference": { "dataTypeName": 12 }
                }
            }
        }),
    );

    // the outer definition survives, only the innermost target is lost
    let outer = reference.explicit_reference().unwrap();
    assert_eq!(outer.data_type_name, "outer");
    let inner = outer.extends_data_type.as_ref().unwrap();
    assert!(inner.target().is_unset());
    assert_eq!(sink.count(StatusLevel::Error), 1);
}

#[test]
fn test_invalid_trait_propagates() {
    let (ctx, sink) = collecting_context();
    let result = from_data(
        &ctx,
        Some(&json!({ "dataTypeReference": "Foo", "appliedTraits": [{ "arguments": [] }] })),
    );
    assert!(matches!(result, Err(cdm_core::Error::InvalidTraitNode(_))));
    assert!(sink.events().is_empty());
}

#[rstest]
#[case::simple(json!("int64"))]
#[case::expanded_name(json!({ "dataTypeReference": "int64" }))]
#[case::expanded_with_traits(json!({
    "dataTypeReference": "string",
    "appliedTraits": ["means.x", { "traitReference": "is.constrained", "arguments": [{ "name": "maximumLength", "value": 64 }] }, "means.y"]
}))]
#[case::unnamed_argument_object(json!({
    "dataTypeReference": "string",
    "appliedTraits": [{ "traitReference": "is.constrained", "arguments": [{ "value": 64 }] }]
}))]
#[case::argument_with_explanation(json!({
    "dataTypeReference": "string",
    "appliedTraits": [{
        "traitReference": "is.constrained",
        "arguments": [{ "explanation": "max", "name": "maximumLength", "value": 64 }]
    }]
}))]
#[case::inline(json!({
    "dataTypeReference": {
        "explanation": "ISO 4217",
        "dataTypeName": "currencyCode",
        "extendsDataType": { "dataTypeReference": "string", "appliedTraits": ["is.nullable"] },
        "exhibitsTraits": ["means.currency.code"]
    },
    "appliedTraits": ["means.y"]
}))]
#[case::inline_nested_twice(json!({
    "dataTypeReference": {
        "dataTypeName": "a",
        "extendsDataType": {
            "dataTypeReference": { "dataTypeName": "b", "extendsDataType": "integer" }
        }
    }
}))]
fn test_round_trip(#[case] input: Value) {
    let ctx = CorpusContext::default();
    let first = parse(&ctx, &input);
    let data = to_data(&first);

    assert_eq!(data, input);
    assert_eq!(data.is_string(), input.is_string());

    let second = parse(&ctx, &data);
    assert_eq!(second, first);
}

#[test]
fn test_unset_target_serializes_without_reference_key() {
    let (ctx, _) = collecting_context();
    let reference = parse(
        &ctx,
        &json!({ "dataTypeReference": { "explanation": "broken" }, "appliedTraits": ["means.x"] }),
    );
    assert_eq!(to_data(&reference), json!({ "appliedTraits": ["means.x"] }));
}

#[test]
fn test_parsing_from_many_threads() {
    let (ctx, sink) = collecting_context();
    let input = json!({
        "dataTypeReference": { "extendsDataType": "string" },
        "appliedTraits": ["means.x"]
    });

    std::thread::scope(|scope| {
        for _ in 0..8 {
            let ctx = ctx.clone();
            let input = &input;
            scope.spawn(move || {
                let reference = parse(&ctx, input);
                assert!(reference.target().is_unset());
            });
        }
    });

    assert_eq!(sink.count(StatusLevel::Error), 8);
}
