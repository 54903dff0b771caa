//! Ordered collections owned by model objects.

/// An ordered, owned collection of model objects.
///
/// Insertion order is preserved; it is significant for trait lists.
#[derive(Debug, Clone, PartialEq)]
pub struct CdmCollection<T> {
    items: Vec<T>,
}

impl<T> Default for CdmCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> CdmCollection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single item
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Append every item of `list` in order. `None` leaves the collection untouched.
    pub fn extend_ordered(&mut self, list: Option<Vec<T>>) {
        if let Some(list) = list {
            self.items.extend(list);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for CdmCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for CdmCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a CdmCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for CdmCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
