//! Text predicate for the search bar.

use crate::model::Item;

/// True when `query` is empty, or is a case-insensitive substring of the
/// item's title or description.
pub fn matches(item: &Item, query: &str) -> bool {
    matches_fields(&[Some(item.title.as_str()), item.description.as_deref()], query)
}

/// Same rule over an arbitrary set of optional fields. Absent fields never
/// match a non-empty query.
pub fn matches_fields(fields: &[Option<&str>], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}
