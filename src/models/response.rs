//! Response shapes following Contentful's GraphQL conventions.
//!
//! Every response nests its payload under a top-level `data` field, and
//! collection queries return `{ "items": [...] }` where each item carries a
//! `sys` block with its id. These generic wrappers let callers describe just
//! the part of the schema they query.

// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// The envelope that wraps every GraphQL response: `{ "data": T }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentfulCollection<T> {
    pub data: T,
}

/// A collection field, e.g. `lessonCopyCollection { items { ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentfulCollectionItem<T> {
    pub items: Vec<T>,
}

/// The `sys` metadata block of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentfulSys {
    pub id: String,
}

/// The base shape of a single entry. Embed it (or implement
/// [`ContentfulItemId`]) in your own item types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentfulItem {
    pub sys: ContentfulSys,
}

/// Anything that exposes a Contentful entry id.
pub trait ContentfulItemId {
    fn id(&self) -> &str;
}

impl ContentfulItemId for ContentfulItem {
    fn id(&self) -> &str {
        &self.sys.id
    }
}

impl ContentfulItemId for ContentfulSys {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Collect the ids of `items`, preserving order.
pub fn item_ids<T: ContentfulItemId>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| item.id().to_string()).collect()
}
