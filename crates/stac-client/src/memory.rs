//! In-memory catalog

use crate::error::StacResult;
use crate::query::SearchQuery;
use crate::{item_id, Item, ItemSearch};
use async_trait::async_trait;
use serde_json::Value;

/// A catalog backed by a list of items held in memory.
///
/// Searches filter on the item's `collection` field and `id`, in insertion
/// order. Duplicate ids are kept, so a catalog can hold ambiguous data.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    endpoint: String,
    items: Vec<Item>,
}

impl MemoryCatalog {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            items: Vec::new(),
        }
    }

    /// Add an item. Values that are not JSON objects are ignored.
    pub fn with_item(mut self, item: Value) -> Self {
        self.insert(item);
        self
    }

    pub fn insert(&mut self, item: Value) {
        if let Value::Object(item) = item {
            self.items.push(item);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn matches(query: &SearchQuery, item: &Item) -> bool {
        let in_collection = query.collections.is_empty()
            || item
                .get("collection")
                .and_then(Value::as_str)
                .is_some_and(|c| query.collections.iter().any(|q| q == c));
        let has_id = query.ids.is_empty()
            || item_id(item).is_some_and(|id| query.ids.iter().any(|q| q == id));
        in_collection && has_id
    }
}

#[async_trait]
impl ItemSearch for MemoryCatalog {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn search(&self, query: &SearchQuery) -> StacResult<Vec<Item>> {
        Ok(self
            .items
            .iter()
            .filter(|item| Self::matches(query, item))
            .take(query.max_items.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }
}
