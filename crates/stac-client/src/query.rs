//! Item search parameters

use serde_json::{Map, Value};

/// Parameters of an item search.
///
/// `limit` is the page size sent to the server; `max_items` caps the total
/// number of items collected across pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub collections: Vec<String>,
    pub ids: Vec<String>,
    pub limit: Option<usize>,
    pub max_items: Option<usize>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the search to a collection
    pub fn collection(mut self, name: impl Into<String>) -> Self {
        self.collections.push(name.into());
        self
    }

    /// Page size requested from the server
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Stop after this many items in total
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// The same query narrowed to a single item id
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self {
            ids: vec![id.into()],
            ..self.clone()
        }
    }

    /// Query string parameters for a GET search
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.collections.is_empty() {
            params.push(("collections", self.collections.join(",")));
        }
        if !self.ids.is_empty() {
            params.push(("ids", self.ids.join(",")));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }

    /// JSON body for a POST search
    pub fn to_body(&self) -> Map<String, Value> {
        let mut body = Map::new();
        if !self.collections.is_empty() {
            body.insert("collections".to_string(), self.collections.clone().into());
        }
        if !self.ids.is_empty() {
            body.insert("ids".to_string(), self.ids.clone().into());
        }
        if let Some(limit) = self.limit {
            body.insert("limit".to_string(), limit.into());
        }
        body
    }
}
