//! STAC API client
//!
//! Just enough of the STAC API to run item searches against a catalog:
//!
//! - [`StacClient::open`] reads the landing page, checks that it describes a
//!   catalog and locates its `search` endpoint
//! - [`ItemSearch::search`] runs a [`SearchQuery`], following `next` links
//!   until the requested number of items has been collected
//!
//! [`MemoryCatalog`] implements the same [`ItemSearch`] trait over items held
//! in memory, so code written against the trait can run without a server.

mod client;
mod error;
mod memory;
mod query;

use async_trait::async_trait;
use serde_json::{Map, Value};

pub use client::{StacClient, DEFAULT_TIMEOUT};
pub use error::{StacError, StacResult};
pub use memory::MemoryCatalog;
pub use query::SearchQuery;

/// A catalog item as returned by the API: a JSON object with a string `id`
pub type Item = Map<String, Value>;

/// The `id` of an item, if it has a string one
pub fn item_id(item: &Item) -> Option<&str> {
    item.get("id").and_then(Value::as_str)
}

/// Anything that can answer a STAC item search
#[async_trait]
pub trait ItemSearch: Send + Sync {
    /// Address of the catalog, for logging
    fn endpoint(&self) -> &str;

    /// Run `query` and return the matching items in the order the catalog
    /// yields them, capped at the query's `max_items`
    async fn search(&self, query: &SearchQuery) -> StacResult<Vec<Item>>;
}
