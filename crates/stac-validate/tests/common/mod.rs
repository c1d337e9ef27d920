//! Mock STAC endpoints for validation tests

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// A running mock catalog serving a fixed list of items
pub struct MockStac {
    pub url: String,
}

impl MockStac {
    pub async fn start(items: Vec<Value>) -> Self {
        let app = Router::new()
            .route("/", get(landing))
            .route("/search", get(search))
            .with_state(Arc::new(items));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server");
        });

        Self {
            url: format!("http://{}/", addr),
        }
    }
}

/// A CMIP6 item whose only varying field is `properties.v`
pub fn item(id: &str, v: i64) -> Value {
    json!({
        "type": "Feature",
        "stac_version": "1.0.0",
        "id": id,
        "collection": "CMIP6",
        "geometry": null,
        "properties": {"v": v},
        "links": [],
        "assets": {}
    })
}

async fn landing() -> Json<Value> {
    Json(json!({
        "type": "Catalog",
        "id": "mock",
        "stac_version": "1.0.0",
        "description": "mock catalog",
        "links": [{"rel": "search", "href": "search", "method": "GET"}]
    }))
}

// Single page only; tests keep item counts under the limit.
async fn search(
    State(items): State<Arc<Vec<Value>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let collection = params.get("collections").cloned();
    let id = params.get("ids").cloned();
    let limit = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(usize::MAX);

    let features: Vec<Value> = items
        .iter()
        .filter(|item| {
            collection
                .as_deref()
                .map_or(true, |c| item["collection"].as_str() == Some(c))
        })
        .filter(|item| id.as_deref().map_or(true, |i| item["id"].as_str() == Some(i)))
        .take(limit)
        .cloned()
        .collect();

    Json(json!({"type": "FeatureCollection", "features": features, "links": []}))
}
