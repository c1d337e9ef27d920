//! Mock STAC API served by axum on an ephemeral port

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Clone)]
struct MockState {
    items: Arc<Vec<Value>>,
    post_search: bool,
    search_requests: Arc<AtomicUsize>,
}

/// A running mock catalog
pub struct MockStac {
    pub url: String,
    search_requests: Arc<AtomicUsize>,
}

impl MockStac {
    /// Serve `items` with a GET search endpoint
    pub async fn start(items: Vec<Value>) -> Self {
        Self::spawn(items, false).await
    }

    /// Serve `items` with a POST search endpoint and POST `next` links
    pub async fn start_post(items: Vec<Value>) -> Self {
        Self::spawn(items, true).await
    }

    async fn spawn(items: Vec<Value>, post_search: bool) -> Self {
        let search_requests = Arc::new(AtomicUsize::new(0));
        let state = MockState {
            items: Arc::new(items),
            post_search,
            search_requests: search_requests.clone(),
        };

        let app = Router::new()
            .route("/", get(landing))
            .route("/search", get(search_get).post(search_post))
            .with_state(state);

        let url = serve(app).await;
        Self {
            url,
            search_requests,
        }
    }

    /// Number of search pages served so far
    pub fn search_requests(&self) -> usize {
        self.search_requests.load(Ordering::SeqCst)
    }
}

/// Serve an arbitrary router and return its base URL
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("mock server address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server");
    });
    format!("http://{}/", addr)
}

/// A STAC item in the CMIP6 collection
pub fn item(id: &str, value: i64) -> Value {
    json!({
        "type": "Feature",
        "stac_version": "1.0.0",
        "id": id,
        "collection": "CMIP6",
        "properties": {"v": value},
        "assets": {}
    })
}

async fn landing(State(state): State<MockState>) -> Json<Value> {
    let method = if state.post_search { "POST" } else { "GET" };
    Json(json!({
        "type": "Catalog",
        "id": "mock",
        "stac_version": "1.0.0",
        "description": "mock catalog",
        "links": [
            {"rel": "self", "href": "./"},
            {"rel": "search", "href": "search", "method": method}
        ]
    }))
}

fn split(value: Option<&String>) -> Vec<String> {
    value
        .map(|v| v.split(',').map(String::from).collect())
        .unwrap_or_default()
}

fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|a| {
            a.iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn select(
    items: &[Value],
    collections: &[String],
    ids: &[String],
    limit: usize,
    page: usize,
) -> (Vec<Value>, bool) {
    let matching: Vec<&Value> = items
        .iter()
        .filter(|item| {
            collections.is_empty()
                || collections
                    .iter()
                    .any(|c| item["collection"].as_str() == Some(c.as_str()))
        })
        .filter(|item| ids.is_empty() || ids.iter().any(|i| item["id"].as_str() == Some(i.as_str())))
        .collect();

    let start = page * limit;
    let features: Vec<Value> = matching
        .iter()
        .skip(start)
        .take(limit)
        .map(|v| (*v).clone())
        .collect();
    let has_more = start + limit < matching.len();
    (features, has_more)
}

async fn search_get(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    state.search_requests.fetch_add(1, Ordering::SeqCst);

    let collections = split(params.get("collections"));
    let ids = split(params.get("ids"));
    let limit = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let page: usize = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(0);

    let (features, has_more) = select(&state.items, &collections, &ids, limit, page);

    let mut links = vec![json!({"rel": "root", "href": "/"})];
    if has_more {
        let mut query: Vec<String> = vec![format!("limit={}", limit), format!("page={}", page + 1)];
        if !collections.is_empty() {
            query.push(format!("collections={}", collections.join(",")));
        }
        if !ids.is_empty() {
            query.push(format!("ids={}", ids.join(",")));
        }
        links.push(json!({"rel": "next", "href": format!("search?{}", query.join("&"))}));
    }

    Json(json!({"type": "FeatureCollection", "features": features, "links": links}))
}

async fn search_post(State(state): State<MockState>, Json(body): Json<Value>) -> Json<Value> {
    state.search_requests.fetch_add(1, Ordering::SeqCst);

    let collections = strings(&body["collections"]);
    let ids = strings(&body["ids"]);
    let limit = body["limit"].as_u64().map_or(DEFAULT_PAGE_SIZE, |l| l as usize);
    let page = body["page"].as_u64().map_or(0, |p| p as usize);

    let (features, has_more) = select(&state.items, &collections, &ids, limit, page);

    let mut links = vec![json!({"rel": "root", "href": "/"})];
    if has_more {
        links.push(json!({
            "rel": "next",
            "href": "search",
            "method": "POST",
            "body": {"page": page + 1},
            "merge": true
        }));
    }

    Json(json!({"type": "FeatureCollection", "features": features, "links": links}))
}
