//! HTTP client for STAC API endpoints

use crate::error::{StacError, StacResult};
use crate::query::SearchQuery;
use crate::{Item, ItemSearch};
use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::debug;

/// Timeout applied to every request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A link object as found in landing pages and item pages
#[derive(Debug, Clone, Deserialize)]
struct Link {
    rel: String,
    href: String,
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    body: Option<Map<String, Value>>,
    #[serde(default)]
    merge: bool,
}

impl Link {
    fn is_post(&self) -> bool {
        self.method
            .as_deref()
            .is_some_and(|m| m.eq_ignore_ascii_case("POST"))
    }
}

#[derive(Debug, Deserialize)]
struct LandingPage {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    stac_version: Option<String>,
    #[serde(default)]
    links: Vec<Link>,
}

/// One page of search results (a GeoJSON FeatureCollection)
#[derive(Debug, Deserialize)]
struct ItemPage {
    features: Vec<Value>,
    #[serde(default)]
    links: Vec<Link>,
}

/// A single page fetch: where to go and how
#[derive(Debug, Clone, PartialEq)]
enum PageRequest {
    Get(Url),
    Post(Url, Map<String, Value>),
}

impl PageRequest {
    fn url(&self) -> &Url {
        match self {
            PageRequest::Get(url) | PageRequest::Post(url, _) => url,
        }
    }

    /// Request for the page after this one, if `links` has a `next` link
    fn next(&self, links: &[Link]) -> StacResult<Option<PageRequest>> {
        let Some(link) = links.iter().find(|l| l.rel == "next") else {
            return Ok(None);
        };
        let url = resolve(self.url(), &link.href)?;

        if !link.is_post() {
            return Ok(Some(PageRequest::Get(url)));
        }

        let mut body = match (self, link.merge) {
            (PageRequest::Post(_, previous), true) => previous.clone(),
            _ => Map::new(),
        };
        if let Some(link_body) = &link.body {
            body.extend(link_body.clone());
        }
        Ok(Some(PageRequest::Post(url, body)))
    }
}

fn parse_url(url: &str) -> StacResult<Url> {
    Url::parse(url).map_err(|e| StacError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

fn resolve(base: &Url, href: &str) -> StacResult<Url> {
    base.join(href).map_err(|e| StacError::InvalidUrl {
        url: href.to_string(),
        reason: e.to_string(),
    })
}

/// Client bound to one STAC API endpoint
#[derive(Clone)]
pub struct StacClient {
    client: Client,
    endpoint: String,
    search_url: Url,
    search_method: Method,
}

impl StacClient {
    /// Connect to a STAC API and read its landing page.
    ///
    /// Fails if the endpoint is unreachable, does not answer with JSON, or
    /// the landing page does not look like a STAC catalog.
    pub async fn open(endpoint: &str) -> StacResult<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|source| StacError::ClientBuild { source })?;

        // Relative links resolve against the landing page as a directory
        let mut base = parse_url(endpoint)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let landing: LandingPage = fetch_json(&client, Method::GET, base.clone(), None).await?;
        let is_catalog = landing.stac_version.is_some()
            || landing.kind.as_deref() == Some("Catalog");
        if !is_catalog {
            return Err(StacError::NotACatalog {
                url: endpoint.to_string(),
                reason: "landing page declares neither stac_version nor type Catalog"
                    .to_string(),
            });
        }

        let (search_url, search_method) = match landing.links.iter().find(|l| l.rel == "search") {
            Some(link) => {
                let method = if link.is_post() {
                    Method::POST
                } else {
                    Method::GET
                };
                (resolve(&base, &link.href)?, method)
            }
            None => (resolve(&base, "search")?, Method::GET),
        };

        debug!(
            endpoint,
            search = %search_url,
            method = %search_method,
            "Opened STAC catalog"
        );

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            search_url,
            search_method,
        })
    }

    /// The endpoint this client was opened on
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The resolved item search URL
    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    fn first_page(&self, query: &SearchQuery) -> PageRequest {
        if self.search_method == Method::POST {
            return PageRequest::Post(self.search_url.clone(), query.to_body());
        }

        let mut url = self.search_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.to_params() {
                pairs.append_pair(key, &value);
            }
        }
        PageRequest::Get(url)
    }

    async fn fetch_page(&self, request: &PageRequest) -> StacResult<ItemPage> {
        match request {
            PageRequest::Get(url) => fetch_json(&self.client, Method::GET, url.clone(), None).await,
            PageRequest::Post(url, body) => {
                fetch_json(&self.client, Method::POST, url.clone(), Some(body)).await
            }
        }
    }
}

#[async_trait]
impl ItemSearch for StacClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn search(&self, query: &SearchQuery) -> StacResult<Vec<Item>> {
        let max_items = query.max_items.unwrap_or(usize::MAX);
        let mut items = Vec::new();
        let mut next = Some(self.first_page(query));

        while let Some(request) = next.take() {
            if items.len() >= max_items {
                break;
            }

            let page = self.fetch_page(&request).await?;
            debug!(
                url = %request.url(),
                features = page.features.len(),
                "Fetched search page"
            );
            if page.features.is_empty() {
                break;
            }

            for feature in page.features.into_iter().take(max_items - items.len()) {
                items.push(into_item(request.url(), feature)?);
            }

            next = request.next(&page.links)?.filter(|n| *n != request);
        }

        Ok(items)
    }
}

fn into_item(url: &Url, feature: Value) -> StacResult<Item> {
    match feature {
        Value::Object(item) if crate::item_id(&item).is_some() => Ok(item),
        _ => Err(StacError::InvalidResponse {
            url: url.to_string(),
            reason: "feature is not an object with a string id".to_string(),
        }),
    }
}

async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    method: Method,
    url: Url,
    body: Option<&Map<String, Value>>,
) -> StacResult<T> {
    let url_str = url.to_string();
    let mut request = client.request(method, url);
    if let Some(body) = body {
        request = request.json(body);
    }

    let response = request.send().await.map_err(|source| StacError::Http {
        url: url_str.clone(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(StacError::Status {
            url: url_str,
            status: status.as_u16(),
        });
    }

    let raw_body = response.text().await.map_err(|source| StacError::Http {
        url: url_str.clone(),
        source,
    })?;
    serde_json::from_str(&raw_body).map_err(|e| StacError::InvalidResponse {
        url: url_str,
        reason: e.to_string(),
    })
}
