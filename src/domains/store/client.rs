//! Notion REST client.

use async_trait::async_trait;
use reqwest::{Client, Response, Url, header};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, instrument};

use super::{DocumentStore, StoreError, StoreResult};
use crate::core::config::NotionConfig;

/// Number of results requested from the search endpoint.
pub const SEARCH_PAGE_SIZE: u32 = 10;

/// Client for the subset of the Notion API the tools need.
///
/// The credential is fixed when the client is built and sent as a default
/// header on every request.
#[derive(Debug, Clone)]
pub struct NotionClient {
    client: Client,
    base_url: Url,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    filter: SearchFilter,
    page_size: u32,
}

#[derive(Debug, Serialize)]
struct SearchFilter {
    property: &'static str,
    value: &'static str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<Value>,
}

impl NotionClient {
    /// Build a client from configuration.
    pub fn new(config: &NotionConfig) -> StoreResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| StoreError::config("Notion API key is not configured"))?;

        let mut headers = header::HeaderMap::new();
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| StoreError::config("Invalid Notion API key format"))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::HeaderName::from_static("notion-version"),
            header::HeaderValue::from_str(&config.version)
                .map_err(|_| StoreError::config("Invalid Notion-Version value"))?,
        );

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| StoreError::config(format!("Invalid Notion base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::config(format!(
                "Notion base URL cannot be a base: {}",
                config.base_url
            )));
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, base_url })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> StoreResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::config("Notion base URL cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Turn a response into a decoded body, or the matching error.
    async fn read_json<T: DeserializeOwned>(response: Response, resource: &str) -> StoreResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(StoreError::from_response(status.as_u16(), &body, resource));
        }

        serde_json::from_str(&body).map_err(|e| StoreError::decode(e.to_string()))
    }
}

#[async_trait]
impl DocumentStore for NotionClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> StoreResult<Vec<Value>> {
        let url = self.endpoint(&["search"])?;
        debug!(url = %url, "POST search");

        let request = SearchRequest {
            query,
            filter: SearchFilter {
                property: "object",
                value: "page",
            },
            page_size: SEARCH_PAGE_SIZE,
        };

        let response = self.client.post(url).json(&request).send().await?;
        let body: SearchResponse = Self::read_json(response, "search").await?;

        debug!(count = body.results.len(), "Search returned results");
        Ok(body.results)
    }

    #[instrument(skip(self))]
    async fn retrieve(&self, page_id: &str) -> StoreResult<Value> {
        let url = self.endpoint(&["pages", page_id])?;
        debug!(url = %url, "GET page");

        let response = self.client.get(url).send().await?;
        Self::read_json(response, page_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_client(server: &MockServer) -> NotionClient {
        NotionClient::new(&NotionConfig {
            api_key: Some("secret_test".to_string()),
            base_url: format!("{}/v1/", server.uri()),
            version: "2022-06-28".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_new_requires_api_key() {
        let result = NotionClient::new(&NotionConfig::default());
        assert!(matches!(result, Err(StoreError::Config(_))));
    }

    #[test]
    fn test_new_rejects_bad_base_url() {
        let result = NotionClient::new(&NotionConfig {
            api_key: Some("secret_test".to_string()),
            base_url: "not a url".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(StoreError::Config(_))));
    }

    #[tokio::test]
    async fn test_search_sends_page_filter_and_headers() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/search"))
            .and(header("Authorization", "Bearer secret_test"))
            .and(header("Notion-Version", "2022-06-28"))
            .and(body_json(json!({
                "query": "roadmap",
                "filter": { "property": "object", "value": "page" },
                "page_size": 10
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "results": [
                    { "object": "page", "id": "p1" },
                    { "object": "page", "id": "p2" }
                ],
                "next_cursor": "cursor-2",
                "has_more": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let results = client.search("roadmap").await.unwrap();

        let ids: Vec<_> = results.iter().map(|r| r["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[tokio::test]
    async fn test_retrieve_returns_body_unchanged() {
        let server = MockServer::start().await;
        let page = json!({
            "object": "page",
            "id": "abc123",
            "properties": { "title": { "title": [{ "plain_text": "Roadmap" }] } }
        });

        Mock::given(method("GET"))
            .and(path("/v1/pages/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page.clone()))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let result = client.retrieve("abc123").await.unwrap();
        assert_eq!(result, page);
    }

    #[tokio::test]
    async fn test_retrieve_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/pages/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "object": "error",
                "status": 404,
                "code": "object_not_found",
                "message": "Could not find page with ID: missing."
            })))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let err = client.retrieve("missing").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "missing"));
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "object": "error",
                "status": 401,
                "code": "unauthorized",
                "message": "API token is invalid."
            })))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let err = client.search("anything").await.unwrap_err();
        assert!(matches!(err, StoreError::Unauthorized));
    }

    #[tokio::test]
    async fn test_search_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "object": "list" })))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let err = client.search("roadmap").await.unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[tokio::test]
    async fn test_network_failure() {
        // Reserve a port, then release it so connections are refused.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = NotionClient::new(&NotionConfig {
            api_key: Some("secret_test".to_string()),
            base_url: format!("http://127.0.0.1:{}/v1/", port),
            ..Default::default()
        })
        .unwrap();

        let err = client.retrieve("abc123").await.unwrap_err();
        assert!(matches!(err, StoreError::Network(_)));
    }
}
