//! API Client
//!
//! Every request from a page goes through one `ApiClient`. It always sends
//! cookies, never uses the HTTP cache and, on `/api` paths, insists on JSON:
//! callers get a parsed body or a `ConsoleError` carrying the server's
//! message.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::transport::{CacheMode, Credentials, HttpRequest, Method, RawResponse, RequestBody, Transport, UploadFile};
use crate::error::{ConsoleError, ConsoleResult};

/// Body characters kept when logging a non-JSON API response
const SNIPPET_CHARS: usize = 600;

/// Interpreted response
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Parsed body of an API path
    Json { status: u16, value: Value },
    /// Untouched response of a non-API path
    Raw(RawResponse),
}

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
}

/// True when the path has an `/api` segment (`/api` then `/` or the end)
pub fn is_api_path(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or("");
    // Drop scheme and host of absolute URLs
    let path = match path.find("://") {
        Some(i) => {
            let rest = &path[i + 3..];
            rest.find('/').map(|j| &rest[j..]).unwrap_or("")
        }
        None => path,
    };
    path.match_indices("/api").any(|(i, m)| {
        let after = &path[i + m.len()..];
        after.is_empty() || after.starts_with('/')
    })
}

/// Server message of an error body: `error`, then `detail`, then `message`
pub fn error_message(body: &Value, status: u16) -> String {
    ["error", "detail", "message"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str).filter(|s| !s.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status))
}

fn snippet(body: &str) -> String {
    body.chars().take(SNIPPET_CHARS).collect()
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request with the credential and cache policy applied
    pub async fn execute(&self, mut request: HttpRequest) -> ConsoleResult<ApiResponse> {
        request.credentials = Credentials::Include;
        request.cache = CacheMode::NoStore;

        let url = format!("{}{}", self.base_url, request.path);
        let raw = self.transport.send(&url, &request).await.map_err(|e| {
            log::error!("[API] {} {} failed: {}", request.method.as_str(), request.path, e);
            ConsoleError::Network(e)
        })?;

        if !is_api_path(&request.path) {
            return Ok(ApiResponse::Raw(raw));
        }

        let value: Value = match serde_json::from_str(&raw.body) {
            Ok(v) => v,
            Err(_) => {
                log::error!(
                    "[API] Non-JSON response from {} (status {}): {}",
                    request.path,
                    raw.status,
                    snippet(&raw.body)
                );
                return Err(ConsoleError::Protocol {
                    path: request.path.split('?').next().unwrap_or_default().to_string(),
                    status: raw.status,
                });
            }
        };

        if !raw.is_success() {
            let message = error_message(&value, raw.status);
            log::warn!("[API] {} {} -> {}: {}", request.method.as_str(), request.path, raw.status, message);
            return Err(ConsoleError::Http { status: raw.status, message });
        }

        Ok(ApiResponse::Json { status: raw.status, value })
    }

    async fn json<R: DeserializeOwned>(&self, request: HttpRequest) -> ConsoleResult<R> {
        let path = request.path.clone();
        match self.execute(request).await? {
            ApiResponse::Json { value, .. } => Ok(serde_json::from_value(value)?),
            ApiResponse::Raw(raw) => {
                // Non-API path asked for JSON: parse it without the strict checks
                serde_json::from_str(&raw.body).map_err(|e| {
                    log::warn!("[API] {} is not JSON: {}", path, e);
                    ConsoleError::Decode(e.to_string())
                })
            }
        }
    }

    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> ConsoleResult<R> {
        self.json(HttpRequest::new(Method::Get, path)).await
    }

    pub async fn post_json<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> ConsoleResult<R> {
        let body = serde_json::to_string(body)?;
        self.json(HttpRequest::new(Method::Post, path).with_body(RequestBody::Json(body))).await
    }

    pub async fn post_file<R: DeserializeOwned>(&self, path: &str, field: &str, file: UploadFile) -> ConsoleResult<R> {
        let body = RequestBody::File { field: field.to_string(), file };
        self.json(HttpRequest::new(Method::Post, path).with_body(body)).await
    }

    pub async fn delete_json<R: DeserializeOwned>(&self, path: &str) -> ConsoleResult<R> {
        self.json(HttpRequest::new(Method::Delete, path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeTransport;
    use serde_json::json;

    #[test]
    fn test_is_api_path() {
        assert!(is_api_path("/api/tagging/stats"));
        assert!(is_api_path("/api"));
        assert!(is_api_path("/api?x=1"));
        assert!(is_api_path("https://host.example/api/login"));
        assert!(is_api_path("/v1/api/users"));
        assert!(!is_api_path("/apis/list"));
        assert!(!is_api_path("/static/app.js"));
        assert!(!is_api_path("/admin.html"));
        assert!(!is_api_path("https://api.example.com/index.html"));
    }

    #[test]
    fn test_error_message_precedence() {
        assert_eq!(error_message(&json!({"error": "e", "detail": "d", "message": "m"}), 400), "e");
        assert_eq!(error_message(&json!({"detail": "d", "message": "m"}), 400), "d");
        assert_eq!(error_message(&json!({"message": "m"}), 400), "m");
        assert_eq!(error_message(&json!({"error": 5}), 503), "HTTP 503");
        assert_eq!(error_message(&json!([1, 2]), 500), "HTTP 500");
    }

    #[tokio::test]
    async fn test_every_request_includes_credentials_and_skips_cache() {
        let fake = FakeTransport::new().respond("/api/tagging/stats", 200, r#"{"total_data": 3}"#);
        let client = ApiClient::new(fake, "https://review.example/");

        let value: Value = client.get_json("/api/tagging/stats").await.unwrap();
        assert_eq!(value["total_data"], 3);

        let sent = client.transport().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "https://review.example/api/tagging/stats");
        assert_eq!(sent[0].credentials, Credentials::Include);
        assert_eq!(sent[0].cache, CacheMode::NoStore);
    }

    #[tokio::test]
    async fn test_http_error_carries_server_message() {
        let fake = FakeTransport::new().respond("/api/login", 401, r#"{"detail": "wrong password"}"#);
        let client = ApiClient::new(fake, "");

        let err = client.post_json::<_, Value>("/api/login", &json!({})).await.unwrap_err();
        assert_eq!(err, ConsoleError::Http { status: 401, message: "wrong password".to_string() });
    }

    #[tokio::test]
    async fn test_http_error_without_message_falls_back_to_status() {
        let fake = FakeTransport::new().respond("/api/users", 500, "{}");
        let client = ApiClient::new(fake, "");

        let err = client.get_json::<Value>("/api/users").await.unwrap_err();
        assert_eq!(err.user_message(), "HTTP 500");
    }

    #[tokio::test]
    async fn test_non_json_on_api_path_is_protocol_error() {
        let fake = FakeTransport::new().respond("/api/tagging/data", 200, "<html>login</html>");
        let client = ApiClient::new(fake, "");

        let err = client.get_json::<Value>("/api/tagging/data?page=1").await.unwrap_err();
        assert_eq!(err, ConsoleError::Protocol { path: "/api/tagging/data".to_string(), status: 200 });
    }

    #[tokio::test]
    async fn test_non_api_path_passes_through() {
        let fake = FakeTransport::new().respond("/admin.html", 404, "<html>missing</html>");
        let client = ApiClient::new(fake, "");

        let resp = client.execute(HttpRequest::new(Method::Get, "/admin.html")).await.unwrap();
        assert_eq!(resp, ApiResponse::Raw(RawResponse { status: 404, body: "<html>missing</html>".to_string() }));
    }

    #[tokio::test]
    async fn test_network_failure() {
        let client = ApiClient::new(FakeTransport::new(), "");
        let err = client.get_json::<Value>("/api/tagging/stats").await.unwrap_err();
        assert!(matches!(err, ConsoleError::Network(_)));
    }

    #[tokio::test]
    async fn test_json_body_is_sent_for_posts() {
        let fake = FakeTransport::new().respond("/api/contact", 200, r#"{"message": "ok"}"#);
        let client = ApiClient::new(fake, "");

        let _: Value = client.post_json("/api/contact", &json!({"subject": "hi"})).await.unwrap();
        let sent = client.transport().requests();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].json_body(), Some(json!({"subject": "hi"})));
    }
}
