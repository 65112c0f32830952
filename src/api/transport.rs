//! HTTP Transport
//!
//! The seam between the API client and the network. `BrowserTransport`
//! issues real `fetch` calls; tests use a fake.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    Include,
    SameOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    NoStore,
    Default,
}

/// A file chosen in an `<input type="file">`
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    /// Browser handle; absent in tests
    pub blob: Option<web_sys::File>,
}

impl UploadFile {
    pub fn from_browser(file: web_sys::File) -> Self {
        Self { name: file.name(), blob: Some(file) }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), blob: None }
    }
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(String),
    /// Multipart form with a single file field
    File { field: String, file: UploadFile },
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Path plus query, relative to the API base
    pub path: String,
    pub body: RequestBody,
    pub credentials: Credentials,
    pub cache: CacheMode,
}

impl HttpRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: RequestBody::Empty,
            credentials: Credentials::SameOrigin,
            cache: CacheMode::Default,
        }
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }
}

/// Status and body text of a response, before any interpretation
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait Transport {
    /// Send a request; `Err` only when no response was received
    async fn send(&self, url: &str, request: &HttpRequest) -> Result<RawResponse, String>;
}

/// `window.fetch` transport
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

fn js_err(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, url: &str, request: &HttpRequest) -> Result<RawResponse, String> {
        let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

        let init = web_sys::RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_credentials(match request.credentials {
            Credentials::Include => web_sys::RequestCredentials::Include,
            Credentials::SameOrigin => web_sys::RequestCredentials::SameOrigin,
        });
        init.set_cache(match request.cache {
            CacheMode::NoStore => web_sys::RequestCache::NoStore,
            CacheMode::Default => web_sys::RequestCache::Default,
        });

        match &request.body {
            RequestBody::Empty => {}
            RequestBody::Json(json) => {
                let headers = web_sys::Headers::new().map_err(js_err)?;
                headers.set("Content-Type", "application/json").map_err(js_err)?;
                init.set_headers(&headers);
                init.set_body(&JsValue::from_str(json));
            }
            RequestBody::File { field, file } => {
                // No Content-Type: the browser writes the multipart boundary
                let form = web_sys::FormData::new().map_err(js_err)?;
                let blob = file.blob.as_ref().ok_or_else(|| "file handle missing".to_string())?;
                form.append_with_blob_and_filename(field, blob, &file.name).map_err(js_err)?;
                init.set_body(&form);
            }
        }

        let resp_value = JsFuture::from(window.fetch_with_str_and_init(url, &init)).await.map_err(js_err)?;
        let resp: web_sys::Response = resp_value.dyn_into().map_err(js_err)?;
        let status = resp.status();
        let text_promise = resp.text().map_err(js_err)?;
        let body = JsFuture::from(text_promise).await.map_err(js_err)?.as_string().unwrap_or_default();

        Ok(RawResponse { status, body })
    }
}
