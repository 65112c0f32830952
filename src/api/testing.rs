//! In-memory transport for tests

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use serde_json::Value;

use super::transport::{CacheMode, Credentials, HttpRequest, Method, RawResponse, RequestBody, Transport};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub path: String,
    pub method: Method,
    pub credentials: Credentials,
    pub cache: CacheMode,
    pub body: RequestBody,
}

impl RecordedRequest {
    pub fn json_body(&self) -> Option<Value> {
        match &self.body {
            RequestBody::Json(s) => serde_json::from_str(s).ok(),
            _ => None,
        }
    }
}

/// Replays canned responses keyed by path (query ignored)
///
/// Several responses for one path are served in order; the last one
/// repeats. Unknown paths fail as if the network were down.
#[derive(Debug, Default)]
pub struct FakeTransport {
    responses: RefCell<HashMap<String, VecDeque<RawResponse>>>,
    log: RefCell<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(RawResponse { status, body: body.to_string() });
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.log.borrow().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.log.borrow().iter().map(|r| r.path.clone()).collect()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, url: &str, request: &HttpRequest) -> Result<RawResponse, String> {
        self.log.borrow_mut().push(RecordedRequest {
            url: url.to_string(),
            path: request.path.clone(),
            method: request.method,
            credentials: request.credentials,
            cache: request.cache,
            body: request.body.clone(),
        });

        let key = request.path.split('?').next().unwrap_or_default();
        let mut responses = self.responses.borrow_mut();
        let queue = responses.get_mut(key).ok_or_else(|| format!("connection refused: {}", key))?;
        if queue.len() > 1 {
            queue.pop_front().ok_or_else(|| "exhausted".to_string())
        } else {
            queue.front().cloned().ok_or_else(|| "exhausted".to_string())
        }
    }
}
