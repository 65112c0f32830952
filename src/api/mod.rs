//! Backend API
//!
//! Typed wrappers over the REST endpoints, organized by domain.

mod auth;
mod client;
mod tagging;
mod transport;
mod users;

#[cfg(test)]
pub mod testing;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

pub use auth::*;
pub use client::{error_message, is_api_path, ApiClient, ApiResponse};
pub use tagging::*;
pub use transport::{
    BrowserTransport, CacheMode, Credentials, HttpRequest, Method, RawResponse, RequestBody, Transport, UploadFile,
};
pub use users::*;

/// The client every page component uses
pub type Client = ApiClient<BrowserTransport>;

/// Build `path?k=v&...` with encoded values
pub(crate) fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, NON_ALPHANUMERIC)))
        .collect();
    format!("{}?{}", path, query.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_encodes_values() {
        assert_eq!(with_query("/api/x", &[]), "/api/x");
        assert_eq!(
            with_query("/api/x", &[("status", "pending".into()), ("q", "a b&c".into())]),
            "/api/x?status=pending&q=a%20b%26c"
        );
    }
}
