//! Tagging Console App
//!
//! Builds the page context and mounts the page named by
//! `<body data-page="...">`, falling back to the URL path.

use leptos::prelude::*;

use crate::api::{BrowserTransport, Client};
use crate::components::ToastHost;
use crate::config::ConsoleConfig;
use crate::context::PageContext;
use crate::pages::{AdminPage, LoginPage, ReviewerPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsolePage {
    Login,
    Admin,
    Reviewer,
}

impl ConsolePage {
    fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "login" => Some(ConsolePage::Login),
            "admin" => Some(ConsolePage::Admin),
            "reviewer" | "review" => Some(ConsolePage::Reviewer),
            _ => None,
        }
    }
}

/// Pick the page from the body marker, else from the path
pub fn resolve_page(marker: Option<&str>, path: &str, config: &ConsoleConfig) -> ConsolePage {
    if let Some(page) = marker.and_then(ConsolePage::parse) {
        return page;
    }
    if path == config.admin_page {
        ConsolePage::Admin
    } else if path == config.reviewer_page {
        ConsolePage::Reviewer
    } else {
        ConsolePage::Login
    }
}

fn current_page(config: &ConsoleConfig) -> ConsolePage {
    let window = web_sys::window();
    let marker = window
        .as_ref()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|b| b.get_attribute("data-page"));
    let path = window
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    resolve_page(marker.as_deref(), &path, config)
}

#[component]
pub fn App(config: ConsoleConfig) -> impl IntoView {
    let which = current_page(&config);
    log::info!("[APP] Mounting {:?} page", which);

    let client = Client::new(BrowserTransport, config.api_base.clone());
    provide_context(PageContext::new(client, config));

    view! {
        <ToastHost />
        {match which {
            ConsolePage::Login => view! { <LoginPage /> }.into_any(),
            ConsolePage::Admin => view! { <AdminPage /> }.into_any(),
            ConsolePage::Reviewer => view! { <ReviewerPage /> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_wins_over_path() {
        let config = ConsoleConfig::default();
        assert_eq!(resolve_page(Some("reviewer"), "/admin.html", &config), ConsolePage::Reviewer);
        assert_eq!(resolve_page(Some(" Admin "), "/", &config), ConsolePage::Admin);
    }

    #[test]
    fn test_path_fallback() {
        let config = ConsoleConfig::default();
        assert_eq!(resolve_page(None, "/admin.html", &config), ConsolePage::Admin);
        assert_eq!(resolve_page(None, "/reviewer.html", &config), ConsolePage::Reviewer);
        assert_eq!(resolve_page(Some("unknown"), "/", &config), ConsolePage::Login);
        assert_eq!(resolve_page(None, "/index.html", &config), ConsolePage::Login);
    }
}
