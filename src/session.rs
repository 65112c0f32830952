//! Session Guard
//!
//! Decides, from the session probe, whether a protected page may render.

use crate::api::{self, ApiClient, Transport};
use crate::config::ConsoleConfig;
use crate::error::ConsoleResult;
use crate::models::{Session, UserType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Right role: render, showing this username
    Proceed { username: String },
    /// Not logged in, or the probe failed
    RedirectToLogin,
    /// Logged in as the other role
    RedirectTo(UserType),
}

/// Branch on a probe result for a page that requires `required`
pub fn evaluate(probe: ConsoleResult<Session>, required: UserType) -> GuardOutcome {
    let session = match probe {
        Ok(s) => s,
        Err(e) => {
            log::error!("[SESSION] Session check failed: {}", e);
            return GuardOutcome::RedirectToLogin;
        }
    };
    if !session.logged_in {
        return GuardOutcome::RedirectToLogin;
    }
    match session.user_type {
        Some(role) if role == required => GuardOutcome::Proceed {
            username: session.username.unwrap_or_default(),
        },
        Some(other) => GuardOutcome::RedirectTo(other),
        None => GuardOutcome::RedirectToLogin,
    }
}

/// Probe the session and decide; the only request issued is the probe
pub async fn guard<T: Transport>(client: &ApiClient<T>, required: UserType) -> GuardOutcome {
    evaluate(api::check_session(client).await, required)
}

/// Landing page of a role
pub fn home_page(config: &ConsoleConfig, role: UserType) -> &str {
    match role {
        UserType::Admin => &config.admin_page,
        UserType::Reviewer => &config.reviewer_page,
    }
}

/// Where a redirecting outcome goes
pub fn redirect_target<'a>(config: &'a ConsoleConfig, outcome: &GuardOutcome) -> Option<&'a str> {
    match outcome {
        GuardOutcome::Proceed { .. } => None,
        GuardOutcome::RedirectToLogin => Some(&config.login_page),
        GuardOutcome::RedirectTo(role) => Some(home_page(config, *role)),
    }
}

/// Navigate the browser
pub fn navigate(url: &str) {
    log::info!("[SESSION] Redirecting to {}", url);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            log::error!("[SESSION] Redirect failed: {:?}", e);
        }
    }
}
