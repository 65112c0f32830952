//! Auth Endpoints
//!
//! Login, logout and the session probe.

use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, Transport};
use crate::error::{ConsoleError, ConsoleResult};
use crate::models::{LoginResponse, Session};

pub const LOGIN: &str = "/api/login";
pub const LOGOUT: &str = "/api/logout";
pub const CHECK_SESSION: &str = "/api/check-session";

#[derive(Serialize)]
struct LoginArgs<'a> {
    username: &'a str,
    password: &'a str,
}

pub async fn login<T: Transport>(client: &ApiClient<T>, username: &str, password: &str) -> ConsoleResult<LoginResponse> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(ConsoleError::validation("Username and password are required"));
    }
    client.post_json(LOGIN, &LoginArgs { username: username.trim(), password }).await
}

pub async fn logout<T: Transport>(client: &ApiClient<T>) -> ConsoleResult<()> {
    let _: Value = client.post_json(LOGOUT, &serde_json::json!({})).await?;
    Ok(())
}

/// Probe the session; a 401 means "not logged in", not a failure
pub async fn check_session<T: Transport>(client: &ApiClient<T>) -> ConsoleResult<Session> {
    match client.get_json::<Session>(CHECK_SESSION).await {
        Err(e) if e.status() == Some(401) => Ok(Session::anonymous()),
        other => other,
    }
}
