//! Admin Dashboard Store
//!
//! Uses Leptos reactive_stores so each widget re-renders only when its own
//! field changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, Client};
use crate::models::{DailyStats, OverallStats, ReviewerStat, UploadSession, User};
use crate::views::Widget;

/// Admin dashboard widgets, each loaded independently
#[derive(Clone, Debug, Default, Store)]
pub struct AdminDashboard {
    pub overall: Widget<OverallStats>,
    pub daily: Widget<DailyStats>,
    pub reviewers: Widget<Vec<ReviewerStat>>,
    pub sessions: Widget<Vec<UploadSession>>,
    pub users: Widget<Vec<User>>,
}

pub type DashboardStore = Store<AdminDashboard>;

pub fn use_dashboard() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Loaders
// ========================
// Each loader spawns its own request so one failure never blocks another.

pub fn load_overall(store: DashboardStore, client: Client) {
    spawn_local(async move {
        let result = api::get_stats(&client).await;
        *store.overall().write() = Widget::from_result(result, "overall stats");
    });
}

pub fn load_daily(store: DashboardStore, client: Client) {
    spawn_local(async move {
        let result = api::get_daily_stats(&client).await;
        *store.daily().write() = Widget::from_result(result, "daily stats");
    });
}

pub fn load_reviewers(store: DashboardStore, client: Client) {
    spawn_local(async move {
        let result = api::get_reviewer_stats(&client).await;
        *store.reviewers().write() = Widget::from_result(result, "reviewer stats");
    });
}

pub fn load_sessions(store: DashboardStore, client: Client, limit: usize) {
    spawn_local(async move {
        let result = api::list_upload_sessions(&client, limit).await;
        *store.sessions().write() = Widget::from_result(result, "upload sessions");
    });
}

pub fn load_users(store: DashboardStore, client: Client) {
    spawn_local(async move {
        let result = api::list_users(&client).await;
        *store.users().write() = Widget::from_result(result, "users");
    });
}

/// Refresh every widget
pub fn load_all(store: DashboardStore, client: Client, sessions_limit: usize) {
    log::debug!("[DASHBOARD] Refreshing all widgets");
    load_overall(store, client.clone());
    load_daily(store, client.clone());
    load_reviewers(store, client.clone());
    load_sessions(store, client.clone(), sessions_limit);
    load_users(store, client);
}
