//! View Models
//!
//! Pure functions turning backend data into the rows and cards the
//! components print. Nothing here touches the DOM.

use chrono::{DateTime, NaiveDateTime};

use crate::error::ConsoleResult;
use crate::models::{
    DailyStats, Decision, OverallStats, ReviewRecord, ReviewerStat, UploadSession, User, UserType,
};

/// Placeholder for missing values
pub const DASH: &str = "-";
/// Characters of item text shown in history rows
pub const HISTORY_SNIPPET_CHARS: usize = 100;

/// Per-widget load state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Widget<T> {
    #[default]
    Loading,
    Ready(T),
    Unavailable,
}

impl<T> Widget<T> {
    /// Keep the value, or log the failure and mark the widget unavailable
    pub fn from_result(result: ConsoleResult<T>, what: &str) -> Self {
        match result {
            Ok(v) => Widget::Ready(v),
            Err(e) => {
                log::error!("[DASHBOARD] Failed to load {}: {}", what, e);
                Widget::Unavailable
            }
        }
    }

    pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> Widget<U> {
        match self {
            Widget::Loading => Widget::Loading,
            Widget::Ready(v) => Widget::Ready(f(v)),
            Widget::Unavailable => Widget::Unavailable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

fn card(key: &'static str, label: &'static str, value: impl ToString) -> StatCard {
    StatCard { key, label, value: value.to_string() }
}

/// `66.67`, `50` (no trailing `.0`)
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{}", n as i64)
    } else if n.is_finite() {
        format!("{}", (n * 100.0).round() / 100.0)
    } else {
        "0".to_string()
    }
}

pub fn format_percent(n: f64) -> String {
    format!("{}%", format_number(n))
}

/// ISO timestamps from the backend as `YYYY-MM-DD HH:MM`
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return DASH.to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return dt.format("%Y-%m-%d %H:%M").to_string();
        }
    }
    raw.to_string()
}

fn or_dash(value: Option<&str>) -> String {
    value.filter(|s| !s.is_empty()).unwrap_or(DASH).to_string()
}

fn count_or_dash(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| DASH.to_string())
}

/// First `max` characters, with an ellipsis when cut
pub fn truncate(text: &str, max: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

pub fn decision_label(decision: Decision) -> &'static str {
    match decision {
        Decision::Approve => "Approved",
        Decision::Modify => "Modified",
        Decision::Reject => "Rejected",
    }
}

pub fn role_label(role: Option<UserType>) -> &'static str {
    match role {
        Some(UserType::Admin) => "Admin",
        Some(UserType::Reviewer) => "Reviewer",
        None => DASH,
    }
}

// ========================
// Admin dashboard
// ========================

pub fn overall_cards(stats: &OverallStats) -> Vec<StatCard> {
    vec![
        card("total", "Total items", stats.total_data),
        card("pending", "Pending", stats.pending_data),
        card("reviewed", "Reviewed", stats.reviewed_data),
        card("approved", "Approved", stats.approved_data),
        card("completion", "Completion", format_percent(stats.completion_rate)),
    ]
}

pub fn daily_cards(stats: &DailyStats) -> Vec<StatCard> {
    vec![
        card("daily_reviews", "Reviews today", stats.daily_reviews),
        card("avg_time", "Average review time", format!("{} s", format_number(stats.avg_review_time))),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewerRow {
    pub username: String,
    pub review_count: String,
    pub approval_rate: String,
}

pub fn reviewer_rows(stats: &[ReviewerStat]) -> Vec<ReviewerRow> {
    stats
        .iter()
        .map(|r| ReviewerRow {
            username: or_dash(r.username.as_deref()),
            review_count: r.review_count.to_string(),
            approval_rate: format_percent(r.approval_rate),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRow {
    pub id: u64,
    pub filename: String,
    pub status: String,
    pub total: String,
    pub processed: String,
    pub failed: String,
    pub progress: String,
    pub uploaded_at: String,
    pub error_log: Option<String>,
}

pub fn session_rows(sessions: &[UploadSession]) -> Vec<SessionRow> {
    sessions
        .iter()
        .map(|s| SessionRow {
            id: s.id,
            filename: s.filename.clone().filter(|f| !f.is_empty()).unwrap_or_else(|| "file".to_string()),
            status: s.status.clone().filter(|st| !st.is_empty()).unwrap_or_else(|| "unknown".to_string()),
            total: count_or_dash(s.total_records),
            processed: count_or_dash(s.processed_records),
            failed: count_or_dash(s.failed_records),
            progress: s.progress_percentage.map(format_percent).unwrap_or_else(|| DASH.to_string()),
            uploaded_at: format_timestamp(s.uploaded_at.as_deref()),
            error_log: s.error_log.clone().filter(|e| !e.is_empty()),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub role: &'static str,
    pub created_at: String,
}

pub fn user_rows(users: &[User]) -> Vec<UserRow> {
    users
        .iter()
        .map(|u| UserRow {
            id: u.id,
            username: or_dash(u.username.as_deref()),
            email: or_dash(u.email.as_deref()),
            role: role_label(u.user_type),
            created_at: format_timestamp(u.created_at.as_deref()),
        })
        .collect()
}

// ========================
// Reviewer page
// ========================

pub fn progress_cards(stats: &OverallStats, session_count: u32) -> Vec<StatCard> {
    vec![
        card("user_reviews", "Your reviews", stats.user_reviews.unwrap_or(0)),
        card("approval_rate", "Your approval rate", format_percent(stats.user_approval_rate.unwrap_or(0.0))),
        card("today", "Reviewed today", stats.today_reviews.unwrap_or(0)),
        card("session", "Reviewed this session", session_count),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub snippet: String,
    pub decision_class: &'static str,
    pub decision_label: &'static str,
    pub new_tags: Option<String>,
    pub reviewed_at: String,
    pub confidence: String,
    pub time_spent: Option<String>,
}

pub fn history_rows(reviews: &[ReviewRecord]) -> Vec<HistoryRow> {
    reviews
        .iter()
        .map(|r| HistoryRow {
            snippet: r
                .text
                .as_deref()
                .filter(|t| !t.is_empty())
                .map(|t| truncate(t, HISTORY_SNIPPET_CHARS))
                .unwrap_or_else(|| "Text unavailable".to_string()),
            decision_class: r.decision.as_str(),
            decision_label: decision_label(r.decision),
            new_tags: r.new_tag_en.as_deref().filter(|t| !t.is_empty()).map(|en| {
                format!("{} / {}", en, r.new_tag_ar.as_deref().unwrap_or(DASH))
            }),
            reviewed_at: format_timestamp(r.reviewed_at.as_deref()),
            confidence: format!("{}/10", r.confidence.map(|c| c.to_string()).unwrap_or_else(|| DASH.to_string())),
            time_spent: r.time_spent.filter(|t| *t > 0).map(|t| format!("{} s", t)),
        })
        .collect()
}
