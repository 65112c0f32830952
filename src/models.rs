//! Frontend Models
//!
//! Data structures matching backend JSON. Everything except identifiers is
//! defaulted so sparse responses still deserialize.

use serde::{Deserialize, Deserializer, Serialize};

/// Read an explicit `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Admin,
    Reviewer,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Admin => "admin",
            UserType::Reviewer => "reviewer",
        }
    }
}

/// Session probe result
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Session {
    #[serde(default, deserialize_with = "null_as_default")]
    pub logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub user_type: Option<UserType>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user_type: UserType,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Pending,
    Reviewed,
    Approved,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 3] = [ItemStatus::Pending, ItemStatus::Reviewed, ItemStatus::Approved];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Reviewed => "reviewed",
            ItemStatus::Approved => "approved",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

/// A text with its English/Arabic label awaiting review
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaggingItem {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tag_en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tag_ar: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ItemStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub review_count: u32,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// One page of `/api/tagging/data`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<TaggingItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pages: u32,
    #[serde(default = "first_page", deserialize_with = "null_as_first_page")]
    pub current_page: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_prev: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_next: bool,
}

fn first_page() -> u32 {
    1
}

fn null_as_first_page<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_else(first_page))
}

/// Record of one bulk ingestion job
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadSession {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(default, alias = "name")]
    pub filename: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_records: Option<u64>,
    #[serde(default)]
    pub processed_records: Option<u64>,
    #[serde(default)]
    pub failed_records: Option<u64>,
    #[serde(default)]
    pub progress_percentage: Option<f64>,
    #[serde(default, alias = "created_at")]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub error_log: Option<String>,
}

/// Result of `POST /api/tagging/upload-csv`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session_id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_records: u64,
    #[serde(default, deserialize_with = "null_as_default", alias = "processed_records")]
    pub successful_records: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub failed_records: u64,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Modify,
    Reject,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approve => "approve",
            Decision::Modify => "modify",
            Decision::Reject => "reject",
        }
    }
}

/// Outgoing review payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewDecision {
    pub data_id: u64,
    pub decision: Decision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_tag_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_tag_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub confidence: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<u32>,
}

/// A past decision, as listed by `/api/tagging/reviews`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub data_id: Option<u64>,
    #[serde(default)]
    pub text: Option<String>,
    pub decision: Decision,
    #[serde(default)]
    pub new_tag_en: Option<String>,
    #[serde(default)]
    pub new_tag_ar: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub confidence: Option<u8>,
    #[serde(default)]
    pub reviewed_at: Option<String>,
    #[serde(default)]
    pub time_spent: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReviewHistory {
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviews: Vec<ReviewRecord>,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_prev: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_next: bool,
}

/// History filter values understood by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryFilter {
    #[default]
    All,
    Only(Decision),
}

impl HistoryFilter {
    pub const ALL: [HistoryFilter; 4] = [
        HistoryFilter::All,
        HistoryFilter::Only(Decision::Approve),
        HistoryFilter::Only(Decision::Modify),
        HistoryFilter::Only(Decision::Reject),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryFilter::All => "all",
            HistoryFilter::Only(d) => d.as_str(),
        }
    }

    pub fn parse(s: &str) -> Self {
        Self::ALL.into_iter().find(|f| f.as_str() == s).unwrap_or_default()
    }
}

/// `/api/tagging/stats`; personal fields appear for reviewers only
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OverallStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_data: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_data: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviewed_data: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub approved_data: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completion_rate: f64,
    #[serde(default)]
    pub user_reviews: Option<u64>,
    #[serde(default)]
    pub user_approvals: Option<u64>,
    #[serde(default)]
    pub user_approval_rate: Option<f64>,
    #[serde(default)]
    pub today_reviews: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailyStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub daily_reviews: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_review_time: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewerStat {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub review_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub approval_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_type: Option<UserType>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub user_type: UserType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub subject: String,
    pub message: String,
    pub sender_type: UserType,
}

/// Generic echo of mutating endpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ActionResponse {
    /// `success: false` fails even on a 2xx status
    pub fn into_result(self) -> Result<Option<String>, String> {
        if self.success == Some(false) {
            let msg = self
                .error
                .or(self.detail)
                .or(self.message)
                .unwrap_or_else(|| "Request failed".to_string());
            return Err(msg);
        }
        Ok(self.message)
    }
}

/// Listing endpoints answer with a bare array or a wrapped one
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Sessions { sessions: Vec<T> },
    Data { data: Vec<T> },
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(v) => v,
            ListEnvelope::Sessions { sessions } => sessions,
            ListEnvelope::Data { data } => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shapes() {
        let bare: ListEnvelope<UploadSession> = serde_json::from_str(r#"[{"id":1,"filename":"a.xlsx"}]"#).unwrap();
        assert_eq!(bare.into_vec().len(), 1);

        let wrapped: ListEnvelope<UploadSession> =
            serde_json::from_str(r#"{"sessions":[{"id":1,"name":"a.xlsx","created_at":"2024-01-01"}]}"#).unwrap();
        let list = wrapped.into_vec();
        assert_eq!(list[0].filename.as_deref(), Some("a.xlsx"));
        assert_eq!(list[0].uploaded_at.as_deref(), Some("2024-01-01"));

        let data: ListEnvelope<User> = serde_json::from_str(r#"{"data":[{"id":7,"username":"mona"}]}"#).unwrap();
        assert_eq!(data.into_vec()[0].id, 7);
    }

    #[test]
    fn test_decision_payload_omits_absent_fields() {
        let decision = ReviewDecision {
            data_id: 4,
            decision: Decision::Approve,
            new_tag_en: None,
            new_tag_ar: None,
            notes: None,
            confidence: 5,
            time_spent: Some(3),
        };
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json, serde_json::json!({"data_id": 4, "decision": "approve", "confidence": 5, "time_spent": 3}));
    }

    #[test]
    fn test_action_response_success_false() {
        let resp: ActionResponse = serde_json::from_str(r#"{"success":false,"error":"already reviewed"}"#).unwrap();
        assert_eq!(resp.into_result(), Err("already reviewed".to_string()));

        let ok: ActionResponse = serde_json::from_str(r#"{"message":"saved"}"#).unwrap();
        assert_eq!(ok.into_result(), Ok(Some("saved".to_string())));
    }

    #[test]
    fn test_upload_result_accepts_processed_records() {
        let r: UploadResult =
            serde_json::from_str(r#"{"total_records":10,"processed_records":8,"failed_records":2}"#).unwrap();
        assert_eq!(r.successful_records, 8);
    }

    #[test]
    fn test_history_filter_parse() {
        assert_eq!(HistoryFilter::parse("modify"), HistoryFilter::Only(Decision::Modify));
        assert_eq!(HistoryFilter::parse("bogus"), HistoryFilter::All);
    }

    #[test]
    fn test_item_page_with_null_columns() {
        let json = r#"{
            "data": [{"id": 1, "text": null, "tag_en": null, "tag_ar": null,
                      "status": null, "review_count": null, "uploaded_at": null}],
            "total": 1, "pages": null, "current_page": null,
            "has_prev": false, "has_next": null
        }"#;
        let page: ItemPage = serde_json::from_str(json).unwrap();
        let item = &page.data[0];
        assert_eq!(item.tag_en, "");
        assert_eq!(item.tag_ar, "");
        assert_eq!(item.text, "");
        assert_eq!(item.status, ItemStatus::Pending);
        assert_eq!(item.review_count, 0);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.pages, 0);
        assert!(!page.has_next);
    }

    #[test]
    fn test_stats_with_null_counters() {
        let stats: OverallStats =
            serde_json::from_str(r#"{"total_data": 4, "pending_data": null, "completion_rate": null}"#).unwrap();
        assert_eq!(stats.total_data, 4);
        assert_eq!(stats.pending_data, 0);
        assert_eq!(stats.completion_rate, 0.0);
    }
}
