//! Tagging Endpoints
//!
//! Upload, listing, review and statistics calls of the tagging service.

use super::{with_query, ApiClient, Transport, UploadFile};
use crate::error::{ConsoleError, ConsoleResult};
use crate::models::{
    ActionResponse, ContactMessage, DailyStats, HistoryFilter, ItemPage, ItemStatus, ListEnvelope, OverallStats,
    ReviewDecision, ReviewHistory, ReviewerStat, UploadResult, UploadSession,
};
use crate::upload;

pub const UPLOAD: &str = "/api/tagging/upload-csv";
pub const UPLOAD_SESSIONS: &str = "/api/tagging/upload-sessions";
pub const STATS: &str = "/api/tagging/stats";
pub const DAILY_STATS: &str = "/api/tagging/daily-stats";
pub const REVIEWER_STATS: &str = "/api/tagging/reviewer-stats";
pub const DATA: &str = "/api/tagging/data";
pub const REVIEW: &str = "/api/tagging/review";
pub const REVIEWS: &str = "/api/tagging/reviews";
pub const CONTACT: &str = "/api/contact";

/// Multipart field holding the spreadsheet
pub const UPLOAD_FIELD: &str = "file";

// ========================
// Ingestion
// ========================

/// Validate the file locally, then upload it
pub async fn upload_spreadsheet<T: Transport>(
    client: &ApiClient<T>,
    file: Option<UploadFile>,
    allowed_extensions: &[String],
) -> ConsoleResult<UploadResult> {
    let file = upload::validate_file(file, allowed_extensions)?;
    log::info!("[UPLOAD] Sending {}", file.name);
    let result: UploadResult = client.post_file(UPLOAD, UPLOAD_FIELD, file).await?;
    if result.success == Some(false) || result.error.is_some() {
        let msg = result.error.clone().unwrap_or_else(|| "Upload failed".to_string());
        return Err(ConsoleError::Http { status: 200, message: msg });
    }
    Ok(result)
}

/// Most recent ingestion jobs, newest first as the server orders them
pub async fn list_upload_sessions<T: Transport>(client: &ApiClient<T>, limit: usize) -> ConsoleResult<Vec<UploadSession>> {
    let envelope: ListEnvelope<UploadSession> = client.get_json(UPLOAD_SESSIONS).await?;
    let mut sessions = envelope.into_vec();
    sessions.truncate(limit);
    Ok(sessions)
}

// ========================
// Statistics
// ========================

pub async fn get_stats<T: Transport>(client: &ApiClient<T>) -> ConsoleResult<OverallStats> {
    client.get_json(STATS).await
}

pub async fn get_daily_stats<T: Transport>(client: &ApiClient<T>) -> ConsoleResult<DailyStats> {
    client.get_json(DAILY_STATS).await
}

pub async fn get_reviewer_stats<T: Transport>(client: &ApiClient<T>) -> ConsoleResult<Vec<ReviewerStat>> {
    client.get_json(REVIEWER_STATS).await
}

// ========================
// Items and reviews
// ========================

pub async fn list_items<T: Transport>(
    client: &ApiClient<T>,
    status: ItemStatus,
    page: u32,
    per_page: u32,
) -> ConsoleResult<ItemPage> {
    let path = with_query(
        DATA,
        &[
            ("status", status.as_str().to_string()),
            ("page", page.max(1).to_string()),
            ("per_page", per_page.max(1).to_string()),
        ],
    );
    client.get_json(&path).await
}

/// The review queue always looks at the first pending item only
pub async fn next_pending<T: Transport>(client: &ApiClient<T>) -> ConsoleResult<ItemPage> {
    list_items(client, ItemStatus::Pending, 1, 1).await
}

pub async fn submit_review<T: Transport>(client: &ApiClient<T>, decision: &ReviewDecision) -> ConsoleResult<Option<String>> {
    log::info!("[REVIEW] Submitting {} for item {}", decision.decision.as_str(), decision.data_id);
    let resp: ActionResponse = client.post_json(REVIEW, decision).await?;
    resp.into_result().map_err(|message| ConsoleError::Http { status: 200, message })
}

pub async fn review_history<T: Transport>(
    client: &ApiClient<T>,
    filter: HistoryFilter,
    page: u32,
) -> ConsoleResult<ReviewHistory> {
    let path = with_query(REVIEWS, &[("filter", filter.as_str().to_string()), ("page", page.max(1).to_string())]);
    client.get_json(&path).await
}

pub async fn send_contact<T: Transport>(client: &ApiClient<T>, message: &ContactMessage) -> ConsoleResult<Option<String>> {
    if message.subject.trim().is_empty() || message.message.trim().is_empty() {
        return Err(ConsoleError::validation("Subject and message are required"));
    }
    let resp: ActionResponse = client.post_json(CONTACT, message).await?;
    resp.into_result().map_err(|message| ConsoleError::Http { status: 200, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeTransport;
    use crate::api::RequestBody;
    use crate::models::{Decision, UserType};

    fn xlsx_only() -> Vec<String> {
        vec!["xlsx".to_string(), "xls".to_string()]
    }

    #[tokio::test]
    async fn test_disallowed_extension_issues_no_request() {
        let client = ApiClient::new(FakeTransport::new(), "");
        for name in ["data.csv", "data.txt", "report.xlsx.exe", "noext"] {
            let err = upload_spreadsheet(&client, Some(UploadFile::named(name)), &xlsx_only()).await.unwrap_err();
            assert!(matches!(err, ConsoleError::Validation(_)), "{} should be rejected", name);
        }
        let err = upload_spreadsheet(&client, None, &xlsx_only()).await.unwrap_err();
        assert!(matches!(err, ConsoleError::Validation(_)));
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_upload_uses_file_field() {
        let fake = FakeTransport::new().respond(
            UPLOAD,
            200,
            r#"{"success": true, "total_records": 100, "successful_records": 95, "failed_records": 5}"#,
        );
        let client = ApiClient::new(fake, "");
        let result = upload_spreadsheet(&client, Some(UploadFile::named("Batch.XLSX")), &xlsx_only()).await.unwrap();
        assert_eq!((result.total_records, result.successful_records, result.failed_records), (100, 95, 5));

        let sent = client.transport().requests();
        match &sent[0].body {
            RequestBody::File { field, file } => {
                assert_eq!(field, "file");
                assert_eq!(file.name, "Batch.XLSX");
            }
            other => panic!("expected multipart body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_upload_server_error() {
        let fake = FakeTransport::new().respond(UPLOAD, 400, r#"{"error": "Unsupported file type"}"#);
        let client = ApiClient::new(fake, "");
        let err = upload_spreadsheet(&client, Some(UploadFile::named("a.xls")), &xlsx_only()).await.unwrap_err();
        assert_eq!(err.user_message(), "Unsupported file type");
    }

    #[tokio::test]
    async fn test_upload_sessions_are_capped() {
        let many: Vec<String> = (1..=12).map(|i| format!(r#"{{"id": {}}}"#, i)).collect();
        let body = format!("[{}]", many.join(","));
        let client = ApiClient::new(FakeTransport::new().respond(UPLOAD_SESSIONS, 200, &body), "");
        let sessions = list_upload_sessions(&client, 10).await.unwrap();
        assert_eq!(sessions.len(), 10);
        assert_eq!(sessions[0].id, 1);
    }

    #[tokio::test]
    async fn test_next_pending_query() {
        let fake = FakeTransport::new().respond(DATA, 200, r#"{"data": [], "total": 0, "pages": 0, "current_page": 1}"#);
        let client = ApiClient::new(fake, "");
        let page = next_pending(&client).await.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(client.transport().paths(), vec!["/api/tagging/data?status=pending&page=1&per_page=1"]);
    }

    #[tokio::test]
    async fn test_history_query() {
        let fake = FakeTransport::new().respond(REVIEWS, 200, r#"{"reviews": [{"decision": "reject", "confidence": 3}]}"#);
        let client = ApiClient::new(fake, "");
        let history = review_history(&client, HistoryFilter::Only(Decision::Reject), 2).await.unwrap();
        assert_eq!(history.reviews.len(), 1);
        assert_eq!(client.transport().paths(), vec!["/api/tagging/reviews?filter=reject&page=2"]);
    }

    #[tokio::test]
    async fn test_rejected_review_surfaces_error() {
        let fake = FakeTransport::new().respond(REVIEW, 200, r#"{"success": false, "error": "already reviewed"}"#);
        let client = ApiClient::new(fake, "");
        let decision = ReviewDecision {
            data_id: 1,
            decision: Decision::Approve,
            new_tag_en: None,
            new_tag_ar: None,
            notes: None,
            confidence: 5,
            time_spent: None,
        };
        let err = submit_review(&client, &decision).await.unwrap_err();
        assert_eq!(err.user_message(), "already reviewed");
    }

    #[tokio::test]
    async fn test_contact_payload() {
        let fake = FakeTransport::new().respond(CONTACT, 200, r#"{"message": "sent"}"#);
        let client = ApiClient::new(fake, "");
        let msg = ContactMessage {
            subject: "Tags".into(),
            message: "Unclear label".into(),
            sender_type: UserType::Reviewer,
        };
        send_contact(&client, &msg).await.unwrap();
        assert_eq!(
            client.transport().requests()[0].json_body(),
            Some(serde_json::json!({"subject": "Tags", "message": "Unclear label", "sender_type": "reviewer"}))
        );
    }
}
