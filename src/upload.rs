//! Upload Helpers
//!
//! File validation, the cosmetic progress milestones and the result text.

use crate::api::UploadFile;
use crate::error::{ConsoleError, ConsoleResult};
use crate::models::UploadResult;

/// Progress shown when the request starts
pub const START_PERCENT: u8 = 15;
/// Progress shown after the milestone delay
pub const WAITING_PERCENT: u8 = 45;
pub const DONE_PERCENT: u8 = 100;

/// Lower-case extension after the last dot, if any
pub fn extension_of(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Accept the file only if one is selected and its extension is allowed
pub fn validate_file(file: Option<UploadFile>, allowed: &[String]) -> ConsoleResult<UploadFile> {
    let file = file.ok_or_else(|| ConsoleError::validation("Choose a file first"))?;
    let ok = extension_of(&file.name)
        .map(|ext| allowed.iter().any(|a| a.trim_start_matches('.').eq_ignore_ascii_case(&ext)))
        .unwrap_or(false);
    if !ok {
        let list: Vec<String> = allowed.iter().map(|a| format!(".{}", a.trim_start_matches('.'))).collect();
        return Err(ConsoleError::Validation(format!("Please choose a {} file", list.join(" or "))));
    }
    Ok(file)
}

/// `accept` attribute for the file input
pub fn accept_attr(allowed: &[String]) -> String {
    allowed
        .iter()
        .map(|a| format!(".{}", a.trim_start_matches('.')))
        .collect::<Vec<_>>()
        .join(",")
}

/// Upload bar state. The percentages are estimates: the protocol has no
/// progress signal, so the bar moves through fixed milestones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadProgress {
    #[default]
    Idle,
    Sending(u8),
    Done,
    Failed,
}

impl UploadProgress {
    pub fn started() -> Self {
        UploadProgress::Sending(START_PERCENT)
    }

    /// Move to the middle milestone if still sending
    pub fn waiting(self) -> Self {
        match self {
            UploadProgress::Sending(p) if p < WAITING_PERCENT => UploadProgress::Sending(WAITING_PERCENT),
            other => other,
        }
    }

    pub fn percent(&self) -> u8 {
        match self {
            UploadProgress::Idle => 0,
            UploadProgress::Sending(p) => *p,
            UploadProgress::Done => DONE_PERCENT,
            UploadProgress::Failed => 0,
        }
    }

    pub fn in_flight(&self) -> bool {
        matches!(self, UploadProgress::Sending(_))
    }
}

/// Summary line for a finished upload
pub fn result_message(result: &UploadResult) -> String {
    format!(
        "Upload complete: {} records total, {} imported, {} failed.",
        result.total_records, result.successful_records, result.failed_records
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec!["xlsx".into(), ".xls".into()]
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("a.XLSX").as_deref(), Some("xlsx"));
        assert_eq!(extension_of("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension_of("noext"), None);
        assert_eq!(extension_of(".xlsx"), None);
        assert_eq!(extension_of("trailing."), None);
    }

    #[test]
    fn test_validate_file() {
        assert!(validate_file(Some(UploadFile::named("a.xls")), &allowed()).is_ok());
        assert!(validate_file(Some(UploadFile::named("A.XLSX")), &allowed()).is_ok());
        let err = validate_file(Some(UploadFile::named("a.csv")), &allowed()).unwrap_err();
        assert_eq!(err.user_message(), "Please choose a .xlsx or .xls file");
        assert_eq!(validate_file(None, &allowed()).unwrap_err().user_message(), "Choose a file first");
    }

    #[test]
    fn test_csv_variant_allow_list() {
        let csv = vec!["csv".to_string()];
        assert!(validate_file(Some(UploadFile::named("rows.csv")), &csv).is_ok());
        assert!(validate_file(Some(UploadFile::named("rows.xlsx")), &csv).is_err());
    }

    #[test]
    fn test_accept_attr() {
        assert_eq!(accept_attr(&allowed()), ".xlsx,.xls");
    }

    #[test]
    fn test_progress_milestones() {
        let p = UploadProgress::started();
        assert_eq!(p.percent(), 15);
        assert!(p.in_flight());
        let p = p.waiting();
        assert_eq!(p.percent(), 45);
        assert_eq!(UploadProgress::Done.waiting(), UploadProgress::Done);
        assert_eq!(UploadProgress::Done.percent(), 100);
        assert!(!UploadProgress::Failed.in_flight());
    }

    #[test]
    fn test_result_message_contains_counts() {
        let result = UploadResult {
            total_records: 100,
            successful_records: 95,
            failed_records: 5,
            ..Default::default()
        };
        let msg = result_message(&result);
        assert!(msg.contains("100"));
        assert!(msg.contains("95"));
        assert!(msg.contains('5'));
        assert_eq!(msg, "Upload complete: 100 records total, 95 imported, 5 failed.");
    }
}
