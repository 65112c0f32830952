//! Review Queue
//!
//! One-at-a-time review loop of the reviewer page. The queue owns the item
//! on screen and when it was first shown; every decision is built from it.
//!
//! ```text
//! Idle -> Loading -> Displaying | Empty
//! Displaying -> Submitting -> Loading        (success)
//! Submitting -> Displaying                   (failure)
//! ```

use crate::error::{ConsoleError, ConsoleResult};
use crate::models::{Decision, ItemPage, ReviewDecision, TaggingItem};

pub const DEFAULT_CONFIDENCE: u8 = 5;
pub const MIN_CONFIDENCE: u8 = 1;
pub const MAX_CONFIDENCE: u8 = 10;

/// Whole seconds between two `Date.now()` readings
pub fn elapsed_seconds(started_ms: f64, now_ms: f64) -> u32 {
    if !(now_ms > started_ms) {
        return 0;
    }
    ((now_ms - started_ms) / 1000.0).floor() as u32
}

pub fn clamp_confidence(value: u8) -> u8 {
    value.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

/// Item on screen and when it appeared
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveItem {
    pub item: TaggingItem,
    pub shown_at_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueueState {
    #[default]
    Idle,
    Loading,
    Displaying(ActiveItem),
    Empty,
    Submitting(ActiveItem),
}

/// Replacement values typed into the modify form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModifyForm {
    pub tag_en: String,
    pub tag_ar: String,
    pub notes: String,
}

impl ModifyForm {
    /// Prefilled with the item's current tags
    pub fn for_item(item: &TaggingItem) -> Self {
        Self {
            tag_en: item.tag_en.clone(),
            tag_ar: item.tag_ar.clone(),
            notes: String::new(),
        }
    }
}

/// Build a decision for `item` shown at `shown_at_ms`
///
/// `shown_at_ms` is `None` where no display time is tracked (admin list).
pub fn build_decision(
    item_id: u64,
    decision: Decision,
    form: Option<&ModifyForm>,
    confidence: u8,
    shown_at_ms: Option<f64>,
    now_ms: f64,
) -> ConsoleResult<ReviewDecision> {
    let (new_tag_en, new_tag_ar, notes) = match (decision, form) {
        (Decision::Modify, Some(form)) => {
            let en = form.tag_en.trim();
            let ar = form.tag_ar.trim();
            if en.is_empty() || ar.is_empty() {
                return Err(ConsoleError::validation("Please fill in both tag fields"));
            }
            let notes = form.notes.trim();
            (
                Some(en.to_string()),
                Some(ar.to_string()),
                (!notes.is_empty()).then(|| notes.to_string()),
            )
        }
        (Decision::Modify, None) => return Err(ConsoleError::validation("Please fill in both tag fields")),
        _ => (None, None, None),
    };

    Ok(ReviewDecision {
        data_id: item_id,
        decision,
        new_tag_en,
        new_tag_ar,
        notes,
        confidence: clamp_confidence(confidence),
        time_spent: shown_at_ms.map(|start| elapsed_seconds(start, now_ms)),
    })
}

/// Reviewer page controller state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewQueue {
    pub state: QueueState,
    /// `total` of the last pending query
    pub pending_total: u64,
    /// Decisions accepted since the page was opened
    pub submitted_count: u32,
}

impl ReviewQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&TaggingItem> {
        match &self.state {
            QueueState::Displaying(active) | QueueState::Submitting(active) => Some(&active.item),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, QueueState::Loading | QueueState::Submitting(_))
    }

    /// Start fetching; ignored while a submission is outstanding
    pub fn start_loading(&mut self) -> bool {
        if matches!(self.state, QueueState::Submitting(_)) {
            return false;
        }
        self.state = QueueState::Loading;
        true
    }

    /// Show the first item of `page`, stamping the display time
    pub fn loaded(&mut self, page: ItemPage, now_ms: f64) {
        self.pending_total = page.total;
        self.state = match page.data.into_iter().next() {
            Some(item) => QueueState::Displaying(ActiveItem { item, shown_at_ms: now_ms }),
            None => QueueState::Empty,
        };
    }

    pub fn load_failed(&mut self) {
        self.state = QueueState::Idle;
    }

    /// Decision for the item on screen
    pub fn decide(
        &self,
        decision: Decision,
        form: Option<&ModifyForm>,
        confidence: u8,
        now_ms: f64,
    ) -> ConsoleResult<ReviewDecision> {
        match &self.state {
            QueueState::Displaying(active) => {
                build_decision(active.item.id, decision, form, confidence, Some(active.shown_at_ms), now_ms)
            }
            _ => Err(ConsoleError::validation("No item to review")),
        }
    }

    /// Lock the item while its decision is in flight
    pub fn start_submitting(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            QueueState::Displaying(active) => {
                self.state = QueueState::Submitting(active);
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Accepted: count it and fetch the next item
    pub fn submitted(&mut self) {
        self.submitted_count += 1;
        self.pending_total = self.pending_total.saturating_sub(1);
        self.state = QueueState::Loading;
    }

    /// Rejected: keep showing the same item with its original timestamp
    pub fn submit_failed(&mut self) {
        if let QueueState::Submitting(active) = std::mem::take(&mut self.state) {
            self.state = QueueState::Displaying(active);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeTransport;
    use crate::api::{self, ApiClient, DATA, REVIEW};
    use crate::models::ItemStatus;

    fn item(id: u64) -> TaggingItem {
        TaggingItem {
            id,
            text: format!("text {}", id),
            tag_en: "Neutral".into(),
            tag_ar: "محايد".into(),
            status: ItemStatus::Pending,
            review_count: 0,
            uploaded_at: None,
        }
    }

    fn page_of(items: Vec<TaggingItem>, total: u64) -> ItemPage {
        ItemPage {
            data: items,
            total,
            pages: total as u32,
            current_page: 1,
            has_prev: false,
            has_next: total > 1,
        }
    }

    #[test]
    fn test_elapsed_seconds() {
        assert_eq!(elapsed_seconds(1_000.0, 13_000.0), 12);
        assert_eq!(elapsed_seconds(1_000.0, 13_999.0), 12);
        assert_eq!(elapsed_seconds(5_000.0, 1_000.0), 0);
        assert_eq!(elapsed_seconds(f64::NAN, 1_000.0), 0);
    }

    #[test]
    fn test_quick_decision_payload() {
        let mut queue = ReviewQueue::new();
        queue.start_loading();
        queue.loaded(page_of(vec![item(9)], 3), 50_000.0);

        let decision = queue.decide(Decision::Approve, None, 7, 62_000.0).unwrap();
        assert_eq!(decision.data_id, 9);
        assert_eq!(decision.confidence, 7);
        assert_eq!(decision.time_spent, Some(12));
        assert_eq!(decision.new_tag_en, None);
        assert_eq!(decision.notes, None);
    }

    #[test]
    fn test_modify_requires_both_tags() {
        let mut queue = ReviewQueue::new();
        queue.loaded(page_of(vec![item(1)], 1), 0.0);

        let form = ModifyForm { tag_en: "Opinion".into(), tag_ar: "  ".into(), notes: String::new() };
        assert!(matches!(
            queue.decide(Decision::Modify, Some(&form), 5, 1_000.0),
            Err(ConsoleError::Validation(_))
        ));

        let form = ModifyForm { tag_en: " Opinion ".into(), tag_ar: "رأي".into(), notes: " unsure ".into() };
        let decision = queue.decide(Decision::Modify, Some(&form), 5, 3_500.0).unwrap();
        assert_eq!(decision.new_tag_en.as_deref(), Some("Opinion"));
        assert_eq!(decision.new_tag_ar.as_deref(), Some("رأي"));
        assert_eq!(decision.notes.as_deref(), Some("unsure"));
        assert_eq!(decision.time_spent, Some(3));
    }

    #[test]
    fn test_confidence_is_clamped() {
        let d = build_decision(1, Decision::Reject, None, 0, None, 0.0).unwrap();
        assert_eq!(d.confidence, 1);
        let d = build_decision(1, Decision::Reject, None, 42, None, 0.0).unwrap();
        assert_eq!(d.confidence, 10);
        assert_eq!(d.time_spent, None);
    }

    #[test]
    fn test_state_transitions() {
        let mut queue = ReviewQueue::new();
        assert_eq!(queue.state, QueueState::Idle);
        assert!(queue.decide(Decision::Approve, None, 5, 0.0).is_err());

        assert!(queue.start_loading());
        assert!(queue.is_busy());
        queue.loaded(page_of(vec![], 0), 0.0);
        assert_eq!(queue.state, QueueState::Empty);

        queue.start_loading();
        queue.loaded(page_of(vec![item(2)], 4), 100.0);
        assert_eq!(queue.current().map(|i| i.id), Some(2));

        assert!(queue.start_submitting());
        assert!(!queue.start_submitting());
        assert!(!queue.start_loading());
        queue.submit_failed();
        assert!(matches!(&queue.state, QueueState::Displaying(a) if a.shown_at_ms == 100.0));

        queue.start_submitting();
        queue.submitted();
        assert_eq!(queue.state, QueueState::Loading);
        assert_eq!(queue.submitted_count, 1);
        assert_eq!(queue.pending_total, 3);
    }

    #[tokio::test]
    async fn test_submit_then_advance_to_next_item() {
        let fake = FakeTransport::new()
            .respond(DATA, 200, r#"{"data": [{"id": 1, "text": "a", "tag_en": "Neutral", "tag_ar": "محايد"}], "total": 2}"#)
            .respond(DATA, 200, r#"{"data": [{"id": 2, "text": "b", "tag_en": "Question", "tag_ar": "سؤال"}], "total": 1}"#)
            .respond(REVIEW, 200, r#"{"success": true}"#);
        let client = ApiClient::new(fake, "");
        let mut queue = ReviewQueue::new();

        queue.start_loading();
        queue.loaded(api::next_pending(&client).await.unwrap(), 0.0);
        let decision = queue.decide(Decision::Reject, None, 4, 2_000.0).unwrap();
        queue.start_submitting();
        api::submit_review(&client, &decision).await.unwrap();
        queue.submitted();
        queue.loaded(api::next_pending(&client).await.unwrap(), 2_500.0);

        assert_eq!(queue.current().map(|i| i.id), Some(2));
        let sent = client.transport().requests();
        assert_eq!(sent[1].json_body().unwrap()["time_spent"], 2);
        assert_eq!(sent[1].json_body().unwrap()["decision"], "reject");
    }
}
