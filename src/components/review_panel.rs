//! Review Panel Component
//!
//! Reviewer queue mode: one pending item at a time, quick decisions,
//! the modify form, a confidence slider and single-key shortcuts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_shortcuts::{bind_shortcuts, ShortcutMap};

use crate::api;
use crate::components::ModifyFormEditor;
use crate::context::use_page;
use crate::models::Decision;
use crate::review::{ModifyForm, QueueState, ReviewQueue, DEFAULT_CONFIDENCE, MAX_CONFIDENCE, MIN_CONFIDENCE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueueAction {
    Approve,
    Modify,
    Reject,
    Next,
    Skip,
}

fn queue_shortcuts() -> ShortcutMap<QueueAction> {
    ShortcutMap::new()
        .bind('a', QueueAction::Approve)
        .bind('m', QueueAction::Modify)
        .bind('r', QueueAction::Reject)
        .bind('n', QueueAction::Next)
        .bind('s', QueueAction::Skip)
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[component]
pub fn ReviewPanel(
    queue: RwSignal<ReviewQueue>,
    /// True while the review tab is visible
    #[prop(into)]
    active: Signal<bool>,
    /// Runs after each accepted decision
    #[prop(into)]
    on_submitted: Callback<()>,
) -> impl IntoView {
    let page = use_page();
    let confidence = RwSignal::new(DEFAULT_CONFIDENCE);
    let modifying = RwSignal::new(false);
    let form = RwSignal::new(ModifyForm::default());

    let load_next = move || {
        if !queue.try_update(|q| q.start_loading()).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let client = page.client();
            match api::next_pending(&client).await {
                Ok(item_page) => {
                    queue.update(|q| q.loaded(item_page, now_ms()));
                    confidence.set(DEFAULT_CONFIDENCE);
                    modifying.set(false);
                }
                Err(e) => {
                    log::error!("[REVIEW] Failed to load next item: {}", e);
                    queue.update(|q| q.load_failed());
                    page.error(e.user_message());
                }
            }
        });
    };

    let submit = move |decision: Decision| {
        let edited = (decision == Decision::Modify).then(|| form.get_untracked());
        let payload = match queue.with_untracked(|q| {
            q.decide(decision, edited.as_ref(), confidence.get_untracked(), now_ms())
        }) {
            Ok(p) => p,
            Err(e) => {
                page.error(e.user_message());
                return;
            }
        };
        if !queue.try_update(|q| q.start_submitting()).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let client = page.client();
            match api::submit_review(&client, &payload).await {
                Ok(msg) => {
                    log::info!("[REVIEW] Item {} marked {}", payload.data_id, decision.as_str());
                    queue.update(|q| q.submitted());
                    page.success(msg.unwrap_or_else(|| "Review submitted".to_string()));
                    on_submitted.run(());
                    load_next();
                }
                Err(e) => {
                    log::error!("[REVIEW] Submission failed: {}", e);
                    queue.update(|q| q.submit_failed());
                    page.error(e.user_message());
                }
            }
        });
    };

    let open_modify = move || {
        if let Some(item) = queue.with_untracked(|q| q.current().cloned()) {
            form.set(ModifyForm::for_item(&item));
            modifying.set(true);
        }
    };

    // Fetch when the tab becomes visible with nothing loaded yet
    Effect::new(move |_| {
        if active.get() && matches!(queue.get_untracked().state, QueueState::Idle | QueueState::Empty) {
            load_next();
        }
    });

    let handle = bind_shortcuts(
        queue_shortcuts(),
        move || active.get_untracked(),
        move |action| match action {
            QueueAction::Approve => submit(Decision::Approve),
            QueueAction::Reject => submit(Decision::Reject),
            QueueAction::Modify => open_modify(),
            QueueAction::Next | QueueAction::Skip => load_next(),
        },
    );
    on_cleanup(move || handle.remove());

    let busy = Signal::derive(move || queue.with(|q| q.is_busy()));

    view! {
        <section class="review-panel">
            {move || match queue.with(|q| q.state.clone()) {
                QueueState::Idle | QueueState::Loading => {
                    view! { <p class="widget-note">"Loading next item..."</p> }.into_any()
                }
                QueueState::Empty => view! {
                    <div class="queue-empty">
                        <p>"No pending items. Nice work!"</p>
                        <button on:click=move |_| load_next()>"Check again"</button>
                    </div>
                }.into_any(),
                QueueState::Displaying(active_item) | QueueState::Submitting(active_item) => {
                    let item = active_item.item;
                    view! {
                        <div class="current-item" data-item-id=item.id.to_string()>
                            <p class="item-text">{item.text}</p>
                            <div class="item-tags">
                                <span class="tag-en">{item.tag_en}</span>
                                <span class="tag-ar" dir="rtl">{item.tag_ar}</span>
                            </div>
                        </div>
                    }.into_any()
                }
            }}
            <p class="queue-remaining">
                {move || format!("{} pending", queue.with(|q| q.pending_total))}
            </p>
            <label class="confidence">
                {move || format!("Confidence: {}/10", confidence.get())}
                <input
                    type="range"
                    min=MIN_CONFIDENCE.to_string()
                    max=MAX_CONFIDENCE.to_string()
                    prop:value=move || confidence.get().to_string()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<u8>() {
                            confidence.set(v.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE));
                        }
                    }
                />
            </label>
            <Show
                when=move || modifying.get()
                fallback=move || view! {
                    <div class="queue-actions">
                        <button class="approve-btn" disabled=move || busy.get() on:click=move |_| submit(Decision::Approve)>
                            "Approve (A)"
                        </button>
                        <button class="modify-btn" disabled=move || busy.get() on:click=move |_| open_modify()>
                            "Modify (M)"
                        </button>
                        <button class="reject-btn" disabled=move || busy.get() on:click=move |_| submit(Decision::Reject)>
                            "Reject (R)"
                        </button>
                        <button class="next-btn" disabled=move || busy.get() on:click=move |_| load_next()>
                            "Next (N)"
                        </button>
                        <button class="skip-btn" disabled=move || busy.get() on:click=move |_| load_next()>
                            "Skip (S)"
                        </button>
                    </div>
                }
            >
                <ModifyFormEditor
                    form=form
                    busy=busy
                    on_save=move |_| submit(Decision::Modify)
                    on_cancel=move |_| modifying.set(false)
                />
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_shortcuts::Modifiers;

    #[test]
    fn test_queue_shortcut_keys() {
        let map = queue_shortcuts();
        let none = Modifiers::default();
        assert_eq!(map.resolve("a", Some("BODY"), none), Some(QueueAction::Approve));
        assert_eq!(map.resolve("M", Some("BODY"), none), Some(QueueAction::Modify));
        assert_eq!(map.resolve("r", None, none), Some(QueueAction::Reject));
        assert_eq!(map.resolve("n", None, none), Some(QueueAction::Next));
        assert_eq!(map.resolve("s", None, none), Some(QueueAction::Skip));
        assert_eq!(map.resolve("a", Some("TEXTAREA"), none), None);
        let ctrl = Modifiers { ctrl: true, ..Modifiers::default() };
        assert_eq!(map.resolve("s", None, ctrl), None);
    }
}
