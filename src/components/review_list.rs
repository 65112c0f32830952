//! Review List Component
//!
//! Admin list mode: items filtered by status, paginated, with inline
//! approve / modify / reject on each row.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ModifyFormEditor, PaginationBar};
use crate::context::use_page;
use crate::models::{Decision, ItemPage, ItemStatus, TaggingItem};
use crate::pagination::pagination_view;
use crate::review::{build_decision, ModifyForm, DEFAULT_CONFIDENCE};
use crate::store::{load_overall, use_dashboard};
use crate::views::Widget;

#[component]
pub fn ReviewList() -> impl IntoView {
    let page = use_page();
    let store = use_dashboard();
    let (status, set_status) = signal(ItemStatus::Pending);
    let (current_page, set_current_page) = signal(1u32);
    let items = RwSignal::new(Widget::<ItemPage>::Loading);
    let editing = RwSignal::new(None::<u64>);
    let form = RwSignal::new(ModifyForm::default());
    let (busy, set_busy) = signal(false);
    let (reload_tick, set_reload_tick) = signal(0u32);

    // Reload whenever the filter, the page or the tick changes
    Effect::new(move |_| {
        reload_tick.track();
        let status = status.get();
        let number = current_page.get();
        items.set(Widget::Loading);
        editing.set(None);
        spawn_local(async move {
            let client = page.client();
            let per_page = page.with_config(|c| c.items_per_page);
            let result = api::list_items(&client, status, number, per_page).await;
            items.set(Widget::from_result(result, "items"));
        });
    });

    let submit = move |item_id: u64, decision: Decision| {
        if busy.get_untracked() {
            return;
        }
        let edited = (decision == Decision::Modify).then(|| form.get_untracked());
        let payload = match build_decision(item_id, decision, edited.as_ref(), DEFAULT_CONFIDENCE, None, 0.0) {
            Ok(p) => p,
            Err(e) => {
                page.error(e.user_message());
                return;
            }
        };
        set_busy.set(true);
        spawn_local(async move {
            let client = page.client();
            match api::submit_review(&client, &payload).await {
                Ok(msg) => {
                    log::info!("[ADMIN] Item {} marked {}", item_id, decision.as_str());
                    page.success(msg.unwrap_or_else(|| "Review submitted".to_string()));
                    set_reload_tick.update(|t| *t += 1);
                    load_overall(store, client);
                }
                Err(e) => page.error(e.user_message()),
            }
            set_busy.set(false);
        });
    };

    let start_edit = move |item: &TaggingItem| {
        form.set(ModifyForm::for_item(item));
        editing.set(Some(item.id));
    };

    let pager = Signal::derive(move || {
        items.with(|w| match w {
            Widget::Ready(p) => pagination_view(p.current_page, p.pages, p.has_prev, p.has_next),
            _ => None,
        })
    });

    view! {
        <section class="widget widget-review-list">
            <div class="list-toolbar">
                <h3>"Items"</h3>
                <select on:change=move |ev| {
                    if let Some(s) = ItemStatus::parse(&event_target_value(&ev)) {
                        set_status.set(s);
                        set_current_page.set(1);
                    }
                }>
                    {ItemStatus::ALL.into_iter().map(|s| view! {
                        <option value=s.as_str() selected=move || status.get() == s>{s.as_str()}</option>
                    }).collect_view()}
                </select>
            </div>
            {move || match items.get() {
                Widget::Loading => view! { <p class="widget-note">"Loading..."</p> }.into_any(),
                Widget::Unavailable => view! { <p class="widget-note">"Items unavailable"</p> }.into_any(),
                Widget::Ready(p) if p.data.is_empty() => {
                    view! { <p class="widget-note">"No items with this status"</p> }.into_any()
                }
                Widget::Ready(p) => view! {
                    <ul class="item-list">
                        {p.data.into_iter().map(|item| {
                            let id = item.id;
                            let pending = item.status == ItemStatus::Pending;
                            let for_edit = item.clone();
                            view! {
                                <li class="item-row" data-item-id=id.to_string()>
                                    <p class="item-text">{item.text}</p>
                                    <div class="item-tags">
                                        <span class="tag-en">{item.tag_en}</span>
                                        <span class="tag-ar" dir="rtl">{item.tag_ar}</span>
                                    </div>
                                    <div class="item-meta">
                                        <span class=format!("status-badge status-{}", item.status.as_str())>
                                            {item.status.as_str()}
                                        </span>
                                        <span class="review-count">{format!("{} reviews", item.review_count)}</span>
                                    </div>
                                    <Show when=move || pending>
                                        <Show
                                            when=move || editing.get() == Some(id)
                                            fallback={
                                                let for_edit = for_edit.clone();
                                                move || {
                                                    let for_edit = for_edit.clone();
                                                    view! {
                                                        <div class="item-actions">
                                                            <button
                                                                class="approve-btn"
                                                                disabled=move || busy.get()
                                                                on:click=move |_| submit(id, Decision::Approve)
                                                            >"Approve"</button>
                                                            <button
                                                                class="modify-btn"
                                                                disabled=move || busy.get()
                                                                on:click=move |_| start_edit(&for_edit)
                                                            >"Modify"</button>
                                                            <button
                                                                class="reject-btn"
                                                                disabled=move || busy.get()
                                                                on:click=move |_| submit(id, Decision::Reject)
                                                            >"Reject"</button>
                                                        </div>
                                                    }
                                                }
                                            }
                                        >
                                            <ModifyFormEditor
                                                form=form
                                                busy=busy
                                                on_save=move |_| submit(id, Decision::Modify)
                                                on_cancel=move |_| editing.set(None)
                                            />
                                        </Show>
                                    </Show>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }.into_any(),
            }}
            <PaginationBar view_model=pager on_page=move |n| set_current_page.set(n) />
        </section>
    }
}
