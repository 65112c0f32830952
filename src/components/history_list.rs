//! History List Component
//!
//! The reviewer's past decisions, filterable by decision type.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_page;
use crate::models::{HistoryFilter, ReviewHistory};
use crate::views::{history_rows, Widget};

fn filter_label(filter: HistoryFilter) -> &'static str {
    match filter {
        HistoryFilter::All => "All",
        HistoryFilter::Only(d) => crate::views::decision_label(d),
    }
}

#[component]
pub fn HistoryList(
    /// True while the history tab is visible
    #[prop(into)]
    active: Signal<bool>,
) -> impl IntoView {
    let page = use_page();
    let (filter, set_filter) = signal(HistoryFilter::All);
    let (current_page, set_current_page) = signal(1u32);
    let history = RwSignal::new(Widget::<ReviewHistory>::Loading);

    Effect::new(move |_| {
        if !active.get() {
            return;
        }
        let filter = filter.get();
        let number = current_page.get();
        history.set(Widget::Loading);
        spawn_local(async move {
            let client = page.client();
            let result = api::review_history(&client, filter, number).await;
            history.set(Widget::from_result(result, "review history"));
        });
    });

    let paging = move || {
        history.with(|w| match w {
            Widget::Ready(h) if h.has_prev || h.has_next => Some((h.has_prev, h.has_next, h.current_page, h.pages)),
            _ => None,
        })
    };

    view! {
        <section class="widget widget-history">
            <div class="list-toolbar">
                <h3>"Review history"</h3>
                <select on:change=move |ev| {
                    set_filter.set(HistoryFilter::parse(&event_target_value(&ev)));
                    set_current_page.set(1);
                }>
                    {HistoryFilter::ALL.into_iter().map(|f| view! {
                        <option value=f.as_str() selected=move || filter.get() == f>{filter_label(f)}</option>
                    }).collect_view()}
                </select>
            </div>
            {move || match history.with(|w| w.map(|h| history_rows(&h.reviews))) {
                Widget::Loading => view! { <p class="widget-note">"Loading..."</p> }.into_any(),
                Widget::Unavailable => view! { <p class="widget-note">"History unavailable"</p> }.into_any(),
                Widget::Ready(rows) if rows.is_empty() => {
                    view! { <p class="widget-note">"No reviews yet"</p> }.into_any()
                }
                Widget::Ready(rows) => view! {
                    <ul class="history-list">
                        {rows.into_iter().map(|r| view! {
                            <li class="history-row">
                                <p class="history-text">{r.snippet}</p>
                                <span class=format!("decision-badge decision-{}", r.decision_class)>
                                    {r.decision_label}
                                </span>
                                {r.new_tags.map(|t| view! { <span class="history-tags">{t}</span> })}
                                <span class="history-date">{r.reviewed_at}</span>
                                <span class="history-confidence">{r.confidence}</span>
                                {r.time_spent.map(|t| view! { <span class="history-time">{t}</span> })}
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_any(),
            }}
            {move || paging().map(|(has_prev, has_next, current, pages)| {
                let current = current.unwrap_or_else(|| current_page.get_untracked());
                view! {
                    <nav class="pagination">
                        <button
                            class="page-btn prev"
                            disabled=!has_prev
                            on:click=move |_| set_current_page.set(current.saturating_sub(1).max(1))
                        >
                            "‹ Prev"
                        </button>
                        <span class="page-status">
                            {match pages {
                                Some(total) => format!("Page {} of {}", current, total),
                                None => format!("Page {}", current),
                            }}
                        </span>
                        <button
                            class="page-btn next"
                            disabled=!has_next
                            on:click=move |_| set_current_page.set(current + 1)
                        >
                            "Next ›"
                        </button>
                    </nav>
                }
            })}
        </section>
    }
}
