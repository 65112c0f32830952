//! Dashboard Widgets
//!
//! Read-only admin panels fed by the dashboard store: overall and daily
//! cards, the reviewer table and the upload sessions table.

use leptos::prelude::*;

use crate::components::StatCards;
use crate::store::{use_dashboard, AdminDashboardStoreFields};
use crate::views::{daily_cards, overall_cards, reviewer_rows, session_rows, Widget};

#[component]
pub fn OverallStatsWidget() -> impl IntoView {
    let store = use_dashboard();
    let cards = Signal::derive(move || store.overall().with(|w| w.map(overall_cards)));

    view! {
        <section class="widget widget-overall">
            <h3>"Overview"</h3>
            <StatCards cards=cards />
        </section>
    }
}

#[component]
pub fn DailyStatsWidget() -> impl IntoView {
    let store = use_dashboard();
    let cards = Signal::derive(move || store.daily().with(|w| w.map(daily_cards)));

    view! {
        <section class="widget widget-daily">
            <h3>"Today"</h3>
            <StatCards cards=cards />
        </section>
    }
}

#[component]
pub fn ReviewerStatsWidget() -> impl IntoView {
    let store = use_dashboard();

    view! {
        <section class="widget widget-reviewers">
            <h3>"Reviewer performance"</h3>
            {move || match store.reviewers().with(|w| w.map(|r| reviewer_rows(r))) {
                Widget::Loading => view! { <p class="widget-note">"Loading..."</p> }.into_any(),
                Widget::Unavailable => view! { <p class="widget-note">"Reviewer statistics unavailable"</p> }.into_any(),
                Widget::Ready(rows) if rows.is_empty() => {
                    view! { <p class="widget-note">"No reviews yet"</p> }.into_any()
                }
                Widget::Ready(rows) => view! {
                    <table class="data-table">
                        <thead>
                            <tr><th>"Reviewer"</th><th>"Reviews"</th><th>"Approval rate"</th></tr>
                        </thead>
                        <tbody>
                            {rows.into_iter().map(|r| view! {
                                <tr>
                                    <td>{r.username}</td>
                                    <td>{r.review_count}</td>
                                    <td>{r.approval_rate}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any(),
            }}
        </section>
    }
}

#[component]
pub fn UploadSessionsWidget() -> impl IntoView {
    let store = use_dashboard();

    view! {
        <section class="widget widget-sessions">
            <h3>"Recent uploads"</h3>
            {move || match store.sessions().with(|w| w.map(|s| session_rows(s))) {
                Widget::Loading => view! { <p class="widget-note">"Loading..."</p> }.into_any(),
                Widget::Unavailable => view! { <p class="widget-note">"Upload history unavailable"</p> }.into_any(),
                Widget::Ready(rows) if rows.is_empty() => {
                    view! { <p class="widget-note">"No uploads yet"</p> }.into_any()
                }
                Widget::Ready(rows) => view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"File"</th><th>"Status"</th><th>"Total"</th><th>"Imported"</th>
                                <th>"Failed"</th><th>"Progress"</th><th>"Uploaded"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows.into_iter().map(|r| {
                                let status_class = format!("status-badge status-{}", r.status);
                                view! {
                                    <tr data-session-id=r.id.to_string()>
                                        <td>{r.filename}</td>
                                        <td>
                                            <span class=status_class title=r.error_log.unwrap_or_default()>
                                                {r.status.clone()}
                                            </span>
                                        </td>
                                        <td>{r.total}</td>
                                        <td>{r.processed}</td>
                                        <td>{r.failed}</td>
                                        <td>{r.progress}</td>
                                        <td>{r.uploaded_at}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any(),
            }}
        </section>
    }
}
