//! Stat Cards Component
//!
//! A row of label/value cards for one aggregate endpoint.

use leptos::prelude::*;

use crate::views::{StatCard, Widget};

#[component]
pub fn StatCards(
    #[prop(into)] cards: Signal<Widget<Vec<StatCard>>>,
) -> impl IntoView {
    move || match cards.get() {
        Widget::Loading => view! { <div class="stat-cards loading">"Loading..."</div> }.into_any(),
        Widget::Unavailable => view! { <div class="stat-cards unavailable">"Statistics unavailable"</div> }.into_any(),
        Widget::Ready(list) => view! {
            <div class="stat-cards">
                {list.into_iter().map(|c| view! {
                    <div class="stat-card" data-stat=c.key>
                        <span class="stat-value">{c.value}</span>
                        <span class="stat-label">{c.label}</span>
                    </div>
                }).collect_view()}
            </div>
        }.into_any(),
    }
}
