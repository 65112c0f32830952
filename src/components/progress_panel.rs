//! Progress Panel Component

use leptos::prelude::*;

use crate::components::StatCards;
use crate::models::OverallStats;
use crate::review::ReviewQueue;
use crate::views::{progress_cards, Widget};

/// Personal counters plus the decisions made since the page was opened
#[component]
pub fn ProgressPanel(
    stats: RwSignal<Widget<OverallStats>>,
    queue: RwSignal<ReviewQueue>,
) -> impl IntoView {
    let cards = Signal::derive(move || {
        let session_count = queue.with(|q| q.submitted_count);
        stats.with(|w| w.map(|s| progress_cards(s, session_count)))
    });

    view! {
        <section class="widget widget-progress">
            <h3>"Your progress"</h3>
            <StatCards cards=cards />
        </section>
    }
}
