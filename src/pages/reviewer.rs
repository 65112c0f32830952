//! Reviewer Console Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ContactForm, HeaderBar, HistoryList, ProgressPanel, ReviewPanel, TabBar};
use crate::context::use_page;
use crate::models::{OverallStats, UserType};
use crate::pages::{run_guard, GuardPlaceholder};
use crate::review::ReviewQueue;
use crate::views::Widget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReviewerTab {
    Review,
    Progress,
    History,
    Contact,
}

#[component]
pub fn ReviewerPage() -> impl IntoView {
    let page = use_page();
    let (username, set_username) = signal(None::<String>);
    run_guard(page, UserType::Reviewer, set_username);

    view! {
        <Show when=move || username.get().is_some() fallback=|| view! { <GuardPlaceholder /> }>
            <ReviewerConsole username=username />
        </Show>
    }
}

#[component]
fn ReviewerConsole(username: ReadSignal<Option<String>>) -> impl IntoView {
    let page = use_page();
    let queue = RwSignal::new(ReviewQueue::new());
    let stats = RwSignal::new(Widget::<OverallStats>::Loading);

    let (display_name, set_display_name) = signal(String::new());
    Effect::new(move |_| set_display_name.set(username.get().unwrap_or_default()));

    let load_stats = move || {
        spawn_local(async move {
            let client = page.client();
            let result = api::get_stats(&client).await;
            stats.set(Widget::from_result(result, "progress stats"));
        });
    };
    load_stats();

    let (tab, set_tab) = signal(ReviewerTab::Review);
    let tabs = vec![
        (ReviewerTab::Review, "Review"),
        (ReviewerTab::Progress, "Progress"),
        (ReviewerTab::History, "History"),
        (ReviewerTab::Contact, "Contact"),
    ];

    // Fresh numbers each time the progress tab is opened
    Effect::new(move |prev: Option<ReviewerTab>| {
        let current = tab.get();
        if current == ReviewerTab::Progress && prev != Some(ReviewerTab::Progress) {
            load_stats();
        }
        current
    });

    let review_active = Signal::derive(move || tab.get() == ReviewerTab::Review);
    let history_active = Signal::derive(move || tab.get() == ReviewerTab::History);

    view! {
        <div class="console reviewer-console">
            <HeaderBar title="Tagging Review" username=display_name />
            <TabBar tabs=tabs active=tab set_active=set_tab />
            <div class="tab-panel" class:hidden=move || tab.get() != ReviewerTab::Review>
                <ReviewPanel queue=queue active=review_active on_submitted=move |_| load_stats() />
            </div>
            <div class="tab-panel" class:hidden=move || tab.get() != ReviewerTab::Progress>
                <ProgressPanel stats=stats queue=queue />
            </div>
            <div class="tab-panel" class:hidden=move || tab.get() != ReviewerTab::History>
                <HistoryList active=history_active />
            </div>
            <div class="tab-panel" class:hidden=move || tab.get() != ReviewerTab::Contact>
                <ContactForm />
            </div>
        </div>
    }
}
