//! Admin Console Page
//!
//! Dashboard widgets with auto-refresh, the upload panel, the review list
//! and user management.

use std::time::Duration;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    DailyStatsWidget, HeaderBar, OverallStatsWidget, ReviewList, ReviewerStatsWidget, TabBar, UploadPanel,
    UploadSessionsWidget, UserAdmin,
};
use crate::context::use_page;
use crate::models::UserType;
use crate::pages::{run_guard, GuardPlaceholder};
use crate::store::{load_all, AdminDashboard, DashboardStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Dashboard,
    Review,
    Users,
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let page = use_page();
    let (username, set_username) = signal(None::<String>);
    run_guard(page, UserType::Admin, set_username);

    view! {
        <Show when=move || username.get().is_some() fallback=|| view! { <GuardPlaceholder /> }>
            <AdminConsole username=username />
        </Show>
    }
}

#[component]
fn AdminConsole(username: ReadSignal<Option<String>>) -> impl IntoView {
    let page = use_page();
    let store: DashboardStore = Store::new(AdminDashboard::default());
    provide_context(store);

    let (display_name, set_display_name) = signal(String::new());
    Effect::new(move |_| set_display_name.set(username.get().unwrap_or_default()));

    let limit = page.with_config(|c| c.upload_sessions_limit);
    load_all(store, page.client(), limit);

    let secs = page.with_config(|c| c.dashboard_refresh_secs);
    if secs > 0 {
        match set_interval_with_handle(move || load_all(store, page.client(), limit), Duration::from_secs(u64::from(secs))) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("[ADMIN] Auto-refresh disabled: {:?}", e),
        }
    }

    let (tab, set_tab) = signal(AdminTab::Dashboard);
    let tabs = vec![
        (AdminTab::Dashboard, "Dashboard"),
        (AdminTab::Review, "Review"),
        (AdminTab::Users, "Users"),
    ];

    view! {
        <div class="console admin-console">
            <HeaderBar title="Tagging Admin" username=display_name />
            <TabBar tabs=tabs active=tab set_active=set_tab />
            <div class="tab-panel" class:hidden=move || tab.get() != AdminTab::Dashboard>
                <div class="widget-grid">
                    <OverallStatsWidget />
                    <DailyStatsWidget />
                    <UploadPanel />
                    <UploadSessionsWidget />
                    <ReviewerStatsWidget />
                </div>
            </div>
            <Show when=move || tab.get() == AdminTab::Review>
                <ReviewList />
            </Show>
            <div class="tab-panel" class:hidden=move || tab.get() != AdminTab::Users>
                <UserAdmin />
            </div>
        </div>
    }
}
