//! Console Pages
//!
//! One top-level component per HTML page. Each runs the session guard
//! before anything else loads.

mod admin;
mod login;
mod reviewer;

pub use admin::AdminPage;
pub use login::LoginPage;
pub use reviewer::ReviewerPage;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::PageContext;
use crate::models::UserType;
use crate::session::{guard, navigate, redirect_target, GuardOutcome};

/// Run the guard once; sets the username only when the page may render
pub(crate) fn run_guard(page: PageContext, required: UserType, set_username: WriteSignal<Option<String>>) {
    spawn_local(async move {
        let client = page.client();
        let outcome = guard(&client, required).await;
        match &outcome {
            GuardOutcome::Proceed { username } => {
                log::info!("[SESSION] {} console opened by {}", required.as_str(), username);
                set_username.set(Some(username.clone()));
            }
            _ => {
                if let Some(target) = page.with_config(|c| redirect_target(c, &outcome).map(str::to_string)) {
                    navigate(&target);
                }
            }
        }
    });
}

#[component]
pub(crate) fn GuardPlaceholder() -> impl IntoView {
    view! { <div class="guard-pending">"Checking session..."</div> }
}
