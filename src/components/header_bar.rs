//! Header Bar Component
//!
//! Page title, signed-in username, the log panel toggle and logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::LogPanel;
use crate::context::use_page;
use crate::session::navigate;

/// Top bar of both consoles
#[component]
pub fn HeaderBar(
    #[prop(into)] title: String,
    username: ReadSignal<String>,
) -> impl IntoView {
    let page = use_page();
    let (leaving, set_leaving) = signal(false);
    let (show_log, set_show_log) = signal(false);

    // Log out, then go to the login page whatever the server said
    let logout = move |_| {
        if leaving.get_untracked() {
            return;
        }
        set_leaving.set(true);
        spawn_local(async move {
            let client = page.client();
            if let Err(e) = api::logout(&client).await {
                log::warn!("[SESSION] Logout request failed: {}", e);
            }
            navigate(&page.with_config(|c| c.login_page.clone()));
        });
    };

    view! {
        <header class="console-header">
            <span class="console-title">{title}</span>
            <div class="console-user">
                <span class="console-username">{move || username.get()}</span>
                <button class="log-btn" on:click=move |_| set_show_log.update(|v| *v = !*v)>"Log"</button>
                <button class="logout-btn" disabled=move || leaving.get() on:click=logout>
                    "Log out"
                </button>
            </div>
            <Show when=move || show_log.get()>
                <LogPanel on_close=move |_| set_show_log.set(false) />
            </Show>
        </header>
    }
}
