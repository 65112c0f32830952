//! Login Page
//!
//! Shows the login form, or forwards a live session to its console.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::LoginForm;
use crate::context::use_page;
use crate::session::{home_page, navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let page = use_page();
    let (checked, set_checked) = signal(false);

    spawn_local(async move {
        let client = page.client();
        match api::check_session(&client).await {
            Ok(session) if session.logged_in => {
                if let Some(role) = session.user_type {
                    let target = page.with_config(|c| home_page(c, role).to_string());
                    navigate(&target);
                    return;
                }
            }
            Ok(_) => {}
            Err(e) => log::warn!("[SESSION] Session check failed: {}", e),
        }
        set_checked.set(true);
    });

    view! {
        <div class="login-page">
            <Show when=move || checked.get() fallback=|| view! { <div class="guard-pending">"Checking session..."</div> }>
                <LoginForm />
            </Show>
        </div>
    }
}
