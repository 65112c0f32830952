//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_page;
use crate::session::{home_page, navigate};

#[component]
pub fn LoginForm() -> impl IntoView {
    let page = use_page();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        set_error.set(None);
        set_pending.set(true);
        spawn_local(async move {
            let client = page.client();
            match api::login(&client, &username.get_untracked(), &password.get_untracked()).await {
                Ok(resp) => {
                    log::info!("[SESSION] Logged in as {}", resp.user_type.as_str());
                    let target = page.with_config(|c| home_page(c, resp.user_type).to_string());
                    navigate(&target);
                }
                Err(e) => {
                    set_error.set(Some(e.user_message()));
                    set_pending.set(false);
                }
            }
        });
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <h2>"Sign in"</h2>
            <input
                type="text"
                placeholder="Username"
                autocomplete="username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                autocomplete="current-password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            {move || error.get().map(|e| view! { <p class="login-error">{e}</p> })}
            <button type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}
