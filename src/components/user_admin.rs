//! User Admin Component
//!
//! Account table with delete, and the create-account form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::use_page;
use crate::models::{NewUser, UserType};
use crate::store::{load_users, use_dashboard, AdminDashboardStoreFields};
use crate::views::{user_rows, Widget};

#[component]
pub fn UserAdmin() -> impl IntoView {
    let page = use_page();
    let store = use_dashboard();

    let delete = move |id: u64| {
        spawn_local(async move {
            let client = page.client();
            match api::delete_user(&client, id).await {
                Ok(msg) => {
                    log::info!("[ADMIN] Deleted user {}", id);
                    page.success(msg.unwrap_or_else(|| "User deleted".to_string()));
                    load_users(store, client);
                }
                Err(e) => page.error(e.user_message()),
            }
        });
    };

    view! {
        <section class="widget widget-users">
            <h3>"Users"</h3>
            <NewUserForm />
            {move || match store.users().with(|w| w.map(|u| user_rows(u))) {
                Widget::Loading => view! { <p class="widget-note">"Loading..."</p> }.into_any(),
                Widget::Unavailable => view! { <p class="widget-note">"User list unavailable"</p> }.into_any(),
                Widget::Ready(rows) => view! {
                    <table class="data-table">
                        <thead>
                            <tr><th>"Username"</th><th>"Email"</th><th>"Role"</th><th>"Created"</th><th></th></tr>
                        </thead>
                        <tbody>
                            {rows.into_iter().map(|r| {
                                let id = r.id;
                                view! {
                                    <tr>
                                        <td>{r.username}</td>
                                        <td>{r.email}</td>
                                        <td>{r.role}</td>
                                        <td>{r.created_at}</td>
                                        <td>
                                            <DeleteConfirmButton
                                                label="Delete"
                                                question="Delete this user?"
                                                on_confirm=move |_| delete(id)
                                            />
                                        </td>
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

#[component]
fn NewUserForm() -> impl IntoView {
    let page = use_page();
    let store = use_dashboard();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (role, set_role) = signal(UserType::Reviewer);
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let user = NewUser {
            username: username.get_untracked(),
            password: password.get_untracked(),
            email: email.get_untracked(),
            user_type: role.get_untracked(),
        };
        set_saving.set(true);
        spawn_local(async move {
            let client = page.client();
            match api::create_user(&client, &user).await {
                Ok(msg) => {
                    log::info!("[ADMIN] Created user {}", user.username);
                    page.success(msg.unwrap_or_else(|| "User created".to_string()));
                    set_username.set(String::new());
                    set_password.set(String::new());
                    set_email.set(String::new());
                    load_users(store, client);
                }
                Err(e) => page.error(e.user_message()),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="new-user-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <select on:change=move |ev| {
                let role = if event_target_value(&ev) == UserType::Admin.as_str() {
                    UserType::Admin
                } else {
                    UserType::Reviewer
                };
                set_role.set(role);
            }>
                <option value="reviewer" selected=true>"Reviewer"</option>
                <option value="admin">"Admin"</option>
            </select>
            <button type="submit" disabled=move || saving.get()>"Create user"</button>
        </form>
    }
}
