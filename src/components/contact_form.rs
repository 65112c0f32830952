//! Contact Form Component
//!
//! Message from a reviewer to the administrators.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_page;
use crate::models::{ContactMessage, UserType};

#[component]
pub fn ContactForm() -> impl IntoView {
    let page = use_page();
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (sending, set_sending) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let contact = ContactMessage {
            subject: subject.get_untracked().trim().to_string(),
            message: message.get_untracked().trim().to_string(),
            sender_type: UserType::Reviewer,
        };
        set_sending.set(true);
        spawn_local(async move {
            let client = page.client();
            match api::send_contact(&client, &contact).await {
                Ok(msg) => {
                    log::info!("[REVIEW] Contact message sent");
                    page.success(msg.unwrap_or_else(|| "Message sent".to_string()));
                    set_subject.set(String::new());
                    set_message.set(String::new());
                }
                Err(e) => page.error(e.user_message()),
            }
            set_sending.set(false);
        });
    };

    view! {
        <section class="widget widget-contact">
            <h3>"Contact the admins"</h3>
            <form class="contact-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Subject"
                    prop:value=move || subject.get()
                    on:input=move |ev| set_subject.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Message"
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" disabled=move || sending.get()>"Send"</button>
            </form>
        </section>
    }
}
