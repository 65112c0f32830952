//! Upload Panel Component
//!
//! Spreadsheet picker with an estimated progress bar. A successful upload
//! refreshes the overall stats and the sessions table.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, UploadFile};
use crate::context::use_page;
use crate::store::{load_overall, load_sessions, use_dashboard};
use crate::upload::{accept_attr, result_message, validate_file, UploadProgress};

#[component]
pub fn UploadPanel() -> impl IntoView {
    let page = use_page();
    let store = use_dashboard();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (progress, set_progress) = signal(UploadProgress::Idle);
    let (summary, set_summary) = signal(None::<String>);

    let allowed = page.with_config(|c| c.upload_extensions.clone());
    let accept = accept_attr(&allowed);

    let selected_file = move || -> Option<UploadFile> {
        let input = input_ref.get()?;
        let file = input.files()?.get(0)?;
        Some(UploadFile::from_browser(file))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if progress.get_untracked().in_flight() {
            return;
        }

        let allowed = page.with_config(|c| c.upload_extensions.clone());
        let file = match validate_file(selected_file(), &allowed) {
            Ok(f) => f,
            Err(e) => {
                page.error(e.user_message());
                return;
            }
        };

        set_summary.set(None);
        set_progress.set(UploadProgress::started());

        let delay = page.with_config(|c| c.upload_milestone_delay_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            set_progress.update(|p| *p = p.waiting());
        });

        spawn_local(async move {
            let client = page.client();
            match api::upload_spreadsheet(&client, Some(file), &allowed).await {
                Ok(result) => {
                    let message = result_message(&result);
                    log::info!("[ADMIN] {}", message);
                    set_progress.set(UploadProgress::Done);
                    set_summary.set(Some(message.clone()));
                    page.success(message);
                    if let Some(input) = input_ref.get_untracked() {
                        input.set_value("");
                    }
                    load_overall(store, client.clone());
                    load_sessions(store, client, page.with_config(|c| c.upload_sessions_limit));
                }
                Err(e) => {
                    log::error!("[ADMIN] Upload failed: {}", e);
                    set_progress.set(UploadProgress::Failed);
                    page.error(e.user_message());
                }
            }
        });
    };

    view! {
        <section class="widget widget-upload">
            <h3>"Upload spreadsheet"</h3>
            <form class="upload-form" on:submit=on_submit>
                <input type="file" accept=accept node_ref=input_ref />
                <button type="submit" disabled=move || progress.get().in_flight()>
                    {move || if progress.get().in_flight() { "Uploading..." } else { "Upload" }}
                </button>
            </form>
            <Show when=move || progress.get() != UploadProgress::Idle>
                <div class="upload-progress" title="Estimated">
                    <div
                        class="upload-progress-fill"
                        style=move || format!("width: {}%", progress.get().percent())
                    ></div>
                    <span class="upload-progress-label">
                        {move || match progress.get() {
                            UploadProgress::Failed => "Upload failed".to_string(),
                            p => format!("{}% (estimated)", p.percent()),
                        }}
                    </span>
                </div>
            </Show>
            {move || summary.get().map(|s| view! { <p class="upload-summary">{s}</p> })}
        </section>
    }
}
