//! Delete Confirm Button Component
//!
//! Inline two-step delete: the first click asks, the second one deletes.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows `label` initially. When clicked, shows `question` with confirm and
/// cancel buttons; `on_confirm` runs only after the second click.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into, default = "Delete?".to_string())] question: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || {
                let label = label.clone();
                view! {
                    <button class="delete-btn" on:click=move |_| set_confirming.set(true)>
                        {label}
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{question.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "No"
                </button>
            </span>
        </Show>
    }
}
