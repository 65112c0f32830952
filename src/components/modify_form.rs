//! Modify Form Component
//!
//! Replacement-tag editor shared by the admin list and the review queue.

use leptos::prelude::*;

use crate::review::ModifyForm;

#[component]
pub fn ModifyFormEditor(
    form: RwSignal<ModifyForm>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into, default = Signal::stored(false))] busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <form
            class="modify-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_save.run(());
            }
        >
            <label>
                "English tag"
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.tag_en.clone())
                    on:input=move |ev| form.update(|f| f.tag_en = event_target_value(&ev))
                />
            </label>
            <label>
                "Arabic tag"
                <input
                    type="text"
                    dir="rtl"
                    prop:value=move || form.with(|f| f.tag_ar.clone())
                    on:input=move |ev| form.update(|f| f.tag_ar = event_target_value(&ev))
                />
            </label>
            <label>
                "Notes"
                <textarea
                    prop:value=move || form.with(|f| f.notes.clone())
                    on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                ></textarea>
            </label>
            <div class="modify-actions">
                <button type="submit" class="save-btn" disabled=move || busy.get()>"Save"</button>
                <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
            </div>
        </form>
    }
}
