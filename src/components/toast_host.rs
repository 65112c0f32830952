//! Toast Host Component

use leptos::prelude::*;

use crate::context::{use_page, ToastKind};

/// Renders the page's transient messages
#[component]
pub fn ToastHost() -> impl IntoView {
    let page = use_page();

    view! {
        <div class="toast-host">
            <For
                each=move || page.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                    };
                    view! { <div class=class role="status">{toast.message}</div> }
                }
            />
        </div>
    }
}
