//! Tab Bar Component
//!
//! Tab strip for switching between the sections of a console page.

use leptos::prelude::*;

/// Tab bar over any copyable tab key
#[component]
pub fn TabBar<T>(
    tabs: Vec<(T, &'static str)>,
    active: ReadSignal<T>,
    set_active: WriteSignal<T>,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <nav class="tab-bar">
            {tabs.into_iter().map(|(tab, label)| {
                let is_active = move || active.get() == tab;
                view! {
                    <button
                        class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| set_active.set(tab)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
