//! Log Panel Component
//!
//! Recent console log lines, for reporting a problem without opening
//! the browser devtools.

use leptos::prelude::*;

#[component]
pub fn LogPanel(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let (lines, set_lines) = signal(console_logger::recent_lines());

    view! {
        <aside class="log-panel">
            <div class="log-panel-toolbar">
                <span>"Recent log"</span>
                <button on:click=move |_| set_lines.set(console_logger::recent_lines())>"Refresh"</button>
                <button on:click=move |_| on_close.run(())>"Close"</button>
            </div>
            <Show
                when=move || !lines.with(|l| l.is_empty())
                fallback=|| view! { <p class="widget-note">"Nothing logged yet"</p> }
            >
                <pre class="log-lines">{move || lines.get().join("\n")}</pre>
            </Show>
        </aside>
    }
}
