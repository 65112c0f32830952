//! Pagination Bar Component
//!
//! Numbered page buttons with previous/next arrows.

use leptos::prelude::*;

use crate::pagination::PaginationView;

#[component]
pub fn PaginationBar(
    #[prop(into)] view_model: Signal<Option<PaginationView>>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    move || {
        view_model.get().map(|pv| {
            let prev = pv.prev;
            let next = pv.next;
            view! {
                <nav class="pagination">
                    <button
                        class="page-btn prev"
                        disabled=prev.is_none()
                        on:click=move |_| if let Some(p) = prev { on_page.run(p) }
                    >
                        "‹ Prev"
                    </button>
                    {pv.pages.into_iter().map(|b| {
                        let n = b.number;
                        view! {
                            <button
                                class=if b.active { "page-btn active" } else { "page-btn" }
                                on:click=move |_| on_page.run(n)
                            >
                                {n}
                            </button>
                        }
                    }).collect_view()}
                    <button
                        class="page-btn next"
                        disabled=next.is_none()
                        on:click=move |_| if let Some(p) = next { on_page.run(p) }
                    >
                        "Next ›"
                    </button>
                </nav>
            }
        })
    }
}
