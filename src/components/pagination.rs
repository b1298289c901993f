//! 1-indexed pager.
//!
//! Out-of-range requests are prevented here, at the controls — the list
//! controller does not re-validate page numbers.

use leptos::prelude::*;

#[component]
pub fn Pagination(
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || (total_pages.get() > 1)>
            <nav class="pagination" aria-label="Navigation des pages">
                <button
                    class="pagination__control"
                    disabled=move || current_page.get() <= 1
                    on:click=move |_| on_select.run(current_page.get_untracked().saturating_sub(1))
                >
                    "Précédent"
                </button>
                {move || {
                    (1..=total_pages.get())
                        .map(|page| {
                            view! {
                                <button
                                    class=move || {
                                        if page == current_page.get() {
                                            "pagination__page pagination__page--active"
                                        } else {
                                            "pagination__page"
                                        }
                                    }
                                    on:click=move |_| on_select.run(page)
                                >
                                    {page}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="pagination__control"
                    disabled=move || current_page.get() >= total_pages.get()
                    on:click=move |_| on_select.run(current_page.get_untracked() + 1)
                >
                    "Suivant"
                </button>
            </nav>
        </Show>
    }
}
