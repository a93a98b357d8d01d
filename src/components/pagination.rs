//! Numbered pagination controls for the admin tables.
//!
//! Page numbers come straight from the server-provided total; an
//! out-of-range request is refused before any state changes, so no fetch
//! fires for it.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Accept a page change only when the target page exists.
pub fn page_change(requested: u64, total_pages: u64) -> Option<u64> {
    if requested < 1 || requested > total_pages {
        None
    } else {
        Some(requested)
    }
}

/// 1-based inclusive result range shown as "Showing X to Y of Z".
pub fn result_range(page: u64, page_size: u64, total_count: u64) -> (u64, u64) {
    if total_count == 0 {
        return (0, 0);
    }
    let start = (page.max(1) - 1) * page_size + 1;
    let end = (page.max(1) * page_size).min(total_count);
    (start, end)
}

#[component]
pub fn Pagination(
    page: RwSignal<u64>,
    page_size: u64,
    total_pages: RwSignal<u64>,
    total_count: RwSignal<u64>,
) -> impl IntoView {
    let goto = move |target: u64| {
        if let Some(next) = page_change(target, total_pages.get_untracked()) {
            page.set(next);
        }
    };

    view! {
        <div class="pagination">
            <p class="pagination__summary">
                {move || {
                    let (start, end) = result_range(page.get(), page_size, total_count.get());
                    format!("Showing {start} to {end} of {} results", total_count.get())
                }}
            </p>
            <nav class="pagination__nav" aria-label="Pagination">
                <button
                    class="pagination__button"
                    on:click=move |_| goto(page.get_untracked().saturating_sub(1))
                >
                    "‹"
                </button>
                {move || {
                    let current = page.get();
                    (1..=total_pages.get())
                        .map(|n| {
                            view! {
                                <button
                                    class=if n == current {
                                        "pagination__button pagination__button--active"
                                    } else {
                                        "pagination__button"
                                    }
                                    on:click=move |_| goto(n)
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="pagination__button"
                    on:click=move |_| goto(page.get_untracked() + 1)
                >
                    "›"
                </button>
            </nav>
        </div>
    }
}
