//! Pagination Component
//!
//! First / previous / numbered / next / last page controls.

use leptos::prelude::*;

/// Pages always shown at each end
const BOUNDARY: i64 = 1;
/// Pages shown on each side of the current one
const SIBLINGS: i64 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Numbered buttons for `count` pages with `page` selected.
///
/// Keeps the first and last page, the current page with its neighbours, and
/// collapses the gaps into ellipses. A gap of one page shows the page instead.
pub fn pagination_items(count: usize, page: usize) -> Vec<PageItem> {
    let count = count as i64;
    let page = page as i64;

    let start_pages: Vec<i64> = (1..=BOUNDARY.min(count)).collect();
    let end_pages: Vec<i64> = ((count - BOUNDARY + 1).max(BOUNDARY + 1)..=count).collect();

    let siblings_start = (page - SIBLINGS)
        .min(count - BOUNDARY - SIBLINGS * 2 - 1)
        .max(BOUNDARY + 2);
    let siblings_end = (page + SIBLINGS)
        .max(BOUNDARY + SIBLINGS * 2 + 2)
        .min(end_pages.first().map_or(count - 1, |first| first - 2));

    let mut items: Vec<PageItem> = start_pages
        .iter()
        .map(|&p| PageItem::Page(p as usize))
        .collect();

    if siblings_start > BOUNDARY + 2 {
        items.push(PageItem::Ellipsis);
    } else if BOUNDARY + 1 < count - BOUNDARY {
        items.push(PageItem::Page((BOUNDARY + 1) as usize));
    }

    items.extend((siblings_start..=siblings_end).map(|p| PageItem::Page(p as usize)));

    if siblings_end < count - BOUNDARY - 1 {
        items.push(PageItem::Ellipsis);
    } else if count - BOUNDARY > BOUNDARY {
        items.push(PageItem::Page((count - BOUNDARY) as usize));
    }

    items.extend(end_pages.iter().map(|&p| PageItem::Page(p as usize)));
    items
}

#[component]
pub fn Pagination(
    #[prop(into)] count: Signal<usize>,
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] on_change: Callback<usize>,
) -> impl IntoView {
    let go = move |target: usize| {
        if target >= 1 && target <= count.get_untracked() && target != page.get_untracked() {
            on_change.run(target);
        }
    };
    let at_start = move || page.get() <= 1;
    let at_end = move || page.get() >= count.get();

    view! {
        <nav class="pagination" aria-label="pagination navigation">
            <ul>
                <li>
                    <button aria-label="Go to first page" disabled=at_start on:click=move |_| go(1)>"«"</button>
                </li>
                <li>
                    <button
                        aria-label="Go to previous page"
                        disabled=at_start
                        on:click=move |_| go(page.get_untracked().saturating_sub(1))
                    >
                        "‹"
                    </button>
                </li>
                {move || {
                    let current = page.get();
                    pagination_items(count.get(), current)
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(n) => {
                                let selected = n == current;
                                view! {
                                    <li>
                                        <button
                                            class=if selected { "page-btn selected" } else { "page-btn" }
                                            aria-current=if selected { Some("true") } else { None }
                                            aria-label=format!("Go to page {}", n)
                                            on:click=move |_| go(n)
                                        >
                                            {n}
                                        </button>
                                    </li>
                                }.into_any()
                            }
                            PageItem::Ellipsis => view! { <li class="ellipsis">"…"</li> }.into_any(),
                        })
                        .collect_view()
                }}
                <li>
                    <button
                        aria-label="Go to next page"
                        disabled=at_end
                        on:click=move |_| go(page.get_untracked() + 1)
                    >
                        "›"
                    </button>
                </li>
                <li>
                    <button aria-label="Go to last page" disabled=at_end on:click=move |_| go(count.get_untracked())>"»"</button>
                </li>
            </ul>
        </nav>
    }
}
