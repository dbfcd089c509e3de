//! Pagination Component
//!
//! Numbered page controls with a sliding window around the current page.

use leptos::prelude::*;

/// One rendered control in the page strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Pages to render: first and last always, plus a window around `current`.
/// Short ranges render every page with no ellipses.
pub fn page_window(current: u32, total: u32) -> Vec<PageItem> {
    if total <= 7 {
        return (1..=total).map(PageItem::Page).collect();
    }
    let low = current.saturating_sub(1).max(2);
    let high = (current + 1).min(total - 1);

    let mut items = vec![PageItem::Page(1)];
    if low > 2 {
        items.push(PageItem::Ellipsis);
    }
    for page in low..=high {
        items.push(PageItem::Page(page));
    }
    if high < total - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

/// Clickable page strip with previous/next controls
#[component]
pub fn Pagination(
    current_page: Signal<u32>,
    total_pages: Signal<u32>,
    #[prop(into)] on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <nav class="pagination">
            <button
                class="page-btn"
                disabled=move || current_page.get() <= 1
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
            >
                "<"
            </button>
            {move || {
                let current = current_page.get();
                page_window(current, total_pages.get())
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(page) => {
                            let class = if page == current { "page-btn active" } else { "page-btn" };
                            view! {
                                <button class=class on:click=move |_| on_page_change.run(page)>
                                    {page}
                                </button>
                            }
                                .into_any()
                        }
                        PageItem::Ellipsis => {
                            view! { <span class="page-ellipsis">"..."</span> }.into_any()
                        }
                    })
                    .collect_view()
            }}
            <button
                class="page-btn"
                disabled=move || current_page.get() >= total_pages.get()
                on:click=move |_| on_page_change.run(current_page.get() + 1)
            >
                ">"
            </button>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn short_ranges_render_every_page() {
        assert_eq!(
            page_window(2, 5),
            [Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert_eq!(page_window(1, 1), [Page(1)]);
    }

    #[test]
    fn window_centers_on_the_current_page() {
        assert_eq!(
            page_window(5, 10),
            [
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn edges_drop_the_unneeded_ellipsis() {
        assert_eq!(
            page_window(1, 10),
            [Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(10, 10),
            [Page(1), Ellipsis, Page(9), Page(10)]
        );
    }
}
