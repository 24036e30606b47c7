//! Page selector below the expense list.

use dioxus::prelude::*;

/// One slot in the page selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Gap,
}

/// Pages to offer: the first, the last, and one either side of the current
/// page, with gaps where pages are skipped.
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    let mut items = Vec::new();
    let mut last_shown = 0;
    for page in 1..=total {
        let near_current = page + 1 >= current && page <= current + 1;
        if page == 1 || page == total || near_current {
            if page > last_shown + 1 {
                items.push(PageItem::Gap);
            }
            items.push(PageItem::Page(page));
            last_shown = page;
        }
    }
    items
}

fn page_class(current: bool) -> &'static str {
    if current {
        "pagination-page active"
    } else {
        "pagination-page"
    }
}

fn aria_current(current: bool) -> &'static str {
    if current {
        "page"
    } else {
        "false"
    }
}

#[component]
pub fn Pagination(current_page: u32, total_pages: u32, on_change: EventHandler<u32>) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    let items = page_items(current_page, total_pages);

    rsx! {
        nav {
            class: "pagination flex items-center gap-1 mt-4",
            "aria-label": "Pagination",
            button {
                class: "pagination-prev",
                disabled: current_page <= 1,
                onclick: move |_| on_change.call(current_page.saturating_sub(1).max(1)),
                "Previous"
            }
            for item in items {
                if let PageItem::Page(page) = item {
                    button {
                        class: page_class(page == current_page),
                        "aria-current": aria_current(page == current_page),
                        onclick: move |_| on_change.call(page),
                        "{page}"
                    }
                } else {
                    span { class: "pagination-gap", "…" }
                }
            }
            button {
                class: "pagination-next",
                disabled: current_page >= total_pages,
                onclick: move |_| on_change.call((current_page + 1).min(total_pages)),
                "Next"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Gap, Page};

    #[test]
    fn test_small_totals_show_every_page() {
        assert!(page_items(1, 0).is_empty());
        assert_eq!(page_items(1, 1), vec![Page(1)]);
        assert_eq!(page_items(2, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_gaps_around_current() {
        assert_eq!(
            page_items(5, 10),
            vec![Page(1), Gap, Page(4), Page(5), Page(6), Gap, Page(10)]
        );
        assert_eq!(page_items(1, 10), vec![Page(1), Page(2), Gap, Page(10)]);
        assert_eq!(page_items(10, 10), vec![Page(1), Gap, Page(9), Page(10)]);
    }

    #[test]
    fn test_adjacent_pages_have_no_gap() {
        assert_eq!(
            page_items(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }
}
