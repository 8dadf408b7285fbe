//! Pagination controls for the listing page.
//!
//! Everything the template needs (hrefs, labels, which link is active) is
//! computed here, so the template only iterates and interpolates.

use url::form_urlencoded;

use crate::domain::entities::UserPage;

/// Pages shown on each side of the current page before collapsing into a gap.
const WINDOW: u64 = 2;

/// One entry of the numbered page navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub label: String,
    pub href: String,
    pub active: bool,
    /// Placeholder for a run of hidden pages (rendered as `...`).
    pub is_gap: bool,
}

impl PageLink {
    fn page(number: u64, href: String, active: bool) -> Self {
        Self {
            label: number.to_string(),
            href,
            active,
            is_gap: false,
        }
    }

    fn gap() -> Self {
        Self {
            label: "...".to_string(),
            href: String::new(),
            active: false,
            is_gap: true,
        }
    }
}

/// Precomputed pagination state for one rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub current_page: u64,
    pub total_pages: u64,
    pub total: u64,
    pub first_item: u64,
    pub last_item: u64,
    pub has_previous: bool,
    pub previous_href: String,
    pub has_next: bool,
    pub next_href: String,
    pub links: Vec<PageLink>,
}

impl PaginationView {
    /// Builds the controls for `page`, linking back to `base_path` and
    /// carrying `search` on every link.
    pub fn new(page: &UserPage, search: &str, base_path: &str) -> Self {
        let current = page.page;
        let last = page.total_pages;
        let href = |number: u64| page_href(base_path, search, number);

        let has_previous = current > 1;
        let has_next = current < last;

        Self {
            current_page: current,
            total_pages: last,
            total: page.total,
            first_item: page.first_item(),
            last_item: page.last_item(),
            has_previous,
            previous_href: if has_previous {
                href(current.saturating_sub(1).min(last.max(1)))
            } else {
                String::new()
            },
            has_next,
            next_href: if has_next { href(current + 1) } else { String::new() },
            links: page_links(current, last, &href),
        }
    }

    /// True when there is more than one page to navigate between.
    pub fn has_pages(&self) -> bool {
        self.total_pages > 1
    }
}

/// Link to `page` of the listing, preserving the search term when present.
pub fn page_href(base_path: &str, search: &str, page: u64) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if !search.is_empty() {
        query.append_pair("search", search);
    }
    query.append_pair("page", &page.to_string());
    format!("{}?{}", base_path, query.finish())
}

/// Numbered links: first page, a window around `current`, last page, with
/// gaps where pages are skipped.
fn page_links(current: u64, last: u64, href: &dyn Fn(u64) -> String) -> Vec<PageLink> {
    if last <= 1 {
        return Vec::new();
    }

    // Past-the-end pages center the window on the last page.
    let centre = current.min(last);
    let window_start = centre.saturating_sub(WINDOW).max(1);
    let window_end = centre.saturating_add(WINDOW).min(last);

    let mut numbers = vec![1];
    numbers.extend(window_start.max(2)..=window_end.min(last - 1));
    numbers.push(last);

    let mut links = Vec::with_capacity(numbers.len() + 2);
    let mut previous = 0;
    for number in numbers {
        if number > previous + 1 {
            links.push(PageLink::gap());
        }
        links.push(PageLink::page(number, href(number), number == current));
        previous = number;
    }

    links
}
