//! Pagination arithmetic.
//!
//! Everything in this module is pure: it knows nothing about documents,
//! terminals or URLs, which keeps the slicing and windowing rules testable
//! on their own. Pages are 1-indexed throughout.

use std::ops::{Range, RangeInclusive};

/// Number of items shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Size of the numbered button window unless configured otherwise.
pub const DEFAULT_MAX_BUTTONS: usize = 7;

/// Returns the number of pages needed for `total` items.
///
/// A page size of zero is treated as one.
///
/// # Examples
///
/// ```rust
/// use list_pager::pager::total_pages;
///
/// assert_eq!(total_pages(25, 10), 3);
/// assert_eq!(total_pages(30, 10), 3);
/// assert_eq!(total_pages(0, 10), 0);
/// ```
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Parses a raw page value the way a browser's `parseInt(value, 10)` does.
///
/// Leading whitespace is skipped, an optional sign is accepted and the
/// longest run of ASCII digits that follows is used; trailing garbage is
/// ignored. Returns `None` when no digits are present. Oversized values
/// saturate instead of overflowing.
///
/// # Examples
///
/// ```rust
/// use list_pager::pager::parse_page;
///
/// assert_eq!(parse_page("3"), Some(3));
/// assert_eq!(parse_page("  4th"), Some(4));
/// assert_eq!(parse_page("-2"), Some(-2));
/// assert_eq!(parse_page("abc"), None);
/// ```
pub fn parse_page(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let value = rest.as_bytes()[..digits].iter().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -value } else { value })
}

/// Forces a requested page into `[1, total_pages]`.
///
/// Missing and non-positive requests fall back to the first page; requests
/// past the end land on the last page.
///
/// # Examples
///
/// ```rust
/// use list_pager::pager::clamp_page;
///
/// assert_eq!(clamp_page(Some(5), 3), 3);
/// assert_eq!(clamp_page(Some(0), 3), 1);
/// assert_eq!(clamp_page(None, 3), 1);
/// ```
pub fn clamp_page(requested: Option<i64>, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    match requested {
        Some(page) if page >= 1 => usize::try_from(page).map_or(last, |page| page.min(last)),
        _ => 1,
    }
}

/// Parses and clamps a raw page value in one step.
pub fn resolve_page(raw: Option<&str>, total_pages: usize) -> usize {
    clamp_page(raw.and_then(parse_page), total_pages)
}

/// Returns the item indices shown on `page`.
///
/// # Examples
///
/// ```rust
/// use list_pager::pager::visible_range;
///
/// assert_eq!(visible_range(1, 10, 25), 0..10);
/// assert_eq!(visible_range(3, 10, 25), 20..25);
/// ```
pub fn visible_range(page: usize, page_size: usize, total: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

/// Computes the window of numbered pages to offer around `current`.
///
/// At most `max_buttons` pages are returned. The window is centred on the
/// current page and slides back from the end so it keeps its size near the
/// last page.
///
/// # Examples
///
/// ```rust
/// use list_pager::pager::page_window;
///
/// assert_eq!(page_window(5, 20, 7), 2..=8);
/// assert_eq!(page_window(1, 20, 7), 1..=7);
/// assert_eq!(page_window(20, 20, 7), 14..=20);
/// assert_eq!(page_window(2, 3, 7), 1..=3);
/// ```
pub fn page_window(
    current: usize,
    total_pages: usize,
    max_buttons: usize,
) -> RangeInclusive<usize> {
    let total_pages = total_pages.max(1);
    let buttons = max_buttons.max(1).min(total_pages);
    let current = current.clamp(1, total_pages);

    let mut start = current.saturating_sub(buttons / 2).max(1);
    let end = (start + buttons - 1).min(total_pages);
    if end - start + 1 < buttons {
        start = (end + 1).saturating_sub(buttons).max(1);
    }
    start..=end
}

/// Pagination state of an active paginator.
///
/// A `PageState` only exists when there is something to paginate, that is
/// when the item count exceeds the page size. `current` is always within
/// `[1, total_pages]`.
///
/// # Examples
///
/// ```rust
/// use list_pager::pager::PageState;
///
/// let mut state = PageState::new(25, 10, 1).unwrap();
/// assert_eq!(state.total_pages(), 3);
///
/// state.set_page(9);
/// assert_eq!(state.current(), 3);
/// assert!(state.on_last_page());
///
/// // Ten items fit on one page, nothing to paginate.
/// assert!(PageState::new(10, 10, 1).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    total_items: usize,
    page_size: usize,
    total_pages: usize,
    current: usize,
}

impl PageState {
    /// Creates the state for `total_items` items, starting on `page`
    /// (clamped). Returns `None` when everything fits on one page.
    pub fn new(total_items: usize, page_size: usize, page: usize) -> Option<Self> {
        let page_size = page_size.max(1);
        if total_items <= page_size {
            return None;
        }
        let total_pages = total_pages(total_items, page_size);
        Some(Self {
            total_items,
            page_size,
            total_pages,
            current: page.clamp(1, total_pages),
        })
    }

    /// The current page.
    pub fn current(&self) -> usize {
        self.current
    }

    /// The number of pages.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// The number of items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The number of items being paginated.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Moves to `page`, clamped into range, and returns the page actually
    /// selected.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.current = page.clamp(1, self.total_pages);
        self.current
    }

    /// Returns true on page 1.
    pub fn on_first_page(&self) -> bool {
        self.current == 1
    }

    /// Returns true on the last page.
    pub fn on_last_page(&self) -> bool {
        self.current == self.total_pages
    }

    /// Target of the "previous" control.
    pub fn prev_target(&self) -> usize {
        self.current.saturating_sub(1).max(1)
    }

    /// Target of the "next" control.
    pub fn next_target(&self) -> usize {
        (self.current + 1).min(self.total_pages)
    }

    /// Item indices shown on the current page.
    pub fn visible_range(&self) -> Range<usize> {
        visible_range(self.current, self.page_size, self.total_items)
    }

    /// Returns true if the item at `index` is shown on the current page.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible_range().contains(&index)
    }

    /// The numbered window for the current page.
    pub fn window(&self, max_buttons: usize) -> RangeInclusive<usize> {
        page_window(self.current, self.total_pages, max_buttons)
    }
}

/// Returns the indices of the items that would be visible if `page` were
/// shown, after clamping `page` into range.
///
/// This does not change `state`.
///
/// # Examples
///
/// ```rust
/// use list_pager::pager::{compute_visible_pages, PageState};
///
/// let state = PageState::new(25, 10, 1).unwrap();
/// assert_eq!(compute_visible_pages(&state, 3), vec![20, 21, 22, 23, 24]);
/// assert_eq!(compute_visible_pages(&state, 99), vec![20, 21, 22, 23, 24]);
/// ```
pub fn compute_visible_pages(state: &PageState, page: usize) -> Vec<usize> {
    let page = page.clamp(1, state.total_pages);
    visible_range(page, state.page_size, state.total_items).collect()
}
