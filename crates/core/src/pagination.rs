//! Page cursor shared by every paginated list screen.
//!
//! The controller never talks to the network. Methods that move the cursor
//! return `true` when the caller should fetch the page described by
//! [`PaginationController::request`], and mark that fetch as in flight until
//! [`PaginationController::set_from_response`] or
//! [`PaginationController::fetch_failed`] is called.

use serde::{Deserialize, Serialize};

/// Query parameters for one page of a list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.max(1),
        }
    }

    #[must_use]
    pub fn first(size: u32) -> Self {
        Self::new(0, size)
    }

    /// Index of the first item on this page.
    #[must_use]
    pub fn offset(&self) -> usize {
        usize::try_from(u64::from(self.page) * u64::from(self.size)).unwrap_or(usize::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationController {
    page_index: u32,
    page_size: u32,
    total_pages: u32,
    total_items: u64,
    in_flight: bool,
    confirmed_page: u32,
}

impl PaginationController {
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            total_pages: 1,
            total_items: 0,
            in_flight: false,
            confirmed_page: 0,
        }
    }

    #[must_use]
    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page_index.saturating_add(1) < self.total_pages
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    #[must_use]
    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.page_index, self.page_size)
    }

    /// "Page 2 of 7" style label (1-based for humans).
    #[must_use]
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.total_pages.max(1))
    }

    /// Mark a fetch of the current page (first load or refresh after a mutation).
    pub fn begin_refresh(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn next(&mut self) -> bool {
        if self.in_flight || !self.has_next() {
            return false;
        }
        self.page_index += 1;
        self.in_flight = true;
        true
    }

    pub fn previous(&mut self) -> bool {
        if self.in_flight || !self.has_previous() {
            return false;
        }
        self.page_index -= 1;
        self.in_flight = true;
        true
    }

    /// Apply the `x-total-pages` / `x-total-elements` header values of a
    /// completed fetch.
    ///
    /// Missing or non-numeric headers fall back to one page and zero items.
    /// Returns `true` when the current page no longer exists and the cursor
    /// moved back onto the last page, which needs one more fetch.
    pub fn set_from_response(
        &mut self,
        total_pages_header: Option<&str>,
        total_items_header: Option<&str>,
    ) -> bool {
        self.total_pages = parse_header::<u32>(total_pages_header).unwrap_or(1).max(1);
        self.total_items = parse_header::<u64>(total_items_header).unwrap_or(0);
        self.in_flight = false;

        let last = self.total_pages - 1;
        if self.page_index > last {
            self.page_index = last;
            self.confirmed_page = last;
            self.in_flight = true;
            return true;
        }
        self.confirmed_page = self.page_index;
        false
    }

    /// Clear the in-flight flag after an error and return to the last page a
    /// response confirmed.
    pub fn fetch_failed(&mut self) {
        self.in_flight = false;
        self.page_index = self.confirmed_page;
    }
}

fn parse_header<T: std::str::FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|value| value.trim().parse::<T>().ok())
}
