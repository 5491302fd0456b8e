// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-size pages over a ranked result list.
//!
//! Pages are 1-based. Every page request is clamped into `[1, total_pages]`,
//! so there's no such thing as an out-of-range page: 0, negatives and numbers
//! past the end all land on a real page. An empty result list has exactly one
//! (empty) page.
//!
//! ```text
//! total_pages = max(1, ceil(len / page_size))
//! start       = (page - 1) * page_size
//! end         = min(len, start + page_size)
//! ```
//!
//! The paginator has no idea whether the list it is handed came from a new
//! query. Resetting to page 1 when results change is the caller's job;
//! `SearchSession` does it on every query change.

use crate::error::{Error, Result};
use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

/// Rows per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page-number buttons shown around the current page.
pub const DEFAULT_PAGE_BUTTONS: usize = 5;

/// `max(1, ceil(total_items / page_size))`.
pub fn total_pages(total_items: usize, page_size: NonZeroUsize) -> usize {
    total_items.div_ceil(page_size.get()).max(1)
}

/// Clamp any requested page number into `[1, total_pages]`.
pub fn clamp_page(page: i64, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    if page < 1 {
        1
    } else {
        usize::try_from(page).map_or(last, |page| page.min(last))
    }
}

/// One visible page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// The page actually shown, after clamping.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

impl<T> Page<'_, T> {
    /// Zero-based index of the first item on this page within the full list.
    pub fn start_index(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    /// 1-based inclusive bounds for "Showing X–Y of N". `None` when there are no results.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            None
        } else {
            let first = self.start_index() + 1;
            Some((first, first + self.items.len() - 1))
        }
    }

    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}

/// Slice `results` into the (clamped) requested page.
pub fn paginate<T>(results: &[T], page: i64, page_size: NonZeroUsize) -> Page<'_, T> {
    let total_pages = total_pages(results.len(), page_size);
    let page = clamp_page(page, total_pages);
    let start = ((page - 1) * page_size.get()).min(results.len());
    let end = results.len().min(start + page_size.get());

    Page {
        items: &results[start..end],
        page,
        total_pages,
        total_items: results.len(),
        page_size: page_size.get(),
    }
}

/// Which page-number buttons to show.
///
/// A window of up to `max_buttons` consecutive pages centered on `current`,
/// slid left when it would run past the last page.
pub fn page_window(current: usize, total_pages: usize, max_buttons: usize) -> RangeInclusive<usize> {
    let total_pages = total_pages.max(1);
    let max_buttons = max_buttons.max(1);

    let mut start = current.saturating_sub(max_buttons / 2).max(1);
    let mut end = start + max_buttons - 1;
    if end > total_pages {
        end = total_pages;
        start = (end + 1).saturating_sub(max_buttons).max(1);
    }
    start..=end
}

/// Current page, page size and result count. Transitions return a new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: NonZeroUsize,
    total_items: usize,
}

impl PageState {
    /// Page 1 of an empty list. Fails when `page_size` is 0.
    pub fn new(page_size: usize) -> Result<Self> {
        let page_size = NonZeroUsize::new(page_size).ok_or(Error::InvalidPageSize)?;
        Ok(PageState::with_page_size(page_size))
    }

    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        PageState {
            current_page: 1,
            page_size,
            total_items: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Back to page 1 over a new result count.
    #[must_use]
    pub fn reset(self, total_items: usize) -> Self {
        PageState {
            current_page: 1,
            total_items,
            ..self
        }
    }

    /// Jump to `page`, clamped.
    #[must_use]
    pub fn go_to(self, page: i64) -> Self {
        PageState {
            current_page: clamp_page(page, self.total_pages()),
            ..self
        }
    }

    /// One page forward. No-op on the last page.
    #[must_use]
    pub fn next(self) -> Self {
        let last = self.total_pages();
        PageState {
            current_page: (self.current_page + 1).min(last),
            ..self
        }
    }

    /// One page back. No-op on page 1.
    #[must_use]
    pub fn prev(self) -> Self {
        PageState {
            current_page: self.current_page.saturating_sub(1).max(1),
            ..self
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// The current page of `results`.
    pub fn slice<'a, T>(&self, results: &'a [T]) -> Page<'a, T> {
        paginate(results, self.current_page as i64, self.page_size)
    }
}

impl Default for PageState {
    fn default() -> Self {
        PageState {
            current_page: 1,
            page_size: NonZeroUsize::MIN.saturating_add(DEFAULT_PAGE_SIZE - 1),
            total_items: 0,
        }
    }
}
