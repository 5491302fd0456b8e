// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A search session: the engine as a caller sees it.
//!
//! Owns the store and configuration, and the three pieces of interaction
//! state: the current search, the current page, and the open record. Every
//! method is a synchronous transition triggered by one user event (typing,
//! paging, clicking a row, closing the detail view).
//!
//! # Policies
//!
//! - A query change always resets to page 1, even when the result count
//!   happens to be the same.
//! - Searching never touches the selection. Only `dismiss` closes it.
//! - Selecting a form number the store doesn't know leaves the selection as
//!   it was.

use crate::catalog::RecordStore;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::search::paginate::{Page, PageState};
use crate::search::search;
use crate::search::selection::SelectionState;
use crate::types::{MatchResult, Record, SearchState, SearchStats};
use std::mem;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct SearchSession {
    store: RecordStore,
    config: SearchConfig,
    search: SearchState,
    page: PageState,
    selection: SelectionState,
}

impl SearchSession {
    /// Validate `config` and start with the empty query (the whole catalog, page 1).
    pub fn new(store: RecordStore, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let page_size = config.page_size()?;
        let search = search("", &store, &config.weights, config.threshold);
        let page = PageState::with_page_size(page_size).reset(search.len());

        Ok(SearchSession {
            store,
            config,
            search,
            page,
            selection: SelectionState::Closed,
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn state(&self) -> &SearchState {
        &self.search
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    // ---------------------------------------------------------------------
    // Query
    // ---------------------------------------------------------------------

    /// Re-rank for `query`. Resets to page 1 when the query text changed.
    pub fn set_query(&mut self, query: &str) -> &SearchState {
        let changed = query != self.search.query;
        self.search = search(query, &self.store, &self.config.weights, self.config.threshold);

        self.page = if changed {
            self.page.reset(self.search.len())
        } else {
            // Same text, same results: keep the page, refresh the count
            self.page
                .reset(self.search.len())
                .go_to(self.page.current_page() as i64)
        };

        debug!(
            query,
            results = self.search.len(),
            page = self.page.current_page(),
            "query updated"
        );
        &self.search
    }

    /// Back to the whole catalog.
    pub fn clear_query(&mut self) -> &SearchState {
        self.set_query("")
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats::new(self.search.len(), self.store.len())
    }

    // ---------------------------------------------------------------------
    // Pages
    // ---------------------------------------------------------------------

    pub fn visible_page(&self) -> Page<'_, MatchResult> {
        self.page.slice(&self.search.results)
    }

    pub fn next_page(&mut self) -> Page<'_, MatchResult> {
        self.page = self.page.next();
        self.visible_page()
    }

    pub fn prev_page(&mut self) -> Page<'_, MatchResult> {
        self.page = self.page.prev();
        self.visible_page()
    }

    pub fn go_to_page(&mut self, page: i64) -> Page<'_, MatchResult> {
        self.page = self.page.go_to(page);
        self.visible_page()
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    /// Open the record with this form number. Unknown numbers change nothing.
    pub fn select(&mut self, form_number: &str) -> Option<&Record> {
        let Some(record) = self.store.find(form_number).cloned() else {
            warn!(form_number, "selection ignored: form not in catalog");
            return None;
        };
        self.selection = mem::take(&mut self.selection).select(record);
        self.selection.selected()
    }

    /// Open the `row`-th record (0-based) of the visible page.
    pub fn select_visible_row(&mut self, row: usize) -> Option<&Record> {
        let record = self.visible_page().items.get(row)?.record.clone();
        self.selection = mem::take(&mut self.selection).select(record);
        self.selection.selected()
    }

    pub fn dismiss(&mut self) -> &SelectionState {
        self.selection = mem::take(&mut self.selection).dismiss();
        &self.selection
    }

    pub fn selected(&self) -> Option<&Record> {
        self.selection.selected()
    }

    /// Download link of the open record, for the caller to open.
    pub fn download_url(&self) -> Option<&str> {
        self.selection.download_url()
    }
}
