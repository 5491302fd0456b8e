// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Detail-view selection: which record, if any, is open.
//!
//! Two states, two transitions, no surprises:
//!
//! ```text
//!            select(r)                 select(r')
//!   Closed ───────────▶ Open(r) ───────────────▶ Open(r')
//!     ▲                    │
//!     └────── dismiss ─────┘      dismiss on Closed stays Closed
//! ```
//!
//! Selecting the already-open record keeps it open; there is no toggle.
//! Searching and paging don't touch the selection.

use crate::types::Record;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionState {
    #[default]
    Closed,
    Open(Arc<Record>),
}

impl SelectionState {
    /// Open `record`, replacing whatever was open.
    #[must_use]
    pub fn select(self, record: Arc<Record>) -> Self {
        SelectionState::Open(record)
    }

    /// Close the detail view. Idempotent.
    #[must_use]
    pub fn dismiss(self) -> Self {
        SelectionState::Closed
    }

    pub fn selected(&self) -> Option<&Record> {
        match self {
            SelectionState::Open(record) => Some(record.as_ref()),
            SelectionState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SelectionState::Open(_))
    }

    /// Download link of the open record.
    pub fn download_url(&self) -> Option<&str> {
        self.selected().map(Record::file_url)
    }
}
