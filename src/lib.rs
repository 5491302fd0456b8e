// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search over a small catalog of tax forms.
//!
//! Every record is matched on four weighted fields (form number, title,
//! description, use cases), each field scored by approximate substring
//! alignment, and the field scores folded into one number where 0 is a perfect
//! match. Results come back sorted by that number, sliced into pages, and one
//! of them can be opened in a detail view.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  catalog/    │────▶│   fuzzy/     │────▶│  scoring/    │
//! │ (Catalog,    │     │ (Query,      │     │ (combine,    │
//! │  RecordStore)│     │  alignment)  │     │  ranking)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                                         │
//!        ▼                                         ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      search/                        │
//! │   rank, search  ·  paginate  ·  selection           │
//! └─────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//!                  session.rs (SearchSession)
//! ```
//!
//! # Score model
//!
//! | Stage       | Output                          | Range   |
//! |-------------|---------------------------------|---------|
//! | value       | errors / len + location penalty | `[0,1]` |
//! | field       | best value of the field         | `[0,1]` |
//! | record      | weighted average, capped        | `[0,t]` |
//!
//! A record is kept when at least one field scores within the threshold `t`.
//! Field scores above `t` count as `t` in the average, so extra matching fields
//! can only improve a record's score.
//!
//! # Usage
//!
//! ```
//! use formsift::{Catalog, SearchConfig, SearchSession};
//!
//! let store = Catalog::builtin()?.into_store()?;
//! let mut session = SearchSession::new(store, SearchConfig::default())?;
//!
//! session.set_query("1040");
//! let page = session.visible_page();
//! assert_eq!(page.items[0].record.form_number, "1040");
//!
//! session.select("1040");
//! assert_eq!(session.download_url(), Some("https://www.irs.gov/pub/irs-pdf/f1040.pdf"));
//! # Ok::<(), formsift::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod scoring;
pub mod search;
pub mod session;
pub mod testing;
pub mod types;
pub mod utils;

pub use catalog::{Catalog, RecordStore};
pub use config::SearchConfig;
pub use error::{Error, Result};
pub use scoring::DEFAULT_THRESHOLD;
pub use search::paginate::{paginate, Page, PageState, DEFAULT_PAGE_SIZE};
pub use search::selection::SelectionState;
pub use search::{rank, search};
pub use session::SearchSession;
pub use types::{Field, FieldWeights, MatchResult, Record, SearchState, SearchStats};
pub use utils::normalize;
