// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how per-field distances become one ordered list.
//!
//! Each field is scored on its own by the fuzzy matcher. Here those distances
//! are weighted, combined, filtered by the threshold, and sorted.

mod core;
pub mod ranking;

pub use core::*;
