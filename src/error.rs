// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Reasons a save is rejected before anything reaches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("Please enter a valid amount (got '{0}')")]
    InvalidAmount(String),

    #[error("Please select a valid category")]
    MissingCategory,

    #[error("Please select a valid date")]
    MissingDate,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("No income transaction found for month {0}; add income for this month before adding an expense")]
    NoIncomeInMonth(String),
}
