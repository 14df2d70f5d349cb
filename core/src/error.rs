// SPDX-FileCopyrightText: 2026 The tavern authors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Errors for event records the engine cannot interpret.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// The event carries no date at all.
    MissingDate,

    /// The event date is not a valid RFC 3339 timestamp.
    UnparseableDate(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDate => write!(f, "Event has no date"),
            Self::UnparseableDate(raw) => write!(f, "Unparseable event date: {raw}"),
        }
    }
}

impl std::error::Error for DataError {}
