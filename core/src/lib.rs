// SPDX-FileCopyrightText: 2026 The tavern authors
//
// SPDX-License-Identifier: Apache-2.0

mod datetime;
mod engine;
mod error;
mod event;
mod filter;
mod source;

pub use crate::{
    engine::{FilterOutcome, SkippedEvent, created_by, filter_events, is_liked},
    error::DataError,
    event::{Creator, Event, Place},
    filter::{DateFilter, FilterState},
    source::EventSource,
};
