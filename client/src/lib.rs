// SPDX-FileCopyrightText: 2026 The tavern authors
//
// SPDX-License-Identifier: Apache-2.0

//! REST client for the tavern events backend.

mod client;
mod config;
mod error;
mod http;

pub use crate::{client::ApiClient, config::ApiConfig, error::ApiError};
