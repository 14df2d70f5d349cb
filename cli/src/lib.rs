// SPDX-FileCopyrightText: 2026 The tavern authors
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_event;
mod config;
mod event_formatter;
mod table;
mod util;

pub use crate::{
    cli::{Cli, Commands, run},
    config::Config,
};
