// SPDX-FileCopyrightText: 2026 The tavern authors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::error::Error;
use std::io;

use chrono::{DateTime, Local};
use clap::{ArgAction, ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use tavern_client::ApiClient;
use tavern_core::{
    DateFilter, Event, FilterState, SkippedEvent, filter_events, is_liked,
};

use crate::event_formatter::{EventFormatter, EventRow};
use crate::util::OutputFormat;

/// List events, optionally narrowed by category, date range and venue.
#[derive(Debug, Clone)]
pub struct CmdEventList {
    pub categories: Vec<String>,
    pub date: DateFilter,
    pub place: Option<String>,
    pub output_format: OutputFormat,
}

impl Default for CmdEventList {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            date: DateFilter::None,
            place: None,
            output_format: OutputFormat::Table,
        }
    }
}

impl CmdEventList {
    pub const NAME: &str = "events";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List events, optionally filtered")
            .arg(
                arg!(--category <CATEGORY> "Keep only events with this category label")
                    .action(ArgAction::Append),
            )
            .arg(
                arg!(--date <RANGE> "Keep only events in this date range")
                    .value_parser(value_parser!(DateFilter))
                    .default_value("none"),
            )
            .arg(arg!(--place <PLACE_ID> "Keep only events at this venue"))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            categories: matches
                .get_many::<String>("category")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            date: matches
                .get_one("date")
                .copied()
                .unwrap_or(DateFilter::None),
            place: matches.get_one("place").cloned(),
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(
        self,
        client: &ApiClient,
        now: &DateTime<Local>,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let filter = FilterState {
            selected_categories: self.categories.into_iter().collect(),
            date_filter: self.date,
            selected_place_id: self.place,
        };

        // The liked set only annotates cards; filtering starts without it.
        let (events, liked_ids) = tokio::join!(client.get_all_events(), fetch_liked_ids(client));
        let events = events?;

        let outcome = filter_events(&events, &filter, now);
        warn_skipped(&outcome.skipped);

        let rows: Vec<EventRow> = outcome
            .events
            .into_iter()
            .map(|event| EventRow {
                liked: is_liked(&liked_ids, &event.id),
                inner: event,
            })
            .collect();
        print_events(&rows, now, self.output_format)
    }
}

/// List the events the user has liked.
#[derive(Debug, Clone)]
pub struct CmdEventLiked {
    pub output_format: OutputFormat,
}

impl CmdEventLiked {
    pub const NAME: &str = "liked";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List events you have liked")
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(
        self,
        client: &ApiClient,
        now: &DateTime<Local>,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!("listing liked events...");
        let token = require_token(client)?;
        let liked = client.get_liked_events(token).await?;
        print_sorted(&liked, now, self.output_format, true)
    }
}

/// List the events the user created.
#[derive(Debug, Clone)]
pub struct CmdEventMine {
    pub output_format: OutputFormat,
}

impl CmdEventMine {
    pub const NAME: &str = "mine";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List events you created")
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(
        self,
        client: &ApiClient,
        now: &DateTime<Local>,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!("listing created events...");
        let token = require_token(client)?;
        let created = client.get_created_events(token).await?;
        print_sorted(&created, now, self.output_format, false)
    }
}

/// Like an event.
#[derive(Debug, Clone)]
pub struct CmdEventLike {
    pub event_id: String,
}

impl CmdEventLike {
    pub const NAME: &str = "like";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Like an event")
            .arg(arg!(event_id: <EVENT_ID> "The id of the event to like"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            event_id: matches
                .get_one::<String>("event_id")
                .expect("event_id is required")
                .clone(),
        }
    }

    pub async fn run(
        self,
        client: &ApiClient,
        now: &DateTime<Local>,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(event_id = %self.event_id, "liking event...");
        let token = require_token(client)?;
        client.like_event(token, &self.event_id).await?;

        // No read-after-write guarantee beyond the next fetch, so render
        // from a fresh snapshot instead of patching local state.
        let liked = client.get_liked_events(token).await?;
        println!("{} {}", "Liked".green(), self.event_id);
        print_sorted(&liked, now, OutputFormat::Table, true)
    }
}

/// Delete an event owned by the user.
#[derive(Debug, Clone)]
pub struct CmdEventDelete {
    pub event_id: String,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event you created")
            .arg(arg!(event_id: <EVENT_ID> "The id of the event to delete"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            event_id: matches
                .get_one::<String>("event_id")
                .expect("event_id is required")
                .clone(),
        }
    }

    pub async fn run(
        self,
        client: &ApiClient,
        now: &DateTime<Local>,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(event_id = %self.event_id, "deleting event...");
        let token = require_token(client)?;
        client.delete_event(token, &self.event_id).await?;

        let remaining = client.get_created_events(token).await?;
        println!("{} {}", "Deleted".green(), self.event_id);
        print_sorted(&remaining, now, OutputFormat::Table, false)
    }
}

fn require_token(client: &ApiClient) -> Result<&str, Box<dyn Error>> {
    client
        .token()
        .ok_or_else(|| "No token configured: set `token` in the [api] config section".into())
}

/// Fetches the user's liked event ids for card annotation. A failure here
/// must not take the event list down with it.
async fn fetch_liked_ids(client: &ApiClient) -> HashSet<String> {
    let Some(token) = client.token() else {
        return HashSet::new();
    };

    match client.get_liked_events(token).await {
        Ok(liked) => liked.into_iter().map(|event| event.id).collect(),
        Err(error) => {
            tracing::warn!(%error, "failed to fetch liked events");
            HashSet::new()
        }
    }
}

fn warn_skipped(skipped: &[SkippedEvent]) {
    for record in skipped {
        tracing::warn!(id = %record.id, name = %record.name, error = %record.error, "skipped event");
    }
}

/// Sorts a per-user collection through the engine (empty filter) and prints
/// it, so every listing shares the same ordering and bad-date reporting.
fn print_sorted(
    events: &[Event],
    now: &DateTime<Local>,
    output_format: OutputFormat,
    liked: bool,
) -> Result<(), Box<dyn Error>> {
    let outcome = filter_events(events, &FilterState::default(), now);
    warn_skipped(&outcome.skipped);

    let rows: Vec<EventRow> = outcome
        .events
        .into_iter()
        .map(|event| EventRow { inner: event, liked })
        .collect();
    print_events(&rows, now, output_format)
}

fn print_events(
    rows: &[EventRow],
    now: &DateTime<Local>,
    output_format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    if rows.is_empty() && output_format == OutputFormat::Table {
        println!("No events found");
        return Ok(());
    }

    let formatter = EventFormatter::new(*now).with_output_format(output_format);
    formatter.write(&mut io::stdout(), rows)
}
