// SPDX-FileCopyrightText: 2026 The tavern authors
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use chrono::{DateTime, Local};
use colored::Color;
use tavern_core::Event;

use crate::table::{Column, PaddingDirection, Table};
use crate::util::{OutputFormat, format_datetime};

/// One rendered card: the event plus its liked annotation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EventRow {
    #[serde(flatten)]
    pub inner: Event,
    pub liked: bool,
}

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    now: DateTime<Local>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            columns: vec![
                EventColumn::Liked,
                EventColumn::Date,
                EventColumn::Name,
                EventColumn::Place,
                EventColumn::Categories,
            ],
            now,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn write(
        &self,
        w: &mut impl io::Write,
        rows: &[EventRow],
    ) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Json => {
                writeln!(w, "{}", serde_json::to_string_pretty(rows)?)?;
                Ok(())
            }
            OutputFormat::Table => Table {
                columns: self.columns.clone(),
                separator: "  ".to_string(),
                padding: true,
                now: self.now,
                data: rows,
            }
            .write_to(w),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum EventColumn {
    Liked,
    Date,
    Name,
    Place,
    Categories,
}

impl Column<EventRow> for EventColumn {
    fn format(&self, row: &EventRow) -> String {
        match self {
            EventColumn::Liked => if row.liked { "♥" } else { "" }.to_string(),
            EventColumn::Date => match row.inner.occurs_at() {
                Ok(date) => format_datetime(&date.with_timezone(&Local)),
                Err(_) => "-".to_string(),
            },
            EventColumn::Name => row.inner.name.clone(),
            EventColumn::Place => row.inner.place.name.clone(),
            EventColumn::Categories => row.inner.categories.join(", "),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Liked => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, now: &DateTime<Local>, row: &EventRow) -> Option<Color> {
        match self {
            EventColumn::Liked => row.liked.then_some(Color::Red),
            EventColumn::Date => match row.inner.occurs_at() {
                // Already-started events are dimmed out.
                Ok(date) => (date.with_timezone(&Local) < *now).then_some(Color::BrightBlack),
                Err(_) => Some(Color::Yellow),
            },
            _ => None,
        }
    }
}
