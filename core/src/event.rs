// SPDX-FileCopyrightText: 2026 The tavern authors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, FixedOffset};

use crate::DataError;

/// A user-created happening at a venue.
///
/// Field names follow the backend wire format (`_id`, `user`). The `date` is
/// kept as delivered and parsed on access, so a malformed value survives
/// deserialization and can be reported instead of rejected up front.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    /// Backend-assigned unique identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name of the event.
    pub name: String,

    /// Date and time of occurrence, as the raw wire string.
    #[serde(default)]
    pub date: Option<String>,

    /// Category labels, zero or more (e.g. "Concert", "Sport").
    #[serde(default)]
    pub categories: Vec<String>,

    /// The venue, denormalized onto the event.
    pub place: Place,

    /// The authoring user, denormalized onto the event.
    #[serde(rename = "user")]
    pub creator: Creator,
}

impl Event {
    /// The parsed occurrence time of this event.
    ///
    /// # Errors
    ///
    /// Returns a [`DataError`] when the wire value is absent, empty, or not a
    /// valid RFC 3339 timestamp.
    pub fn occurs_at(&self) -> Result<DateTime<FixedOffset>, DataError> {
        let raw = match &self.date {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Err(DataError::MissingDate),
        };
        DateTime::parse_from_rfc3339(raw.trim())
            .map_err(|_| DataError::UnparseableDate(raw.clone()))
    }
}

/// A physical venue with geographic coordinates.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Place {
    /// Backend-assigned unique identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name of the venue.
    pub name: String,

    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,
}

/// Reference to the user that created an event.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Creator {
    /// Backend-assigned user identifier, when present.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The creator's session token, as denormalized by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
