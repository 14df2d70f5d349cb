// SPDX-FileCopyrightText: 2026 The tavern authors
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::BTreeSet, fmt::Display, str::FromStr};

/// The date range a user has narrowed the event list to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DateFilter {
    /// No date filtering.
    #[default]
    #[serde(rename = "none")]
    None,

    /// Events on the current calendar day.
    #[serde(rename = "today")]
    Today,

    /// Events from now through the end of the current week.
    #[serde(rename = "thisWeek")]
    ThisWeek,

    /// Events on the Saturday or Sunday of the current week.
    #[serde(rename = "thisWeekend")]
    ThisWeekend,
}

const DATE_FILTER_NONE: &str = "none";
const DATE_FILTER_TODAY: &str = "today";
const DATE_FILTER_THIS_WEEK: &str = "thisWeek";
const DATE_FILTER_THIS_WEEKEND: &str = "thisWeekend";

impl AsRef<str> for DateFilter {
    fn as_ref(&self) -> &str {
        match self {
            DateFilter::None => DATE_FILTER_NONE,
            DateFilter::Today => DATE_FILTER_TODAY,
            DateFilter::ThisWeek => DATE_FILTER_THIS_WEEK,
            DateFilter::ThisWeekend => DATE_FILTER_THIS_WEEKEND,
        }
    }
}

impl Display for DateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl DateFilter {
    /// Parses a wire label. Unrecognized values map to [`DateFilter::None`]
    /// so that a stale or buggy caller degrades to an unfiltered list
    /// instead of failing to render.
    fn parse_label(value: &str) -> Self {
        match value {
            DATE_FILTER_TODAY => DateFilter::Today,
            DATE_FILTER_THIS_WEEK => DateFilter::ThisWeek,
            DATE_FILTER_THIS_WEEKEND => DateFilter::ThisWeekend,
            _ => DateFilter::None,
        }
    }
}

impl FromStr for DateFilter {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_label(value))
    }
}

impl<'de> serde::Deserialize<'de> for DateFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Self::parse_label(&label))
    }
}

/// The active user-chosen narrowing criteria for one screen session.
///
/// Owned by the presenting screen and passed to
/// [`filter_events`](crate::filter_events) on every render; the engine never
/// holds on to it.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FilterState {
    /// Selected category labels; empty means "all categories".
    #[serde(rename = "selectedCategories", default)]
    pub selected_categories: BTreeSet<String>,

    /// The active date range.
    #[serde(rename = "dateFilter", default)]
    pub date_filter: DateFilter,

    /// Narrows to events at a single venue, when set.
    #[serde(rename = "selectedPlaceId", default)]
    pub selected_place_id: Option<String>,
}

impl FilterState {
    /// Whether `label` is currently selected, compared case-insensitively.
    pub fn has_category(&self, label: &str) -> bool {
        self.selected_categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(label))
    }

    /// Returns a new state with `label` deselected if it was selected
    /// (case-insensitively) and selected otherwise. Self-inverse; the input
    /// state is left untouched.
    pub fn toggle_category(&self, label: &str) -> FilterState {
        let mut next = self.clone();
        let existing = next
            .selected_categories
            .iter()
            .find(|c| c.eq_ignore_ascii_case(label))
            .cloned();
        match existing {
            Some(selected) => {
                next.selected_categories.remove(&selected);
            }
            None => {
                next.selected_categories.insert(label.to_string());
            }
        }
        next
    }
}
