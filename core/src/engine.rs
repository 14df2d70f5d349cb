// SPDX-FileCopyrightText: 2026 The tavern authors
//
// SPDX-License-Identifier: Apache-2.0

//! The event filter engine: pure decision logic turning a raw event snapshot
//! plus the active [`FilterState`] into the list to render.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::datetime::{end_of_week, weekend_of};
use crate::{DataError, DateFilter, Event, FilterState};

/// The result of one filtering pass: the events to display, sorted ascending
/// by date, plus the records that had to be skipped because their date could
/// not be interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Events passing every active filter stage, ascending by date. Events
    /// without an interpretable date sort after all dated ones, in input
    /// order.
    pub events: Vec<Event>,

    /// Records excluded by an active date filter because of a bad date, in
    /// input order.
    pub skipped: Vec<SkippedEvent>,
}

/// An event record excluded from a date-filtered result, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEvent {
    /// Identifier of the skipped event.
    pub id: String,

    /// Display name of the skipped event.
    pub name: String,

    /// Why the record could not be evaluated.
    pub error: DataError,
}

/// Computes the events to display for the given snapshot and filter state.
///
/// Stages apply in a fixed order (place, then category, then date) and
/// AND-compose: an event is kept only if it passes every active stage. The
/// date stage is evaluated against the caller-supplied `now`; "calendar day"
/// always means the day in `now`'s timezone. The input is never mutated.
pub fn filter_events<Tz: TimeZone>(
    events: &[Event],
    filter: &FilterState,
    now: &DateTime<Tz>,
) -> FilterOutcome {
    let date_filter = ResolvedDateFilter::resolve(filter.date_filter, now);
    let tz = now.timezone();

    let mut kept: Vec<(Event, Option<DateTime<Utc>>)> = Vec::new();
    let mut skipped = Vec::new();

    for event in events {
        if !matches_place(event, filter) || !matches_categories(event, filter) {
            continue;
        }

        let parsed = event.occurs_at();
        if date_filter.is_active() {
            match &parsed {
                Ok(date) => {
                    let day = date.with_timezone(&tz).date_naive();
                    if !date_filter.matches(day, date.with_timezone(&Utc)) {
                        continue;
                    }
                }
                Err(error) => {
                    tracing::debug!(id = %event.id, %error, "skipping event with bad date");
                    skipped.push(SkippedEvent {
                        id: event.id.clone(),
                        name: event.name.clone(),
                        error: error.clone(),
                    });
                    continue;
                }
            }
        }

        let instant = parsed.ok().map(|date| date.with_timezone(&Utc));
        kept.push((event.clone(), instant));
    }

    // Stable: equal dates keep their input order.
    kept.sort_by_key(|(_, instant)| (instant.is_none(), *instant));

    FilterOutcome {
        events: kept.into_iter().map(|(event, _)| event).collect(),
        skipped,
    }
}

/// Whether `event_id` is in the user's liked set. Exact-id equality.
pub fn is_liked(liked_event_ids: &HashSet<String>, event_id: &str) -> bool {
    liked_event_ids.contains(event_id)
}

/// The subset of `events` authored by the holder of `token`, in input order.
///
/// Client-side fallback for backends without a created-events endpoint; the
/// match is exact token equality, and events without a creator token never
/// match.
pub fn created_by(events: &[Event], token: &str) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.creator.token.as_deref() == Some(token))
        .cloned()
        .collect()
}

fn matches_place(event: &Event, filter: &FilterState) -> bool {
    match &filter.selected_place_id {
        Some(place_id) => event.place.id == *place_id,
        None => true,
    }
}

fn matches_categories(event: &Event, filter: &FilterState) -> bool {
    filter.selected_categories.is_empty()
        || event.categories.iter().any(|label| filter.has_category(label))
}

/// A [`DateFilter`] resolved against "now" once per filtering pass, so every
/// event is judged against the same window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResolvedDateFilter {
    All,
    Day(NaiveDate),
    Week {
        from: DateTime<Utc>,
        last_day: NaiveDate,
    },
    Weekend {
        saturday: NaiveDate,
        sunday: NaiveDate,
    },
}

impl ResolvedDateFilter {
    fn resolve<Tz: TimeZone>(filter: DateFilter, now: &DateTime<Tz>) -> Self {
        let today = now.date_naive();
        match filter {
            DateFilter::None => Self::All,
            DateFilter::Today => Self::Day(today),
            DateFilter::ThisWeek => Self::Week {
                from: now.with_timezone(&Utc),
                last_day: end_of_week(today),
            },
            DateFilter::ThisWeekend => {
                let (saturday, sunday) = weekend_of(today);
                Self::Weekend { saturday, sunday }
            }
        }
    }

    fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    fn matches(&self, day: NaiveDate, instant: DateTime<Utc>) -> bool {
        match self {
            Self::All => true,
            Self::Day(today) => day == *today,
            Self::Week { from, last_day } => instant >= *from && day <= *last_day,
            Self::Weekend { saturday, sunday } => day == *saturday || day == *sunday,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::{Creator, Place};

    /// Wednesday, mid-week fixture shared across the date stage tests.
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 12, 12, 0, 0).unwrap()
    }

    fn place(id: &str) -> Place {
        Place {
            id: id.into(),
            name: format!("Place {id}"),
            latitude: 48.86,
            longitude: 2.35,
        }
    }

    fn event(id: &str, date: Option<&str>, categories: &[&str], place_id: &str) -> Event {
        Event {
            id: id.into(),
            name: format!("Event {id}"),
            date: date.map(Into::into),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            place: place(place_id),
            creator: Creator::default(),
        }
    }

    fn ids(outcome: &FilterOutcome) -> Vec<&str> {
        outcome.events.iter().map(|e| e.id.as_str()).collect()
    }

    fn with_date(filter: DateFilter) -> FilterState {
        FilterState {
            date_filter: filter,
            ..Default::default()
        }
    }

    #[test]
    fn empty_filter_is_identity_up_to_date_sort() {
        let events = vec![
            event("late", Some("2024-06-20T21:00:00Z"), &[], "p1"),
            event("early", Some("2024-06-10T18:00:00Z"), &[], "p2"),
            event("mid", Some("2024-06-15T19:00:00Z"), &[], "p1"),
        ];

        let outcome = filter_events(&events, &FilterState::default(), &now());
        assert_eq!(ids(&outcome), ["early", "mid", "late"]);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn result_is_a_subsequence_of_the_input() {
        let events = vec![
            event("a", Some("2024-06-12T18:00:00Z"), &["Concert"], "p1"),
            event("b", Some("2024-06-12T19:00:00Z"), &["Sport"], "p2"),
            event("c", None, &["Concert"], "p1"),
        ];
        let filter = FilterState::default().toggle_category("Concert");

        let outcome = filter_events(&events, &filter, &now());
        for kept in &outcome.events {
            assert!(events.contains(kept));
        }
    }

    #[test]
    fn filtering_twice_is_a_no_op() {
        let events = vec![
            event("a", Some("2024-06-12T18:00:00Z"), &["Concert"], "p1"),
            event("b", Some("2024-06-16T19:00:00Z"), &["Sport"], "p2"),
            event("c", Some("2024-06-19T19:00:00Z"), &["Sport"], "p1"),
            event("d", None, &[], "p1"),
        ];
        let filter = FilterState {
            date_filter: DateFilter::ThisWeek,
            ..Default::default()
        }
        .toggle_category("Sport");

        let once = filter_events(&events, &filter, &now());
        let twice = filter_events(&once.events, &filter, &now());
        assert_eq!(once.events, twice.events);
        assert!(twice.skipped.is_empty()); // bad-date records already dropped
    }

    #[test]
    fn place_stage_keeps_only_the_selected_venue() {
        let events = vec![
            event("a", Some("2024-06-12T18:00:00Z"), &[], "p1"),
            event("b", Some("2024-06-12T18:00:00Z"), &[], "p2"),
            event("c", Some("2024-06-12T18:00:00Z"), &[], "p1"),
        ];
        let filter = FilterState {
            selected_place_id: Some("p1".into()),
            ..Default::default()
        };

        let outcome = filter_events(&events, &filter, &now());
        // Equal dates: the two p1 events keep their relative order.
        assert_eq!(ids(&outcome), ["a", "c"]);
    }

    #[test]
    fn category_stage_is_a_union_across_selected_labels() {
        let events = vec![
            event("concert", Some("2024-06-12T18:00:00Z"), &["Concert"], "p1"),
            event("sport", Some("2024-06-12T19:00:00Z"), &["Sport"], "p1"),
            event("quiz", Some("2024-06-12T20:00:00Z"), &["Quiz"], "p1"),
            event("both", Some("2024-06-12T21:00:00Z"), &["Concert", "Sport"], "p1"),
        ];
        let filter = FilterState::default()
            .toggle_category("Concert")
            .toggle_category("Sport");

        let outcome = filter_events(&events, &filter, &now());
        assert_eq!(ids(&outcome), ["concert", "sport", "both"]);
    }

    #[test]
    fn category_stage_needs_any_shared_label_not_a_subset() {
        let events = vec![event("a", Some("2024-06-12T18:00:00Z"), &["Concert"], "p1")];
        let filter = FilterState::default()
            .toggle_category("Concert")
            .toggle_category("Sport");

        let outcome = filter_events(&events, &filter, &now());
        assert_eq!(ids(&outcome), ["a"]);
    }

    #[test]
    fn category_stage_compares_labels_case_insensitively() {
        let events = vec![event("a", Some("2024-06-12T18:00:00Z"), &["concert"], "p1")];
        let filter = FilterState::default().toggle_category("Concert");

        let outcome = filter_events(&events, &filter, &now());
        assert_eq!(ids(&outcome), ["a"]);
    }

    #[test]
    fn today_matches_the_calendar_day_not_a_rolling_window() {
        let events = vec![
            event("past-today", Some("2024-06-12T08:00:00Z"), &[], "p1"),
            event("tonight", Some("2024-06-12T22:00:00Z"), &[], "p1"),
            event("tomorrow", Some("2024-06-13T08:00:00Z"), &[], "p1"),
        ];

        let outcome = filter_events(&events, &with_date(DateFilter::Today), &now());
        // 08:00 is before "now" but on the same calendar day, so it matches.
        assert_eq!(ids(&outcome), ["past-today", "tonight"]);
    }

    #[test]
    fn this_week_runs_from_now_through_sunday() {
        let events = vec![
            event("this-morning", Some("2024-06-12T08:00:00Z"), &[], "p1"),
            event("friday", Some("2024-06-14T20:00:00Z"), &[], "p1"),
            event("sunday", Some("2024-06-16T20:00:00Z"), &[], "p1"),
            event("next-wednesday", Some("2024-06-19T20:00:00Z"), &[], "p1"),
        ];

        let outcome = filter_events(&events, &with_date(DateFilter::ThisWeek), &now());
        // Forward-only: this morning is already in the past.
        assert_eq!(ids(&outcome), ["friday", "sunday"]);
    }

    #[test]
    fn this_weekend_matches_only_saturday_and_sunday() {
        let events = vec![
            event("friday", Some("2024-06-14T20:00:00Z"), &[], "p1"),
            event("saturday", Some("2024-06-15T20:00:00Z"), &[], "p1"),
            event("sunday", Some("2024-06-16T20:00:00Z"), &[], "p1"),
            event("next-saturday", Some("2024-06-22T20:00:00Z"), &[], "p1"),
        ];

        let outcome = filter_events(&events, &with_date(DateFilter::ThisWeekend), &now());
        assert_eq!(ids(&outcome), ["saturday", "sunday"]);
    }

    #[test]
    fn stages_and_compose() {
        let events = vec![
            event("match", Some("2024-06-15T20:00:00Z"), &["Concert"], "p1"),
            event("wrong-place", Some("2024-06-15T21:00:00Z"), &["Concert"], "p2"),
            event("wrong-category", Some("2024-06-15T22:00:00Z"), &["Quiz"], "p1"),
            event("wrong-day", Some("2024-06-14T20:00:00Z"), &["Concert"], "p1"),
        ];
        let filter = FilterState {
            selected_place_id: Some("p1".into()),
            date_filter: DateFilter::ThisWeekend,
            ..Default::default()
        }
        .toggle_category("Concert");

        let outcome = filter_events(&events, &filter, &now());
        assert_eq!(ids(&outcome), ["match"]);
    }

    #[test]
    fn equal_dates_preserve_input_order() {
        let events = vec![
            event("first", Some("2024-06-15T20:00:00Z"), &[], "p1"),
            event("second", Some("2024-06-15T20:00:00Z"), &[], "p2"),
            event("third", Some("2024-06-15T20:00:00Z"), &[], "p3"),
        ];

        let outcome = filter_events(&events, &FilterState::default(), &now());
        assert_eq!(ids(&outcome), ["first", "second", "third"]);
    }

    #[test]
    fn bad_date_is_skipped_and_reported_under_a_date_filter() {
        let events = vec![
            event("dated", Some("2024-06-12T20:00:00Z"), &[], "p1"),
            event("null-date", None, &[], "p1"),
            event("garbage", Some("soonish"), &[], "p1"),
        ];

        let outcome = filter_events(&events, &with_date(DateFilter::Today), &now());
        assert_eq!(ids(&outcome), ["dated"]);
        assert_eq!(
            outcome.skipped,
            vec![
                SkippedEvent {
                    id: "null-date".into(),
                    name: "Event null-date".into(),
                    error: DataError::MissingDate,
                },
                SkippedEvent {
                    id: "garbage".into(),
                    name: "Event garbage".into(),
                    error: DataError::UnparseableDate("soonish".into()),
                },
            ]
        );
    }

    #[test]
    fn bad_date_passes_through_without_a_date_filter() {
        let events = vec![
            event("undated", None, &[], "p1"),
            event("dated", Some("2024-06-12T20:00:00Z"), &[], "p1"),
        ];

        let outcome = filter_events(&events, &FilterState::default(), &now());
        // Undated events sort after every dated one.
        assert_eq!(ids(&outcome), ["dated", "undated"]);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn bad_date_is_not_reported_when_rejected_by_an_earlier_stage() {
        let events = vec![event("undated", None, &["Quiz"], "p1")];
        let filter = FilterState {
            date_filter: DateFilter::Today,
            ..Default::default()
        }
        .toggle_category("Concert");

        let outcome = filter_events(&events, &filter, &now());
        assert!(outcome.events.is_empty());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn empty_snapshot_yields_empty_outcome() {
        let outcome = filter_events(&[], &with_date(DateFilter::ThisWeek), &now());
        assert!(outcome.events.is_empty());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn is_liked_checks_exact_membership() {
        let liked: HashSet<String> = ["e1".to_string(), "e2".to_string()].into();
        assert!(is_liked(&liked, "e1"));
        assert!(!is_liked(&liked, "e3"));
        assert!(!is_liked(&liked, "E1")); // ids are opaque, no case folding
    }

    #[test]
    fn created_by_matches_the_creator_token() {
        let mut mine = event("mine", Some("2024-06-12T20:00:00Z"), &[], "p1");
        mine.creator.token = Some("tok-1".into());
        let mut theirs = event("theirs", Some("2024-06-12T21:00:00Z"), &[], "p1");
        theirs.creator.token = Some("tok-2".into());
        let anonymous = event("anonymous", Some("2024-06-12T22:00:00Z"), &[], "p1");

        let events = vec![mine.clone(), theirs, anonymous];
        assert_eq!(created_by(&events, "tok-1"), vec![mine]);
    }
}
