// SPDX-FileCopyrightText: 2026 The tavern authors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Days, NaiveDate};

/// Weekday index of the given calendar day, with Sunday as day 0.
pub(crate) fn weekday_index(day: NaiveDate) -> u64 {
    day.weekday().num_days_from_sunday() as u64
}

/// The last day of the week containing `day`: `day + (7 - weekday index)`.
///
/// With Sunday as day 0 this lands on the Sunday following `day`. Note that
/// on a Sunday the index is 0, so the window runs a full seven days ahead to
/// the *next* Sunday; `day` itself is never the last day of its own week.
pub(crate) fn end_of_week(day: NaiveDate) -> NaiveDate {
    day + Days::new(7 - weekday_index(day))
}

/// The Saturday and Sunday of the week containing `day`, using the same
/// weekday arithmetic as [`end_of_week`]: Saturday is `day + (6 - index)`,
/// Sunday is `day + (7 - index)`. On a Saturday this yields (today,
/// tomorrow); on a Sunday it points at the coming weekend.
pub(crate) fn weekend_of(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let index = weekday_index(day);
    (day + Days::new(6 - index), day + Days::new(7 - index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekday_index_treats_sunday_as_zero() {
        assert_eq!(weekday_index(date(2024, 6, 16)), 0); // Sunday
        assert_eq!(weekday_index(date(2024, 6, 12)), 3); // Wednesday
        assert_eq!(weekday_index(date(2024, 6, 15)), 6); // Saturday
    }

    #[test]
    fn end_of_week_from_wednesday() {
        assert_eq!(end_of_week(date(2024, 6, 12)), date(2024, 6, 16));
    }

    #[test]
    fn end_of_week_from_sunday_looks_ahead() {
        assert_eq!(end_of_week(date(2024, 6, 16)), date(2024, 6, 23));
    }

    #[test]
    fn weekend_of_midweek_day() {
        let (saturday, sunday) = weekend_of(date(2024, 6, 12));
        assert_eq!(saturday, date(2024, 6, 15));
        assert_eq!(sunday, date(2024, 6, 16));
    }

    #[test]
    fn weekend_of_saturday_is_today_and_tomorrow() {
        let (saturday, sunday) = weekend_of(date(2024, 6, 15));
        assert_eq!(saturday, date(2024, 6, 15));
        assert_eq!(sunday, date(2024, 6, 16));
    }
}
