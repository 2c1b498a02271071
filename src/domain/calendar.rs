//! ISO week resolution
//!
//! Maps calendar dates to the ISO-8601 `(year, week)` pair that decides which
//! week-file an entry lives in, and maps months and week ranges back to the
//! set of week-files worth reading.

use crate::error::{BragError, Result};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;
use std::fmt;

/// An ISO week-year and week number. The year is the ISO week-year, which
/// differs from the calendar year for a few days around January 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    pub fn new(year: i32, week: u32) -> Self {
        WeekKey { year, week }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

/// ISO week (and ISO week-year) containing `date`
pub fn week_of(date: NaiveDate) -> WeekKey {
    let iso = date.iso_week();
    WeekKey::new(iso.year(), iso.week())
}

/// Every ISO week that has at least one day in the given calendar month.
///
/// Weeks near a year boundary may belong to the neighbouring ISO year, so
/// callers must not assume `key.year == year`.
pub fn weeks_overlapping_month(year: i32, month: u32) -> Result<BTreeSet<WeekKey>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        BragError::InvalidFilter(format!("no such month: {}-{:02}", year, month))
    })?;

    Ok(first
        .iter_days()
        .take_while(|day| day.month() == month)
        .map(week_of)
        .collect())
}

/// Number of ISO weeks in `year` (52 or 53).
///
/// December 28 always falls in the last ISO week of its year.
pub fn max_week_of_year(year: i32) -> Result<u32> {
    NaiveDate::from_ymd_opt(year, 12, 28)
        .map(|dec_28| dec_28.iso_week().week())
        .ok_or_else(|| BragError::InvalidFilter(format!("year out of range: {}", year)))
}

/// Ordered weeks `start..=end` of `year`. `start` defaults to 1 and `end` to
/// the last ISO week; a larger `end` is clamped to the last ISO week.
pub fn weeks_in_range(year: i32, start: Option<u32>, end: Option<u32>) -> Result<Vec<WeekKey>> {
    let max_week = max_week_of_year(year)?;
    let start = start.unwrap_or(1).max(1);
    let end = end.unwrap_or(max_week).min(max_week);

    Ok((start..=end).map(|week| WeekKey::new(year, week)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_of_start_of_year() {
        assert_eq!(week_of(date(2024, 1, 1)), WeekKey::new(2024, 1));
    }

    #[test]
    fn test_week_of_mid_year() {
        assert_eq!(week_of(date(2024, 11, 25)), WeekKey::new(2024, 48));
    }

    #[test]
    fn test_week_of_year_boundary() {
        // Tuesday, Dec 31, 2024 belongs to 2025-W01
        assert_eq!(week_of(date(2024, 12, 31)), WeekKey::new(2025, 1));
        // Friday, Jan 1, 2021 belongs to 2020-W53
        assert_eq!(week_of(date(2021, 1, 1)), WeekKey::new(2020, 53));
    }

    #[test]
    fn test_max_week_of_year() {
        assert_eq!(max_week_of_year(2020).unwrap(), 53);
        assert_eq!(max_week_of_year(2024).unwrap(), 52);
        assert_eq!(max_week_of_year(2026).unwrap(), 53);
    }

    #[test]
    fn test_weeks_in_range_full_year() {
        let weeks = weeks_in_range(2024, None, None).unwrap();
        assert_eq!(weeks.len(), 52);
        assert_eq!(weeks[0], WeekKey::new(2024, 1));
        assert_eq!(weeks[51], WeekKey::new(2024, 52));

        let weeks = weeks_in_range(2020, None, None).unwrap();
        assert_eq!(weeks.len(), 53);
        assert_eq!(weeks.last(), Some(&WeekKey::new(2020, 53)));
    }

    #[test]
    fn test_weeks_in_range_clamps_end() {
        let weeks = weeks_in_range(2024, Some(50), Some(60)).unwrap();
        assert_eq!(
            weeks,
            vec![
                WeekKey::new(2024, 50),
                WeekKey::new(2024, 51),
                WeekKey::new(2024, 52)
            ]
        );
    }

    #[test]
    fn test_weeks_in_range_empty_when_start_after_end() {
        assert!(weeks_in_range(2024, Some(10), Some(5)).unwrap().is_empty());
    }

    #[test]
    fn test_weeks_overlapping_november() {
        let weeks = weeks_overlapping_month(2024, 11).unwrap();
        let expected: BTreeSet<WeekKey> = (44..=48).map(|w| WeekKey::new(2024, w)).collect();
        assert_eq!(weeks, expected);
    }

    #[test]
    fn test_weeks_overlapping_month_crosses_iso_year() {
        let december = weeks_overlapping_month(2024, 12).unwrap();
        assert!(december.contains(&WeekKey::new(2025, 1)));
        assert!(december.contains(&WeekKey::new(2024, 52)));

        let january = weeks_overlapping_month(2021, 1).unwrap();
        assert!(january.contains(&WeekKey::new(2020, 53)));
        assert!(january.contains(&WeekKey::new(2021, 4)));
    }

    #[test]
    fn test_weeks_overlapping_leap_february() {
        // Feb 29, 2024 is a Thursday in week 9
        let weeks = weeks_overlapping_month(2024, 2).unwrap();
        assert_eq!(weeks.iter().next_back(), Some(&WeekKey::new(2024, 9)));
    }

    #[test]
    fn test_weeks_overlapping_invalid_month() {
        assert!(matches!(
            weeks_overlapping_month(2024, 13),
            Err(BragError::InvalidFilter(_))
        ));
    }

    #[test]
    fn test_week_key_display() {
        assert_eq!(WeekKey::new(2024, 3).to_string(), "2024-W03");
    }
}
