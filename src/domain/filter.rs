//! Query filters and the time period they select

use crate::domain::calendar::{self, WeekKey};
use crate::domain::Entry;
use crate::error::{BragError, Result};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Filter criteria for listing entries.
///
/// At most one of `week`, `month`, `quarter`, `semester` drives week-file
/// selection, checked in that order. `year` scopes them and defaults to the
/// current calendar year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub year: Option<i32>,
    pub week: Option<u32>,
    pub month: Option<u32>,
    pub quarter: Option<u32>,
    pub semester: Option<u32>,
    pub topic: Option<String>,
}

impl FilterCriteria {
    /// Resolve the period these criteria select, given today's date
    pub fn period(&self, today: NaiveDate) -> Result<Period> {
        let year = self.year.unwrap_or_else(|| today.year());

        if let Some(week) = self.week {
            // A week the year does not have names a file that never exists
            check_range("week", week, 1..=53)?;
            return Ok(Period::Week(WeekKey::new(year, week)));
        }

        if let Some(month) = self.month {
            check_range("month", month, 1..=12)?;
            return Ok(Period::Months {
                year,
                months: month..=month,
            });
        }

        if let Some(quarter) = self.quarter {
            check_range("quarter", quarter, 1..=4)?;
            let first = (quarter - 1) * 3 + 1;
            return Ok(Period::Months {
                year,
                months: first..=first + 2,
            });
        }

        if let Some(semester) = self.semester {
            check_range("semester", semester, 1..=2)?;
            let first = (semester - 1) * 6 + 1;
            return Ok(Period::Months {
                year,
                months: first..=first + 5,
            });
        }

        Ok(Period::CurrentWeek(calendar::week_of(today)))
    }

    /// Human readable summary, e.g. `Q4 | 2024 | Topic: Docs`
    pub fn describe(&self, today: NaiveDate) -> String {
        let mut parts = Vec::new();
        if let Some(week) = self.week {
            parts.push(format!("Week {}", week));
        }
        if let Some(month) = self.month {
            parts.push(format!("Month {}", month));
        }
        if let Some(quarter) = self.quarter {
            parts.push(format!("Q{}", quarter));
        }
        if let Some(semester) = self.semester {
            parts.push(format!("Semester {}", semester));
        }
        if let Some(year) = self.year {
            parts.push(year.to_string());
        }
        if let Some(topic) = &self.topic {
            parts.push(format!("Topic: {}", topic));
        }

        if parts.is_empty() {
            let current = calendar::week_of(today);
            parts.push(format!("Week {}, {}", current.week, current.year));
        }

        parts.join(" | ")
    }
}

fn check_range(name: &str, value: u32, range: RangeInclusive<u32>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(BragError::InvalidFilter(format!(
            "{} must be between {} and {}, got {}",
            name,
            range.start(),
            range.end(),
            value
        )))
    }
}

/// The stretch of time a query covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Period {
    /// One explicit ISO week
    Week(WeekKey),
    /// A run of calendar months within one year (month, quarter, semester)
    Months {
        year: i32,
        months: RangeInclusive<u32>,
    },
    /// The ISO week containing today
    CurrentWeek(WeekKey),
}

impl Period {
    /// Week-files that may hold entries for this period
    pub fn candidate_weeks(&self) -> Result<BTreeSet<WeekKey>> {
        match self {
            Period::Week(key) | Period::CurrentWeek(key) => Ok(BTreeSet::from([*key])),
            Period::Months { year, months } => {
                let mut weeks = BTreeSet::new();
                for month in months.clone() {
                    weeks.extend(calendar::weeks_overlapping_month(*year, month)?);
                }
                Ok(weeks)
            }
        }
    }

    /// Residual filter for entries pulled in by a boundary week.
    ///
    /// Week periods need none; a week-file only holds that week.
    pub fn contains(&self, entry: &Entry) -> bool {
        match self {
            Period::Week(_) | Period::CurrentWeek(_) => true,
            Period::Months { months, .. } => months.contains(&entry.entry_date().month()),
        }
    }
}
