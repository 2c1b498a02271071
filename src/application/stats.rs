//! Per-week statistics use case

use crate::domain::calendar;
use crate::domain::WeekKey;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, WeekFileStore};

/// Entry counts for a run of weeks in one year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearStats {
    pub year: i32,
    /// Weeks holding at least one entry, in week order
    pub weeks: Vec<(WeekKey, usize)>,
    pub total: usize,
}

/// Count entries per week-file for `year`, weeks `start..=end` (clamped)
pub fn week_counts(
    store: &WeekFileStore,
    year: i32,
    start: Option<u32>,
    end: Option<u32>,
) -> Result<YearStats> {
    let mut weeks = Vec::new();
    for key in calendar::weeks_in_range(year, start, end)? {
        let count = store.entries_for_week(key)?.len();
        if count > 0 {
            weeks.push((key, count));
        }
    }
    let total = weeks.iter().map(|(_, count)| count).sum();

    Ok(YearStats { year, weeks, total })
}

/// Service for per-week entry counts
pub struct StatsService {
    repository: FileSystemRepository,
}

impl StatsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        StatsService { repository }
    }

    pub fn execute(&self, year: i32, start: Option<u32>, end: Option<u32>) -> Result<YearStats> {
        self.repository.ensure_initialized()?;
        week_counts(&self.repository.store(), year, start, end)
    }
}
