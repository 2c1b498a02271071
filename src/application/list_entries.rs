//! List entries use case

use crate::domain::{Entry, FilterCriteria};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, WeekFileStore};
use chrono::NaiveDate;

/// Run a query against the store, returning entries sorted by date.
///
/// Candidate week-files come from the criteria's period; entries outside the
/// requested months and, when given, with another topic are filtered out.
/// Same-date entries keep their file order.
pub fn resolve(
    store: &WeekFileStore,
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> Result<Vec<Entry>> {
    let period = criteria.period(today)?;
    let weeks = period.candidate_weeks()?;
    tracing::debug!(?period, weeks = weeks.len(), "resolved candidate weeks");

    let mut entries = Vec::new();
    for week in weeks {
        entries.extend(store.entries_for_week(week)?);
    }

    entries.retain(|entry| period.contains(entry));
    if let Some(topic) = &criteria.topic {
        entries.retain(|entry| entry.has_topic(topic));
    }
    entries.sort_by_key(Entry::entry_date);

    Ok(entries)
}

/// Service for listing entries
pub struct ListEntriesService {
    repository: FileSystemRepository,
}

impl ListEntriesService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ListEntriesService { repository }
    }

    /// Query entries, with `today` supplying the default week and year
    pub fn execute(&self, criteria: &FilterCriteria, today: NaiveDate) -> Result<Vec<Entry>> {
        self.repository.ensure_initialized()?;
        resolve(&self.repository.store(), criteria, today)
    }
}
