//! Domain layer - Entries, ISO week arithmetic and query filters

pub mod calendar;
pub mod entry;
pub mod filter;

pub use calendar::WeekKey;
pub use entry::Entry;
pub use filter::{FilterCriteria, Period};
