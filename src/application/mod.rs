//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod init;
pub mod list_entries;
pub mod stats;
pub mod topics;

pub use add_entry::{AddEntryService, EntryDraft};
pub use init::InitOutcome;
pub use list_entries::ListEntriesService;
pub use stats::StatsService;
pub use topics::TopicService;
