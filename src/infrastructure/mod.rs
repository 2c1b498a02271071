//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod store;

pub use config::Config;
pub use repository::{BragRepository, FileSystemRepository};
pub use store::WeekFileStore;
