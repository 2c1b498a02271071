//! brag - Track work accomplishments as weekly markdown files
//!
//! Entries ("what I did" + "impact", filed under a topic) are appended to one
//! markdown file per ISO week and read back through week, month, quarter,
//! semester and topic filters.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BragError;
