//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod prompt;

pub use commands::{Cli, Commands, TopicCommands};
pub use output::{format_entries, format_stats, format_topic_list};
