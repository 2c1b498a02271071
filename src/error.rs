//! Error types for brag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the brag application
#[derive(Debug, Error)]
pub enum BragError {
    #[error("Storage root is not set")]
    RootNotSet,

    #[error("Brag directory not initialized: {0}")]
    NotInitialized(PathBuf),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    #[error("No topics defined yet")]
    NoTopics,

    #[error("Topic '{0}' already exists")]
    DuplicateTopic(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BragError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BragError::RootNotSet | BragError::NotInitialized(_) => 2,
            BragError::InvalidFilter(_) | BragError::InvalidDate(_) => 3,
            BragError::UnknownTopic(_) | BragError::NoTopics => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BragError::RootNotSet => "BRAG_DIR environment variable is not set.\n\n\
                Suggestions:\n\
                • Set it to the directory holding your brag documents:\n  \
                export BRAG_DIR=~/Documents/brag\n\
                • Or pass the directory explicitly: brag --dir ~/Documents/brag <command>"
                .to_string(),
            BragError::NotInitialized(path) => {
                format!(
                    "Brag directory not initialized: {}\n\n\
                    Suggestions:\n\
                    • Run 'brag init' to create config.yaml and entries/\n\
                    • Check that BRAG_DIR points at the right directory",
                    path.display()
                )
            }
            BragError::UnknownTopic(topic) => {
                format!(
                    "Unknown topic: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'brag topic list' to see defined topics (matching is case-insensitive)\n\
                    • Add it first: brag topic add \"{}\"",
                    topic, topic
                )
            }
            BragError::NoTopics => "No topics defined yet.\n\n\
                Add a topic first: brag topic add \"Your Topic\""
                .to_string(),
            BragError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: brag add --date 2024-11-25",
                    input
                )
            }
            BragError::InvalidFilter(msg) => {
                format!(
                    "Invalid filter: {}\n\n\
                    Valid ranges: --week 1-53, --month 1-12, --quarter 1-4, --semester 1-2\n\
                    Example: brag list --quarter 4 --year 2024",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BragError
pub type Result<T> = std::result::Result<T, BragError>;
