//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "brag")]
#[command(about = "Track your work accomplishments and build your brag document", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Brag directory (overrides BRAG_DIR)
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the brag directory (config.yaml and entries/)
    Init,

    /// Add a new accomplishment entry; missing fields are prompted for
    Add {
        /// Topic (must be one of the configured topics)
        #[arg(long)]
        topic: Option<String>,

        /// What you did
        #[arg(long)]
        title: Option<String>,

        /// Who benefited, what changed, any metrics
        #[arg(long)]
        impact: Option<String>,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,

        /// Entry date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Save without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// List entries (default: current week)
    List {
        /// Filter by ISO week number
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=53))]
        week: Option<u32>,

        /// Filter by month (1-12)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Filter by quarter (1-4)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=4))]
        quarter: Option<u32>,

        /// Filter by semester (1 = Jan-Jun, 2 = Jul-Dec)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=2))]
        semester: Option<u32>,

        /// Year for week/month/quarter/semester (default: current year)
        #[arg(long)]
        year: Option<i32>,

        /// Filter by topic (case-insensitive exact match)
        #[arg(long)]
        topic: Option<String>,
    },

    /// Manage topics
    Topic {
        #[command(subcommand)]
        command: TopicCommands,
    },

    /// Show entry counts per week for a year
    Stats {
        /// Year (default: current year)
        #[arg(long)]
        year: Option<i32>,

        /// First week to include
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=53))]
        from_week: Option<u32>,

        /// Last week to include (clamped to the year's last ISO week)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=53))]
        to_week: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TopicCommands {
    /// Add a new topic
    Add {
        /// Topic name
        name: String,
    },

    /// List all defined topics
    List,
}
