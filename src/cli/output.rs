//! Output formatting utilities

use crate::application::stats::YearStats;
use crate::domain::entry::{self, Entry};

/// Format query results grouped under their date headers
pub fn format_entries(entries: &[Entry], description: &str) -> String {
    if entries.is_empty() {
        return "No entries found for the specified filters.\n".to_string();
    }

    let mut output = format!("Entries ({})\n", description);
    let mut current_date = None;
    for item in entries {
        if current_date != Some(item.entry_date()) {
            current_date = Some(item.entry_date());
            output.push('\n');
            output.push_str(&entry::date_header(item.entry_date()));
            output.push('\n');
        } else {
            output.push('\n');
        }
        output.push_str(&entry::encode(item));
        output.push('\n');
    }
    output
}

/// Format the configured topics
pub fn format_topic_list(topics: &[String]) -> String {
    if topics.is_empty() {
        return "No topics defined yet.\nAdd a topic: brag topic add \"Your Topic\"\n".to_string();
    }

    let mut output = String::from("Topics:\n");
    for topic in topics {
        output.push_str(&format!("  • {}\n", topic));
    }
    output
}

/// Format per-week entry counts
pub fn format_stats(stats: &YearStats) -> String {
    if stats.weeks.is_empty() {
        return format!("No entries found in {}\n", stats.year);
    }

    let mut output = String::new();
    for (key, count) in &stats.weeks {
        let noun = if *count == 1 { "entry" } else { "entries" };
        output.push_str(&format!("Week {:02}  {} {}\n", key.week, count, noun));
    }
    output.push_str(&format!("Total {}: {}\n", stats.year, stats.total));
    output
}
