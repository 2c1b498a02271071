//! Accomplishment entries and their markdown encoding

use crate::error::{BragError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

const TITLE_PREFIX: &str = "### ";
const TOPIC_PREFIX: &str = "- **Topic:**";
const IMPACT_PREFIX: &str = "- **Impact:**";
const TAGS_PREFIX: &str = "- **Tags:**";

/// Regex for Date-Section headers: `## YYYY-MM-DD`
fn date_header_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^## (\d{4}-\d{2}-\d{2})$").unwrap())
}

/// A single recorded accomplishment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    title: String,
    topic: String,
    impact: String,
    tags: Vec<String>,
    entry_date: NaiveDate,
}

impl Entry {
    /// Build an entry, trimming every field.
    ///
    /// Rejects an empty title, line breaks in any field and commas inside a
    /// tag, since none of those survive the line-based encoding.
    pub fn new(
        title: &str,
        topic: &str,
        impact: &str,
        tags: Vec<String>,
        entry_date: NaiveDate,
    ) -> Result<Self> {
        let title = single_line("title", title)?;
        if title.is_empty() {
            return Err(BragError::InvalidEntry("title must not be empty".to_string()));
        }
        let topic = single_line("topic", topic)?;
        let impact = single_line("impact", impact)?;

        let mut clean_tags = Vec::with_capacity(tags.len());
        for tag in tags {
            let tag = single_line("tag", &tag)?;
            if tag.contains(',') {
                return Err(BragError::InvalidEntry(format!(
                    "tag must not contain a comma: '{}'",
                    tag
                )));
            }
            if !tag.is_empty() {
                clean_tags.push(tag);
            }
        }

        Ok(Entry {
            title,
            topic,
            impact,
            tags: clean_tags,
            entry_date,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn impact(&self) -> &str {
        &self.impact
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn entry_date(&self) -> NaiveDate {
        self.entry_date
    }

    /// Case-insensitive exact topic match
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topic.to_lowercase() == topic.trim().to_lowercase()
    }
}

fn single_line(field: &str, value: &str) -> Result<String> {
    if value.contains(['\n', '\r']) {
        return Err(BragError::InvalidEntry(format!(
            "{} must be a single line",
            field
        )));
    }
    Ok(value.trim().to_string())
}

/// Split a comma-separated tag list, trimming tokens and dropping empty ones
pub fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Encode an entry as its canonical markdown block (no trailing newline).
///
/// The date is not part of the block; it comes from the enclosing
/// Date-Section header.
pub fn encode(entry: &Entry) -> String {
    let mut lines = vec![
        format!("{}{}", TITLE_PREFIX, entry.title),
        format!("{} {}", TOPIC_PREFIX, entry.topic),
        format!("{} {}", IMPACT_PREFIX, entry.impact),
    ];
    if !entry.tags.is_empty() {
        lines.push(format!("{} {}", TAGS_PREFIX, entry.tags.join(", ")));
    }
    lines.join("\n")
}

/// Decode an entry block. Returns `None` when the block has no title line.
///
/// Lines are recognised by prefix in any order; when a field repeats, the
/// last occurrence wins. Unrecognised lines are ignored.
pub fn decode(text: &str, entry_date: NaiveDate) -> Option<Entry> {
    let mut title = None;
    let mut topic = String::new();
    let mut impact = String::new();
    let mut tags = Vec::new();

    for line in text.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix(TITLE_PREFIX) {
            let rest = rest.trim();
            title = (!rest.is_empty()).then(|| rest.to_string());
        } else if let Some(rest) = line.strip_prefix(TOPIC_PREFIX) {
            topic = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(IMPACT_PREFIX) {
            impact = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(TAGS_PREFIX) {
            tags = split_tags(rest);
        }
    }

    Some(Entry {
        title: title?,
        topic,
        impact,
        tags,
        entry_date,
    })
}

/// Date-Section header line for `date`
pub fn date_header(date: NaiveDate) -> String {
    format!("## {}", date.format("%Y-%m-%d"))
}

/// Classification of a line that looks like a Date-Section header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateHeader {
    /// `## YYYY-MM-DD` with a real calendar date
    Valid(NaiveDate),
    /// Header-shaped line whose date does not exist (e.g. `## 2024-02-30`)
    Malformed,
}

/// Recognise a Date-Section header. Returns `None` for any other line.
pub fn parse_date_header(line: &str) -> Option<DateHeader> {
    let captures = date_header_regex().captures(line)?;
    match NaiveDate::parse_from_str(&captures[1], "%Y-%m-%d") {
        Ok(date) => Some(DateHeader::Valid(date)),
        Err(_) => Some(DateHeader::Malformed),
    }
}
