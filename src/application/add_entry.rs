//! Add entry use case

use crate::domain::{Entry, WeekKey};
use crate::error::{BragError, Result};
use crate::infrastructure::{BragRepository, FileSystemRepository};
use chrono::NaiveDate;

/// Raw field values collected from flags or prompts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub topic: String,
    pub title: String,
    pub impact: String,
    pub tags: Vec<String>,
}

/// Service for recording new entries
pub struct AddEntryService {
    repository: FileSystemRepository,
}

impl AddEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        AddEntryService { repository }
    }

    /// Topics an entry may be filed under. Errors when none are defined.
    pub fn topics(&self) -> Result<Vec<String>> {
        self.repository.ensure_initialized()?;
        let topics = self.repository.load_config()?.topics;
        if topics.is_empty() {
            return Err(BragError::NoTopics);
        }
        Ok(topics)
    }

    /// Validate a draft into an entry. The topic must be configured; its
    /// configured spelling is used.
    pub fn prepare(&self, draft: &EntryDraft, entry_date: NaiveDate) -> Result<Entry> {
        self.repository.ensure_initialized()?;
        let config = self.repository.load_config()?;
        if config.topics.is_empty() {
            return Err(BragError::NoTopics);
        }
        let topic = config
            .find_topic(&draft.topic)
            .ok_or_else(|| BragError::UnknownTopic(draft.topic.trim().to_string()))?;

        Entry::new(
            &collapse_lines(&draft.title),
            topic,
            &collapse_lines(&draft.impact),
            draft.tags.clone(),
            entry_date,
        )
    }

    /// Append a prepared entry. Returns the ISO week it was filed under.
    pub fn save(&self, entry: &Entry) -> Result<WeekKey> {
        self.repository.ensure_initialized()?;
        self.repository.store().append(entry)
    }

    /// Prepare and save in one step
    pub fn execute(&self, draft: &EntryDraft, entry_date: NaiveDate) -> Result<(Entry, WeekKey)> {
        let entry = self.prepare(draft, entry_date)?;
        let week = self.save(&entry)?;
        Ok((entry, week))
    }
}

/// Join multi-line prompt input into one line
fn collapse_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_entry_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| BragError::InvalidDate(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Config;
    use std::fs;
    use tempfile::TempDir;

    fn service(temp: &TempDir, topics: &[&str]) -> AddEntryService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config {
            topics: topics.iter().map(|t| t.to_string()).collect(),
        })
        .unwrap();
        AddEntryService::new(repo)
    }

    fn draft(topic: &str) -> EntryDraft {
        EntryDraft {
            topic: topic.to_string(),
            title: "Implemented authentication".to_string(),
            impact: "Secured user access".to_string(),
            tags: vec!["security".to_string()],
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_execute_writes_week_file() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp, &["Project Alpha"]);

        let (entry, week) = service
            .execute(&draft("Project Alpha"), date(2024, 11, 25))
            .unwrap();

        assert_eq!(week, WeekKey::new(2024, 48));
        assert_eq!(entry.tags(), ["security"]);
        let content = fs::read_to_string(temp.path().join("entries/2024/week-48.md")).unwrap();
        assert!(content.starts_with("# Week 48 - 2024\n"));
        assert!(content.contains("### Implemented authentication"));
        assert!(content.contains("- **Tags:** security"));
    }

    #[test]
    fn test_prepare_uses_configured_topic_spelling() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp, &["Project Alpha"]);

        let entry = service
            .prepare(&draft("project ALPHA"), date(2024, 11, 25))
            .unwrap();
        assert_eq!(entry.topic(), "Project Alpha");
    }

    #[test]
    fn test_prepare_unknown_topic() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp, &["Project Alpha"]);

        match service.prepare(&draft("Beta"), date(2024, 11, 25)).unwrap_err() {
            BragError::UnknownTopic(name) => assert_eq!(name, "Beta"),
            other => panic!("Expected UnknownTopic error, got {:?}", other),
        }
    }

    #[test]
    fn test_prepare_without_topics() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp, &[]);

        assert!(matches!(
            service.prepare(&draft("Anything"), date(2024, 11, 25)),
            Err(BragError::NoTopics)
        ));
    }

    #[test]
    fn test_prepare_collapses_multiline_text() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp, &["Docs"]);
        let draft = EntryDraft {
            topic: "Docs".to_string(),
            title: "Rewrote\n  the onboarding guide\n".to_string(),
            impact: "New hires\n\nship faster".to_string(),
            tags: vec![],
        };

        let entry = service.prepare(&draft, date(2024, 11, 25)).unwrap();
        assert_eq!(entry.title(), "Rewrote the onboarding guide");
        assert_eq!(entry.impact(), "New hires ship faster");
    }

    #[test]
    fn test_prepare_rejects_blank_title() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp, &["Docs"]);
        let draft = EntryDraft {
            topic: "Docs".to_string(),
            title: " \n ".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            service.prepare(&draft, date(2024, 11, 25)),
            Err(BragError::InvalidEntry(_))
        ));
    }

    #[test]
    fn test_parse_entry_date() {
        assert_eq!(parse_entry_date("2024-02-29").unwrap(), date(2024, 2, 29));
        assert!(matches!(
            parse_entry_date("2023-02-29"),
            Err(BragError::InvalidDate(_))
        ));
        assert!(parse_entry_date("25-11-2024").is_err());
    }
}
