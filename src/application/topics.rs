//! Topic management use case

use crate::error::Result;
use crate::infrastructure::{BragRepository, FileSystemRepository};

/// Service for registering and listing topics
pub struct TopicService {
    repository: FileSystemRepository,
}

impl TopicService {
    pub fn new(repository: FileSystemRepository) -> Self {
        TopicService { repository }
    }

    /// Register a topic. Returns the stored (trimmed) name.
    pub fn add(&self, name: &str) -> Result<String> {
        self.repository.ensure_initialized()?;
        let mut config = self.repository.load_config()?;

        config.add_topic(name)?;
        self.repository.save_config(&config)?;

        Ok(name.trim().to_string())
    }

    /// Topics in registration order
    pub fn list(&self) -> Result<Vec<String>> {
        self.repository.ensure_initialized()?;
        Ok(self.repository.load_config()?.topics)
    }
}
