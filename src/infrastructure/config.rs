//! Configuration management

use crate::error::{BragError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Config {
    /// Load config from config.yaml in the given root directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BragError::NotInitialized(path.to_path_buf())
            } else {
                BragError::Io(e)
            }
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents)
            .map_err(|e| BragError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))
    }

    /// Save config to config.yaml in the given root directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let contents = serde_yaml::to_string(self)?;
        fs::write(path.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Register a new topic. Exact duplicates are rejected.
    pub fn add_topic(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BragError::Config("Topic name must not be empty".to_string()));
        }
        if self.topics.iter().any(|topic| topic == name) {
            return Err(BragError::DuplicateTopic(name.to_string()));
        }

        self.topics.push(name.to_string());
        Ok(())
    }

    /// Find a configured topic, ignoring case. Returns the configured spelling.
    pub fn find_topic(&self, name: &str) -> Option<&str> {
        let wanted = name.trim().to_lowercase();
        self.topics
            .iter()
            .find(|topic| topic.to_lowercase() == wanted)
            .map(String::as_str)
    }
}
