//! File system repository

use crate::error::{BragError, Result};
use crate::infrastructure::config::CONFIG_FILE;
use crate::infrastructure::{Config, WeekFileStore};
use std::fs;
use std::path::{Path, PathBuf};

pub const ROOT_ENV_VAR: &str = "BRAG_DIR";
pub const ENTRIES_DIR: &str = "entries";

/// Abstract repository for brag document operations
pub trait BragRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from config.yaml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to config.yaml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if config.yaml and entries/ exist
    fn is_initialized(&self) -> bool;

    /// Create the root, entries/ and an empty config.yaml where missing
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of BragRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Resolve the storage root: an explicit directory wins, then BRAG_DIR.
    /// A leading `~` is expanded. There is no fallback root.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let raw = match explicit {
            Some(path) => path.to_string_lossy().into_owned(),
            None => match std::env::var(ROOT_ENV_VAR) {
                Ok(value) if !value.trim().is_empty() => value,
                _ => return Err(BragError::RootNotSet),
            },
        };

        let expanded = shellexpand::tilde(&raw).into_owned();
        tracing::debug!(root = %expanded, "resolved storage root");
        Ok(FileSystemRepository::new(PathBuf::from(expanded)))
    }

    /// Fail with NotInitialized unless `brag init` has been run
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(BragError::NotInitialized(self.root.clone()))
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn entries_dir(&self) -> PathBuf {
        self.root.join(ENTRIES_DIR)
    }

    /// Week-file store rooted at entries/
    pub fn store(&self) -> WeekFileStore {
        WeekFileStore::new(self.entries_dir())
    }
}

impl BragRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        self.config_path().is_file() && self.entries_dir().is_dir()
    }

    fn initialize(&self) -> Result<()> {
        fs::create_dir_all(self.entries_dir())?;

        if !self.config_path().exists() {
            self.save_config(&Config::default())?;
        }
        Ok(())
    }
}
