//! Initialize brag directory use case

use crate::error::Result;
use crate::infrastructure::{BragRepository, FileSystemRepository};

/// Result of running init
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyInitialized,
}

/// Initialize the brag directory. Running it again is harmless.
pub fn init(repository: &FileSystemRepository) -> Result<InitOutcome> {
    if repository.is_initialized() {
        return Ok(InitOutcome::AlreadyInitialized);
    }

    repository.initialize()?;
    tracing::info!(root = %repository.root().display(), "initialized brag directory");
    Ok(InitOutcome::Created)
}
