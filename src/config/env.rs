//! .env file loading

use crate::error::{ErrorContext, Result};
use std::path::Path;

/// Environment file manager
pub struct EnvManager;

impl EnvManager {
    /// Load `.env` from the current directory if present
    ///
    /// Must run before the CLI is parsed so that clap sees the variables.
    /// Variables already set in the process environment win.
    pub fn load_env_file() -> Result<bool> {
        Self::load_from(Path::new(".env"))
    }

    /// Load a specific env file; `Ok(false)` when it does not exist
    pub fn load_from(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }

        dotenv::from_path(path).with_context(|| format!("Failed to load {}", path.display()))?;
        Ok(true)
    }
}
