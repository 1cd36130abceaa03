//! Path management for saldo-cli
//!
//! Provides platform-appropriate path resolution for the settings file.
//!
//! ## Path Resolution Order
//!
//! 1. `SALDO_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory via `directories`
//!    (`~/.config/saldo-cli` on Linux, equivalent elsewhere)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SaldoError;

/// Manages all paths used by saldo-cli
#[derive(Debug, Clone)]
pub struct SaldoPaths {
    /// Base directory for all saldo-cli data
    base_dir: PathBuf,
}

impl SaldoPaths {
    /// Create a new SaldoPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SaldoError> {
        let base_dir = if let Ok(custom) = std::env::var("SALDO_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "saldo-cli")
                .ok_or_else(|| {
                    SaldoError::Config("could not determine a home directory".to_string())
                })?
                .config_dir()
                .to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create SaldoPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_dir() {
        let paths = SaldoPaths::with_base_dir(PathBuf::from("/tmp/saldo-test"));
        assert_eq!(paths.base_dir(), &PathBuf::from("/tmp/saldo-test"));
        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/tmp/saldo-test/config.json")
        );
    }
}
