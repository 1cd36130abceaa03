//! User settings for saldo-cli
//!
//! Manages user preferences: the snapshot marker token, currency symbol, and
//! date format preferences. Stored as JSON under the config directory.

use serde::{Deserialize, Serialize};

use super::paths::SaldoPaths;
use crate::error::SaldoError;

/// User settings for saldo-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Marker token identifying bank-reported balance snapshot rows
    /// (case-sensitive substring match against the description)
    #[serde(default = "default_snapshot_marker")]
    pub snapshot_marker: String,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Preferred date format for CSV input (strftime format)
    #[serde(default = "default_csv_date_format")]
    pub csv_date_format: String,

    /// Date format used for display and export (strftime format)
    #[serde(default = "default_display_date_format")]
    pub display_date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_snapshot_marker() -> String {
    "Kontostand".to_string()
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_csv_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_display_date_format() -> String {
    "%d.%m.%Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            snapshot_marker: default_snapshot_marker(),
            currency_symbol: default_currency(),
            csv_date_format: default_csv_date_format(),
            display_date_format: default_display_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file
    /// doesn't exist yet
    pub fn load_or_create(paths: &SaldoPaths) -> Result<Self, SaldoError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)?;
            let settings: Settings = serde_json::from_str(&contents)?;
            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SaldoPaths) -> Result<(), SaldoError> {
        std::fs::create_dir_all(paths.base_dir())?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.snapshot_marker, "Kontostand");
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.display_date_format, "%d.%m.%Y");
    }

    #[test]
    fn test_load_or_create_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaldoPaths::with_base_dir(temp_dir.path().to_path_buf());

        // First call creates the file with defaults
        let created = Settings::load_or_create(&paths).unwrap();
        assert!(paths.settings_file().exists());

        // Second call reads it back
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.snapshot_marker, created.snapshot_marker);
        assert_eq!(loaded.currency_symbol, created.currency_symbol);
    }

    #[test]
    fn test_partial_settings_file_gets_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaldoPaths::with_base_dir(temp_dir.path().to_path_buf());

        std::fs::create_dir_all(paths.base_dir()).unwrap();
        std::fs::write(paths.settings_file(), r#"{"snapshot_marker":"Statement"}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.snapshot_marker, "Statement");
        assert_eq!(settings.currency_symbol, "€");
    }
}
