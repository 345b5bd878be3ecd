//! User settings for the budget tracker
//!
//! Display preferences and logging switches, persisted as `config.json`.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::try_format_date;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency glyph shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How long transient messages stay visible, in milliseconds
    #[serde(default = "default_notification_duration_ms")]
    pub notification_duration_ms: u64,

    /// Date format preference for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₦".to_string()
}

fn default_notification_duration_ms() -> u64 {
    2500
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            notification_duration_ms: default_notification_duration_ms(),
            date_format: default_date_format(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// How long transient messages stay visible
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }

    /// Load settings from disk. A missing file is written out with the
    /// defaults so users have something to edit.
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            let settings = Settings::default();
            settings.save(paths)?;
            return Ok(settings);
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would break rendering later
    pub fn validate(&self) -> Result<(), BudgetError> {
        if try_format_date(NaiveDate::default(), &self.date_format).is_none() {
            return Err(BudgetError::Config(format!(
                "Invalid date_format '{}': expected a strftime date pattern such as %Y-%m-%d",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₦");
        assert_eq!(settings.notification_duration(), Duration::from_millis(2500));
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());

        let written = std::fs::read_to_string(paths.settings_file()).unwrap();
        assert!(written.contains("\"currency_symbol\": \"₦\""));
        assert_eq!(Settings::load_or_create(&paths).unwrap(), settings);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "$".to_string(),
            audit_enabled: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "€"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.notification_duration_ms, 2500);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(BudgetError::Config(_))
        ));
    }

    #[test]
    fn test_unusable_date_format_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        for pattern in ["%Q", "%H:%M", "%"] {
            let body = serde_json::json!({ "date_format": pattern }).to_string();
            std::fs::write(paths.settings_file(), body).unwrap();

            match Settings::load_or_create(&paths) {
                Err(BudgetError::Config(msg)) => assert!(msg.contains(pattern)),
                other => panic!("expected config error for {:?}, got {:?}", pattern, other),
            }
        }
    }
}
