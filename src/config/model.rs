//! Configuration data model.
//!
//! Everything here round-trips through TOML via serde. Each field carries a
//! default, so a missing or partial config file still yields a working setup.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_ui")]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: default_ui(),
            behavior: BehaviorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// How many activity lines to keep before the oldest are dropped.
    #[serde(default = "default_max_activity")]
    pub max_activity: usize,
    /// Show the correct answer under a question graded wrong.
    #[serde(default = "default_true")]
    pub reveal_answers: bool,
}

/// Quiz behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Shuffle each question's options at load time. Grading matches picks
    /// by option text, so shuffling never changes a verdict.
    #[serde(default)]
    pub shuffle_options: bool,
    /// How long transient status messages stay on screen.
    #[serde(default = "default_status_secs")]
    pub status_secs: u64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            shuffle_options: false,
            status_secs: default_status_secs(),
        }
    }
}

/// Session result logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Also write a per-question report line after each grading pass.
    #[serde(default = "default_true")]
    pub log_reports: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            log_reports: true,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_max_activity() -> usize {
    300
}
fn default_status_secs() -> u64 {
    2
}
fn default_log_dir() -> String {
    "~/.local/share/quizdeck/logs".to_string()
}
fn default_ui() -> UiConfig {
    UiConfig {
        timestamp_format: default_timestamp_format(),
        max_activity: default_max_activity(),
        reveal_answers: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.timestamp_format, "%H:%M");
        assert_eq!(config.ui.max_activity, 300);
        assert!(config.ui.reveal_answers);
        assert!(!config.behavior.shuffle_options);
        assert_eq!(config.behavior.status_secs, 2);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: AppConfig = toml::from_str("[behavior]\nshuffle_options = true\n").unwrap();
        assert!(config.behavior.shuffle_options);
        assert_eq!(config.behavior.status_secs, 2);
        assert_eq!(config.ui.max_activity, 300);
    }
}
