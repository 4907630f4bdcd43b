//! Activity and report logging to disk.
//!
//! When enabled, appends quiz activity to daily log files named
//! `quizdeck_<date>.log` in the configured log directory (default:
//! `~/.local/share/quizdeck/logs/`). Each grading pass can additionally
//! write a per-question report block. Parser diagnostics go through
//! `tracing` and land in a separate file only when `QUIZDECK_LOG` is set.

use crate::app::state::{Message, MessageKind};
use crate::config::LoggingConfig;
use crate::quiz::QuizSession;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Writes activity lines and graded reports to daily log files.
///
/// Handles are opened once per day-file and cached for the logger's
/// lifetime. When a file cannot be created, writes divert to `/dev/null`.
pub struct ResultLogger {
    enabled: bool,
    log_dir: String,
    log_reports: bool,
    file_handles: HashMap<String, fs::File>,
}

impl ResultLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: config.log_dir.clone(),
            log_reports: config.log_reports,
            file_handles: HashMap::new(),
        }
    }

    /// Append an activity message to today's log file. No-op if logging is
    /// disabled.
    pub fn log_message(&mut self, msg: &Message) {
        if !self.enabled {
            return;
        }

        let line = match msg.kind {
            MessageKind::System => format!("[{}] --- {}", msg.timestamp, msg.text),
            MessageKind::Success => format!("[{}] +++ {}", msg.timestamp, msg.text),
            MessageKind::Error => format!("[{}] !!! {}", msg.timestamp, msg.text),
        };

        let handle = self.handle_for_today();
        let _ = writeln!(handle, "{}", line);
    }

    /// Append one block per grading pass: a score line followed by a verdict
    /// line for every question. No-op unless report logging is enabled.
    pub fn log_report(&mut self, session: &QuizSession) {
        if !self.enabled || !self.log_reports {
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let score = session.score();
        let total = session.len();
        let handle = self.handle_for_today();
        let _ = writeln!(handle, "[{}] === graded {}/{} ===", timestamp, score, total);
        for question in session.questions() {
            let mark = match session.verdict(question.id) {
                Some(true) => "ok  ",
                Some(false) => "miss",
                None => "--  ",
            };
            let pick = session.pick(question.id).unwrap_or("(none)");
            let _ = writeln!(
                handle,
                "[{}]   {} #{} {} (picked: {}, answer: {})",
                timestamp, mark, question.id, question.question, pick, question.answer
            );
        }
    }

    fn handle_for_today(&mut self) -> &mut fs::File {
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("quizdeck_{}.log", date);
        let log_dir = expand_home(&self.log_dir);
        let filepath = log_dir.join(&filename);

        self.file_handles.entry(filename).or_insert_with(|| {
            let _ = fs::create_dir_all(&log_dir);
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&filepath)
                .unwrap_or_else(|_| {
                    // Fallback: a handle that goes nowhere
                    OpenOptions::new()
                        .write(true)
                        .open(if cfg!(unix) { "/dev/null" } else { "NUL" })
                        .unwrap()
                })
        })
    }
}

fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(dir)
}

/// Route `tracing` diagnostics to a file when `QUIZDECK_LOG` is set.
///
/// The variable holds an `EnvFilter` directive (`debug`,
/// `quizdeck::quiz=trace`, ...). When it is unset nothing is initialized and
/// diagnostic macros compile down to no-ops at the subscriber level. Writing
/// to stderr is not an option while the terminal is in raw mode.
pub fn init_diagnostics() -> Result<()> {
    let Ok(directive) = std::env::var("QUIZDECK_LOG") else {
        return Ok(());
    };

    let dir = dirs::data_dir()
        .context("Failed to locate a data directory for diagnostics")?
        .join("quizdeck");
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create diagnostics directory {}", dir.display()))?;
    let path = dir.join("diagnostics.log");
    let file = fs::File::create(&path)
        .with_context(|| format!("Failed to create diagnostics file {}", path.display()))?;

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home_leaves_absolute_paths() {
        assert_eq!(expand_home("/var/log/quizdeck"), PathBuf::from("/var/log/quizdeck"));
    }

    #[test]
    fn test_expand_home_resolves_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }
}
