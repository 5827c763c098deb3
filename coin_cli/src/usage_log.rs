use chrono::{DateTime, Utc};
use coin_core::IndicatorError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Append-only record of the commands run in one session.
#[derive(Debug)]
pub struct UsageLog {
    session_id: Uuid,
    path: PathBuf,
}

impl UsageLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_session(path, Uuid::new_v4())
    }

    pub fn with_session(path: impl Into<PathBuf>, session_id: Uuid) -> Self {
        Self {
            session_id,
            path: path.into(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self, command: &str, query: &str) -> Result<(), IndicatorError> {
        let entry = self.entry(command, query, Utc::now());
        tracing::info!(session = %self.session_id, command, query, "command used");

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }

    fn entry(&self, command: &str, query: &str, at: DateTime<Utc>) -> String {
        format!(
            "Session ID: {}, Command: {}, Query: {}, Timestamp: {}",
            self.session_id,
            command,
            query,
            at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
