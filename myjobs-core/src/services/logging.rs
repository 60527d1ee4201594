//! Logging service - structured event logging to a JSONL file
//!
//! Privacy-safe event log stored as one JSON object per line in
//! `logs.jsonl` in the app directory. No profile data (names, emails, bios)
//! is ever logged, only event names and command context.
//!
//! Logging must never break the app: callers ignore the Result or go
//! through a helper that swallows it.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Counter for generating unique IDs within the same millisecond
static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique ID based on timestamp + counter
fn generate_id() -> u64 {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;

    // Lower 48 bits of timestamp, 16-bit counter for same-millisecond ids
    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed) & 0xFFFF;
    (timestamp << 16) | counter
}

/// Get current unix timestamp in milliseconds
fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Detect the current platform
fn detect_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}

/// A log event to be recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl LogEvent {
    /// Create a new log event with just an event name
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            command: None,
            error_message: None,
        }
    }

    /// Set the command context
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set an error message
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

/// A recorded log entry as written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp_ms: i64,
    pub platform: String,
    pub entry_point: String,
    pub version: String,
    #[serde(flatten)]
    pub event: LogEvent,
}

/// Logging service appending entries to `logs.jsonl`
pub struct LoggingService {
    log_path: PathBuf,
    entry_point: String,
    version: String,
    // Serializes appends from concurrent callers within one process
    write_lock: Mutex<()>,
}

impl LoggingService {
    pub fn new(app_dir: &Path, entry_point: &str, version: &str) -> Result<Self> {
        std::fs::create_dir_all(app_dir)?;
        Ok(Self {
            log_path: app_dir.join("logs.jsonl"),
            entry_point: entry_point.to_string(),
            version: version.to_string(),
            write_lock: Mutex::new(()),
        })
    }

    /// Append an event to the log
    pub fn log(&self, event: LogEvent) -> Result<()> {
        let entry = LogEntry {
            id: generate_id(),
            timestamp_ms: now_ms(),
            platform: detect_platform().to_string(),
            entry_point: self.entry_point.clone(),
            version: self.version.clone(),
            event,
        };

        let line = serde_json::to_string(&entry)?;
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| anyhow::anyhow!("log writer poisoned"))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    /// Read back the most recent entries, oldest first. Unparseable lines
    /// are skipped.
    pub fn recent(&self, limit: usize) -> Result<Vec<LogEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.log_path)?;
        let entries: Vec<LogEntry> = content
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect();

        let skip = entries.len().saturating_sub(limit);
        Ok(entries.into_iter().skip(skip).collect())
    }
}
