//! Append-only operation log.
//!
//! Saved generations are recorded in NDJSON format (one JSON object per
//! line) in `{root}/events.ndjson`, so a store directory carries its own
//! history. Each event holds:
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: the operation performed (generate, enhance)
//! - `actor`: `user@host`
//! - `details`: freeform object with action-specific fields
//!
//! Logging is best-effort at the call sites: persisting the prompt matters
//! more than logging that it was persisted.

use crate::error::{PromptgenError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A prompt was generated and saved.
    Generate,
    /// A saved prompt's text came from the enhancement call.
    Enhance,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Generate => write!(f, "generate"),
            EventAction::Enhance => write!(f, "enhance"),
        }
    }
}

/// A single log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// When the event happened.
    pub ts: DateTime<Utc>,
    /// What happened.
    pub action: EventAction,
    /// Who did it, as `user@host`.
    pub actor: String,
    /// Action-specific details.
    #[serde(default)]
    pub details: Value,
}

impl Event {
    /// Create an event stamped with the current time and actor.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: actor_string(),
            details: Value::Null,
        }
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            PromptgenError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

/// The actor string for event metadata.
fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Path of the events file under a store root.
pub fn events_file_path(root: &Path) -> PathBuf {
    root.join("events.ndjson")
}

/// Append an event to the log under `root`.
///
/// The file and its directory are created on first use. Each append writes
/// exactly one line.
pub fn append_event(root: &Path, event: &Event) -> Result<()> {
    let json_line = event.to_ndjson_line()?;

    if !root.exists() {
        fs::create_dir_all(root).map_err(|e| {
            PromptgenError::UserError(format!(
                "failed to create events directory '{}': {}",
                root.display(),
                e
            ))
        })?;
    }

    let path = events_file_path(root);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| {
            PromptgenError::UserError(format!(
                "failed to open events file '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        PromptgenError::UserError(format!(
            "failed to append to events file '{}': {}",
            path.display(),
            e
        ))
    })
}
