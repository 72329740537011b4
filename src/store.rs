//! File-based persistence for generated prompts.
//!
//! Each saved prompt becomes one JSON document under `{root}/prompts/`,
//! keyed by a generated UUID and stamped with its creation time. The store
//! stands in for whatever document sink consumes prompts downstream; the
//! document shape is the serialized prompt with `id` and `created_at`
//! alongside its own fields.

use crate::error::{PromptgenError, Result};
use crate::fs::atomic_write_file;
use crate::prompt::Prompt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// A persisted prompt document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptDocument {
    /// Generated identifier (UUID v7, time-ordered).
    pub id: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// The stored prompt, flattened into the document.
    #[serde(flatten)]
    pub prompt: Prompt,
}

/// Stores prompts as JSON documents under a root directory.
#[derive(Debug, Clone)]
pub struct PromptStore {
    root: PathBuf,
}

impl PromptStore {
    /// Create a store rooted at `root`. Nothing is created until the first
    /// save.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the prompt documents.
    pub fn prompts_dir(&self) -> PathBuf {
        self.root.join("prompts")
    }

    /// Path of the document for `id`.
    pub fn document_path(&self, id: &str) -> PathBuf {
        self.prompts_dir().join(format!("{}.json", id))
    }

    /// Persist a prompt, assigning it an id and creation timestamp.
    ///
    /// The write is atomic; a crash never leaves a partial document.
    pub fn save(&self, prompt: &Prompt) -> Result<PromptDocument> {
        let document = PromptDocument {
            id: Uuid::now_v7().to_string(),
            created_at: Utc::now(),
            prompt: prompt.clone(),
        };

        let json = serde_json::to_string_pretty(&document).map_err(|e| {
            PromptgenError::UserError(format!("failed to serialize prompt document: {}", e))
        })?;

        atomic_write_file(self.document_path(&document.id), &json)?;
        Ok(document)
    }

    /// Load a previously saved document by id.
    pub fn load(&self, id: &str) -> Result<PromptDocument> {
        let path = self.document_path(id);

        let content = std::fs::read_to_string(&path).map_err(|e| {
            PromptgenError::UserError(format!(
                "failed to read prompt document '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            PromptgenError::UserError(format!(
                "failed to parse prompt document '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// List the ids of all stored documents.
    ///
    /// Sorted lexicographically; UUID v7 ids make that creation order down
    /// to millisecond resolution.
    pub fn list_ids(&self) -> Result<Vec<String>> {
        let dir = self.prompts_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&dir).map_err(|e| {
            PromptgenError::UserError(format!(
                "failed to read prompts directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                PromptgenError::UserError(format!("failed to read directory entry: {}", e))
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                ids.push(stem.to_string());
            }
        }

        ids.sort();
        Ok(ids)
    }
}
