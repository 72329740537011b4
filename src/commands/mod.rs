//! Command implementations for promptgen.
//!
//! Provides the dispatcher that routes CLI commands to their handlers, plus
//! the shared input loader. Input files are untyped mappings: `.yaml`/`.yml`
//! extensions are read as YAML, everything else as JSON. Shape validation is
//! not done here; that belongs to the parser boundary in the library.

mod generate;
mod validate_cmd;

use crate::cli::Command;
use promptgen::error::{PromptgenError, Result};
use serde_json::Value;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args),
        Command::Validate(args) => validate_cmd::cmd_validate(args),
    }
}

/// Read a file into an untyped JSON value, picking the parser by extension.
fn load_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        PromptgenError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| {
            PromptgenError::UserError(format!("failed to parse YAML '{}': {}", path.display(), e))
        })
    } else {
        serde_json::from_str(&content).map_err(|e| {
            PromptgenError::UserError(format!("failed to parse JSON '{}': {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_value_reads_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("req.json");
        fs::write(&path, r#"{"title": "t", "description": "d"}"#).unwrap();

        let value = load_value(&path).unwrap();
        assert_eq!(value["title"], json!("t"));
    }

    #[test]
    fn load_value_reads_yaml_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("req.yaml");
        fs::write(&path, "title: t\ndescription: d\nconstraints:\n  - c1\n").unwrap();

        let value = load_value(&path).unwrap();
        assert_eq!(value["constraints"], json!(["c1"]));
    }

    #[test]
    fn load_value_missing_file_is_user_error() {
        let dir = TempDir::new().unwrap();
        let err = load_value(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.exit_code(), promptgen::exit_codes::USER_ERROR);
    }

    #[test]
    fn load_value_malformed_json_is_user_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_value(&path).unwrap_err();
        assert_eq!(err.exit_code(), promptgen::exit_codes::USER_ERROR);
    }
}
