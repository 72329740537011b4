//! The `validate` command.
//!
//! Checks a file against the requirement or prompt schema without producing
//! anything. A clean file reports OK and exits 0; a rejected file reports
//! the first offending field and exits with the validation-failure code.

use crate::cli::{ValidateArgs, ValidateKind};
use promptgen::error::Result;
use promptgen::prompt::Prompt;
use promptgen::requirement::RequirementParser;

pub fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let raw = super::load_value(&args.file)?;

    let (kind_name, outcome) = match args.kind {
        ValidateKind::Requirement => (
            "requirement",
            RequirementParser::parse_value(&raw).map(|_| ()),
        ),
        ValidateKind::Prompt => ("prompt", Prompt::from_value(&raw).map(|_| ())),
    };

    outcome?;
    println!("OK: '{}' is a valid {}", args.file.display(), kind_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptgen::exit_codes;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn validate_args(file: PathBuf, kind: ValidateKind) -> ValidateArgs {
        ValidateArgs { file, kind }
    }

    #[test]
    fn valid_requirement_passes() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "req.json",
            r#"{"title": "t", "description": "d", "goals": ["g"]}"#,
        );
        cmd_validate(validate_args(path, ValidateKind::Requirement)).unwrap();
    }

    #[test]
    fn valid_requirement_yaml_passes() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "req.yaml", "title: t\ndescription: d\n");
        cmd_validate(validate_args(path, ValidateKind::Requirement)).unwrap();
    }

    #[test]
    fn invalid_requirement_names_the_field() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "req.json", r#"{"title": "t"}"#);

        let err = cmd_validate(validate_args(path, ValidateKind::Requirement)).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
        assert!(err.to_string().contains("'description'"));
    }

    #[test]
    fn valid_prompt_passes() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "prompt.json",
            r#"{"system_prompt": "p", "context": "c"}"#,
        );
        cmd_validate(validate_args(path, ValidateKind::Prompt)).unwrap();
    }

    #[test]
    fn prompt_missing_context_is_validation_failure() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "prompt.json",
            r#"{"system_prompt": "x", "constraints": ["c"], "capabilities": ["k"], "metadata": {}}"#,
        );

        let err = cmd_validate(validate_args(path, ValidateKind::Prompt)).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
        assert!(err.to_string().contains("'context'"));
    }

    #[test]
    fn requirement_file_checked_as_prompt_fails() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "req.json", r#"{"title": "t", "description": "d"}"#);

        let err = cmd_validate(validate_args(path, ValidateKind::Prompt)).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }
}
