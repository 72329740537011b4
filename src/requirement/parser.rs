//! Boundary parser converting untyped mappings into `Requirement`s.

use super::Requirement;
use crate::error::ValidationError;
use crate::fields;
use serde_json::{Map, Value};

/// Converts an untyped mapping (parsed JSON or YAML) into a validated
/// [`Requirement`].
///
/// This is the single place where requirement shape is checked. On failure
/// no partial object is produced; the first offending field is reported.
/// Parsing is a pure transformation with no side effects.
pub struct RequirementParser;

impl RequirementParser {
    /// Parse a raw mapping into a `Requirement`.
    ///
    /// Rules:
    /// - `title` and `description` must be present, non-null, non-empty text.
    /// - `constraints` and `goals`, when present, must be sequences of text;
    ///   their order is preserved. Absent means empty.
    /// - `context`, when present and non-null, must be text. Null counts as
    ///   absent.
    /// - Unknown fields are ignored.
    pub fn parse(raw: &Map<String, Value>) -> Result<Requirement, ValidationError> {
        Ok(Requirement {
            title: fields::require_text(raw, "title")?,
            description: fields::require_text(raw, "description")?,
            constraints: fields::optional_text_sequence(raw, "constraints")?,
            goals: fields::optional_text_sequence(raw, "goals")?,
            context: fields::optional_text(raw, "context")?,
        })
    }

    /// Parse an arbitrary JSON value, rejecting anything that is not a
    /// mapping at the top level.
    pub fn parse_value(raw: &Value) -> Result<Requirement, ValidationError> {
        Self::parse(fields::as_mapping(raw)?)
    }
}
