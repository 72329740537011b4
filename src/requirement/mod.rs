//! The `Requirement` input entity and its boundary parser.
//!
//! A requirement is the structured description of a unit of work: what to
//! build (`title`, `description`), under which constraints, toward which
//! goals, with optional free-text context. Requirements enter the system as
//! untyped mappings (parsed JSON or YAML) and are validated once by
//! [`RequirementParser`]; after that they are trusted and immutable.

mod parser;

pub use parser::RequirementParser;

use serde::{Deserialize, Serialize};

/// A validated unit-of-work description.
///
/// Invariants (enforced by [`RequirementParser`]):
/// - `title` and `description` are non-empty.
/// - `constraints` and `goals` preserve the input order; both may be empty.
/// - `context` is `None` when absent or null in the input, which is distinct
///   from an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Short name of the requirement.
    pub title: String,
    /// Detailed description of the work.
    pub description: String,
    /// Ordered constraint statements.
    #[serde(default)]
    pub constraints: Vec<String>,
    /// Ordered goal statements.
    #[serde(default)]
    pub goals: Vec<String>,
    /// Optional additional context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[cfg(test)]
mod tests;
