//! Speculative boolean conformance checks.
//!
//! These validators answer "would this mapping construct cleanly?" without
//! making the caller handle errors. Every construction failure is converted
//! to `false`; they never fail with an error themselves, which makes them
//! safe to call before ingesting untrusted input.

use crate::prompt::Prompt;
use crate::requirement::RequirementParser;
use serde_json::Value;

/// Check whether `data` would construct a valid `Requirement`.
pub fn validate_requirement(data: &Value) -> bool {
    RequirementParser::parse_value(data).is_ok()
}

/// Check whether `data` would construct a valid `Prompt`.
pub fn validate_prompt(data: &Value) -> bool {
    Prompt::from_value(data).is_ok()
}
