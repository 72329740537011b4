//! The `Prompt` output entity and its generator.
//!
//! A prompt is the generated artifact handed to a consuming agent: the
//! assembled system prompt text, the context it was grounded in, a defensive
//! copy of the source constraints, the derived capability labels, and
//! metadata tracing it back to its requirement.

mod generator;

pub use generator::{PromptGenerator, TemplateLabels};

use crate::error::ValidationError;
use crate::fields;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Capability label: the agent understands and interprets requirements.
/// Always present.
pub const CAP_REQUIREMENT_COMPREHENSION: &str = "requirement comprehension";

/// Capability label: the agent grounds responses in the given context.
/// Always present.
pub const CAP_CONTEXT_GROUNDED_RESPONSE: &str = "context-grounded response generation";

/// Capability label: the agent adheres to constraints. Present when the
/// source requirement has constraints.
pub const CAP_CONSTRAINT_ADHERENCE: &str = "constraint adherence";

/// Capability label: the agent acts toward goals. Present when the source
/// requirement has goals.
pub const CAP_GOAL_DIRECTED_BEHAVIOR: &str = "goal-directed behavior";

/// Metadata key holding the originating requirement's title.
pub const METADATA_SOURCE_REQUIREMENT: &str = "source_requirement";

/// A generated system prompt.
///
/// Constructed by [`PromptGenerator`] from an already-validated
/// `Requirement`, or re-checked from an untyped mapping via
/// [`Prompt::from_value`]. Generated prompts always carry the two baseline
/// capability labels; prompts re-read from a mapping keep whatever the
/// mapping held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// The assembled system prompt text.
    pub system_prompt: String,
    /// The context the prompt is grounded in (the source description).
    pub context: String,
    /// Constraints copied from the source requirement.
    #[serde(default)]
    pub constraints: Vec<String>,
    /// Derived capability labels, in derivation order.
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Additional metadata; generated prompts hold at least
    /// [`METADATA_SOURCE_REQUIREMENT`].
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
}

impl Prompt {
    /// Re-construct a `Prompt` from an untyped mapping, checking its shape.
    ///
    /// `system_prompt` must be non-empty text and `context` must be text
    /// (empty allowed). The remaining fields default: `constraints` and
    /// `capabilities` to empty sequences, `metadata` to an empty mapping.
    /// This mirrors how prompts arrive from external stores.
    pub fn from_value(raw: &Value) -> Result<Self, ValidationError> {
        let map = fields::as_mapping(raw)?;
        Ok(Prompt {
            system_prompt: fields::require_text(map, "system_prompt")?,
            context: fields::require_text_allow_empty(map, "context")?,
            constraints: fields::optional_text_sequence(map, "constraints")?,
            capabilities: fields::optional_text_sequence(map, "capabilities")?,
            metadata: fields::optional_mapping(map, "metadata")?,
        })
    }
}
