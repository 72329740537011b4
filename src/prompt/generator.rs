//! Deterministic prompt assembly from a validated requirement.
//!
//! Generation is a pure function: equal requirements produce equal prompts,
//! nothing outside the call is read or written, and the output shares no
//! storage with the input. Validation happened at the parser boundary, so
//! there is no error path here.

use super::{
    CAP_CONSTRAINT_ADHERENCE, CAP_CONTEXT_GROUNDED_RESPONSE, CAP_GOAL_DIRECTED_BEHAVIOR,
    CAP_REQUIREMENT_COMPREHENSION, METADATA_SOURCE_REQUIREMENT, Prompt,
};
use crate::requirement::Requirement;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Section labels used when assembling the system prompt text.
///
/// The wording is configurable; the structure (label-colon lines, `- ` list
/// items, section order) is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateLabels {
    /// Label for the title line.
    pub purpose: String,
    /// Label for the description line.
    pub context: String,
    /// Header for the constraints section.
    pub constraints: String,
    /// Header for the goals section.
    pub goals: String,
}

impl Default for TemplateLabels {
    fn default() -> Self {
        Self {
            purpose: "Purpose".to_string(),
            context: "Context".to_string(),
            constraints: "Constraints".to_string(),
            goals: "Goals".to_string(),
        }
    }
}

/// Generates a [`Prompt`] from a validated [`Requirement`].
#[derive(Debug, Clone, Default)]
pub struct PromptGenerator {
    labels: TemplateLabels,
}

impl PromptGenerator {
    /// Create a generator with the default English labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with custom section labels.
    pub fn with_labels(labels: TemplateLabels) -> Self {
        Self { labels }
    }

    /// Generate a prompt from a requirement.
    ///
    /// The resulting prompt:
    /// - carries the assembled system prompt text (see
    ///   [`render_system_prompt`](Self::render_system_prompt));
    /// - copies the requirement's description as `context` and its
    ///   constraints as a fresh sequence (mutating the prompt never touches
    ///   the requirement);
    /// - derives capabilities in a fixed order: the two baseline labels,
    ///   then constraint adherence when constraints exist, then
    ///   goal-directed behavior when goals exist;
    /// - records the requirement title under
    ///   [`METADATA_SOURCE_REQUIREMENT`].
    pub fn generate(&self, requirement: &Requirement) -> Prompt {
        let mut metadata = BTreeMap::new();
        metadata.insert(
            METADATA_SOURCE_REQUIREMENT.to_string(),
            Value::String(requirement.title.clone()),
        );

        Prompt {
            system_prompt: self.render_system_prompt(requirement),
            context: requirement.description.clone(),
            constraints: requirement.constraints.clone(),
            capabilities: derive_capabilities(requirement),
            metadata,
        }
    }

    /// Assemble the system prompt text.
    ///
    /// Emits a purpose line and a context line, then a constraints section
    /// and a goals section when the respective lists are non-empty. Lines
    /// are joined with a single newline and there is no trailing newline.
    pub fn render_system_prompt(&self, requirement: &Requirement) -> String {
        let mut lines = vec![
            format!("{}: {}", self.labels.purpose, requirement.title),
            format!("{}: {}", self.labels.context, requirement.description),
        ];

        if !requirement.constraints.is_empty() {
            lines.push(format!("{}:", self.labels.constraints));
            lines.extend(requirement.constraints.iter().map(|c| format!("- {}", c)));
        }

        if !requirement.goals.is_empty() {
            lines.push(format!("{}:", self.labels.goals));
            lines.extend(requirement.goals.iter().map(|g| format!("- {}", g)));
        }

        lines.join("\n")
    }
}

/// Derive capability labels from a requirement.
///
/// The order is fixed and each rule contributes at most once, so the result
/// needs no deduplication and never drops below the two baseline entries.
fn derive_capabilities(requirement: &Requirement) -> Vec<String> {
    let mut capabilities = vec![
        CAP_REQUIREMENT_COMPREHENSION.to_string(),
        CAP_CONTEXT_GROUNDED_RESPONSE.to_string(),
    ];

    if !requirement.constraints.is_empty() {
        capabilities.push(CAP_CONSTRAINT_ADHERENCE.to_string());
    }

    if !requirement.goals.is_empty() {
        capabilities.push(CAP_GOAL_DIRECTED_BEHAVIOR.to_string());
    }

    capabilities
}
