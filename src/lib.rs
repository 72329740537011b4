//! Promptgen: requirement-driven system prompt generator for AI agents.
//!
//! The library turns a structured requirement description into a system
//! prompt for an agent. Control flow:
//!
//! ```text
//! raw mapping -> RequirementParser -> Requirement -> PromptGenerator -> Prompt
//! ```
//!
//! - [`requirement`] defines the `Requirement` input entity and the parser
//!   that validates untyped mappings at the boundary.
//! - [`prompt`] defines the `Prompt` output entity and the deterministic
//!   generator (template assembly + capability derivation).
//! - [`validators`] provides speculative boolean conformance checks that
//!   never fail with an error.
//!
//! Once a `Requirement` exists it is trusted; all shape validation happens
//! in the parser. Generation is a pure function of its input.
//!
//! Around the core: [`enhance`] calls a hosted model to rewrite a generated
//! system prompt, [`store`] persists prompts as JSON documents, and
//! [`events`] keeps an append-only NDJSON log of operations.

pub mod config;
pub mod enhance;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fields;
pub mod fs;
pub mod prompt;
pub mod requirement;
pub mod store;
pub mod validators;
