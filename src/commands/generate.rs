//! The `generate` command.
//!
//! Pipeline: load mapping -> parse requirement -> generate prompt ->
//! optionally enhance -> print -> optionally persist and log.

use crate::cli::{GenerateArgs, OutputFormat};
use promptgen::config::Config;
use promptgen::enhance::EnhanceClient;
use promptgen::error::{PromptgenError, Result};
use promptgen::events::{Event, EventAction, append_event};
use promptgen::prompt::PromptGenerator;
use promptgen::requirement::RequirementParser;
use promptgen::store::PromptStore;
use serde_json::json;
use std::path::PathBuf;

/// Default store directory for `--save`.
const DEFAULT_STORE_DIR: &str = ".promptgen";

/// Metadata key recording which model enhanced the prompt text.
const METADATA_ENHANCEMENT_MODEL: &str = "enhancement_model";

pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let config = Config::load_or_default(args.config.as_deref())?;

    let raw = super::load_value(&args.file)?;
    let requirement = RequirementParser::parse_value(&raw)?;

    let generator = PromptGenerator::with_labels(config.labels.clone());
    let mut prompt = generator.generate(&requirement);

    let mut enhanced = false;
    if args.enhance {
        let client = EnhanceClient::from_config(&config.enhance)?;

        // The model sees constraints and goals as one requirements list,
        // constraints first.
        let mut requirement_lines = requirement.constraints.clone();
        requirement_lines.extend(requirement.goals.iter().cloned());

        prompt.system_prompt =
            client.enhance(&prompt.context, &requirement_lines, &config.enhance.tone)?;
        prompt.metadata.insert(
            METADATA_ENHANCEMENT_MODEL.to_string(),
            json!(config.enhance.model),
        );
        enhanced = true;
    }

    match args.format {
        OutputFormat::Text => println!("{}", prompt.system_prompt),
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&prompt).map_err(|e| {
                PromptgenError::UserError(format!("failed to serialize prompt: {}", e))
            })?;
            println!("{}", rendered);
        }
    }

    if args.save {
        let root = args
            .out
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR));
        let store = PromptStore::new(&root);
        let document = store.save(&prompt)?;

        let event = Event::new(EventAction::Generate).with_details(json!({
            "prompt_id": document.id,
            "source_requirement": requirement.title,
            "input_file": args.file.display().to_string(),
            "enhanced": enhanced,
        }));
        if let Err(e) = append_event(&root, &event) {
            eprintln!("Warning: failed to log generate event: {}", e);
        }

        if enhanced {
            let event = Event::new(EventAction::Enhance).with_details(json!({
                "prompt_id": document.id,
                "model": config.enhance.model,
            }));
            if let Err(e) = append_event(&root, &event) {
                eprintln!("Warning: failed to log enhance event: {}", e);
            }
        }

        eprintln!(
            "Saved prompt {} to {}",
            document.id,
            store.document_path(&document.id).display()
        );
    }

    Ok(())
}
