//! CLI command handler for `convert`.
//!
//! Reads the transcript, renders the chat page and writes it (plus an optional
//! JSON dump of the parsed messages).

use std::path::{Path, PathBuf};

use tracing::{info, info_span};

use crate::config::ConvertConfig;
use crate::core::{ChatMessage, Fragment};
use crate::render::write_page;
use crate::transcript::{accumulate, split_lines};
use crate::{ChatError, ChatResult};

/// What a finished conversion produced.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    pub output: PathBuf,
    pub messages: usize,
    pub dates: usize,
}

fn read_transcript(path: &Path) -> ChatResult<String> {
    std::fs::read_to_string(path).map_err(|source| ChatError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

fn write_messages_json(fragments: &[Fragment], path: &Path) -> ChatResult<()> {
    let messages: Vec<&ChatMessage> = fragments.iter().filter_map(Fragment::as_message).collect();
    let json = serde_json::to_string_pretty(&messages)
        .map_err(|e| ChatError::Message(format!("failed to serialize messages: {e}")))?;
    std::fs::write(path, json).map_err(|source| ChatError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the `convert` command.
///
/// The input is read completely before anything is written, so a missing
/// transcript never leaves a fresh (empty) page behind.
///
/// # Arguments
/// * `config` - Resolved input/output paths and icon settings
/// * `json` - Optional path for a JSON array of the parsed messages
pub fn run(config: &ConvertConfig, json: Option<PathBuf>) -> ChatResult<ConvertSummary> {
    let _span = info_span!("convert", input = %config.input.display()).entered();
    info!("reading transcript");
    let text = read_transcript(&config.input)?;

    let icons = config.icon_resolver();
    let fragments = accumulate(split_lines(&text), &icons);

    let messages = fragments.iter().filter(|f| matches!(f, Fragment::Bubble(_))).count();
    let dates = fragments.iter().filter(|f| matches!(f, Fragment::DateLabel(_))).count();
    info!(messages, dates, "parsed transcript");

    write_page(&fragments, &config.output)?;
    info!(output = %config.output.display(), "wrote chat page");

    if let Some(json_path) = json {
        write_messages_json(&fragments, &json_path)?;
        info!(json = %json_path.display(), "wrote message dump");
    }

    Ok(ConvertSummary {
        output: config.output.clone(),
        messages,
        dates,
    })
}
