pub mod config;
pub mod convert_cmd;
pub mod core;
pub mod parse;
pub mod render;
pub mod transcript;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{0}")]
    Message(String),
    #[error("failed to read transcript {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

pub type ChatResult<T> = Result<T, ChatError>;

/// Parse a whole transcript and render the complete HTML page.
///
/// This is the pure core of a conversion run: no file access, no logging
/// side effects beyond `tracing` events.
pub fn convert_text(text: &str, icons: &parse::IconResolver) -> String {
    let fragments = transcript::accumulate(transcript::split_lines(text), icons);
    render::render_page(&fragments)
}
