//! Core types for chatlog-html.
//!
//! This module holds the data model shared by the parser, the accumulator and
//! the renderer.

pub mod schema;

// Re-export key types for convenience
pub use schema::{ChatMessage, Fragment, MessageHeader};
