//! HTML rendering for converted transcripts.
//!
//! Produces one standalone page with inline CSS and no JavaScript.

pub mod html;

pub use html::{escape_text, render_fragment, render_page, write_page};
