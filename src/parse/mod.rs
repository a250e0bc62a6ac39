//! Line classification and sender-to-avatar mapping.

pub mod icon;
pub mod line;

pub use icon::{DEFAULT_ICON_DIR, DEFAULT_ICON_EXT, IconResolver, sanitize_sender};
pub use line::parse_header;
