//! Sender to avatar path mapping.
//!
//! Pure string manipulation: the resulting path is never checked on disk, a
//! missing file simply renders as a broken image.

pub const DEFAULT_ICON_DIR: &str = "images";
pub const DEFAULT_ICON_EXT: &str = "png";

/// Characters that are unsafe in file names and are replaced by `_`.
const RESERVED_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|', '@', ' '];

/// Strip any `@` qualifier from the sender and make the rest file-name safe.
pub fn sanitize_sender(sender: &str) -> String {
    let name = sender.split('@').next().unwrap_or_default();
    name.chars()
        .map(|c| if RESERVED_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Builds `{dir}/{sanitized-sender}.{ext}` avatar references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconResolver {
    dir: String,
    ext: String,
}

impl IconResolver {
    pub fn new(dir: impl Into<String>, ext: impl Into<String>) -> Self {
        IconResolver {
            dir: dir.into(),
            ext: ext.into(),
        }
    }

    pub fn icon_path(&self, sender: &str) -> String {
        format!("{}/{}.{}", self.dir, sanitize_sender(sender), self.ext)
    }
}

impl Default for IconResolver {
    fn default() -> Self {
        IconResolver::new(DEFAULT_ICON_DIR, DEFAULT_ICON_EXT)
    }
}
