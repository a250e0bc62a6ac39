//! Conversion settings: file locations and avatar naming.
//!
//! Defaults reproduce the classic layout (`chatlog.txt` → `index.html` with
//! avatars in `images/*.png`). A TOML file may override any subset of fields,
//! and CLI flags override the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::parse::{DEFAULT_ICON_DIR, DEFAULT_ICON_EXT, IconResolver};
use crate::{ChatError, ChatResult};

pub const DEFAULT_INPUT: &str = "chatlog.txt";
pub const DEFAULT_OUTPUT: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub icon_dir: String,
    pub icon_ext: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            icon_dir: DEFAULT_ICON_DIR.to_string(),
            icon_ext: DEFAULT_ICON_EXT.to_string(),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub icon_dir: Option<String>,
    pub icon_ext: Option<String>,
}

impl ConvertConfig {
    pub fn icon_resolver(&self) -> IconResolver {
        IconResolver::new(self.icon_dir.clone(), self.icon_ext.clone())
    }

    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(input) = overrides.input {
            self.input = input;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(dir) = overrides.icon_dir {
            self.icon_dir = dir;
        }
        if let Some(ext) = overrides.icon_ext {
            self.icon_ext = ext;
        }
        self
    }
}

pub fn load_convert_config(path: &Path) -> ChatResult<ConvertConfig> {
    let s = std::fs::read_to_string(path).map_err(|e| ChatError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    toml::from_str(&s).map_err(|e| ChatError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Resolve the effective config: defaults, then the optional file, then overrides.
pub fn resolve_config(path: Option<&Path>, overrides: ConfigOverrides) -> ChatResult<ConvertConfig> {
    let base = match path {
        Some(p) => load_convert_config(p)?,
        None => ConvertConfig::default(),
    };
    Ok(base.apply(overrides))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chatlog.toml");
        std::fs::write(&path, "icon_dir = \"avatars\"\nicon_ext = \"jpg\"\n").unwrap();
        let cfg = load_convert_config(&path).unwrap();
        assert_eq!(cfg.icon_dir, "avatars");
        assert_eq!(cfg.icon_ext, "jpg");
        assert_eq!(cfg.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(cfg.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chatlog.toml");
        std::fs::write(&path, "input = \"from_file.txt\"\noutput = \"out.html\"\n").unwrap();
        let overrides = ConfigOverrides {
            input: Some(PathBuf::from("from_cli.txt")),
            ..Default::default()
        };
        let cfg = resolve_config(Some(&path), overrides).unwrap();
        assert_eq!(cfg.input, PathBuf::from("from_cli.txt"));
        assert_eq!(cfg.output, PathBuf::from("out.html"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chatlog.toml");
        std::fs::write(&path, "icon_folder = \"x\"\n").unwrap();
        let err = load_convert_config(&path).unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = load_convert_config(Path::new("/nonexistent/chatlog.toml")).unwrap_err();
        assert!(matches!(err, ChatError::Config { .. }));
    }

    #[test]
    fn test_no_file_uses_defaults() {
        let cfg = resolve_config(None, ConfigOverrides::default()).unwrap();
        assert_eq!(cfg, ConvertConfig::default());
        assert_eq!(cfg.icon_resolver().icon_path("Alice"), "images/Alice.png");
    }
}
