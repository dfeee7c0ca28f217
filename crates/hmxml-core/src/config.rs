//! Serialization layout options

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::HmError;

/// Controls how parameter documents are laid out when written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOptions {
    /// Spaces per nesting level (0 writes everything on one line)
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` before the root
    #[serde(default = "default_true")]
    pub xml_declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            xml_declaration: true,
        }
    }
}

fn default_indent() -> usize {
    2
}

fn default_true() -> bool {
    true
}

impl WriteOptions {
    /// Single-line output without a declaration, used for fragments
    pub fn compact() -> Self {
        Self {
            indent: 0,
            xml_declaration: false,
        }
    }

    /// Load options from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, HmError> {
        let options: WriteOptions = toml::from_str(content)?;
        Ok(options)
    }

    /// Load options from a TOML file, falling back to defaults if it is missing
    pub fn from_file(path: &Path) -> Result<Self, HmError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let options = Self::from_toml(&content)?;
            info!(path = %path.display(), "Loaded write options");
            Ok(options)
        } else {
            info!(
                path = %path.display(),
                "Write options file not found, using defaults"
            );
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let options = WriteOptions::from_toml("indent = 4\n").unwrap();
        assert_eq!(options.indent, 4);
        assert!(options.xml_declaration);

        let options = WriteOptions::from_toml("").unwrap();
        assert_eq!(options, WriteOptions::default());
    }

    #[test]
    fn test_rejects_bad_types() {
        let err = WriteOptions::from_toml("indent = \"wide\"\n").unwrap_err();
        assert!(matches!(err, HmError::ConfigError(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let options = WriteOptions::from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(options, WriteOptions::default());

        let path = dir.path().join("write.toml");
        std::fs::write(&path, "indent = 0\nxml_declaration = false\n").unwrap();
        assert_eq!(WriteOptions::from_file(&path).unwrap(), WriteOptions::compact());
    }
}
