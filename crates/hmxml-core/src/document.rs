//! Whole-document parsing and serialization
//!
//! `parse` and `serialize` are the entry points most callers need. The
//! file and JSON helpers on [`HmXml`] are thin wrappers around them.

use std::path::Path;
use tracing::{debug, info};

use crate::config::WriteOptions;
use crate::error::HmError;
use crate::params::HmXml;
use crate::record::{read_root, XmlRecord};
use crate::xml::{parse_element, write_element};

/// Parse a parameter document
///
/// Unknown elements and attributes are skipped. Fails with
/// [`HmError::MalformedDocument`] if the root is not `HMxml`,
/// [`HmError::InvalidFieldValue`] if a value does not convert to its
/// field's type, and [`HmError::UnknownVariant`] for tags outside a closed
/// vocabulary.
pub fn parse(xml: &str) -> Result<HmXml, HmError> {
    let root = parse_element(xml)?;
    debug!(elements = root.count(), "Parsed HMxml element tree");
    read_root(&root)
}

/// Serialize a parameter document with the default layout
pub fn serialize(doc: &HmXml) -> Result<String, HmError> {
    serialize_with(doc, &WriteOptions::default())
}

/// Serialize a parameter document; only set fields are written, in schema order
pub fn serialize_with(doc: &HmXml, options: &WriteOptions) -> Result<String, HmError> {
    let tree = doc.write_element(HmXml::TAG);
    debug!(elements = tree.count(), indent = options.indent, "Serializing HMxml document");
    write_element(&tree, options)
}

impl HmXml {
    /// Parse a parameter document from file
    pub fn from_file(path: &Path) -> Result<Self, HmError> {
        let content = std::fs::read_to_string(path)?;
        let doc = parse(&content)?;
        info!(path = %path.display(), "Loaded reconstruction parameters");
        Ok(doc)
    }

    /// Write to file with the default layout
    pub fn to_file(&self, path: &Path) -> Result<(), HmError> {
        self.to_file_with(path, &WriteOptions::default())
    }

    pub fn to_file_with(&self, path: &Path, options: &WriteOptions) -> Result<(), HmError> {
        let xml = serialize_with(self, options)?;
        std::fs::write(path, xml)?;
        info!(path = %path.display(), "Saved reconstruction parameters");
        Ok(())
    }

    /// JSON form for tools that do not speak XML; unset fields are omitted
    pub fn to_json(&self) -> Result<String, HmError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, HmError> {
        Ok(serde_json::from_str(json)?)
    }
}
