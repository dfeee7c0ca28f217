//! Errors raised while reading or writing HMxml parameter documents

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HmError {
    /// Structural problem: bad XML syntax, wrong root, repeated element
    #[error("Malformed HMxml document: {0}")]
    MalformedDocument(String),
    /// Text is present but does not convert to the field's declared type
    #[error("Invalid value for {field}: {text:?}")]
    InvalidFieldValue { field: String, text: String },
    /// A closed-vocabulary field holds a tag outside its vocabulary
    #[error("Unknown variant {tag:?} for {field}")]
    UnknownVariant { field: String, tag: String },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse configuration: {0}")]
    ConfigError(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<quick_xml::Error> for HmError {
    fn from(err: quick_xml::Error) -> Self {
        HmError::MalformedDocument(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for HmError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        HmError::MalformedDocument(err.to_string())
    }
}

impl HmError {
    pub(crate) fn invalid(field: &str, text: &str) -> Self {
        HmError::InvalidFieldValue {
            field: field.to_string(),
            text: text.to_string(),
        }
    }
}
