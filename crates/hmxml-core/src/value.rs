//! Scalar field types and their text codecs
//!
//! Every leaf of a parameter document is text in XML. [`Scalar`] converts
//! that text to and from the declared field type and reports failures
//! against the field's element path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::HmError;

/// A field type that round-trips through element or attribute text
pub trait Scalar: Sized {
    /// Convert element text; `field` is the element path used in errors
    fn parse_text(text: &str, field: &str) -> Result<Self, HmError>;
    fn to_text(&self) -> String;

    /// Value of an element whose text is empty or whitespace
    fn from_blank(_text: &str) -> Option<Self> {
        None
    }
}

impl Scalar for String {
    fn parse_text(text: &str, _field: &str) -> Result<Self, HmError> {
        Ok(text.to_string())
    }

    fn to_text(&self) -> String {
        self.clone()
    }

    fn from_blank(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

impl Scalar for i32 {
    fn parse_text(text: &str, field: &str) -> Result<Self, HmError> {
        let trimmed = text.trim();
        trimmed
            .strip_prefix('+')
            .unwrap_or(trimmed)
            .parse()
            .map_err(|_| HmError::invalid(field, text))
    }

    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl Scalar for f64 {
    fn parse_text(text: &str, field: &str) -> Result<Self, HmError> {
        match text.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(HmError::invalid(field, text)),
        }
    }

    fn to_text(&self) -> String {
        // Display never switches to exponent notation
        self.to_string()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a plain decimal number: {0:?}")]
pub struct ParseDecimalError(pub String);

/// Exact decimal kept in its original textual form
///
/// Reconstruction tuning values must survive a read/write cycle unchanged,
/// so `0.500` stays `0.500`. Only plain notation is accepted: an optional
/// sign, digits, and at most one decimal point. Equality is textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Decimal(String);

impl Decimal {
    pub fn new(text: &str) -> Result<Self, ParseDecimalError> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix('-')
            .or_else(|| trimmed.strip_prefix('+'))
            .unwrap_or(trimmed);

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits, ""),
        };
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if int_part.len() + frac_part.len() == 0 || !all_digits(int_part) || !all_digits(frac_part) {
            return Err(ParseDecimalError(text.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Decimal from a finite float, written in plain notation
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_finite() {
            Some(Self(value.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits after the decimal point as written
    pub fn scale(&self) -> usize {
        self.0.split_once('.').map_or(0, |(_, frac)| frac.len())
    }

    pub fn to_f64(&self) -> f64 {
        // Overflowing magnitudes parse as infinite; NaN only if the text fails to parse
        self.0.parse().unwrap_or(f64::NAN)
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Decimal {
    type Error = ParseDecimalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Decimal> for String {
    fn from(value: Decimal) -> Self {
        value.0
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Scalar for Decimal {
    fn parse_text(text: &str, field: &str) -> Result<Self, HmError> {
        Self::new(text).map_err(|_| HmError::invalid(field, text))
    }

    fn to_text(&self) -> String {
        self.0.clone()
    }
}

/// Declares a closed vocabulary stored as element text
macro_rules! closed_vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $tag)] $variant, )+
        }

        impl $name {
            /// Every accepted tag, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $tag, )+
                }
            }

            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $( $tag => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Scalar for $name {
            fn parse_text(text: &str, field: &str) -> Result<Self, HmError> {
                Self::from_tag(text.trim()).ok_or_else(|| HmError::UnknownVariant {
                    field: field.to_string(),
                    tag: text.to_string(),
                })
            }

            fn to_text(&self) -> String {
                self.as_str().to_string()
            }
        }
    };
}

closed_vocabulary! {
    /// Ring artefact suppression method
    pub enum RingArtefactsMethod {
        /// No suppression
        No => "No",
        /// Column-wise suppression
        Column => "Column",
        Aml => "AML",
    }
}

closed_vocabulary! {
    /// Units the reconstruction slice is addressed in
    pub enum CoordinateSystemKind {
        Pixels => "Pixels",
        Millimetres => "Millimetres",
    }
}

closed_vocabulary! {
    /// Where a flat or dark field value comes from
    pub enum FieldSource {
        /// Constant supplied in `ValueBefore`/`ValueAfter`
        User => "User",
        /// Taken from a row profile file
        Row => "Row",
    }
}

closed_vocabulary! {
    /// Region-of-interest shape
    pub enum RoiKind {
        Standard => "Standard",
        Rectangle => "Rectangle",
    }
}

/// Simple-content element: an optional text value plus `info`/`done` attributes
///
/// Most leaves of the schema look like `<NOD info="number of ...">1800</NOD>`.
/// An element with blank text yields `value: None`, except for strings,
/// which keep the blank text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Annotated<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<String>,
}

impl<T> Default for Annotated<T> {
    fn default() -> Self {
        Self {
            value: None,
            info: None,
            done: None,
        }
    }
}

impl<T> Annotated<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Some(value),
            info: None,
            done: None,
        }
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    pub fn with_done(mut self, done: impl Into<String>) -> Self {
        self.done = Some(done.into());
        self
    }
}

/// `Type` element of `RingArtefacts`
pub type TypeType5 = Annotated<RingArtefactsMethod>;
/// `Type` element of `CoordinateSystem`
pub type TypeType9 = Annotated<CoordinateSystemKind>;
