//! Typed records over the element tree
//!
//! A record is a schema block such as `RingArtefacts`: a fixed set of
//! optional attributes and optional child elements, read and written in
//! declaration order. Records are declared with [`xml_record!`], which
//! generates the struct and both directions of the conversion.

use tracing::debug;

use crate::config::WriteOptions;
use crate::error::HmError;
use crate::value::{Annotated, CoordinateSystemKind, Decimal, FieldSource, RingArtefactsMethod, RoiKind, Scalar};
use crate::xml::{parse_element, write_element, Element};

/// Something that can be stored as a single child element
pub trait ElementField: Sized {
    /// Read from `element`; `path` is the element's own path, for errors
    fn read_field(element: &Element, path: &str) -> Result<Self, HmError>;
    fn write_field(&self, tag: &str) -> Element;
}

/// A schema block with a canonical element name
pub trait XmlRecord: Sized {
    /// Element name used when the record stands alone
    const TAG: &'static str;
    /// Child element names, in the order they are written
    const CHILD_TAGS: &'static [&'static str];

    fn read_element(element: &Element, path: &str) -> Result<Self, HmError>;
    fn write_element(&self, tag: &str) -> Element;

    /// Parse a standalone fragment whose root must be [`Self::TAG`]
    fn from_xml(xml: &str) -> Result<Self, HmError> {
        read_root(&parse_element(xml)?)
    }

    /// Serialize under [`Self::TAG`] using the default layout
    fn to_xml(&self) -> Result<String, HmError> {
        self.to_xml_with(&WriteOptions::default())
    }

    fn to_xml_with(&self, options: &WriteOptions) -> Result<String, HmError> {
        write_element(&self.write_element(Self::TAG), options)
    }
}

/// Read a record from a document root, checking the root's name
pub fn read_root<R: XmlRecord>(root: &Element) -> Result<R, HmError> {
    if root.name != R::TAG {
        return Err(HmError::MalformedDocument(format!(
            "expected <{}> root element, found <{}>",
            R::TAG,
            root.name
        )));
    }
    R::read_element(root, R::TAG)
}

macro_rules! scalar_element_field {
    ($($t:ty),+ $(,)?) => {
        $(
            impl ElementField for $t {
                fn read_field(element: &Element, path: &str) -> Result<Self, HmError> {
                    <$t as Scalar>::parse_text(element.text.as_deref().unwrap_or(""), path)
                }

                fn write_field(&self, tag: &str) -> Element {
                    Element::with_text(tag, self.to_text())
                }
            }
        )+
    };
}

scalar_element_field!(
    String,
    i32,
    f64,
    Decimal,
    RingArtefactsMethod,
    CoordinateSystemKind,
    FieldSource,
    RoiKind,
);

impl<T: Scalar> ElementField for Annotated<T> {
    fn read_field(element: &Element, path: &str) -> Result<Self, HmError> {
        let text = element.text.as_deref().unwrap_or("");
        let value = if text.trim().is_empty() {
            T::from_blank(text)
        } else {
            Some(T::parse_text(text, path)?)
        };
        Ok(Self {
            value,
            info: element.attribute("info").map(str::to_string),
            done: element.attribute("done").map(str::to_string),
        })
    }

    fn write_field(&self, tag: &str) -> Element {
        let mut element = Element::new(tag);
        if let Some(info) = &self.info {
            element.set_attribute("info", info);
        }
        if let Some(done) = &self.done {
            element.set_attribute("done", done);
        }
        element.text = self.value.as_ref().map(T::to_text);
        element
    }
}

/// Read the single child named `tag`, if present
///
/// A second occurrence is a structural error.
pub fn read_child<F: ElementField>(
    element: &Element,
    tag: &str,
    path: &str,
) -> Result<Option<F>, HmError> {
    let mut matches = element.children_named(tag);
    let Some(first) = matches.next() else {
        return Ok(None);
    };
    let child_path = format!("{path}/{tag}");
    if matches.next().is_some() {
        return Err(HmError::MalformedDocument(format!(
            "{child_path} occurs more than once"
        )));
    }
    F::read_field(first, &child_path).map(Some)
}

/// Log children a record does not know about; they are skipped
pub fn skip_unknown_children(element: &Element, known: &[&str], path: &str) {
    for child in &element.children {
        if !known.contains(&child.name.as_str()) {
            debug!(element = %child.name, path = %path, "Ignoring unknown element");
        }
    }
}

/// Declare a schema record
///
/// `@name = "xml"` lines are optional string attributes; the remaining
/// lines are optional child elements in schema order.
macro_rules! xml_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $tag:literal {
            $( @ $attr:ident = $aname:literal, )*
            $( $(#[$fmeta:meta])* $field:ident : $fty:ty = $fname:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $attr: Option<String>,
            )*
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$fty>,
            )*
        }

        impl $crate::record::XmlRecord for $name {
            const TAG: &'static str = $tag;
            const CHILD_TAGS: &'static [&'static str] = &[$($fname),*];

            fn read_element(
                element: &$crate::xml::Element,
                path: &str,
            ) -> Result<Self, $crate::error::HmError> {
                $crate::record::skip_unknown_children(element, Self::CHILD_TAGS, path);
                Ok(Self {
                    $( $attr: element.attribute($aname).map(str::to_string), )*
                    $( $field: $crate::record::read_child(element, $fname, path)?, )*
                })
            }

            fn write_element(&self, tag: &str) -> $crate::xml::Element {
                #[allow(unused_mut)]
                let mut element = $crate::xml::Element::new(tag);
                $(
                    if let Some(value) = &self.$attr {
                        element.set_attribute($aname, value);
                    }
                )*
                $(
                    if let Some(value) = &self.$field {
                        element.push($crate::record::ElementField::write_field(value, $fname));
                    }
                )*
                element
            }
        }

        impl $crate::record::ElementField for $name {
            fn read_field(
                element: &$crate::xml::Element,
                path: &str,
            ) -> Result<Self, $crate::error::HmError> {
                <Self as $crate::record::XmlRecord>::read_element(element, path)
            }

            fn write_field(&self, tag: &str) -> $crate::xml::Element {
                <Self as $crate::record::XmlRecord>::write_element(self, tag)
            }
        }
    };
}

pub(crate) use xml_record;

#[cfg(test)]
mod tests {
    use super::*;

    xml_record! {
        /// Two-field record used to exercise the macro
        pub struct Probe => "Probe" {
            @done = "done",
            level: i32 = "Level",
            label: Annotated<String> = "Label",
        }
    }

    #[test]
    fn test_read_in_any_order_write_in_schema_order() {
        let probe = Probe::from_xml(
            r#"<Probe done="yes"><Label info="l">x</Label><Level>3</Level></Probe>"#,
        )
        .unwrap();
        assert_eq!(probe.done.as_deref(), Some("yes"));
        assert_eq!(probe.level, Some(3));
        assert_eq!(probe.label.as_ref().and_then(|l| l.info.as_deref()), Some("l"));

        let xml = probe.to_xml_with(&WriteOptions::compact()).unwrap();
        assert_eq!(
            xml,
            r#"<Probe done="yes"><Level>3</Level><Label info="l">x</Label></Probe>"#
        );
    }

    #[test]
    fn test_duplicate_child_is_malformed() {
        let err = Probe::from_xml("<Probe><Level>1</Level><Level>2</Level></Probe>").unwrap_err();
        match err {
            HmError::MalformedDocument(msg) => assert!(msg.contains("Probe/Level")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_root_is_malformed() {
        let err = Probe::from_xml("<Other/>").unwrap_err();
        assert!(matches!(err, HmError::MalformedDocument(_)));
    }

    #[test]
    fn test_annotated_without_text() {
        let probe = Probe::from_xml(r#"<Probe><Label info="empty"/></Probe>"#).unwrap();
        let label = probe.label.unwrap();
        assert_eq!(label.value.as_deref(), Some(""));
        assert_eq!(label.info.as_deref(), Some("empty"));

        let nod = Annotated::<i32>::read_field(&Element::with_text("NOD", "  "), "NOD").unwrap();
        assert_eq!(nod.value, None);
    }

    #[test]
    fn test_annotated_empty_string_survives_round_trip() {
        let probe = Probe {
            label: Some(Annotated::new(String::new()).with_done("1")),
            ..Default::default()
        };
        let xml = probe.to_xml_with(&WriteOptions::compact()).unwrap();
        assert_eq!(xml, r#"<Probe><Label done="1"/></Probe>"#);
        assert_eq!(Probe::from_xml(&xml).unwrap(), probe);
    }

    #[test]
    fn test_empty_record_writes_empty_element() {
        let xml = Probe::default().to_xml_with(&WriteOptions::compact()).unwrap();
        assert_eq!(xml, "<Probe/>");
    }
}
