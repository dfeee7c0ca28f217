//! HMxml Core - Tomographic reconstruction parameter documents
//!
//! This crate reads and writes the HMxml settings files that drive
//! filtered back-projection reconstruction:
//! - Typed records for every block of the parameter schema
//! - Exact decimal values that keep their written precision
//! - Closed vocabularies for the enumerated `Type` settings
//! - Lenient parsing that skips unknown elements and attributes

pub mod config;
pub mod document;
pub mod error;
pub mod params;
pub mod record;
pub mod value;
pub mod xml;

pub use config::WriteOptions;
pub use document::{parse, serialize, serialize_with};
pub use error::HmError;
pub use params::{
    Backprojection, BeamlineUser, CircleRange, Circles, CoordinateSystem, DarkField, Fbp, Filter,
    FlatDarkFields, FlatField, HighPeaks, HmXml, InputData, Intensity, OutputData, Preprocessing,
    Raw, RingArtefacts, Roi, Tilt, Transform,
};
pub use record::{ElementField, XmlRecord};
pub use value::{
    Annotated, CoordinateSystemKind, Decimal, FieldSource, ParseDecimalError, RingArtefactsMethod,
    RoiKind, Scalar, TypeType5, TypeType9,
};
