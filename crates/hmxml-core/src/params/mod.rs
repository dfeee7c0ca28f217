//! The HMxml parameter schema
//!
//! One record per schema block, nested the way the parameter file nests
//! them: `HMxml` → `FBP` → input, corrections, preprocessing, transform,
//! backprojection and output sections. Every field is an `Option`; `None`
//! means unset and is never written.

pub mod backprojection;
pub mod corrections;
pub mod input;
pub mod output;
pub mod preprocessing;
pub mod transform;

use crate::record::xml_record;
use crate::value::Annotated;

pub use backprojection::{Backprojection, CircleRange, Circles, CoordinateSystem, Filter, Roi, Tilt};
pub use corrections::{DarkField, FlatDarkFields, FlatField};
pub use input::{InputData, Raw};
pub use output::OutputData;
pub use preprocessing::{HighPeaks, Intensity, Preprocessing, RingArtefacts};
pub use transform::Transform;

xml_record! {
    /// Root of a parameter document
    pub struct HmXml => "HMxml" {
        fbp: Fbp = "FBP",
    }
}

xml_record! {
    /// Filtered back-projection settings
    pub struct Fbp => "FBP" {
        /// Path of the defaults file these settings were derived from
        default_xml: Annotated<String> = "DefaultXml",
        gpu_device_number: i32 = "GPUDeviceNumber",
        beamline_user: BeamlineUser = "BeamlineUser",
        log_file: String = "LogFile",
        input_data: InputData = "InputData",
        flat_dark_fields: FlatDarkFields = "FlatDarkFields",
        preprocessing: Preprocessing = "Preprocessing",
        transform: Transform = "Transform",
        backprojection: Backprojection = "Backprojection",
        output_data: OutputData = "OutputData",
    }
}

xml_record! {
    /// Beamline visit the data belongs to
    pub struct BeamlineUser => "BeamlineUser" {
        @done = "done",
        r#type: Annotated<String> = "Type",
        beamline_name: String = "BeamlineName",
        year: String = "Year",
        month: String = "Month",
        date: String = "Date",
        visit_number: String = "VisitNumber",
        input_data_folder: String = "InputDataFolder",
        input_scan_folder: String = "InputScanFolder",
        output_data_folder: String = "OutputDataFolder",
        output_scan_folder: String = "OutputScanFolder",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WriteOptions;
    use crate::record::XmlRecord;

    #[test]
    fn test_beamline_user() {
        let user = BeamlineUser::from_xml(
            r#"<BeamlineUser done="0"><BeamlineName>i12</BeamlineName><Year>2012</Year><VisitNumber>cm5706-1</VisitNumber></BeamlineUser>"#,
        )
        .unwrap();
        assert_eq!(user.done.as_deref(), Some("0"));
        assert_eq!(user.beamline_name.as_deref(), Some("i12"));
        assert_eq!(user.year.as_deref(), Some("2012"));
        assert_eq!(user.month, None);
        assert_eq!(user.visit_number.as_deref(), Some("cm5706-1"));
    }

    #[test]
    fn test_build_programmatically() {
        let mut root = HmXml::default();
        let fbp = root.fbp.get_or_insert_with(Fbp::default);
        fbp.gpu_device_number = Some(0);
        fbp.default_xml = Some(
            Annotated::new("/dls_sw/i12/software/tomography_scripts/settings.xml".to_string())
                .with_done("1"),
        );

        assert_eq!(
            root.to_xml_with(&WriteOptions::compact()).unwrap(),
            r#"<HMxml><FBP><DefaultXml done="1">/dls_sw/i12/software/tomography_scripts/settings.xml</DefaultXml><GPUDeviceNumber>0</GPUDeviceNumber></FBP></HMxml>"#
        );
    }
}
