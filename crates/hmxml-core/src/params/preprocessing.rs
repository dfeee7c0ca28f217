//! Sinogram preprocessing: peak removal, ring artefacts, intensity

use crate::record::xml_record;
use crate::value::{Annotated, Decimal, TypeType5};

xml_record! {
    pub struct Preprocessing => "Preprocessing" {
        high_peaks_before: HighPeaks = "HighPeaksBefore",
        ring_artefacts: RingArtefacts = "RingArtefacts",
        intensity: Intensity = "Intensity",
        high_peaks_after_rows: HighPeaks = "HighPeaksAfterRows",
        high_peaks_after_columns: HighPeaks = "HighPeaksAfterColumns",
    }
}

xml_record! {
    /// High peak (zinger) removal settings
    ///
    /// The same shape is used before preprocessing and after the row and
    /// column passes; the element name is chosen by the parent.
    pub struct HighPeaks => "HighPeaksBefore" {
        r#type: Annotated<String> = "Type",
        number_pixels: i32 = "NumberPixels",
        jump: Decimal = "Jump",
    }
}

xml_record! {
    /// Ring artefact suppression
    ///
    /// Element names are case-sensitive: `<parameterN>` is an unknown
    /// element and is skipped, not read as `ParameterN`.
    pub struct RingArtefacts => "RingArtefacts" {
        r#type: TypeType5 = "Type",
        parameter_n: Decimal = "ParameterN",
        parameter_r: Decimal = "ParameterR",
        num_series: Annotated<Decimal> = "NumSeries",
    }
}

xml_record! {
    /// Intensity normalisation from reference columns
    pub struct Intensity => "Intensity" {
        r#type: Annotated<String> = "Type",
        column_left: String = "ColumnLeft",
        column_right: String = "ColumnRight",
        zero_left: i32 = "ZeroLeft",
        zero_right: i32 = "ZeroRight",
    }
}
