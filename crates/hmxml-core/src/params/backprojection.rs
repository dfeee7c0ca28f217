//! Backprojection geometry, filter and region of interest

use crate::record::xml_record;
use crate::value::{Annotated, Decimal, RoiKind, TypeType9};

xml_record! {
    pub struct Backprojection => "Backprojection" {
        filter: Filter = "Filter",
        /// Centre of rotation in pixels
        image_centre: Decimal = "ImageCentre",
        clockwise_rotation: Annotated<String> = "ClockwiseRotation",
        tilt: Tilt = "Tilt",
        coordinate_system: CoordinateSystem = "CoordinateSystem",
        circles: Circles = "Circles",
        roi: Roi = "ROI",
        polar_cartesian_interpolation: Annotated<String> = "PolarCartesianInterpolation",
    }
}

xml_record! {
    /// Reconstruction filter
    pub struct Filter => "Filter" {
        r#type: Annotated<String> = "Type",
        name: Annotated<String> = "Name",
        bandwidth: Decimal = "Bandwidth",
        window_name: Annotated<String> = "WindowName",
        normalisation: Annotated<String> = "Normalisation",
        pixel_size: Decimal = "PixelSize",
    }
}

xml_record! {
    pub struct Tilt => "Tilt" {
        @done = "done",
        r#type: Annotated<String> = "Type",
        x_tilt: String = "X-tilt",
        z_tilt: String = "Z-tilt",
    }
}

xml_record! {
    /// Slice addressing for the reconstruction
    ///
    /// `slice` and `done` are free text; an absent value is distinct from
    /// an empty one.
    pub struct CoordinateSystem => "CoordinateSystem" {
        @done = "done",
        r#type: TypeType9 = "Type",
        slice: String = "Slice",
    }
}

xml_record! {
    pub struct Circles => "Circles" {
        @comm = "comm",
        value_min: CircleRange = "ValueMin",
        value_max: CircleRange = "ValueMax",
        value_step: CircleRange = "ValueStep",
    }
}

xml_record! {
    /// One bound of the `Circles` range; the parent picks the element name
    pub struct CircleRange => "ValueMin" {
        r#type: Annotated<String> = "Type",
        percent: i32 = "Percent",
        pixel: i32 = "Pixel",
    }
}

xml_record! {
    /// Region of interest of the reconstructed slice
    pub struct Roi => "ROI" {
        r#type: Annotated<RoiKind> = "Type",
        xmin: i32 = "Xmin",
        xmax: i32 = "Xmax",
        ymin: i32 = "Ymin",
        ymax: i32 = "Ymax",
        output_width_type: Annotated<String> = "OutputWidthType",
        output_width: i32 = "OutputWidth",
        angle: Decimal = "Angle",
    }
}
