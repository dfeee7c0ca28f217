//! Sinogram transform: missed projections, re-centring, cropping, scaling

use crate::record::xml_record;
use crate::value::{Annotated, Decimal};

xml_record! {
    pub struct Transform => "Transform" {
        missed_projections: Annotated<String> = "MissedProjections",
        missed_projections_type: Annotated<String> = "MissedProjectionsType",
        rotation_angle_type: Annotated<i32> = "RotationAngleType",
        /// Total rotation angle of the scan in degrees
        rotation_angle: i32 = "RotationAngle",
        rotation_angle_end_points: Annotated<String> = "RotationAngleEndPoints",
        re_centre_angle: Decimal = "ReCentreAngle",
        re_centre_radius: Decimal = "ReCentreRadius",
        crop_top: i32 = "CropTop",
        crop_bottom: i32 = "CropBottom",
        crop_left: i32 = "CropLeft",
        crop_right: i32 = "CropRight",
        scale_type: Annotated<String> = "ScaleType",
        scale_width: i32 = "ScaleWidth",
        scale_height: i32 = "ScaleHeight",
        extrapolation_type: Annotated<String> = "ExtrapolationType",
        extrapolation_pixels: i32 = "ExtrapolationPixels",
        extrapolation_width: i32 = "ExtrapolationWidth",
        interpolation: Annotated<String> = "Interpolation",
    }
}
