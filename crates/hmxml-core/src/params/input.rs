//! Input projection data description

use crate::record::xml_record;
use crate::value::{Annotated, Decimal};

xml_record! {
    /// Where the projections live and how to read them
    pub struct InputData => "InputData" {
        folder: String = "Folder",
        prefix: String = "Prefix",
        suffix: String = "Suffix",
        extension: String = "Extension",
        /// Number of projections
        nod: Annotated<i32> = "NOD",
        memory_size_max: Annotated<Decimal> = "MemorySizeMax",
        memory_size_min: Annotated<i32> = "MemorySizeMin",
        orientation: Annotated<String> = "Orientation",
        file_first: i32 = "FileFirst",
        file_last: i32 = "FileLast",
        file_step: i32 = "FileStep",
        image_first: Annotated<i32> = "ImageFirst",
        image_last: Annotated<i32> = "ImageLast",
        image_step: Annotated<i32> = "ImageStep",
        raw: Raw = "Raw",
        first_image_index: Annotated<i32> = "FirstImageIndex",
        images_per_file: i32 = "ImagesPerFile",
        restrictions: Annotated<String> = "Restrictions",
        value_min: Decimal = "ValueMin",
        value_max: Decimal = "ValueMax",
        r#type: Annotated<String> = "Type",
        shape: Annotated<String> = "Shape",
        pixel_param: Decimal = "PixelParam",
    }
}

xml_record! {
    /// Layout of headerless raw input files
    pub struct Raw => "Raw" {
        @done = "done",
        r#type: Annotated<String> = "Type",
        bits: i32 = "Bits",
        offset: Annotated<i32> = "Offset",
        byte_order: Annotated<String> = "ByteOrder",
        xlen: i32 = "Xlen",
        ylen: i32 = "Ylen",
        zlen: i32 = "Zlen",
        gap: Annotated<i32> = "Gap",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HmError;
    use crate::record::XmlRecord;

    #[test]
    fn test_input_data_with_raw_block() {
        let xml = r#"<InputData>
    <Folder>/dls/i12/data/2012/cm5706-1/rawdata/38644/</Folder>
    <Prefix>p_</Prefix>
    <Extension>tif</Extension>
    <NOD info="number of projections">1801</NOD>
    <FileFirst>0</FileFirst>
    <FileLast>1800</FileLast>
    <ImageFirst done="0">0</ImageFirst>
    <Raw done="0">
        <Bits>16</Bits>
        <ByteOrder info="0 - little endian">0</ByteOrder>
        <Xlen>2560</Xlen>
    </Raw>
    <Shape info="shape">Point</Shape>
    <PixelParam>0.000</PixelParam>
</InputData>"#;
        let input = InputData::from_xml(xml).unwrap();
        assert_eq!(input.prefix.as_deref(), Some("p_"));
        assert_eq!(input.suffix, None);
        assert_eq!(input.nod.as_ref().unwrap().value, Some(1801));
        assert_eq!(input.file_last, Some(1800));
        assert_eq!(input.image_first.as_ref().unwrap().done.as_deref(), Some("0"));
        assert_eq!(input.pixel_param.as_ref().unwrap().as_str(), "0.000");

        let raw = input.raw.as_ref().unwrap();
        assert_eq!(raw.done.as_deref(), Some("0"));
        assert_eq!(raw.bits, Some(16));
        assert_eq!(raw.xlen, Some(2560));
        assert_eq!(raw.ylen, None);

        assert_eq!(InputData::from_xml(&input.to_xml().unwrap()).unwrap(), input);
    }

    #[test]
    fn test_annotated_int_rejects_text() {
        let err = InputData::from_xml(r#"<InputData><NOD info="n">many</NOD></InputData>"#).unwrap_err();
        assert!(matches!(
            err,
            HmError::InvalidFieldValue { ref field, ref text } if field == "InputData/NOD" && text == "many"
        ));
    }
}
