//! Reconstructed slice output

use crate::record::xml_record;
use crate::value::{Annotated, Decimal};

xml_record! {
    pub struct OutputData => "OutputData" {
        r#type: Annotated<String> = "Type",
        state: Annotated<String> = "State",
        folder: String = "Folder",
        prefix: String = "Prefix",
        suffix: String = "Suffix",
        extension: String = "Extension",
        nod: i32 = "NOD",
        file_first: i32 = "FileFirst",
        file_step: i32 = "FileStep",
        bits_type: Annotated<String> = "BitsType",
        bits: i32 = "Bits",
        restrictions: Annotated<String> = "Restrictions",
        value_min: Decimal = "ValueMin",
        value_max: Decimal = "ValueMax",
        shape: Annotated<String> = "Shape",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WriteOptions;
    use crate::record::XmlRecord;

    #[test]
    fn test_output_data_order_is_schema_order() {
        let out = OutputData {
            bits: Some(32),
            folder: Some("/dls/tmp/recon".to_string()),
            r#type: Some(Annotated::new("Float".to_string()).with_info("output type")),
            ..Default::default()
        };
        assert_eq!(
            out.to_xml_with(&WriteOptions::compact()).unwrap(),
            r#"<OutputData><Type info="output type">Float</Type><Folder>/dls/tmp/recon</Folder><Bits>32</Bits></OutputData>"#
        );
    }
}
