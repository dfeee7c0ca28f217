//! Flat and dark field correction blocks

use crate::record::xml_record;
use crate::value::{Annotated, FieldSource};

xml_record! {
    /// Flat and dark field corrections; each sub-block is optional
    pub struct FlatDarkFields => "FlatDarkFields" {
        flat_field: FlatField = "FlatField",
        dark_field: DarkField = "DarkField",
    }
}

xml_record! {
    /// Flat (open beam) field correction
    pub struct FlatField => "FlatField" {
        r#type: Annotated<FieldSource> = "Type",
        /// Constant flat value used before the scan when `Type` is `User`
        value_before: f64 = "ValueBefore",
        value_after: f64 = "ValueAfter",
        file_before: String = "FileBefore",
        file_after: String = "FileAfter",
        profile_type: Annotated<String> = "ProfileType",
        file_profile: String = "FileProfile",
    }
}

xml_record! {
    /// Dark (no beam) field correction
    pub struct DarkField => "DarkField" {
        r#type: Annotated<FieldSource> = "Type",
        value_before: f64 = "ValueBefore",
        value_after: f64 = "ValueAfter",
        file_before: String = "FileBefore",
        file_after: String = "FileAfter",
        profile_type: Annotated<String> = "ProfileType",
        file_profile: String = "FileProfile",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WriteOptions;
    use crate::error::HmError;
    use crate::record::XmlRecord;

    #[test]
    fn test_parse_flat_dark_fields() {
        let xml = r#"<FlatDarkFields>
    <FlatField>
        <Type info="User or Row">User</Type>
        <ValueBefore>1000.0</ValueBefore>
        <ValueAfter>1000</ValueAfter>
        <FileBefore>/dls/i12/data/flat.tif</FileBefore>
    </FlatField>
    <DarkField>
        <Type info="User or Row">Row</Type>
        <ProfileType info="profile">Closest</ProfileType>
    </DarkField>
</FlatDarkFields>"#;

        let fields = FlatDarkFields::from_xml(xml).unwrap();
        let flat = fields.flat_field.as_ref().unwrap();
        assert_eq!(flat.r#type.as_ref().unwrap().value, Some(FieldSource::User));
        assert_eq!(flat.value_before, Some(1000.0));
        assert_eq!(flat.value_after, Some(1000.0));
        assert_eq!(flat.file_before.as_deref(), Some("/dls/i12/data/flat.tif"));
        assert_eq!(flat.file_after, None);

        let dark = fields.dark_field.as_ref().unwrap();
        assert_eq!(dark.r#type.as_ref().unwrap().value, Some(FieldSource::Row));
        assert_eq!(dark.value_before, None);
        assert_eq!(
            dark.profile_type.as_ref().and_then(|p| p.value.as_deref()),
            Some("Closest")
        );
    }

    #[test]
    fn test_sub_blocks_are_independent() {
        let mut fields = FlatDarkFields::default();
        fields.dark_field = Some(DarkField {
            value_before: Some(0.0),
            ..Default::default()
        });

        let xml = fields.to_xml_with(&WriteOptions::compact()).unwrap();
        assert_eq!(
            xml,
            "<FlatDarkFields><DarkField><ValueBefore>0</ValueBefore></DarkField></FlatDarkFields>"
        );

        // Moving the block to a new parent leaves nothing behind
        let mut other = FlatDarkFields::default();
        other.dark_field = fields.dark_field.take();
        assert_eq!(fields, FlatDarkFields::default());
        assert!(other.dark_field.is_some());
    }

    #[test]
    fn test_bad_float_names_field() {
        let err = FlatField::from_xml("<FlatField><ValueAfter>bright</ValueAfter></FlatField>")
            .unwrap_err();
        assert!(matches!(
            err,
            HmError::InvalidFieldValue { ref field, ref text }
                if field == "FlatField/ValueAfter" && text == "bright"
        ));
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        let err = DarkField::from_xml("<DarkField><Type>Column</Type></DarkField>").unwrap_err();
        assert!(matches!(err, HmError::UnknownVariant { ref tag, .. } if tag == "Column"));
    }
}
