use serde::{Deserialize, Serialize};

/// An error in Telegram Passport data submitted by a user.
///
/// The user cannot resubmit the element until the error is fixed. Hashes are
/// the base64 hashes Telegram sent with the encrypted element.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PassportElementError {
    #[serde(rename = "data")]
    DataField {
        #[serde(rename = "type")]
        element_type: String,
        field_name: String,
        data_hash: String,
        message: String,
    },
    FrontSide {
        #[serde(rename = "type")]
        element_type: String,
        file_hash: String,
        message: String,
    },
    ReverseSide {
        #[serde(rename = "type")]
        element_type: String,
        file_hash: String,
        message: String,
    },
    Selfie {
        #[serde(rename = "type")]
        element_type: String,
        file_hash: String,
        message: String,
    },
    File {
        #[serde(rename = "type")]
        element_type: String,
        file_hash: String,
        message: String,
    },
    Files {
        #[serde(rename = "type")]
        element_type: String,
        file_hashes: Vec<String>,
        message: String,
    },
    TranslationFile {
        #[serde(rename = "type")]
        element_type: String,
        file_hash: String,
        message: String,
    },
    TranslationFiles {
        #[serde(rename = "type")]
        element_type: String,
        file_hashes: Vec<String>,
        message: String,
    },
    Unspecified {
        #[serde(rename = "type")]
        element_type: String,
        element_hash: String,
        message: String,
    },
}

impl PassportElementError {
    pub fn selfie(
        element_type: impl Into<String>,
        file_hash: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        PassportElementError::Selfie {
            element_type: element_type.into(),
            file_hash: file_hash.into(),
            message: message.into(),
        }
    }

    pub fn translation_files(
        element_type: impl Into<String>,
        file_hashes: Vec<String>,
        message: impl Into<String>,
    ) -> Self {
        PassportElementError::TranslationFiles {
            element_type: element_type.into(),
            file_hashes,
            message: message.into(),
        }
    }

    /// Wire value of the `source` tag.
    pub fn source(&self) -> &'static str {
        match self {
            PassportElementError::DataField { .. } => "data",
            PassportElementError::FrontSide { .. } => "front_side",
            PassportElementError::ReverseSide { .. } => "reverse_side",
            PassportElementError::Selfie { .. } => "selfie",
            PassportElementError::File { .. } => "file",
            PassportElementError::Files { .. } => "files",
            PassportElementError::TranslationFile { .. } => "translation_file",
            PassportElementError::TranslationFiles { .. } => "translation_files",
            PassportElementError::Unspecified { .. } => "unspecified",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            PassportElementError::DataField { message, .. }
            | PassportElementError::FrontSide { message, .. }
            | PassportElementError::ReverseSide { message, .. }
            | PassportElementError::Selfie { message, .. }
            | PassportElementError::File { message, .. }
            | PassportElementError::Files { message, .. }
            | PassportElementError::TranslationFile { message, .. }
            | PassportElementError::TranslationFiles { message, .. }
            | PassportElementError::Unspecified { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(e: &PassportElementError) -> u64 {
        let mut h = DefaultHasher::new();
        e.hash(&mut h);
        h.finish()
    }

    fn hashes() -> Vec<String> {
        vec!["hash1".to_string(), "hash2".to_string()]
    }

    #[test]
    fn translation_files_to_dict() {
        let e = PassportElementError::translation_files("test_type", hashes(), "Error message");
        assert_eq!(e.source(), "translation_files");
        assert_eq!(
            serde_json::to_value(&e).unwrap(),
            json!({
                "source": "translation_files",
                "type": "test_type",
                "file_hashes": ["hash1", "hash2"],
                "message": "Error message"
            })
        );
    }

    #[test]
    fn equality_follows_all_fields_and_source() {
        let a = PassportElementError::translation_files("test_type", hashes(), "Error message");
        let b = PassportElementError::translation_files("test_type", hashes(), "Error message");
        let c = PassportElementError::translation_files("test_type", vec![], "");
        let d = PassportElementError::translation_files("", hashes(), "");
        let f = PassportElementError::selfie("test_type", "", "Error message");

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        for other in [&c, &d, &f] {
            assert_ne!(&a, other);
            assert_ne!(hash_of(&a), hash_of(other));
        }
    }

    #[test]
    fn data_field_uses_data_source() {
        let e: PassportElementError = serde_json::from_value(json!({
            "source": "data",
            "type": "passport",
            "field_name": "document_no",
            "data_hash": "abc",
            "message": "bad number"
        }))
        .unwrap();
        assert!(matches!(e, PassportElementError::DataField { .. }));
        assert_eq!(e.message(), "bad number");
    }
}
