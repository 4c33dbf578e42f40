use std::io::Read;

use serde::Deserialize;
use tracing::debug;

use crate::error::{CovhtmlError, Result};
use crate::model::Package;

/// Top-level gocov JSON record.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CoverageDocument {
    #[serde(default)]
    packages: Option<Vec<Package>>,
}

/// Decode a gocov JSON document into its package list.
///
/// The document must be a JSON object; a missing or `null` `Packages`
/// field yields an empty list.
pub fn decode(data: &[u8]) -> Result<Vec<Package>> {
    let value: serde_json::Value = serde_json::from_slice(data)?;
    if !value.is_object() {
        return Err(CovhtmlError::Decode(serde::de::Error::custom(
            "expected an object with a Packages field",
        )));
    }
    let doc: CoverageDocument = serde_json::from_value(value)?;
    let packages = doc.packages.unwrap_or_default();
    debug!(packages = packages.len(), "decoded coverage data");
    Ok(packages)
}

/// Read all of `reader` and decode it.
pub fn read_coverage(reader: &mut dyn Read) -> Result<Vec<Package>> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(CovhtmlError::InputRead)?;
    decode(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_packages() {
        let json = br#"{"Packages":[{"Name":"pkg/a","Functions":[{"Name":"F","File":"a.go","Start":10,"End":42,"Statements":[{"Start":12,"End":20,"Reached":1},{"Start":21,"End":30,"Reached":0}]}]}]}"#;
        let packages = decode(json).unwrap();

        assert_eq!(packages.len(), 1);
        let f = &packages[0].functions[0];
        assert_eq!(f.name, "F");
        assert_eq!(f.file, "a.go");
        assert_eq!(f.start, 10);
        assert_eq!(f.statements.len(), 2);
        assert_eq!(f.statements[0].end, 20);
        assert_eq!(f.statements[1].reached, 0);
    }

    #[test]
    fn test_decode_missing_or_null_packages() {
        assert!(decode(b"{}").unwrap().is_empty());
        assert!(decode(br#"{"Packages":null}"#).unwrap().is_empty());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let packages = decode(br#"{"Packages":[{"Name":"p","Extra":true}],"Version":2}"#).unwrap();
        assert_eq!(packages[0].name, "p");
        assert!(packages[0].functions.is_empty());
    }

    #[test]
    fn test_decode_rejects_other_shapes() {
        let inputs: [&[u8]; 5] = [b"[]", b"42", b"\"Packages\"", b"not json", b""];
        for input in inputs {
            let err = decode(input).unwrap_err();
            assert!(matches!(err, CovhtmlError::Decode(_)), "input {input:?}");
            assert!(err.to_string().starts_with("unmarshal coverage data:"));
        }
    }

    #[test]
    fn test_decode_rejects_wrong_field_types() {
        let err = decode(br#"{"Packages":[{"Name":"p","Functions":[{"Name":"F","Statements":[{"Reached":-1}]}]}]}"#)
            .unwrap_err();
        assert!(matches!(err, CovhtmlError::Decode(_)));
    }

    #[test]
    fn test_read_coverage_from_reader() {
        let mut input: &[u8] = br#"{"Packages":[{"Name":"pkg/a"}]}"#;
        let packages = read_coverage(&mut input).unwrap();
        assert_eq!(packages[0].name, "pkg/a");
    }
}
