//! Verify `extend_enum` against `test-vectors/extend_enum.json`.

use apigen_parser::{extend_enum, EnumExtensions, EnumMember};
use serde_json::Value;

#[test]
fn extend_enum_test_vectors() {
    let raw = include_str!("../../test-vectors/extend_enum.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let members: Vec<EnumMember> = serde_json::from_value(case["members"].clone()).unwrap();
        let extensions: EnumExtensions = serde_json::from_value(case["schema"].clone()).unwrap();
        let expected: Vec<EnumMember> = serde_json::from_value(case["expected"].clone()).unwrap();

        let merged = extend_enum(&members, &extensions);
        assert_eq!(merged, expected, "{name}");
        assert_eq!(merged.len(), members.len(), "{name}: length");
        for (out, original) in merged.iter().zip(&members) {
            assert_eq!(out.kind, original.kind, "{name}: kind preserved");
        }
    }
}
