//! Loading declaration trees and configuration from disk.

use std::io::Write;

use metabase::ast::TranslationUnit;
use metabase::{Diagnostic, FilterPolicy, GeneratorConfig, MetabaseError};
use tempfile::{Builder, NamedTempFile};

const TREE_JSON: &str = r#"{
    "kind": "translation_unit",
    "spelling": "MyKit.h",
    "children": [
        {
            "kind": "var_decl",
            "spelling": "MKVersion",
            "location": { "file": "/Users/dev/MyKit.framework/Headers/MyKit.h", "line": 4 },
            "type": { "kind": "double", "spelling": "double", "encoding": "d" }
        },
        {
            "kind": "function_decl",
            "spelling": "MKReset",
            "location": { "file": "/Users/dev/MyKit.framework/Headers/MyKit.h", "line": 6 },
            "result_type": { "kind": "void", "spelling": "void", "encoding": "v" },
            "children": [ { "kind": "visibility_attr" } ]
        }
    ]
}"#;

fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_generate_from_json_file() {
    let file = temp_file(".json", TREE_JSON);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let metabase =
        metabase::generate_file(file.path(), &GeneratorConfig::default(), &mut diagnostics)
            .unwrap();

    assert!(diagnostics.is_empty());
    assert_eq!(metabase.vars["MKVersion"].value, "double");
    assert_eq!(metabase.vars["MKVersion"].base.line, "4");
    assert_eq!(metabase.functions["MKReset"].returns.encoding, "v");
}

#[cfg(feature = "yaml")]
#[test]
fn test_yaml_and_json_trees_agree() {
    let value: serde_json::Value = serde_json::from_str(TREE_JSON).unwrap();
    let yaml = serde_yaml::to_string(&value).unwrap();
    let file = temp_file(".yaml", &yaml);

    let from_yaml = TranslationUnit::load(file.path()).unwrap();
    let from_json = TranslationUnit::from_json_slice(TREE_JSON.as_bytes()).unwrap();
    assert_eq!(from_yaml, from_json);
}

#[test]
fn test_write_document() {
    let input = temp_file(".json", TREE_JSON);
    let output = Builder::new().suffix(".json").tempfile().unwrap();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let metabase =
        metabase::generate_file(input.path(), &GeneratorConfig::default(), &mut diagnostics)
            .unwrap();
    metabase.write(output.path(), true).unwrap();

    let written = std::fs::read_to_string(output.path()).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(reparsed, metabase.to_json_value().unwrap());
}

#[test]
fn test_unparseable_input_is_fatal() {
    let file = temp_file(".json", "{ \"kind\": ");
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let result = metabase::generate_file(file.path(), &GeneratorConfig::default(), &mut diagnostics);
    assert!(matches!(result, Err(MetabaseError::Json(_))));
}

#[test]
fn test_wrong_root_is_invalid_input() {
    let file = temp_file(".json", r#"{ "kind": "var_decl", "spelling": "x" }"#);
    let result = TranslationUnit::load(file.path());
    assert!(matches!(result, Err(MetabaseError::InvalidInput { .. })));
}

#[test]
fn test_unknown_extension_is_unsupported() {
    let file = temp_file(".xml", TREE_JSON);
    let result = TranslationUnit::load(file.path());
    assert!(matches!(result, Err(MetabaseError::Unsupported(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = TranslationUnit::load(dir.path().join("absent.json"));
    assert!(matches!(result, Err(MetabaseError::Io(_))));
}

#[test]
fn test_load_config() {
    let file = temp_file(
        ".json",
        r#"{ "sdk_path": "/SDKs/iPhoneOS.sdk", "min_version": "12.0", "exclude_system_apis": true }"#,
    );
    let config = GeneratorConfig::load(file.path()).unwrap();
    assert_eq!(config.min_version, "12.0");
    assert_eq!(config.target_platform, "ios");
    assert_eq!(config.policy(), FilterPolicy::ExcludeSystem);
}
