//! Encoding synthesis over `(tag, value)` pairs.

use metabase::Diagnostic;
use metabase::MetabaseTree;
use metabase::encoding::{Synthesizer, encoding_for_tag, primitive_encoding, tag_for_encoding};
use rstest::rstest;

fn encode(tag: &str, value: &str) -> String {
    let tree = MetabaseTree::default();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    Synthesizer::new(&tree, &mut diagnostics, 32).encode_str(tag, value)
}

#[rstest]
#[case("int", "i")]
#[case("short", "s")]
#[case("long", "l")]
#[case("long_long", "q")]
#[case("uint", "I")]
#[case("ushort", "S")]
#[case("ulong", "L")]
#[case("ulonglong", "Q")]
#[case("unsigned long long", "Q")]
#[case("uchar", "C")]
#[case("char_s", "c")]
#[case("float", "f")]
#[case("double", "d")]
#[case("long_double", "D")]
#[case("bool", "B")]
#[case("void", "v")]
#[case("id", "@")]
#[case("Class", "#")]
#[case("SEL", ":")]
#[case("block", "@?")]
fn test_primitive_codes(#[case] tag: &str, #[case] expected: &str) {
    assert_eq!(encode(tag, tag), expected);
    assert_eq!(encoding_for_tag(tag), expected);
}

#[rstest]
#[case("pointer", "int **", "^^i")]
#[case("pointer", "int *", "^i")]
#[case("pointer", "char *", "*")]
#[case("pointer", "char **", "^*")]
#[case("pointer", "void *", "^v")]
#[case("constant_array", "char[37]", "[37c]")]
#[case("incomplete_array", "int[]", "[i]")]
#[case("typedef", "void (^)(BOOL)", "@?")]
#[case("typedef", "int (*)(int)", "^?")]
#[case("struct", "", "{}")]
#[case("record", "struct Opaque", "{Opaque=}")]
fn test_derived_encodings(#[case] tag: &str, #[case] value: &str, #[case] expected: &str) {
    assert_eq!(encode(tag, value), expected);
}

#[rstest]
#[case("unsigned int", Some("I"))]
#[case("char *", Some("*"))]
#[case("enum", Some("i"))]
#[case("objc_pointer", Some("@"))]
#[case("record", None)]
#[case("pointer", None)]
fn test_primitive_table(#[case] tag: &str, #[case] expected: Option<&str>) {
    assert_eq!(primitive_encoding(tag), expected);
}

#[test]
fn test_empty_type_is_unknown() {
    assert_eq!(encode("", ""), "?");
}

#[test]
fn test_unresolved_type_reports_diagnostic() {
    let tree = MetabaseTree::default();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let encoding = Synthesizer::new(&tree, &mut diagnostics, 32).encode_str("mystery", "Mystery");
    assert_eq!(encoding, "?");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, "W0002");
}

#[rstest]
#[case("{CGPoint=dd}", "struct")]
#[case("^i", "pointer")]
#[case("[4i]", "constant_array")]
#[case("(Value=id)", "union")]
#[case("rQ", "unsigned long long")]
#[case("@?", "block")]
fn test_tag_for_encoding(#[case] encoding: &str, #[case] expected: &str) {
    assert_eq!(tag_for_encoding(encoding), expected);
}
