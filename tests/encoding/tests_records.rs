//! Record encodings resolved through a walked tree.

use metabase::ast::{AstType, CursorKind, Node, TypeKind};
use metabase::encoding::Synthesizer;
use metabase::walker::walk;
use metabase::{Diagnostic, GeneratorConfig, MetabaseTree};

use crate::helpers::ast_builders::{field, struct_decl, ty, unit};
use crate::helpers::fixtures::{APP_HEADER, run};

fn tree_of(nodes: Vec<Node>) -> MetabaseTree {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    walk(&unit(nodes), &GeneratorConfig::default(), &mut diagnostics)
}

fn encode(tree: &MetabaseTree, tag: &str, value: &str) -> (String, Vec<Diagnostic>) {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let encoding = Synthesizer::new(tree, &mut diagnostics, 32).encode_str(tag, value);
    (encoding, diagnostics)
}

fn int() -> AstType {
    ty(TypeKind::Int, "int", "i")
}

fn double() -> AstType {
    ty(TypeKind::Double, "double", "d")
}

#[test]
fn test_struct_encodes_its_fields() {
    let tree = tree_of(vec![struct_decl(
        "Foo",
        APP_HEADER,
        1,
        vec![field("a", int()), field("b", double())],
    )]);
    assert_eq!(encode(&tree, "struct", "Foo").0, "{Foo=id}");
    assert_eq!(encode(&tree, "struct", "struct Foo").0, "{Foo=id}");
    assert_eq!(encode(&tree, "pointer", "struct Foo *").0, "^{Foo=id}");
}

#[test]
fn test_nested_structs() {
    let tree = tree_of(vec![
        struct_decl("Point", APP_HEADER, 1, vec![field("x", double()), field("y", double())]),
        struct_decl(
            "Rect",
            APP_HEADER,
            5,
            vec![
                field("origin", ty(TypeKind::Record, "struct Point", "{Point=dd}")),
                field("size", ty(TypeKind::Record, "struct Point", "{Point=dd}")),
            ],
        ),
    ]);
    assert_eq!(encode(&tree, "struct", "Rect").0, "{Rect={Point=dd}{Point=dd}}");
}

#[test]
fn test_union_encoding() {
    let union = Node::new(CursorKind::UnionDecl, "Value")
        .with_location(APP_HEADER, 1)
        .with_type(ty(TypeKind::Record, "union Value", ""))
        .with_children([field("i", int()), field("d", double())]);
    let tree = tree_of(vec![union]);
    assert_eq!(encode(&tree, "struct", "union Value").0, "(Value=id)");
}

#[test]
fn test_self_referential_struct_terminates() {
    let tree = tree_of(vec![struct_decl(
        "Node",
        APP_HEADER,
        1,
        vec![
            field("next", ty(TypeKind::Pointer, "struct Node *", "")),
            field("value", int()),
        ],
    )]);
    let (encoding, diagnostics) = encode(&tree, "struct", "Node");
    assert_eq!(encoding, "{Node=^?i}");
    assert!(diagnostics.iter().any(|d| d.code == "W0004"));
}

#[test]
fn test_recursion_depth_is_bounded() {
    let tree = MetabaseTree::default();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let encoding = Synthesizer::new(&tree, &mut diagnostics, 1).encode_str("pointer", "int *");
    assert_eq!(encoding, "^?");
    assert_eq!(diagnostics[0].code, "W0004");
}

#[test]
fn test_configured_depth_applies_to_emitted_fields() {
    let nodes = vec![struct_decl(
        "Deep",
        APP_HEADER,
        3,
        vec![field("grid", ty(TypeKind::Pointer, "int **", ""))],
    )];

    let shallow = GeneratorConfig::default().with_max_encoding_depth(1);
    let (metabase, diagnostics) = run(&unit(nodes.clone()), &shallow);
    assert_eq!(metabase.structs["Deep"].fields[0].encoding, "^^?");
    assert!(diagnostics.iter().any(|d| d.code == "W0004"));

    let (metabase, _) = run(&unit(nodes), &GeneratorConfig::default());
    assert_eq!(metabase.structs["Deep"].fields[0].encoding, "^^i");
}
