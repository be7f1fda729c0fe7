//! Registry behavior observed through generated documents.

use metabase::ast::{CursorKind, Node, TypeKind};
use metabase::walker::walk;
use metabase::{Diagnostic, GeneratorConfig};

use crate::helpers::ast_builders::{field, function, param, struct_decl, ty, typedef, unit};
use crate::helpers::fixtures::{APP_HEADER, run, run_json};

#[test]
fn test_underscore_struct_found_without_underscore() {
    let unit = unit([struct_decl(
        "_Bar",
        APP_HEADER,
        1,
        vec![field("x", ty(TypeKind::Int, "int", "i"))],
    )]);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let tree = walk(&unit, &GeneratorConfig::default(), &mut diagnostics);
    assert!(tree.has_struct("Bar"));
    assert_eq!(tree.get_struct("Bar").unwrap().base.name, "Bar");

    let json = run_json(&unit, &GeneratorConfig::default());
    assert_eq!(json["structs"]["Bar"]["name"], "Bar");
    assert!(json["structs"].get("_Bar").is_none());
}

#[test]
fn test_typedef_of_anonymous_struct_registers_one_struct() {
    let anonymous = struct_decl(
        "",
        APP_HEADER,
        3,
        vec![
            field("width", ty(TypeKind::Double, "double", "d")),
            field("height", ty(TypeKind::Double, "double", "d")),
        ],
    );
    let spelling = anonymous.ty.as_ref().unwrap().spelling.clone();
    let unit = unit([
        anonymous,
        typedef("MKSize", APP_HEADER, 6, ty(TypeKind::Record, &spelling, "{?=dd}")),
    ]);

    let json = run_json(&unit, &GeneratorConfig::default());
    let structs = json["structs"].as_object().unwrap();
    assert_eq!(structs.len(), 1);
    assert_eq!(structs["MKSize"]["fields"][1]["name"], "height");
    assert_eq!(json["typedefs"]["MKSize"]["type"], "struct");
    assert_eq!(json["typedefs"]["MKSize"]["value"], "MKSize");
}

#[test]
fn test_nested_block_parameters_register_two_blocks() {
    let completion = param("completion", ty(TypeKind::BlockPointer, "void (^)(BOOL)", "@?"))
        .with_child(param("finished", ty(TypeKind::Bool, "BOOL", "B")));
    let handler = param(
        "handler",
        ty(TypeKind::BlockPointer, "void (^)(int, void (^)(BOOL))", "@?"),
    )
    .with_children([param("code", ty(TypeKind::Int, "int", "i")), completion]);
    let unit = unit([function("MKRun", APP_HEADER, 10, ty(TypeKind::Void, "void", "v"))
        .with_child(handler)]);

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let tree = walk(&unit, &GeneratorConfig::default(), &mut diagnostics);
    assert!(tree.has_block("MyKit", "void (^)(int, void (^)(BOOL))"));
    assert!(tree.has_block("MyKit", "void (^)(BOOL)"));

    let json = run_json(&unit, &GeneratorConfig::default());
    let variants = json["blocks"]["MyKit"].as_array().unwrap();
    assert_eq!(variants.len(), 2);
    let outer = variants
        .iter()
        .find(|v| v["signature"] == "void (^)(int, void (^)(BOOL))")
        .unwrap();
    assert_eq!(outer["arguments"][1]["type"], "block");
    assert_eq!(outer["arguments"][1]["encoding"], "@?");
    assert_eq!(json["functions"]["MKRun"]["arguments"][0]["encoding"], "@?");
}

#[test]
fn test_repeated_block_signature_is_registered_once() {
    let block = || param("done", ty(TypeKind::BlockPointer, "void (^)(void)", "@?"));
    let unit = unit([
        function("First", APP_HEADER, 1, ty(TypeKind::Void, "void", "v")).with_child(block()),
        function("Second", APP_HEADER, 2, ty(TypeKind::Void, "void", "v")).with_child(block()),
    ]);
    let json = run_json(&unit, &GeneratorConfig::default());
    assert_eq!(json["blocks"]["MyKit"].as_array().unwrap().len(), 1);
}

#[test]
fn test_redefinition_is_last_write_wins() {
    let unit = unit([
        Node::new(CursorKind::VarDecl, "kLimit")
            .with_location(APP_HEADER, 1)
            .with_type(ty(TypeKind::Int, "int", "i")),
        Node::new(CursorKind::VarDecl, "kLimit")
            .with_location(APP_HEADER, 2)
            .with_type(ty(TypeKind::Double, "double", "d")),
    ]);
    let (metabase, diagnostics) = run(&unit, &GeneratorConfig::default());
    assert_eq!(metabase.vars["kLimit"].encoding, "d");
    assert_eq!(metabase.vars["kLimit"].base.line, "2");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, "I0001");
}

#[test]
fn test_forward_references_resolve_after_walk() {
    // The function is visited before the class it returns.
    let unit = unit([
        function(
            "MKMakeWidget",
            APP_HEADER,
            1,
            ty(TypeKind::ObjcObjectPointer, "MKWidget *", ""),
        ),
        Node::new(CursorKind::ObjcInterfaceDecl, "MKWidget").with_location(APP_HEADER, 5),
    ]);
    let json = run_json(&unit, &GeneratorConfig::default());
    assert_eq!(
        json["functions"]["MKMakeWidget"]["returns"],
        serde_json::json!({ "type": "obj_interface", "value": "MKWidget *", "encoding": "@" })
    );
}
