//! Document shape and determinism.

use metabase::ast::{CursorKind, Node, PropertyAttribute, TypeKind};
use metabase::{Diagnostic, GeneratorConfig, TracingSink};
use serde_json::json;

use crate::helpers::ast_builders::{
    field, function, introduced, param, struct_decl, ty, typedef, unit,
};
use crate::helpers::fixtures::{APP_HEADER, generated, ios_config, run, run_json};

fn widget_header() -> Vec<Node> {
    let method = |selector: &str, returns| {
        Node::new(CursorKind::ObjcInstanceMethodDecl, selector).with_result_type(returns)
    };

    let init = method(
        "initWithName:",
        ty(TypeKind::Typedef, "instancetype", "@"),
    )
    .with_encoding("@24@0:8@16")
    .with_child(param("name", ty(TypeKind::ObjcObjectPointer, "NSString * _Nonnull", "@")));

    let mut title = Node::new(CursorKind::ObjcPropertyDecl, "title")
        .with_type(ty(TypeKind::ObjcObjectPointer, "NSString *", "@"));
    title.property_attributes = vec![PropertyAttribute::Readonly];

    let class = introduced(
        Node::new(CursorKind::ObjcInterfaceDecl, "MKWidget")
            .with_location(APP_HEADER, 12)
            .with_children([
                Node::new(CursorKind::ObjcSuperClassRef, "NSObject"),
                init,
                title,
                Node::new(CursorKind::ObjcIvarDecl, "_title"),
            ]),
        "ios",
        12,
        -1,
        -1,
    );

    let category = Node::new(CursorKind::ObjcCategoryDecl, "Sizing")
        .with_location(APP_HEADER, 30)
        .with_children([
            Node::new(CursorKind::ObjcClassRef, "MKWidget"),
            method("sizeToFit", ty(TypeKind::Void, "void", "v")).with_encoding("v16@0:8"),
        ]);

    let mut on = Node::new(CursorKind::EnumConstantDecl, "MKModeOn");
    on.enum_value = Some(1);
    let mut off = Node::new(CursorKind::EnumConstantDecl, "MKModeOff");
    off.enum_value = Some(0);
    let mode = Node::new(CursorKind::EnumDecl, "MKMode")
        .with_location(APP_HEADER, 40)
        .with_children([off, on]);

    vec![
        class,
        category,
        mode,
        typedef("MKCount", APP_HEADER, 50, ty(TypeKind::ULong, "unsigned long", "Q")),
        function("MKLog", APP_HEADER, 60, ty(TypeKind::Void, "void", "v"))
            .with_child(param("format", ty(TypeKind::Pointer, "const char *", "r*")))
            .with_child(Node::new(CursorKind::UnexposedAttr, "")),
    ]
}

#[test]
fn test_full_document() {
    let mut log = function("MKLog", APP_HEADER, 60, ty(TypeKind::Void, "void", "v"))
        .with_child(param("format", ty(TypeKind::Pointer, "const char *", "r*")));
    log.variadic = true;
    let mut nodes = widget_header();
    nodes.pop();
    nodes.push(log);

    let json = run_json(&unit(nodes), &ios_config());
    assert_eq!(
        json,
        json!({
            "typedefs": {
                "MKCount": {
                    "framework": "MyKit",
                    "thirdparty": true,
                    "filename": APP_HEADER,
                    "line": "50",
                    "introducedIn": "0.0.0",
                    "type": "ulong",
                    "value": "unsigned long",
                    "encoding": "Q"
                }
            },
            "classes": {
                "MKWidget": {
                    "name": "MKWidget",
                    "framework": "MyKit",
                    "thirdparty": true,
                    "filename": APP_HEADER,
                    "line": "12",
                    "introducedIn": "12.0.0",
                    "superclass": "NSObject",
                    "categories": ["Sizing"],
                    "methods": {
                        "initWithName:": {
                            "selector": "initWithName:",
                            "name": "initWithName",
                            "encoding": "@24@0:8@16",
                            "returns": { "type": "obj_interface", "value": "instancetype", "encoding": "@" },
                            "arguments": [
                                { "name": "name", "type": "objc_pointer", "value": "NSString *", "encoding": "@" }
                            ],
                            "instance": true,
                            "constructor": true
                        },
                        "sizeToFit": {
                            "selector": "sizeToFit",
                            "name": "sizeToFit",
                            "encoding": "v16@0:8",
                            "returns": { "type": "void", "value": "void", "encoding": "v" },
                            "arguments": [],
                            "instance": true
                        }
                    },
                    "properties": {
                        "title": {
                            "name": "title",
                            "type": { "type": "objc_pointer", "value": "NSString *", "encoding": "@" },
                            "attributes": ["readonly"],
                            "optional": false
                        }
                    }
                }
            },
            "enums": {
                "MKMode": {
                    "framework": "MyKit",
                    "thirdparty": true,
                    "filename": APP_HEADER,
                    "line": "40",
                    "introducedIn": "0.0.0",
                    "values": { "MKModeOff": 0, "MKModeOn": 1 }
                }
            },
            "functions": {
                "MKLog": {
                    "name": "MKLog",
                    "framework": "MyKit",
                    "thirdparty": true,
                    "filename": APP_HEADER,
                    "line": "60",
                    "introducedIn": "0.0.0",
                    "returns": { "type": "void", "value": "void", "encoding": "v" },
                    "arguments": [
                        { "name": "format", "type": "pointer", "value": "char *", "encoding": "*" }
                    ],
                    "variadic": true
                }
            },
            "metadata": {
                "api-version": "1",
                "platform": "ios",
                "sdk-path": ios_config().sdk_path,
                "min-version": "9.0",
                "dependencies": [],
                "generated": "2024-01-02T03:04:05Z",
                "system-generated": "true"
            }
        })
    );
}

#[test]
fn test_record_fields_and_property_types() {
    let mut count = Node::new(CursorKind::ObjcPropertyDecl, "count")
        .with_type(ty(TypeKind::Typedef, "NSUInteger", "Q"));
    count.property_attributes = vec![PropertyAttribute::Readonly];
    let nodes = vec![
        struct_decl(
            "MKPair",
            APP_HEADER,
            70,
            vec![
                field("x", ty(TypeKind::Int, "int", "i")),
                field("y", ty(TypeKind::Double, "double", "d")),
            ],
        ),
        Node::new(CursorKind::ObjcInterfaceDecl, "MKBag")
            .with_location(APP_HEADER, 80)
            .with_child(count),
    ];

    let json = run_json(&unit(nodes), &ios_config());
    assert_eq!(
        json["structs"]["MKPair"]["fields"],
        json!([
            { "name": "x", "type": "int", "encoding": "i" },
            { "name": "y", "type": "double", "encoding": "d" }
        ])
    );
    assert_eq!(json["structs"]["MKPair"]["introducedIn"], "0.0.0");

    let property_type = &json["classes"]["MKBag"]["properties"]["count"]["type"];
    assert_eq!(property_type["value"], "NSUInteger");
    assert_eq!(property_type["encoding"], "Q");
}

#[test]
fn test_reruns_are_byte_identical() {
    let unit = unit(widget_header());
    let config = ios_config();
    let first = run(&unit, &config).0.to_json_string(true).unwrap();
    let second = run(&unit, &config).0.to_json_string(true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_reruns_differ_only_in_timestamp() {
    let unit = unit(widget_header());
    let config = ios_config();
    let mut sink = TracingSink;
    let mut now = metabase::generate(&unit, &config, &mut sink);
    let (fixed, _) = run(&unit, &config);
    assert_eq!(now.metadata.generated.len(), "2024-01-02T03:04:05Z".len());
    now.metadata.generated = fixed.metadata.generated.clone();
    assert_eq!(now, fixed);
}

#[test]
fn test_diagnostics_do_not_stop_the_run() {
    let mut nodes = widget_header();
    nodes.push(
        Node::new(CursorKind::StructDecl, "MKOdd")
            .with_location(APP_HEADER, 70)
            .with_type(ty(TypeKind::Record, "struct MKOdd", ""))
            .with_child(Node::new(CursorKind::Other, "mystery")),
    );
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let metabase = metabase::generate_at(
        &unit(nodes),
        &GeneratorConfig::default(),
        &mut diagnostics,
        generated(),
    );
    assert!(metabase.structs.contains_key("MKOdd"));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, "W0001");
    assert!(diagnostics[0].location.is_none());
}
