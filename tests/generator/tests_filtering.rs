//! Availability gating and framework filtering.

use metabase::GeneratorConfig;
use metabase::ast::{CursorKind, Node, TypeKind};
use rstest::rstest;

use crate::helpers::ast_builders::{
    field, function, introduced, not_available, param, struct_decl, ty, unavailable_on, unit, var,
};
use crate::helpers::fixtures::{
    APP_HEADER, FOUNDATION_HEADER, SDK, SYSTEM_HEADER, UIKIT_HEADER, ios_config, run, run_json,
};

fn int_var(name: &str, file: &str) -> Node {
    var(name, file, 1, ty(TypeKind::Int, "int", "i"))
}

fn hidden(node: Node) -> Node {
    let mut node = node;
    node.platform_availability.always_unavailable = true;
    node
}

fn forward(node: Node) -> Node {
    let mut node = node;
    node.forward_declaration = true;
    node
}

#[rstest]
#[case::unavailable_on_target(unavailable_on(int_var("kGone", APP_HEADER), "ios"))]
#[case::not_available(not_available(int_var("kGone", APP_HEADER)))]
#[case::always_unavailable(hidden(introduced(int_var("kGone", APP_HEADER), "ios", 2, 0, -1)))]
#[case::forward_declaration(forward(int_var("kGone", APP_HEADER)))]
fn test_gated_declarations_never_appear(#[case] node: Node) {
    let (metabase, _) = run(&unit([node]), &ios_config());
    assert_eq!(metabase.definition_count(), 0);
    let json = metabase.to_json_value().unwrap();
    assert_eq!(json.as_object().unwrap().len(), 1);
}

#[test]
fn test_unavailable_elsewhere_is_kept() {
    let node = unavailable_on(int_var("kMobile", APP_HEADER), "macos");
    let (metabase, _) = run(&unit([node]), &ios_config());
    assert!(metabase.vars.contains_key("kMobile"));
}

#[rstest]
#[case(12, -1, -1, "12.0.0")]
#[case(9, 3, -1, "9.3.0")]
#[case(10, 0, 1, "10.0.1")]
fn test_introduced_version_is_normalized(
    #[case] major: i32,
    #[case] minor: i32,
    #[case] subminor: i32,
    #[case] expected: &str,
) {
    let node = introduced(int_var("kNew", APP_HEADER), "ios", major, minor, subminor);
    let json = run_json(&unit([node]), &ios_config());
    assert_eq!(json["vars"]["kNew"]["introducedIn"], expected);
}

#[test]
fn test_other_platform_records_are_ignored() {
    let node = introduced(int_var("kDesk", APP_HEADER), "macos", 10, 15, -1);
    let json = run_json(&unit([node]), &ios_config());
    assert_eq!(json["vars"]["kDesk"]["introducedIn"], "0.0.0");

    let config = ios_config().with_target_platform("macos");
    let json = run_json(&unit([introduced(int_var("kDesk", APP_HEADER), "macos", 10, 15, -1)]), &config);
    assert_eq!(json["vars"]["kDesk"]["introducedIn"], "10.15.0");
}

#[test]
fn test_exclude_system_records_referenced_frameworks() {
    let nodes = vec![
        struct_decl(
            "NSRange",
            FOUNDATION_HEADER,
            10,
            vec![
                field("location", ty(TypeKind::ULong, "NSUInteger", "Q")),
                field("length", ty(TypeKind::ULong, "NSUInteger", "Q")),
            ],
        ),
        int_var("stdin_fd", SYSTEM_HEADER),
        int_var("kUIKitOnly", UIKIT_HEADER),
        function("MKRangeOf", APP_HEADER, 4, ty(TypeKind::Record, "struct NSRange", "{NSRange=QQ}")),
    ];
    let config = ios_config().with_exclude_system_apis(true);
    let json = run_json(&unit(nodes), &config);

    assert!(json.get("structs").is_none());
    assert!(json.get("vars").is_none());
    assert_eq!(json["functions"]["MKRangeOf"]["returns"]["type"], "struct");
    assert_eq!(json["functions"]["MKRangeOf"]["returns"]["encoding"], "{NSRange=QQ}");
    assert_eq!(json["metadata"]["dependencies"], serde_json::json!(["Foundation"]));
    assert_eq!(json["metadata"]["system-generated"], "false");
}

#[test]
fn test_single_framework_mode() {
    let uikit = format!("{SDK}/System/Library/Frameworks/UIKit.framework");
    let nodes = vec![
        int_var("UIKeep", UIKIT_HEADER),
        int_var("NSDrop", FOUNDATION_HEADER),
        int_var("stdin_fd", SYSTEM_HEADER),
    ];
    let (metabase, _) = run(&unit(nodes), &ios_config().with_framework_filter(uikit));

    assert_eq!(metabase.vars.keys().collect::<Vec<_>>(), vec!["UIKeep"]);
    assert_eq!(metabase.vars["UIKeep"].base.framework, "UIKit");
    assert_eq!(
        metabase.metadata.dependencies,
        vec!["/usr/include/stdio.h".to_string(), "Foundation".to_string()]
    );
}

#[test]
fn test_core_foundation_keeps_system_headers() {
    let filter = format!("{SDK}/System/Library/Frameworks/CoreFoundation.framework");
    let nodes = vec![int_var("stdin_fd", SYSTEM_HEADER), int_var("NSDrop", FOUNDATION_HEADER)];
    let (metabase, _) = run(&unit(nodes), &ios_config().with_framework_filter(filter));
    assert!(metabase.vars.contains_key("stdin_fd"));
    assert!(!metabase.vars.contains_key("NSDrop"));
}

#[test]
fn test_foundation_keeps_root_object_header() {
    let filter = format!("{SDK}/System/Library/Frameworks/Foundation.framework");
    let root = Node::new(CursorKind::ObjcInterfaceDecl, "NSObject")
        .with_location("/usr/include/objc/NSObject.h", 50);
    let (metabase, _) = run(&unit([root]), &ios_config().with_framework_filter(filter));
    assert!(metabase.classes.contains_key("NSObject"));
    assert!(!metabase.classes["NSObject"].base.thirdparty);
}

#[test]
fn test_framework_name_override_names_blocks() {
    let block = param("done", ty(TypeKind::BlockPointer, "void (^)(void)", "@?"));
    let nodes = vec![function("UIRun", UIKIT_HEADER, 1, ty(TypeKind::Void, "void", "v")).with_child(block)];
    let config = ios_config().with_framework_name("MyBridge");
    let json = run_json(&unit(nodes), &config);
    assert!(json["blocks"].get("MyBridge").is_some());
    assert_eq!(json["blocks"]["MyBridge"][0]["framework"], "UIKit");
    assert_eq!(json["functions"]["UIRun"]["framework"], "UIKit");
}
