//! Cursor nodes of the declaration tree.

use serde::{Deserialize, Serialize};

use super::types::AstType;
use crate::base::{SourceLocation, Version};

/// Cursor kinds the generator distinguishes.
///
/// Anything the front-end reports that is not listed here deserializes to
/// [`CursorKind::Other`] and is skipped by the walker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorKind {
    TranslationUnit,

    // Objective-C containers
    ObjcInterfaceDecl,
    ObjcProtocolDecl,
    ObjcCategoryDecl,

    // Objective-C members
    ObjcInstanceMethodDecl,
    ObjcClassMethodDecl,
    ObjcPropertyDecl,
    ObjcIvarDecl,
    ObjcSuperClassRef,
    ObjcProtocolRef,
    ObjcClassRef,

    // C declarations
    TypedefDecl,
    EnumDecl,
    EnumConstantDecl,
    VarDecl,
    FunctionDecl,
    StructDecl,
    UnionDecl,
    FieldDecl,
    ParmDecl,

    // References
    TypeRef,

    // Attributes and bodies
    UnexposedAttr,
    PackedAttr,
    VisibilityAttr,
    AsmLabelAttr,
    ConstAttr,
    PureAttr,
    NsReturnsRetained,
    WarnUnusedResultAttr,
    ObjcBoxable,
    CompoundStmt,

    #[serde(other)]
    Other,
}

impl CursorKind {
    /// Attribute, reference and body kinds that members may carry and
    /// that produce nothing.
    pub fn is_ignorable_member(self) -> bool {
        matches!(
            self,
            CursorKind::ObjcProtocolRef
                | CursorKind::ObjcClassRef
                | CursorKind::TypeRef
                | CursorKind::UnexposedAttr
                | CursorKind::PackedAttr
                | CursorKind::VisibilityAttr
                | CursorKind::AsmLabelAttr
                | CursorKind::ConstAttr
                | CursorKind::PureAttr
                | CursorKind::NsReturnsRetained
                | CursorKind::WarnUnusedResultAttr
                | CursorKind::ObjcBoxable
                | CursorKind::CompoundStmt
        )
    }

    pub fn is_method(self) -> bool {
        matches!(
            self,
            CursorKind::ObjcInstanceMethodDecl | CursorKind::ObjcClassMethodDecl
        )
    }
}

/// Cursor availability as computed by the front-end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    Available,
    Deprecated,
    NotAvailable,
    NotAccessible,
}

/// A version triple as reported by the front-end; `-1` marks an absent
/// component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVersion {
    #[serde(default = "absent")]
    pub major: i32,
    #[serde(default = "absent")]
    pub minor: i32,
    #[serde(default = "absent")]
    pub subminor: i32,
}

fn absent() -> i32 {
    -1
}

impl Default for RawVersion {
    fn default() -> Self {
        Self {
            major: -1,
            minor: -1,
            subminor: -1,
        }
    }
}

impl RawVersion {
    pub fn new(major: i32, minor: i32, subminor: i32) -> Self {
        Self {
            major,
            minor,
            subminor,
        }
    }

    /// Normalize to a [`Version`], clamping absent components to zero.
    pub fn normalized(self) -> Version {
        Version::from_raw(self.major, self.minor, self.subminor)
    }
}

/// Availability of a cursor on one platform.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformRecord {
    pub platform: String,
    #[serde(default)]
    pub introduced: RawVersion,
    #[serde(default)]
    pub unavailable: bool,
}

/// All availability attributes attached to a cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformAvailability {
    pub always_deprecated: bool,
    pub always_unavailable: bool,
    pub platforms: Vec<PlatformRecord>,
}

/// Objective-C property attributes the metabase records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyAttribute {
    Readonly,
    Readwrite,
    Class,
    #[serde(other)]
    Other,
}

impl PropertyAttribute {
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            PropertyAttribute::Readonly => Some("readonly"),
            PropertyAttribute::Readwrite => Some("readwrite"),
            PropertyAttribute::Class => Some("class"),
            PropertyAttribute::Other => None,
        }
    }
}

/// One cursor of the declaration tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: CursorKind,
    /// Cursor spelling (selector for methods, bare name otherwise).
    #[serde(default)]
    pub spelling: String,
    /// Cursor display name; falls back to `spelling` when absent.
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub location: Option<SourceLocation>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub platform_availability: PlatformAvailability,
    /// True for a non-defining reference whose definition lives elsewhere.
    #[serde(default)]
    pub forward_declaration: bool,
    #[serde(default, rename = "type")]
    pub ty: Option<AstType>,
    #[serde(default)]
    pub result_type: Option<AstType>,
    #[serde(default)]
    pub underlying_type: Option<AstType>,
    /// Declaration encoding (`clang_getDeclObjCTypeEncoding`).
    #[serde(default)]
    pub objc_encoding: Option<String>,
    #[serde(default)]
    pub enum_value: Option<i64>,
    #[serde(default)]
    pub property_attributes: Vec<PropertyAttribute>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub variadic: bool,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: CursorKind, spelling: impl Into<String>) -> Self {
        Self {
            kind,
            spelling: spelling.into(),
            display_name: None,
            location: None,
            availability: Availability::Available,
            platform_availability: PlatformAvailability::default(),
            forward_declaration: false,
            ty: None,
            result_type: None,
            underlying_type: None,
            objc_encoding: None,
            enum_value: None,
            property_attributes: Vec::new(),
            optional: false,
            variadic: false,
            children: Vec::new(),
        }
    }

    /// Display name, or the spelling when the front-end omitted it.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.spelling)
    }

    pub fn encoding(&self) -> &str {
        self.objc_encoding.as_deref().unwrap_or_default()
    }

    pub fn children_of_kind(&self, kind: CursorKind) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(move |child| child.kind == kind)
    }

    pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.location = Some(SourceLocation::new(file, line));
        self
    }

    pub fn with_type(mut self, ty: AstType) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn with_result_type(mut self, ty: AstType) -> Self {
        self.result_type = Some(ty);
        self
    }

    pub fn with_underlying_type(mut self, ty: AstType) -> Self {
        self.underlying_type = Some(ty);
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.objc_encoding = Some(encoding.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }
}
