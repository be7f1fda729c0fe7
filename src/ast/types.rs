//! Front-end type descriptions.

use serde::{Deserialize, Serialize};

/// Type kinds reported by the front-end (`CXTypeKind`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Invalid,
    Unexposed,
    Void,
    Bool,
    CharU,
    #[serde(rename = "uchar")]
    UChar,
    Char16,
    Char32,
    #[serde(rename = "ushort")]
    UShort,
    #[serde(rename = "uint")]
    UInt,
    #[serde(rename = "ulong")]
    ULong,
    #[serde(rename = "ulonglong")]
    ULongLong,
    #[serde(rename = "uint128")]
    UInt128,
    CharS,
    #[serde(rename = "schar")]
    SChar,
    #[serde(rename = "wchar")]
    WChar,
    Short,
    Int,
    Long,
    LongLong,
    Int128,
    Float,
    Double,
    LongDouble,
    NullPtr,
    ObjcId,
    ObjcClass,
    ObjcSel,
    Complex,
    Pointer,
    BlockPointer,
    LvalueReference,
    RvalueReference,
    Record,
    Enum,
    Typedef,
    ObjcInterface,
    ObjcObjectPointer,
    FunctionNoProto,
    FunctionProto,
    ConstantArray,
    Vector,
    IncompleteArray,
    VariableArray,
    DependentSizedArray,
    MemberPointer,
    Elaborated,
    Attributed,
    ObjcObject,
    ObjcTypeParam,
    #[serde(other)]
    Other,
}

/// A type as reported by the front-end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AstType {
    pub kind: TypeKind,
    #[serde(default)]
    pub spelling: String,
    /// Type encoding (`clang_Type_getObjCEncoding`).
    #[serde(default)]
    pub encoding: String,
    /// Canonical type, present for typedefs.
    #[serde(default)]
    pub canonical: Option<Box<AstType>>,
    /// Named type, present for elaborated types.
    #[serde(default)]
    pub named: Option<Box<AstType>>,
    /// Parameter types, present for block and function types.
    #[serde(default)]
    pub arg_types: Vec<AstType>,
}

impl AstType {
    pub fn new(kind: TypeKind, spelling: impl Into<String>) -> Self {
        Self {
            kind,
            spelling: spelling.into(),
            encoding: String::new(),
            canonical: None,
            named: None,
            arg_types: Vec::new(),
        }
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_canonical(mut self, canonical: AstType) -> Self {
        self.canonical = Some(Box::new(canonical));
        self
    }

    pub fn with_named(mut self, named: AstType) -> Self {
        self.named = Some(Box::new(named));
        self
    }

    pub fn with_arg_types(mut self, args: impl IntoIterator<Item = AstType>) -> Self {
        self.arg_types.extend(args);
        self
    }

    /// The canonical type of a typedef, or the type itself.
    pub fn canonical(&self) -> &AstType {
        match (self.kind, &self.canonical) {
            (TypeKind::Typedef, Some(canonical)) => canonical,
            _ => self,
        }
    }

    /// The named type of an elaborated type, or the type itself.
    pub fn named(&self) -> &AstType {
        match (self.kind, &self.named) {
            (TypeKind::Elaborated, Some(named)) => named,
            _ => self,
        }
    }
}
