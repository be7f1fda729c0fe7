//! Fixed tables between type tags, front-end type kinds and encodings.

use crate::ast::TypeKind;

/// Encoding of a block (callback) value.
pub const BLOCK_ENCODING: &str = "@?";
/// Encoding of an object pointer.
pub const OBJECT_ENCODING: &str = "@";
/// Encoding of a `Class` value.
pub const CLASS_ENCODING: &str = "#";
/// Encoding of a selector.
pub const SELECTOR_ENCODING: &str = ":";
/// Encoding of a function pointer.
pub const FUNCTION_POINTER_ENCODING: &str = "^?";
/// Encoding of a pointer to a function pointer.
pub const DOUBLE_FUNCTION_POINTER_ENCODING: &str = "^^?";
/// Sentinel for an encoding that could not be derived.
pub const UNKNOWN_ENCODING: &str = "?";
/// Return type marker of constructor-style methods.
pub const INSTANCETYPE: &str = "instancetype";

/// Single encoding for a primitive tag or spelling, or `None`.
pub fn primitive_encoding(tag: &str) -> Option<&'static str> {
    let code = match tag {
        "char" | "char16" | "char32" | "s_char" | "char_s" => "c",
        "int" => "i",
        "short" => "s",
        "long" => "l",
        "long_long" | "long long" => "q",
        "char_u" | "uchar" | "unsigned char" => "C",
        "uint" | "unsigned int" => "I",
        "ushort" | "unsigned short" => "S",
        "ulong" | "unsigned long" => "L",
        "long_double" | "long double" => "D",
        "ulonglong" | "unsigned long long" => "Q",
        "float" => "f",
        "double" => "d",
        "bool" | "_Bool" => "B",
        "void" => "v",
        "char *" => "*",
        "obj_interface" | "id" | "objc_pointer" => OBJECT_ENCODING,
        "enum" => "i",
        "Class" => CLASS_ENCODING,
        "SEL" => SELECTOR_ENCODING,
        "block" => BLOCK_ENCODING,
        _ => return None,
    };
    Some(code)
}

/// Encoding for a tag, `?` when the tag is not primitive.
///
/// # Example
/// ```
/// use metabase::encoding::encoding_for_tag;
///
/// assert_eq!(encoding_for_tag("unsigned long long"), "Q");
/// assert_eq!(encoding_for_tag("block"), "@?");
/// assert_eq!(encoding_for_tag("record"), "?");
/// ```
pub fn encoding_for_tag(tag: &str) -> &'static str {
    primitive_encoding(tag).unwrap_or(UNKNOWN_ENCODING)
}

/// Tag for an encoding, used when the front-end reports an unexposed type.
pub fn tag_for_encoding(encoding: &str) -> &'static str {
    let encoding = filter_encoding(encoding);
    match encoding {
        "" => "unknown",
        "i" => "int",
        "l" => "long",
        "c" => "c",
        "d" => "double",
        "f" => "float",
        "s" => "short",
        "q" => "long long",
        "C" => "unsigned char",
        "I" => "unsigned int",
        "S" => "unsigned short",
        "L" => "unsigned long",
        "Q" => "unsigned long long",
        "B" => "bool",
        "v" => "void",
        "*" => "char *",
        "@" => "id",
        "#" => "Class",
        ":" => "SEL",
        "@?" => "block",
        _ => match encoding.as_bytes()[0] {
            b'{' => "struct",
            b'^' => "pointer",
            b'[' => "constant_array",
            b'(' => "union",
            _ => "unknown",
        },
    }
}

/// Coarse tag for a front-end type kind.
pub fn tag_for_kind(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::Invalid => "invalid",
        TypeKind::Unexposed => "unexposed",
        TypeKind::Void => "void",
        TypeKind::Bool => "bool",
        TypeKind::CharU => "char_u",
        TypeKind::UChar => "uchar",
        TypeKind::Char16 => "char16",
        TypeKind::Char32 => "char32",
        TypeKind::UShort => "ushort",
        TypeKind::UInt => "uint",
        TypeKind::ULong => "ulong",
        TypeKind::ULongLong => "ulonglong",
        TypeKind::UInt128 => "uint128",
        TypeKind::CharS => "char_s",
        TypeKind::SChar => "s_char",
        TypeKind::WChar => "w_char",
        TypeKind::Short => "short",
        TypeKind::Int => "int",
        TypeKind::Long => "long",
        TypeKind::LongLong => "long_long",
        TypeKind::Int128 => "int_128",
        TypeKind::Float => "float",
        TypeKind::Double => "double",
        TypeKind::LongDouble => "long_double",
        TypeKind::NullPtr => "null",
        TypeKind::ObjcId => "id",
        TypeKind::ObjcClass => "Class",
        TypeKind::ObjcSel => "SEL",
        TypeKind::Complex => "complex",
        TypeKind::Pointer => "pointer",
        TypeKind::BlockPointer => "block",
        TypeKind::LvalueReference => "lvalue_ref",
        TypeKind::RvalueReference => "rvalue_ref",
        TypeKind::Record => "record",
        TypeKind::Enum => "enum",
        TypeKind::Typedef => "typedef",
        TypeKind::ObjcInterface => "obj_interface",
        TypeKind::ObjcObjectPointer => "objc_pointer",
        TypeKind::FunctionNoProto => "function_noproto",
        TypeKind::FunctionProto => "function_proto",
        TypeKind::ConstantArray => "constant_array",
        TypeKind::Vector => "vector",
        TypeKind::IncompleteArray => "incomplete_array",
        TypeKind::VariableArray => "variable_array",
        TypeKind::DependentSizedArray => "dependent_sized_array",
        TypeKind::MemberPointer => "member_pointer",
        TypeKind::Elaborated
        | TypeKind::Attributed
        | TypeKind::ObjcObject
        | TypeKind::ObjcTypeParam
        | TypeKind::Other => "unknown",
    }
}

/// Strip a leading `r` (const) qualifier.
pub fn filter_encoding(encoding: &str) -> &str {
    encoding.strip_prefix('r').unwrap_or(encoding)
}

/// True when an encoding is missing or a placeholder.
pub fn needs_resolving(encoding: &str) -> bool {
    encoding.is_empty() || encoding == "unexposed" || encoding == UNKNOWN_ENCODING
}
