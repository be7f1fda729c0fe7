//! Serialized shape of each definition kind.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::base::Version;

fn is_false(value: &bool) -> bool {
    !*value
}

// ============================================================================
// SHARED
// ============================================================================

/// Fields every emitted declaration starts with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BaseEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub framework: String,
    pub thirdparty: bool,
    pub filename: String,
    /// Source line, written as a string.
    pub line: String,
    /// `0.0.0` for declarations without availability information.
    #[serde(rename = "introducedIn")]
    pub introduced_in: Version,
}

/// A `{type, value, encoding}` triple.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EncodedTypeEntry {
    #[serde(rename = "type")]
    pub tag: String,
    pub value: String,
    pub encoding: String,
}

/// A function, method or block parameter. Unnamed parameters omit `name`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ArgumentEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub tag: String,
    pub value: String,
    pub encoding: String,
}

/// A struct or union field: a parameter without the spelled `value`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FieldEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub tag: String,
    pub encoding: String,
}

// ============================================================================
// OBJECTIVE-C
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MethodEntry {
    pub selector: String,
    pub name: String,
    pub encoding: String,
    pub returns: EncodedTypeEntry,
    pub arguments: Vec<ArgumentEntry>,
    pub instance: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub constructor: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PropertyEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: EncodedTypeEntry,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<&'static str>,
    pub optional: bool,
}

/// A class, protocol or extension.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InterfaceEntry {
    #[serde(flatten)]
    pub base: BaseEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superclass: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub protocols: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub methods: BTreeMap<String, MethodEntry>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, PropertyEntry>,
}

// ============================================================================
// C
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FunctionEntry {
    #[serde(flatten)]
    pub base: BaseEntry,
    pub returns: EncodedTypeEntry,
    pub arguments: Vec<ArgumentEntry>,
    #[serde(skip_serializing_if = "is_false")]
    pub variadic: bool,
}

/// One signature variant of a block type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BlockEntry {
    #[serde(flatten)]
    pub base: BaseEntry,
    pub encoding: String,
    pub returns: EncodedTypeEntry,
    pub arguments: Vec<ArgumentEntry>,
    #[serde(rename = "type")]
    pub tag: &'static str,
    pub signature: String,
}

/// A struct or union.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RecordEntry {
    #[serde(flatten)]
    pub base: BaseEntry,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EnumEntry {
    #[serde(flatten)]
    pub base: BaseEntry,
    pub values: BTreeMap<String, i64>,
}

/// A typedef or global variable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValueEntry {
    #[serde(flatten)]
    pub base: BaseEntry,
    #[serde(rename = "type")]
    pub tag: String,
    pub value: String,
    pub encoding: String,
}
