use std::collections::BTreeMap;

use super::interface::{InterfaceDefinition, InterfaceKind};
use super::types::{Argument, Type};
use crate::base::{SourceLocation, Version};
use crate::encoding::BLOCK_ENCODING;

/// Fields every declaration carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionBase {
    pub name: String,
    pub location: SourceLocation,
    /// Framework owning `location`.
    pub framework: String,
    pub introduced_in: Version,
    /// True when the location is outside the system include roots.
    pub third_party: bool,
    /// Kept for reference resolution but not emitted.
    pub excluded: bool,
}

impl DefinitionBase {
    pub fn new(name: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            name: name.into(),
            location,
            ..Self::default()
        }
    }
}

/// Registry category of a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DefinitionKind {
    Class,
    Protocol,
    Extension,
    Function,
    Block,
    Struct,
    Union,
    Enum,
    Typedef,
    Var,
}

impl DefinitionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DefinitionKind::Class => "class",
            DefinitionKind::Protocol => "protocol",
            DefinitionKind::Extension => "extension",
            DefinitionKind::Function => "function",
            DefinitionKind::Block => "block",
            DefinitionKind::Struct => "struct",
            DefinitionKind::Union => "union",
            DefinitionKind::Enum => "enum",
            DefinitionKind::Typedef => "typedef",
            DefinitionKind::Var => "var",
        }
    }
}

/// A global C function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionDefinition {
    pub base: DefinitionBase,
    pub returns: Type,
    pub arguments: Vec<Argument>,
    pub variadic: bool,
}

/// A block (callback) type, registered under `(name, signature)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockDefinition {
    pub base: DefinitionBase,
    pub signature: String,
    pub returns: Type,
    pub arguments: Vec<Argument>,
}

impl BlockDefinition {
    pub fn encoding(&self) -> &'static str {
        BLOCK_ENCODING
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Struct,
    Union,
}

impl RecordKind {
    pub fn tag(self) -> &'static str {
        match self {
            RecordKind::Struct => "struct",
            RecordKind::Union => "union",
        }
    }
}

/// A struct or union with its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDefinition {
    pub base: DefinitionBase,
    pub kind: RecordKind,
    /// Self type, tag forced to `struct`/`union`.
    pub ty: Type,
    pub fields: Vec<Argument>,
}

impl RecordDefinition {
    pub fn new(base: DefinitionBase, kind: RecordKind) -> Self {
        let ty = Type::new(kind.tag(), &base.name, "");
        Self {
            base,
            kind,
            ty,
            fields: Vec::new(),
        }
    }

    /// Anonymous records wait for a following typedef to name them.
    pub fn is_anonymous(&self) -> bool {
        let name = &self.base.name;
        name.is_empty() || name.contains("(anonymous") || name.contains("(unnamed")
    }
}

/// An enum with its constants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumDefinition {
    pub base: DefinitionBase,
    pub values: BTreeMap<String, i64>,
}

/// A typedef and the type it aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDefinition {
    pub base: DefinitionBase,
    pub ty: Type,
}

/// A global variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarDefinition {
    pub base: DefinitionBase,
    pub ty: Type,
}

/// Closed set of declaration kinds held by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    Interface(InterfaceDefinition),
    Function(FunctionDefinition),
    Block(BlockDefinition),
    Struct(RecordDefinition),
    Union(RecordDefinition),
    Enum(EnumDefinition),
    Typedef(TypeDefinition),
    Var(VarDefinition),
}

impl Definition {
    pub fn base(&self) -> &DefinitionBase {
        match self {
            Definition::Interface(def) => &def.base,
            Definition::Function(def) => &def.base,
            Definition::Block(def) => &def.base,
            Definition::Struct(def) | Definition::Union(def) => &def.base,
            Definition::Enum(def) => &def.base,
            Definition::Typedef(def) => &def.base,
            Definition::Var(def) => &def.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut DefinitionBase {
        match self {
            Definition::Interface(def) => &mut def.base,
            Definition::Function(def) => &mut def.base,
            Definition::Block(def) => &mut def.base,
            Definition::Struct(def) | Definition::Union(def) => &mut def.base,
            Definition::Enum(def) => &mut def.base,
            Definition::Typedef(def) => &mut def.base,
            Definition::Var(def) => &mut def.base,
        }
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn kind(&self) -> DefinitionKind {
        match self {
            Definition::Interface(def) => match def.kind {
                InterfaceKind::Class => DefinitionKind::Class,
                InterfaceKind::Protocol => DefinitionKind::Protocol,
                InterfaceKind::Category => DefinitionKind::Extension,
            },
            Definition::Function(_) => DefinitionKind::Function,
            Definition::Block(_) => DefinitionKind::Block,
            Definition::Struct(_) => DefinitionKind::Struct,
            Definition::Union(_) => DefinitionKind::Union,
            Definition::Enum(_) => DefinitionKind::Enum,
            Definition::Typedef(_) => DefinitionKind::Typedef,
            Definition::Var(_) => DefinitionKind::Var,
        }
    }

    pub fn is_excluded(&self) -> bool {
        self.base().excluded
    }

    pub fn as_record(&self) -> Option<&RecordDefinition> {
        match self {
            Definition::Struct(def) | Definition::Union(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut RecordDefinition> {
        match self {
            Definition::Struct(def) | Definition::Union(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceDefinition> {
        match self {
            Definition::Interface(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_interface_mut(&mut self) -> Option<&mut InterfaceDefinition> {
        match self {
            Definition::Interface(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_typedef(&self) -> Option<&TypeDefinition> {
        match self {
            Definition::Typedef(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<&BlockDefinition> {
        match self {
            Definition::Block(def) => Some(def),
            _ => None,
        }
    }

    /// Every type a definition refers to, for dependency tracking.
    pub fn referenced_types(&self) -> Vec<&Type> {
        match self {
            Definition::Interface(def) => def
                .methods
                .values()
                .flat_map(|m| std::iter::once(&m.returns).chain(m.arguments.iter().map(|a| &a.ty)))
                .chain(def.properties.values().map(|p| &p.ty))
                .collect(),
            Definition::Function(def) => std::iter::once(&def.returns)
                .chain(def.arguments.iter().map(|a| &a.ty))
                .collect(),
            Definition::Block(def) => std::iter::once(&def.returns)
                .chain(def.arguments.iter().map(|a| &a.ty))
                .collect(),
            Definition::Struct(def) | Definition::Union(def) => {
                def.fields.iter().map(|f| &f.ty).collect()
            }
            Definition::Enum(_) => Vec::new(),
            Definition::Typedef(def) => vec![&def.ty],
            Definition::Var(def) => vec![&def.ty],
        }
    }
}
