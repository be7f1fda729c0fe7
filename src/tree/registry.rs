use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::base::text::trim_leading_underscores;
use crate::config::FilterPolicy;
use crate::encoding::{EncodingLookup, RecordShape, TypeShape};
use crate::model::{Definition, DefinitionKind, RecordDefinition, TypeDefinition};

/// Stable index of a definition in the tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefId(u32);

impl DefId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

type NameIndex = IndexMap<String, DefId>;

/// Owner of every definition produced by a run.
#[derive(Debug, Clone)]
pub struct MetabaseTree {
    arena: Vec<Definition>,
    classes: NameIndex,
    extensions: NameIndex,
    protocols: NameIndex,
    typedefs: NameIndex,
    enums: NameIndex,
    vars: NameIndex,
    functions: NameIndex,
    structs: NameIndex,
    unions: NameIndex,
    /// Block name, then signature.
    blocks: IndexMap<String, NameIndex>,
    dependencies: BTreeSet<String>,
    policy: FilterPolicy,
}

impl Default for MetabaseTree {
    fn default() -> Self {
        Self::new(FilterPolicy::IncludeAll)
    }
}

impl MetabaseTree {
    pub fn new(policy: FilterPolicy) -> Self {
        Self {
            arena: Vec::new(),
            classes: NameIndex::new(),
            extensions: NameIndex::new(),
            protocols: NameIndex::new(),
            typedefs: NameIndex::new(),
            enums: NameIndex::new(),
            vars: NameIndex::new(),
            functions: NameIndex::new(),
            structs: NameIndex::new(),
            unions: NameIndex::new(),
            blocks: IndexMap::new(),
            dependencies: BTreeSet::new(),
            policy,
        }
    }

    pub fn policy(&self) -> &FilterPolicy {
        &self.policy
    }

    // ========================================================================
    // ARENA
    // ========================================================================

    /// Take ownership of a definition without registering it under a name.
    pub fn alloc(&mut self, definition: Definition) -> DefId {
        let id = DefId(self.arena.len() as u32);
        self.arena.push(definition);
        id
    }

    pub fn get(&self, id: DefId) -> &Definition {
        &self.arena[id.index()]
    }

    pub fn get_mut(&mut self, id: DefId) -> &mut Definition {
        &mut self.arena[id.index()]
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    // ========================================================================
    // REGISTRATION
    // ========================================================================

    /// Register an allocated definition under its name in its category.
    ///
    /// Struct and union names lose leading underscores first (`_Foo` is
    /// registered, and renamed, as `Foo`). Unnamed unions are not registered.
    /// Blocks go through [`MetabaseTree::register_block`]. Returns the id
    /// this registration replaced.
    pub fn register(&mut self, id: DefId) -> Option<DefId> {
        let kind = self.get(id).kind();
        if kind == DefinitionKind::Block {
            return self.register_block(id).err();
        }

        let mut key = self.get(id).name().to_string();
        if matches!(kind, DefinitionKind::Struct | DefinitionKind::Union) {
            let trimmed = trim_leading_underscores(&key).to_string();
            if trimmed != key {
                self.get_mut(id).base_mut().name = trimmed.clone();
                if let Some(record) = self.get_mut(id).as_record_mut() {
                    record.ty.set_value(&trimmed);
                }
                key = trimmed;
            }
            if key.is_empty() {
                return None;
            }
        }

        let index = self.index_mut(kind)?;
        let previous = index.insert(key.clone(), id).filter(|prev| *prev != id);
        if let Some(prev) = previous {
            tracing::debug!(kind = kind.as_str(), name = %key, ?prev, ?id, "definition overwritten");
        }
        previous
    }

    /// Register a block under `(name, signature)`.
    ///
    /// A signature already present under the name is kept and its id is
    /// returned as the error.
    pub fn register_block(&mut self, id: DefId) -> Result<(), DefId> {
        let Some(block) = self.get(id).as_block() else {
            return Ok(());
        };
        let name = block.base.name.clone();
        let signature = block.signature.clone();
        if name.is_empty() || signature.is_empty() {
            return Ok(());
        }
        let variants = self.blocks.entry(name).or_default();
        if let Some(existing) = variants.get(&signature) {
            return Err(*existing);
        }
        variants.insert(signature, id);
        Ok(())
    }

    /// Fold every extension whose class is registered into that class.
    ///
    /// Extensions of classes outside the tree stay registered. Returns the
    /// number of extensions folded.
    pub fn fold_extensions(&mut self) -> usize {
        let pending: Vec<(String, DefId, DefId)> = self
            .extensions
            .iter()
            .filter_map(|(name, ext)| {
                self.classes
                    .get(name)
                    .map(|class| (name.clone(), *ext, *class))
            })
            .collect();

        for (name, ext, class) in &pending {
            self.extensions.shift_remove(name);
            let Some(extension) = self.get(*ext).as_interface().cloned() else {
                continue;
            };
            if let Some(target) = self.get_mut(*class).as_interface_mut() {
                target.merge(extension);
            }
            tracing::debug!(class = %name, "folded extension into class");
        }
        pending.len()
    }

    fn index(&self, kind: DefinitionKind) -> Option<&NameIndex> {
        match kind {
            DefinitionKind::Class => Some(&self.classes),
            DefinitionKind::Protocol => Some(&self.protocols),
            DefinitionKind::Extension => Some(&self.extensions),
            DefinitionKind::Function => Some(&self.functions),
            DefinitionKind::Struct => Some(&self.structs),
            DefinitionKind::Union => Some(&self.unions),
            DefinitionKind::Enum => Some(&self.enums),
            DefinitionKind::Typedef => Some(&self.typedefs),
            DefinitionKind::Var => Some(&self.vars),
            DefinitionKind::Block => None,
        }
    }

    fn index_mut(&mut self, kind: DefinitionKind) -> Option<&mut NameIndex> {
        match kind {
            DefinitionKind::Class => Some(&mut self.classes),
            DefinitionKind::Protocol => Some(&mut self.protocols),
            DefinitionKind::Extension => Some(&mut self.extensions),
            DefinitionKind::Function => Some(&mut self.functions),
            DefinitionKind::Struct => Some(&mut self.structs),
            DefinitionKind::Union => Some(&mut self.unions),
            DefinitionKind::Enum => Some(&mut self.enums),
            DefinitionKind::Typedef => Some(&mut self.typedefs),
            DefinitionKind::Var => Some(&mut self.vars),
            DefinitionKind::Block => None,
        }
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Id registered under `name` in a category.
    pub fn lookup(&self, kind: DefinitionKind, name: &str) -> Option<DefId> {
        if name.is_empty() {
            return None;
        }
        self.index(kind)?.get(name).copied()
    }

    /// Registered `(name, definition)` pairs of a category, sorted by name.
    pub fn entries(&self, kind: DefinitionKind) -> Vec<(&str, &Definition)> {
        let mut entries: Vec<(&str, &Definition)> = self
            .index(kind)
            .map(|index| {
                index
                    .iter()
                    .map(|(name, id)| (name.as_str(), self.get(*id)))
                    .collect()
            })
            .unwrap_or_default();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Block variants grouped by name, both levels sorted.
    pub fn blocks(&self) -> Vec<(&str, Vec<&Definition>)> {
        let mut groups: Vec<(&str, Vec<(&str, &Definition)>)> = self
            .blocks
            .iter()
            .map(|(name, variants)| {
                (
                    name.as_str(),
                    variants
                        .iter()
                        .map(|(sig, id)| (sig.as_str(), self.get(*id)))
                        .collect(),
                )
            })
            .collect();
        groups.sort_by(|a, b| a.0.cmp(b.0));
        groups
            .into_iter()
            .map(|(name, mut variants)| {
                variants.sort_by(|a, b| a.0.cmp(b.0));
                (name, variants.into_iter().map(|(_, def)| def).collect())
            })
            .collect()
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.lookup(DefinitionKind::Class, name).is_some()
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.lookup(DefinitionKind::Extension, name).is_some()
    }

    pub fn has_typedef(&self, name: &str) -> bool {
        self.lookup(DefinitionKind::Typedef, name).is_some()
    }

    pub fn has_enum(&self, name: &str) -> bool {
        self.lookup(DefinitionKind::Enum, name).is_some()
    }

    pub fn has_struct(&self, name: &str) -> bool {
        self.struct_id(name).is_some()
    }

    pub fn has_block(&self, name: &str, signature: &str) -> bool {
        self.blocks
            .get(name)
            .is_some_and(|variants| variants.contains_key(signature))
    }

    /// Struct id by name, also trying the underscore-stripped spelling.
    pub fn struct_id(&self, name: &str) -> Option<DefId> {
        self.lookup(DefinitionKind::Struct, name)
            .or_else(|| self.lookup(DefinitionKind::Struct, trim_leading_underscores(name)))
    }

    /// The type-like definition a bare type name refers to: class,
    /// protocol, struct, union, typedef or enum, in that order.
    pub fn find_type(&self, name: &str) -> Option<&Definition> {
        [
            DefinitionKind::Class,
            DefinitionKind::Protocol,
            DefinitionKind::Struct,
            DefinitionKind::Union,
            DefinitionKind::Typedef,
            DefinitionKind::Enum,
        ]
        .into_iter()
        .find_map(|kind| match kind {
            DefinitionKind::Struct => self.struct_id(name),
            _ => self.lookup(kind, name),
        })
        .map(|id| self.get(id))
    }

    pub fn get_struct(&self, name: &str) -> Option<&RecordDefinition> {
        self.struct_id(name).and_then(|id| self.get(id).as_record())
    }

    pub fn get_union(&self, name: &str) -> Option<&RecordDefinition> {
        self.lookup(DefinitionKind::Union, name)
            .and_then(|id| self.get(id).as_record())
    }

    pub fn get_typedef(&self, name: &str) -> Option<&TypeDefinition> {
        self.lookup(DefinitionKind::Typedef, name)
            .and_then(|id| self.get(id).as_typedef())
    }

    // ========================================================================
    // DEPENDENCIES
    // ========================================================================

    /// Record a framework referenced by this run but excluded from it.
    pub fn add_dependency(&mut self, framework: impl Into<String>) {
        let framework = framework.into();
        if !framework.is_empty() {
            self.dependencies.insert(framework);
        }
    }

    /// Dependencies, sorted and de-duplicated.
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().map(String::as_str)
    }
}

fn record_shape(record: &RecordDefinition) -> RecordShape<'_> {
    RecordShape {
        union: record.kind == crate::model::RecordKind::Union,
        name: &record.base.name,
        fields: record
            .fields
            .iter()
            .map(|field| TypeShape {
                tag: field.ty.tag(),
                value: field.ty.value(),
                encoding: &field.ty.encoding,
            })
            .collect(),
    }
}

impl EncodingLookup for MetabaseTree {
    fn record(&self, name: &str) -> Option<RecordShape<'_>> {
        self.get_struct(name)
            .or_else(|| self.get_union(name))
            .map(record_shape)
    }

    fn typedef(&self, name: &str) -> Option<TypeShape<'_>> {
        self.get_typedef(name).map(|def| TypeShape {
            tag: def.ty.tag(),
            value: def.ty.value(),
            encoding: &def.ty.encoding,
        })
    }
}
