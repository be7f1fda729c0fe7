//! Building the document from a completed tree.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::document::Metabase;
use super::entries::{
    ArgumentEntry, BaseEntry, BlockEntry, EncodedTypeEntry, EnumEntry, FieldEntry, FunctionEntry,
    InterfaceEntry, MethodEntry, PropertyEntry, RecordEntry, ValueEntry,
};
use super::metadata::Metadata;
use crate::config::GeneratorConfig;
use crate::diagnostics::DiagnosticSink;
use crate::encoding::{Synthesizer, filter_encoding, needs_resolving};
use crate::model::{
    Argument, BlockDefinition, Definition, DefinitionBase, DefinitionKind, EnumDefinition,
    FunctionDefinition, InterfaceDefinition, MethodDefinition, Property, RecordDefinition, Type,
};
use crate::resolve::DeferredResolver;
use crate::tree::MetabaseTree;

/// Turns a [`MetabaseTree`] into a [`Metabase`].
///
/// Return and argument types go through [`DeferredResolver`]; typedef,
/// variable, field and property types with a missing encoding are
/// synthesized.
/// Excluded definitions are skipped.
pub struct Emitter<'a> {
    tree: &'a MetabaseTree,
    config: &'a GeneratorConfig,
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> Emitter<'a> {
    pub fn new(
        tree: &'a MetabaseTree,
        config: &'a GeneratorConfig,
        sink: &'a mut dyn DiagnosticSink,
    ) -> Self {
        Self { tree, config, sink }
    }

    /// Emit every section, stamping the metadata with `generated`.
    pub fn emit(mut self, generated: DateTime<Utc>) -> Metabase {
        let tree = self.tree;
        let metabase = Metabase {
            typedefs: self.section(DefinitionKind::Typedef, |this, def| {
                def.as_typedef().map(|t| this.value(&t.base, &t.ty, false))
            }),
            classes: self.section(DefinitionKind::Class, |this, def| {
                def.as_interface().map(|i| this.interface(i))
            }),
            extensions: self.section(DefinitionKind::Extension, |this, def| {
                def.as_interface().map(|i| this.interface(i))
            }),
            protocols: self.section(DefinitionKind::Protocol, |this, def| {
                def.as_interface().map(|i| this.interface(i))
            }),
            enums: self.section(DefinitionKind::Enum, |this, def| match def {
                Definition::Enum(e) => Some(this.enumeration(e)),
                _ => None,
            }),
            vars: self.section(DefinitionKind::Var, |this, def| match def {
                Definition::Var(v) => Some(this.value(&v.base, &v.ty, true)),
                _ => None,
            }),
            functions: self.section(DefinitionKind::Function, |this, def| match def {
                Definition::Function(f) => Some(this.function(f)),
                _ => None,
            }),
            structs: self.section(DefinitionKind::Struct, |this, def| {
                def.as_record().map(|r| this.record(r))
            }),
            unions: self.section(DefinitionKind::Union, |this, def| {
                def.as_record().map(|r| this.record(r))
            }),
            blocks: self.blocks(),
            metadata: Metadata::new(self.config, tree.dependencies(), generated),
        };
        tracing::debug!(definitions = metabase.definition_count(), "emitted metabase");
        metabase
    }

    /// Non-excluded definitions of one category, keyed by registered name.
    fn section<T>(
        &mut self,
        kind: DefinitionKind,
        mut entry: impl FnMut(&mut Self, &'a Definition) -> Option<T>,
    ) -> BTreeMap<String, T> {
        let tree = self.tree;
        let mut section = BTreeMap::new();
        for (name, def) in tree.entries(kind) {
            if def.is_excluded() {
                continue;
            }
            if let Some(value) = entry(self, def) {
                section.insert(name.to_string(), value);
            }
        }
        section
    }

    fn blocks(&mut self) -> BTreeMap<String, Vec<BlockEntry>> {
        let tree = self.tree;
        let mut blocks = BTreeMap::new();
        for (name, variants) in tree.blocks() {
            let entries: Vec<BlockEntry> = variants
                .into_iter()
                .filter(|def| !def.is_excluded())
                .filter_map(Definition::as_block)
                .map(|block| self.block(block))
                .collect();
            if !entries.is_empty() {
                blocks.insert(name.to_string(), entries);
            }
        }
        blocks
    }

    // ========================================================================
    // TYPES
    // ========================================================================

    fn resolved(&mut self, ty: &Type) -> EncodedTypeEntry {
        let resolved =
            DeferredResolver::new(self.tree, &mut *self.sink, self.config.max_encoding_depth)
                .resolve(ty);
        EncodedTypeEntry {
            tag: resolved.tag().to_string(),
            value: resolved.value().to_string(),
            encoding: resolved.encoding,
        }
    }

    fn arguments(&mut self, arguments: &[Argument]) -> Vec<ArgumentEntry> {
        arguments
            .iter()
            .map(|arg| {
                let ty = self.resolved(&arg.ty);
                argument_entry(&arg.name, ty)
            })
            .collect()
    }

    /// Keep a usable encoding; synthesize a missing one, adopting the
    /// record the synthesizer bound the type to.
    fn synthesized(&mut self, ty: &Type) -> EncodedTypeEntry {
        if !needs_resolving(filter_encoding(&ty.encoding)) {
            return EncodedTypeEntry {
                tag: ty.tag().to_string(),
                value: ty.value().to_string(),
                encoding: ty.encoding.clone(),
            };
        }
        let encoded = Synthesizer::new(self.tree, &mut *self.sink, self.config.max_encoding_depth)
            .encode(ty.tag(), ty.value());
        let (tag, value) = match encoded.rebound {
            Some(rebound) => (rebound.tag.to_string(), rebound.name),
            None => (ty.tag().to_string(), ty.value().to_string()),
        };
        EncodedTypeEntry {
            tag,
            value,
            encoding: encoded.encoding,
        }
    }

    // ========================================================================
    // DEFINITIONS
    // ========================================================================

    fn interface(&mut self, interface: &InterfaceDefinition) -> InterfaceEntry {
        let methods = interface
            .methods
            .iter()
            .map(|(selector, method)| (selector.clone(), self.method(method)))
            .collect();
        let properties = interface
            .properties
            .iter()
            .map(|(name, property)| (name.clone(), self.property(property)))
            .collect();
        InterfaceEntry {
            base: base_entry(&interface.base, true),
            superclass: interface.superclass.clone(),
            protocols: interface.protocols.clone(),
            categories: interface.categories.clone(),
            methods,
            properties,
        }
    }

    fn method(&mut self, method: &MethodDefinition) -> MethodEntry {
        MethodEntry {
            selector: method.selector.clone(),
            name: method.name(),
            encoding: method.encoding.clone(),
            returns: self.resolved(&method.returns),
            arguments: self.arguments(&method.arguments),
            instance: method.instance,
            optional: method.optional,
            constructor: method.is_constructor(),
        }
    }

    fn function(&mut self, function: &FunctionDefinition) -> FunctionEntry {
        let arguments = self.arguments(&function.arguments);
        FunctionEntry {
            base: base_entry(&function.base, true),
            returns: self.resolved(&function.returns),
            variadic: function.variadic && !arguments.is_empty(),
            arguments,
        }
    }

    fn block(&mut self, block: &BlockDefinition) -> BlockEntry {
        BlockEntry {
            base: base_entry(&block.base, true),
            encoding: block.encoding().to_string(),
            returns: self.resolved(&block.returns),
            arguments: self.arguments(&block.arguments),
            tag: "block",
            signature: block.signature.clone(),
        }
    }

    fn record(&mut self, record: &RecordDefinition) -> RecordEntry {
        let fields = record
            .fields
            .iter()
            .map(|field| {
                let ty = self.synthesized(&field.ty);
                FieldEntry {
                    name: (!field.name.is_empty()).then(|| field.name.clone()),
                    tag: ty.tag,
                    encoding: ty.encoding,
                }
            })
            .collect();
        RecordEntry {
            base: base_entry(&record.base, true),
            fields,
        }
    }

    fn property(&mut self, property: &Property) -> PropertyEntry {
        PropertyEntry {
            name: property.name.clone(),
            ty: self.synthesized(&property.ty),
            attributes: property.attribute_names(),
            optional: property.optional,
        }
    }

    fn enumeration(&mut self, enumeration: &EnumDefinition) -> EnumEntry {
        EnumEntry {
            base: base_entry(&enumeration.base, false),
            values: enumeration.values.clone(),
        }
    }

    fn value(&mut self, base: &DefinitionBase, ty: &Type, named: bool) -> ValueEntry {
        let ty = self.synthesized(ty);
        ValueEntry {
            base: base_entry(base, named),
            tag: ty.tag,
            value: ty.value,
            encoding: ty.encoding,
        }
    }
}

fn base_entry(base: &DefinitionBase, named: bool) -> BaseEntry {
    BaseEntry {
        name: named.then(|| base.name.clone()),
        framework: base.framework.clone(),
        thirdparty: base.third_party,
        filename: base.location.file.clone(),
        line: base.location.line.to_string(),
        introduced_in: base.introduced_in,
    }
}

fn argument_entry(name: &str, ty: EncodedTypeEntry) -> ArgumentEntry {
    ArgumentEntry {
        name: (!name.is_empty()).then(|| name.to_string()),
        tag: ty.tag,
        value: ty.value,
        encoding: ty.encoding,
    }
}
