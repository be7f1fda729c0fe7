//! Top-level declaration dispatch.

use std::collections::BTreeMap;

use super::context::{WalkContext, is_anonymous_name};
use crate::ast::{AstType, CursorKind, Node, TranslationUnit, TypeKind};
use crate::config::GeneratorConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink, codes};
use crate::filter::{AvailabilityGate, LocationFilter, framework_from_path, is_system_location};
use crate::model::{
    Definition, DefinitionBase, DefinitionKind, EnumDefinition, FunctionDefinition,
    InterfaceDefinition, InterfaceKind, RecordDefinition, RecordKind, Type, TypeDefinition,
    VarDefinition,
};
use crate::resolve::{TypeResolver, block_type};
use crate::tree::{DefId, MetabaseTree};

/// Builds a [`MetabaseTree`] from declaration nodes.
pub struct AstWalker<'a> {
    pub(super) config: &'a GeneratorConfig,
    pub(super) sink: &'a mut dyn DiagnosticSink,
    pub(super) ctx: WalkContext,
    pub(super) tree: MetabaseTree,
}

impl<'a> AstWalker<'a> {
    pub fn new(config: &'a GeneratorConfig, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            config,
            sink,
            ctx: WalkContext::default(),
            tree: MetabaseTree::new(config.policy()),
        }
    }

    /// Visit every top-level declaration and complete the tree.
    pub fn walk(mut self, unit: &TranslationUnit) -> MetabaseTree {
        for node in unit.declarations() {
            self.visit_declaration(node);
        }
        self.finish()
    }

    /// Gate and dispatch one top-level declaration.
    pub fn visit_declaration(&mut self, node: &Node) {
        if !is_declaration(node.kind) {
            return;
        }
        let introduced_in = match AvailabilityGate::check(node, &self.config.target_platform) {
            AvailabilityGate::Emit(version) => version,
            gate => {
                tracing::debug!(name = %node.display_name(), ?gate, "skipping declaration");
                return;
            }
        };
        self.ctx.enter(node.location.as_ref(), introduced_in);
        let pending = self.ctx.pending_record.take();
        tracing::debug!(kind = ?node.kind, name = %node.display_name(), "visiting declaration");

        match node.kind {
            CursorKind::ObjcInterfaceDecl => self.visit_interface(node, InterfaceKind::Class),
            CursorKind::ObjcProtocolDecl => self.visit_interface(node, InterfaceKind::Protocol),
            CursorKind::ObjcCategoryDecl => self.visit_category(node),
            CursorKind::TypedefDecl => self.visit_typedef(node, pending),
            CursorKind::EnumDecl => self.visit_enum(node),
            CursorKind::VarDecl => self.visit_var(node),
            CursorKind::FunctionDecl => self.visit_function(node),
            CursorKind::StructDecl => self.visit_record(node, RecordKind::Struct),
            CursorKind::UnionDecl => self.visit_record(node, RecordKind::Union),
            _ => {}
        }
    }

    // ========================================================================
    // SHARED
    // ========================================================================

    pub(super) fn resolver(&self) -> TypeResolver<'_> {
        TypeResolver::new(&self.tree)
    }

    /// Base fields for a definition at the current location.
    ///
    /// Applies the location filter and records any dependency it reports.
    pub(super) fn base(&mut self, name: impl Into<String>) -> DefinitionBase {
        let location = self.ctx.location.clone();
        let verdict =
            LocationFilter::new(self.tree.policy(), &self.config.sdk_path).check(&location.file);
        if let Some(dependency) = verdict.dependency {
            self.tree.add_dependency(dependency);
        }
        DefinitionBase {
            name: name.into(),
            framework: framework_from_path(&location.file).to_string(),
            introduced_in: self.ctx.introduced_in,
            third_party: !is_system_location(&location.file),
            excluded: verdict.excluded,
            location,
        }
    }

    /// Register a definition, reporting any definition it replaces.
    pub(super) fn register(&mut self, id: DefId) {
        let Some(previous) = self.tree.register(id) else {
            return;
        };
        let replaced = self.tree.get(previous).base().location.clone();
        let def = self.tree.get(id);
        let diagnostic = Diagnostic::info(
            codes::DEFINITION_OVERWRITTEN,
            format!(
                "{} '{}' replaces the definition at {replaced}",
                def.kind().as_str(),
                def.name()
            ),
        )
        .with_location(def.base().location.clone());
        self.sink.report(diagnostic);
    }

    pub(super) fn unsupported(&mut self, owner: &str, child: &Node) {
        let mut diagnostic = Diagnostic::warning(
            codes::UNSUPPORTED_MEMBER,
            format!(
                "not handled, {owner}: '{}' kind {:?}",
                child.display_name(),
                child.kind
            ),
        );
        if let Some(location) = &child.location {
            diagnostic = diagnostic.with_location(location.clone());
        }
        self.sink.report(diagnostic);
    }

    // ========================================================================
    // DECLARATIONS
    // ========================================================================

    fn visit_interface(&mut self, node: &Node, kind: InterfaceKind) {
        let mut interface = InterfaceDefinition::new(self.base(node.display_name()), kind);
        self.interface_members(node, &mut interface);
        let id = self.tree.alloc(Definition::Interface(interface));
        self.register(id);
    }

    /// Categories register as extensions keyed by the class they extend;
    /// several categories on one class merge into one extension. A category
    /// without a class reference is reported and skipped.
    fn visit_category(&mut self, node: &Node) {
        let Some(class_name) = node
            .children_of_kind(CursorKind::ObjcClassRef)
            .next()
            .map(|class| class.spelling.clone())
            .filter(|name| !name.is_empty())
        else {
            let mut diagnostic = Diagnostic::warning(
                codes::UNSUPPORTED_MEMBER,
                format!("category '{}' names no class", node.display_name()),
            );
            if let Some(location) = &node.location {
                diagnostic = diagnostic.with_location(location.clone());
            }
            self.sink.report(diagnostic);
            return;
        };

        let mut category =
            InterfaceDefinition::new(self.base(class_name.as_str()), InterfaceKind::Category);
        category.categories.push(node.display_name().to_string());
        self.interface_members(node, &mut category);

        if let Some(existing) = self.tree.lookup(DefinitionKind::Extension, &class_name) {
            if let Some(extension) = self.tree.get_mut(existing).as_interface_mut() {
                extension.merge(category);
                return;
            }
        }
        let id = self.tree.alloc(Definition::Interface(category));
        self.register(id);
    }

    /// A typedef of an anonymous record names and registers that record.
    fn visit_typedef(&mut self, node: &Node, pending: Option<DefId>) {
        let name = node.display_name().to_string();
        let mut ty = match node.underlying_type.as_ref() {
            Some(underlying) => self.resolver().resolve(underlying),
            None => self.resolver().resolve_cursor(node),
        };

        if ty.is("record") {
            if let Some(record) = pending {
                self.adopt_record(record, &name, &mut ty);
            }
        }

        let def = TypeDefinition {
            base: self.base(name),
            ty,
        };
        let id = self.tree.alloc(Definition::Typedef(def));
        self.register(id);

        if let Some(block) = block_type(node) {
            self.discover_block(block, Some(node));
        }
    }

    fn adopt_record(&mut self, id: DefId, name: &str, ty: &mut Type) {
        let def = self.tree.get_mut(id);
        let tag = match def.kind() {
            DefinitionKind::Union => RecordKind::Union.tag(),
            _ => RecordKind::Struct.tag(),
        };
        def.base_mut().name = name.to_string();
        if let Some(record) = def.as_record_mut() {
            record.ty.set_value(name);
        }
        self.register(id);

        let registered = self.tree.get(id).name().to_string();
        tracing::debug!(name = %registered, tag, "typedef named anonymous record");
        ty.set_tag(tag);
        ty.set_value(&registered);
    }

    fn visit_enum(&mut self, node: &Node) {
        let mut name = node.display_name().to_string();
        if is_anonymous_name(&name) {
            name = self.ctx.next_anonymous_enum();
        }
        let values: BTreeMap<String, i64> = node
            .children_of_kind(CursorKind::EnumConstantDecl)
            .map(|constant| {
                (
                    constant.display_name().to_string(),
                    constant.enum_value.unwrap_or_default(),
                )
            })
            .collect();
        let def = EnumDefinition {
            base: self.base(name),
            values,
        };
        let id = self.tree.alloc(Definition::Enum(def));
        self.register(id);
    }

    fn visit_var(&mut self, node: &Node) {
        let ty = self.resolver().resolve_cursor(node);
        let def = VarDefinition {
            base: self.base(node.display_name()),
            ty,
        };
        let id = self.tree.alloc(Definition::Var(def));
        self.register(id);

        if let Some(block) = block_type(node) {
            self.discover_block(block, Some(node));
        }
    }

    fn visit_function(&mut self, node: &Node) {
        let returns = node
            .result_type
            .as_ref()
            .map(|ty| self.resolver().resolve(ty))
            .unwrap_or_default();
        if let Some(block) = node.result_type.as_ref().and_then(returned_block) {
            self.discover_block(block, None);
        }
        let arguments = self.parameters(node, "function");

        let def = FunctionDefinition {
            base: self.base(node.spelling.as_str()),
            returns,
            arguments,
            variadic: node.variadic,
        };
        let id = self.tree.alloc(Definition::Function(def));
        self.register(id);
    }

    /// Named records register before their fields so self-references
    /// resolve; anonymous ones wait for the next typedef.
    fn visit_record(&mut self, node: &Node, kind: RecordKind) {
        let mut name = node.display_name().to_string();
        if name.is_empty() {
            name = self.resolver().resolve_cursor(node).value().to_string();
        }
        let record = RecordDefinition::new(self.base(name), kind);
        let anonymous = record.is_anonymous();
        let id = self.tree.alloc(match kind {
            RecordKind::Struct => Definition::Struct(record),
            RecordKind::Union => Definition::Union(record),
        });

        if anonymous {
            self.ctx.pending_record = Some(id);
        } else {
            self.register(id);
        }

        let fields = self.fields(node, kind.tag());
        if let Some(record) = self.tree.get_mut(id).as_record_mut() {
            record.fields = fields;
        }
    }
}

/// Kinds dispatched at the top level.
fn is_declaration(kind: CursorKind) -> bool {
    matches!(
        kind,
        CursorKind::ObjcInterfaceDecl
            | CursorKind::ObjcProtocolDecl
            | CursorKind::ObjcCategoryDecl
            | CursorKind::TypedefDecl
            | CursorKind::EnumDecl
            | CursorKind::VarDecl
            | CursorKind::FunctionDecl
            | CursorKind::StructDecl
            | CursorKind::UnionDecl
    )
}

/// The block type a function or method returns.
pub(super) fn returned_block(ty: &AstType) -> Option<&AstType> {
    let ty = ty.canonical().named();
    (ty.kind == TypeKind::BlockPointer).then_some(ty)
}
