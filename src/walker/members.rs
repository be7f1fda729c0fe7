//! Member-level dispatch.

use super::visit::{AstWalker, returned_block};
use crate::ast::{CursorKind, Node};
use crate::model::{Argument, InterfaceDefinition, MethodDefinition, Property};
use crate::resolve::block_type;

impl AstWalker<'_> {
    /// Parameters of a function or method, discovering block parameters.
    pub(super) fn parameters(&mut self, node: &Node, owner: &str) -> Vec<Argument> {
        let mut arguments = Vec::new();
        for child in &node.children {
            match child.kind {
                CursorKind::ParmDecl => {
                    let ty = self.resolver().resolve_cursor(child);
                    arguments.push(Argument::new(child.display_name(), ty));
                    if let Some(block) = block_type(child) {
                        self.discover_block(block, Some(child));
                    }
                }
                kind if kind.is_ignorable_member() => {}
                _ => self.unsupported(owner, child),
            }
        }
        arguments
    }

    /// Fields of a struct or union. Nested record declarations are skipped;
    /// their fields reach the outer record through the field types.
    pub(super) fn fields(&mut self, node: &Node, owner: &str) -> Vec<Argument> {
        let mut fields = Vec::new();
        for child in &node.children {
            match child.kind {
                CursorKind::FieldDecl => {
                    let ty = self.resolver().resolve_cursor(child);
                    fields.push(Argument::new(child.display_name(), ty));
                    if let Some(block) = block_type(child) {
                        self.discover_block(block, Some(child));
                    }
                }
                CursorKind::StructDecl | CursorKind::UnionDecl => {}
                kind if kind.is_ignorable_member() => {}
                _ => self.unsupported(owner, child),
            }
        }
        fields
    }

    pub(super) fn interface_members(&mut self, node: &Node, interface: &mut InterfaceDefinition) {
        for child in &node.children {
            match child.kind {
                CursorKind::ObjcSuperClassRef => interface.superclass = Some(child.spelling.clone()),
                CursorKind::ObjcProtocolRef => interface.add_protocol(&child.spelling),
                kind if kind.is_method() => {
                    let method = self.method(child);
                    interface.add_method(method);
                }
                CursorKind::ObjcPropertyDecl => {
                    let property = self.property(child);
                    interface.add_property(property);
                }
                CursorKind::ObjcIvarDecl => {}
                kind if kind.is_ignorable_member() => {}
                _ => self.unsupported("interface", child),
            }
        }
    }

    fn method(&mut self, node: &Node) -> MethodDefinition {
        let returns = node
            .result_type
            .as_ref()
            .map(|ty| self.resolver().resolve(ty))
            .unwrap_or_default();
        if let Some(block) = node.result_type.as_ref().and_then(returned_block) {
            self.discover_block(block, None);
        }
        MethodDefinition {
            selector: node.spelling.clone(),
            encoding: node.encoding().to_string(),
            returns,
            arguments: self.parameters(node, "method"),
            instance: node.kind == CursorKind::ObjcInstanceMethodDecl,
            optional: node.optional,
        }
    }

    fn property(&self, node: &Node) -> Property {
        Property {
            name: node.display_name().to_string(),
            ty: self.resolver().resolve_cursor(node),
            attributes: node.property_attributes.clone(),
            optional: node.optional,
        }
    }
}
