//! Block type discovery.

use super::visit::AstWalker;
use crate::ast::{AstType, CursorKind, Node, TypeKind};
use crate::base::spelling::block_return_spelling;
use crate::base::text::clean_spelling;
use crate::filter::framework_from_path;
use crate::model::{Argument, BlockDefinition, Definition, Type};
use crate::resolve::block_type;

impl AstWalker<'_> {
    /// Register the block type `ty` and, transitively, the blocks among its
    /// parameters.
    ///
    /// Blocks are keyed by the framework being generated and their
    /// signature; a signature already registered under that name is skipped.
    /// Parameters come from the declaring node's `ParmDecl` children when it
    /// has any, and from the type's parameter list otherwise.
    pub(super) fn discover_block(&mut self, ty: &AstType, declaring: Option<&Node>) {
        let signature = clean_spelling(&ty.spelling);
        let owner = self.block_owner();
        if owner.is_empty() || signature.is_empty() || self.tree.has_block(&owner, &signature) {
            return;
        }

        let params: Vec<&Node> = declaring
            .map(|node| node.children_of_kind(CursorKind::ParmDecl).collect())
            .unwrap_or_default();
        let arguments: Vec<Argument> = if params.is_empty() {
            ty.arg_types
                .iter()
                .map(|arg| Argument::new("", self.resolver().resolve_declared(arg, &arg.encoding)))
                .collect()
        } else {
            params
                .iter()
                .map(|param| {
                    let ty = param
                        .ty
                        .as_ref()
                        .map(|ty| self.resolver().resolve_declared(ty, param.encoding()))
                        .unwrap_or_default();
                    Argument::new(param.display_name(), ty)
                })
                .collect()
        };

        let returns = block_return_spelling(&signature);
        let block = BlockDefinition {
            base: self.base(owner),
            signature,
            returns: Type::from_spelling(&returns),
            arguments,
        };
        tracing::debug!(name = %block.base.name, signature = %block.signature, "discovered block");
        let id = self.tree.alloc(Definition::Block(block));
        if let Err(existing) = self.tree.register_block(id) {
            tracing::debug!(?existing, "block signature already registered");
        }

        if params.is_empty() {
            for arg in &ty.arg_types {
                let arg = arg.canonical().named();
                if arg.kind == TypeKind::BlockPointer {
                    self.discover_block(arg, None);
                }
            }
        } else {
            for param in params {
                if let Some(inner) = block_type(param) {
                    self.discover_block(inner, Some(param));
                }
            }
        }
    }

    /// Name blocks are registered under: the configured framework name, or
    /// the framework of the current location.
    fn block_owner(&self) -> String {
        match self.config.framework_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => framework_from_path(&self.ctx.location.file).to_string(),
        }
    }
}
