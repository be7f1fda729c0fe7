use crate::ast::{AstType, Node, TypeKind};
use crate::base::text::{clean_spelling, strip_template_args, trim_leading_underscores};
use crate::encoding::{INSTANCETYPE, tag_for_encoding, tag_for_kind};
use crate::model::Type;
use crate::tree::MetabaseTree;

/// Visit-time type resolution against the registry built so far.
#[derive(Clone, Copy)]
pub struct TypeResolver<'a> {
    tree: &'a MetabaseTree,
}

impl<'a> TypeResolver<'a> {
    pub fn new(tree: &'a MetabaseTree) -> Self {
        Self { tree }
    }

    /// Resolve a bare front-end type.
    ///
    /// `instancetype` is kept as a typedef so constructors stay
    /// recognizable. Other typedefs resolve to their canonical type and
    /// elaborated types to their named type.
    pub fn resolve(&self, ty: &AstType) -> Type {
        if ty.kind == TypeKind::Typedef && clean_spelling(&ty.spelling) == INSTANCETYPE {
            return Type::new(tag_for_kind(ty.kind), INSTANCETYPE, "");
        }

        let ty = ty.canonical().named();
        let tag = tag_for_kind(ty.kind);
        let value = if tag == "block" {
            ty.spelling.clone()
        } else {
            strip_template_args(&ty.spelling)
        };

        let mut resolved = Type::new(tag, &value, ty.encoding.clone());
        if resolved.is("unexposed") {
            resolved.set_tag(tag_for_encoding(&ty.encoding));
        }

        if resolved.is("record") && resolved.value().contains("struct ") {
            let stripped = resolved.value().replace("struct ", "");
            let name = trim_leading_underscores(stripped.trim()).to_string();
            self.bind_struct(&mut resolved, &name);
        }
        tracing::trace!(tag = %resolved.tag(), value = %resolved.value(), "resolved type");
        resolved
    }

    /// Resolve the type of a declaration cursor.
    ///
    /// A record reached through a typedef binds to the struct registered
    /// under the typedef name, or else to the struct its spelling names
    /// (the first registered struct wins).
    pub fn resolve_cursor(&self, node: &Node) -> Type {
        let Some(ty) = node.ty.as_ref() else {
            return Type::default();
        };
        let mut resolved = self.resolve(ty);
        if ty.kind == TypeKind::Typedef && resolved.is("record") {
            let typedef_name = clean_spelling(&ty.spelling);
            if !self.bind_struct(&mut resolved, &typedef_name)
                && resolved.value().contains("struct ")
            {
                let name = resolved.value().replace("struct ", "");
                self.bind_struct(&mut resolved, name.trim());
            }
        }
        resolved
    }

    /// Resolve a parameter type as spelled, with the declaration's own
    /// encoding.
    pub fn resolve_declared(&self, ty: &AstType, encoding: &str) -> Type {
        let mut resolved = Type::new(tag_for_kind(ty.kind), &ty.spelling, encoding);
        if resolved.is("unexposed") {
            resolved.set_tag(tag_for_encoding(encoding));
        }
        resolved
    }

    fn bind_struct(&self, ty: &mut Type, name: &str) -> bool {
        if !self.tree.has_struct(name) {
            return false;
        }
        ty.set_tag("struct");
        ty.set_value(name);
        true
    }
}

/// The block type a declaration carries, if any.
///
/// Typedef declarations are checked through their underlying type.
pub fn block_type(node: &Node) -> Option<&AstType> {
    let declared = node.underlying_type.as_ref().or(node.ty.as_ref())?;
    let ty = declared.canonical().named();
    (ty.kind == TypeKind::BlockPointer).then_some(ty)
}
