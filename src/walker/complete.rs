//! Post-traversal completion.

use std::collections::BTreeSet;

use super::visit::AstWalker;
use crate::base::text::{strip_keyword, without_pointers};
use crate::config::FilterPolicy;
use crate::model::{Definition, DefinitionKind, Type};
use crate::tree::MetabaseTree;

/// Registry categories whose definitions can reference other types.
const REFERRING_KINDS: [DefinitionKind; 9] = [
    DefinitionKind::Class,
    DefinitionKind::Protocol,
    DefinitionKind::Extension,
    DefinitionKind::Function,
    DefinitionKind::Struct,
    DefinitionKind::Union,
    DefinitionKind::Enum,
    DefinitionKind::Typedef,
    DefinitionKind::Var,
];

impl AstWalker<'_> {
    /// Fold categories into their classes and, when system APIs are
    /// excluded, record the frameworks of excluded definitions that
    /// included ones refer to.
    pub(super) fn finish(mut self) -> MetabaseTree {
        let folded = self.tree.fold_extensions();
        if *self.tree.policy() == FilterPolicy::ExcludeSystem {
            for framework in referenced_excluded_frameworks(&self.tree) {
                self.tree.add_dependency(framework);
            }
        }
        tracing::debug!(
            definitions = self.tree.len(),
            folded,
            dependencies = self.tree.dependencies().count(),
            "walk complete"
        );
        self.tree
    }
}

fn referenced_excluded_frameworks(tree: &MetabaseTree) -> BTreeSet<String> {
    let included = REFERRING_KINDS
        .iter()
        .flat_map(|kind| tree.entries(*kind))
        .map(|(_, def)| def)
        .chain(tree.blocks().into_iter().flat_map(|(_, variants)| variants))
        .filter(|def| !def.is_excluded());

    let mut frameworks = BTreeSet::new();
    for def in included {
        for ty in def.referenced_types() {
            if let Some(target) = referenced_definition(tree, ty) {
                if target.is_excluded() && !target.base().framework.is_empty() {
                    frameworks.insert(target.base().framework.clone());
                }
            }
        }
    }
    frameworks
}

/// Definition a type's spelling names, ignoring pointers and tag keywords.
fn referenced_definition<'t>(tree: &'t MetabaseTree, ty: &Type) -> Option<&'t Definition> {
    let bare = without_pointers(ty.value());
    let name = ["struct ", "union ", "enum "]
        .iter()
        .fold(bare.as_str(), |name, keyword| strip_keyword(name, keyword));
    tree.find_type(name)
}
