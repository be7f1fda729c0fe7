use crate::base::spelling::{
    is_block_spelling, is_double_function_pointer_spelling, is_function_pointer_spelling,
};
use crate::base::text::{strip_keyword, without_pointers};
use crate::diagnostics::{Diagnostic, DiagnosticSink, codes};
use crate::encoding::{
    BLOCK_ENCODING, CLASS_ENCODING, DOUBLE_FUNCTION_POINTER_ENCODING, Encoded,
    FUNCTION_POINTER_ENCODING, INSTANCETYPE, OBJECT_ENCODING, SELECTOR_ENCODING, Synthesizer,
    encoding_for_tag, filter_encoding, needs_resolving, primitive_encoding, tag_for_encoding,
};
use crate::model::Type;
use crate::tree::MetabaseTree;

/// Placeholder spellings of generic object parameters.
const OBJECT_PLACEHOLDERS: &[&str] = &["id", "ObjectType", "KeyType"];

/// Post-traversal patching of return and argument types.
///
/// Runs against the complete tree, so forward references resolve.
pub struct DeferredResolver<'a> {
    tree: &'a MetabaseTree,
    sink: &'a mut dyn DiagnosticSink,
    max_depth: usize,
}

impl<'a> DeferredResolver<'a> {
    pub fn new(tree: &'a MetabaseTree, sink: &'a mut dyn DiagnosticSink, max_depth: usize) -> Self {
        Self {
            tree,
            sink,
            max_depth,
        }
    }

    /// A copy of `ty` with tag and encoding patched.
    pub fn resolve(&mut self, ty: &Type) -> Type {
        let (tag, encoding) = self.resolve_parts(ty);
        Type::new(&tag, ty.value(), encoding)
    }

    fn resolve_parts(&mut self, ty: &Type) -> (String, String) {
        let tag = ty.tag();
        let value = ty.value();
        let encoding = filter_encoding(&ty.encoding);
        let mut via_typedef = false;

        if tag == "unexposed" || needs_resolving(encoding) {
            if let Some(resolved) = self.resolve_by_spelling(value) {
                return resolved;
            }
            if value.contains("enum ") {
                return pair("enum", "i");
            }
            if self.tree.has_struct(value) {
                return pair("struct", &self.struct_encoding(value));
            }
            if self.tree.has_typedef(value) {
                via_typedef = true;
            } else if tag != "typedef" {
                let encoding = if needs_resolving(encoding) {
                    encoding_for_tag(tag)
                } else {
                    encoding
                };
                let tag = if tag == "unexposed" {
                    tag_for_encoding(encoding)
                } else {
                    tag
                };
                return pair(tag, encoding);
            }
        }

        if tag == "typedef" || via_typedef {
            if let Some(resolved) = self.resolve_through_typedef(value) {
                return resolved;
            }
            if value == INSTANCETYPE {
                return pair("obj_interface", OBJECT_ENCODING);
            }
            self.sink.report(Diagnostic::warning(
                codes::UNHANDLED_TYPEDEF,
                format!("not sure how to handle typedef '{tag}' = '{value}'"),
            ));
        }

        if needs_resolving(encoding) {
            return pair(tag, encoding_for_tag(tag));
        }
        pair(tag, encoding)
    }

    /// Rules keyed on the spelling alone.
    fn resolve_by_spelling(&self, value: &str) -> Option<(String, String)> {
        let resolved = if OBJECT_PLACEHOLDERS.contains(&value) {
            pair("id", OBJECT_ENCODING)
        } else if is_block_spelling(value) {
            pair("block", BLOCK_ENCODING)
        } else if is_double_function_pointer_spelling(value) {
            pair("function_callback", DOUBLE_FUNCTION_POINTER_ENCODING)
        } else if is_function_pointer_spelling(value) {
            pair("function_callback", FUNCTION_POINTER_ENCODING)
        } else if value == "Class" || value.contains("Class<") {
            pair("Class", CLASS_ENCODING)
        } else if value.contains('<') && value.contains('>') {
            pair("obj_interface", OBJECT_ENCODING)
        } else if value.contains('*') {
            let pointee = without_pointers(value);
            if self.tree.has_class(&pointee) {
                pair("obj_interface", OBJECT_ENCODING)
            } else {
                pair("pointer", &format!("^{}", encoding_for_tag(&pointee)))
            }
        } else if value == INSTANCETYPE {
            pair("obj_interface", OBJECT_ENCODING)
        } else if value == "SEL" {
            pair("SEL", SELECTOR_ENCODING)
        } else {
            return None;
        };
        Some(resolved)
    }

    fn resolve_through_typedef(&mut self, name: &str) -> Option<(String, String)> {
        let tree = self.tree;
        let aliased = &tree.get_typedef(name)?.ty;
        let tag = aliased.tag();
        let value = aliased.value();

        match tag {
            "enum" => {
                if self.tree.has_enum(strip_keyword(value, "enum ")) {
                    return Some(pair("enum", "i"));
                }
            }
            "record" => {
                let record = strip_keyword(value, "struct ");
                if self.tree.has_struct(record) {
                    return Some(pair("struct", &self.struct_encoding(record)));
                }
            }
            _ => {}
        }

        let encoding = match primitive_encoding(tag) {
            Some(code) => code.to_string(),
            None if !needs_resolving(&aliased.encoding) => {
                filter_encoding(&aliased.encoding).to_string()
            }
            None => self.synthesize(tag, value).encoding,
        };
        Some((tag.to_string(), encoding))
    }

    fn struct_encoding(&mut self, name: &str) -> String {
        let tree = self.tree;
        let Some(record) = tree.get_struct(name) else {
            return encoding_for_tag("struct").to_string();
        };
        self.synthesize(record.ty.tag(), record.ty.value()).encoding
    }

    fn synthesize(&mut self, tag: &str, value: &str) -> Encoded {
        Synthesizer::new(self.tree, &mut *self.sink, self.max_depth).encode(tag, value)
    }
}

fn pair(tag: &str, encoding: &str) -> (String, String) {
    (tag.to_string(), encoding.to_string())
}
