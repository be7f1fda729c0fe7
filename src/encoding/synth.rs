//! Encoding synthesis for types the front-end left unencoded.

use rustc_hash::FxHashSet;

use super::table::{
    BLOCK_ENCODING, DOUBLE_FUNCTION_POINTER_ENCODING, FUNCTION_POINTER_ENCODING, OBJECT_ENCODING,
    UNKNOWN_ENCODING, encoding_for_tag, filter_encoding, needs_resolving, primitive_encoding,
};
use crate::base::spelling::{
    is_block_spelling, is_double_function_pointer_spelling, is_function_pointer_spelling,
};
use crate::base::text::{clean_spelling, is_identifier, pointer_depth, without_pointers};
use crate::diagnostics::{Diagnostic, DiagnosticSink, codes};

/// Borrowed view of a type triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeShape<'a> {
    pub tag: &'a str,
    pub value: &'a str,
    pub encoding: &'a str,
}

/// Borrowed view of a registered struct or union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordShape<'a> {
    pub union: bool,
    pub name: &'a str,
    pub fields: Vec<TypeShape<'a>>,
}

/// Registry lookups the synthesizer needs.
pub trait EncodingLookup {
    /// Struct or union registered under `name`.
    fn record(&self, name: &str) -> Option<RecordShape<'_>>;
    /// Aliased type of the typedef registered under `name`.
    fn typedef(&self, name: &str) -> Option<TypeShape<'_>>;
}

/// A type the synthesizer bound to a registered struct or union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rebound {
    pub tag: &'static str,
    pub name: String,
}

/// Result of synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub encoding: String,
    /// Set when the type turned out to name a registered record.
    pub rebound: Option<Rebound>,
}

impl Encoded {
    fn plain(encoding: impl Into<String>) -> Self {
        Self {
            encoding: encoding.into(),
            rebound: None,
        }
    }

    fn unknown() -> Self {
        Self::plain(UNKNOWN_ENCODING)
    }
}

/// Recursive encoder over `(tag, value)` pairs.
///
/// Depth is bounded and records being encoded are tracked, so
/// self-referential types encode their cycle as `?`.
pub struct Synthesizer<'a, L: EncodingLookup + ?Sized> {
    lookup: &'a L,
    sink: &'a mut dyn DiagnosticSink,
    max_depth: usize,
    depth: usize,
    visiting: FxHashSet<String>,
}

impl<'a, L: EncodingLookup + ?Sized> Synthesizer<'a, L> {
    pub fn new(lookup: &'a L, sink: &'a mut dyn DiagnosticSink, max_depth: usize) -> Self {
        Self {
            lookup,
            sink,
            max_depth,
            depth: 0,
            visiting: FxHashSet::default(),
        }
    }

    /// Encode a type from its tag and spelling.
    pub fn encode(&mut self, tag: &str, value: &str) -> Encoded {
        let tag = clean_spelling(tag);
        let value = clean_spelling(value);
        if tag.is_empty() && value.is_empty() {
            return Encoded::unknown();
        }
        if self.depth >= self.max_depth {
            self.report(
                codes::ENCODING_RECURSION,
                format!("encoding depth limit reached at '{tag}' ({value})"),
            );
            return Encoded::unknown();
        }
        self.depth += 1;
        let encoded = self.encode_cleaned(&tag, value);
        self.depth -= 1;
        tracing::trace!(%tag, encoding = %encoded.encoding, "synthesized encoding");
        encoded
    }

    /// Encoding string only.
    pub fn encode_str(&mut self, tag: &str, value: &str) -> String {
        self.encode(tag, value).encoding
    }

    /// Encoding of a registered struct (`{Name=...}`) or union (`(Name=...)`).
    pub fn encode_record(&mut self, record: &RecordShape<'_>) -> String {
        if !self.visiting.insert(record.name.to_string()) {
            self.report(
                codes::ENCODING_RECURSION,
                format!("'{}' contains itself", record.name),
            );
            return UNKNOWN_ENCODING.to_string();
        }
        let (open, close) = if record.union { ('(', ')') } else { ('{', '}') };
        let mut encoding = format!("{open}{}=", record.name);
        for field in &record.fields {
            encoding.push_str(&self.encode_str(field.tag, field.value));
        }
        encoding.push(close);
        self.visiting.remove(record.name);
        filter_encoding(&encoding).to_string()
    }

    fn encode_cleaned(&mut self, tag: &str, mut value: String) -> Encoded {
        if let Some(code) = primitive_encoding(tag) {
            return Encoded::plain(code);
        }
        if value == "id" {
            return Encoded::plain(OBJECT_ENCODING);
        }
        if is_function_pointer_spelling(&value) {
            return Encoded::plain(FUNCTION_POINTER_ENCODING);
        }
        if is_double_function_pointer_spelling(&value) {
            return Encoded::plain(DOUBLE_FUNCTION_POINTER_ENCODING);
        }
        if is_block_spelling(&value) {
            return Encoded::plain(BLOCK_ENCODING);
        }

        match tag {
            "pointer" => return Encoded::plain(self.encode_pointer(&value)),
            "function_proto" | "unexposed" => return Encoded::unknown(),
            "incomplete_array" => {
                if let Some(begin) = value.find('[') {
                    let element = value[..begin].trim();
                    let inner = self.encode_str(element, element);
                    return Encoded::plain(format!("[{inner}]"));
                }
            }
            "constant_array" => {
                if let (Some(begin), Some(end)) = (value.find('['), value.find(']')) {
                    let end = end.max(begin + 1);
                    let element = value[..begin].trim();
                    let size = value[begin + 1..end].trim();
                    let inner = self.encode_str(element, element);
                    return Encoded::plain(format!("[{size}{inner}]"));
                }
            }
            _ => {}
        }

        if value.is_empty() {
            return Encoded::plain(if tag == "struct" { "{}" } else { UNKNOWN_ENCODING });
        }

        for keyword in ["struct ", "union ", "const "] {
            if let Some(pos) = value.find(keyword) {
                value = value[pos + keyword.len()..].to_string();
            }
        }
        let value = value.trim();

        if value.contains('*') {
            let pointee = without_pointers(value);
            let inner = self.encode_str(&pointee, &pointee);
            return Encoded::plain(format!("^{inner}"));
        }

        // Registry keys are bare identifiers.
        if is_identifier(value) {
            let lookup = self.lookup;
            if let Some(record) = lookup.record(value) {
                let encoding = self.encode_record(&record);
                return Encoded {
                    encoding,
                    rebound: Some(Rebound {
                        tag: if record.union { "union" } else { "struct" },
                        name: record.name.to_string(),
                    }),
                };
            }

            if let Some(aliased) = lookup.typedef(value) {
                if !needs_resolving(aliased.encoding) {
                    return Encoded::plain(filter_encoding(aliased.encoding));
                }
                if !self.visiting.insert(value.to_string()) {
                    self.report(
                        codes::ENCODING_RECURSION,
                        format!("typedef '{value}' refers to itself"),
                    );
                    return Encoded::unknown();
                }
                let encoding = self.encode_str(aliased.tag, aliased.value);
                self.visiting.remove(value);
                return Encoded::plain(encoding);
            }
        }

        if tag == "struct" || tag == "record" || tag.starts_with("struct ") {
            // Hidden or never-declared record.
            return Encoded::plain(format!("{{{value}=}}"));
        }

        if let Some(start) = tag.find("sizeof(") {
            let rest = &tag[start + "sizeof(".len()..];
            let inner = rest.split(')').next().unwrap_or_default();
            return Encoded::plain(encoding_for_tag(inner.trim()));
        }

        if tag == "complex" {
            let base = value.replace("_Complex", "");
            return Encoded::plain(encoding_for_tag(base.trim()));
        }

        self.report(
            codes::UNRESOLVED_ENCODING,
            format!("don't know how to encode '{tag}' ({value})"),
        );
        Encoded::unknown()
    }

    fn encode_pointer(&mut self, value: &str) -> String {
        let levels = pointer_depth(value);
        let pointee = without_pointers(value);
        let inner = self.encode_str(&pointee, &pointee);
        if inner == "c" {
            // char * is a C string
            return format!("{}*", "^".repeat(levels.saturating_sub(1)));
        }
        format!("{}{inner}", "^".repeat(levels))
    }

    fn report(&mut self, code: &'static str, message: String) {
        self.sink.report(Diagnostic::warning(code, message));
    }
}
