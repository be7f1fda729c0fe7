use smol_str::SmolStr;

use crate::base::text::clean_spelling;

/// A resolved type: coarse tag, cleaned spelling and type encoding.
///
/// Tag and value are cleaned of qualifiers on every write. The encoding is
/// stored as reported and may be empty or `?` until resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Type {
    tag: SmolStr,
    value: String,
    pub encoding: String,
}

impl Type {
    pub fn new(tag: &str, value: &str, encoding: impl Into<String>) -> Self {
        let mut ty = Self {
            encoding: encoding.into(),
            ..Self::default()
        };
        ty.set_tag(tag);
        ty.set_value(value);
        ty
    }

    /// A type whose tag and value are both the given spelling.
    pub fn from_spelling(spelling: &str) -> Self {
        Self::new(spelling, spelling, "")
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_tag(&mut self, tag: &str) {
        self.tag = SmolStr::new(clean_spelling(tag));
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = clean_spelling(value);
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }
}

/// A named parameter or field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub ty: Type,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
