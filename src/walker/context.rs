//! Walk state shared by the visit functions.

use crate::base::{SourceLocation, Version};
use crate::tree::DefId;

#[derive(Debug, Default)]
pub(super) struct WalkContext {
    /// Location of the declaration being visited.
    pub location: SourceLocation,
    /// Introduced-in version of the declaration being visited.
    pub introduced_in: Version,
    /// Anonymous struct or union waiting for the typedef that names it.
    pub pending_record: Option<DefId>,
    /// Counter for synthesized enum names.
    pub anon_enums: u32,
}

impl WalkContext {
    /// Move to a declaration's location; unknown locations keep the last one.
    pub fn enter(&mut self, location: Option<&SourceLocation>, introduced_in: Version) {
        if let Some(location) = location.filter(|l| !l.is_unknown()) {
            self.location = location.clone();
        }
        self.introduced_in = introduced_in;
    }

    /// Generate the next `enum_N` name.
    pub fn next_anonymous_enum(&mut self) -> String {
        let name = format!("enum_{}", self.anon_enums);
        self.anon_enums += 1;
        name
    }
}

/// Names the front-end gives declarations without one.
pub(super) fn is_anonymous_name(name: &str) -> bool {
    name.is_empty() || name.contains("(anonymous") || name.contains("(unnamed")
}
