//! The complete metabase document.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use super::entries::{BlockEntry, EnumEntry, FunctionEntry, InterfaceEntry, RecordEntry, ValueEntry};
use super::metadata::Metadata;
use crate::error::Result;

/// One run's output. Every section is keyed by declaration name; empty
/// sections are left out of the JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Metabase {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub typedefs: BTreeMap<String, ValueEntry>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub classes: BTreeMap<String, InterfaceEntry>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, InterfaceEntry>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub protocols: BTreeMap<String, InterfaceEntry>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub enums: BTreeMap<String, EnumEntry>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub vars: BTreeMap<String, ValueEntry>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub functions: BTreeMap<String, FunctionEntry>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub structs: BTreeMap<String, RecordEntry>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub unions: BTreeMap<String, RecordEntry>,
    /// Block name, then every signature variant in signature order.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub blocks: BTreeMap<String, Vec<BlockEntry>>,
    pub metadata: Metadata,
}

impl Metabase {
    /// Number of emitted definitions, counting each block variant.
    pub fn definition_count(&self) -> usize {
        self.typedefs.len()
            + self.classes.len()
            + self.extensions.len()
            + self.protocols.len()
            + self.enums.len()
            + self.vars.len()
            + self.functions.len()
            + self.structs.len()
            + self.unions.len()
            + self.blocks.values().map(Vec::len).sum::<usize>()
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }

    /// Write the document to `path`.
    pub fn write(&self, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json_string(pretty)?)?;
        tracing::debug!(path = %path.display(), definitions = self.definition_count(), "wrote metabase");
        Ok(())
    }
}
