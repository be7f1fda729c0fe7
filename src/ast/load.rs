//! Loading a declaration tree from disk or memory.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::node::{CursorKind, Node};
use crate::error::{MetabaseError, Result};

/// Serialized formats the front-end may produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(InputFormat::Json),
            Some("yaml") | Some("yml") => Ok(InputFormat::Yaml),
            other => Err(MetabaseError::unsupported(format!(
                "declaration tree format '{}' ({})",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }
}

/// Root of a declaration tree: one parsed translation unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationUnit {
    root: Node,
}

impl TranslationUnit {
    /// Wrap a root node, which must be a translation unit cursor.
    pub fn new(root: Node) -> Result<Self> {
        if root.kind != CursorKind::TranslationUnit {
            return Err(MetabaseError::invalid_input(format!(
                "root cursor is {:?}, expected translation_unit",
                root.kind
            )));
        }
        Ok(Self { root })
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let root: Node = serde_json::from_slice(bytes)?;
        Self::new(root)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_slice(bytes: &[u8]) -> Result<Self> {
        let root: Node = serde_yaml::from_slice(bytes)?;
        Self::new(root)
    }

    #[cfg(not(feature = "yaml"))]
    pub fn from_yaml_slice(_bytes: &[u8]) -> Result<Self> {
        Err(MetabaseError::unsupported(
            "YAML input requires the `yaml` feature",
        ))
    }

    pub fn from_slice(bytes: &[u8], format: InputFormat) -> Result<Self> {
        match format {
            InputFormat::Json => Self::from_json_slice(bytes),
            InputFormat::Yaml => Self::from_yaml_slice(bytes),
        }
    }

    /// Load a declaration tree, detecting the format from the extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = InputFormat::from_path(path)?;
        let bytes = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), ?format, "loading declaration tree");
        Self::from_slice(&bytes, format)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Top-level cursors in document order.
    pub fn declarations(&self) -> &[Node] {
        &self.root.children
    }
}
