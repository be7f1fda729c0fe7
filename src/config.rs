//! Generator configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ast::InputFormat;
use crate::error::Result;

/// Default platform whose availability records are consulted.
pub const DEFAULT_TARGET_PLATFORM: &str = "ios";

/// Default bound on encoding synthesis recursion.
pub const DEFAULT_MAX_ENCODING_DEPTH: usize = 32;

/// Options for one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// SDK root the headers were parsed against.
    pub sdk_path: String,
    /// Minimum deployment version, echoed into the metadata.
    pub min_version: String,
    /// Restrict output to declarations under this framework path.
    pub framework_filter: Option<String>,
    /// Framework name used for blocks instead of the one derived from paths.
    pub framework_name: Option<String>,
    /// Drop declarations under system include roots and the SDK.
    pub exclude_system_apis: bool,
    /// Platform whose availability records are consulted.
    pub target_platform: String,
    /// Recursion bound for encoding synthesis.
    pub max_encoding_depth: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sdk_path: String::new(),
            min_version: String::new(),
            framework_filter: None,
            framework_name: None,
            exclude_system_apis: false,
            target_platform: DEFAULT_TARGET_PLATFORM.to_string(),
            max_encoding_depth: DEFAULT_MAX_ENCODING_DEPTH,
        }
    }
}

/// Which declarations a run emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPolicy {
    /// Only declarations located under the given framework path.
    SingleFramework(String),
    /// Everything except system include roots and the SDK.
    ExcludeSystem,
    /// Everything.
    IncludeAll,
}

impl GeneratorConfig {
    pub fn new(sdk_path: impl Into<String>, min_version: impl Into<String>) -> Self {
        Self {
            sdk_path: sdk_path.into(),
            min_version: min_version.into(),
            ..Self::default()
        }
    }

    pub fn with_framework_filter(mut self, filter: impl Into<String>) -> Self {
        self.framework_filter = Some(filter.into());
        self
    }

    pub fn with_framework_name(mut self, name: impl Into<String>) -> Self {
        self.framework_name = Some(name.into());
        self
    }

    pub fn with_exclude_system_apis(mut self, exclude: bool) -> Self {
        self.exclude_system_apis = exclude;
        self
    }

    pub fn with_target_platform(mut self, platform: impl Into<String>) -> Self {
        self.target_platform = platform.into();
        self
    }

    pub fn with_max_encoding_depth(mut self, depth: usize) -> Self {
        self.max_encoding_depth = depth;
        self
    }

    /// The inclusion policy these options select. A framework filter wins
    /// over the exclude-system flag; an empty filter counts as unset.
    pub fn policy(&self) -> FilterPolicy {
        match self.framework_filter.as_deref() {
            Some(filter) if !filter.is_empty() => FilterPolicy::SingleFramework(filter.to_string()),
            _ if self.exclude_system_apis => FilterPolicy::ExcludeSystem,
            _ => FilterPolicy::IncludeAll,
        }
    }

    /// Read options from a JSON or YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        match InputFormat::from_path(path)? {
            InputFormat::Json => Ok(serde_json::from_slice(&bytes)?),
            #[cfg(feature = "yaml")]
            InputFormat::Yaml => Ok(serde_yaml::from_slice(&bytes)?),
            #[cfg(not(feature = "yaml"))]
            InputFormat::Yaml => Err(crate::error::MetabaseError::unsupported(
                "YAML configuration requires the `yaml` feature",
            )),
        }
    }
}
