//! The `metadata` section.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::GeneratorConfig;

/// Version of the document format.
pub const API_VERSION: &str = "1";

/// Format of the `generated` timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// SDK directory markers and the platform each implies.
const PLATFORM_MARKERS: &[(&str, &str)] = &[
    ("iPhone", "ios"),
    ("MacOSX", "macos"),
    ("AppleTV", "tvos"),
    ("Watch", "watchos"),
];

/// Run information written next to the definitions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    #[serde(rename = "api-version")]
    pub api_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(rename = "sdk-path")]
    pub sdk_path: String,
    #[serde(rename = "min-version")]
    pub min_version: String,
    /// Frameworks referenced by this run but excluded from it.
    pub dependencies: Vec<String>,
    pub generated: String,
    /// `"false"` when system APIs were excluded.
    #[serde(rename = "system-generated")]
    pub system_generated: String,
}

impl Metadata {
    pub fn new<'d>(
        config: &GeneratorConfig,
        dependencies: impl IntoIterator<Item = &'d str>,
        generated: DateTime<Utc>,
    ) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            platform: platform_from_sdk(&config.sdk_path).map(str::to_string),
            sdk_path: config.sdk_path.clone(),
            min_version: config.min_version.clone(),
            dependencies: dependencies.into_iter().map(str::to_string).collect(),
            generated: generated.format(TIMESTAMP_FORMAT).to_string(),
            system_generated: (!config.exclude_system_apis).to_string(),
        }
    }
}

/// Best-effort platform guess from the SDK directory name.
///
/// # Example
/// ```
/// use metabase::serialize::platform_from_sdk;
///
/// assert_eq!(platform_from_sdk("/Xcode/SDKs/iPhoneOS17.0.sdk"), Some("ios"));
/// assert_eq!(platform_from_sdk("/opt/sdk"), None);
/// ```
pub fn platform_from_sdk(sdk_path: &str) -> Option<&'static str> {
    PLATFORM_MARKERS
        .iter()
        .find(|(marker, _)| sdk_path.contains(marker))
        .map(|(_, platform)| *platform)
}
