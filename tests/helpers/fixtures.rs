//! Common paths, configurations and runners.

use chrono::{DateTime, TimeZone, Utc};
use metabase::ast::TranslationUnit;
use metabase::{Diagnostic, GeneratorConfig, Metabase};

pub const SDK: &str = "/Applications/Xcode.app/Platforms/iPhoneOS.platform/SDKs/iPhoneOS.sdk";
pub const UIKIT_HEADER: &str = "/Applications/Xcode.app/Platforms/iPhoneOS.platform/SDKs/iPhoneOS.sdk/System/Library/Frameworks/UIKit.framework/Headers/UIView.h";
pub const FOUNDATION_HEADER: &str = "/Applications/Xcode.app/Platforms/iPhoneOS.platform/SDKs/iPhoneOS.sdk/System/Library/Frameworks/Foundation.framework/Headers/NSString.h";
pub const SYSTEM_HEADER: &str = "/usr/include/stdio.h";
pub const APP_HEADER: &str = "/Users/dev/MyApp/MyKit.framework/Headers/MyKit.h";

pub fn generated() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
}

pub fn ios_config() -> GeneratorConfig {
    GeneratorConfig::new(SDK, "9.0")
}

/// Generate with a fixed timestamp, collecting diagnostics.
pub fn run(unit: &TranslationUnit, config: &GeneratorConfig) -> (Metabase, Vec<Diagnostic>) {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let metabase = metabase::generate_at(unit, config, &mut diagnostics, generated());
    (metabase, diagnostics)
}

pub fn run_json(unit: &TranslationUnit, config: &GeneratorConfig) -> serde_json::Value {
    run(unit, config).0.to_json_value().unwrap()
}
