use crate::ast::{Availability, Node, PlatformAvailability};
use crate::base::Version;

/// Outcome of the availability check for one declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityGate {
    /// Emit, introduced in the given version on the target platform.
    Emit(Version),
    Unavailable,
    ForwardDeclaration,
    Deprecated,
}

impl AvailabilityGate {
    /// Check a top-level declaration against the target platform.
    pub fn check(node: &Node, target_platform: &str) -> Self {
        if node.availability != Availability::Available {
            return AvailabilityGate::Unavailable;
        }
        if node.forward_declaration {
            return AvailabilityGate::ForwardDeclaration;
        }
        let records = &node.platform_availability;
        if records.platforms.is_empty() {
            return AvailabilityGate::Emit(Version::default());
        }

        let unavailable = records
            .platforms
            .iter()
            .any(|record| record.platform == target_platform && record.unavailable);
        if unavailable || records.always_unavailable {
            return AvailabilityGate::Unavailable;
        }
        if records.always_deprecated {
            return AvailabilityGate::Deprecated;
        }
        AvailabilityGate::Emit(introduced_in(records, target_platform))
    }

    pub fn version(self) -> Option<Version> {
        match self {
            AvailabilityGate::Emit(version) => Some(version),
            _ => None,
        }
    }
}

/// Introduced-in version from the last record for the target platform,
/// `-1` components clamped to zero.
pub fn introduced_in(records: &PlatformAvailability, target_platform: &str) -> Version {
    records
        .platforms
        .iter()
        .rev()
        .find(|record| record.platform == target_platform)
        .map(|record| record.introduced.normalized())
        .unwrap_or_default()
}
