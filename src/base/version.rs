//! Introduced-in versions.

use serde::{Deserialize, Serialize};

/// A normalized `major.minor.subminor` version.
///
/// The front-end reports missing components as `-1` (`12` becomes
/// `12, -1, -1`); every negative component is clamped to `0`, so the
/// default value renders as `0.0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub subminor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, subminor: u32) -> Self {
        Self {
            major,
            minor,
            subminor,
        }
    }

    /// Build a version from raw front-end components, clamping negatives to 0.
    pub fn from_raw(major: i32, minor: i32, subminor: i32) -> Self {
        let clamp = |component: i32| u32::try_from(component).unwrap_or(0);
        Self::new(clamp(major), clamp(minor), clamp(subminor))
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.subminor)
    }
}

impl Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let mut parts = text.split('.').map(|p| p.trim().parse::<i32>().unwrap_or(0));
        let major = parts.next().unwrap_or(0);
        let minor = parts.next().unwrap_or(0);
        let subminor = parts.next().unwrap_or(0);
        Ok(Self::from_raw(major, minor, subminor))
    }
}
