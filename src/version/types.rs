//! Parsed version representation

use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::error::VersionError;
use crate::version::parser::parse_version;

/// One token of the prerelease section
///
/// Variant order matters: numeric atoms sort before textual atoms at the
/// same position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreReleaseAtom {
    /// Digits, e.g. the `1` in `rc.1`
    Numeric(u64),
    /// Lowercase letters, e.g. `rc`, `alpha`, `b`
    Alpha(String),
}

impl std::fmt::Display for PreReleaseAtom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreReleaseAtom::Numeric(n) => write!(f, "{}", n),
            PreReleaseAtom::Alpha(s) => write!(f, "{}", s),
        }
    }
}

/// A parsed version identifier such as `1.22.3b1` or `1.0.0-rc.1`
///
/// Only produced by [`parse_version`]. Equality, ordering and hashing look at
/// the numeric core and the prerelease atoms; the raw string is kept for
/// display only, so `1.2` and `1.2.0` are equal.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    core: (u64, u64, u64),
    pre_release: Option<Vec<PreReleaseAtom>>,
}

impl Version {
    pub(crate) fn from_parts(
        raw: &str,
        core: (u64, u64, u64),
        pre_release: Option<Vec<PreReleaseAtom>>,
    ) -> Self {
        debug_assert!(pre_release.as_ref().is_none_or(|p| (1..=4).contains(&p.len())));
        Self {
            raw: raw.to_string(),
            core,
            pre_release,
        }
    }

    pub fn major(&self) -> u64 {
        self.core.0
    }

    pub fn minor(&self) -> u64 {
        self.core.1
    }

    pub fn patch(&self) -> u64 {
        self.core.2
    }

    /// The `(major, minor, patch)` triple
    pub fn core(&self) -> (u64, u64, u64) {
        self.core
    }

    /// Prerelease atoms in source order, `None` for a release
    pub fn pre_release(&self) -> Option<&[PreReleaseAtom]> {
        self.pre_release.as_deref()
    }

    pub fn is_prerelease(&self) -> bool {
        self.pre_release.is_some()
    }

    /// The string this version was parsed from
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_version(value)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.core.hash(state);
        self.pre_release.hash(state);
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_version(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn accessors_expose_core_and_pre_release() {
        let version: Version = "1.22.3b1".parse().unwrap();

        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), 22);
        assert_eq!(version.patch(), 3);
        assert_eq!(version.core(), (1, 22, 3));
        assert!(version.is_prerelease());
        assert_eq!(
            version.pre_release(),
            Some(
                &[
                    PreReleaseAtom::Alpha("b".to_string()),
                    PreReleaseAtom::Numeric(1)
                ][..]
            )
        );
    }

    #[test]
    fn display_keeps_the_source_string() {
        let version = Version::try_from("1.0.0-rc.1").unwrap();
        assert_eq!(version.to_string(), "1.0.0-rc.1");
        assert_eq!(version.as_str(), "1.0.0-rc.1");
    }

    #[test]
    fn hash_agrees_with_equality_for_default_patch() {
        let set: HashSet<Version> = ["1.2", "1.2.0", "1.2.1"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serde_uses_the_raw_string() {
        let version: Version = serde_json::from_str("\"1.1.0-alpha\"").unwrap();
        assert_eq!(version.pre_release().map(|p| p.len()), Some(1));
        assert_eq!(serde_json::to_string(&version).unwrap(), "\"1.1.0-alpha\"");
    }

    #[test]
    fn serde_rejects_invalid_versions() {
        let result = serde_json::from_str::<Version>("\"v1.0\"");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Invalid version format: 'v1.0'"), "{message}");
    }
}
