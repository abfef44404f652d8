//! Version string parser
//!
//! Accepted grammar (ASCII, case-sensitive):
//!
//! ```text
//! version    := major "." minor ("." patch)? prerelease?
//! prerelease := sep? label? number? sep? label? number?
//! sep        := "-" | "."
//! label      := [a-z]+
//! number     := [0-9]+
//! ```
//!
//! Examples:
//! - `1.2` -> (1, 2, 0), no prerelease
//! - `1.22.3b1` -> (1, 22, 3), [b, 1]
//! - `1.0.10-alpha.beta` -> (1, 0, 10), [alpha, beta]
//! - `1.22.3-rc1.2` -> (1, 22, 3), [rc, 1, 2]

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::version::error::VersionError;
use crate::version::types::{PreReleaseAtom, Version};

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<major>[0-9]+)\.(?P<minor>[0-9]+)(?:\.(?P<patch>[0-9]+))?",
        r"(?P<sep1>[-.])?(?P<label1>[a-z]+)?(?P<number1>[0-9]+)?",
        r"(?P<sep2>[-.])?(?P<label2>[a-z]+)?(?P<number2>[0-9]+)?$",
    ))
    .unwrap()
});

/// Prerelease capture slots, in the order atoms are appended
const PRE_RELEASE_SLOTS: [&str; 4] = ["label1", "number1", "label2", "number2"];

/// Parse a version string into a [`Version`].
///
/// Fails with [`VersionError::InvalidFormat`] when the string does not match
/// the grammar, when a separator is not followed by a token, or when a
/// number does not fit in a `u64`.
pub fn parse_version(raw: &str) -> Result<Version, VersionError> {
    let Some(caps) = VERSION_RE.captures(raw) else {
        debug!("Version '{}' does not match the version grammar", raw);
        return Err(VersionError::invalid(raw));
    };

    if has_dangling_separator(&caps) {
        debug!("Version '{}' has a separator without a following token", raw);
        return Err(VersionError::invalid(raw));
    }

    let major = parse_number(raw, caps.name("major").map(|m| m.as_str()))?;
    let minor = parse_number(raw, caps.name("minor").map(|m| m.as_str()))?;
    let patch = match caps.name("patch") {
        Some(m) => parse_number(raw, Some(m.as_str()))?,
        None => 0,
    };

    let mut atoms = Vec::new();
    for slot in PRE_RELEASE_SLOTS {
        let Some(m) = caps.name(slot) else {
            continue;
        };
        let text = m.as_str();
        let atom = if slot.starts_with("number") {
            PreReleaseAtom::Numeric(parse_number(raw, Some(text))?)
        } else {
            PreReleaseAtom::Alpha(text.to_string())
        };
        atoms.push(atom);
    }

    let pre_release = (!atoms.is_empty()).then_some(atoms);

    Ok(Version::from_parts(raw, (major, minor, patch), pre_release))
}

/// A separator must be followed by at least one token of its own slot
fn has_dangling_separator(caps: &Captures<'_>) -> bool {
    [("sep1", "label1", "number1"), ("sep2", "label2", "number2")]
        .iter()
        .any(|(sep, label, number)| {
            caps.name(sep).is_some() && caps.name(label).is_none() && caps.name(number).is_none()
        })
}

fn parse_number(raw: &str, digits: Option<&str>) -> Result<u64, VersionError> {
    let digits = digits.ok_or_else(|| VersionError::invalid(raw))?;
    digits.parse::<u64>().map_err(|e| {
        debug!("Number '{}' in version '{}' is out of range: {}", digits, raw, e);
        VersionError::invalid(raw)
    })
}
