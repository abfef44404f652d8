//! Total order over parsed versions
//!
//! 1. The numeric core is compared as a `(major, minor, patch)` tuple.
//! 2. With equal cores a release is greater than any of its prereleases.
//! 3. Prereleases are compared atom by atom; numeric atoms sort before
//!    textual atoms, and a strict prefix is less than the longer sequence.

use std::cmp::Ordering;

use crate::version::error::VersionError;
use crate::version::parser::parse_version;
use crate::version::types::{PreReleaseAtom, Version};

/// Compare two versions
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.core()
        .cmp(&b.core())
        .then_with(|| match (a.pre_release(), b.pre_release()) {
            (None, None) => Ordering::Equal,
            // a release supersedes its prereleases
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(left), Some(right)) => compare_pre_release(left, right),
        })
}

fn compare_pre_release(left: &[PreReleaseAtom], right: &[PreReleaseAtom]) -> Ordering {
    for (l, r) in left.iter().zip(right) {
        let ordering = match (l, r) {
            (PreReleaseAtom::Numeric(l), PreReleaseAtom::Numeric(r)) => l.cmp(r),
            (PreReleaseAtom::Alpha(l), PreReleaseAtom::Alpha(r)) => l.cmp(r),
            (PreReleaseAtom::Numeric(_), PreReleaseAtom::Alpha(_)) => Ordering::Less,
            (PreReleaseAtom::Alpha(_), PreReleaseAtom::Numeric(_)) => Ordering::Greater,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    left.len().cmp(&right.len())
}

/// Parse both strings and compare them.
///
/// Returns the error of the first string that fails to parse.
pub fn compare_str(a: &str, b: &str) -> Result<Ordering, VersionError> {
    let a = parse_version(a)?;
    let b = parse_version(b)?;
    Ok(compare(&a, &b))
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

// Raw strings on the right-hand side are parsed first. An unparseable
// string is unordered with respect to every version.

impl PartialEq<str> for Version {
    fn eq(&self, other: &str) -> bool {
        <Self as PartialOrd<str>>::partial_cmp(self, other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<str> for Version {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        let other = parse_version(other).ok()?;
        Some(compare(self, &other))
    }
}

impl PartialEq<&str> for Version {
    fn eq(&self, other: &&str) -> bool {
        <Self as PartialEq<str>>::eq(self, other)
    }
}

impl PartialOrd<&str> for Version {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        <Self as PartialOrd<str>>::partial_cmp(self, other)
    }
}
