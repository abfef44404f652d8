use std::cmp::Ordering;

use serde::Serialize;
use tracing::warn;

use crate::version::compare::compare;
use crate::version::error::VersionError;
use crate::version::parser::parse_version;
use crate::version::types::Version;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareResult {
    Latest,
    Outdated,
    Newer,
    Invalid,
}

impl std::fmt::Display for CompareResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CompareResult::Latest => "latest",
            CompareResult::Outdated => "outdated",
            CompareResult::Newer => "newer",
            CompareResult::Invalid => "invalid",
        };
        write!(f, "{}", s)
    }
}

/// Compare the current version to the latest known version
pub fn compare_to_latest(current_version: &str, latest_version: &str) -> CompareResult {
    let Ok(current) = parse_version(current_version).inspect_err(|e| {
        warn!("Failed to parse current version: {}", e);
    }) else {
        return CompareResult::Invalid;
    };

    let Ok(latest) = parse_version(latest_version).inspect_err(|e| {
        warn!("Failed to parse latest version: {}", e);
    }) else {
        return CompareResult::Invalid;
    };

    match compare(&current, &latest) {
        Ordering::Less => CompareResult::Outdated,
        Ordering::Equal => CompareResult::Latest,
        Ordering::Greater => CompareResult::Newer,
    }
}

/// Greatest valid version among `available` for which `keep` holds.
/// Returns it only if it is strictly greater than `current`.
fn latest_matching(
    current_version: &str,
    available_versions: &[String],
    keep: impl Fn(&Version, &Version) -> bool,
) -> Option<String> {
    let current = parse_version(current_version).ok()?;

    let latest = available_versions
        .iter()
        .filter_map(|v| parse_version(v).ok())
        .filter(|v| keep(&current, v))
        .max()?;

    (latest > current).then(|| latest.to_string())
}

/// Calculate the latest patch version within the same major.minor
///
/// Returns the latest patch version if a newer patch exists,
/// or None if the current version is already the latest patch.
pub fn calculate_latest_patch(
    current_version: &str,
    available_versions: &[String],
) -> Option<String> {
    latest_matching(current_version, available_versions, |current, v| {
        v.major() == current.major() && v.minor() == current.minor()
    })
}

/// Calculate the latest minor version within the same major
pub fn calculate_latest_minor(
    current_version: &str,
    available_versions: &[String],
) -> Option<String> {
    latest_matching(current_version, available_versions, |current, v| {
        v.major() == current.major()
    })
}

/// Calculate the latest version overall
pub fn calculate_latest_major(
    current_version: &str,
    available_versions: &[String],
) -> Option<String> {
    latest_matching(current_version, available_versions, |_, _| true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOptions {
    pub order: SortOrder,
    /// Drop invalid versions instead of failing
    pub skip_invalid: bool,
    /// Keep one of each group of equal versions (`1.2` and `1.2.0`)
    pub dedup: bool,
}

/// Parse and sort a list of version strings.
///
/// Equal versions keep their input order before `dedup` and `order` apply.
pub fn sort_versions<S: AsRef<str>>(
    raw_versions: &[S],
    options: SortOptions,
) -> Result<Vec<Version>, VersionError> {
    let mut versions = Vec::with_capacity(raw_versions.len());
    for raw in raw_versions {
        match parse_version(raw.as_ref()) {
            Ok(v) => versions.push(v),
            Err(e) if options.skip_invalid => {
                warn!("Skipping invalid version: {}", e);
            }
            Err(e) => return Err(e),
        }
    }

    versions.sort();
    if options.dedup {
        versions.dedup();
    }
    if options.order == SortOrder::Descending {
        versions.reverse();
    }

    Ok(versions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.0.0", "1.0.0", CompareResult::Latest)]
    #[case("1.2", "1.2.0", CompareResult::Latest)]
    #[case("1.0.0", "2.0.0", CompareResult::Outdated)]
    #[case("1.0.0-rc.1", "1.0.0", CompareResult::Outdated)]
    #[case("1.22.3-rc1.2", "1.22.3b1", CompareResult::Newer)]
    #[case("invalid", "1.0.0", CompareResult::Invalid)]
    #[case("1.0.0", "v1.0.0", CompareResult::Invalid)]
    fn compare_to_latest_returns_expected(
        #[case] current: &str,
        #[case] latest: &str,
        #[case] expected: CompareResult,
    ) {
        assert_eq!(compare_to_latest(current, latest), expected);
    }

    #[rstest]
    #[case("1.2.3", &["1.2.3", "1.2.5", "1.3.0", "2.0.0"], Some("1.2.5".to_string()))]
    #[case("1.2.5", &["1.2.3", "1.2.5", "1.3.0", "2.0.0"], None)] // already latest patch
    #[case("1.2.5b1", &["1.2.5", "1.2.5b2"], Some("1.2.5".to_string()))] // release beats prerelease
    #[case("invalid", &["1.2.3", "1.2.5"], None)] // unparseable current version
    #[case("1.2.3", &["invalid", "not-a-version"], None)] // no valid available versions
    #[case("1.2.3", &[], None)] // empty available versions
    fn test_calculate_latest_patch(
        #[case] current: &str,
        #[case] available: &[&str],
        #[case] expected: Option<String>,
    ) {
        let available_strings: Vec<String> = available.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            calculate_latest_patch(current, &available_strings),
            expected
        );
    }

    #[rstest]
    #[case("1.2.3", &["1.2.3", "1.3.0", "1.5.0-rc.1", "2.0.0"], Some("1.5.0-rc.1".to_string()))]
    #[case("1.5.0", &["1.2.3", "1.3.0", "1.5.0", "2.0.0"], None)] // already latest minor
    #[case("1.2.3", &["invalid", "not-a-version"], None)]
    fn test_calculate_latest_minor(
        #[case] current: &str,
        #[case] available: &[&str],
        #[case] expected: Option<String>,
    ) {
        let available_strings: Vec<String> = available.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            calculate_latest_minor(current, &available_strings),
            expected
        );
    }

    #[rstest]
    #[case("1.2.3", &["1.2.3", "2.0.0", "3.0"], Some("3.0".to_string()))]
    #[case("3.0.0", &["1.2.3", "2.0.0", "3.0.0"], None)] // already latest major
    #[case("3.0.0", &["3.0"], None)] // equal, not newer
    fn test_calculate_latest_major(
        #[case] current: &str,
        #[case] available: &[&str],
        #[case] expected: Option<String>,
    ) {
        let available_strings: Vec<String> = available.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            calculate_latest_major(current, &available_strings),
            expected
        );
    }

    fn as_strs(versions: &[Version]) -> Vec<&str> {
        versions.iter().map(|v| v.as_str()).collect()
    }

    #[test]
    fn sort_versions_descending_by_default() {
        let sorted = sort_versions(
            &["1.0.0-rc.1", "1.0.0", "0.9", "1.0.0-beta"],
            SortOptions::default(),
        )
        .unwrap();

        assert_eq!(
            as_strs(&sorted),
            vec!["1.0.0", "1.0.0-rc.1", "1.0.0-beta", "0.9"]
        );
    }

    #[test]
    fn sort_versions_ascending_with_dedup() {
        let options = SortOptions {
            order: SortOrder::Ascending,
            dedup: true,
            ..Default::default()
        };
        let sorted = sort_versions(&["1.2.0", "1.1", "1.2", "1.1.0"], options).unwrap();

        assert_eq!(as_strs(&sorted), vec!["1.1", "1.2.0"]);
    }

    #[test]
    fn sort_versions_fails_on_first_invalid() {
        let result = sort_versions(&["1.0.0", "bad", "worse"], SortOptions::default());
        assert_eq!(result, Err(VersionError::InvalidFormat("bad".to_string())));
    }

    #[test]
    fn sort_versions_skips_invalid_when_asked() {
        let options = SortOptions {
            order: SortOrder::Ascending,
            skip_invalid: true,
            ..Default::default()
        };
        let sorted = sort_versions(&["2.0", "bad", "1.0"], options).unwrap();

        assert_eq!(as_strs(&sorted), vec!["1.0", "2.0"]);
    }
}
