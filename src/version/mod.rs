//! Version ordering for repository version labels
//!
//! Repository metadata lists versions as free-form strings. Only labels shaped
//! like `major[.minor[.micro]][-qualifier]` take part in ordering; anything else
//! parses to [`VersionParse::NotAVersion`] and is skipped by callers.
//!
//! Ordering policy: numeric triple first, then a missing qualifier sorts before
//! any qualifier, and qualifiers compare as plain strings (so `rc1` > `beta`
//! > `alpha`, but `RC1` < `alpha`).

pub mod range;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

pub use range::{RangeSpec, VersionSpecifier};

// `(?-u)` keeps `\d` and `\w` to ASCII
const VERSION_PATTERN_SOURCE: &str =
    r"(?-u)^(?P<major>\d+)(?:\.(?P<minor>\d+)(?:\.(?P<micro>\d+))?)?(?:-(?P<qualifier>\w+))?$";

#[allow(clippy::expect_used)]
static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VERSION_PATTERN_SOURCE).expect("version pattern is valid"));

/// Suffix marking a version that is rebuilt on every publish
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// A version label reduced to its comparable parts
///
/// Field order matters: the derived `Ord` compares `major`, `minor`, `micro`
/// and then `qualifier`, where `None` sorts before any `Some`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: u64,
    pub micro: u64,
    pub qualifier: Option<String>,
}

/// Outcome of parsing a version label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionParse {
    Version(ParsedVersion),
    NotAVersion,
}

impl VersionParse {
    /// Convert into an `Option`, dropping labels that aren't versions
    pub fn into_version(self) -> Option<ParsedVersion> {
        match self {
            VersionParse::Version(version) => Some(version),
            VersionParse::NotAVersion => None,
        }
    }
}

impl ParsedVersion {
    /// Parse a version label; missing minor and micro default to 0
    pub fn parse(raw: &str) -> VersionParse {
        let Some(captures) = VERSION_PATTERN.captures(raw) else {
            return VersionParse::NotAVersion;
        };

        let number = |name: &str| -> Option<u64> {
            match captures.name(name) {
                Some(m) => m.as_str().parse().ok(),
                None => Some(0),
            }
        };

        // Components too large for u64 are not something we can order.
        let (Some(major), Some(minor), Some(micro)) =
            (number("major"), number("minor"), number("micro"))
        else {
            return VersionParse::NotAVersion;
        };

        VersionParse::Version(ParsedVersion {
            major,
            minor,
            micro,
            qualifier: captures.name("qualifier").map(|m| m.as_str().to_string()),
        })
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if let Some(qualifier) = &self.qualifier {
            write!(f, "-{qualifier}")?;
        }
        Ok(())
    }
}

/// Whether a version string names a snapshot build
pub fn is_snapshot(version: &str) -> bool {
    version.ends_with(SNAPSHOT_SUFFIX)
}
