//! Version range expressions and version specifiers
//!
//! Ranges use the bracket notation of Maven dependency declarations:
//! `[1.0,2.0)` is 1.0 inclusive up to 2.0 exclusive, `(1.0,)` is anything newer
//! than 1.0. A string that doesn't have the bracket-comma-bracket shape is not a
//! range at all and is treated as an exact version by [`VersionSpecifier`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::{ParsedVersion, VersionParse};
use crate::error::{Result, malformed_range_bound};

// `(?-u)` keeps `\d`, `\w` and `\s` to ASCII
const RANGE_PATTERN_SOURCE: &str = r"(?-u)^(?P<lbrace>\(|\[)\s*(?P<from>\d+(?:\.\d+){0,2}(?:-\w*)?)?\s*,\s*(?P<to>\d+(?:\.\d+){0,2}(?:-\w*)?)?\s*(?P<rbrace>\)|\])$";

#[allow(clippy::expect_used)]
static RANGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RANGE_PATTERN_SOURCE).expect("range pattern is valid"));

/// A parsed version range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSpec {
    raw: String,
    pub lower: Option<ParsedVersion>,
    pub lower_inclusive: bool,
    pub upper: Option<ParsedVersion>,
    pub upper_inclusive: bool,
}

/// Outcome of parsing a range expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeParse {
    Range(RangeSpec),
    NotARange,
}

impl RangeSpec {
    /// Parse a range expression
    ///
    /// Returns [`RangeParse::NotARange`] when `raw` lacks the bracket shape. A
    /// bound that has the bracket shape but isn't a version (e.g. `1.0-`) leaves
    /// the range undefined and is an error.
    pub fn parse(raw: &str) -> Result<RangeParse> {
        let Some(captures) = RANGE_PATTERN.captures(raw) else {
            return Ok(RangeParse::NotARange);
        };

        let bound = |name: &str| -> Result<Option<ParsedVersion>> {
            let Some(text) = captures.name(name).map(|m| m.as_str()) else {
                return Ok(None);
            };
            match ParsedVersion::parse(text) {
                VersionParse::Version(version) => Ok(Some(version)),
                VersionParse::NotAVersion => Err(malformed_range_bound(text, raw)),
            }
        };

        Ok(RangeParse::Range(RangeSpec {
            raw: raw.to_string(),
            lower: bound("from")?,
            lower_inclusive: captures.name("lbrace").is_some_and(|m| m.as_str() == "["),
            upper: bound("to")?,
            upper_inclusive: captures.name("rbrace").is_some_and(|m| m.as_str() == "]"),
        }))
    }

    /// The expression this range was parsed from
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether `version` satisfies both bounds
    pub fn contains(&self, version: &ParsedVersion) -> bool {
        let above_lower = match &self.lower {
            Some(lower) if self.lower_inclusive => version >= lower,
            Some(lower) => version > lower,
            None => true,
        };
        let below_upper = match &self.upper {
            Some(upper) if self.upper_inclusive => version <= upper,
            Some(upper) => version < upper,
            None => true,
        };
        above_lower && below_upper
    }

    /// Greatest of `versions` that lies inside the range
    pub fn select_max<I>(&self, versions: I) -> Option<ParsedVersion>
    where
        I: IntoIterator<Item = ParsedVersion>,
    {
        versions.into_iter().filter(|v| self.contains(v)).max()
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// What the caller asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSpecifier {
    /// No version given: use whatever the repository marks as latest
    Latest,
    Exact(String),
    Range(RangeSpec),
}

impl VersionSpecifier {
    /// Classify a raw version argument
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(VersionSpecifier::Latest);
        };

        match RangeSpec::parse(raw)? {
            RangeParse::Range(range) => Ok(VersionSpecifier::Range(range)),
            RangeParse::NotARange => Ok(VersionSpecifier::Exact(raw.to_string())),
        }
    }
}

impl fmt::Display for VersionSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSpecifier::Latest => f.write_str("latest"),
            VersionSpecifier::Exact(version) => f.write_str(version),
            VersionSpecifier::Range(range) => write!(f, "{range}"),
        }
    }
}

impl Serialize for VersionSpecifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
