use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    str::FromStr,
};

use derive_more::Display;
use documented::Documented;
use nom::{
    Finish, IResult, Parser,
    character::complete::{char, digit1},
    combinator::{map_res, opt},
    sequence::preceded,
};
use serde::{Deserialize, Serialize};

use crate::{VersionParseError, error};

/// A parsed semantic version.
///
/// Versions are parsed leniently, the way interval bounds tend to be written in the wild:
/// - A single leading `v` is trimmed, so `v1.2.3` parses as `1.2.3`.
/// - Partial versions are completed with zeros, so `1.2` parses as `1.2.0`.
/// - Pre-release and build metadata follow semver: `1.2.3-rc.1+build.5`.
///
/// Versions order and compare by semver precedence, which ignores build metadata.
/// The original input is kept for display.
///
/// ```
/// # use interval_notation::Version;
/// let version = Version::parse("v1.2").expect("must parse");
/// assert_eq!(version, Version::parse("1.2.0").expect("must parse"));
/// assert_eq!(version.to_string(), "v1.2");
/// ```
#[derive(Clone, Debug, Display, Documented, Serialize, Deserialize)]
#[display("{input}")]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    parsed: semver::Version,
    input: String,
}

impl Version {
    /// Parse a version.
    /// For details, see [`Version`].
    pub fn parse(input: &str) -> Result<Self, VersionParseError> {
        fn number(input: &str) -> IResult<&str, u64> {
            map_res(digit1, |digits: &str| digits.parse::<u64>()).parse(input)
        }

        fn core(input: &str) -> IResult<&str, (u64, Option<u64>, Option<u64>)> {
            preceded(
                opt(char('v')),
                (
                    number,
                    opt(preceded(char('.'), number)),
                    opt(preceded(char('.'), number)),
                ),
            )
            .parse(input)
        }

        if input.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let (rest, (major, minor, patch)) = core(input)
            .finish()
            .map_err(|err| error::syntax!(VersionParseError, input => err.input))?;

        // Anything after the core must be a pre-release or build; semver validates the rest.
        if !rest.is_empty() && !rest.starts_with(['-', '+']) {
            return Err(error::syntax!(VersionParseError, input => rest));
        }

        let minor = minor.unwrap_or(0);
        let patch = patch.unwrap_or(0);
        let parsed = semver::Version::parse(&format!("{major}.{minor}.{patch}{rest}")).map_err(
            |source| VersionParseError::Semver {
                input: input.to_string(),
                source,
            },
        )?;

        Ok(Self {
            parsed,
            input: input.to_string(),
        })
    }

    /// The version as parsed by `semver`.
    pub fn as_semver(&self) -> &semver::Version {
        &self.parsed
    }

    /// The text this version was parsed from.
    pub fn as_str(&self) -> &str {
        &self.input
    }

    /// Whether the version carries a pre-release, e.g. `1.0.0-rc.1`.
    pub fn is_prerelease(&self) -> bool {
        !self.parsed.pre.is_empty()
    }
}

impl From<semver::Version> for Version {
    fn from(parsed: semver::Version) -> Self {
        Self {
            input: parsed.to_string(),
            parsed,
        }
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.input
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
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
        self.parsed.cmp_precedence(&other.parsed)
    }
}

// Must agree with `Eq`, which ignores build metadata and the original input.
impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parsed.major.hash(state);
        self.parsed.minor.hash(state);
        self.parsed.patch.hash(state);
        self.parsed.pre.hash(state);
    }
}
