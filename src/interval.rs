use std::str::FromStr;

use documented::Documented;
use getset::{CopyGetters, Getters};
use tracing::debug;

use crate::{
    CompareError, Constraints, Error, Expression, Notation, Options, Version, VersionParseError,
    build_expression,
};

/// A version range compiled from interval notation.
///
/// An `Interval` is immutable and may be evaluated against any number of versions,
/// from any number of threads.
///
/// ## Semantics
///
/// | Notation        | Meaning                      |
/// |-----------------|------------------------------|
/// | `[1.2.3,1.3.5]` | `>= 1.2.3, <= 1.3.5`         |
/// | `[1.2.3,1.3.5)` | `>= 1.2.3, < 1.3.5`          |
/// | `(1.2.3,1.3.5]` | `> 1.2.3, <= 1.3.5`          |
/// | `(1.2.3,1.3.5)` | `> 1.2.3, < 1.3.5`           |
/// | `[1.2.3,)`      | `>= 1.2.3`                   |
/// | `(1.2.3,)`      | `> 1.2.3`                    |
/// | `(,1.2.3]`      | `<= 1.2.3`                   |
/// | `(,1.2.3)`      | `< 1.2.3`                    |
/// | `(1.2.3)`       | `= 1.2.3`, whatever the braces |
///
/// ```
/// # use interval_notation::{Interval, Version};
/// let interval = Interval::parse("[1.2.3,1.3.5)").expect("must parse");
/// assert!(interval.matches(&Version::parse("1.2.4").unwrap()));
/// assert!(!interval.matches(&Version::parse("1.3.5").unwrap()));
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Getters, CopyGetters, Documented)]
pub struct Interval {
    /// The notation the interval was parsed from.
    #[getset(get = "pub")]
    notation: Notation,

    /// The comparison expression the notation was interpreted as.
    #[getset(get = "pub")]
    expression: Expression,

    /// The compiled comparison terms.
    #[getset(get = "pub")]
    constraints: Constraints<Version>,

    /// The options the interval was parsed with.
    #[getset(get_copy = "pub")]
    options: Options,
}

impl Interval {
    /// Parse interval notation with the default [`Options`].
    pub fn parse(input: &str) -> Result<Self, Error> {
        Self::parse_with(input, Options::default())
    }

    /// Parse interval notation.
    ///
    /// Errors from the notation parser and from compiling its expression are returned unchanged.
    #[tracing::instrument]
    pub fn parse_with(input: &str, options: Options) -> Result<Self, Error> {
        let notation = Notation::parse_with(input, &options)?;
        let expression = build_expression(&notation)?;
        debug!(%expression, "interpreted interval notation");

        let constraints = expression.compile()?;
        Ok(Self {
            notation,
            expression,
            constraints,
            options,
        })
    }

    /// Whether the version lies inside the interval.
    pub fn matches(&self, version: &Version) -> bool {
        self.constraints.matches(version, self.options.prerelease())
    }

    /// Evaluate the version against the interval,
    /// reporting every comparison term it fails.
    pub fn validate(&self, version: &Version) -> (bool, Vec<CompareError>) {
        self.constraints.validate(version, self.options.prerelease())
    }

    /// Parse the version and report whether it lies inside the interval.
    pub fn contains(&self, version: &str) -> Result<bool, VersionParseError> {
        Version::parse(version).map(|version| self.matches(&version))
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the interval in interval notation.
impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation)
    }
}
