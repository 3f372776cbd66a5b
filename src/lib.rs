#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod constraint;
mod error;
mod expression;
mod interval;
mod notation;
mod options;
mod version;

pub use constraint::{Comparable, Constraint, Constraints};
pub use error::*;
pub use expression::*;
pub use interval::*;
pub use notation::*;
pub use options::*;
pub use version::*;

/// Parse interval notation into an [`Interval`] with the default [`Options`].
///
/// ```
/// let interval = interval_notation::parse("(,1.2.3]").expect("must parse");
/// assert!(interval.contains("1.2.3").expect("must parse version"));
/// assert!(!interval.contains("1.2.4").expect("must parse version"));
/// ```
pub fn parse(notation: &str) -> Result<Interval, Error> {
    Interval::parse(notation)
}

/// Report whether `version` lies inside the interval described by `notation`.
///
/// Any failure yields `false` along with what went wrong:
/// - the notation or the version failed to parse, yielding that one error, or
/// - the version is outside the interval, yielding one [`CompareError`] per failed bound.
///
/// ```
/// # use interval_notation::{CompareError, Error};
/// let (inside, errors) = interval_notation::in_range("[1.2.3,1.3.5)", "1.3.5");
/// assert!(!inside);
/// assert!(matches!(errors.as_slice(), [Error::Compare(CompareError::Unsatisfied { .. })]));
/// ```
pub fn in_range(notation: &str, version: &str) -> (bool, Vec<Error>) {
    let interval = match Interval::parse(notation) {
        Ok(interval) => interval,
        Err(err) => return (false, vec![err]),
    };

    let version = match Version::parse(version) {
        Ok(version) => version,
        Err(err) => return (false, vec![err.into()]),
    };

    let (inside, errors) = interval.validate(&version);
    (inside, errors.into_iter().map(Error::from).collect())
}

/// Report whether `version` lies inside the interval described by `notation`,
/// treating any failure as `false`.
///
/// ```
/// assert!(interval_notation::is_in_range("(1.2.3)", "1.2.3"));
/// assert!(!interval_notation::is_in_range("(1.2.3)", "1.2.4"));
/// assert!(!interval_notation::is_in_range("(,)", "1.2.3"));
/// ```
pub fn is_in_range(notation: &str, version: &str) -> bool {
    in_range(notation, version).0
}
