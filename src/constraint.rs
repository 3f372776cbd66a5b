//! # Comparison Constraints over Versions
//!
//! Interval notation is evaluated by compiling it to an operator expression,
//! e.g. `[1.2.3,1.3.5)` becomes `>= 1.2.3, < 1.3.5`, and then compiling that expression
//! into a set of comparison terms. This module implements the second half:
//!
//! - [`Comparable<V>`]: the comparison rules between a bound and a target version
//! - [`Constraint<V>`]: a single comparison term (`>= 1.2.3`)
//! - [`Constraints<V>`]: comparison terms combined with AND logic
//! - [`parse`]: compiles an operator expression into [`Constraints<Version>`]
//!
//! ## Expression Grammar
//!
//! Terms are separated by commas; whitespace around commas and operators is ignored.
//! Each term is an optional operator followed by a version:
//!
//! - `=` (also used when the operator is omitted), `>`, `>=`, `<`, `<=`
//!
//! Versions are parsed with [`Version::parse`], so bounds like `v1.2` are accepted.

use documented::Documented;
use enum_assoc::Assoc;
use nom::{
    Finish, IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0},
    combinator::{all_consuming, opt},
    multi::separated_list1,
    sequence::{delimited, preceded},
};
use serde::{Deserialize, Serialize};

use crate::{CompareError, ConstraintParseError, Prerelease, Version, error};

/// Compares a bound against a target version.
///
/// The comparison direction is reversed from what one might expect:
/// `Self` is the bound in the constraint, and `V` is the version being evaluated.
/// So `bound.less(v)` checks whether `v` is less than `bound`,
/// which is what the constraint `< bound` asks.
pub trait Comparable<V> {
    /// Whether `v` is equal to the bound (`=` operator).
    fn equal(&self, v: &V) -> bool;

    /// Whether `v` is less than the bound (`<` operator).
    fn less(&self, v: &V) -> bool;

    /// Whether `v` is greater than the bound (`>` operator).
    fn greater(&self, v: &V) -> bool;

    /// Whether `v` is less than or equal to the bound (`<=` operator).
    fn less_or_equal(&self, v: &V) -> bool {
        self.equal(v) || self.less(v)
    }

    /// Whether `v` is greater than or equal to the bound (`>=` operator).
    fn greater_or_equal(&self, v: &V) -> bool {
        self.equal(v) || self.greater(v)
    }
}

impl Comparable<Version> for Version {
    fn equal(&self, v: &Version) -> bool {
        v == self
    }

    fn less(&self, v: &Version) -> bool {
        v < self
    }

    fn greater(&self, v: &Version) -> bool {
        v > self
    }

    fn less_or_equal(&self, v: &Version) -> bool {
        v <= self
    }

    fn greater_or_equal(&self, v: &Version) -> bool {
        v >= self
    }
}

/// A single comparison term: an operator and the bound it compares against.
///
/// `V` is the type of the bound. Interval notation compiles to `Constraint<Version>`,
/// while the expression builder renders terms as `Constraint<&str>` so that bound text
/// reaches the expression verbatim.
///
/// ```
/// # use interval_notation::{Constraint, Version};
/// let constraint = Constraint::GreaterOrEqual(Version::parse("1.2.3").unwrap());
/// assert_eq!(constraint.to_string(), ">= 1.2.3");
/// assert!(constraint.matches(&Version::parse("1.2.4").unwrap()));
/// ```
///
/// ## Serialization
///
/// The serialized format is for transporting this type, not for parsing expressions:
/// it is tagged with `kind` and `value` fields.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, Documented, Assoc,
)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
#[func(pub(crate) const fn bound(&self) -> &V)]
#[non_exhaustive]
pub enum Constraint<V> {
    /// Matches versions equal to the bound (`=`).
    #[assoc(bound = &_0)]
    Equal(V),

    /// Matches versions strictly less than the bound (`<`).
    #[assoc(bound = &_0)]
    Less(V),

    /// Matches versions less than or equal to the bound (`<=`).
    #[assoc(bound = &_0)]
    LessOrEqual(V),

    /// Matches versions strictly greater than the bound (`>`).
    #[assoc(bound = &_0)]
    Greater(V),

    /// Matches versions greater than or equal to the bound (`>=`).
    #[assoc(bound = &_0)]
    GreaterOrEqual(V),
}

impl<V> Constraint<V> {
    /// Evaluates whether a version satisfies this term.
    ///
    /// Dispatches to the method on [`Comparable`] matching the operator.
    pub fn matches<T>(&self, version: &T) -> bool
    where
        V: Comparable<T>,
    {
        match self {
            Constraint::Equal(s) => s.equal(version),
            Constraint::Less(s) => s.less(version),
            Constraint::LessOrEqual(s) => s.less_or_equal(version),
            Constraint::Greater(s) => s.greater(version),
            Constraint::GreaterOrEqual(s) => s.greater_or_equal(version),
        }
    }

    /// The operator of this term, as written in an expression.
    pub fn operator(&self) -> &'static str {
        match self {
            Constraint::Equal(_) => "=",
            Constraint::Less(_) => "<",
            Constraint::LessOrEqual(_) => "<=",
            Constraint::Greater(_) => ">",
            Constraint::GreaterOrEqual(_) => ">=",
        }
    }
}

impl<V: std::fmt::Display> std::fmt::Display for Constraint<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.operator(), self.bound())
    }
}

impl<V> AsRef<V> for Constraint<V> {
    fn as_ref(&self) -> &V {
        self.bound()
    }
}

/// Comparison terms combined with AND logic: a version must satisfy every term.
///
/// ```
/// # use interval_notation::{Constraints, Version, constraints};
/// let range = constraints!(
///     { GreaterOrEqual => "1.2.3" },
///     { Less => "1.3.5" },
/// );
/// assert!(range.all_match(&Version::parse("1.2.4").unwrap()));
/// assert!(!range.all_match(&Version::parse("1.3.5").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize, Documented)]
#[non_exhaustive]
pub struct Constraints<V>(Vec<Constraint<V>>);

impl<V> Constraints<V> {
    /// Iterate over the terms in the set.
    pub fn iter(&self) -> impl Iterator<Item = &Constraint<V>> {
        self.0.iter()
    }

    /// Unpack into an iterator of terms.
    #[allow(clippy::should_implement_trait)]
    pub fn into_iter(self) -> impl Iterator<Item = Constraint<V>> {
        self.0.into_iter()
    }

    /// The number of terms in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no terms.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Evaluates whether a version satisfies every term.
    ///
    /// Short circuits on the first term that fails.
    pub fn all_match<T>(&self, version: &T) -> bool
    where
        V: Comparable<T>,
    {
        self.iter().all(|constraint| constraint.matches(version))
    }
}

impl Constraints<Version> {
    /// Evaluates a version against every term under the given pre-release policy,
    /// reporting each term it fails.
    ///
    /// Unlike [`Constraints::all_match`] this does not short circuit,
    /// so the returned errors name every failed term.
    pub fn validate(
        &self,
        version: &Version,
        prerelease: Prerelease,
    ) -> (bool, Vec<CompareError>) {
        let errors = self
            .iter()
            .filter_map(|constraint| check(constraint, version, prerelease))
            .collect::<Vec<_>>();
        (errors.is_empty(), errors)
    }

    /// Evaluates whether a version satisfies every term under the given pre-release policy.
    pub fn matches(&self, version: &Version, prerelease: Prerelease) -> bool {
        self.iter()
            .all(|constraint| check(constraint, version, prerelease).is_none())
    }
}

/// Check a single term, returning the reason it failed if it did.
fn check(
    constraint: &Constraint<Version>,
    version: &Version,
    prerelease: Prerelease,
) -> Option<CompareError> {
    if prerelease == Prerelease::OptIn
        && version.is_prerelease()
        && !constraint.bound().is_prerelease()
    {
        return Some(CompareError::Prerelease {
            version: version.to_string(),
            constraint: constraint.to_string(),
        });
    }

    if constraint.matches(version) {
        None
    } else {
        Some(CompareError::Unsatisfied {
            version: version.to_string(),
            constraint: constraint.to_string(),
        })
    }
}

impl<I, T, V> From<I> for Constraints<V>
where
    I: IntoIterator<Item = T>,
    T: Into<Constraint<V>>,
{
    fn from(constraints: I) -> Self {
        Self(constraints.into_iter().map(Into::into).collect())
    }
}

impl<V> From<Constraint<V>> for Constraints<V> {
    fn from(constraint: Constraint<V>) -> Self {
        Self(vec![constraint])
    }
}

/// Renders the terms as an operator expression, e.g. `>= 1.2.3, < 1.3.5`.
impl<V: std::fmt::Display> std::fmt::Display for Constraints<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, constraint) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{constraint}")?;
        }
        Ok(())
    }
}

/// Compile an operator expression into a set of constraints.
///
/// For the accepted grammar, see the [module documentation](self).
///
/// ```
/// # use interval_notation::{Version, constraint};
/// let constraints = constraint::parse(">= 1.2.3, < v1.3.5").unwrap();
/// assert!(constraints.all_match(&Version::parse("1.3.0").unwrap()));
/// ```
#[tracing::instrument]
pub fn parse(input: &str) -> Result<Constraints<Version>, ConstraintParseError> {
    fn operator(input: &str) -> IResult<&str, &str> {
        alt((tag(">="), tag("<="), tag(">"), tag("<"), tag("="))).parse(input)
    }

    fn bound(input: &str) -> IResult<&str, &str> {
        take_while1(|c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-'))
            .parse(input)
    }

    fn term(input: &str) -> IResult<&str, (Option<&str>, &str)> {
        (opt(operator), preceded(multispace0, bound)).parse(input)
    }

    fn terms(input: &str) -> IResult<&str, Vec<(Option<&str>, &str)>> {
        separated_list1(delimited(multispace0, char(','), multispace0), term).parse(input)
    }

    let (_, terms) = all_consuming(delimited(multispace0, terms, multispace0))
        .parse(input)
        .finish()
        .map_err(|err| error::syntax!(ConstraintParseError, input => err.input))?;

    terms
        .into_iter()
        .map(|(op, bound)| {
            let version =
                Version::parse(bound).map_err(|source| ConstraintParseError::Version {
                    input: input.to_string(),
                    bound: bound.to_string(),
                    source,
                })?;

            Ok(match op {
                Some(">=") => Constraint::GreaterOrEqual(version),
                Some(">") => Constraint::Greater(version),
                Some("<=") => Constraint::LessOrEqual(version),
                Some("<") => Constraint::Less(version),
                // An omitted operator means equality.
                _ => Constraint::Equal(version),
            })
        })
        .collect::<Result<Vec<_>, ConstraintParseError>>()
        .map(Constraints::from)
}

/// Construct a [`Constraint<Version>`](Constraint) from a version literal.
///
/// Panics if the literal is not a valid version.
///
/// ```
/// # use interval_notation::{Constraint, Version};
/// let constraint = interval_notation::constraint!(Less => "1.3.5");
/// let expected = Constraint::Less(Version::parse("1.3.5").unwrap());
/// assert_eq!(constraint, expected);
/// ```
#[macro_export]
macro_rules! constraint {
    ($variant:ident => $version:expr) => {
        $crate::Constraint::$variant(
            $crate::Version::parse($version).expect("constraint literal must be a valid version"),
        )
    };
}

/// Construct [`Constraints<Version>`](Constraints) from version literals.
///
/// Panics if any literal is not a valid version.
///
/// ```
/// # use interval_notation::{Constraint, Constraints, Version};
/// let constraints = interval_notation::constraints!(
///     { GreaterOrEqual => "1.2.3" },
///     { Less => "1.3.5" },
/// );
/// let expected = Constraints::from(vec![
///     Constraint::GreaterOrEqual(Version::parse("1.2.3").unwrap()),
///     Constraint::Less(Version::parse("1.3.5").unwrap()),
/// ]);
/// assert_eq!(constraints, expected);
/// ```
#[macro_export]
macro_rules! constraints {
    ($({ $variant:ident => $version:expr }),* $(,)?) => {
        $crate::Constraints::from(vec![
            $(
                $crate::constraint!($variant => $version)
            ),*
        ])
    };
}
