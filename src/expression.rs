use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{
    Closing, Constraint, ConstraintParseError, Constraints, Notation, Opening, ParseError, Version,
    constraint,
};

/// A comparison expression such as `>= 1.2.3, < 1.3.5`.
///
/// Built from a [`Notation`] by [`build_expression`] and compiled into
/// comparison terms by [`Expression::compile`].
#[derive(Clone, Eq, PartialEq, Hash, Debug, Display, Serialize, Deserialize)]
#[display("{_0}")]
#[serde(transparent)]
pub struct Expression(String);

impl Expression {
    /// The expression text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compile the expression into comparison terms.
    pub fn compile(&self) -> Result<Constraints<Version>, ConstraintParseError> {
        constraint::parse(&self.0)
    }
}

impl From<&str> for Expression {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Expression {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The cases interval notation is sorted into, in the order they are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape<'a> {
    /// Neither bound is set.
    Unbounded,

    /// Both bounds are set and separated by a comma.
    Range { lower: &'a str, upper: &'a str },

    /// There is no comma, so the single bound is matched exactly
    /// whatever the braces say.
    Exact(&'a str),

    /// Only the lower bound is set.
    Lower(&'a str),

    /// Only the upper bound is set.
    Upper(&'a str),
}

impl<'a> Shape<'a> {
    fn of(notation: &'a Notation) -> Self {
        let lower = notation.lower().as_str();
        let upper = notation.upper().as_str();
        match (lower.is_empty(), notation.delimited(), upper.is_empty()) {
            (true, _, true) => Shape::Unbounded,
            (false, true, false) => Shape::Range { lower, upper },
            (false, false, _) => Shape::Exact(lower),
            (true, false, false) => Shape::Exact(upper),
            (false, true, true) => Shape::Lower(lower),
            (true, true, false) => Shape::Upper(upper),
        }
    }
}

/// Interpret interval notation as a comparison expression.
///
/// Rules, in order:
/// 1. Both bounds and a comma: a range, e.g. `[1.2.3,1.3.5)` is `>= 1.2.3, < 1.3.5`.
/// 2. No comma: an exact match whatever the braces, e.g. `(1.2.3)` is `= 1.2.3`.
/// 3. Lower bound only: `[1.2.3,)` is `>= 1.2.3`; `(1.2.3,)` is `> 1.2.3`.
/// 4. Upper bound only: `(,1.2.3]` is `<= 1.2.3`; `(,1.2.3)` is `< 1.2.3`.
///
/// Bound text, including any leading `v`, is copied into the expression verbatim.
///
/// ```
/// # use interval_notation::{Notation, build_expression};
/// let notation = Notation::parse("(1.2.3)").unwrap();
/// assert_eq!(build_expression(&notation).unwrap().as_str(), "= 1.2.3");
/// ```
pub fn build_expression(notation: &Notation) -> Result<Expression, ParseError> {
    fn low(opening: Opening, bound: &str) -> Constraint<&str> {
        if opening.inclusive() {
            Constraint::GreaterOrEqual(bound)
        } else {
            Constraint::Greater(bound)
        }
    }

    fn high(closing: Closing, bound: &str) -> Constraint<&str> {
        if closing.inclusive() {
            Constraint::LessOrEqual(bound)
        } else {
            Constraint::Less(bound)
        }
    }

    let (opening, closing) = (notation.opening(), notation.closing());
    let terms = match Shape::of(notation) {
        Shape::Unbounded => {
            return Err(ParseError::Unbounded {
                input: notation.to_string(),
            });
        }
        Shape::Range { lower, upper } => {
            Constraints::from(vec![low(opening, lower), high(closing, upper)])
        }
        Shape::Exact(bound) => Constraints::from(Constraint::Equal(bound)),
        Shape::Lower(bound) => Constraints::from(low(opening, bound)),
        Shape::Upper(bound) => Constraints::from(high(closing, bound)),
    };

    Ok(Expression(terms.to_string()))
}
