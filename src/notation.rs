use std::str::FromStr;

use documented::Documented;
use enum_assoc::Assoc;
use getset::{CopyGetters, Getters};
use nom::{
    Finish, IResult, Parser,
    branch::alt,
    bytes::complete::take_while,
    character::complete::char,
    combinator::{all_consuming, opt, value},
};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use tracing::warn;
use utoipa::ToSchema;

use crate::{Options, ParseError, error};

/// The brace opening an interval.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
    ToSchema,
    Assoc,
)]
#[func(pub(crate) const fn inclusive(&self) -> bool)]
pub enum Opening {
    /// `[`: the lower bound is part of the interval.
    #[strum(serialize = "[")]
    #[serde(rename = "[")]
    #[assoc(inclusive = true)]
    Square,

    /// `(`: the lower bound is not part of the interval.
    #[strum(serialize = "(")]
    #[serde(rename = "(")]
    #[assoc(inclusive = false)]
    Round,
}

/// The brace closing an interval.
///
/// Besides `]` and `)`, a `[` is accepted as a closing brace and treated as exclusive.
/// Parsing with [`Options::strict_closing_brace`] rejects it instead.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
    ToSchema,
    Assoc,
)]
#[func(pub(crate) const fn inclusive(&self) -> bool)]
pub enum Closing {
    /// `]`: the upper bound is part of the interval.
    #[strum(serialize = "]")]
    #[serde(rename = "]")]
    #[assoc(inclusive = true)]
    Square,

    /// `)`: the upper bound is not part of the interval.
    #[strum(serialize = ")")]
    #[serde(rename = ")")]
    #[assoc(inclusive = false)]
    Round,

    /// `[` used as a closing brace, as in `[1.2.3,1.3.5[`.
    #[strum(serialize = "[")]
    #[serde(rename = "[")]
    #[assoc(inclusive = false)]
    Reversed,
}

/// The pieces of an interval as written, before they are given any meaning.
///
/// ## Parsing
///
/// The input must consist of exactly:
/// 1. An opening brace: `[` or `(`.
/// 2. An optional lower bound.
/// 3. An optional comma.
/// 4. An optional upper bound.
/// 5. A closing brace: `]`, `)`, or `[`.
///
/// Bounds are made of ASCII letters, digits, `.`, `+`, and `-`,
/// which covers semver versions along with a leading `v`.
/// At least one bound must be present.
///
/// Without a comma the single bound is always the lower bound,
/// so `(1.2.3)` has a lower bound of `1.2.3` and an empty upper bound.
///
/// ```
/// # use interval_notation::{Closing, Notation, Opening};
/// let notation = Notation::parse("[1.2.3,1.3.5)").expect("must parse");
/// assert_eq!(notation.opening(), Opening::Square);
/// assert_eq!(notation.lower(), "1.2.3");
/// assert!(notation.delimited());
/// assert_eq!(notation.upper(), "1.3.5");
/// assert_eq!(notation.closing(), Closing::Round);
/// ```
#[derive(
    Clone,
    Eq,
    PartialEq,
    Hash,
    Debug,
    Getters,
    CopyGetters,
    Serialize,
    Deserialize,
    Documented,
    ToSchema,
)]
#[schema(example = json!({
    "opening": "[",
    "lower": "1.2.3",
    "delimited": true,
    "upper": "1.3.5",
    "closing": ")"
}))]
pub struct Notation {
    /// The brace opening the interval.
    #[getset(get_copy = "pub")]
    opening: Opening,

    /// The text of the lower bound; empty when unbounded below.
    #[getset(get = "pub")]
    lower: String,

    /// Whether a comma separates the bounds.
    #[getset(get_copy = "pub")]
    delimited: bool,

    /// The text of the upper bound; empty when unbounded above.
    #[getset(get = "pub")]
    upper: String,

    /// The brace closing the interval.
    #[getset(get_copy = "pub")]
    closing: Closing,
}

impl Notation {
    /// Parse interval notation with the default [`Options`].
    /// For details, see the parsing section on [`Notation`].
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, &Options::default())
    }

    /// Parse interval notation.
    /// For details, see the parsing section on [`Notation`].
    #[tracing::instrument]
    pub fn parse_with(input: &str, options: &Options) -> Result<Self, ParseError> {
        fn opening(input: &str) -> IResult<&str, Opening> {
            alt((
                value(Opening::Square, char('[')),
                value(Opening::Round, char('(')),
            ))
            .parse(input)
        }

        fn closing(input: &str) -> IResult<&str, Closing> {
            alt((
                value(Closing::Square, char(']')),
                value(Closing::Round, char(')')),
                value(Closing::Reversed, char('[')),
            ))
            .parse(input)
        }

        fn bound(input: &str) -> IResult<&str, &str> {
            take_while(|c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-'))
                .parse(input)
        }

        fn notation(input: &str) -> IResult<&str, (Opening, &str, Option<char>, &str, Closing)> {
            (opening, bound, opt(char(',')), bound, closing).parse(input)
        }

        let (_, (opening, lower, delimiter, upper, closing)) = all_consuming(notation)
            .parse(input)
            .finish()
            .map_err(|err| error::syntax!(ParseError, input => err.input))?;

        if lower.is_empty() && upper.is_empty() {
            return Err(ParseError::Unbounded {
                input: input.to_string(),
            });
        }

        if closing == Closing::Reversed {
            // The whole input was consumed, so the closing brace is its last byte.
            if options.strict_closing_brace() {
                return Err(ParseError::ClosingBrace {
                    input: input.to_string(),
                    span: (input.len() - 1, 1).into(),
                });
            }
            warn!(input, "interval closed with '[', treating it as exclusive");
        }

        Ok(Self {
            opening,
            lower: lower.to_string(),
            delimited: delimiter.is_some(),
            upper: upper.to_string(),
            closing,
        })
    }
}

/// Parse interval notation with the default [`Options`].
///
/// ```
/// # use interval_notation::parse_notation;
/// let notation = parse_notation("(,1.2.3]").expect("must parse");
/// assert_eq!(notation.lower(), "");
/// assert_eq!(notation.upper(), "1.2.3");
/// ```
pub fn parse_notation(input: &str) -> Result<Notation, ParseError> {
    Notation::parse(input)
}

impl FromStr for Notation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the notation as it would be written, e.g. `[1.2.3,1.3.5)`.
impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let delimiter = if self.delimited { "," } else { "" };
        write!(
            f,
            "{}{}{delimiter}{}{}",
            self.opening, self.lower, self.upper, self.closing
        )
    }
}
