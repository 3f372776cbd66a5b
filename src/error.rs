use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Records all errors reported by this library.
#[derive(Error, Diagnostic, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Errors encountered while parsing interval notation.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    /// Errors encountered while compiling an operator expression.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Constraint(#[from] ConstraintParseError),

    /// Errors encountered while parsing a version.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Version(#[from] VersionParseError),

    /// A version failed one of the comparisons in an interval.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Compare(#[from] CompareError),
}

/// Errors encountered when parsing a [`Notation`](crate::Notation) from a string.
#[derive(Error, Diagnostic, Debug)]
#[non_exhaustive]
pub enum ParseError {
    /// The input did not match the interval grammar.
    #[error("invalid interval notation '{input}'")]
    #[diagnostic(help("expected an interval like '[1.2.3,1.3.5)', '(,1.2.3]' or '[1.2.3]'"))]
    Syntax {
        /// The input originally provided.
        #[source_code]
        input: String,

        /// The location of the error.
        #[label("unexpected input")]
        span: SourceSpan,
    },

    /// The input matched the grammar but neither bound was set.
    #[error("invalid interval notation '{input}': at least one bound is required")]
    Unbounded {
        /// The input originally provided.
        input: String,
    },

    /// A `[` closed the interval while strict closing braces were requested.
    #[error("invalid interval notation '{input}': '[' is not a closing brace")]
    #[diagnostic(help("close the interval with ']' or ')'"))]
    ClosingBrace {
        /// The input originally provided.
        #[source_code]
        input: String,

        /// The location of the closing brace.
        #[label("closes the interval")]
        span: SourceSpan,
    },
}

/// Errors encountered when compiling an [`Expression`](crate::Expression).
#[derive(Error, Diagnostic, Debug)]
#[non_exhaustive]
pub enum ConstraintParseError {
    /// The expression did not match the operator expression grammar.
    #[error("invalid constraint expression '{input}'")]
    Syntax {
        /// The expression originally provided.
        #[source_code]
        input: String,

        /// The location of the error.
        #[label("unexpected input")]
        span: SourceSpan,
    },

    /// A bound in the expression is not a valid version.
    #[error("invalid constraint expression '{input}': bound '{bound}' is not a valid version")]
    Version {
        /// The expression originally provided.
        input: String,

        /// The bound that failed to parse.
        bound: String,

        /// The cause of the error.
        #[source]
        source: VersionParseError,
    },
}

/// Errors encountered when parsing a [`Version`](crate::Version).
#[derive(Error, Diagnostic, Debug)]
#[non_exhaustive]
pub enum VersionParseError {
    /// The provided value was empty.
    #[error("version was empty")]
    Empty,

    /// The input does not start with a numeric version core,
    /// or the core is followed by something other than a pre-release or build.
    #[error("invalid version '{input}'")]
    Syntax {
        /// The input originally provided.
        #[source_code]
        input: String,

        /// The location of the error.
        #[label("unexpected input")]
        span: SourceSpan,
    },

    /// The pre-release or build metadata is not valid semver.
    #[error("invalid version '{input}': {source}")]
    Semver {
        /// The input originally provided.
        input: String,

        /// The cause of the error.
        #[source]
        source: semver::Error,
    },
}

/// Reports a single comparison term in an interval that a version failed.
#[derive(Error, Diagnostic, Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum CompareError {
    /// The version is outside the bound.
    #[error("'{version}' does not satisfy '{constraint}'")]
    Unsatisfied {
        /// The version being compared.
        version: String,

        /// The comparison term it failed.
        constraint: String,
    },

    /// The version is a pre-release, and pre-releases must be opted into by the bound.
    #[error("'{version}' is a pre-release, which '{constraint}' does not admit")]
    Prerelease {
        /// The version being compared.
        version: String,

        /// The comparison term it failed.
        constraint: String,
    },
}

/// Return the span of the first character of `remaining`, which must be a suffix of `input`.
pub(crate) fn span(input: &str, remaining: &str) -> SourceSpan {
    let offset = input.len().saturating_sub(remaining.len());
    let len = remaining.chars().next().map_or(0, char::len_utf8);
    (offset, len).into()
}

/// Construct and return a `Syntax` variant of the named error type.
///
/// Provide the input along with the unparsed remainder at which the parser stopped.
///
/// ```ignore
/// error::syntax!(ParseError, input => remaining);
/// ```
macro_rules! syntax {
    ($kind:ident, $input:expr => $remaining:expr) => {
        $crate::error::$kind::Syntax {
            input: $input.to_string(),
            span: $crate::error::span($input, $remaining),
        }
    };
}
pub(crate) use syntax;
