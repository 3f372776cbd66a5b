use bon::Builder;
use documented::Documented;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Controls how interval notation is parsed and how versions are evaluated against it.
///
/// By default `[` is accepted as a closing brace,
/// and a pre-release version only satisfies bounds that are pre-releases themselves.
///
/// ```
/// # use interval_notation::{Options, Prerelease};
/// let options = Options::builder()
///     .strict_closing_brace(true)
///     .prerelease(Prerelease::Ordered)
///     .build();
/// assert!(options.strict_closing_brace());
/// assert_eq!(options.prerelease(), Prerelease::Ordered);
/// assert_eq!(Options::default().prerelease(), Prerelease::OptIn);
/// ```
#[derive(
    Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Builder, Serialize, Deserialize, Documented,
)]
#[serde(default)]
pub struct Options {
    /// Reject `[` as a closing brace.
    ///
    /// Notation like `[1.2.3,1.3.5[` is otherwise accepted,
    /// with the `[` treated as an exclusive closing brace.
    #[builder(default)]
    strict_closing_brace: bool,

    /// How pre-release versions are matched against bounds.
    #[builder(default)]
    prerelease: Prerelease,
}

impl Options {
    /// Whether `[` is rejected as a closing brace.
    pub fn strict_closing_brace(&self) -> bool {
        self.strict_closing_brace
    }

    /// How pre-release versions are matched against bounds.
    pub fn prerelease(&self) -> Prerelease {
        self.prerelease
    }
}

/// How pre-release versions take part in comparisons.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Debug,
    Default,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Prerelease {
    /// Pre-releases are ordered by semver precedence like any other version:
    /// `1.2.4-alpha.2` lies inside `(1.2.3,1.3.5)`.
    Ordered,

    /// A pre-release version only satisfies a comparison whose bound is itself a pre-release:
    /// `1.5.0-beta` lies outside `[1.0.0,2.0.0)`, but `1.2.4-alpha.2` lies inside
    /// `(1.2.3-alpha.1,1.3.5-0)`.
    #[default]
    OptIn,
}
