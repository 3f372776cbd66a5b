//! Tests for the crate.

use simple_test_case::test_case;

use interval_notation::*;

mod error;

#[test_case(Opening::Square, r#""[""#; "opening_square")]
#[test_case(Opening::Round, r#""(""#; "opening_round")]
#[test]
fn serializes_opening(value: Opening, expected: &str) {
    assert_eq!(expected, serde_json::to_string(&value).unwrap());
}

#[test_case(Closing::Square, r#""]""#; "closing_square")]
#[test_case(Closing::Round, r#"")""#; "closing_round")]
#[test_case(Closing::Reversed, r#""[""#; "closing_reversed")]
#[test]
fn serializes_closing(value: Closing, expected: &str) {
    assert_eq!(expected, serde_json::to_string(&value).unwrap());
}

#[test_case("1.0.0"; "release")]
#[test_case("v1.2.0"; "v_prefix")]
#[test_case("1.2"; "partial")]
#[test_case("1.0.0-alpha.1"; "prerelease")]
#[test_case("1.0.0-rc.10+r1234"; "prerelease_and_build")]
#[test]
fn version_roundtrip(input: &str) {
    let version = Version::parse(input).expect("must parse version");
    let serialized = serde_json::to_string(&version).expect("must serialize");
    assert_eq!(serialized, format!(r#""{input}""#));
    let deserialized: Version = serde_json::from_str(&serialized).expect("must deserialize");
    assert_eq!(version, deserialized);
    assert_eq!(deserialized.as_str(), input);
}

#[test_case(r#""""#; "empty")]
#[test_case(r#""abcd1234""#; "opaque")]
#[test_case(r#""1.2.3.4""#; "four_segments")]
#[test]
fn version_deserialize_invalid(input: &str) {
    serde_json::from_str::<Version>(input).expect_err("must reject invalid version");
}

#[test]
fn options_deserialize_defaults() {
    let options: Options = serde_json::from_str("{}").expect("must deserialize");
    assert_eq!(options, Options::default());
    assert_eq!(options.prerelease(), Prerelease::OptIn);

    let options: Options =
        serde_json::from_str(r#"{"prerelease":"ordered"}"#).expect("must deserialize");
    assert_eq!(options.prerelease(), Prerelease::Ordered);
    assert!(!options.strict_closing_brace());
}

#[test_case("ordered", Prerelease::Ordered; "ordered")]
#[test_case("opt_in", Prerelease::OptIn; "opt_in")]
#[test]
fn prerelease_from_str(input: &str, expected: Prerelease) {
    assert_eq!(input.parse::<Prerelease>().expect("must parse"), expected);
    assert_eq!(expected.to_string(), input);
}
