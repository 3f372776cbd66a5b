use assert_matches::assert_matches;
use color_eyre::{Result, eyre::Context};
use interval_notation::{
    ConstraintParseError, Error, Interval, Notation, ParseError, Version, VersionParseError,
};
use miette::Diagnostic;
use pretty_assertions::assert_eq;

#[test]
fn error_wrappable_context() -> Result<()> {
    const INPUT: &str = "[1.2.3,1.3.5)";

    let parsed = Interval::parse(INPUT).context("can wrap")?;
    assert_eq!(parsed.to_string(), INPUT);

    let parsed = Notation::parse(INPUT).context("can wrap")?;
    assert_eq!(parsed.to_string(), INPUT);

    let parsed = Version::parse("v1.2.3").context("can wrap")?;
    assert_eq!(parsed.to_string(), "v1.2.3");

    Ok(())
}

#[test]
fn error_wrappable_withcontext() -> Result<()> {
    const INPUT: &str = "(,v1.3.5]";

    let parsed = Interval::parse(INPUT).with_context(|| format!("parse '{INPUT}'"))?;
    assert_eq!(parsed.expression().as_str(), "<= v1.3.5");

    Ok(())
}

#[test]
fn error_context_reports_cause() {
    let err = Interval::parse("[1.2.3, 1.3.5)")
        .context("parse interval")
        .expect_err("must fail to parse");
    let causes = err.chain().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(
        causes,
        vec![
            String::from("parse interval"),
            String::from("invalid interval notation '[1.2.3, 1.3.5)'"),
        ]
    );
}

#[test]
fn diagnostic_points_at_input() {
    let err = Interval::parse("[1.2.3;1.3.5)").expect_err("must fail to parse");
    assert!(err.source_code().is_some(), "must carry source code");

    let labels = err.labels().expect("must carry labels").collect::<Vec<_>>();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].offset(), 6);
    assert_eq!(labels[0].len(), 1);
}

#[test]
fn diagnostic_help() {
    let err = Interval::parse("1.2.3").expect_err("must fail to parse");
    let help = err.help().expect("must carry help").to_string();
    assert!(help.contains("[1.2.3,1.3.5)"), "help: {help}");
}

#[test]
fn constraint_error_carries_version_source() {
    let err = Interval::parse("[1.2.3.4,1.3.5)").expect_err("must fail to parse");
    assert_matches!(
        &err,
        Error::Constraint(ConstraintParseError::Version { bound, source: VersionParseError::Syntax { .. }, .. })
            if bound == "1.2.3.4"
    );

    let source = std::error::Error::source(&err).expect("must carry a source");
    assert_eq!(source.to_string(), "invalid version '1.2.3.4'");
}

#[test]
fn unbounded_message() {
    let err = Interval::parse("(,)").expect_err("must fail to parse");
    assert_matches!(err, Error::Parse(ParseError::Unbounded { .. }));
    assert_eq!(
        err.to_string(),
        "invalid interval notation '(,)': at least one bound is required"
    );
}
