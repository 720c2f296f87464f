use closedopt::prelude::*;
use closedopt::{ErrorKind, OptionDeclaration, OptionSchema, OptionType};
use rstest::rstest;

#[macro_use]
extern crate assert_matches;

fn mode() -> OptionSchema {
    OptionSchema::builder()
        .add(OptionDeclaration::string("mode", ["debug", "release"]).default_value("debug"))
        .build()
}

#[rstest]
#[case(vec!["--mode=release"], "release")]
#[case(vec!["--mode=debug"], "debug")]
#[case(vec![], "debug")]
fn string_with_default(#[case] tokens: Vec<&str>, #[case] expected: &str) {
    let schema = mode();
    let result = schema.parse_tokens(tokens.as_slice());
    assert!(result.is_ok());
    assert_eq!(result.get::<String>("mode"), Ok(expected.to_string()));
}

#[rstest]
#[case(vec!["--age=38"], 38)]
#[case(vec![], 22)]
fn integral_with_default(#[case] tokens: Vec<&str>, #[case] expected: i32) {
    let schema = OptionSchema::builder()
        .add(OptionDeclaration::integral("age", ["18", "22", "38"]).default_value("22"))
        .build();
    let result = schema.parse_tokens(tokens.as_slice());
    assert!(result.is_ok());
    assert_eq!(result.get::<i32>("age"), Ok(expected));
}

#[test]
fn integral_undeclared_value() {
    let schema = OptionSchema::builder()
        .add(OptionDeclaration::integral("age", ["18", "22", "38"]).default_value("22"))
        .build();
    let result = schema.parse_tokens(&["--age=ABC"]);
    assert!(!result.is_ok());
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].kind(), ErrorKind::ParseError);
}

#[test]
fn floating_point_negative_fraction_default() {
    let schema = OptionSchema::builder()
        .add(
            OptionDeclaration::floating_point("para3", ["1000.99", "0.0001", "-0.0012345"])
                .default_value("-0.0012345"),
        )
        .build();
    let result = schema.parse_tokens(&[]);
    assert_eq!(result.get::<f64>("para3"), Ok(-0.0012345));
}

#[test]
fn empty_value_rejected() {
    let schema = OptionSchema::builder()
        .add(OptionDeclaration::string("para", ["x", "y"]))
        .build();
    let result = schema.parse_tokens(&["--para="]);
    assert!(!result.is_ok());
    assert_eq!(result.errors()[0].argument(), "--para=");
}

#[test]
fn unknown_option_recorded_verbatim() {
    let schema = OptionSchema::builder()
        .add(OptionDeclaration::integral("para1", ["11", "22", "33"]))
        .build();
    let result = schema.parse_tokens(&["--para2=99"]);
    assert!(!result.is_ok());
    assert_eq!(result.errors()[0].argument(), "--para2=99");
    assert_eq!(
        result.errors()[0].to_string(),
        "'--para2=99' does not match any declared option."
    );
}

#[test]
fn invalid_default_rejected() {
    let result = OptionSchema::builder()
        .add(OptionDeclaration::string("mode", ["debug", "release"]).default_value("fast"))
        .build_schema();
    assert_matches!(result, Err(error) => {
        assert_eq!(
            error.to_string(),
            "Config error: option 'mode' has default 'fast', which is not amongst its values."
        );
    });
}

#[test]
#[should_panic(expected = "has default 'fast'")]
fn invalid_default_fatal() {
    OptionSchema::builder()
        .add(OptionDeclaration::string("mode", ["debug", "release"]).default_value("fast"))
        .build();
}

#[test]
fn get_idempotent() {
    let schema = mode();
    let result = schema.parse_tokens(&["--mode=release"]);
    assert_eq!(result.get::<String>("mode"), result.get::<String>("mode"));
}

#[test]
fn multiple_options() {
    let schema = OptionSchema::builder()
        .add(OptionDeclaration::integral("x", ["1", "2"]))
        .add(OptionDeclaration::string("y", ["red", "blue"]))
        .add(OptionDeclaration::floating_point("z", ["0.5", "1.5"]))
        .build();
    let result = schema.parse_tokens(&["--x=2", "--y=blue", "--z=1.5"]);
    assert!(result.is_ok());
    assert!(result.errors().is_empty());
    assert_eq!(result.get::<i32>("x"), Ok(2));
    assert_eq!(result.get::<String>("y"), Ok("blue".to_string()));
    assert_eq!(result.get::<f64>("z"), Ok(1.5));
}

#[test]
fn partial_failure_keeps_matches() {
    let schema = OptionSchema::builder()
        .add(OptionDeclaration::integral("x", ["1", "2"]))
        .add(OptionDeclaration::string("y", ["red", "blue"]))
        .build();
    let result = schema.parse_argv(["program", "--x=3", "--y=red", "--q=1"]);
    let arguments: Vec<&str> = result.errors().iter().map(|e| e.argument()).collect();
    assert_eq!(arguments, vec!["--x=3", "--q=1"]);
    assert_eq!(result.get::<String>("y"), Ok("red".to_string()));
    assert_eq!(result.get::<i32>("x"), Err(ErrorKind::OptionNotFound));
    assert_matches!(result.into_result(), Err(errors) if errors.len() == 2);
}

#[derive(Debug, PartialEq)]
enum Mode {
    Debug,
    Release,
}

impl OptionValue for Mode {
    const OPTION_TYPE: Option<OptionType> = Some(OptionType::String);

    fn from_raw(raw: &str) -> Result<Self, ErrorKind> {
        match raw {
            "debug" => Ok(Mode::Debug),
            "release" => Ok(Mode::Release),
            _ => Err(ErrorKind::ConversionError),
        }
    }
}

#[test]
fn custom_value() {
    let schema = mode();
    assert_eq!(schema.parse_tokens(&[]).get::<Mode>("mode"), Ok(Mode::Debug));
    assert_eq!(
        schema.parse_tokens(&["--mode=release"]).get::<Mode>("mode"),
        Ok(Mode::Release)
    );
}
