use rstest::rstest;

use crate::{InputErrorKind, InvalidInputError, Status, Validator};

/// Drives a fresh validator until the first rejection.
fn rejection(text: &str) -> InvalidInputError {
    let mut validator = Validator::new();
    for c in text.chars() {
        if let Err(err) = validator.input(c) {
            assert_eq!(
                validator.output(),
                Status::Invalid,
                "rejection poisons: {text:?}"
            );
            return err;
        }
    }
    panic!("accepted in full: {text:?}")
}

fn assert_err_contains(err: &InvalidInputError, needle: &str, line: usize, column: usize) {
    let display = err.to_string();
    assert!(display.contains(needle), "unexpected message {display:?}");
    assert_eq!(err.line(), line, "line in {display:?}");
    assert_eq!(err.column(), column, "column in {display:?}");
}

#[rstest]
#[case::array_root("[]", "invalid character '['", 1, 1)]
#[case::string_root(r#""root""#, "invalid character '\"'", 1, 1)]
#[case::colon_root(":", "invalid character ':'", 1, 1)]
#[case::comma_root(",", "invalid character ','", 1, 1)]
#[case::close_root("}", "invalid character '}'", 1, 1)]
#[case::letter_root("x", "invalid character 'x'", 1, 1)]
#[case::unquoted_key("{name:", "invalid character 'n'", 1, 2)]
#[case::object_directly_in_object("{{", "invalid character '{'", 1, 2)]
#[case::array_directly_in_object("{[", "invalid character '['", 1, 2)]
#[case::colon_in_key(r#"{"name:"#, "invalid character ':'", 1, 7)]
#[case::symbol_in_key(r#"{"n@me""#, "invalid character '@'", 1, 4)]
#[case::space_in_key(r#"{"name":{"First Name"}}"#, "invalid character ' '", 1, 16)]
#[case::comma_before_any_colon(r#"{"name","Some Name""#, "invalid character ','", 1, 8)]
#[case::close_without_a_pair(r#"{"name"}"#, "invalid character '}'", 1, 8)]
#[case::quote_after_a_closed_key(r#"{"name"""#, "invalid character '\"'", 1, 8)]
#[case::empty_array(r#"{"a":[]}"#, "invalid character ']'", 1, 7)]
#[case::colon_in_array(r#"{"a":["x":"#, "invalid character ':'", 1, 10)]
#[case::brace_close_on_an_array(r#"{"crn":["x"}"#, "invalid character '}'", 1, 12)]
#[case::bracket_close_on_an_object(r#"{"a":"b"]"#, "invalid character ']'", 1, 9)]
#[case::close_after_a_comma(r#"{"a":"1",}"#, "invalid character '}'", 1, 10)]
#[case::semicolon_separator(r#"{"a":"1";"#, "invalid character ';'", 1, 9)]
#[case::value_brace_shadows_the_colon(r#"{"a":"x{y"}"#, "invalid character '}'", 1, 11)]
#[case::digit_key_after_comma(r#"{"a":"1","2"#, "invalid character '2'", 1, 11)]
#[case::across_lines("{\"a\":[\n  ]", "invalid character ']'", 2, 3)]
fn rejects_with_position(
    #[case] text: &str,
    #[case] needle: &str,
    #[case] line: usize,
    #[case] column: usize,
) {
    assert_err_contains(&rejection(text), needle, line, column);
}

#[test]
fn error_key_cannot_start_with_a_digit() {
    for digit in '0'..='9' {
        let text = format!("{{\"{digit}");
        assert_err_contains(
            &rejection(&text),
            &format!("invalid character '{digit}'"),
            1,
            3,
        );
    }
}

#[test]
fn error_trailing_content() {
    let err = rejection("{}{");
    assert!(matches!(err.kind(), InputErrorKind::TrailingContent('{')));
    assert_err_contains(&err, "trailing content", 1, 3);

    // Spaces after the close are fine; anything else is not.
    let err = rejection("{} x");
    assert!(matches!(err.kind(), InputErrorKind::TrailingContent('x')));
    assert_err_contains(&err, "trailing content", 1, 4);

    // Controls are only dropped while the document is still in progress.
    let err = rejection("{}\n");
    assert!(matches!(err.kind(), InputErrorKind::TrailingContent('\n')));
    assert_eq!((err.line(), err.column()), (1, 3));
}

#[test]
fn error_poisoned_validator_stays_poisoned() {
    let mut validator = Validator::new();
    validator.input('[').expect_err("arrays cannot be the root");

    let err = validator.input('x').expect_err("poisoned");
    assert!(matches!(err.kind(), InputErrorKind::Poisoned));
    assert_err_contains(&err, "already invalid", 1, 2);

    // Whitespace controls are still silently dropped.
    validator.input('\n').expect("controls stay no-ops");

    let err = validator.input('{').expect_err("still poisoned");
    assert!(matches!(err.kind(), InputErrorKind::Poisoned));
    assert_err_contains(&err, "already invalid", 2, 1);
    assert_eq!(validator.output(), Status::Invalid);
}

#[test]
fn error_feed_reports_the_first_offence() {
    let mut validator = Validator::new();
    let err = validator
        .feed(r#"{"a":[]}"#)
        .expect_err("the empty array cannot close");
    assert!(matches!(err.kind(), InputErrorKind::InvalidCharacter(']')));
    assert_eq!(err.column(), 7);
}
