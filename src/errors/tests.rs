//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.lang".to_string()))
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assign,
            received: TokenKind::Int,
        },
        at(6),
    );

    assert_eq!(error.to_string(), "Expected token ASSIGN, got INT instead");
    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 6);
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assign,
            received: TokenKind::Int,
        }
    );
}

#[test]
fn test_no_prefix_message() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Semicolon,
        },
        at(0),
    );

    assert_eq!(error.to_string(), "No prefix parse function for SEMICOLON");
    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
}

#[test]
fn test_integer_parse_message() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            literal: "99999999999".to_string(),
        },
        at(0),
    );

    assert_eq!(error.to_string(), "Could not parse 99999999999 as integer");
    assert_eq!(error.get_error_name(), "IntegerParseError");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Semicolon,
        },
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::RBrace,
            received: TokenKind::Eof,
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "block is never closed"),
        _ => panic!("Expected suggestion tip"),
    }

    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Illegal,
        },
        at(0),
    );
    assert_eq!(error.get_tip().to_string(), "unrecognised character");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_nesting_too_deep_message() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, at(0));

    assert_eq!(error.to_string(), "Nesting exceeds the limit of 256 levels");
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}
