//! Unit tests for error handling.

use crate::errors::errors::{
    CompilerError, Delimiter, Expectation, LexErrorKind, LexingError, ParseErrorKind, ParsingError,
};
use crate::Span;

#[test]
fn test_lexing_error_messages() {
    assert_eq!(LexErrorKind::UnclosedSingleQuote.to_string(), "Unclosed single quote.");
    assert_eq!(LexErrorKind::UnclosedDoubleQuote.to_string(), "Unclosed double quote.");
    assert_eq!(LexErrorKind::InvalidToken.to_string(), "Invalid token.");
}

#[test]
fn test_lexing_error_display() {
    let error = LexingError::new(LexErrorKind::InvalidToken, "@@ x".to_string(), Span::new(0, 4));

    assert_eq!(error.to_string(), "Lexing error: Invalid token. `@@ x`");
    assert_eq!(error.get_error_name(), "InvalidToken");
}

#[test]
fn test_expected_messages() {
    assert_eq!(
        ParseErrorKind::Expected(Expectation::Semicolon).to_string(),
        "Expected a semicolon."
    );
    assert_eq!(
        ParseErrorKind::Expected(Expectation::Identifier).to_string(),
        "Expected an identifier."
    );
    assert_eq!(ParseErrorKind::Expected(Expectation::In).to_string(), "Expected `in`.");
}

#[test]
fn test_unclosed_messages() {
    assert_eq!(
        ParseErrorKind::Unclosed(Delimiter::Parenthesis).to_string(),
        "Unclosed parenthesis."
    );
    assert_eq!(
        ParseErrorKind::Unclosed(Delimiter::AngleBracket).to_string(),
        "Unclosed angle bracket."
    );
}

#[test]
fn test_parsing_error_name_and_position() {
    let error = ParsingError::new(ParseErrorKind::AccessModifierNotAllowed, 7);

    assert_eq!(error.token_index, 7);
    assert_eq!(error.get_error_name(), "AccessModifierNotAllowed");
    assert_eq!(error.to_string(), "Access modifiers are not allowed here.");

    let error = ParsingError::new(ParseErrorKind::TokensLeft, 0);
    assert_eq!(error.get_error_name(), "TokensLeft");
}

#[test]
fn test_compiler_error_messages() {
    let error = CompilerError::SymbolRedefinition {
        name: "math.pi".to_string(),
    };
    assert_eq!(error.to_string(), "Redefinition of symbol `math.pi`.");
    assert_eq!(error.get_error_name(), "SymbolRedefinition");

    let error = CompilerError::NamespaceRedefinition {
        name: "math".to_string(),
    };
    assert_eq!(error.to_string(), "Redefinition of namespace `math`.");
}
