//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric, character and string literals
//! - Longest-match operators and generic-open disambiguation
//! - Comments and configuration switches
//! - Error cases

use super::{
    lexer::{lex, lex_with_config},
    tokens::{Token, TokenKind},
};
use crate::{config::LexerConfig, errors::errors::LexErrorKind, Span};

fn summary(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|token| (token.kind, token.text.as_str())).collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "namespace pub using var func method struct trait cases if else while do for in break continue return as mut";
    let (tokens, errors) = lex(source);

    assert!(errors.is_empty());
    assert_eq!(tokens.len(), 20);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Keyword));
    assert_eq!(tokens[0].text, "namespace");
    assert_eq!(tokens[19].text, "mut");
}

#[test]
fn test_tokenize_identifiers() {
    let (tokens, errors) = lex("foo bar_1 _under CamelCase variable iffy");

    assert!(errors.is_empty());
    assert_eq!(
        summary(&tokens),
        vec![
            (TokenKind::Identifier, "foo"),
            (TokenKind::Identifier, "bar_1"),
            (TokenKind::Identifier, "_under"),
            (TokenKind::Identifier, "CamelCase"),
            (TokenKind::Identifier, "variable"),
            (TokenKind::Identifier, "iffy"),
        ]
    );
}

#[test]
fn test_tokenize_numbers() {
    let (tokens, errors) = lex("0 42 1_000_000");

    assert!(errors.is_empty());
    assert_eq!(
        summary(&tokens),
        vec![
            (TokenKind::Number, "0"),
            (TokenKind::Number, "42"),
            (TokenKind::Number, "1_000_000"),
        ]
    );
}

#[test]
fn test_tokenize_numbers_without_separators() {
    let config = LexerConfig::default().with_digit_separators(false);
    let (tokens, errors) = lex_with_config("1_000", &config);

    assert!(errors.is_empty());
    assert_eq!(
        summary(&tokens),
        vec![(TokenKind::Number, "1"), (TokenKind::Identifier, "_000")]
    );
}

#[test]
fn test_tokenize_character_and_string_literals() {
    let source = r#"'a' '\'' "hello" "say \"hi\"" "back\\""#;
    let (tokens, errors) = lex(source);

    assert!(errors.is_empty());
    assert_eq!(
        summary(&tokens),
        vec![
            (TokenKind::Character, "'a'"),
            (TokenKind::Character, r"'\''"),
            (TokenKind::String, r#""hello""#),
            (TokenKind::String, r#""say \"hi\"""#),
            (TokenKind::String, r#""back\\""#),
        ]
    );
}

#[test]
fn test_tokenize_operators_longest_match() {
    let (tokens, errors) = lex("= == => === != ! &&& += <=");

    assert!(errors.is_empty());
    let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();
    assert_eq!(texts, vec!["=", "==", "=>", "==", "=", "!=", "!", "&&", "&", "+=", "<="]);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Operator));
}

#[test]
fn test_tokenize_punctuation() {
    let (tokens, errors) = lex("(){}[].,;");

    assert!(errors.is_empty());
    let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();
    assert_eq!(texts, vec!["(", ")", "{", "}", "[", "]", ".", ",", ";"]);
}

#[test]
fn test_generic_open_depends_on_preceding_character() {
    let (tokens, errors) = lex("List<T> a < b c<d <e");

    assert!(errors.is_empty());
    assert_eq!(
        summary(&tokens),
        vec![
            (TokenKind::Identifier, "List"),
            (TokenKind::GenericOpen, "<"),
            (TokenKind::Identifier, "T"),
            (TokenKind::Operator, ">"),
            (TokenKind::Identifier, "a"),
            (TokenKind::Operator, "<"),
            (TokenKind::Identifier, "b"),
            (TokenKind::Identifier, "c"),
            (TokenKind::GenericOpen, "<"),
            (TokenKind::Identifier, "d"),
            (TokenKind::Operator, "<"),
            (TokenKind::Identifier, "e"),
        ]
    );
}

#[test]
fn test_less_equal_is_never_generic_open() {
    let (tokens, _) = lex("a<=b");

    assert_eq!(tokens[1].kind, TokenKind::Operator);
    assert_eq!(tokens[1].text, "<=");
}

#[test]
fn test_generic_close_is_not_split_from_equals() {
    let (joined, _) = lex("List<T>= y");
    let (spaced, _) = lex("List<T> = y");

    assert_eq!(
        summary(&joined)[3..],
        [(TokenKind::Operator, ">="), (TokenKind::Identifier, "y")]
    );
    assert_eq!(
        summary(&spaced)[3..],
        [
            (TokenKind::Operator, ">"),
            (TokenKind::Operator, "="),
            (TokenKind::Identifier, "y")
        ]
    );
}

#[test]
fn test_generic_open_at_start_of_source() {
    let (tokens, _) = lex("<");

    assert_eq!(tokens[0].kind, TokenKind::Operator);
}

#[test]
fn test_token_spans() {
    let (tokens, _) = lex("func  f()");

    assert_eq!(tokens[0].span, Span::new(0, 4));
    assert_eq!(tokens[1].span, Span::new(6, 7));
    assert_eq!(tokens[2].span, Span::new(7, 8));
    assert_eq!(tokens[3].span, Span::new(8, 9));
}

#[test]
fn test_line_comments_are_skipped() {
    let (tokens, errors) = lex("a // the rest ( is \" ignored\nb");

    assert!(errors.is_empty());
    assert_eq!(
        summary(&tokens),
        vec![(TokenKind::Identifier, "a"), (TokenKind::Identifier, "b")]
    );
}

#[test]
fn test_line_comments_can_be_disabled() {
    let config = LexerConfig::default().with_line_comments(false);
    let (tokens, errors) = lex_with_config("a // b", &config);

    assert!(errors.is_empty());
    let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "/", "/", "b"]);
}

#[test]
fn test_unclosed_single_quote() {
    let (tokens, errors) = lex("'abc\nx");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexErrorKind::UnclosedSingleQuote);
    assert_eq!(errors[0].text, "'abc");
    assert_eq!(errors[0].span, Span::new(0, 4));
    assert_eq!(summary(&tokens), vec![(TokenKind::Identifier, "x")]);
}

#[test]
fn test_unclosed_double_quote_stops_before_line_break() {
    let (tokens, errors) = lex("\"abc\r\nvar");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexErrorKind::UnclosedDoubleQuote);
    assert_eq!(errors[0].text, "\"abc");
    assert_eq!(summary(&tokens), vec![(TokenKind::Keyword, "var")]);
}

#[test]
fn test_string_cannot_span_lines() {
    let (tokens, errors) = lex("\"a\nb\"");

    let kinds: Vec<LexErrorKind> = errors.iter().map(|error| error.kind).collect();
    assert_eq!(kinds, vec![LexErrorKind::UnclosedDoubleQuote, LexErrorKind::UnclosedDoubleQuote]);
    assert_eq!(errors[0].text, "\"a");
    assert_eq!(errors[1].text, "\"");
    assert_eq!(summary(&tokens), vec![(TokenKind::Identifier, "b")]);
}

#[test]
fn test_invalid_token_skips_rest_of_line() {
    let (tokens, errors) = lex("a @ b\nc");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexErrorKind::InvalidToken);
    assert_eq!(errors[0].text, "@ b");
    assert_eq!(errors[0].span, Span::new(2, 5));
    assert_eq!(errors[0].get_error_name(), "InvalidToken");
    assert_eq!(
        summary(&tokens),
        vec![(TokenKind::Identifier, "a"), (TokenKind::Identifier, "c")]
    );
}

#[test]
fn test_invalid_multibyte_character() {
    let (tokens, errors) = lex("é\nx");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].text, "é");
    assert_eq!(summary(&tokens), vec![(TokenKind::Identifier, "x")]);
}

#[test]
fn test_empty_and_blank_sources() {
    for source in ["", "   ", "\n\t\r\n", "// only a comment"] {
        let (tokens, errors) = lex(source);
        assert!(tokens.is_empty(), "{:?}", source);
        assert!(errors.is_empty(), "{:?}", source);
    }
}

#[test]
fn test_tokenize_function_definition() {
    let (tokens, errors) = lex("func f(x int32) int32 { return x + 1; }");

    assert!(errors.is_empty());
    assert_eq!(
        summary(&tokens),
        vec![
            (TokenKind::Keyword, "func"),
            (TokenKind::Identifier, "f"),
            (TokenKind::Operator, "("),
            (TokenKind::Identifier, "x"),
            (TokenKind::Identifier, "int32"),
            (TokenKind::Operator, ")"),
            (TokenKind::Identifier, "int32"),
            (TokenKind::Operator, "{"),
            (TokenKind::Keyword, "return"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Operator, "+"),
            (TokenKind::Number, "1"),
            (TokenKind::Operator, ";"),
            (TokenKind::Operator, "}"),
        ]
    );
}

#[test]
fn test_token_display() {
    let (tokens, _) = lex("List<");

    assert_eq!(tokens[0].to_string(), "identifier `List`");
    assert_eq!(tokens[1].to_string(), "generic open `<`");
}
