use std::fmt::Display;

use thiserror::Error;

use crate::Span;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("Unclosed single quote.")]
    UnclosedSingleQuote,
    #[error("Unclosed double quote.")]
    UnclosedDoubleQuote,
    #[error("Invalid token.")]
    InvalidToken,
}

/// A lexing failure together with the raw text that was consumed for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Lexing error: {kind} `{text}`")]
pub struct LexingError {
    pub kind: LexErrorKind,
    pub text: String,
    pub span: Span,
}

impl LexingError {
    pub fn new(kind: LexErrorKind, text: String, span: Span) -> Self {
        LexingError { kind, text, span }
    }

    pub fn get_error_name(&self) -> &str {
        match self.kind {
            LexErrorKind::UnclosedSingleQuote => "UnclosedSingleQuote",
            LexErrorKind::UnclosedDoubleQuote => "UnclosedDoubleQuote",
            LexErrorKind::InvalidToken => "InvalidToken",
        }
    }
}

/// What a rule was looking for when it reported an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Semicolon,
    Identifier,
    Type,
    Expression,
    Operand,
    Block,
    ParameterList,
    Statement,
    TopLevelStatement,
    Field,
    Case,
    In,
    While,
}

impl Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Expectation::Semicolon => "a semicolon",
            Expectation::Identifier => "an identifier",
            Expectation::Type => "a type",
            Expectation::Expression => "an expression",
            Expectation::Operand => "an operand",
            Expectation::Block => "a block",
            Expectation::ParameterList => "a parameter list",
            Expectation::Statement => "a statement",
            Expectation::TopLevelStatement => "a top-level statement",
            Expectation::Field => "a field",
            Expectation::Case => "a case",
            Expectation::In => "`in`",
            Expectation::While => "`while`",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Parenthesis,
    SquareBracket,
    CurlyBrace,
    AngleBracket,
}

impl Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Delimiter::Parenthesis => "parenthesis",
            Delimiter::SquareBracket => "square bracket",
            Delimiter::CurlyBrace => "curly brace",
            Delimiter::AngleBracket => "angle bracket",
        };
        write!(f, "{}", text)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("Expected {0}.")]
    Expected(Expectation),
    #[error("Unclosed {0}.")]
    Unclosed(Delimiter),
    #[error("Access modifiers are not allowed here.")]
    AccessModifierNotAllowed,
    #[error("Tokens left after parsing.")]
    TokensLeft,
    #[error("Nesting is too deep.")]
    NestingTooDeep,
}

/// A parsing error, reported at the index of the token the parser was looking at.
///
/// The same error is also present in the tree as an `error` node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct ParsingError {
    pub kind: ParseErrorKind,
    pub token_index: usize,
}

impl ParsingError {
    pub fn new(kind: ParseErrorKind, token_index: usize) -> Self {
        ParsingError { kind, token_index }
    }

    pub fn get_error_name(&self) -> &str {
        match self.kind {
            ParseErrorKind::Expected(_) => "Expected",
            ParseErrorKind::Unclosed(_) => "UnclosedDelimiter",
            ParseErrorKind::AccessModifierNotAllowed => "AccessModifierNotAllowed",
            ParseErrorKind::TokensLeft => "TokensLeft",
            ParseErrorKind::NestingTooDeep => "NestingTooDeep",
        }
    }
}

/// Errors reported by symbol resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompilerError {
    #[error("Redefinition of namespace `{name}`.")]
    NamespaceRedefinition { name: String },
    #[error("Redefinition of symbol `{name}`.")]
    SymbolRedefinition { name: String },
}

impl CompilerError {
    pub fn get_error_name(&self) -> &str {
        match self {
            CompilerError::NamespaceRedefinition { .. } => "NamespaceRedefinition",
            CompilerError::SymbolRedefinition { .. } => "SymbolRedefinition",
        }
    }
}
