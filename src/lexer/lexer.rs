use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    config::LexerConfig,
    errors::errors::{LexErrorKind, LexingError},
    Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, OPERATORS, RESERVED_LOOKUP};

/// Characters skipped between tokens.
pub const WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"^[ \t\r\n]+").unwrap();
    static ref LINE_COMMENT: Regex = Regex::new(r"^//[^\n]*").unwrap();
    static ref NUMBER: Regex = Regex::new(r"^[0-9]+").unwrap();
    static ref NUMBER_WITH_SEPARATORS: Regex = Regex::new(r"^[0-9][0-9_]*").unwrap();
    static ref CHARACTER: Regex = Regex::new(r"^'(?:\\.|[^'\\\r\n])*'").unwrap();
    static ref UNCLOSED_CHARACTER: Regex = Regex::new(r"^'[^\r\n]*").unwrap();
    static ref STRING: Regex = Regex::new(r#"^"(?:\\.|[^"\\\r\n])*""#).unwrap();
    static ref UNCLOSED_STRING: Regex = Regex::new(r#"^"[^\r\n]*"#).unwrap();
    static ref SYMBOL: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap();
    static ref REST_OF_LINE: Regex = Regex::new(r"^[^\r\n]+").unwrap();
}

/// Called with the length in bytes of the text its pattern matched.
pub type RegexHandler = fn(&mut Lexer<'_>, usize);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

pub struct Lexer<'s> {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    errors: Vec<LexingError>,
    source: &'s str,
    pos: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str, config: &LexerConfig) -> Lexer<'s> {
        let mut patterns = vec![RegexPattern { regex: WHITESPACE_RUN.clone(), handler: skip_handler }];
        if config.line_comments {
            patterns.push(RegexPattern { regex: LINE_COMMENT.clone(), handler: skip_handler });
        }
        let number: &Regex = if config.digit_separators { &NUMBER_WITH_SEPARATORS } else { &NUMBER };
        patterns.extend([
            RegexPattern { regex: number.clone(), handler: number_handler },
            RegexPattern { regex: CHARACTER.clone(), handler: character_handler },
            RegexPattern { regex: UNCLOSED_CHARACTER.clone(), handler: unclosed_character_handler },
            RegexPattern { regex: STRING.clone(), handler: string_handler },
            RegexPattern { regex: UNCLOSED_STRING.clone(), handler: unclosed_string_handler },
            RegexPattern { regex: SYMBOL.clone(), handler: symbol_handler },
        ]);

        Lexer {
            patterns,
            tokens: vec![],
            errors: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn push_error(&mut self, kind: LexErrorKind, len: usize) {
        let text = self.source[self.pos..self.pos + len].to_string();
        self.errors.push(LexingError::new(kind, text, Span::new(self.pos, self.pos + len)));
    }

    pub fn remainder(&self) -> &'s str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Emits the token kind for `len` bytes at the cursor and moves past them.
    fn emit(&mut self, kind: TokenKind, len: usize) {
        let text = self.source[self.pos..self.pos + len].to_string();
        self.push(MK_TOKEN!(kind, text, self.pos));
        self.advance_n(len);
    }

    fn follows_non_whitespace(&self) -> bool {
        self.source[..self.pos]
            .chars()
            .next_back()
            .is_some_and(|c| !WHITESPACE.contains(&c))
    }

    /// Tries the operator table at the cursor. Returns false if nothing matched.
    fn lex_operator(&mut self) -> bool {
        let remainder = self.remainder();
        let Some(operator) = OPERATORS.iter().find(|operator| remainder.starts_with(**operator)) else {
            return false;
        };

        let kind = if *operator == "<" && self.follows_non_whitespace() {
            TokenKind::GenericOpen
        } else {
            TokenKind::Operator
        };
        self.emit(kind, operator.len());
        true
    }

    fn step(&mut self) {
        let remainder = self.remainder();
        let matched = self
            .patterns
            .iter()
            .find_map(|pattern| pattern.regex.find(remainder).map(|m| (pattern.handler, m.end())));

        if let Some((handler, len)) = matched {
            handler(self, len);
            return;
        }

        if self.lex_operator() {
            return;
        }

        // Whitespace is handled first, so there is at least one character left on this line.
        let len = REST_OF_LINE.find(remainder).map_or(remainder.len(), |m| m.end());
        self.push_error(LexErrorKind::InvalidToken, len);
        self.advance_n(len);
    }
}

fn skip_handler(lexer: &mut Lexer, len: usize) {
    lexer.advance_n(len);
}

fn number_handler(lexer: &mut Lexer, len: usize) {
    lexer.emit(TokenKind::Number, len);
}

fn character_handler(lexer: &mut Lexer, len: usize) {
    lexer.emit(TokenKind::Character, len);
}

fn unclosed_character_handler(lexer: &mut Lexer, len: usize) {
    lexer.push_error(LexErrorKind::UnclosedSingleQuote, len);
    lexer.advance_n(len);
}

fn string_handler(lexer: &mut Lexer, len: usize) {
    lexer.emit(TokenKind::String, len);
}

fn unclosed_string_handler(lexer: &mut Lexer, len: usize) {
    lexer.push_error(LexErrorKind::UnclosedDoubleQuote, len);
    lexer.advance_n(len);
}

fn symbol_handler(lexer: &mut Lexer, len: usize) {
    let value = &lexer.remainder()[..len];
    let kind = if RESERVED_LOOKUP.contains(value) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };
    lexer.emit(kind, len);
}

/// Splits `source` into tokens using the default configuration.
pub fn lex(source: &str) -> (Vec<Token>, Vec<LexingError>) {
    lex_with_config(source, &LexerConfig::default())
}

/// Splits `source` into tokens.
///
/// Lexing never stops early: text that cannot form a token is reported in the
/// error list and skipped, and scanning resumes after it.
///
/// # Returns
///
/// The tokens and the lexing errors, both in source order.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex_with_config(source: &str, config: &LexerConfig) -> (Vec<Token>, Vec<LexingError>) {
    let mut lexer = Lexer::new(source, config);

    while !lexer.at_eof() {
        lexer.step();
    }

    tracing::debug!(tokens = lexer.tokens.len(), errors = lexer.errors.len(), "lexed source");
    (lexer.tokens, lexer.errors)
}
