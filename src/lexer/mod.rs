//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a sequence of tokens for parsing. It handles:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Longest-match operator scanning and generic-open disambiguation
//! - Comments and whitespace handling
//! - Non-fatal lexing errors collected next to the tokens

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
