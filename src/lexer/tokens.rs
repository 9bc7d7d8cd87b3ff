use lazy_static::lazy_static;
use std::{cmp::Reverse, collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("namespace");
        set.insert("pub");
        set.insert("using");
        set.insert("var");
        set.insert("func");
        set.insert("method");
        set.insert("struct");
        set.insert("trait");
        set.insert("cases");
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("do");
        set.insert("for");
        set.insert("in");
        set.insert("break");
        set.insert("continue");
        set.insert("return");
        set.insert("as");
        set.insert("mut");
        set
    };

    /// Every operator, longest first. The lexer takes the first prefix hit,
    /// so this order is what makes `==` win over `=`.
    pub static ref OPERATORS: Vec<&'static str> = {
        let mut operators = vec![
            "+", "-", "*", "/", "%", "&", "|", "^", "~", "!", "=", "<", ">",
            "(", ")", "[", "]", "{", "}", ".", ",", ";",
            "==", "!=", ">=", "<=", "&&", "||", "=>",
            "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
        ];
        operators.sort_by_key(|operator| Reverse(operator.len()));
        operators
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Character,
    String,
    Identifier,
    Keyword,
    Operator,
    /// `<` written directly after a non-whitespace character, as in `List<T>`
    GenericOpen,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Number => "number",
            TokenKind::Character => "character",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Operator => "operator",
            TokenKind::GenericOpen => "generic open",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} `{}`", self.kind, self.text)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn has_text(&self, texts: &[&str]) -> bool {
        texts.contains(&self.text.as_str())
    }
}
