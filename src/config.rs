//! Front-end configuration.
//!
//! Both configs are plain values; nothing is read from disk.

/// Lexer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    /// Skip `//` comments through end of line
    pub line_comments: bool,
    /// Allow `_` after the first digit of a number
    pub digit_separators: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            line_comments: true,
            digit_separators: true,
        }
    }
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_comments(mut self, enabled: bool) -> Self {
        self.line_comments = enabled;
        self
    }

    pub fn with_digit_separators(mut self, enabled: bool) -> Self {
        self.digit_separators = enabled;
        self
    }
}

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting of expressions, types and blocks before the parser gives up on a group
    pub max_depth: usize,
    /// Skip to the next synchronization token when no statement matches
    pub recover: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: 256,
            recover: true,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_recovery(mut self, enabled: bool) -> Self {
        self.recover = enabled;
        self
    }
}
