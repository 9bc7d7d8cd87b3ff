//! Parser state and the primitives every grammar rule is built from.
//!
//! The parser keeps a cursor into the token sequence, the tree under
//! construction and the error list. Each `begin_node` pushes a marker
//! remembering the cursor and error count; the marker is popped by exactly
//! one `end_node`/`end_node_flatten` (commit) or `backtrack` (rollback).

use crate::{
    ast::{
        ast::{Node, NodeKind},
        builder::{NodeId, TreeBuilder},
    },
    config::ParserConfig,
    errors::errors::{Delimiter, Expectation, ParseErrorKind, ParsingError},
    lexer::tokens::{Token, TokenKind},
};

use super::stmt::parse_program;

/// A grammar rule. See the module docs for the meaning of the result.
pub type Rule = fn(&mut Parser<'_>) -> bool;

/// How many elements and separators a comma list contained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListShape {
    pub elements: usize,
    pub commas: usize,
}

/// Rollback information for an open node.
#[derive(Debug, Clone, Copy)]
struct Marker {
    node: NodeId,
    pos: usize,
    errors: usize,
}

/// The main parser structure that maintains parsing state.
pub struct Parser<'t> {
    /// The tokens to parse; never modified
    tokens: &'t [Token],
    /// Index of the next unconsumed token
    pos: usize,
    /// The tree under construction
    builder: TreeBuilder,
    /// Errors reported so far, in order
    errors: Vec<ParsingError>,
    /// One marker per node opened with `begin_node` and not yet closed
    markers: Vec<Marker>,
    /// Current recursion depth of expressions, types and blocks
    depth: usize,
    /// Cursor position where the last nesting cut-off stopped skipping
    cut_off: Option<usize>,
    config: ParserConfig,
}

impl<'t> Parser<'t> {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - The token sequence produced by the lexer
    /// * `config` - Nesting limit and recovery settings
    pub fn new(tokens: &'t [Token], config: ParserConfig) -> Self {
        Parser {
            tokens,
            pos: 0,
            builder: TreeBuilder::new(),
            errors: vec![],
            markers: vec![],
            depth: 0,
            cut_off: None,
            config,
        }
    }

    /// Returns the token at the cursor, if any.
    pub fn current_token(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the text of the token at the cursor, if any.
    pub fn current_text(&self) -> Option<&'t str> {
        self.current_token().map(|token| token.text.as_str())
    }

    /// Returns the index of the next unconsumed token.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Checks whether the token at the cursor has one of the given texts.
    pub fn at_text(&self, texts: &[&str]) -> bool {
        self.current_token().is_some_and(|token| token.has_text(texts))
    }

    /// Checks whether the token at the cursor has one of the given kinds.
    pub fn at_kind(&self, kinds: &[TokenKind]) -> bool {
        self.current_token().is_some_and(|token| token.is_one_of_many(kinds))
    }

    /// Returns the number of nodes opened with `begin_node` that are still open.
    pub fn open_nodes(&self) -> usize {
        self.markers.len()
    }

    pub fn errors(&self) -> &[ParsingError] {
        &self.errors
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Opens a node of the given kind under the current node and makes it current.
    ///
    /// The cursor and error count are saved so that `backtrack` can undo
    /// everything the rule does from here on.
    pub fn begin_node(&mut self, kind: NodeKind) {
        let node = self.builder.open(kind);
        self.markers.push(Marker {
            node,
            pos: self.pos,
            errors: self.errors.len(),
        });
    }

    /// Commits the current node and moves back to its parent.
    ///
    /// # Returns
    ///
    /// Always `true`, so a rule can end with `return parser.end_node();`.
    pub fn end_node(&mut self) -> bool {
        self.pop_marker();
        self.builder.close();
        true
    }

    /// Like `end_node`, but a node with a single child is replaced by that child.
    pub fn end_node_flatten(&mut self) -> bool {
        self.pop_marker();
        self.builder.close_flatten();
        true
    }

    /// Abandons the current node: removes it from the tree, restores the cursor
    /// and drops any errors reported inside it.
    ///
    /// # Returns
    ///
    /// Always `false`, so a rule can end with `return parser.backtrack();`.
    pub fn backtrack(&mut self) -> bool {
        let Some(marker) = self.markers.pop() else {
            return false;
        };
        tracing::trace!(kind = ?self.builder.kind(), pos = marker.pos, "backtracking");
        self.builder.abandon(marker.node);
        self.pos = marker.pos;
        self.errors.truncate(marker.errors);
        false
    }

    fn pop_marker(&mut self) {
        let marker = self.markers.pop();
        debug_assert!(
            marker.is_some_and(|marker| Some(marker.node) == self.builder.current()),
            "end_node must close the node opened by the matching begin_node"
        );
    }

    /// Changes the kind of the current node.
    pub fn set_kind(&mut self, kind: NodeKind) {
        self.builder.set_kind(kind);
    }

    /// Number of children the current node has so far.
    pub fn child_count(&self) -> usize {
        self.builder.child_count()
    }

    /// Pushes the current node's children down into a new node of the same kind.
    pub fn wrap_children(&mut self) {
        self.builder.wrap_children();
    }

    /// Records an error at the cursor and leaves an error marker in the current node.
    pub fn emit_error(&mut self, kind: ParseErrorKind) {
        self.errors.push(ParsingError::new(kind, self.pos));
        self.builder.open_error(kind);
        self.builder.close();
    }

    /// Records an error and commits the current node as it is.
    ///
    /// This is the "started but malformed" exit of a rule: the caller gets a
    /// partial node and carries on from the current cursor.
    pub fn error_and_end(&mut self, kind: ParseErrorKind) -> bool {
        self.emit_error(kind);
        self.end_node()
    }

    /// Records an error and moves the current token into the error marker.
    pub fn error_and_bump(&mut self, kind: ParseErrorKind) {
        self.errors.push(ParsingError::new(kind, self.pos));
        self.builder.open_error(kind);
        self.bump();
        self.builder.close();
    }

    /// Appends the token at the cursor to the current node and advances.
    fn bump(&mut self) {
        if let Some(token) = self.current_token() {
            self.builder.push_token(token.clone());
            self.pos += 1;
        }
    }

    /// Consumes the token at the cursor if its kind is one of `kinds`.
    /// Leaves the cursor and the tree untouched otherwise.
    pub fn consume_kind(&mut self, kinds: &[TokenKind]) -> bool {
        if self.at_kind(kinds) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes the token at the cursor if its text is one of `texts`.
    /// Leaves the cursor and the tree untouched otherwise.
    pub fn consume_text(&mut self, texts: &[&str]) -> bool {
        if self.at_text(texts) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Tries each rule in order and stops at the first that applies.
    pub fn any_of(&mut self, rules: &[Rule]) -> bool {
        rules.iter().any(|rule| rule(self))
    }

    /// Applies `rule` until it fails or stops consuming tokens.
    pub fn repeat(&mut self, rule: Rule) {
        loop {
            let start = self.pos;
            if !rule(self) || self.pos == start {
                break;
            }
        }
    }

    /// Parses `element ("," element)* ","?` followed by `close`.
    ///
    /// The opening delimiter must already be consumed. A missing element is
    /// reported as `expected`, a missing `close` as an unclosed `delimiter`.
    pub fn finish_list(
        &mut self,
        close: &str,
        delimiter: Delimiter,
        element: Rule,
        expected: Expectation,
    ) -> ListShape {
        let mut shape = ListShape::default();
        loop {
            if self.consume_text(&[close]) {
                return shape;
            }
            if !element(self) {
                self.emit_error(ParseErrorKind::Expected(expected));
                break;
            }
            shape.elements += 1;
            if !self.consume_text(&[","]) {
                break;
            }
            shape.commas += 1;
        }

        if !self.consume_text(&[close]) {
            self.report_unclosed(delimiter);
        }
        shape
    }

    /// Reports a missing closing delimiter at the cursor.
    ///
    /// Nothing is reported when a nesting cut-off stopped right here: the
    /// cut-off error already covers every list it left open.
    pub fn report_unclosed(&mut self, delimiter: Delimiter) {
        let after_cut_off = self.cut_off == Some(self.pos)
            && self
                .errors
                .last()
                .is_some_and(|error| error.kind == ParseErrorKind::NestingTooDeep);
        if !after_cut_off {
            self.emit_error(ParseErrorKind::Unclosed(delimiter));
        }
    }

    /// Skips tokens into an error marker until a synchronization point.
    ///
    /// A token whose text is in `until` is consumed and ends the skip; a token
    /// whose text is in `before` ends it without being consumed. At least one
    /// token is skipped unless input is exhausted.
    ///
    /// # Returns
    ///
    /// `false` if recovery is disabled in the config; the error is still recorded.
    pub fn recover(&mut self, kind: ParseErrorKind, until: &[&str], before: &[&str]) -> bool {
        if !self.config.recover {
            self.emit_error(kind);
            return false;
        }

        self.errors.push(ParsingError::new(kind, self.pos));
        self.builder.open_error(kind);
        let start = self.pos;
        while let Some(token) = self.current_token() {
            if self.pos > start && token.has_text(before) {
                break;
            }
            self.bump();
            if token.has_text(until) {
                break;
            }
        }
        self.builder.close();

        tracing::debug!(error = %kind, skipped = self.pos - start, "recovered");
        true
    }

    /// Wraps every remaining token in an error marker.
    pub fn skip_rest(&mut self, kind: ParseErrorKind) {
        self.errors.push(ParsingError::new(kind, self.pos));
        self.builder.open_error(kind);
        while !self.at_end() {
            self.bump();
        }
        self.builder.close();
    }

    /// Enters one level of nesting.
    ///
    /// # Returns
    ///
    /// `false` if the configured limit is reached; the caller must then call
    /// `skip_nested_group` instead of descending and must not call `exit_recursion`.
    pub fn enter_recursion(&mut self) -> bool {
        if self.depth >= self.config.max_depth {
            return false;
        }
        self.depth += 1;
        true
    }

    pub fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Reports excessive nesting and skips the rest of the nested construct.
    ///
    /// Skipping stops before the closer of the enclosing bracket group, or
    /// before a `;` or `{` outside of every bracket it skipped. A `{` at the
    /// cursor is skipped together with its block.
    pub fn skip_nested_group(&mut self) -> bool {
        self.skip_nested(false)
    }

    /// Like `skip_nested_group`, but a `>` with no matching generic open
    /// also ends the skip, since it closes an enclosing generic list.
    pub fn skip_nested_type(&mut self) -> bool {
        self.skip_nested(true)
    }

    fn skip_nested(&mut self, in_type: bool) -> bool {
        tracing::warn!(max_depth = self.config.max_depth, pos = self.pos, "nesting limit reached");
        self.errors.push(ParsingError::new(ParseErrorKind::NestingTooDeep, self.pos));
        self.builder.open_error(ParseErrorKind::NestingTooDeep);

        let start = self.pos;
        let mut brackets = 0usize;
        let mut angles = 0usize;
        while let Some(token) = self.current_token() {
            let outside = brackets == 0;
            match token.text.as_str() {
                _ if in_type && token.kind == TokenKind::GenericOpen => angles += 1,
                ">" if in_type && angles > 0 => angles -= 1,
                ">" if in_type && outside => break,
                "{" if outside && self.pos > start => break,
                "(" | "[" | "{" => brackets += 1,
                ")" | "]" | "}" | ";" if outside => break,
                ")" | "]" | "}" => brackets -= 1,
                _ => {}
            }
            self.bump();
        }
        self.builder.close();

        self.cut_off = Some(self.pos);
        true
    }

    /// Consumes the parser, returning the finished tree and the error list.
    pub fn finish(self) -> (Node, Vec<ParsingError>) {
        debug_assert!(self.markers.is_empty(), "every begin_node must be matched");
        let tree = self
            .builder
            .finish()
            .unwrap_or_else(|| Node::new(NodeKind::Program, vec![]));
        (tree, self.errors)
    }
}

/// Parses a token sequence with the default configuration.
pub fn parse(tokens: &[Token]) -> (Node, Vec<ParsingError>) {
    parse_with_config(tokens, ParserConfig::default())
}

/// Parses a token sequence into a syntax tree.
///
/// This is the main entry point for parsing. It never fails: malformed input
/// yields a tree containing error markers together with a non-empty error list.
///
/// # Arguments
///
/// * `tokens` - Token sequence produced by the lexer
/// * `config` - Nesting limit and recovery settings
///
/// # Returns
///
/// A tuple containing:
/// - The root node, of kind `program`
/// - The parsing errors in the order they were reported
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_with_config(tokens: &[Token], config: ParserConfig) -> (Node, Vec<ParsingError>) {
    let mut parser = Parser::new(tokens, config);
    parse_program(&mut parser);
    let (tree, errors) = parser.finish();
    tracing::debug!(errors = errors.len(), "parsed program");
    (tree, errors)
}
