//! Unit tests for the tree builder and the finished tree.

use super::{
    ast::{Element, NodeKind},
    builder::TreeBuilder,
};
use crate::{
    errors::errors::{Expectation, ParseErrorKind},
    lexer::tokens::{Token, TokenKind},
    Span,
};

fn token(kind: TokenKind, text: &str) -> Token {
    Token {
        kind,
        text: text.to_string(),
        span: Span::new(0, text.len()),
    }
}

#[test]
fn test_open_and_close_build_nested_nodes() {
    let mut builder = TreeBuilder::new();
    builder.open(NodeKind::Program);
    builder.open(NodeKind::Block);
    builder.push_token(token(TokenKind::Operator, "{"));
    builder.push_token(token(TokenKind::Operator, "}"));
    builder.close();
    builder.close();

    assert_eq!(builder.current(), None);
    let tree = builder.finish().unwrap();
    assert_eq!(tree.kind, NodeKind::Program);
    let block = tree.find_child(NodeKind::Block).unwrap();
    assert_eq!(block.text(), "{}");
}

#[test]
fn test_abandon_removes_node_and_descendants() {
    let mut builder = TreeBuilder::new();
    builder.open(NodeKind::Program);
    let attempt = builder.open(NodeKind::VariableDefinition);
    builder.push_token(token(TokenKind::Keyword, "var"));
    builder.open(NodeKind::NamedType);
    builder.close();
    assert_eq!(builder.len(), 3);

    builder.abandon(attempt);

    assert_eq!(builder.len(), 1);
    assert_eq!(builder.kind(), Some(NodeKind::Program));
    assert_eq!(builder.child_count(), 0);
}

#[test]
fn test_close_flatten_splices_single_child() {
    let mut builder = TreeBuilder::new();
    builder.open(NodeKind::Program);
    builder.open(NodeKind::InfixExpression);
    builder.push_token(token(TokenKind::Number, "1"));
    builder.close_flatten();
    builder.close();

    let tree = builder.finish().unwrap();
    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].as_token().map(|t| t.text.as_str()), Some("1"));
}

#[test]
fn test_close_flatten_keeps_nodes_with_several_children() {
    let mut builder = TreeBuilder::new();
    builder.open(NodeKind::Program);
    builder.open(NodeKind::PrefixExpression);
    builder.push_token(token(TokenKind::Operator, "-"));
    builder.push_token(token(TokenKind::Number, "1"));
    builder.close_flatten();
    builder.close();

    let tree = builder.finish().unwrap();
    assert_eq!(tree.child_nodes().next().map(|n| n.kind), Some(NodeKind::PrefixExpression));
}

#[test]
fn test_flattened_child_node_is_reparented() {
    let mut builder = TreeBuilder::new();
    builder.open(NodeKind::Program);
    builder.open(NodeKind::InfixExpression);
    builder.open(NodeKind::PrefixExpression);
    builder.push_token(token(TokenKind::Operator, "-"));
    builder.push_token(token(TokenKind::Identifier, "x"));
    builder.close_flatten();
    builder.close_flatten();

    // Back at the program, and a later child still lands there.
    assert_eq!(builder.kind(), Some(NodeKind::Program));
    builder.push_token(token(TokenKind::Operator, ";"));
    builder.close();

    let tree = builder.finish().unwrap();
    assert_eq!(tree.children.len(), 2);
    assert_eq!(tree.children[0].as_node().map(|n| n.kind), Some(NodeKind::PrefixExpression));
}

#[test]
fn test_wrap_children_nests_existing_children() {
    let mut builder = TreeBuilder::new();
    builder.open(NodeKind::InfixExpression);
    builder.push_token(token(TokenKind::Number, "1"));
    builder.push_token(token(TokenKind::Operator, "+"));
    builder.push_token(token(TokenKind::Number, "2"));
    builder.wrap_children();
    builder.push_token(token(TokenKind::Operator, "+"));
    builder.push_token(token(TokenKind::Number, "3"));
    builder.close();

    let tree = builder.finish().unwrap();
    assert_eq!(tree.children.len(), 3);
    let inner = tree.children[0].as_node().unwrap();
    assert_eq!(inner.kind, NodeKind::InfixExpression);
    assert_eq!(inner.text(), "1+2");
    assert_eq!(tree.text(), "1+2+3");
}

#[test]
fn test_error_nodes_carry_their_diagnostic() {
    let mut builder = TreeBuilder::new();
    builder.open(NodeKind::Program);
    builder.open_error(ParseErrorKind::Expected(Expectation::Semicolon));
    builder.close();
    builder.close();

    let tree = builder.finish().unwrap();
    assert!(tree.has_errors());
    assert_eq!(tree.errors(), vec![ParseErrorKind::Expected(Expectation::Semicolon)]);
    assert!(matches!(&tree.children[0], Element::Node(node) if node.is_error()));
}

#[test]
fn test_dump_format() {
    let mut builder = TreeBuilder::new();
    builder.open(NodeKind::Program);
    builder.open(NodeKind::ReturnStatement);
    builder.push_token(token(TokenKind::Keyword, "return"));
    builder.open_error(ParseErrorKind::Expected(Expectation::Semicolon));
    builder.close();
    builder.close();
    builder.close();

    let tree = builder.finish().unwrap();
    assert_eq!(
        tree.dump(),
        "program\n  return statement\n    keyword `return`\n    error: Expected a semicolon."
    );
}

#[test]
fn test_finish_without_root() {
    assert!(TreeBuilder::new().finish().is_none());
}
