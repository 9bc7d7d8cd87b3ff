//! Integration tests for the whole front end.
//!
//! These tests run source text through lexing, parsing and symbol
//! resolution, the way a driver would.

use frontend::{
    ast::ast::{Node, NodeKind},
    config::{LexerConfig, ParserConfig},
    lexer::lexer::{lex, lex_with_config},
    parser::parser::{parse, parse_with_config},
    resolver::{object::SymbolKind, resolver::validate},
};
use indoc::indoc;

const SHAPES: &str = indoc! {r#"
    pub namespace geometry.shapes;

    using std.math;

    pub trait Shape {
        name string;
    }

    pub struct Circle {
        radius float64;
        cases {
            Unit;
            Scaled float64;
        }
    }

    var count int32 = 0;

    // Area of a circle
    pub method (c Circle) area() float64 {
        return 3 * c.radius * c.radius;
    }

    pub func largest<T Shape>(shapes []T, limit int32) (T, bool) {
        var best T;
        var found = false;
        for shape in shapes {
            if shape.area() > best.area() && !found {
                best = shape;
            } else if limit <= 0 {
                break;
            } else {
                continue;
            }
        }
        do {
            limit -= 1;
        } while limit > 0;
        return (best, found);
    }
"#};

#[test]
fn test_front_end_pipeline() {
    let (tokens, lex_errors) = lex(SHAPES);
    assert!(lex_errors.is_empty(), "{:?}", lex_errors);

    let (tree, parse_errors) = parse(&tokens);
    assert!(parse_errors.is_empty(), "{:?}\n{}", parse_errors, tree.dump());
    assert!(!tree.has_errors());

    let kinds: Vec<NodeKind> = tree.child_nodes().map(|node| node.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::NamespaceStatement,
            NodeKind::UsingStatement,
            NodeKind::TraitDefinition,
            NodeKind::StructDefinition,
            NodeKind::VariableDefinition,
            NodeKind::MethodDefinition,
            NodeKind::FunctionDefinition,
        ]
    );

    let (object, errors) = validate(&tree);
    assert!(errors.is_empty(), "{:?}", errors);

    let kind_of = |name: &str| {
        object
            .get_symbol(name)
            .and_then(|entry| entry.as_symbol())
            .map(|symbol| symbol.kind)
    };
    assert_eq!(kind_of("geometry.shapes.Shape"), Some(SymbolKind::Trait));
    assert_eq!(kind_of("geometry.shapes.Circle"), Some(SymbolKind::Struct));
    assert_eq!(kind_of("geometry.shapes.count"), Some(SymbolKind::Variable));
    assert_eq!(kind_of("geometry.shapes.largest"), Some(SymbolKind::Function));
    assert!(object.get_private_symbol("geometry.shapes.count").is_some());
    assert!(object.get_public_symbol("geometry.shapes.largest").is_some());
}

#[test]
fn test_tree_preserves_every_token() {
    let (tokens, _) = lex(SHAPES);
    let (tree, _) = parse(&tokens);

    let leaves: Vec<_> = tree.tokens().into_iter().cloned().collect();
    assert_eq!(leaves, tokens);
}

#[test]
fn test_return_type_tuple_and_generic_constraint() {
    let (tokens, _) = lex(SHAPES);
    let (tree, _) = parse(&tokens);

    let function = tree.find_child(NodeKind::FunctionDefinition);
    let generics = function.and_then(|node| node.find_child(NodeKind::GenericParameters));
    let constraint = generics.and_then(|node| node.find_child(NodeKind::GenericParameter));
    assert_eq!(constraint.map(Node::text), Some("TShape".to_string()));

    let result = function.and_then(|node| node.find_child(NodeKind::TupleType));
    assert_eq!(result.map(Node::text), Some("(T,bool)".to_string()));
}

#[test]
fn test_broken_program_reports_errors_in_order() {
    let source = indoc! {"
        var a int32
        func f( {
            pub var b = 1;
            return (1, 2;
        }
        ) struct S { x; }
    "};
    let (tokens, lex_errors) = lex(source);
    assert!(lex_errors.is_empty());

    let (tree, errors) = parse(&tokens);
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "Expected a semicolon.",
            "Expected an identifier.",
            "Unclosed parenthesis.",
            "Access modifiers are not allowed here.",
            "Unclosed parenthesis.",
            "Expected a top-level statement.",
            "Expected a type.",
        ]
    );
    assert_eq!(tree.errors(), errors.iter().map(|error| error.kind).collect::<Vec<_>>());
    assert_eq!(tree.tokens().len(), tokens.len());

    // Whatever parsed is still resolved
    let (object, _) = validate(&tree);
    assert!(object.get_symbol("a").is_some());
    assert!(object.get_symbol("f").is_some());
    assert!(object.get_symbol("S").is_some());
}

#[test]
fn test_lexing_errors_do_not_stop_parsing() {
    let (tokens, lex_errors) = lex("var s = \"open\nvar t int32;");

    assert_eq!(lex_errors.len(), 1);
    assert_eq!(lex_errors[0].to_string(), "Lexing error: Unclosed double quote. `\"open`");
    let (tree, errors) = parse(&tokens);
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(messages, vec!["Expected an expression.", "Expected a semicolon."]);
    assert_eq!(tree.child_nodes().count(), 2);
}

#[test]
fn test_configured_pipeline() {
    let lexer_config = LexerConfig::default().with_line_comments(false);
    let (tokens, _) = lex_with_config("var x int32; // note", &lexer_config);
    assert_eq!(tokens.len(), 7);

    let strict = ParserConfig::default().with_recovery(false);
    let (tree, errors) = parse_with_config(&tokens, strict);
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(messages, vec!["Tokens left after parsing."]);
    assert_eq!(tree.tokens().len(), tokens.len());
}
