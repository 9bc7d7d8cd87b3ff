use crate::{
    ast::ast::NodeKind,
    errors::errors::{Delimiter, Expectation, ParseErrorKind},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::TYPE_ALTERNATIVES, parser::Parser};

/// Parses a type. A plain name such as `int32` is left as a bare identifier token.
pub fn parse_type(parser: &mut Parser) -> bool {
    if !parser.enter_recursion() {
        return starts_type(parser) && parser.skip_nested_type();
    }
    let parsed = parser.any_of(&TYPE_ALTERNATIVES);
    parser.exit_recursion();
    parsed
}

/// `(T, U)`
pub fn parse_tuple_type(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::TupleType);
    if !parser.consume_text(&["("]) {
        return parser.backtrack();
    }

    parser.finish_list(")", Delimiter::Parenthesis, parse_type, Expectation::Type);
    parser.end_node()
}

/// `[N]T` or `[]T`
pub fn parse_array_type(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::ArrayType);
    if !parser.consume_text(&["["]) {
        return parser.backtrack();
    }

    parse_expr(parser);
    if !parser.consume_text(&["]"]) {
        parser.report_unclosed(Delimiter::SquareBracket);
        return parser.end_node();
    }
    if !parse_type(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Type));
    }
    parser.end_node()
}

/// `&T`
pub fn parse_pointer_type(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::PointerType);
    if !parser.consume_text(&["&"]) {
        return parser.backtrack();
    }

    if !parse_type(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Type));
    }
    parser.end_node()
}

/// `func(T, U) R`, the result type being optional.
pub fn parse_function_type(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::FunctionType);
    if !parser.consume_text(&["func"]) {
        return parser.backtrack();
    }

    if !parse_type_list(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::ParameterList));
    }
    parse_type(parser);
    parser.end_node()
}

fn parse_type_list(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::TypeList);
    if !parser.consume_text(&["("]) {
        return parser.backtrack();
    }

    parser.finish_list(")", Delimiter::Parenthesis, parse_type, Expectation::Type);
    parser.end_node()
}

/// `mut T`
pub fn parse_mut_type(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::MutType);
    if !parser.consume_text(&["mut"]) {
        return parser.backtrack();
    }

    if !parse_type(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Type));
    }
    parser.end_node()
}

/// `Name`, `a.b.Name` or `Name<T, 4>`
pub fn parse_named_type(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::NamedType);
    if !parser.consume_kind(&[TokenKind::Identifier]) {
        return parser.backtrack();
    }

    while parser.consume_text(&["."]) {
        if !parser.consume_kind(&[TokenKind::Identifier]) {
            parser.emit_error(ParseErrorKind::Expected(Expectation::Identifier));
            break;
        }
    }

    if parser.at_kind(&[TokenKind::GenericOpen]) {
        parse_generic_arguments(parser);
    }
    parser.end_node_flatten()
}

fn parse_generic_arguments(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::GenericArguments);
    if !parser.consume_kind(&[TokenKind::GenericOpen]) {
        return parser.backtrack();
    }

    parser.finish_list(">", Delimiter::AngleBracket, parse_generic_argument, Expectation::Type);
    parser.end_node()
}

/// A type, or a number for arguments like the size in `Buffer<16>`.
fn parse_generic_argument(parser: &mut Parser) -> bool {
    parse_type(parser) || parser.consume_kind(&[TokenKind::Number])
}

fn starts_type(parser: &Parser) -> bool {
    parser.at_kind(&[TokenKind::Identifier]) || parser.at_text(&["(", "[", "&", "func", "mut"])
}
