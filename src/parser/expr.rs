use crate::{
    ast::ast::NodeKind,
    errors::errors::{Delimiter, Expectation, ParseErrorKind},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BindingPower, INFIX_BP_LOOKUP, PREFIX_BP_LOOKUP, PRIMARY_EXPRESSIONS},
    parser::Parser,
    types::parse_type,
};

pub fn parse_expr(parser: &mut Parser) -> bool {
    parse_infix_expression(parser, BindingPower::Default)
}

/// Parses an operand followed by every operator that binds tighter than `min`.
///
/// Operators of equal power are not taken by the recursive call, so chains
/// like `a - b - c` nest to the left. Each level of that nesting counts
/// against the depth limit. A lone operand is returned without an expression
/// node around it.
pub fn parse_infix_expression(parser: &mut Parser, min: BindingPower) -> bool {
    if !parser.enter_recursion() {
        return starts_expression(parser) && parser.skip_nested_group();
    }
    let parsed = infix_expression(parser, min);
    parser.exit_recursion();
    parsed
}

fn infix_expression(parser: &mut Parser, min: BindingPower) -> bool {
    parser.begin_node(NodeKind::InfixExpression);
    if !parse_prefix_expression(parser) {
        return parser.backtrack();
    }

    let mut wraps = 0;
    while let Some(operator) = parser.current_text() {
        let Some(&bp) = INFIX_BP_LOOKUP.get(operator) else {
            break;
        };
        if bp <= min {
            break;
        }

        // Everything parsed so far becomes the left operand
        if parser.child_count() > 1 {
            if !parser.enter_recursion() {
                parser.skip_nested_group();
                break;
            }
            wraps += 1;
            parser.wrap_children();
        }

        match operator {
            "(" => parse_call_expr(parser),
            "[" => parse_index_expr(parser),
            "." => parse_member_expr(parser),
            "as" => parse_cast_expr(parser),
            _ => {
                parser.set_kind(NodeKind::InfixExpression);
                parser.consume_text(&[operator]);
                if !parse_infix_expression(parser, bp) {
                    parser.emit_error(ParseErrorKind::Expected(Expectation::Operand));
                    break;
                }
            }
        }
    }

    for _ in 0..wraps {
        parser.exit_recursion();
    }
    parser.end_node_flatten()
}

/// Parses a prefix operation or a primary expression.
pub fn parse_prefix_expression(parser: &mut Parser) -> bool {
    let prefix_bp = parser
        .current_text()
        .and_then(|text| PREFIX_BP_LOOKUP.get(text).copied());

    match prefix_bp {
        Some(bp) if parser.at_kind(&[TokenKind::Operator]) => {
            parser.begin_node(NodeKind::PrefixExpression);
            parser.consume_kind(&[TokenKind::Operator]);
            if !parse_infix_expression(parser, bp) {
                return parser.error_and_end(ParseErrorKind::Expected(Expectation::Operand));
            }
            parser.end_node()
        }
        _ => parser.any_of(&PRIMARY_EXPRESSIONS),
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> bool {
    parser.consume_kind(&[
        TokenKind::Number,
        TokenKind::Character,
        TokenKind::String,
        TokenKind::Identifier,
    ])
}

/// `(a)` is a parenthesized expression; `()`, `(a,)` and `(a, b)` are tuples.
pub fn parse_grouping_expr(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::ParenthesizedExpression);
    if !parser.consume_text(&["("]) {
        return parser.backtrack();
    }

    let shape = parser.finish_list(")", Delimiter::Parenthesis, parse_expr, Expectation::Expression);
    if shape.elements != 1 || shape.commas > 0 {
        parser.set_kind(NodeKind::TupleExpression);
    }
    parser.end_node()
}

pub fn parse_array_expr(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::ArrayExpression);
    if !parser.consume_text(&["["]) {
        return parser.backtrack();
    }

    parser.finish_list("]", Delimiter::SquareBracket, parse_expr, Expectation::Expression);
    parser.end_node()
}

fn parse_call_expr(parser: &mut Parser) {
    parser.set_kind(NodeKind::CallExpression);
    parse_argument_list(parser);
}

pub fn parse_argument_list(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::ArgumentList);
    if !parser.consume_text(&["("]) {
        return parser.backtrack();
    }

    parser.finish_list(")", Delimiter::Parenthesis, parse_expr, Expectation::Expression);
    parser.end_node()
}

fn parse_index_expr(parser: &mut Parser) {
    parser.set_kind(NodeKind::IndexExpression);
    parser.consume_text(&["["]);
    if !parse_expr(parser) {
        parser.emit_error(ParseErrorKind::Expected(Expectation::Expression));
    }
    if !parser.consume_text(&["]"]) {
        parser.report_unclosed(Delimiter::SquareBracket);
    }
}

fn parse_member_expr(parser: &mut Parser) {
    parser.set_kind(NodeKind::MemberExpression);
    parser.consume_text(&["."]);
    if !parser.consume_kind(&[TokenKind::Identifier]) {
        parser.emit_error(ParseErrorKind::Expected(Expectation::Identifier));
    }
}

fn parse_cast_expr(parser: &mut Parser) {
    parser.set_kind(NodeKind::CastExpression);
    parser.consume_text(&["as"]);
    if !parse_type(parser) {
        parser.emit_error(ParseErrorKind::Expected(Expectation::Type));
    }
}

/// Whether the token at the cursor can begin an expression.
fn starts_expression(parser: &Parser) -> bool {
    parser.at_kind(&[
        TokenKind::Number,
        TokenKind::Character,
        TokenKind::String,
        TokenKind::Identifier,
    ]) || parser.at_text(&["(", "["])
        || (parser.at_kind(&[TokenKind::Operator])
            && parser
                .current_text()
                .is_some_and(|text| PREFIX_BP_LOOKUP.contains_key(text)))
}
