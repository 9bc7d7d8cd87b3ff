use crate::{
    ast::ast::NodeKind,
    errors::errors::{Delimiter, Expectation, ParseErrorKind},
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expr,
    lookups::{
        ASSIGNMENT_OPERATORS, BLOCK_STATEMENTS, BODY_MEMBERS, CASES_MEMBERS, TOP_LEVEL_STATEMENTS,
        TOP_LEVEL_SYNC,
    },
    parser::{Parser, Rule},
    types::parse_type,
};

/// Parses a whole program: an optional namespace statement followed by top-level statements.
///
/// Unparseable stretches are skipped into error markers until the next `;` or
/// top-level keyword. With recovery disabled, the first stretch that cannot be
/// parsed ends the program and the rest of the input is reported as left over.
pub fn parse_program(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::Program);
    parse_namespace_stmt(parser);

    loop {
        parser.repeat(parse_top_level_stmt);
        if parser.at_end() {
            break;
        }

        if !parser.config().recover {
            parser.skip_rest(ParseErrorKind::TokensLeft);
            break;
        }
        parser.recover(
            ParseErrorKind::Expected(Expectation::TopLevelStatement),
            &[";"],
            &TOP_LEVEL_SYNC,
        );
    }

    parser.end_node()
}

pub fn parse_top_level_stmt(parser: &mut Parser) -> bool {
    parser.any_of(&TOP_LEVEL_STATEMENTS)
}

fn expect_semicolon(parser: &mut Parser) {
    if !parser.consume_text(&[";"]) {
        parser.emit_error(ParseErrorKind::Expected(Expectation::Semicolon));
    }
}

fn expect_name(parser: &mut Parser) -> bool {
    parser.consume_kind(&[TokenKind::Identifier])
}

pub fn parse_namespace_stmt(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::NamespaceStatement);
    parser.consume_text(&["pub"]);
    if !parser.consume_text(&["namespace"]) {
        return parser.backtrack();
    }

    if !parse_qualified_name(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Identifier));
    }
    expect_semicolon(parser);
    parser.end_node()
}

pub fn parse_using_stmt(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::UsingStatement);
    if !parser.consume_text(&["using"]) {
        return parser.backtrack();
    }

    if !parse_qualified_name(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Identifier));
    }
    expect_semicolon(parser);
    parser.end_node()
}

/// `a.b.c`. Kept as a node even for a single segment so tools can find it.
pub fn parse_qualified_name(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::QualifiedName);
    if !expect_name(parser) {
        return parser.backtrack();
    }

    while parser.consume_text(&["."]) {
        if !expect_name(parser) {
            parser.emit_error(ParseErrorKind::Expected(Expectation::Identifier));
            break;
        }
    }
    parser.end_node()
}

pub fn parse_var_def(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::VariableDefinition);
    parser.consume_text(&["pub"]);
    if !parser.consume_text(&["var"]) {
        return parser.backtrack();
    }

    if !expect_name(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Identifier));
    }

    let typed = parse_type(parser);
    if parser.consume_text(&["="]) {
        if !parse_expr(parser) {
            parser.emit_error(ParseErrorKind::Expected(Expectation::Expression));
        }
    } else if !typed {
        parser.emit_error(ParseErrorKind::Expected(Expectation::Type));
    }

    expect_semicolon(parser);
    parser.end_node()
}

pub fn parse_func_def(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::FunctionDefinition);
    parser.consume_text(&["pub"]);
    if !parser.consume_text(&["func"]) {
        return parser.backtrack();
    }

    if !expect_name(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Identifier));
    }
    parse_signature_and_block(parser)
}

pub fn parse_method_def(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::MethodDefinition);
    parser.consume_text(&["pub"]);
    if !parser.consume_text(&["method"]) {
        return parser.backtrack();
    }

    if !parse_receiver(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::ParameterList));
    }
    if !expect_name(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Identifier));
    }
    parse_signature_and_block(parser)
}

/// Everything after the name of a function or method. Ends the open node.
fn parse_signature_and_block(parser: &mut Parser) -> bool {
    parse_generic_parameters(parser);
    if !parse_parameter_list(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::ParameterList));
    }

    // Optional result type
    parse_type(parser);

    if !parse_block(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Block));
    }
    parser.end_node()
}

/// `(self T)` in front of a method name.
pub fn parse_receiver(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::Receiver);
    if !parser.consume_text(&["("]) {
        return parser.backtrack();
    }

    if !parse_parameter(parser) {
        parser.emit_error(ParseErrorKind::Expected(Expectation::Identifier));
    }
    if !parser.consume_text(&[")"]) {
        parser.report_unclosed(Delimiter::Parenthesis);
    }
    parser.end_node()
}

pub fn parse_parameter_list(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::ParameterList);
    if !parser.consume_text(&["("]) {
        return parser.backtrack();
    }

    parser.finish_list(")", Delimiter::Parenthesis, parse_parameter, Expectation::Identifier);
    parser.end_node()
}

pub fn parse_parameter(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::Parameter);
    if !expect_name(parser) {
        return parser.backtrack();
    }

    if !parse_type(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Type));
    }
    parser.end_node()
}

pub fn parse_generic_parameters(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::GenericParameters);
    if !parser.consume_kind(&[TokenKind::GenericOpen]) {
        return parser.backtrack();
    }

    parser.finish_list(">", Delimiter::AngleBracket, parse_generic_parameter, Expectation::Identifier);
    parser.end_node()
}

/// `T` or `T Constraint`
fn parse_generic_parameter(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::GenericParameter);
    if !expect_name(parser) {
        return parser.backtrack();
    }

    parse_type(parser);
    parser.end_node_flatten()
}

pub fn parse_struct_def(parser: &mut Parser) -> bool {
    parse_type_def(parser, NodeKind::StructDefinition, "struct")
}

pub fn parse_trait_def(parser: &mut Parser) -> bool {
    parse_type_def(parser, NodeKind::TraitDefinition, "trait")
}

fn parse_type_def(parser: &mut Parser, kind: NodeKind, keyword: &str) -> bool {
    parser.begin_node(kind);
    parser.consume_text(&["pub"]);
    if !parser.consume_text(&[keyword]) {
        return parser.backtrack();
    }

    if !expect_name(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Identifier));
    }
    parse_generic_parameters(parser);
    if !parse_body(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Block));
    }
    parser.end_node()
}

/// The braces of a struct or trait: fields, using clauses and a `cases` block.
pub fn parse_body(parser: &mut Parser) -> bool {
    if !parser.at_text(&["{"]) {
        return false;
    }
    if !parser.enter_recursion() {
        return parser.skip_nested_group();
    }

    parser.begin_node(NodeKind::Body);
    parser.consume_text(&["{"]);
    parse_braced_items(parser, &BODY_MEMBERS, Expectation::Field, false);
    parser.exit_recursion();
    parser.end_node()
}

pub fn parse_field_def(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::FieldDefinition);
    parser.consume_text(&["pub"]);
    if !expect_name(parser) {
        return parser.backtrack();
    }

    if !parse_type(parser) {
        parser.emit_error(ParseErrorKind::Expected(Expectation::Type));
    }
    expect_semicolon(parser);
    parser.end_node()
}

pub fn parse_cases_block(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::CasesBlock);
    if !parser.consume_text(&["cases"]) {
        return parser.backtrack();
    }

    if !parser.consume_text(&["{"]) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Block));
    }
    parse_braced_items(parser, &CASES_MEMBERS, Expectation::Case, true);
    parser.end_node()
}

/// `Name;` or `Name T;`
pub fn parse_enum_case(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::EnumCase);
    if !expect_name(parser) {
        return parser.backtrack();
    }

    parse_type(parser);
    expect_semicolon(parser);
    parser.end_node()
}

/// `{ statement* }`
pub fn parse_block(parser: &mut Parser) -> bool {
    if !parser.at_text(&["{"]) {
        return false;
    }
    if !parser.enter_recursion() {
        return parser.skip_nested_group();
    }

    parser.begin_node(NodeKind::Block);
    parser.consume_text(&["{"]);
    parse_braced_items(parser, &BLOCK_STATEMENTS, Expectation::Statement, true);
    parser.exit_recursion();
    parser.end_node()
}

/// Parses items up to and including the closing `}` of an already opened brace.
///
/// Anything that is not an item is skipped up to the next `;` or `}`. With
/// `reject_pub`, a `pub` is reported and skipped on its own so that the
/// declaration after it still parses.
fn parse_braced_items(parser: &mut Parser, items: &[Rule], expected: Expectation, reject_pub: bool) {
    loop {
        if parser.at_end() || parser.at_text(&["}"]) {
            break;
        }
        if reject_pub && parser.at_text(&["pub"]) {
            parser.error_and_bump(ParseErrorKind::AccessModifierNotAllowed);
            continue;
        }

        let start = parser.position();
        if parser.any_of(items) && parser.position() > start {
            continue;
        }
        if !parser.recover(ParseErrorKind::Expected(expected), &[";"], &["}"]) {
            break;
        }
    }

    if !parser.consume_text(&["}"]) {
        parser.report_unclosed(Delimiter::CurlyBrace);
    }
}

pub fn parse_if_stmt(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::IfStatement);
    if !parser.consume_text(&["if"]) {
        return parser.backtrack();
    }

    if !parse_expr(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Expression));
    }
    if !parse_block(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Block));
    }

    while parser.at_text(&["else"]) {
        parser.begin_node(NodeKind::ElseClause);
        parser.consume_text(&["else"]);

        if parser.consume_text(&["if"]) {
            parser.set_kind(NodeKind::ElseIfClause);
            if !parse_expr(parser) {
                parser.error_and_end(ParseErrorKind::Expected(Expectation::Expression));
                break;
            }
            if !parse_block(parser) {
                parser.error_and_end(ParseErrorKind::Expected(Expectation::Block));
                break;
            }
            parser.end_node();
            continue;
        }

        if !parse_block(parser) {
            parser.emit_error(ParseErrorKind::Expected(Expectation::Block));
        }
        parser.end_node();
        break;
    }

    parser.end_node()
}

pub fn parse_while_stmt(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::WhileStatement);
    if !parser.consume_text(&["while"]) {
        return parser.backtrack();
    }

    if !parse_expr(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Expression));
    }
    if !parse_block(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Block));
    }
    parser.end_node()
}

pub fn parse_do_while_stmt(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::DoWhileStatement);
    if !parser.consume_text(&["do"]) {
        return parser.backtrack();
    }

    if !parse_block(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Block));
    }
    if !parser.consume_text(&["while"]) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::While));
    }
    if !parse_expr(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Expression));
    }
    expect_semicolon(parser);
    parser.end_node()
}

pub fn parse_for_stmt(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::ForStatement);
    if !parser.consume_text(&["for"]) {
        return parser.backtrack();
    }

    if !expect_name(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Identifier));
    }
    parse_type(parser);
    if !parser.consume_text(&["in"]) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::In));
    }
    if !parse_expr(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Expression));
    }
    if !parse_block(parser) {
        return parser.error_and_end(ParseErrorKind::Expected(Expectation::Block));
    }
    parser.end_node()
}

pub fn parse_break_stmt(parser: &mut Parser) -> bool {
    parse_jump_stmt(parser, NodeKind::BreakStatement, "break")
}

pub fn parse_continue_stmt(parser: &mut Parser) -> bool {
    parse_jump_stmt(parser, NodeKind::ContinueStatement, "continue")
}

fn parse_jump_stmt(parser: &mut Parser, kind: NodeKind, keyword: &str) -> bool {
    parser.begin_node(kind);
    if !parser.consume_text(&[keyword]) {
        return parser.backtrack();
    }

    expect_semicolon(parser);
    parser.end_node()
}

pub fn parse_return_stmt(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::ReturnStatement);
    if !parser.consume_text(&["return"]) {
        return parser.backtrack();
    }

    parse_expr(parser);
    expect_semicolon(parser);
    parser.end_node()
}

/// `expr;` or `target op= value;`
pub fn parse_expression_stmt(parser: &mut Parser) -> bool {
    parser.begin_node(NodeKind::ExpressionStatement);
    if !parse_expr(parser) {
        return parser.backtrack();
    }

    if parser.consume_text(&ASSIGNMENT_OPERATORS) {
        parser.set_kind(NodeKind::AssignmentStatement);
        if !parse_expr(parser) {
            parser.emit_error(ParseErrorKind::Expected(Expectation::Expression));
        }
    }

    expect_semicolon(parser);
    parser.end_node()
}
