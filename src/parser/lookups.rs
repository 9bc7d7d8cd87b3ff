use std::collections::HashMap;

use lazy_static::lazy_static;

use super::{expr::*, parser::Rule, stmt::*, types::*};

/// Binding powers of prefix and infix operators, weakest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Additive,
    Multiplicative,
    Cast,
    Unary,
    Postfix,
}

lazy_static! {
    pub static ref PREFIX_BP_LOOKUP: HashMap<&'static str, BindingPower> = {
        let mut map = HashMap::new();
        for operator in ["+", "-", "!", "~", "&", "*"] {
            map.insert(operator, BindingPower::Unary);
        }
        map
    };

    /// Keyed by token text, so `<` covers both `Operator` and `GenericOpen` tokens.
    pub static ref INFIX_BP_LOOKUP: HashMap<&'static str, BindingPower> = {
        let mut map = HashMap::new();
        map.insert("||", BindingPower::LogicalOr);
        map.insert("&&", BindingPower::LogicalAnd);

        // Comparison
        map.insert("==", BindingPower::Equality);
        map.insert("!=", BindingPower::Equality);
        map.insert("<", BindingPower::Relational);
        map.insert(">", BindingPower::Relational);
        map.insert("<=", BindingPower::Relational);
        map.insert(">=", BindingPower::Relational);

        // Bitwise
        map.insert("|", BindingPower::BitwiseOr);
        map.insert("^", BindingPower::BitwiseXor);
        map.insert("&", BindingPower::BitwiseAnd);

        // Arithmetic
        map.insert("+", BindingPower::Additive);
        map.insert("-", BindingPower::Additive);
        map.insert("*", BindingPower::Multiplicative);
        map.insert("/", BindingPower::Multiplicative);
        map.insert("%", BindingPower::Multiplicative);

        map.insert("as", BindingPower::Cast);

        // Call, index and member access
        map.insert("(", BindingPower::Postfix);
        map.insert("[", BindingPower::Postfix);
        map.insert(".", BindingPower::Postfix);
        map
    };
}

pub const ASSIGNMENT_OPERATORS: [&str; 9] = ["=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^="];

/// Tokens that end a skip at the top level without being consumed.
pub const TOP_LEVEL_SYNC: [&str; 7] = ["pub", "using", "var", "func", "method", "struct", "trait"];

pub const TOP_LEVEL_STATEMENTS: [Rule; 6] = [
    parse_using_stmt,
    parse_var_def,
    parse_func_def,
    parse_method_def,
    parse_struct_def,
    parse_trait_def,
];

/// Declarations come first so that keywords never reach the expression statement.
pub const BLOCK_STATEMENTS: [Rule; 15] = [
    parse_using_stmt,
    parse_var_def,
    parse_func_def,
    parse_method_def,
    parse_struct_def,
    parse_trait_def,
    parse_if_stmt,
    parse_while_stmt,
    parse_do_while_stmt,
    parse_for_stmt,
    parse_break_stmt,
    parse_continue_stmt,
    parse_return_stmt,
    parse_block,
    parse_expression_stmt,
];

pub const BODY_MEMBERS: [Rule; 3] = [parse_using_stmt, parse_field_def, parse_cases_block];

pub const CASES_MEMBERS: [Rule; 4] = [parse_struct_def, parse_trait_def, parse_using_stmt, parse_enum_case];

/// Tried in order; the named type is last since every other form starts with punctuation or a keyword.
pub const TYPE_ALTERNATIVES: [Rule; 6] = [
    parse_tuple_type,
    parse_array_type,
    parse_pointer_type,
    parse_function_type,
    parse_mut_type,
    parse_named_type,
];

/// Rules an expression can start with when it is not a prefix operation.
pub const PRIMARY_EXPRESSIONS: [Rule; 3] = [parse_grouping_expr, parse_array_expr, parse_primary_expr];
