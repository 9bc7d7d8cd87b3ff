use std::fmt::Display;

use crate::{errors::errors::ParseErrorKind, lexer::tokens::Token};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum NodeKind {
    Program,
    NamespaceStatement,
    UsingStatement,
    QualifiedName,
    VariableDefinition,
    FunctionDefinition,
    MethodDefinition,
    Receiver,
    ParameterList,
    Parameter,
    GenericParameters,
    GenericParameter,
    StructDefinition,
    TraitDefinition,
    Body,
    FieldDefinition,
    CasesBlock,
    EnumCase,
    Block,
    IfStatement,
    ElseIfClause,
    ElseClause,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    BreakStatement,
    ContinueStatement,
    ReturnStatement,
    ExpressionStatement,
    AssignmentStatement,
    InfixExpression,
    PrefixExpression,
    CallExpression,
    ArgumentList,
    IndexExpression,
    MemberExpression,
    CastExpression,
    ParenthesizedExpression,
    TupleExpression,
    ArrayExpression,
    TupleType,
    ArrayType,
    PointerType,
    FunctionType,
    TypeList,
    MutType,
    NamedType,
    GenericArguments,
    Error,
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Program => "program",
            NodeKind::NamespaceStatement => "namespace statement",
            NodeKind::UsingStatement => "using statement",
            NodeKind::QualifiedName => "qualified name",
            NodeKind::VariableDefinition => "variable definition",
            NodeKind::FunctionDefinition => "function definition",
            NodeKind::MethodDefinition => "method definition",
            NodeKind::Receiver => "receiver",
            NodeKind::ParameterList => "parameter list",
            NodeKind::Parameter => "parameter",
            NodeKind::GenericParameters => "generic parameters",
            NodeKind::GenericParameter => "generic parameter",
            NodeKind::StructDefinition => "struct definition",
            NodeKind::TraitDefinition => "trait definition",
            NodeKind::Body => "body",
            NodeKind::FieldDefinition => "field definition",
            NodeKind::CasesBlock => "cases block",
            NodeKind::EnumCase => "enum case",
            NodeKind::Block => "block",
            NodeKind::IfStatement => "if statement",
            NodeKind::ElseIfClause => "else if clause",
            NodeKind::ElseClause => "else clause",
            NodeKind::WhileStatement => "while statement",
            NodeKind::DoWhileStatement => "do while statement",
            NodeKind::ForStatement => "for statement",
            NodeKind::BreakStatement => "break statement",
            NodeKind::ContinueStatement => "continue statement",
            NodeKind::ReturnStatement => "return statement",
            NodeKind::ExpressionStatement => "expression statement",
            NodeKind::AssignmentStatement => "assignment statement",
            NodeKind::InfixExpression => "infix expression",
            NodeKind::PrefixExpression => "prefix expression",
            NodeKind::CallExpression => "call expression",
            NodeKind::ArgumentList => "argument list",
            NodeKind::IndexExpression => "index expression",
            NodeKind::MemberExpression => "member expression",
            NodeKind::CastExpression => "cast expression",
            NodeKind::ParenthesizedExpression => "parenthesized expression",
            NodeKind::TupleExpression => "tuple expression",
            NodeKind::ArrayExpression => "array expression",
            NodeKind::TupleType => "tuple type",
            NodeKind::ArrayType => "array type",
            NodeKind::PointerType => "pointer type",
            NodeKind::FunctionType => "function type",
            NodeKind::TypeList => "type list",
            NodeKind::MutType => "mut type",
            NodeKind::NamedType => "named type",
            NodeKind::GenericArguments => "generic arguments",
            NodeKind::Error => "error",
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Token(Token),
    Node(Node),
}

impl Element {
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Element::Token(token) => Some(token),
            Element::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Element::Node(node) => Some(node),
            Element::Token(_) => None,
        }
    }
}

/// A finished syntax tree node.
///
/// `error` is only set on nodes of kind [`NodeKind::Error`]; their children are
/// whatever tokens were skipped while recovering (possibly none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Element>,
    pub error: Option<ParseErrorKind>,
}

impl Node {
    pub fn new(kind: NodeKind, children: Vec<Element>) -> Self {
        Node {
            kind,
            children,
            error: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NodeKind::Error
    }

    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(Element::as_node)
    }

    /// Tokens that are direct children of this node.
    pub fn child_tokens(&self) -> impl Iterator<Item = &Token> {
        self.children.iter().filter_map(Element::as_token)
    }

    pub fn find_child(&self, kind: NodeKind) -> Option<&Node> {
        self.child_nodes().find(|node| node.kind == kind)
    }

    /// All leaf tokens below this node, in source order.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens = Vec::new();
        self.collect_tokens(&mut tokens);
        tokens
    }

    fn collect_tokens<'a>(&'a self, tokens: &mut Vec<&'a Token>) {
        for child in &self.children {
            match child {
                Element::Token(token) => tokens.push(token),
                Element::Node(node) => node.collect_tokens(tokens),
            }
        }
    }

    /// Concatenated text of all leaf tokens, without separators.
    pub fn text(&self) -> String {
        self.tokens().iter().map(|token| token.text.as_str()).collect()
    }

    /// Every error marker below this node, in tree order.
    pub fn errors(&self) -> Vec<ParseErrorKind> {
        let mut errors = Vec::new();
        self.collect_errors(&mut errors);
        errors
    }

    fn collect_errors(&self, errors: &mut Vec<ParseErrorKind>) {
        if let Some(error) = self.error {
            errors.push(error);
        }
        for node in self.child_nodes() {
            node.collect_errors(errors);
        }
    }

    pub fn has_errors(&self) -> bool {
        self.error.is_some() || self.child_nodes().any(Node::has_errors)
    }

    /// Renders the tree one element per line, children indented by two spaces.
    pub fn dump(&self) -> String {
        let mut lines = Vec::new();
        self.dump_into(0, &mut lines);
        lines.join("\n")
    }

    fn dump_into(&self, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        match self.error {
            Some(error) => lines.push(format!("{}error: {}", indent, error)),
            None => lines.push(format!("{}{}", indent, self.kind)),
        }
        for child in &self.children {
            match child {
                Element::Token(token) => lines.push(format!("{}  {}", indent, token)),
                Element::Node(node) => node.dump_into(depth + 1, lines),
            }
        }
    }
}
