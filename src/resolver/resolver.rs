use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::CompilerError,
    lexer::tokens::TokenKind,
};

use super::object::{Entry, Namespace, Object, Symbol, SymbolKind, Visibility};

/// Collects top-level definitions of one or more programs into an [`Object`].
///
/// Redefinitions are reported and skipped; the visitor always continues with
/// the next statement.
#[derive(Debug, Default)]
pub struct Visitor {
    object: Object,
    errors: Vec<CompilerError>,
    current_namespace: Option<String>,
}

impl Visitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the definitions of `tree`, which must be a `program` node.
    ///
    /// Each program starts outside of any namespace.
    pub fn visit_program(&mut self, tree: &Node) {
        if tree.kind != NodeKind::Program {
            tracing::debug!(kind = %tree.kind, "not a program, nothing to resolve");
            return;
        }

        self.current_namespace = None;
        for statement in tree.child_nodes() {
            self.visit_top_level(statement);
        }
    }

    fn visit_top_level(&mut self, node: &Node) {
        match node.kind {
            NodeKind::NamespaceStatement => self.visit_namespace(node),
            NodeKind::VariableDefinition => self.define(node, SymbolKind::Variable),
            NodeKind::FunctionDefinition => self.define(node, SymbolKind::Function),
            NodeKind::StructDefinition => self.define(node, SymbolKind::Struct),
            NodeKind::TraitDefinition => self.define(node, SymbolKind::Trait),
            // Using clauses and methods introduce no names; error markers are skipped
            _ => {}
        }
    }

    fn visit_namespace(&mut self, node: &Node) {
        let Some(name) = node.find_child(NodeKind::QualifiedName).and_then(qualified_name) else {
            return;
        };

        self.current_namespace = Some(name.clone());
        let entry = Entry::Namespace(Namespace::new());
        if !self.object.add_symbol(visibility_of(node), &name, entry) {
            tracing::debug!(%name, "namespace redefined");
            self.errors.push(CompilerError::NamespaceRedefinition { name });
        }
    }

    fn define(&mut self, node: &Node, kind: SymbolKind) {
        let Some(token) = node
            .child_tokens()
            .find(|token| token.kind == TokenKind::Identifier)
        else {
            return;
        };

        let name = self.qualify(&token.text);
        let visibility = visibility_of(node);
        let symbol = Symbol {
            name: name.clone(),
            kind,
            visibility,
            definition: node.kind,
            span: token.span,
        };
        if self.object.add_symbol(visibility, &name, Entry::Symbol(symbol)) {
            tracing::trace!(%name, ?kind, ?visibility, "defined symbol");
        } else {
            tracing::debug!(%name, "symbol redefined");
            self.errors.push(CompilerError::SymbolRedefinition { name });
        }
    }

    fn qualify(&self, name: &str) -> String {
        match &self.current_namespace {
            Some(namespace) => format!("{}.{}", namespace, name),
            None => name.to_string(),
        }
    }

    pub fn finish(self) -> (Object, Vec<CompilerError>) {
        (self.object, self.errors)
    }
}

fn visibility_of(node: &Node) -> Visibility {
    match node.children.first().and_then(|child| child.as_token()) {
        Some(token) if token.text == "pub" => Visibility::Public,
        _ => Visibility::Private,
    }
}

/// `a.b.c` from a qualified name node, ignoring any error markers inside it.
fn qualified_name(node: &Node) -> Option<String> {
    let segments: Vec<&str> = node
        .child_tokens()
        .filter(|token| token.kind == TokenKind::Identifier)
        .map(|token| token.text.as_str())
        .collect();

    if segments.is_empty() {
        None
    } else {
        Some(segments.join("."))
    }
}

/// Collects the top-level symbols of a parsed program.
///
/// # Returns
///
/// A tuple containing:
/// - The symbols, split into public and private namespaces
/// - Redefinition errors, in source order
#[tracing::instrument(skip_all)]
pub fn validate(tree: &Node) -> (Object, Vec<CompilerError>) {
    let mut visitor = Visitor::new();
    visitor.visit_program(tree);
    let (object, errors) = visitor.finish();
    tracing::debug!(errors = errors.len(), "resolved symbols");
    (object, errors)
}
