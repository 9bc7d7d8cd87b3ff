use crate::{errors::errors::ParseErrorKind, lexer::tokens::Token};

use super::ast::{Element, Node, NodeKind};

/// Index of a node in the [`TreeBuilder`] arena.
pub type NodeId = usize;

#[derive(Debug, Clone)]
enum Slot {
    Token(Token),
    Node(NodeId),
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    children: Vec<Slot>,
    parent: Option<NodeId>,
    error: Option<ParseErrorKind>,
}

/// Arena holding the tree while it is being parsed.
///
/// Invariant: every node allocated after an open node `n` is a descendant of `n`
/// (or a detached leftover of one), so abandoning `n` is a plain truncation.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
    current: Option<NodeId>,
    root: Option<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Number of arena slots in use, detached leftovers included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Opens a node as the last child of the current node (or as the root) and makes it current.
    pub fn open(&mut self, kind: NodeKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(NodeData {
            kind,
            children: vec![],
            parent: self.current,
            error: None,
        });

        match self.current {
            Some(parent) => self.nodes[parent].children.push(Slot::Node(id)),
            None => {
                debug_assert!(self.root.is_none(), "a tree has a single root");
                self.root = Some(id);
            }
        }
        self.current = Some(id);
        id
    }

    /// Opens an error marker carrying `error`.
    pub fn open_error(&mut self, error: ParseErrorKind) -> NodeId {
        let id = self.open(NodeKind::Error);
        self.nodes[id].error = Some(error);
        id
    }

    pub fn close(&mut self) {
        if let Some(id) = self.current {
            self.current = self.nodes[id].parent;
        }
    }

    /// Closes the current node. If it ended up with a single child, the child
    /// takes its place in the parent.
    pub fn close_flatten(&mut self) {
        let Some(id) = self.current else {
            return;
        };
        let parent = self.nodes[id].parent;
        self.current = parent;

        let Some(parent) = parent else {
            return;
        };
        if self.nodes[id].children.len() != 1 {
            return;
        }
        let Some(child) = self.nodes[id].children.pop() else {
            return;
        };
        if let Slot::Node(child_id) = child {
            self.nodes[child_id].parent = Some(parent);
        }
        if let Some(slot) = self.nodes[parent].children.last_mut() {
            debug_assert!(matches!(slot, Slot::Node(n) if *n == id));
            *slot = child;
        }
    }

    /// Removes the current node `id` and everything below it.
    pub fn abandon(&mut self, id: NodeId) {
        debug_assert_eq!(self.current, Some(id), "only the current node can be abandoned");
        let parent = self.nodes[id].parent;
        match parent {
            Some(parent) => {
                let removed = self.nodes[parent].children.pop();
                debug_assert!(matches!(removed, Some(Slot::Node(n)) if n == id));
            }
            None => self.root = None,
        }
        self.nodes.truncate(id);
        self.current = parent;
    }

    pub fn push_token(&mut self, token: Token) {
        if let Some(id) = self.current {
            self.nodes[id].children.push(Slot::Token(token));
        }
    }

    pub fn child_count(&self) -> usize {
        self.current.map_or(0, |id| self.nodes[id].children.len())
    }

    pub fn kind(&self) -> Option<NodeKind> {
        self.current.map(|id| self.nodes[id].kind)
    }

    pub fn set_kind(&mut self, kind: NodeKind) {
        if let Some(id) = self.current {
            self.nodes[id].kind = kind;
        }
    }

    /// Moves all children of the current node into a new node of the same kind,
    /// which becomes the current node's only child.
    pub fn wrap_children(&mut self) {
        let Some(id) = self.current else {
            return;
        };
        let wrapper = self.nodes.len();
        let kind = self.nodes[id].kind;
        let children = std::mem::take(&mut self.nodes[id].children);
        for child in &children {
            if let Slot::Node(child_id) = child {
                self.nodes[*child_id].parent = Some(wrapper);
            }
        }
        self.nodes.push(NodeData {
            kind,
            children,
            parent: Some(id),
            error: None,
        });
        self.nodes[id].children.push(Slot::Node(wrapper));
    }

    /// Converts the arena into an owned tree. Returns `None` if no root was ever opened.
    pub fn finish(self) -> Option<Node> {
        let root = self.root?;
        Some(self.build(root))
    }

    fn build(&self, id: NodeId) -> Node {
        let data = &self.nodes[id];
        let children = data
            .children
            .iter()
            .map(|slot| match slot {
                Slot::Token(token) => Element::Token(token.clone()),
                Slot::Node(child) => Element::Node(self.build(*child)),
            })
            .collect();

        Node {
            kind: data.kind,
            children,
            error: data.error,
        }
    }
}
