use std::collections::{hash_map, HashMap};

use crate::{ast::ast::NodeKind, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Variable,
    Function,
    Struct,
    Trait,
}

/// A named top-level definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Fully qualified, e.g. `app.core.main`
    pub name: String,
    pub kind: SymbolKind,
    pub visibility: Visibility,
    /// Kind of the node the symbol was registered from
    pub definition: NodeKind,
    /// Where the unqualified name is written
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Namespace(Namespace),
    Symbol(Symbol),
}

impl Entry {
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Entry::Symbol(symbol) => Some(symbol),
            Entry::Namespace(_) => None,
        }
    }

    pub fn as_namespace(&self) -> Option<&Namespace> {
        match self {
            Entry::Namespace(namespace) => Some(namespace),
            Entry::Symbol(_) => None,
        }
    }
}

/// One level of the symbol hierarchy, keyed by a single name segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namespace {
    entries: HashMap<String, Entry>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names defined directly in this namespace, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Looks up a dotted path such as `a.b.c`.
    pub fn get(&self, path: &str) -> Option<&Entry> {
        let mut segments = path.split('.');
        let mut entry = self.entries.get(segments.next()?)?;
        for segment in segments {
            match entry {
                Entry::Namespace(namespace) => entry = namespace.entries.get(segment)?,
                Entry::Symbol(_) => return None,
            }
        }
        Some(entry)
    }

    /// Inserts `entry` at a dotted path, creating missing namespaces along the way.
    ///
    /// Existing entries are never replaced.
    ///
    /// # Returns
    ///
    /// `false` if the path is taken, or runs through a symbol.
    pub fn insert(&mut self, path: &str, entry: Entry) -> bool {
        let mut segments: Vec<&str> = path.split('.').collect();
        let Some(last) = segments.pop() else {
            return false;
        };

        let mut namespace = self;
        for segment in segments {
            let child = namespace
                .entries
                .entry(segment.to_string())
                .or_insert_with(|| Entry::Namespace(Namespace::new()));
            match child {
                Entry::Namespace(inner) => namespace = inner,
                Entry::Symbol(_) => return false,
            }
        }

        match namespace.entries.entry(last.to_string()) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
        }
    }
}

/// The symbols a program defines, split by visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Object {
    pub public_symbols: Namespace,
    pub private_symbols: Namespace,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_public_symbol(&self, name: &str) -> Option<&Entry> {
        self.public_symbols.get(name)
    }

    pub fn get_private_symbol(&self, name: &str) -> Option<&Entry> {
        self.private_symbols.get(name)
    }

    /// Public symbols shadow private ones.
    pub fn get_symbol(&self, name: &str) -> Option<&Entry> {
        self.get_public_symbol(name)
            .or_else(|| self.get_private_symbol(name))
    }

    /// Adds an entry unless `name` is already known with either visibility.
    ///
    /// # Returns
    ///
    /// `false` if the name was taken and nothing was added.
    pub fn add_symbol(&mut self, visibility: Visibility, name: &str, entry: Entry) -> bool {
        if self.get_symbol(name).is_some() {
            return false;
        }

        match visibility {
            Visibility::Public => self.public_symbols.insert(name, entry),
            Visibility::Private => self.private_symbols.insert(name, entry),
        }
    }
}
