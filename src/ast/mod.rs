//! Syntax tree definitions.
//!
//! - `ast` holds the finished, owned tree handed out by the parser
//! - `builder` holds the arena the parser fills while it works. Nodes there are
//!   addressed by index and know their parent, which is how the parser climbs
//!   back up after closing a node.

pub mod ast;
pub mod builder;

#[cfg(test)]
mod tests;
