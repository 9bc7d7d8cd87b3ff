//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms a token sequence
//! into a syntax tree. It handles:
//!
//! - Transactional node construction with backtracking (`parser`)
//! - Precedence-climbing expressions (`expr`) driven by binding power tables (`lookups`)
//! - Type parsing (`types`)
//! - Declaration and statement parsing (`stmt`)
//! - Error reporting and skip-to-synchronization recovery
//!
//! Every rule is a function `fn(&mut Parser) -> bool`. Returning `false` means the
//! rule does not start here and has left no trace; returning `true` means it produced
//! a node, which may contain error markers.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
