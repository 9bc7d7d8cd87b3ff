//! Symbol resolution over a parsed program.
//!
//! - `object` - the symbol tables: nested namespaces split by visibility
//! - `resolver` - the visitor that fills them from top-level definitions

pub mod object;
pub mod resolver;
