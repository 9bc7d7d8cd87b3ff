//! Error types for the front end.
//!
//! Lexing, parsing and symbol resolution each have their own taxonomy.
//! None of them abort their phase: every error is collected into a list
//! while the phase keeps producing a best-effort result.

pub mod errors;

#[cfg(test)]
mod tests;
