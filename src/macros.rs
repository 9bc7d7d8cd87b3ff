//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance covering a byte range of the source

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's literal text
/// * `$start` - Byte offset where the token starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, String::from("42"), lexer.pos);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $start:expr) => {{
        let text: String = $text;
        let start: usize = $start;
        Token {
            kind: $kind,
            span: $crate::Span::new(start, start + text.len()),
            text,
        }
    }};
}
