//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenType
/// * `$value` - The lexeme text
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenType::Literal, String::from("42"));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        $crate::lexer::tokens::Token::new($kind, $value)
    };
}
