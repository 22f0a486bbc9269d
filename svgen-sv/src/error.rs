use thiserror::Error;

/// Result type for template construction.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Construction-validity errors.
///
/// These surface synchronously at the point of construction, never during
/// rendering: templates accept any fragment shape, but leaf declarations
/// reject empty identifiers and literal formatting rejects values that do
/// not fit their width.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("a {context} requires a non-empty name")]
    EmptyName { context: &'static str },

    #[error("struct '{name}' requires at least one field")]
    EmptyStruct { name: String },

    #[error("a literal width must be at least one bit")]
    ZeroWidth,

    #[error("{value} cannot be represented in {width} bits")]
    WidthOverflow { value: u128, width: u32 },

    #[error("'{text}' is not an unsigned integer")]
    InvalidInteger { text: String },
}
