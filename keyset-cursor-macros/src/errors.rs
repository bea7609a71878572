//! Compile-time error messages with examples.

use proc_macro2::Span;
use syn::Error;

/// Build an error for an unknown option with valid options.
pub fn unknown_error(span: Span, kind: &str, got: &str, valid: &[&str]) -> Error {
    let valid_str = valid.join(", ");
    Error::new(
        span,
        format!("Unknown {kind} '{got}'.\n\nValid options: {valid_str}"),
    )
}

/// Build an error for an option or column given twice.
pub fn duplicate_error(span: Span, what: &str, name: &str) -> Error {
    Error::new(
        span,
        format!("Duplicate {what} '{name}'. Each {what} can only appear once."),
    )
}

/// Build an error for a column name that is not a plain SQL identifier.
pub fn invalid_column_error(span: Span, name: &str) -> Error {
    Error::new(
        span,
        format!(
            "Invalid column name '{name}'. Use letters, digits and '_', \
             not starting with a digit.\n\nExample: #[cursor(rename = \"CreatedAt\")]"
        ),
    )
}

/// Build an error for a derive target that is not a struct with named fields.
pub fn unsupported_item_error(span: Span) -> Error {
    Error::new(
        span,
        "Record derive only supports structs with named fields.\n\n\
         Example:\n  #[derive(Record)]\n  struct Post { #[cursor(default)] id: i64 }",
    )
}
