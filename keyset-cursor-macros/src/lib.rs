// =============================================================================
// CRATE-LEVEL QUALITY LINTS
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
// Note: unreachable_pub is not applicable to proc-macro crates where internal
// functions need pub visibility for module organization but aren't exported
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION FOR PROC-MACRO CRATES
// =============================================================================
#![allow(clippy::doc_markdown)] // Code in docs - extensive changes needed
#![allow(clippy::missing_errors_doc)] // # Errors sections - doc-heavy
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Derive macro for `keyset-cursor` record shapes.
//!
//! Use it through the re-export: `use keyset_cursor::Record;`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod debug;
mod errors;
mod record;

/// Derive `keyset_cursor::Record` for a struct with named fields.
///
/// # Example
/// ```ignore
/// #[derive(Record)]
/// struct Object {
///     #[cursor(rename = "ID")]
///     id: String,
///     #[cursor(default, desc, rename = "CreatedAt")]
///     created_at: DateTime<Utc>,
///     kind: i64,
/// }
/// ```
#[proc_macro_derive(Record, attributes(cursor))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match record::expand(&input) {
        Ok(tokens) => {
            debug::debug_tokens("derive(Record)", &tokens);
            tokens.into()
        },
        Err(err) => err.to_compile_error().into(),
    }
}
