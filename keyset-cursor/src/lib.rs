// =============================================================================
// CRATE-LEVEL QUALITY LINTS
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
#![allow(clippy::doc_markdown)] // Column names in docs
#![allow(clippy::missing_errors_doc)] // Every error is Error, documented on the enum
#![allow(clippy::module_name_repetitions)] // Type names matching module - acceptable
#![allow(clippy::return_self_not_must_use)] // Cursor and builder types are must_use already
#![allow(clippy::must_use_candidate)] // Builder methods - fluent API doesn't need must_use
#![allow(clippy::cast_possible_truncation)] // Page lengths are bounded by the limit
#![allow(clippy::double_must_use)] // Functions returning must_use types can have their own docs
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::indexing_slicing))]

//! # keyset-cursor - Keyset Pagination for SQL Queries
//!
//! Opaque cursor ids, `WHERE`/`ORDER BY`/`LIMIT` generation and page slicing
//! for single-column keyset pagination over Cloud Spanner and `SQLite`.
//!
//! ## Quick Start
//!
//! Describe which fields of a record can be paged on:
//!
//! ```
//! use keyset_cursor::prelude::*;
//! use chrono::{DateTime, Utc};
//!
//! #[derive(Record)]
//! struct Object {
//!     #[cursor(rename = "ID")]
//!     id: String,
//!     #[cursor(default, desc, rename = "CreatedAt")]
//!     created_at: DateTime<Utc>,
//!     kind: i64,
//! }
//!
//! // First page: no id, the default field, newest first
//! let cursor = Cursor::first_page::<Object>()?;
//! let query = cursor
//!     .builder(Backend::Spanner)
//!     .with_sql("SELECT * FROM Objects WHERE Kind = @Kind")
//!     .with_param("Kind", 1)
//!     .to_sql();
//!
//! assert_eq!(
//!     query.sql,
//!     "SELECT * FROM Objects WHERE Kind = @Kind ORDER BY CreatedAt DESC LIMIT 21"
//! );
//!
//! // A page that continues after a known id
//! let cursor = cursor.with_id("Q3JlYXRlZEF0OjE2NjQxNzcyODE0NDU2NzY=")?;
//! let query = cursor.builder(Backend::Spanner).with_sql("SELECT * FROM Objects").to_sql();
//! assert_eq!(
//!     query.sql,
//!     "SELECT * FROM Objects WHERE CreatedAt < @CreatedAt ORDER BY CreatedAt DESC LIMIT 21"
//! );
//! assert!(matches!(query.params.get("CreatedAt"), Some(Value::Timestamp(_))));
//! # Ok::<(), keyset_cursor::Error>(())
//! ```
//!
//! ## Sign Logic
//!
//! | Direction | Field order | Comparison | `ORDER BY` |
//! |-----------|-------------|------------|------------|
//! | forward   | `ASC`       | `>`        | `ASC`      |
//! | forward   | `DESC`      | `<`        | `DESC`     |
//! | backward  | `ASC`       | `<`        | `DESC`     |
//! | backward  | `DESC`      | `>`        | `ASC`      |
//!
//! Backward pages come back in the reversed order; callers that display them
//! in the field's natural order reverse the slice themselves.
//!
//! ## Cursor Ids
//!
//! An id is the standard base64 of `"<field>:<value>"`. Integers are written
//! in decimal, text verbatim and timestamps as microseconds since the Unix
//! epoch. Ids are opaque to clients and never signed.

mod builder;
mod dialect;
mod error;
mod pagination;
mod shape;
mod value;

pub use builder::{Operator, QueryResult, SqlBuilder, SqlFragment, fragment};
pub use dialect::{Backend, Dialect, Spanner, Sqlite};
pub use error::{Error, InvalidIdReason};
pub use pagination::{
    Cursor, DEFAULT_LIMIT, Direction, INVALID_ID, MAX_ID_SIZE, MAX_LIMIT, PageInfo, PageRequest,
    normalize_limit,
};
pub use shape::{
    CursorTag, FieldDef, FieldDescriptor, FieldType, Record, Shape, SortOrder, ValueKind,
};
pub use value::{CursorValue, IntoCursorValue, Params, Value};

/// Derive [`Record`] for a struct with named fields.
///
/// Fields tagged `#[cursor]` can be paged on. Exactly one field may carry
/// `#[cursor(default)]`; it is used when a request has no cursor id.
///
/// | Attribute | Effect |
/// |-----------|--------|
/// | `#[cursor]` | selectable, ascending |
/// | `#[cursor(default)]` | selected when the id is empty |
/// | `#[cursor(desc)]` | descending intrinsic order |
/// | `#[cursor(rename = "Col")]` | column name used in ids and SQL |
///
/// Integer fields (`i8`..`i64`, `u8`..`u32`), `String` and
/// `DateTime`/`SystemTime` fields are supported. A tagged field of any
/// other type is accepted, and rejected when a cursor selects it.
pub use keyset_cursor_macros::Record;

/// Prelude module for convenient imports.
///
/// ```
/// use keyset_cursor::prelude::*;
///
/// #[derive(Record)]
/// struct Post {
///     #[cursor(default)]
///     id: i64,
/// }
///
/// let cursor = Cursor::first_page::<Post>().unwrap();
/// assert_eq!(cursor.builder(Backend::Sqlite).to_sql().sql, "ORDER BY id ASC LIMIT 21");
/// ```
pub mod prelude {
    pub use crate::{
        Backend, Cursor, CursorValue, Direction, Error, PageInfo, PageRequest, Params, Record,
        SortOrder, SqlBuilder, Value,
    };
}

// ============================================================================
// API Contract Tests (compile-time assertions)
// ============================================================================
