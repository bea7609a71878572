//! Keyset pagination: cursors, opaque ids and page slicing.
//!
//! # Round trip
//!
//! 1. The client sends a [`PageRequest`] (empty id on the first page).
//! 2. [`Cursor::from_request`] resolves the field and decodes the id.
//! 3. [`Cursor::builder`] renders the `WHERE`/`ORDER BY`/`LIMIT` clauses. The
//!    query fetches `limit + 1` rows so a following page can be detected
//!    without a second query.
//! 4. [`Cursor::slice`] trims the extra row and returns [`PageInfo`], whose
//!    first/last ids are the next request's cursor ids.
//!
//! ```
//! use keyset_cursor::{Backend, Cursor, PageRequest, Record};
//!
//! #[derive(Record)]
//! struct Post {
//!     #[cursor(default)]
//!     id: i64,
//! }
//!
//! let cursor = Cursor::from_request::<Post>(&PageRequest::default())?;
//! let query = cursor.builder(Backend::Spanner).with_sql("SELECT * FROM Posts").to_sql();
//! assert_eq!(query.sql, "SELECT * FROM Posts ORDER BY id ASC LIMIT 21");
//!
//! let rows: Vec<Post> = (1..=21).map(|id| Post { id }).collect();
//! let (page, info) = cursor.slice(rows);
//! assert_eq!(page.len(), 20);
//! assert!(info.has_next());
//!
//! let next = PageRequest { id: info.last_id().to_string(), ..PageRequest::default() };
//! let cursor = Cursor::from_request::<Post>(&next)?;
//! let query = cursor.builder(Backend::Spanner).with_sql("SELECT * FROM Posts").to_sql();
//! assert_eq!(query.sql, "SELECT * FROM Posts WHERE id > @id ORDER BY id ASC LIMIT 21");
//! # Ok::<(), keyset_cursor::Error>(())
//! ```

mod cursor;
mod encoding;
mod page_info;

#[cfg(test)]
pub(crate) mod fixtures;

pub use cursor::{Cursor, Direction, PageRequest, normalize_limit};
pub use page_info::PageInfo;

/// Page size used when none, zero or too large a limit is requested.
pub const DEFAULT_LIMIT: u32 = 20;

/// Largest page size honoured as requested.
pub const MAX_LIMIT: u32 = 100;

/// Id returned by [`Cursor::create_id`] when a record has no usable value.
pub const INVALID_ID: &str = "INVALID";

/// Maximum accepted cursor id size in bytes (4KB).
/// Larger ids are rejected before base64 decoding.
pub const MAX_ID_SIZE: usize = 4 * 1024;
