//! PageInfo and result slicing for pagination responses.

use serde::Serialize;

use crate::shape::Record;

use super::cursor::Cursor;

/// Boundaries of one served page.
///
/// `has_prev` is a heuristic: it is `true` whenever the request carried a
/// cursor id, even if that id pointed past the last row and nothing precedes
/// the page in fact.
///
/// # Example
///
/// ```
/// use keyset_cursor::{Cursor, Record};
///
/// #[derive(Record)]
/// struct Post {
///     #[cursor(default)]
///     id: i64,
/// }
///
/// let cursor = Cursor::first_page::<Post>()?.with_limit(2);
/// let rows = vec![Post { id: 1 }, Post { id: 2 }, Post { id: 3 }];
/// let (items, page_info) = cursor.slice(rows);
///
/// let body = serde_json::json!({ "count": items.len(), "page_info": page_info });
/// assert_eq!(body["page_info"]["has_next"], true);
/// assert_eq!(body["page_info"]["length"], 2);
/// # Ok::<(), keyset_cursor::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    first_id: String,
    last_id: String,
    has_prev: bool,
    has_next: bool,
    length: u32,
}

impl PageInfo {
    /// Cursor id of the first row, empty for an empty page.
    #[must_use]
    pub fn first_id(&self) -> &str {
        &self.first_id
    }

    /// Cursor id of the last row, empty for an empty page.
    #[must_use]
    pub fn last_id(&self) -> &str {
        &self.last_id
    }

    /// Whether a previous page is assumed to exist.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.has_prev
    }

    /// Whether more rows follow this page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    /// Number of rows on the page.
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.length
    }
}

impl Cursor {
    /// Trim an over-fetched result to the page and describe its boundaries.
    ///
    /// `rows` is the result of a query built with `LIMIT limit + 1`. At most
    /// `limit` rows are kept, and the extra row only sets `has_next`.
    pub fn slice<R: Record>(&self, mut rows: Vec<R>) -> (Vec<R>, PageInfo) {
        if rows.is_empty() {
            return (rows, PageInfo::default());
        }

        let limit = self.limit() as usize;
        let has_next = rows.len() > limit;
        rows.truncate(limit);

        let first_id = rows.first().map(|r| self.create_id(r)).unwrap_or_default();
        let last_id = rows.last().map(|r| self.create_id(r)).unwrap_or_default();
        let info = PageInfo {
            first_id,
            last_id,
            has_prev: !self.is_first_page(),
            has_next,
            length: rows.len() as u32,
        };
        (rows, info)
    }
}
