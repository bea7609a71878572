//! The page cursor: field, boundary value, limit and direction.

use serde::{Deserialize, Serialize};

use crate::builder::SqlBuilder;
use crate::dialect::Backend;
use crate::shape::{FieldDescriptor, Record, Shape, SortOrder, ValueKind};
use crate::value::CursorValue;
use crate::Error;

use super::encoding::{decode_id, encode_id};
use super::{DEFAULT_LIMIT, INVALID_ID, MAX_LIMIT};

/// Paging direction relative to the cursor's reference row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Continue past the reference row (code `0`).
    #[default]
    Forward,
    /// Go back before the reference row (code `1`).
    Backward,
}

impl Direction {
    /// Wire code: `0` forward, `1` backward.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Forward => 0,
            Self::Backward => 1,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Error> {
        match code {
            0 => Ok(Self::Forward),
            1 => Ok(Self::Backward),
            other => Err(Error::InvalidDirection(other)),
        }
    }
}

/// Caller-facing page request parameters.
///
/// Every field has a default, so a request with no parameters asks for the
/// first page, forward, with the default limit.
///
/// ```
/// use keyset_cursor::PageRequest;
///
/// let req: PageRequest = serde_json::from_str(r#"{"limit": 50}"#).unwrap();
/// assert_eq!(req.id, "");
/// assert_eq!(req.direction, 0);
/// assert_eq!(req.limit, 50);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    /// Opaque cursor id from a previous page, empty for the first page.
    pub id: String,
    /// `0` forward, `1` backward.
    pub direction: u8,
    /// Page size. `0` or anything above 100 means the default of 20.
    pub limit: u32,
}

/// Normalize a requested limit: `0` and values above [`MAX_LIMIT`] become
/// [`DEFAULT_LIMIT`].
#[inline]
#[must_use]
pub const fn normalize_limit(limit: u32) -> u32 {
    if limit == 0 || limit > MAX_LIMIT {
        DEFAULT_LIMIT
    } else {
        limit
    }
}

/// A keyset pagination cursor.
///
/// A cursor either points at the first page of the shape's default field
/// (`id() == ""`, no value) or carries the boundary value decoded from an
/// opaque id. The limit is always within `1..=100`.
///
/// Cursors are immutable values. Configuration methods consume the cursor
/// and return a new one, and the fallible ones return the error instead of a
/// half-updated cursor:
///
/// ```
/// use keyset_cursor::{Cursor, Direction, Record};
///
/// #[derive(Record)]
/// struct Object {
///     #[cursor]
///     id: String,
///     #[cursor(default)]
///     seq: i64,
/// }
///
/// let cursor = Cursor::first_page::<Object>()?
///     .with_limit(10)
///     .with_direction(Direction::Backward)
///     .with_id("c2VxOjQy")?; // "seq:42"
///
/// assert_eq!(cursor.field(), "seq");
/// assert_eq!(cursor.limit(), 10);
/// assert!(cursor.is_backward());
/// # Ok::<(), keyset_cursor::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[must_use = "cursor must be used to build a query or slice a result"]
pub struct Cursor {
    id: String,
    field: FieldDescriptor,
    value: Option<CursorValue>,
    limit: u32,
    direction: Direction,
    shape: &'static Shape,
}

impl Cursor {
    /// Build a cursor in one step.
    ///
    /// An empty `id` selects the first page of the default field.
    pub fn new<R: Record>(id: &str, limit: u32, direction: Direction) -> Result<Self, Error> {
        Self::for_shape(R::shape(), id, limit, direction)
    }

    /// Build a cursor in one step for an explicit shape.
    ///
    /// Unlike [`Cursor::first_page_of`], a non-empty `id` does not require the
    /// shape to have a default field.
    pub fn for_shape(
        shape: &'static Shape,
        id: &str,
        limit: u32,
        direction: Direction,
    ) -> Result<Self, Error> {
        let (field, value) = if id.is_empty() {
            (shape.default_field()?, None)
        } else {
            let (field, value) = decode(shape, id)?;
            (field, Some(value))
        };
        Ok(Self {
            id: id.to_string(),
            field,
            value,
            limit: normalize_limit(limit),
            direction,
            shape,
        })
    }

    /// Build a cursor from request parameters.
    pub fn from_request<R: Record>(req: &PageRequest) -> Result<Self, Error> {
        let direction = Direction::try_from(req.direction)?;
        Self::new::<R>(&req.id, req.limit, direction)
    }

    /// First page of the default field, forward, default limit.
    pub fn first_page<R: Record>() -> Result<Self, Error> {
        Self::first_page_of(R::shape())
    }

    /// First page of the default field of an explicit shape.
    pub fn first_page_of(shape: &'static Shape) -> Result<Self, Error> {
        Ok(Self {
            id: String::new(),
            field: shape.default_field()?,
            value: None,
            limit: DEFAULT_LIMIT,
            direction: Direction::Forward,
            shape,
        })
    }

    /// Set the page size. See [`normalize_limit`].
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = normalize_limit(limit);
        self
    }

    /// Set the paging direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the paging direction from its wire code.
    pub fn with_direction_code(self, code: u8) -> Result<Self, Error> {
        Ok(self.with_direction(Direction::try_from(code)?))
    }

    /// Apply an inbound cursor id.
    ///
    /// An empty id resets the cursor to the first page of the default field.
    /// Otherwise the id is decoded, its field validated against the shape and
    /// its value parsed for that field's kind.
    pub fn with_id(self, id: &str) -> Result<Self, Error> {
        if id.is_empty() {
            let field = self.shape.default_field()?;
            return Ok(Self {
                id: String::new(),
                field,
                value: None,
                ..self
            });
        }

        let (field, value) = decode(self.shape, id)?;
        Ok(Self {
            id: id.to_string(),
            field,
            value: Some(value),
            ..self
        })
    }

    /// Create the opaque id of a record, for use as the next request's id.
    ///
    /// Returns [`INVALID_ID`] if the record's shape has no field of this
    /// cursor's name and kind, or the record yields no value for it.
    pub fn create_id<R: Record>(&self, record: &R) -> String {
        let name = self.field.name();
        let kind = R::shape().field(name).and_then(|f| f.ty.kind());
        let value = match kind {
            Some(kind) if kind == self.field.kind() => record.cursor_value(name),
            _ => None,
        };
        match value {
            Some(value) if value.kind() == self.field.kind() => {
                encode_id(name, &value.to_id_string())
            },
            _ => {
                tracing::warn!(
                    shape = R::shape().name(),
                    field = name,
                    "record has no cursor value for field"
                );
                INVALID_ID.to_string()
            },
        }
    }

    /// Start a SQL builder for this cursor.
    pub fn builder(&self, backend: Backend) -> SqlBuilder<'_> {
        SqlBuilder::new(self, backend)
    }

    /// The inbound id, empty on the first page.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether no inbound id was applied.
    #[must_use]
    pub fn is_first_page(&self) -> bool {
        self.id.is_empty()
    }

    /// Page size, always within `1..=100`.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Paging direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the direction is forward.
    #[must_use]
    pub const fn is_forward(&self) -> bool {
        matches!(self.direction, Direction::Forward)
    }

    /// Whether the direction is backward.
    #[must_use]
    pub const fn is_backward(&self) -> bool {
        matches!(self.direction, Direction::Backward)
    }

    /// Column name of the cursor field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field.name()
    }

    /// The resolved cursor field.
    #[must_use]
    pub const fn descriptor(&self) -> &FieldDescriptor {
        &self.field
    }

    /// Value kind of the cursor field.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.field.kind()
    }

    /// Boundary value, `None` on the first page.
    #[must_use]
    pub const fn value(&self) -> Option<&CursorValue> {
        self.value.as_ref()
    }

    /// Intrinsic sort order of the cursor field.
    #[must_use]
    pub const fn order(&self) -> SortOrder {
        self.field.order()
    }

    /// Whether the cursor field sorts ascending.
    #[must_use]
    pub const fn is_asc(&self) -> bool {
        matches!(self.field.order(), SortOrder::Asc)
    }

    /// Whether the cursor field sorts descending.
    #[must_use]
    pub const fn is_desc(&self) -> bool {
        matches!(self.field.order(), SortOrder::Desc)
    }

    /// Order rows are fetched in: the field's order going forward, reversed
    /// going backward.
    #[must_use]
    pub const fn effective_order(&self) -> SortOrder {
        match self.direction {
            Direction::Forward => self.field.order(),
            Direction::Backward => self.field.order().reverse(),
        }
    }

    /// The record shape this cursor was built for.
    #[must_use]
    pub const fn shape(&self) -> &'static Shape {
        self.shape
    }
}

/// Decode an id and validate it against a shape.
fn decode(shape: &Shape, id: &str) -> Result<(FieldDescriptor, CursorValue), Error> {
    let decoded = decode_id(id).and_then(|(name, raw)| {
        let field = shape.explicit_field(&name)?;
        let value = CursorValue::parse(&raw, field.kind())?;
        Ok((field, value))
    });
    decoded.inspect_err(|err| {
        tracing::debug!(shape = shape.name(), error = %err, "rejected cursor id");
    })
}
