//! Record shapes: which fields a record exposes for pagination.
//!
//! A shape is an ordered, `'static` list of field definitions. It is usually
//! generated by `#[derive(Record)]`, but can be written by hand:
//!
//! ```
//! use keyset_cursor::{CursorTag, FieldDef, FieldType, Shape, ValueKind};
//!
//! static OBJECT: Shape = Shape::new(
//!     "Object",
//!     &[
//!         FieldDef::new("ID", FieldType::String, Some(CursorTag::SELECTABLE)),
//!         FieldDef::new("CreatedAt", FieldType::Timestamp, Some(CursorTag::DEFAULT.desc())),
//!         FieldDef::new("Kind", FieldType::Integer, None),
//!     ],
//! );
//!
//! let field = OBJECT.resolve("").unwrap();
//! assert_eq!(field.name(), "CreatedAt");
//! assert_eq!(field.kind(), ValueKind::Timestamp);
//! ```

use crate::{CursorValue, Error};

/// Kind of value a cursor field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Signed 64-bit integer.
    Integer,
    /// Text.
    String,
    /// Absolute point in time, microsecond precision.
    Timestamp,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Integer => "integer",
            Self::String => "string",
            Self::Timestamp => "timestamp",
        })
    }
}

/// Intrinsic sort order of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Ascending: `ASC`
    #[default]
    Asc,
    /// Descending: `DESC`
    Desc,
}

impl SortOrder {
    /// SQL keyword for this order.
    #[inline]
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// The opposite order.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Declared type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Any integral type that fits in `i64`.
    Integer,
    /// Text.
    String,
    /// A timestamp type.
    Timestamp,
    /// Any other type, by name. Cannot be used as a cursor.
    Other(&'static str),
}

impl FieldType {
    /// Classify into a cursor value kind, if supported.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> Option<ValueKind> {
        match self {
            Self::Integer => Some(ValueKind::Integer),
            Self::String => Some(ValueKind::String),
            Self::Timestamp => Some(ValueKind::Timestamp),
            Self::Other(_) => None,
        }
    }

    /// Human-readable type name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
            Self::Timestamp => "timestamp",
            Self::Other(name) => name,
        }
    }
}

/// Pagination marker attached to a field.
///
/// A field without a tag cannot be used as a cursor. A tag with
/// `default: false` lets a cursor id select the field explicitly; exactly one
/// field per shape should carry `default: true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorTag {
    /// Fallback pagination field when no cursor id is given.
    pub default: bool,
    /// Intrinsic sort order of the field.
    pub order: SortOrder,
}

impl CursorTag {
    /// Selectable, not default, ascending.
    pub const SELECTABLE: Self = Self::new(false, SortOrder::Asc);
    /// Default pagination field, ascending.
    pub const DEFAULT: Self = Self::new(true, SortOrder::Asc);

    /// Create a tag.
    #[must_use]
    pub const fn new(default: bool, order: SortOrder) -> Self {
        Self { default, order }
    }

    /// Mark the field as sorted descending.
    #[must_use]
    pub const fn desc(self) -> Self {
        Self::new(self.default, SortOrder::Desc)
    }
}

/// One field of a record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Column name, as used in SQL and in cursor ids.
    pub name: &'static str,
    /// Declared type.
    pub ty: FieldType,
    /// Pagination marker, `None` if the field is not a cursor candidate.
    pub tag: Option<CursorTag>,
}

impl FieldDef {
    /// Create a field definition.
    #[must_use]
    pub const fn new(name: &'static str, ty: FieldType, tag: Option<CursorTag>) -> Self {
        Self { name, ty, tag }
    }

    fn descriptor(&self) -> Result<FieldDescriptor, Error> {
        let tag = self.tag.ok_or_else(|| Error::UnsupportedCursorField {
            field: self.name.to_string(),
        })?;
        let kind = self.ty.kind().ok_or(Error::UnsupportedFieldType {
            field: self.name,
            type_name: self.ty.name(),
        })?;
        Ok(FieldDescriptor {
            name: self.name,
            kind,
            is_default: tag.default,
            order: tag.order,
        })
    }
}

/// Ordered field list of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    name: &'static str,
    fields: &'static [FieldDef],
}

impl Shape {
    /// Create a shape from a static field list.
    #[must_use]
    pub const fn new(name: &'static str, fields: &'static [FieldDef]) -> Self {
        Self { name, fields }
    }

    /// Record type name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// All fields in declaration order.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldDef] {
        self.fields
    }

    /// Look up a field by column name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Resolve the pagination field.
    ///
    /// An empty `name` selects the field tagged `default`. Otherwise the named
    /// field must exist and carry a cursor tag.
    pub fn resolve(&self, name: &str) -> Result<FieldDescriptor, Error> {
        if name.is_empty() {
            self.default_field()
        } else {
            self.explicit_field(name)
        }
    }

    /// Resolve the field tagged `default`.
    pub fn default_field(&self) -> Result<FieldDescriptor, Error> {
        self.fields
            .iter()
            .find(|f| f.tag.is_some_and(|t| t.default))
            .ok_or(Error::MissingDefaultField { shape: self.name })?
            .descriptor()
    }

    /// Resolve an explicitly named field. An empty name never matches.
    pub(crate) fn explicit_field(&self, name: &str) -> Result<FieldDescriptor, Error> {
        self.field(name)
            .ok_or_else(|| Error::UnsupportedCursorField {
                field: name.to_string(),
            })?
            .descriptor()
    }
}

/// A resolved, validated pagination field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: &'static str,
    kind: ValueKind,
    is_default: bool,
    order: SortOrder,
}

impl FieldDescriptor {
    /// Column name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Value kind.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Whether this is the shape's default field.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.is_default
    }

    /// Intrinsic sort order.
    #[must_use]
    pub const fn order(&self) -> SortOrder {
        self.order
    }
}

/// A record type that can be paginated.
///
/// Usually derived:
///
/// ```
/// use keyset_cursor::Record;
///
/// #[derive(Record)]
/// struct Post {
///     #[cursor(default)]
///     id: i64,
///     #[cursor]
///     title: String,
///     body: String,
/// }
///
/// let shape = Post::shape();
/// assert_eq!(shape.resolve("").unwrap().name(), "id");
/// assert!(shape.resolve("body").is_err());
/// ```
pub trait Record {
    /// The record's shape. Must return the same value on every call.
    fn shape() -> &'static Shape;

    /// Value of the named field, or `None` if the field is unknown or not a
    /// cursor candidate.
    fn cursor_value(&self, field: &str) -> Option<CursorValue>;
}

impl<R: Record> Record for &R {
    fn shape() -> &'static Shape {
        R::shape()
    }

    fn cursor_value(&self, field: &str) -> Option<CursorValue> {
        (**self).cursor_value(field)
    }
}
