//! Error type shared by every cursor and builder operation.

use crate::shape::ValueKind;

/// Errors returned by cursor resolution, id decoding and backend selection.
///
/// Every variant is an *invalid argument*: the caller (or the client that sent
/// the cursor id) supplied something the library cannot use. Nothing here is
/// retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The record shape has no field tagged `default`.
    #[error("default field for cursor not found in `{shape}`")]
    MissingDefaultField {
        /// Name of the record shape.
        shape: &'static str,
    },

    /// The field does not exist or carries no cursor tag.
    #[error("not supported cursor field `{field}`")]
    UnsupportedCursorField {
        /// The requested field name.
        field: String,
    },

    /// The field is tagged but its declared type cannot be used as a cursor.
    #[error("not supported cursor type `{type_name}` for field `{field}`")]
    UnsupportedFieldType {
        /// The field name.
        field: &'static str,
        /// The declared type as written on the record.
        type_name: &'static str,
    },

    /// The opaque cursor id is malformed.
    #[error("invalid cursor id: {reason}")]
    InvalidCursorId {
        /// Why the id was rejected.
        reason: InvalidIdReason,
    },

    /// The value inside a well-formed id does not parse for the field's kind.
    #[error("invalid {kind} cursor value `{value}`")]
    InvalidValue {
        /// Kind the value was parsed as.
        kind: ValueKind,
        /// The raw value text.
        value: String,
    },

    /// A direction code other than `0` (forward) or `1` (backward).
    #[error("invalid page direction code {0}")]
    InvalidDirection(u8),

    /// Unknown SQL builder backend kind.
    #[error("unsupported sql builder backend `{0}`")]
    UnsupportedBackend(String),
}

impl Error {
    pub(crate) const fn invalid_id(reason: InvalidIdReason) -> Self {
        Self::InvalidCursorId { reason }
    }

    /// Returns `true` if the error came from a client-supplied cursor id.
    ///
    /// Includes `InvalidCursorId`, `InvalidValue` and `UnsupportedCursorField`
    /// (an id naming a field the record does not expose).
    #[inline]
    #[must_use]
    pub const fn is_cursor_id_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCursorId { .. } | Self::InvalidValue { .. } | Self::UnsupportedCursorField { .. }
        )
    }

    /// Returns `true` if the record shape itself is misconfigured.
    ///
    /// Includes `MissingDefaultField` and `UnsupportedFieldType`.
    #[inline]
    #[must_use]
    pub const fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::MissingDefaultField { .. } | Self::UnsupportedFieldType { .. }
        )
    }
}

/// Why an opaque cursor id was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidIdReason {
    /// The id exceeds the maximum accepted size.
    TooLarge,
    /// Not standard-alphabet base64.
    Base64,
    /// The decoded bytes are not UTF-8.
    Utf8,
    /// The decoded text is not exactly `<field>:<value>`.
    Format,
}

impl std::fmt::Display for InvalidIdReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooLarge => write!(
                f,
                "exceeds maximum size ({}KB limit)",
                crate::pagination::MAX_ID_SIZE / 1024
            ),
            Self::Base64 => write!(f, "failed to decode base64"),
            Self::Utf8 => write!(f, "decoded id is not valid UTF-8"),
            Self::Format => write!(f, "expected `<field>:<value>`"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::invalid_id(InvalidIdReason::Base64);
        assert_eq!(err.to_string(), "invalid cursor id: failed to decode base64");

        let err = Error::InvalidValue {
            kind: ValueKind::Integer,
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid integer cursor value `abc`");

        let err = Error::InvalidDirection(7);
        assert_eq!(err.to_string(), "invalid page direction code 7");
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::invalid_id(InvalidIdReason::Format).is_cursor_id_error());
        assert!(
            Error::UnsupportedCursorField {
                field: "Secret".into()
            }
            .is_cursor_id_error()
        );
        assert!(!Error::UnsupportedBackend("mysql".into()).is_cursor_id_error());

        assert!(Error::MissingDefaultField { shape: "Object" }.is_schema_error());
        assert!(
            Error::UnsupportedFieldType {
                field: "Tags",
                type_name: "Vec<String>"
            }
            .is_schema_error()
        );
        assert!(!Error::InvalidDirection(2).is_schema_error());
    }

    #[test]
    fn test_too_large_message_mentions_limit() {
        let msg = InvalidIdReason::TooLarge.to_string();
        assert!(msg.contains("4KB"));
    }
}
