//! Cursor values and bound query parameters.

use std::collections::BTreeMap;
use std::time::SystemTime;

use chrono::{DateTime, TimeZone, Utc};

use crate::shape::ValueKind;
use crate::Error;

/// Boundary value held by a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CursorValue {
    /// Integer boundary.
    Integer(i64),
    /// Text boundary.
    Text(String),
    /// Timestamp boundary, microsecond precision once encoded.
    Timestamp(DateTime<Utc>),
}

impl CursorValue {
    /// Kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Text(_) => ValueKind::String,
            Self::Timestamp(_) => ValueKind::Timestamp,
        }
    }

    /// String form used inside cursor ids.
    ///
    /// Integers are base-10, text is passed through, timestamps are base-10
    /// microseconds since the Unix epoch.
    #[must_use]
    pub fn to_id_string(&self) -> String {
        match self {
            Self::Integer(i) => i.to_string(),
            Self::Text(s) => s.clone(),
            Self::Timestamp(t) => t.timestamp_micros().to_string(),
        }
    }

    /// Parse the string form of a value of the given kind.
    pub fn parse(raw: &str, kind: ValueKind) -> Result<Self, Error> {
        let invalid = || Error::InvalidValue {
            kind,
            value: raw.to_string(),
        };
        match kind {
            ValueKind::Integer => raw.parse::<i64>().map(Self::Integer).map_err(|_| invalid()),
            ValueKind::String => Ok(Self::Text(raw.to_string())),
            ValueKind::Timestamp => {
                let micros = raw.parse::<i64>().map_err(|_| invalid())?;
                DateTime::from_timestamp_micros(micros)
                    .map(Self::Timestamp)
                    .ok_or_else(invalid)
            },
        }
    }
}

/// Types that can be read as a cursor value.
///
/// Implemented for the integer types that fit in `i64`, strings, chrono
/// `DateTime`s and `SystemTime`. `#[derive(Record)]` calls this for every
/// tagged field.
pub trait IntoCursorValue {
    /// Read `self` as a cursor value.
    fn to_cursor_value(&self) -> CursorValue;
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(
            impl IntoCursorValue for $ty {
                #[inline]
                fn to_cursor_value(&self) -> CursorValue {
                    CursorValue::Integer(i64::from(*self))
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, u8, u16, u32);

impl IntoCursorValue for str {
    fn to_cursor_value(&self) -> CursorValue {
        CursorValue::Text(self.to_string())
    }
}

impl IntoCursorValue for String {
    fn to_cursor_value(&self) -> CursorValue {
        CursorValue::Text(self.clone())
    }
}

impl<Tz: TimeZone> IntoCursorValue for DateTime<Tz> {
    fn to_cursor_value(&self) -> CursorValue {
        CursorValue::Timestamp(self.with_timezone(&Utc))
    }
}

impl IntoCursorValue for SystemTime {
    fn to_cursor_value(&self) -> CursorValue {
        CursorValue::Timestamp(DateTime::<Utc>::from(*self))
    }
}

impl<T: IntoCursorValue + ?Sized> IntoCursorValue for &T {
    fn to_cursor_value(&self) -> CursorValue {
        (**self).to_cursor_value()
    }
}

/// SQL parameter values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Timestamp(DateTime<Utc>),
}

/// Named query parameters, keyed without the placeholder prefix.
pub type Params = BTreeMap<String, Value>;

impl From<CursorValue> for Value {
    fn from(v: CursorValue) -> Self {
        match v {
            CursorValue::Integer(i) => Self::Int(i),
            CursorValue::Text(s) => Self::String(s),
            CursorValue::Timestamp(t) => Self::Timestamp(t),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Timestamp(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from_conversions() {
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from(42i32), Value::Int(42));
        assert_eq!(Value::from(1.5f64), Value::Float(1.5));
        assert_eq!(Value::from("hello"), Value::String("hello".into()));
        assert_eq!(Value::from(String::from("world")), Value::String("world".into()));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(CursorValue::Integer(7)), Value::Int(7));
    }

    #[test]
    fn test_id_string_per_kind() {
        assert_eq!(CursorValue::Integer(-12).to_id_string(), "-12");
        assert_eq!(CursorValue::Text("abc".into()).to_id_string(), "abc");

        let ts = DateTime::from_timestamp_micros(1_664_177_281_445_676).unwrap();
        assert_eq!(
            CursorValue::Timestamp(ts).to_id_string(),
            "1664177281445676"
        );
    }

    #[test]
    fn test_parse_per_kind() {
        assert_eq!(
            CursorValue::parse("42", ValueKind::Integer),
            Ok(CursorValue::Integer(42))
        );
        assert_eq!(
            CursorValue::parse("42", ValueKind::String),
            Ok(CursorValue::Text("42".into()))
        );
        let Ok(CursorValue::Timestamp(ts)) =
            CursorValue::parse("1664177281445676", ValueKind::Timestamp)
        else {
            panic!("expected timestamp");
        };
        assert_eq!(ts.timestamp_micros(), 1_664_177_281_445_676);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(
            CursorValue::parse("12a", ValueKind::Integer),
            Err(Error::InvalidValue {
                kind: ValueKind::Integer,
                value: "12a".into()
            })
        );
        assert!(CursorValue::parse("", ValueKind::Timestamp).is_err());
        assert!(CursorValue::parse("99999999999999999999", ValueKind::Integer).is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range_timestamp() {
        let err = CursorValue::parse(&i64::MAX.to_string(), ValueKind::Timestamp);
        assert!(matches!(err, Err(Error::InvalidValue { .. })));
    }

    #[test]
    fn test_into_cursor_value() {
        assert_eq!(7u8.to_cursor_value(), CursorValue::Integer(7));
        assert_eq!(u32::MAX.to_cursor_value(), CursorValue::Integer(4_294_967_295));
        assert_eq!("x".to_cursor_value(), CursorValue::Text("x".into()));

        let offset = chrono::FixedOffset::east_opt(3600).unwrap();
        let local = offset.timestamp_opt(1_000, 0).unwrap();
        let CursorValue::Timestamp(utc) = local.to_cursor_value() else {
            panic!("expected timestamp");
        };
        assert_eq!(utc.timestamp(), 1_000);

        let st = SystemTime::UNIX_EPOCH + std::time::Duration::from_micros(5);
        let CursorValue::Timestamp(t) = st.to_cursor_value() else {
            panic!("expected timestamp");
        };
        assert_eq!(t.timestamp_micros(), 5);
    }
}
