//! SQL dialects and backend selection.
//!
//! Each dialect handles the placeholder and limit syntax of one database.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// SQL dialect trait for database-specific syntax.
pub trait Dialect: Clone + Copy {
    /// Format a named parameter placeholder (e.g., `@id` for Spanner).
    fn placeholder(&self, name: &str) -> String;

    /// Format the LIMIT clause.
    fn limit_clause(&self, limit: u64) -> String {
        format!("LIMIT {limit}")
    }
}

/// Cloud Spanner (GoogleSQL) dialect.
#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct Spanner;

impl Dialect for Spanner {
    #[inline]
    fn placeholder(&self, name: &str) -> String {
        format!("@{name}")
    }
}

/// `SQLite` dialect.
#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct Sqlite;

impl Dialect for Sqlite {
    #[inline]
    fn placeholder(&self, name: &str) -> String {
        format!(":{name}")
    }
}

/// SQL builder backend kind.
///
/// Codes start at `1`, and `0` is deliberately unassigned:
///
/// ```
/// use keyset_cursor::{Backend, Error};
///
/// assert_eq!(Backend::try_from(1), Ok(Backend::Spanner));
/// assert_eq!("sqlite".parse::<Backend>(), Ok(Backend::Sqlite));
/// assert!(matches!(Backend::try_from(0), Err(Error::UnsupportedBackend(_))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Backend {
    /// Cloud Spanner, `@name` placeholders.
    Spanner,
    /// `SQLite`, `:name` placeholders.
    Sqlite,
}

impl Backend {
    /// Numeric backend code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Spanner => 1,
            Self::Sqlite => 2,
        }
    }

    /// Lowercase backend name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spanner => "spanner",
            Self::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Backend {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Error> {
        match code {
            1 => Ok(Self::Spanner),
            2 => Ok(Self::Sqlite),
            other => Err(Error::UnsupportedBackend(other.to_string())),
        }
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        if s.eq_ignore_ascii_case("spanner") {
            Ok(Self::Spanner)
        } else if s.eq_ignore_ascii_case("sqlite") {
            Ok(Self::Sqlite)
        } else {
            Err(Error::UnsupportedBackend(s.to_string()))
        }
    }
}
