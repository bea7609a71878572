//! SQL clause generation for keyset pagination.

use crate::dialect::{Backend, Dialect, Spanner, Sqlite};
use crate::pagination::Cursor;
use crate::shape::SortOrder;
use crate::value::{Params, Value};

/// Comparison used to seek past the boundary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Greater than: `>`
    Gt,
    /// Less than: `<`
    Lt,
}

impl Operator {
    /// SQL token.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Lt => "<",
        }
    }

    /// Operator that continues in the given fetch order.
    const fn seeking(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Self::Gt,
            SortOrder::Desc => Self::Lt,
        }
    }
}

/// The clauses rendered for one cursor.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "fragment must be merged into a query"]
pub struct SqlFragment {
    /// `field > @field` style comparison, absent on the first page.
    pub condition: Option<String>,
    /// `ORDER BY field ASC|DESC`
    pub order: String,
    /// `LIMIT n` with `n = limit + 1`.
    pub limit: String,
    /// The bound cursor value, keyed by field name.
    pub params: Params,
}

/// Render the keyset clauses for a cursor.
///
/// Forward over an ascending field seeks with `>` and orders `ASC`; a
/// descending field flips both, and so does paging backward.
pub fn fragment<D: Dialect>(cursor: &Cursor, dialect: D) -> SqlFragment {
    let field = cursor.field();
    let order = cursor.effective_order();

    let mut params = Params::new();
    let condition = cursor.value().map(|value| {
        params.insert(field.to_string(), Value::from(value.clone()));
        format!(
            "{field} {} {}",
            Operator::seeking(order).as_sql(),
            dialect.placeholder(field)
        )
    });

    SqlFragment {
        condition,
        order: format!("ORDER BY {field} {}", order.as_sql()),
        limit: dialect.limit_clause(u64::from(cursor.limit()) + 1),
        params,
    }
}

/// Query result with SQL string and named parameters.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "QueryResult must be used to execute the query"]
pub struct QueryResult {
    /// The generated SQL string.
    pub sql: String,
    /// Caller parameters merged with the cursor parameter.
    pub params: Params,
}

/// Merges a cursor's clauses into a caller-supplied base query.
///
/// ```
/// use keyset_cursor::{Backend, Cursor, Record, Value};
///
/// #[derive(Record)]
/// struct Object {
///     #[cursor(default, rename = "CreatedAt")]
///     created_at: chrono::DateTime<chrono::Utc>,
/// }
///
/// let cursor = Cursor::first_page::<Object>()?;
/// let query = cursor
///     .builder(Backend::Spanner)
///     .with_sql("SELECT * FROM Objects WHERE Kind = @Kind")
///     .with_param("Kind", 1)
///     .to_sql();
///
/// assert_eq!(
///     query.sql,
///     "SELECT * FROM Objects WHERE Kind = @Kind ORDER BY CreatedAt ASC LIMIT 21"
/// );
/// assert_eq!(query.params.get("Kind"), Some(&Value::Int(1)));
/// # Ok::<(), keyset_cursor::Error>(())
/// ```
#[derive(Debug, Clone)]
#[must_use = "builder does nothing until .to_sql() is called"]
pub struct SqlBuilder<'c> {
    cursor: &'c Cursor,
    backend: Backend,
    sql: String,
    params: Params,
}

impl<'c> SqlBuilder<'c> {
    /// Create a builder with an empty base query.
    pub fn new(cursor: &'c Cursor, backend: Backend) -> Self {
        Self {
            cursor,
            backend,
            sql: String::new(),
            params: Params::new(),
        }
    }

    /// Set the base query the clauses are appended to.
    pub fn with_sql(mut self, sql: impl Into<String>) -> Self {
        self.sql = sql.into();
        self
    }

    /// Replace the caller parameters.
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Add one caller parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Render the cursor clauses without merging them.
    pub fn fragment(&self) -> SqlFragment {
        match self.backend {
            Backend::Spanner => fragment(self.cursor, Spanner),
            Backend::Sqlite => fragment(self.cursor, Sqlite),
        }
    }

    /// Build the final query.
    ///
    /// The condition is joined with `AND` if the base query already has a
    /// `WHERE` clause, otherwise it introduces one. Caller parameters are
    /// merged first; the cursor parameter wins on a name clash.
    pub fn to_sql(self) -> QueryResult {
        let fragment = self.fragment();
        let mut sql = self.sql.trim_end().to_string();

        if let Some(condition) = &fragment.condition {
            let keyword = if has_where(&sql) { "AND" } else { "WHERE" };
            push_clause(&mut sql, keyword);
            sql.push(' ');
            sql.push_str(condition);
        }
        push_clause(&mut sql, &fragment.order);
        push_clause(&mut sql, &fragment.limit);

        let mut params = self.params;
        params.extend(fragment.params);

        tracing::trace!(backend = %self.backend, sql = %sql, "built keyset query");
        QueryResult { sql, params }
    }
}

fn push_clause(sql: &mut String, clause: &str) {
    if !sql.is_empty() {
        sql.push(' ');
    }
    sql.push_str(clause);
}

/// Whether the query contains a standalone `WHERE` keyword.
fn has_where(sql: &str) -> bool {
    sql.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .any(|word| word.eq_ignore_ascii_case("WHERE"))
}
