//! The chainable statement builder.
//!
//! A [`Query`] is started with [`Query::select`] or [`Query::insert`], grown
//! with clause methods that take `&mut self` and return the same builder, and
//! rendered with a `*_statement()` call or individual `*_clause()` calls.
//!
//! # Example
//!
//! ```ignore
//! use sqlchain::Query;
//!
//! let mut q = Query::select(["id", "email"])?;
//! q.from(["users"])?
//!     .and_where("status", "=", "active")
//!     .or_where("role", "=", "admin")?;
//!
//! assert_eq!(
//!     q.select_statement(),
//!     "SELECT id, email FROM users WHERE status=$1 OR role=$2;"
//! );
//! ```

mod insert;
mod select;


use crate::element::{Element, ListItem, SortItem, WILDCARD};
use crate::error::{BuildError, BuildResult};
use crate::predicate::{Predicate, PredicateChain};
use crate::rows::InsertRows;
use crate::validate::{self, reject};
use crate::value::{BoundValues, Value, ValueArg};
use tokio_postgres::types::ToSql;

#[cfg(feature = "tracing")]
use crate::log::SqlLogger;

/// Statement kind, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
}

/// Row limit: `LIMIT n` or `LIMIT n OFFSET m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
    Count(u64),
    Page { count: u64, offset: u64 },
}

impl From<u64> for Fetch {
    fn from(count: u64) -> Self {
        Fetch::Count(count)
    }
}

impl From<(u64, u64)> for Fetch {
    fn from((count, offset): (u64, u64)) -> Self {
        Fetch::Page { count, offset }
    }
}

impl From<[u64; 2]> for Fetch {
    fn from([count, offset]: [u64; 2]) -> Self {
        Fetch::Page { count, offset }
    }
}

/// The single HAVING condition: `aggregate<operator>$n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Having {
    pub aggregate: String,
    pub operator: String,
    pub value: Value,
}

/// A rendered statement together with its bound values.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

impl BuiltQuery {
    /// Get parameters as references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(|v| v as &(dyn ToSql + Sync)).collect()
    }
}

/// Accumulated state of one statement under construction.
///
/// The [`StatementKind`] is fixed by the starter. `from()` is rejected on an
/// INSERT, and `values()` / `insert_statement()` are rejected on a SELECT.
/// WHERE, GROUP BY, HAVING, ORDER BY and LIMIT are only rendered by
/// [`Query::select_statement`]; calling that on an INSERT renders the column
/// list as a SELECT list.
#[derive(Debug, Clone)]
pub struct Query {
    kind: StatementKind,
    /// SELECT list, or INSERT column names
    columns: Vec<ListItem>,
    /// FROM list, set at most once
    tables: Option<Vec<ListItem>>,
    /// WHERE conditions
    predicates: PredicateChain,
    /// GROUP BY list
    groups: Vec<SortItem>,
    /// HAVING condition
    having: Option<Having>,
    /// ORDER BY list
    orders: Vec<SortItem>,
    /// LIMIT / OFFSET
    fetch: Option<Fetch>,
    /// INSERT target
    table: Option<String>,
    /// INSERT values
    rows: Option<InsertRows>,
    /// Values bound to `$n`, rebuilt by each statement render
    bound: BoundValues,
    /// Label attached to log events
    tag: Option<String>,
    #[cfg(feature = "tracing")]
    logger: SqlLogger,
}

impl Query {
    fn new(kind: StatementKind, columns: Vec<ListItem>) -> Self {
        Self {
            kind,
            columns,
            tables: None,
            predicates: PredicateChain::new(),
            groups: Vec::new(),
            having: None,
            orders: Vec::new(),
            fetch: None,
            table: None,
            rows: None,
            bound: BoundValues::new(),
            tag: None,
            #[cfg(feature = "tracing")]
            logger: SqlLogger::default(),
        }
    }

    // ==================== Statement starters ====================

    /// Start a SELECT statement.
    ///
    /// An empty column list selects `*`.
    pub fn select<I, E>(columns: I) -> BuildResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        let raw: Vec<Element> = columns.into_iter().map(Into::into).collect();
        let columns = if raw.is_empty() {
            vec![ListItem::new(WILDCARD)]
        } else {
            validate::select_list(&raw)?
        };
        Ok(Self::new(StatementKind::Select, columns))
    }

    /// Start `SELECT *`.
    pub fn select_all() -> Self {
        Self::new(StatementKind::Select, vec![ListItem::new(WILDCARD)])
    }

    /// Start an INSERT statement with an explicit column list.
    pub fn insert<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = columns.into_iter().map(ListItem::new).collect();
        Self::new(StatementKind::Insert, columns)
    }

    /// Start an INSERT statement without a column list.
    pub fn insert_positional() -> Self {
        Self::new(StatementKind::Insert, Vec::new())
    }

    // ==================== FROM ====================

    /// Set the FROM list. Can only be called once per query.
    ///
    /// Pass every table to a single call: `from(["a", "b"])`.
    pub fn from<I, E>(&mut self, tables: I) -> BuildResult<&mut Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        if self.kind != StatementKind::Select {
            return Err(reject("from", BuildError::NotASelect));
        }
        if self.tables.is_some() {
            return Err(reject("from", BuildError::FromCalledTwice));
        }
        let raw: Vec<Element> = tables.into_iter().map(Into::into).collect();
        self.tables = Some(validate::table_list(&raw)?);
        Ok(self)
    }

    // ==================== WHERE ====================

    /// Add a predicate joined with AND: `column<operator>$n`.
    pub fn and_where(
        &mut self,
        column: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.predicates.and(Predicate::new(column, operator, value));
        self
    }

    /// Add a predicate joined with OR. Requires an earlier predicate.
    pub fn or_where(
        &mut self,
        column: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<Value>,
    ) -> BuildResult<&mut Self> {
        self.predicates
            .or(Predicate::new(column, operator, value))
            .map_err(|err| reject("where", err))?;
        Ok(self)
    }

    // ==================== GROUP BY / HAVING ====================

    /// Replace the GROUP BY list. Entries are `name` or `(name, direction)`.
    pub fn group_by<I, E>(&mut self, groups: I) -> BuildResult<&mut Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        let raw: Vec<Element> = groups.into_iter().map(Into::into).collect();
        self.groups = validate::sort_list(&raw)?;
        Ok(self)
    }

    /// Set the HAVING condition, replacing any earlier one.
    pub fn having(
        &mut self,
        aggregate: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.having = Some(Having {
            aggregate: aggregate.into(),
            operator: operator.into(),
            value: value.into(),
        });
        self
    }

    // ==================== ORDER BY / LIMIT ====================

    /// Append to the ORDER BY list. Entries are `name` or `(name, direction)`.
    pub fn order_by<I, E>(&mut self, orders: I) -> BuildResult<&mut Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        let raw: Vec<Element> = orders.into_iter().map(Into::into).collect();
        let items = validate::sort_list(&raw)?;
        self.orders.extend(items);
        Ok(self)
    }

    /// Append `column ASC` to the ORDER BY list.
    pub fn order_by_asc(&mut self, column: impl Into<String>) -> &mut Self {
        self.orders.push(SortItem::directed(column, "ASC"));
        self
    }

    /// Append `column DESC` to the ORDER BY list.
    pub fn order_by_desc(&mut self, column: impl Into<String>) -> &mut Self {
        self.orders.push(SortItem::directed(column, "DESC"));
        self
    }

    /// Set `LIMIT count`.
    pub fn limit(&mut self, count: u64) -> &mut Self {
        self.fetch(Fetch::Count(count))
    }

    /// Set `LIMIT count OFFSET offset`.
    pub fn limit_offset(&mut self, count: u64, offset: u64) -> &mut Self {
        self.fetch(Fetch::Page { count, offset })
    }

    /// Set the row limit from either form.
    pub fn fetch(&mut self, fetch: impl Into<Fetch>) -> &mut Self {
        self.fetch = Some(fetch.into());
        self
    }

    // ==================== INSERT ====================

    /// Set the INSERT target table.
    pub fn into_table(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = Some(table.into());
        self
    }

    /// Set the INSERT values: all scalars (one row) or all lists (many rows).
    ///
    /// # Example
    /// ```ignore
    /// q.values(["a", "b"])?;                      // ($1, $2)
    /// q.values([["a", "b"], ["c", "d"]])?;        // ($1, $2), ($3, $4)
    /// ```
    pub fn values<I, V>(&mut self, values: I) -> BuildResult<&mut Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<ValueArg>,
    {
        if self.kind != StatementKind::Insert {
            return Err(reject("values", BuildError::NotAnInsert));
        }
        let args: Vec<ValueArg> = values.into_iter().map(Into::into).collect();
        let column_count = (!self.columns.is_empty()).then_some(self.columns.len());
        let rows = InsertRows::parse(args, column_count).map_err(|err| reject("values", err))?;
        self.rows = Some(rows);
        Ok(self)
    }

    // ==================== Observability ====================

    /// Associate a tag with log events for this query.
    pub fn tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tag = Some(tag.into());
        self
    }

    /// Replace the logger configuration used when statements are rendered.
    #[cfg(feature = "tracing")]
    pub fn logger(&mut self, logger: SqlLogger) -> &mut Self {
        self.logger = logger;
        self
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn log_statement(&self, sql: &str) {
        #[cfg(feature = "tracing")]
        self.logger
            .statement(self.kind, self.tag.as_deref(), sql, self.bound.len());
    }

    // ==================== Accessors ====================

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn columns(&self) -> &[ListItem] {
        &self.columns
    }

    pub fn tables(&self) -> Option<&[ListItem]> {
        self.tables.as_deref()
    }

    pub fn predicates(&self) -> &PredicateChain {
        &self.predicates
    }

    pub fn groups(&self) -> &[SortItem] {
        &self.groups
    }

    pub fn having_condition(&self) -> Option<&Having> {
        self.having.as_ref()
    }

    pub fn orders(&self) -> &[SortItem] {
        &self.orders
    }

    pub fn fetch_limit(&self) -> Option<Fetch> {
        self.fetch
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn rows(&self) -> Option<&InsertRows> {
        self.rows.as_ref()
    }

    /// Values bound by the renders performed so far, in placeholder order.
    pub fn bound_values(&self) -> &[Value] {
        self.bound.as_slice()
    }

    /// Bound values as references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.bound.as_refs()
    }

    pub fn tag_name(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}
