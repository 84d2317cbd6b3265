//! # sqlchain
//!
//! A chainable builder for PostgreSQL SELECT and INSERT statements.
//!
//! ## Features
//!
//! - **Positional placeholders**: every value is bound as `$1`, `$2`, ... and
//!   kept in order for the driver
//! - **Checked input**: malformed column, table and sort lists are rejected
//!   with a [`BuildError`] before any state changes
//! - **Driver ready**: [`Value`] implements `tokio_postgres::types::ToSql`, so
//!   [`Query::params_ref`] can be passed straight to `client.query(...)`
//! - **Observable**: rendered statements are emitted through `tracing`
//!   (feature `tracing`, on by default)
//!
//! ## SELECT
//!
//! ```ignore
//! use sqlchain::select;
//!
//! let mut q = select(["id", "email"])?;
//! q.from(["users"])?
//!     .and_where("status", "=", "active")
//!     .order_by([("created_at", "desc")])?
//!     .limit(10);
//!
//! assert_eq!(
//!     q.select_statement(),
//!     "SELECT id, email FROM users WHERE status=$1 ORDER BY created_at DESC LIMIT 10;"
//! );
//! let rows = client.query(q.select_statement().as_str(), &q.params_ref()).await?;
//! ```
//!
//! ## INSERT
//!
//! ```ignore
//! use sqlchain::insert;
//!
//! let mut q = insert(["username", "email"]);
//! q.into_table("users")
//!     .values([["alice", "alice@example.com"], ["bob", "bob@example.com"]])?;
//!
//! assert_eq!(
//!     q.insert_statement()?,
//!     "INSERT INTO users (username, email) VALUES ($1, $2), ($3, $4);"
//! );
//! ```

pub mod element;
pub mod error;
pub mod predicate;
pub mod prelude;
pub mod query;
pub mod rows;
pub mod validate;
pub mod value;

#[cfg(feature = "tracing")]
pub mod log;

pub use element::{Element, ListItem, SortItem, WILDCARD, render_list, render_sorted};
pub use error::{BuildError, BuildResult};
pub use predicate::{Conditional, Predicate, PredicateChain};
pub use query::{BuiltQuery, Fetch, Having, Query, StatementKind};
pub use rows::InsertRows;
pub use value::{BoundValues, Value, ValueArg};

#[cfg(feature = "tracing")]
pub use log::SqlLogger;

/// Start a SELECT statement. An empty list selects `*`.
pub fn select<I, E>(columns: I) -> BuildResult<Query>
where
    I: IntoIterator<Item = E>,
    E: Into<Element>,
{
    Query::select(columns)
}

/// Start an INSERT statement with an explicit column list.
///
/// Use [`Query::insert_positional`] to omit the column list.
pub fn insert<I, S>(columns: I) -> Query
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Query::insert(columns)
}
