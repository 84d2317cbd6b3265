//! `tracing` output for rendered statements.
//!
//! Enable via the crate feature: `sqlchain = { features = ["tracing"] }` (on by
//! default). Every full-statement render emits one event on target
//! `sqlchain.sql`; rejected clause input is logged at DEBUG on
//! `sqlchain.validate`.

use crate::query::StatementKind;
use tracing::Level;

/// Logger configuration for rendered SQL.
///
/// # Example
/// ```ignore
/// use sqlchain::{Query, SqlLogger};
/// use tracing::Level;
///
/// let mut q = Query::select(["id"])?;
/// q.logger(SqlLogger::new().level(Level::INFO).max_sql_length(80));
/// ```
#[derive(Debug, Clone)]
pub struct SqlLogger {
    /// Tracing event level to emit at.
    pub level: Level,
    /// Truncate long SQL strings (in bytes, on a char boundary). `None` means no truncation.
    pub max_sql_length: Option<usize>,
}

impl Default for SqlLogger {
    fn default() -> Self {
        Self {
            level: Level::DEBUG,
            max_sql_length: Some(200),
        }
    }
}

impl SqlLogger {
    /// Create a new logger with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tracing event level.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set maximum SQL length to display.
    pub fn max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    pub(crate) fn truncate_sql(&self, sql: &str) -> String {
        match self.max_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
            _ => sql.to_string(),
        }
    }

    /// Emit one event for a rendered statement.
    pub(crate) fn statement(
        &self,
        kind: StatementKind,
        tag: Option<&str>,
        sql: &str,
        param_count: usize,
    ) {
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    Level::ERROR => tracing::error!($($field)*),
                    Level::WARN  => tracing::warn!($($field)*),
                    Level::INFO  => tracing::info!($($field)*),
                    Level::DEBUG => tracing::debug!($($field)*),
                    Level::TRACE => tracing::trace!($($field)*),
                }
            };
        }

        let sql = self.truncate_sql(sql);
        let tag = tag.unwrap_or("-");
        emit_at_level!(
            self.level,
            target: "sqlchain.sql",
            kind = ?kind,
            tag,
            param_count,
            sql = %sql,
        );
    }
}

pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
