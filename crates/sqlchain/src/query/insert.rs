//! INSERT clause renderers and statement assembly.

use super::{BuiltQuery, Query, StatementKind};
use crate::element::render_list;
use crate::error::{BuildError, BuildResult};
use crate::validate::reject;

impl Query {
    /// `($1, $2), ($3, $4)`, or `None` before `values()` is called.
    ///
    /// Binds every stored value, continuing the current placeholder count.
    pub fn values_clause(&mut self) -> Option<String> {
        let rows = self.rows.as_ref()?;
        Some(rows.render(&mut self.bound))
    }

    /// Render the full INSERT statement.
    ///
    /// Requires both a target table and values. Bound values are cleared
    /// first, as with [`Query::select_statement`].
    pub fn insert_statement(&mut self) -> BuildResult<String> {
        if self.kind != StatementKind::Insert {
            return Err(reject("insert", BuildError::NotAnInsert));
        }
        let (Some(table), Some(rows)) = (self.table.as_ref(), self.rows.as_ref()) else {
            return Err(reject("insert", BuildError::MissingInsertTarget));
        };

        self.bound.clear();

        let mut sql = format!("INSERT INTO {}", table);

        if !self.columns.is_empty() {
            sql.push_str(&format!(" ({})", render_list(&self.columns)));
        }

        sql.push_str(" VALUES ");
        sql.push_str(&rows.render(&mut self.bound));
        sql.push(';');

        self.log_statement(&sql);
        Ok(sql)
    }

    /// Render the INSERT statement and snapshot its bound values.
    pub fn build_insert(&mut self) -> BuildResult<BuiltQuery> {
        let sql = self.insert_statement()?;
        Ok(BuiltQuery {
            sql,
            params: self.bound.as_slice().to_vec(),
        })
    }
}
