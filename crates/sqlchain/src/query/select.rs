//! SELECT clause renderers and statement assembly.

use super::{BuiltQuery, Fetch, Query};
use crate::element::{render_list, render_sorted};

impl Query {
    /// `SELECT <list>`
    pub fn select_clause(&self) -> String {
        format!("SELECT {}", render_list(&self.columns))
    }

    /// `FROM <list>`, or `None` before `from()` is called.
    pub fn from_clause(&self) -> Option<String> {
        self.tables
            .as_ref()
            .map(|tables| format!("FROM {}", render_list(tables)))
    }

    /// `WHERE ...`, or `None` without predicates.
    ///
    /// Binds one value per predicate, continuing the current placeholder count.
    pub fn where_clause(&mut self) -> Option<String> {
        self.predicates.render(&mut self.bound)
    }

    /// `GROUP BY <list>`, or `None` when unset.
    pub fn group_by_clause(&self) -> Option<String> {
        if self.groups.is_empty() {
            return None;
        }
        Some(format!("GROUP BY {}", render_sorted(&self.groups)))
    }

    /// `HAVING <aggregate><operator>$n`, or `None` when unset.
    ///
    /// Binds the HAVING value.
    pub fn having_clause(&mut self) -> Option<String> {
        let having = self.having.as_ref()?;
        let idx = self.bound.push(having.value.clone());
        Some(format!("HAVING {}{}${}", having.aggregate, having.operator, idx))
    }

    /// `ORDER BY <list>`, or `None` when unset.
    pub fn order_by_clause(&self) -> Option<String> {
        if self.orders.is_empty() {
            return None;
        }
        Some(format!("ORDER BY {}", render_sorted(&self.orders)))
    }

    /// `LIMIT n` / `LIMIT n OFFSET m`, or `None` when unset.
    pub fn limit_clause(&self) -> Option<String> {
        self.fetch.map(|fetch| match fetch {
            Fetch::Count(count) => format!("LIMIT {}", count),
            Fetch::Page { count, offset } => format!("LIMIT {} OFFSET {}", count, offset),
        })
    }

    /// Render the full SELECT statement.
    ///
    /// Bound values are cleared first, so repeated calls return the same SQL
    /// and leave the same values bound. Clauses follow the grammar order
    /// SELECT, FROM, WHERE, GROUP BY, HAVING, ORDER BY, LIMIT.
    pub fn select_statement(&mut self) -> String {
        self.bound.clear();

        let mut sql = self.select_clause();

        if let Some(from) = self.from_clause() {
            sql.push(' ');
            sql.push_str(&from);
        }

        if let Some(filter) = self.where_clause() {
            sql.push(' ');
            sql.push_str(&filter);
        }

        if let Some(group) = self.group_by_clause() {
            sql.push(' ');
            sql.push_str(&group);
        }

        if let Some(having) = self.having_clause() {
            sql.push(' ');
            sql.push_str(&having);
        }

        if let Some(order) = self.order_by_clause() {
            sql.push(' ');
            sql.push_str(&order);
        }

        if let Some(limit) = self.limit_clause() {
            sql.push(' ');
            sql.push_str(&limit);
        }

        sql.push(';');

        self.log_statement(&sql);
        sql
    }

    /// Render the SELECT statement and snapshot its bound values.
    pub fn build_select(&mut self) -> BuiltQuery {
        let sql = self.select_statement();
        BuiltQuery {
            sql,
            params: self.bound.as_slice().to_vec(),
        }
    }
}
