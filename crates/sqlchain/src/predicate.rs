//! WHERE predicate chain with fixed pairwise grouping.
//!
//! A [`PredicateChain`] holds `(column, operator, value)` triples and the
//! joiners between them. It only grows through [`PredicateChain::and`] and
//! [`PredicateChain::or`], which keeps `conditionals.len() == predicates.len() - 1`.
//!
//! Rendering allocates placeholders left to right, continuing from whatever is
//! already bound. With three or more predicates, neighbours are grouped in
//! pairs: `(p0 J p1) J (p2 J p3) J p4`. The grouping is structural and does
//! not follow operator precedence.

use crate::error::{BuildError, BuildResult};
use crate::value::{BoundValues, Value};
use std::fmt;

/// Joiner between two adjacent predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conditional {
    And,
    Or,
}

impl Conditional {
    pub fn as_str(&self) -> &'static str {
        match self {
            Conditional::And => "AND",
            Conditional::Or => "OR",
        }
    }
}

impl fmt::Display for Conditional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single comparison: `column<operator>$n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: String,
    pub operator: String,
    pub value: Value,
}

impl Predicate {
    pub fn new(column: impl Into<String>, operator: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

/// Ordered predicates and the joiners between them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredicateChain {
    predicates: Vec<Predicate>,
    conditionals: Vec<Conditional>,
}

impl PredicateChain {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
            conditionals: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn conditionals(&self) -> &[Conditional] {
        &self.conditionals
    }

    /// Append a predicate joined with AND (no joiner for the first one).
    pub fn and(&mut self, predicate: Predicate) {
        if !self.predicates.is_empty() {
            self.conditionals.push(Conditional::And);
        }
        self.predicates.push(predicate);
    }

    /// Append a predicate joined with OR.
    ///
    /// Fails on an empty chain, since there is nothing to join to.
    pub fn or(&mut self, predicate: Predicate) -> BuildResult<()> {
        if self.predicates.is_empty() {
            return Err(BuildError::OrWhereWithoutPredicate);
        }
        self.conditionals.push(Conditional::Or);
        self.predicates.push(predicate);
        Ok(())
    }

    /// Render `WHERE ...`, binding each predicate value into `bound`.
    ///
    /// Returns `None` for an empty chain, in which case nothing is bound.
    pub fn render(&self, bound: &mut BoundValues) -> Option<String> {
        let n = self.predicates.len();
        if n == 0 {
            return None;
        }

        let paired = n >= 3;
        let mut joiners = self.conditionals.iter();
        let mut sql = String::from("WHERE ");

        for (i, predicate) in self.predicates.iter().enumerate() {
            if i > 0 {
                if let Some(joiner) = joiners.next() {
                    sql.push(' ');
                    sql.push_str(joiner.as_str());
                    sql.push(' ');
                }
            }

            if paired && i % 2 == 0 && i + 1 < n {
                sql.push('(');
            }

            let idx = bound.push(predicate.value.clone());
            sql.push_str(&format!("{}{}${}", predicate.column, predicate.operator, idx));

            if paired && i % 2 == 1 {
                sql.push(')');
            }
        }

        Some(sql)
    }
}
