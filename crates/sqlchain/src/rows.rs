//! INSERT value rows.
//!
//! `values("a", "b")` stores one implicit row; `values(["a", "b"], ["c", "d"])`
//! stores explicit rows. Placeholders are numbered across the row-major
//! flattening: `($1, $2), ($3, $4)`.

use crate::error::{BuildError, BuildResult};
use crate::value::{BoundValues, Value, ValueArg};

/// Validated INSERT values.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertRows {
    /// A flat list of scalars forming one row.
    Single(Vec<Value>),
    /// Rows of equal length.
    Multi(Vec<Vec<Value>>),
}

impl InsertRows {
    /// Classify and validate raw `values()` arguments.
    ///
    /// Checked in order: nesting, scalar/row mixing, emptiness, row length
    /// uniformity, and (when `column_count` is given) row length against the
    /// column count.
    pub fn parse(args: Vec<ValueArg>, column_count: Option<usize>) -> BuildResult<Self> {
        let nested = args.iter().any(|arg| match arg {
            ValueArg::List(items) => items.iter().any(|v| matches!(v, ValueArg::List(_))),
            ValueArg::Scalar(_) => false,
        });
        if nested {
            return Err(BuildError::NestedValues);
        }

        let row_count = args
            .iter()
            .filter(|arg| matches!(arg, ValueArg::List(_)))
            .count();
        if row_count > 0 && row_count < args.len() {
            return Err(BuildError::MixedScalarsAndRows);
        }

        let rows = if row_count == 0 {
            let values: Vec<Value> = args.into_iter().filter_map(scalar).collect();
            InsertRows::Single(values)
        } else {
            let rows: Vec<Vec<Value>> = args
                .into_iter()
                .map(|arg| match arg {
                    ValueArg::List(items) => items.into_iter().filter_map(scalar).collect(),
                    ValueArg::Scalar(_) => Vec::new(),
                })
                .collect();
            InsertRows::Multi(rows)
        };

        if rows.rows().is_empty() || rows.rows().iter().any(|row| row.is_empty()) {
            return Err(BuildError::AtLeastOneValue);
        }

        let width = rows.width();
        if rows.rows().iter().any(|row| row.len() != width) {
            return Err(BuildError::RowLengthMismatch);
        }

        if let Some(count) = column_count {
            if count > 0 && count != width {
                return Err(BuildError::ColumnValueCountMismatch);
            }
        }

        Ok(rows)
    }

    /// All rows; a single row is returned as a one-element list.
    pub fn rows(&self) -> Vec<&[Value]> {
        match self {
            InsertRows::Single(values) if values.is_empty() => Vec::new(),
            InsertRows::Single(values) => vec![values.as_slice()],
            InsertRows::Multi(rows) => rows.iter().map(Vec::as_slice).collect(),
        }
    }

    /// Number of values per row.
    pub fn width(&self) -> usize {
        match self {
            InsertRows::Single(values) => values.len(),
            InsertRows::Multi(rows) => rows.first().map_or(0, Vec::len),
        }
    }

    /// Render `($k, ...), ($m, ...)`, binding every value into `bound`.
    pub fn render(&self, bound: &mut BoundValues) -> String {
        let mut groups = Vec::new();
        for row in self.rows() {
            let mut placeholders = Vec::with_capacity(row.len());
            for value in row {
                let idx = bound.push(value.clone());
                placeholders.push(format!("${}", idx));
            }
            groups.push(format!("({})", placeholders.join(", ")));
        }
        groups.join(", ")
    }
}

fn scalar(arg: ValueArg) -> Option<Value> {
    match arg {
        ValueArg::Scalar(value) => Some(value),
        ValueArg::List(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: Vec<ValueArg>) -> Vec<ValueArg> {
        items
    }

    #[test]
    fn test_single_row() {
        let rows = InsertRows::parse(args(vec!["a".into(), "b".into()]), None).unwrap();
        assert_eq!(
            rows,
            InsertRows::Single(vec![Value::from("a"), Value::from("b")])
        );

        let mut bound = BoundValues::new();
        assert_eq!(rows.render(&mut bound), "($1, $2)");
        assert_eq!(bound.as_slice(), &[Value::from("a"), Value::from("b")]);
    }

    #[test]
    fn test_multiple_rows() {
        let rows = InsertRows::parse(
            args(vec![["a", "b"].into(), ["c", "d"].into(), ["e", "f"].into()]),
            None,
        )
        .unwrap();
        assert_eq!(rows.rows().len(), 3);
        assert_eq!(rows.width(), 2);

        let mut bound = BoundValues::new();
        assert_eq!(rows.render(&mut bound), "($1, $2), ($3, $4), ($5, $6)");
        assert_eq!(
            bound.as_slice(),
            &["a", "b", "c", "d", "e", "f"].map(Value::from)
        );
    }

    #[test]
    fn test_placeholders_continue_after_bound_values() {
        let rows = InsertRows::parse(args(vec![[1, 2].into(), [3, 4].into()]), None).unwrap();
        let mut bound = BoundValues::new();
        bound.push(Value::Null);
        assert_eq!(rows.render(&mut bound), "($2, $3), ($4, $5)");
    }

    #[test]
    fn test_rejects_no_values() {
        assert_eq!(InsertRows::parse(Vec::new(), None), Err(BuildError::AtLeastOneValue));
        assert_eq!(
            InsertRows::parse(
                args(vec![["one"].into(), Vec::<&str>::new().into(), Vec::<&str>::new().into()]),
                None
            ),
            Err(BuildError::AtLeastOneValue)
        );
    }

    #[test]
    fn test_rejects_mixed_scalars_and_rows() {
        assert_eq!(
            InsertRows::parse(args(vec!["one".into(), ["two"].into()]), None),
            Err(BuildError::MixedScalarsAndRows)
        );
    }

    #[test]
    fn test_rejects_uneven_rows() {
        assert_eq!(
            InsertRows::parse(args(vec![["one"].into(), ["one", "two"].into()]), None),
            Err(BuildError::RowLengthMismatch)
        );
        assert_eq!(
            InsertRows::parse(
                args(vec![
                    ["one", "two", "three"].into(),
                    ["one"].into(),
                    ["one", "two"].into(),
                ]),
                None
            ),
            Err(BuildError::RowLengthMismatch)
        );
    }

    #[test]
    fn test_rejects_nested_values() {
        let nested = ValueArg::from(vec![ValueArg::from(["one", "two"]), ValueArg::from(["three", "four"])]);
        assert_eq!(
            InsertRows::parse(args(vec![["one"].into(), nested]), None),
            Err(BuildError::NestedValues)
        );
    }

    #[test]
    fn test_column_count_must_match_row_width() {
        assert_eq!(
            InsertRows::parse(args(vec!["one".into()]), Some(2)),
            Err(BuildError::ColumnValueCountMismatch)
        );
        assert_eq!(
            InsertRows::parse(args(vec!["one".into(), "two".into(), "three".into()]), Some(2)),
            Err(BuildError::ColumnValueCountMismatch)
        );
        assert_eq!(
            InsertRows::parse(args(vec![[1, 2, 3].into(), [4, 5, 6].into()]), Some(2)),
            Err(BuildError::ColumnValueCountMismatch)
        );
        assert!(InsertRows::parse(args(vec![[1, 2].into(), [3, 4].into()]), Some(2)).is_ok());
        assert!(InsertRows::parse(args(vec!["one".into()]), Some(0)).is_ok());
    }
}
