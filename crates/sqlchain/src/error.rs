//! Error types for sqlchain

use thiserror::Error;

/// Result type alias for builder operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Rejections raised while building a statement.
///
/// Every variant maps to exactly one input rule and carries a fixed message.
/// Errors are raised at the offending call; the query is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    // ==================== SELECT list ====================
    #[error("You can not use * as one of multiple elements")]
    WildcardAmongMany,

    #[error("You can not use empty or nested arrays as select elements")]
    NestedSelectElement,

    #[error("You can not add more than 1 alias to a select element")]
    SelectAliasCount,

    #[error("You can not use * as an alias for a select element")]
    WildcardSelectAlias,

    #[error("You can not use an empty string as a select element")]
    EmptySelectElement,

    #[error("You can not use an empty string as an alias")]
    EmptySelectAlias,

    // ==================== FROM list ====================
    #[error(
        "You can not call from() function more than once, for more table specifications use from(table1, table2...)"
    )]
    FromCalledTwice,

    #[error("You can not use an empty string as a table reference")]
    EmptyTableReference,

    #[error("Invalid table specification")]
    InvalidTableSpecification,

    #[error("You can not specify more than one alias to a table")]
    TableAliasCount,

    #[error("You can not use an empty string as a table alias")]
    EmptyTableAlias,

    #[error("You can not use * as an alias for a table")]
    WildcardTableAlias,

    #[error("You can not use an empty or nested array list as a table reference")]
    NestedTableReference,

    // ==================== GROUP BY / ORDER BY ====================
    #[error("You can not use an empty string as a sort element")]
    EmptySortElement,

    #[error("You can not use empty or nested arrays as sort elements")]
    NestedSortElement,

    #[error("You can not specify more than one direction to a sort element")]
    SortDirectionCount,

    /// Direction was neither `asc` nor `desc`.
    #[error("Invalid sort direction '{0}', expected ASC or DESC")]
    InvalidSortDirection(String),

    // ==================== WHERE ====================
    #[error("You can not call orWhere() before a where() condition")]
    OrWhereWithoutPredicate,

    // ==================== Statement kind ====================
    #[error("from() can only be used on a statement started with select()")]
    NotASelect,

    #[error("values() and insertStatement() can only be used on a statement started with insert()")]
    NotAnInsert,

    // ==================== INSERT ====================
    #[error("Table reference and scalar values are required")]
    MissingInsertTarget,

    #[error("The set of columns must have the same length as the number of scalar values")]
    ColumnValueCountMismatch,

    #[error("You have to insert at least 1 value in all records")]
    AtLeastOneValue,

    #[error("You can not mix scalars and rows within the values() arguments")]
    MixedScalarsAndRows,

    #[error("All scalar sets must have the same number of elements")]
    RowLengthMismatch,

    #[error("You can not insert nested values")]
    NestedValues,
}

impl BuildError {
    /// Create an invalid sort direction error
    pub fn invalid_direction(direction: impl Into<String>) -> Self {
        Self::InvalidSortDirection(direction.into())
    }

    /// Check if this error was raised by the select-list validator
    pub fn is_select_error(&self) -> bool {
        matches!(
            self,
            Self::WildcardAmongMany
                | Self::NestedSelectElement
                | Self::SelectAliasCount
                | Self::WildcardSelectAlias
                | Self::EmptySelectElement
                | Self::EmptySelectAlias
        )
    }

    /// Check if this error was raised by the table-list validator
    pub fn is_table_error(&self) -> bool {
        matches!(
            self,
            Self::FromCalledTwice
                | Self::EmptyTableReference
                | Self::InvalidTableSpecification
                | Self::TableAliasCount
                | Self::EmptyTableAlias
                | Self::WildcardTableAlias
                | Self::NestedTableReference
        )
    }

    /// Check if this error concerns INSERT values
    pub fn is_values_error(&self) -> bool {
        matches!(
            self,
            Self::MissingInsertTarget
                | Self::ColumnValueCountMismatch
                | Self::AtLeastOneValue
                | Self::MixedScalarsAndRows
                | Self::RowLengthMismatch
                | Self::NestedValues
        )
    }
}
