//! Input grammar checks for the SELECT list, FROM list and sort lists.
//!
//! Each validator walks the raw elements in order and either returns the
//! complete validated list or the first rule violation. Nothing is stored
//! until a validator succeeds, so a rejected call never leaves partial state.

use crate::element::{Element, ListItem, Shape, SortItem, WILDCARD};
use crate::error::{BuildError, BuildResult};

/// Validate a SELECT list.
///
/// - `*` is only allowed as the sole element (bare or wrapped)
/// - lists hold a name and at most one alias
/// - names and aliases are non-empty; aliases are never `*`
pub fn select_list(columns: &[Element]) -> BuildResult<Vec<ListItem>> {
    columns
        .iter()
        .map(|column| select_item(column, columns.len()))
        .collect::<BuildResult<Vec<_>>>()
        .map_err(|err| reject("select", err))
}

fn select_item(column: &Element, total: usize) -> BuildResult<ListItem> {
    let item = match column.shape() {
        Shape::Bare(name) | Shape::Wrapped(name) => {
            if name.is_empty() {
                return Err(BuildError::EmptySelectElement);
            }
            ListItem::new(name)
        }
        Shape::Pair(name, alias) => {
            if alias == WILDCARD {
                return Err(BuildError::WildcardSelectAlias);
            }
            if name.is_empty() {
                return Err(BuildError::EmptySelectElement);
            }
            if alias.is_empty() {
                return Err(BuildError::EmptySelectAlias);
            }
            ListItem::aliased(name, alias)
        }
        Shape::Empty | Shape::Nested => return Err(BuildError::NestedSelectElement),
        Shape::TooMany => return Err(BuildError::SelectAliasCount),
    };

    if item.is_wildcard() && total > 1 {
        return Err(BuildError::WildcardAmongMany);
    }
    Ok(item)
}

/// Validate a FROM list.
///
/// At least one table is required; `*` is never a table or an alias.
pub fn table_list(tables: &[Element]) -> BuildResult<Vec<ListItem>> {
    if tables.is_empty() {
        return Err(reject("from", BuildError::EmptyTableReference));
    }

    tables
        .iter()
        .map(table_item)
        .collect::<BuildResult<Vec<_>>>()
        .map_err(|err| reject("from", err))
}

fn table_item(table: &Element) -> BuildResult<ListItem> {
    match table.shape() {
        Shape::Bare(name) | Shape::Wrapped(name) => {
            if name.is_empty() {
                return Err(BuildError::EmptyTableReference);
            }
            if name == WILDCARD {
                return Err(BuildError::InvalidTableSpecification);
            }
            Ok(ListItem::new(name))
        }
        Shape::Pair(name, alias) => {
            if name.is_empty() {
                return Err(BuildError::EmptyTableReference);
            }
            if alias.is_empty() {
                return Err(BuildError::EmptyTableAlias);
            }
            if name == WILDCARD {
                return Err(BuildError::InvalidTableSpecification);
            }
            if alias == WILDCARD {
                return Err(BuildError::WildcardTableAlias);
            }
            Ok(ListItem::aliased(name, alias))
        }
        Shape::Empty | Shape::Nested => Err(BuildError::NestedTableReference),
        Shape::TooMany => Err(BuildError::TableAliasCount),
    }
}

/// Validate a GROUP BY / ORDER BY list.
///
/// Directions are matched case-insensitively against `asc` and `desc`.
pub fn sort_list(specs: &[Element]) -> BuildResult<Vec<SortItem>> {
    specs
        .iter()
        .map(sort_item)
        .collect::<BuildResult<Vec<_>>>()
        .map_err(|err| reject("sort", err))
}

fn sort_item(spec: &Element) -> BuildResult<SortItem> {
    match spec.shape() {
        Shape::Bare(name) | Shape::Wrapped(name) => {
            if name.is_empty() {
                return Err(BuildError::EmptySortElement);
            }
            Ok(SortItem::new(name))
        }
        Shape::Pair(name, direction) => {
            if name.is_empty() {
                return Err(BuildError::EmptySortElement);
            }
            if !is_direction(direction) {
                return Err(BuildError::invalid_direction(direction));
            }
            Ok(SortItem::directed(name, direction))
        }
        Shape::Empty | Shape::Nested => Err(BuildError::NestedSortElement),
        Shape::TooMany => Err(BuildError::SortDirectionCount),
    }
}

fn is_direction(s: &str) -> bool {
    s.eq_ignore_ascii_case("asc") || s.eq_ignore_ascii_case("desc")
}

/// Log a rejected clause input and hand the error back.
pub(crate) fn reject(clause: &'static str, err: BuildError) -> BuildError {
    #[cfg(feature = "tracing")]
    tracing::debug!(target: "sqlchain.validate", clause, error = %err, "rejected clause input");
    #[cfg(not(feature = "tracing"))]
    let _ = clause;
    err
}
