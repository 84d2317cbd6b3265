//! Column, table and sort specifications.
//!
//! Callers pass raw [`Element`]s (a bare name, or a list such as
//! `["name", "alias"]`). Validators classify each one into a [`Shape`] and
//! store the result as a [`ListItem`] (name + alias) or a [`SortItem`]
//! (name + direction). Rendering is pure and never fails.

use std::fmt;

/// The `*` token.
pub const WILDCARD: &str = "*";

/// A raw specification as supplied by the caller.
///
/// # Example
/// ```ignore
/// use sqlchain::Element;
///
/// let cols: Vec<Element> = vec!["id".into(), ("name", "n").into(), ["email"].into()];
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Name(String),
    List(Vec<Element>),
}

impl From<&str> for Element {
    fn from(name: &str) -> Self {
        Element::Name(name.to_string())
    }
}

impl From<String> for Element {
    fn from(name: String) -> Self {
        Element::Name(name)
    }
}

impl From<&String> for Element {
    fn from(name: &String) -> Self {
        Element::Name(name.clone())
    }
}

impl<T: Into<Element>> From<Vec<T>> for Element {
    fn from(items: Vec<T>) -> Self {
        Element::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Element>, const N: usize> From<[T; N]> for Element {
    fn from(items: [T; N]) -> Self {
        Element::List(items.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for Element {
    fn from((name, second): (A, B)) -> Self {
        Element::List(vec![
            Element::Name(name.into()),
            Element::Name(second.into()),
        ])
    }
}

/// Structural classification of an [`Element`], computed before any rule runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape<'a> {
    /// `"name"`
    Bare(&'a str),
    /// `["name"]`
    Wrapped(&'a str),
    /// `["name", "second"]`
    Pair(&'a str, &'a str),
    /// `[]`
    Empty,
    /// A list containing a list.
    Nested,
    /// More than two entries.
    TooMany,
}

impl Element {
    pub(crate) fn shape(&self) -> Shape<'_> {
        let items = match self {
            Element::Name(name) => return Shape::Bare(name),
            Element::List(items) => items,
        };

        if items.is_empty() {
            return Shape::Empty;
        }
        if items.len() > 2 {
            return Shape::TooMany;
        }

        match items.as_slice() {
            [Element::Name(name)] => Shape::Wrapped(name),
            [Element::Name(name), Element::Name(second)] => Shape::Pair(name, second),
            _ => Shape::Nested,
        }
    }
}

/// A validated column or table: `name` or `name AS alias`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub name: String,
    pub alias: Option<String>,
}

impl ListItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }

    pub(crate) fn is_wildcard(&self) -> bool {
        self.name == WILDCARD
    }
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} AS {}", self.name, alias),
            None => f.write_str(&self.name),
        }
    }
}

/// A validated GROUP BY / ORDER BY entry: `name` or `name DIRECTION`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortItem {
    pub name: String,
    pub direction: Option<String>,
}

impl SortItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: None,
        }
    }

    pub fn directed(name: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Some(direction.into()),
        }
    }
}

impl fmt::Display for SortItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.direction {
            Some(dir) => write!(f, "{} {}", self.name, dir.to_uppercase()),
            None => f.write_str(&self.name),
        }
    }
}

/// Join items as `a, b AS c, d`.
pub fn render_list(items: &[ListItem]) -> String {
    join(items)
}

/// Join items as `a DESC, b, c ASC`.
pub fn render_sorted(items: &[SortItem]) -> String {
    join(items)
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
