//! Scalar values bound to `$n` placeholders.
//!
//! [`Value`] is the closed set of scalars a statement can bind. It implements
//! `tokio_postgres::types::ToSql`, so a rendered statement plus
//! [`BoundValues::as_refs`] can be handed straight to a tokio-postgres client.

use bytes::BytesMut;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use std::error::Error;
use tokio_postgres::types::{IsNull, ToSql, Type};
use uuid::Uuid;

/// A scalar bound to a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL NULL
    Null,
    Bool(bool),
    /// Integers are widened to i64 and narrowed again for INT2/INT4 columns.
    Int(i64),
    /// Floats are widened to f64 and narrowed again for FLOAT4 columns.
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
    Uuid(Uuid),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<Utc>),
}

impl Value {
    /// Check if this value is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

macro_rules! impl_value_from {
    ($($ty:ty => $variant:ident($conv:expr)),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant($conv(v))
                }
            }

            impl From<$ty> for ValueArg {
                fn from(v: $ty) -> Self {
                    ValueArg::Scalar(Value::from(v))
                }
            }
        )*
    };
}

impl_value_from! {
    bool => Bool(|v| v),
    i16 => Int(i64::from),
    i32 => Int(i64::from),
    i64 => Int(|v| v),
    u32 => Int(i64::from),
    f32 => Float(f64::from),
    f64 => Float(|v| v),
    &str => Text(str::to_string),
    String => Text(|v| v),
    &String => Text(String::clone),
    serde_json::Value => Json(|v| v),
    Uuid => Uuid(|v| v),
    NaiveDate => Date(|v| v),
    NaiveDateTime => Timestamp(|v| v),
    DateTime<Utc> => TimestampTz(|v| v),
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.to_sql_checked(ty, out),
            Value::Int(v) => match *ty {
                Type::INT2 => i16::try_from(*v)?.to_sql_checked(ty, out),
                Type::INT4 => i32::try_from(*v)?.to_sql_checked(ty, out),
                _ => v.to_sql_checked(ty, out),
            },
            Value::Float(v) => match *ty {
                Type::FLOAT4 => {
                    let narrowed = *v as f32;
                    if v.is_finite() && !narrowed.is_finite() {
                        return Err(format!("float {v} is out of range for FLOAT4").into());
                    }
                    narrowed.to_sql_checked(ty, out)
                }
                _ => v.to_sql_checked(ty, out),
            },
            Value::Text(v) => v.to_sql_checked(ty, out),
            Value::Bytes(v) => v.to_sql_checked(ty, out),
            Value::Json(v) => v.to_sql_checked(ty, out),
            Value::Uuid(v) => v.to_sql_checked(ty, out),
            Value::Date(v) => v.to_sql_checked(ty, out),
            Value::Timestamp(v) => v.to_sql_checked(ty, out),
            Value::TimestampTz(v) => v.to_sql_checked(ty, out),
        }
    }

    // Each variant checks the column type against its inner value.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    tokio_postgres::types::to_sql_checked!();
}

/// A raw `values()` argument: a scalar, or a list of arguments.
///
/// Lists are rows; a list inside a row is rejected at validation time.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueArg {
    Scalar(Value),
    List(Vec<ValueArg>),
}

impl From<Value> for ValueArg {
    fn from(v: Value) -> Self {
        ValueArg::Scalar(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for ValueArg {
    fn from(v: Option<T>) -> Self {
        ValueArg::Scalar(Value::from(v))
    }
}

impl<T: Into<ValueArg>> From<Vec<T>> for ValueArg {
    fn from(v: Vec<T>) -> Self {
        ValueArg::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ValueArg>, const N: usize> From<[T; N]> for ValueArg {
    fn from(v: [T; N]) -> Self {
        ValueArg::List(v.into_iter().map(Into::into).collect())
    }
}

/// Values bound to placeholders, in placeholder order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundValues {
    values: Vec<Value>,
}

impl BoundValues {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Bind a value and return its 1-based placeholder number.
    pub fn push(&mut self, value: Value) -> usize {
        self.values.push(value);
        self.values.len()
    }

    /// Number of the next placeholder to be allocated.
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Get all values as references for tokio-postgres.
    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values.iter().map(|v| v as &(dyn ToSql + Sync)).collect()
    }

    /// Clear all values.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}
