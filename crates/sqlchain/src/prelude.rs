//! Convenient imports for typical `sqlchain` usage.
//!
//! ```ignore
//! use sqlchain::prelude::*;
//! ```

pub use crate::{BuildError, BuildResult, BuiltQuery, Query, Value, insert, select};

#[cfg(feature = "tracing")]
pub use crate::SqlLogger;
