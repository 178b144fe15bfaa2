//! Filter-condition compiler for document-store SQL.
//!
//! A [`Condition`](query::Condition) is built from ordered key/value filter
//! terms and compiled into a [`QuerySpec`](query::QuerySpec): parameterized
//! query text plus the ordered parameter list an executor binds.
#![warn(unreachable_pub)]

pub mod error;
pub mod query;

///
/// CONSTANTS
///

/// Alias of the queried container in every generated statement.
pub const CONTAINER_ALIAS: &str = "c";

/// Offset applied when a condition does not set one.
pub const DEFAULT_OFFSET: u32 = 0;

/// Limit applied when a condition does not set one.
pub const DEFAULT_LIMIT: u32 = 100;

///
/// Prelude
///
/// Builder vocabulary only; errors and the counter stay one level down.
///

pub mod prelude {
    pub use crate::query::{
        CompareOp, Condition, ConditionDocument, QuerySpec, SortDirection, SqlParameter,
        SubConditionType,
    };
}
