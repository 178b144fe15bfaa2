//! Condition compiler.
//!
//! `key` parses filter keys, `expr` compiles single terms, `condition`
//! assembles the statement.

mod condition;
mod document;
pub mod expr;
pub mod key;
mod operator;
mod param;
mod path;
mod projection;
mod sort;
mod spec;


pub use condition::Condition;
pub use document::ConditionDocument;
pub use expr::{Expression, SubConditionType};
pub use key::{FilterKey, SUB_COND_RAW};
pub use operator::CompareOp;
pub use param::{Fragment, ParamIndex, SqlParameter};
pub use path::FieldPath;
pub use projection::select_entry;
pub use sort::SortDirection;
pub use spec::QuerySpec;
