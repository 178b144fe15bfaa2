use cosmql::error::ConditionError;
use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

///
/// CliError
///

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("cannot read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid condition: {0}")]
    Condition(#[from] ConditionError),
}
