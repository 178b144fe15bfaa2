use crate::{error::ConditionError, query::path::FieldPath};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

///
/// SortDirection
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "ASC", alias = "asc")]
    Asc,

    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ConditionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            v if v.eq_ignore_ascii_case("ASC") => Ok(Self::Asc),
            v if v.eq_ignore_ascii_case("DESC") => Ok(Self::Desc),
            _ => Err(ConditionError::InvalidSortDirection {
                value: value.to_string(),
            }),
        }
    }
}

/// `ORDER BY c["f1"] DIR1, c["f2"] DIR2`, or nothing for no sort keys.
pub(crate) fn order_by_clause(keys: &[(FieldPath, SortDirection)]) -> Option<String> {
    if keys.is_empty() {
        return None;
    }

    let keys = keys
        .iter()
        .map(|(path, direction)| format!("{} {direction}", path.access()))
        .collect::<Vec<_>>()
        .join(", ");

    Some(format!("ORDER BY {keys}"))
}
