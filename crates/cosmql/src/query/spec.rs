use crate::query::param::SqlParameter;
use serde::{Deserialize, Serialize};

///
/// QuerySpec
///
/// Immutable compile output handed to the execution layer: query text plus
/// parameters in first-appearance order of their placeholders.
///
/// Serializes as the `{"query": ..., "parameters": [...]}` request body
/// document-store query endpoints accept.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct QuerySpec {
    #[serde(rename = "query")]
    pub query_text: String,
    pub parameters: Vec<SqlParameter>,
}

impl QuerySpec {
    #[must_use]
    pub const fn new(query_text: String, parameters: Vec<SqlParameter>) -> Self {
        Self {
            query_text,
            parameters,
        }
    }

    #[must_use]
    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    #[must_use]
    pub fn parameters(&self) -> &[SqlParameter] {
        &self.parameters
    }
}
