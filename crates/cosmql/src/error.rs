use thiserror::Error as ThisError;

///
/// ConditionError
///
/// Invalid-argument failures raised while building a condition.
/// Compilation itself never fails; every error surfaces from the builder
/// call that received the malformed input.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConditionError {
    #[error("field cannot be empty")]
    EmptyField,

    #[error("field cannot contain an empty path segment: '{field}'")]
    EmptyFieldSegment { field: String },

    #[error("field cannot contain '{ch}': '{field}'")]
    InvalidFieldChar { field: String, ch: char },

    #[error("unknown operator '{op}' in filter key '{key}'")]
    UnknownOperator { key: String, op: String },

    #[error("'{key}' expects an array of filter objects")]
    InvalidSubCondition { key: String },

    #[error("'{key}' expects a string of raw query text")]
    InvalidRawCondition { key: String },

    #[error("unknown sort direction '{value}'; expected ASC or DESC")]
    InvalidSortDirection { value: String },

    #[error("filter must be a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },
}

impl ConditionError {
    pub(crate) fn invalid_field_char(field: &str, ch: char) -> Self {
        Self::InvalidFieldChar {
            field: field.to_string(),
            ch,
        }
    }

    pub(crate) fn empty_segment(field: &str) -> Self {
        Self::EmptyFieldSegment {
            field: field.to_string(),
        }
    }
}

/// Human-readable JSON type name used in error messages.
pub(crate) const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
