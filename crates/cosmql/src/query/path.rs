use crate::{CONTAINER_ALIAS, error::ConditionError};
use std::fmt;

///
/// FieldPath
///
/// Dot-separated document field path, validated once at build time.
/// Rendered with bracket access so reserved words and odd characters in a
/// segment never change the statement structure.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path such as `fullName.last`.
    pub fn parse(field: &str) -> Result<Self, ConditionError> {
        let field = field.trim();
        if field.is_empty() {
            return Err(ConditionError::EmptyField);
        }

        let segments: Vec<String> = field.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(ConditionError::empty_segment(field));
        }

        Ok(Self { segments })
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Bracket access expression, e.g. `c["fullName"]["last"]`.
    #[must_use]
    pub fn access(&self) -> String {
        bracket_access(self.segments.iter().map(String::as_str))
    }

    /// Identifier-safe form used inside parameter names.
    ///
    /// Segments are joined with `__`; characters outside `[A-Za-z0-9_]` map
    /// to `_`.
    #[must_use]
    pub fn param_suffix(&self) -> String {
        self.segments
            .iter()
            .map(|segment| {
                segment
                    .chars()
                    .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("__")
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// Render `c["seg1"]["seg2"]`, escaping quotes and backslashes in segments.
fn bracket_access<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::from(CONTAINER_ALIAS);

    for segment in segments {
        out.push_str("[\"");
        for ch in segment.chars() {
            if matches!(ch, '"' | '\\') {
                out.push('\\');
            }
            out.push(ch);
        }
        out.push_str("\"]");
    }

    out
}

/// Placeholder name, e.g. `@param002_fullName__last`.
pub(crate) fn param_name(index: usize, path: &FieldPath) -> String {
    format!("@param{index:03}_{}", path.param_suffix())
}
