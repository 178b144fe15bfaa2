//! Filter-key mini-language.
//!
//! A key such as `"fullName.first OR fullName.last STARTSWITH"` is parsed
//! once, at build time, into a [`FilterKey`]. Parsing is total: malformed
//! keys produce a [`ConditionError`], never a panic.

use crate::{
    error::ConditionError,
    query::{
        expr::SubConditionType,
        operator::{CompareOp, is_symbolic},
        path::FieldPath,
    },
};

/// Reserved key for raw query text.
pub const SUB_COND_RAW: &str = "SUB_COND_RAW";

const OR_INFIX: &str = " OR ";

///
/// FilterKey
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FilterKey {
    Field { path: FieldPath, op: CompareOp },
    AnyOf { paths: Vec<FieldPath>, op: CompareOp },
    Sub(SubConditionType),
    Raw,
}

impl FilterKey {
    pub fn parse(key: &str) -> Result<Self, ConditionError> {
        let trimmed = key.trim();

        if trimmed == SUB_COND_RAW {
            return Ok(Self::Raw);
        }
        if let Some(kind) = SubConditionType::from_key(trimmed) {
            return Ok(Self::Sub(kind));
        }

        let (body, op) = split_operator(trimmed)?;

        let padded = format!(" {body} ");
        if !padded.contains(OR_INFIX) {
            return Ok(Self::Field {
                path: FieldPath::parse(body)?,
                op,
            });
        }

        let mut paths: Vec<FieldPath> = Vec::new();
        for alternate in padded.split(OR_INFIX).map(str::trim) {
            if alternate.is_empty() {
                continue;
            }
            let path = FieldPath::parse(alternate)?;
            if !paths.contains(&path) {
                paths.push(path);
            }
        }

        Ok(Self::AnyOf { paths, op })
    }
}

// Split a trailing operator token off the key; `=` when there is none.
fn split_operator(key: &str) -> Result<(&str, CompareOp), ConditionError> {
    let Some((head, tail)) = key.rsplit_once(char::is_whitespace) else {
        if key.parse::<CompareOp>().is_ok() {
            return Err(ConditionError::EmptyField);
        }
        if is_symbolic(key) {
            return Err(ConditionError::UnknownOperator {
                key: key.to_string(),
                op: key.to_string(),
            });
        }
        return Ok((key, CompareOp::Eq));
    };

    match tail.parse::<CompareOp>() {
        Ok(op) => Ok((head.trim_end(), op)),
        Err(()) if is_symbolic(tail) => Err(ConditionError::UnknownOperator {
            key: key.to_string(),
            op: tail.to_string(),
        }),
        Err(()) => Ok((key, CompareOp::Eq)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(field: &str) -> FieldPath {
        FieldPath::parse(field).unwrap()
    }

    #[test]
    fn bare_field_defaults_to_eq() {
        assert_eq!(
            FilterKey::parse("fullName.last").unwrap(),
            FilterKey::Field {
                path: path("fullName.last"),
                op: CompareOp::Eq,
            }
        );
    }

    #[test]
    fn trailing_token_selects_operator() {
        for op in CompareOp::ALL {
            let key = format!("age {op}");
            assert_eq!(
                FilterKey::parse(&key).unwrap(),
                FilterKey::Field {
                    path: path("age"),
                    op,
                },
                "key {key}"
            );
        }
    }

    #[test]
    fn operator_is_split_before_or_alternates() {
        assert_eq!(
            FilterKey::parse("fullName.first OR fullName.last STARTSWITH").unwrap(),
            FilterKey::AnyOf {
                paths: vec![path("fullName.first"), path("fullName.last")],
                op: CompareOp::StartsWith,
            }
        );
    }

    #[test]
    fn blank_and_duplicate_alternates_are_dropped() {
        assert_eq!(
            FilterKey::parse("a OR a OR  OR b").unwrap(),
            FilterKey::AnyOf {
                paths: vec![path("a"), path("b")],
                op: CompareOp::Eq,
            }
        );
        assert_eq!(
            FilterKey::parse("OR").unwrap(),
            FilterKey::AnyOf {
                paths: vec![],
                op: CompareOp::Eq,
            }
        );
    }

    #[test]
    fn reserved_keys_are_recognized() {
        assert_eq!(
            FilterKey::parse("SUB_COND_AND").unwrap(),
            FilterKey::Sub(SubConditionType::And)
        );
        assert_eq!(
            FilterKey::parse("SUB_COND_OR").unwrap(),
            FilterKey::Sub(SubConditionType::Or)
        );
        assert_eq!(FilterKey::parse("SUB_COND_RAW").unwrap(), FilterKey::Raw);
    }

    #[test]
    fn field_names_with_spaces_survive() {
        assert_eq!(
            FilterKey::parse("first name").unwrap(),
            FilterKey::Field {
                path: path("first name"),
                op: CompareOp::Eq,
            }
        );
    }

    #[test]
    fn malformed_keys_fail_cleanly() {
        assert_eq!(
            FilterKey::parse("age >>"),
            Err(ConditionError::UnknownOperator {
                key: "age >>".to_string(),
                op: ">>".to_string(),
            })
        );
        assert_eq!(FilterKey::parse(""), Err(ConditionError::EmptyField));
        assert_eq!(FilterKey::parse(">="), Err(ConditionError::EmptyField));
        assert!(matches!(
            FilterKey::parse("a..b !="),
            Err(ConditionError::EmptyFieldSegment { .. })
        ));
    }
}
