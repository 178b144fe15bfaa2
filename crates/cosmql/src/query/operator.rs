use std::{fmt, str::FromStr};

///
/// CompareOp
///
/// Comparison carried by a filter key's trailing token (`"age >="`).
/// Function operators render as `FUNC(path, @param)`; the rest are infix.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum CompareOp {
    #[default]
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    StartsWith,
    EndsWith,
    Contains,
    ArrayContains,
}

impl CompareOp {
    pub const ALL: [Self; 11] = [
        Self::Eq,
        Self::Ne,
        Self::Gt,
        Self::Gte,
        Self::Lt,
        Self::Lte,
        Self::Like,
        Self::StartsWith,
        Self::EndsWith,
        Self::Contains,
        Self::ArrayContains,
    ];

    /// Token as written in filter keys and query text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Like => "LIKE",
            Self::StartsWith => "STARTSWITH",
            Self::EndsWith => "ENDSWITH",
            Self::Contains => "CONTAINS",
            Self::ArrayContains => "ARRAY_CONTAINS",
        }
    }

    /// True when rendered as a function call rather than infix.
    #[must_use]
    pub const fn is_function(self) -> bool {
        matches!(
            self,
            Self::StartsWith | Self::EndsWith | Self::Contains | Self::ArrayContains
        )
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompareOp {
    type Err = ();

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == token)
            .ok_or(())
    }
}

/// True for tokens made only of comparison symbols (`>>`, `=<`).
///
/// Such a token can only be a mistyped operator, never a field segment.
pub(crate) fn is_symbolic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|ch| matches!(ch, '<' | '>' | '=' | '!'))
}
