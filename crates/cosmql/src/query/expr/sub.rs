use crate::query::{
    condition::Condition,
    param::{Fragment, ParamIndex},
};
use serde::{Deserialize, Serialize};

///
/// SubConditionType
///
/// Boolean mode joining the nested conditions of a sub-condition.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum SubConditionType {
    #[serde(rename = "SUB_COND_AND")]
    And,

    #[serde(rename = "SUB_COND_OR")]
    Or,
}

impl SubConditionType {
    /// Reserved filter key selecting this mode.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::And => "SUB_COND_AND",
            Self::Or => "SUB_COND_OR",
        }
    }

    pub(crate) fn from_key(key: &str) -> Option<Self> {
        [Self::And, Self::Or].into_iter().find(|kind| kind.key() == key)
    }

    const fn separator(self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

///
/// SubCondition
///
/// Nested conditions compiled against the parent's counter and wrapped in
/// one pair of parentheses. Nested conditions that compile to nothing are
/// dropped before joining, so no dangling `AND`/`OR` is ever emitted.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubCondition {
    pub kind: SubConditionType,
    pub conditions: Vec<Condition>,
}

impl SubCondition {
    #[must_use]
    pub const fn new(kind: SubConditionType, conditions: Vec<Condition>) -> Self {
        Self { kind, conditions }
    }

    pub fn compile(&self, index: &mut ParamIndex) -> Fragment {
        let mut parts = Vec::with_capacity(self.conditions.len());

        for condition in &self.conditions {
            let fragments = condition.where_fragments(index);
            let grouped = fragments.len() > 1;
            let part = Fragment::join(fragments, " AND ");

            // a multi-term body keeps its own parens under an OR parent
            parts.push(if grouped { part.wrap("(", ")") } else { part });
        }

        Fragment::join(parts, self.kind.separator()).wrap("(", ")")
    }
}
