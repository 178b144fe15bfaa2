use crate::query::{
    expr::SimpleExpression,
    operator::CompareOp,
    param::{Fragment, ParamIndex},
    path::FieldPath,
};
use serde_json::Value;
use std::collections::HashSet;

///
/// OrExpressions
///
/// `"firstName OR lastName STARTSWITH": "H"`: one value tested against
/// several fields. The whole group takes a single index; every alternate
/// renders at that index under its own path, so the next term sees the
/// counter advanced by exactly one.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrExpressions {
    pub alternates: Vec<SimpleExpression>,
}

impl OrExpressions {
    #[must_use]
    pub fn new(paths: Vec<FieldPath>, op: CompareOp, value: &Value) -> Self {
        let alternates = paths
            .into_iter()
            .map(|path| SimpleExpression::new(path, op, value.clone()))
            .collect();

        Self { alternates }
    }

    pub fn compile(&self, index: &mut ParamIndex) -> Fragment {
        if self.alternates.is_empty() {
            return Fragment::empty();
        }

        let at = index.take();
        let mut group = Fragment::join(
            self.alternates.iter().map(|alternate| alternate.render(at)),
            " OR ",
        )
        .wrap("( ", " )");

        // distinct paths can sanitize to one name (`a-b`, `a_b`); same value, bind once
        let mut seen = HashSet::new();
        group
            .parameters
            .retain(|param| seen.insert(param.name.clone()));

        group
    }
}
