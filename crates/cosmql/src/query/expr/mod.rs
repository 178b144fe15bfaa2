//! Module: query::expr
//! Responsibility: compiling one filter term into a WHERE fragment.
//! Does not own: key parsing or clause assembly (see `condition`).

mod or;
mod simple;
mod sub;


pub use or::OrExpressions;
pub use simple::SimpleExpression;
pub use sub::{SubCondition, SubConditionType};

use crate::query::param::{Fragment, ParamIndex};

///
/// Expression
///
/// One entry of a condition's ordered term list.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expression {
    Simple(SimpleExpression),
    Or(OrExpressions),
    Sub(SubCondition),
    Raw(String),
}

impl Expression {
    /// Compile against the shared counter. Raw text and the sub-condition
    /// wrapper take no index; nested field terms do.
    pub fn compile(&self, index: &mut ParamIndex) -> Fragment {
        let fragment = match self {
            Self::Simple(expr) => expr.compile(index),
            Self::Or(expr) => expr.compile(index),
            Self::Sub(expr) => expr.compile(index),
            Self::Raw(text) if text.trim().is_empty() => Fragment::empty(),
            Self::Raw(text) => Fragment::literal(format!("({text})")),
        };

        tracing::trace!(
            kind = self.kind(),
            text = %fragment.text,
            params = fragment.parameters.len(),
            "compiled expression"
        );

        fragment
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::Simple(_) => "simple",
            Self::Or(_) => "or",
            Self::Sub(_) => "sub",
            Self::Raw(_) => "raw",
        }
    }
}
