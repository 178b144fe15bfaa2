use crate::query::{
    operator::CompareOp,
    param::{Fragment, ParamIndex, SqlParameter},
    path::{FieldPath, param_name},
};
use serde_json::Value;

///
/// SimpleExpression
///
/// One `field OP value` term. Takes exactly one index per compile whatever
/// the value's shape; list values expand into `IN` placeholders suffixed
/// `__0`, `__1`, ... under that one index.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SimpleExpression {
    pub path: FieldPath,
    pub op: CompareOp,
    pub value: Value,
}

impl SimpleExpression {
    #[must_use]
    pub const fn new(path: FieldPath, op: CompareOp, value: Value) -> Self {
        Self { path, op, value }
    }

    pub fn compile(&self, index: &mut ParamIndex) -> Fragment {
        self.render(index.take())
    }

    /// Render at a fixed index without touching any counter.
    pub(crate) fn render(&self, index: usize) -> Fragment {
        let access = self.path.access();
        let name = param_name(index, &self.path);

        match (&self.value, self.op) {
            (Value::Array(items), CompareOp::Eq) => render_list(&access, &name, items, "IN", "(1=0)"),
            (Value::Array(items), CompareOp::Ne) => {
                render_list(&access, &name, items, "NOT IN", "(1=1)")
            }
            (value, op) => {
                let text = if op.is_function() {
                    format!("({op}({access}, {name}))")
                } else {
                    format!("({access} {op} {name})")
                };

                Fragment {
                    text,
                    parameters: vec![SqlParameter::new(name, value.clone())],
                }
            }
        }
    }
}

// An empty list binds nothing and collapses to a constant predicate.
fn render_list(
    access: &str,
    name: &str,
    items: &[Value],
    keyword: &str,
    when_empty: &str,
) -> Fragment {
    if items.is_empty() {
        return Fragment::literal(when_empty);
    }

    let parameters: Vec<SqlParameter> = items
        .iter()
        .enumerate()
        .map(|(i, item)| SqlParameter::new(format!("{name}__{i}"), item.clone()))
        .collect();

    let placeholders = parameters
        .iter()
        .map(|param| param.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Fragment {
        text: format!("({access} {keyword} ({placeholders}))"),
        parameters,
    }
}
