use crate::{
    CONTAINER_ALIAS, DEFAULT_LIMIT, DEFAULT_OFFSET,
    error::ConditionError,
    query::{
        expr::{Expression, OrExpressions, SimpleExpression, SubCondition, SubConditionType},
        key::FilterKey,
        param::{Fragment, ParamIndex},
        path::FieldPath,
        projection::Projection,
        sort::{SortDirection, order_by_clause},
        spec::QuerySpec,
    },
};
use serde_json::Value;

///
/// Condition
///
/// Root of the expression tree and its fluent builder.
///
/// Terms are kept in insertion order: that order is the AND order of the
/// WHERE clause and the order parameter indexes are assigned in. Keys are
/// parsed when a term is added; compiling never mutates the tree and may be
/// repeated.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Condition {
    expressions: Vec<Expression>,
    sort: Vec<(FieldPath, SortDirection)>,
    offset: Option<u32>,
    limit: Option<u32>,
    projection: Projection,
}

impl Condition {
    /// Create an empty condition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a condition from ordered `(key, value)` filter terms.
    ///
    /// ```ignore
    /// let cond = Condition::filter([("age >=", json!(30)), ("fullName.last !=", json!("ABC"))])?;
    /// ```
    pub fn filter<I, K, V>(terms: I) -> Result<Self, ConditionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        terms
            .into_iter()
            .try_fold(Self::new(), |cond, (key, value)| cond.and(key.as_ref(), value))
    }

    /// Append one filter term.
    ///
    /// `SUB_COND_AND` / `SUB_COND_OR` take an array of filter objects, each
    /// becoming a nested condition; `SUB_COND_RAW` takes raw query text.
    pub fn and(mut self, key: &str, value: impl Into<Value>) -> Result<Self, ConditionError> {
        let value = value.into();

        let expression = match FilterKey::parse(key)? {
            FilterKey::Field { path, op } => {
                Expression::Simple(SimpleExpression::new(path, op, value))
            }
            FilterKey::AnyOf { paths, op } => {
                Expression::Or(OrExpressions::new(paths, op, &value))
            }
            FilterKey::Sub(kind) => {
                Expression::Sub(SubCondition::new(kind, nested_conditions(key, &value)?))
            }
            FilterKey::Raw => match value {
                Value::String(text) => Expression::Raw(text),
                _ => {
                    return Err(ConditionError::InvalidRawCondition {
                        key: key.trim().to_string(),
                    });
                }
            },
        };

        self.expressions.push(expression);

        Ok(self)
    }

    /// Append a typed sub-condition.
    #[must_use]
    pub fn sub_cond(mut self, kind: SubConditionType, conditions: Vec<Self>) -> Self {
        self.expressions
            .push(Expression::Sub(SubCondition::new(kind, conditions)));
        self
    }

    /// Append raw boolean query text, inserted verbatim and unbound.
    #[must_use]
    pub fn raw(mut self, text: impl Into<String>) -> Self {
        self.expressions.push(Expression::Raw(text.into()));
        self
    }

    /// Append a sort key; the field follows the filter-key path rules.
    pub fn sort(mut self, field: &str, direction: SortDirection) -> Result<Self, ConditionError> {
        self.sort.push((FieldPath::parse(field)?, direction));
        Ok(self)
    }

    /// Set or replace the result offset.
    #[must_use]
    pub const fn offset(mut self, n: u32) -> Self {
        self.offset = Some(n);
        self
    }

    /// Set or replace the result limit.
    #[must_use]
    pub const fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    /// Set or replace the projected fields.
    pub fn fields<I, S>(mut self, fields: I) -> Result<Self, ConditionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.projection = Projection::new(fields)?;
        Ok(self)
    }

    #[must_use]
    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }

    #[must_use]
    pub fn sort_keys(&self) -> &[(FieldPath, SortDirection)] {
        &self.sort
    }

    #[must_use]
    pub fn offset_or_default(&self) -> u32 {
        self.offset.unwrap_or(DEFAULT_OFFSET)
    }

    #[must_use]
    pub fn limit_or_default(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Non-empty WHERE fragments in term order.
    pub(crate) fn where_fragments(&self, index: &mut ParamIndex) -> Vec<Fragment> {
        self.expressions
            .iter()
            .map(|expression| expression.compile(index))
            .filter(|fragment| !fragment.is_empty())
            .collect()
    }

    /// Compile the WHERE body against an externally owned counter.
    ///
    /// Returns an empty fragment when no term produces text.
    pub fn compile_where(&self, index: &mut ParamIndex) -> Fragment {
        Fragment::join(self.where_fragments(index), " AND ")
    }

    /// `SELECT <projection|*> FROM c [WHERE ...] [ORDER BY ...] OFFSET o LIMIT l`.
    #[must_use]
    pub fn to_query_spec(&self) -> QuerySpec {
        let body = self.compile_where(&mut ParamIndex::default());

        let mut text = format!(
            "SELECT {} FROM {CONTAINER_ALIAS}",
            self.projection.select_clause()
        );
        push_where(&mut text, &body);
        if let Some(order_by) = order_by_clause(&self.sort) {
            text.push(' ');
            text.push_str(&order_by);
        }
        text.push_str(&format!(
            " OFFSET {} LIMIT {}",
            self.offset_or_default(),
            self.limit_or_default()
        ));

        finish(text, body)
    }

    /// `SELECT COUNT(1) FROM c [WHERE ...]`; sort and pagination are dropped.
    #[must_use]
    pub fn to_query_spec_for_count(&self) -> QuerySpec {
        let body = self.compile_where(&mut ParamIndex::default());

        let mut text = format!("SELECT COUNT(1) FROM {CONTAINER_ALIAS}");
        push_where(&mut text, &body);

        finish(text, body)
    }
}

fn push_where(text: &mut String, body: &Fragment) {
    if !body.is_empty() {
        text.push_str(" WHERE ");
        text.push_str(&body.text);
    }
}

fn finish(text: String, body: Fragment) -> QuerySpec {
    tracing::debug!(query = %text, params = body.parameters.len(), "compiled condition");

    QuerySpec::new(text, body.parameters)
}

// Each array element is a filter object compiled into one nested condition.
fn nested_conditions(key: &str, value: &Value) -> Result<Vec<Condition>, ConditionError> {
    let invalid = || ConditionError::InvalidSubCondition {
        key: key.trim().to_string(),
    };

    let Value::Array(items) = value else {
        return Err(invalid());
    };

    items
        .iter()
        .map(|item| {
            if item.is_object() {
                Condition::from_json(item)
            } else {
                Err(invalid())
            }
        })
        .collect()
}
