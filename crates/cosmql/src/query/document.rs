use crate::{
    error::{ConditionError, json_kind},
    query::{condition::Condition, sort::SortDirection},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

///
/// ConditionDocument
///
/// JSON form of a full condition:
///
/// ```json
/// {"filter": {"age >=": 30}, "sort": [["_ts", "DESC"]], "offset": 10, "limit": 20, "fields": ["id"]}
/// ```
///
/// `filter` keys keep document order, which fixes term and index order.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionDocument {
    #[serde(default)]
    pub filter: Map<String, Value>,

    #[serde(default)]
    pub sort: Vec<(String, SortDirection)>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(default)]
    pub fields: Vec<String>,
}

impl ConditionDocument {
    pub fn into_condition(self) -> Result<Condition, ConditionError> {
        let mut cond = Condition::filter(self.filter)?.fields(self.fields)?;

        for (field, direction) in self.sort {
            cond = cond.sort(&field, direction)?;
        }
        if let Some(offset) = self.offset {
            cond = cond.offset(offset);
        }
        if let Some(limit) = self.limit {
            cond = cond.limit(limit);
        }

        Ok(cond)
    }
}

impl Condition {
    /// Build a condition from a bare filter object such as
    /// `{"age >=": 30, "SUB_COND_OR": [{"a": 1}, {"b": 2}]}`.
    pub fn from_json(filter: &Value) -> Result<Self, ConditionError> {
        let Value::Object(terms) = filter else {
            return Err(ConditionError::NotAnObject {
                kind: json_kind(filter),
            });
        };

        Self::filter(terms.iter().map(|(key, value)| (key, value.clone())))
    }
}
