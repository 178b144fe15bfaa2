use serde::{Deserialize, Serialize};
use serde_json::Value;

///
/// ParamIndex
///
/// Running parameter-index counter threaded by `&mut` through one compile.
/// Every field term takes exactly one index; nested conditions share the
/// same counter so numbering stays monotonic across nesting depth.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParamIndex(usize);

impl ParamIndex {
    #[must_use]
    pub const fn new(start: usize) -> Self {
        Self(start)
    }

    /// Index the next term will take.
    #[must_use]
    pub const fn peek(self) -> usize {
        self.0
    }

    /// Take the current index and advance by one.
    pub const fn take(&mut self) -> usize {
        let index = self.0;
        self.0 += 1;
        index
    }
}

///
/// SqlParameter
///
/// One bound parameter; serializes as `{"name": "@param000_age", "value": 30}`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SqlParameter {
    pub name: String,
    pub value: Value,
}

impl SqlParameter {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

///
/// Fragment
///
/// Compiled WHERE-clause piece: self-parenthesized text plus the parameters
/// its placeholders reference, in order of appearance. An empty fragment
/// contributes nothing to the enclosing chain.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Fragment {
    pub text: String,
    pub parameters: Vec<SqlParameter>,
}

impl Fragment {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            text: String::new(),
            parameters: Vec::new(),
        }
    }

    /// Literal text with no bound parameter.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Join non-empty fragments with `sep`, concatenating their parameters.
    pub(crate) fn join(fragments: impl IntoIterator<Item = Self>, sep: &str) -> Self {
        let mut joined = Self::empty();

        for fragment in fragments.into_iter().filter(|f| !f.is_empty()) {
            if !joined.text.is_empty() {
                joined.text.push_str(sep);
            }
            joined.text.push_str(&fragment.text);
            joined.parameters.extend(fragment.parameters);
        }

        joined
    }

    /// Wrap the text as `{open}text{close}`; empty stays empty.
    #[must_use]
    pub(crate) fn wrap(mut self, open: &str, close: &str) -> Self {
        if !self.is_empty() {
            self.text = format!("{open}{}{close}", self.text);
        }
        self
    }
}
