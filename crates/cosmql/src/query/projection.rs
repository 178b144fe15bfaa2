use crate::{CONTAINER_ALIAS, error::ConditionError, query::path::FieldPath};

// Characters that would break out of the generated object literal or the
// dotted leaf access. Whitespace is rejected separately.
const UNSAFE_CHARS: [char; 6] = ['{', '}', ',', '"', '\'', '\\'];

///
/// Projection
///
/// Field list behind `SELECT VALUE {...}`. Paths sharing a prefix merge into
/// one nested object; entries keep first-appearance order.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Projection {
    fields: Vec<FieldPath>,
}

impl Projection {
    pub(crate) fn new<I, S>(fields: I) -> Result<Self, ConditionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields = fields
            .into_iter()
            .map(|field| validate(field.as_ref()))
            .collect::<Result<_, _>>()?;

        Ok(Self { fields })
    }

    /// `*` or `VALUE {...}`.
    pub(crate) fn select_clause(&self) -> String {
        if self.fields.is_empty() {
            return "*".to_string();
        }

        let mut root = Vec::new();
        for field in &self.fields {
            insert(&mut root, field.segments(), field);
        }

        format!("VALUE {}", render_object(&root))
    }
}

/// Object-literal entry for one field, e.g.
/// `"org":{"leader":{"name":c.org.leader.name}}`.
pub fn select_entry(field: &str) -> Result<String, ConditionError> {
    let path = validate(field)?;
    let mut root = Vec::new();
    insert(&mut root, path.segments(), &path);

    Ok(render_entries(&root))
}

fn validate(field: &str) -> Result<FieldPath, ConditionError> {
    if let Some(ch) = field
        .chars()
        .find(|ch| UNSAFE_CHARS.contains(ch) || ch.is_whitespace())
    {
        return Err(ConditionError::invalid_field_char(field, ch));
    }

    FieldPath::parse(field)
}

enum Node {
    Leaf(FieldPath),
    Branch(Vec<(String, Node)>),
}

fn insert(entries: &mut Vec<(String, Node)>, segments: &[String], path: &FieldPath) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };

    let position = entries.iter().position(|(key, _)| key == head);

    match (position, rest.is_empty()) {
        // whole field replaces any narrower selection under it
        (Some(i), true) => entries[i].1 = Node::Leaf(path.clone()),
        (None, true) => entries.push((head.clone(), Node::Leaf(path.clone()))),
        (Some(i), false) => {
            if let Node::Branch(children) = &mut entries[i].1 {
                insert(children, rest, path);
            }
        }
        (None, false) => {
            let mut children = Vec::new();
            insert(&mut children, rest, path);
            entries.push((head.clone(), Node::Branch(children)));
        }
    }
}

fn render_object(entries: &[(String, Node)]) -> String {
    format!("{{{}}}", render_entries(entries))
}

fn render_entries(entries: &[(String, Node)]) -> String {
    entries
        .iter()
        .map(|(key, node)| {
            let value = match node {
                Node::Leaf(path) => format!("{CONTAINER_ALIAS}.{path}"),
                Node::Branch(children) => render_object(children),
            };
            format!("\"{key}\":{value}")
        })
        .collect::<Vec<_>>()
        .join(", ")
}
