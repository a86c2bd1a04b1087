//! Uncommitted field values of an open form.

use std::collections::BTreeMap;

use stroy_core::Schema;

/// Raw text of every field in a schema, as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    values: BTreeMap<&'static str, String>,
}

impl Draft {
    /// A draft holding every field's default.
    pub fn from_defaults(schema: &Schema) -> Self {
        let values = schema
            .fields()
            .iter()
            .map(|f| (f.name, f.default.to_string()))
            .collect();
        Self { values }
    }

    /// Current text of a field; `None` if the field is not in the draft.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns `true` if the field is absent or holds only whitespace.
    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).is_none_or(|v| v.trim().is_empty())
    }

    pub(crate) fn set(&mut self, name: &'static str, value: String) {
        self.values.insert(name, value);
    }

    /// Number of fields held.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the draft holds no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
