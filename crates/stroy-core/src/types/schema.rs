//! Record schemas: field names, value kinds, required flags, and defaults.
//!
//! A [`Schema`] is the only thing the generic store and form controller know
//! about an entity kind. It lists the editable fields in display order, says
//! which of them must be filled in before a draft can be committed, and
//! carries two sets of defaults:
//!
//! - the *draft default* of each field, used when a form is opened for a new
//!   record;
//! - the *insert defaults*, attributes a fresh record receives that the form
//!   never edits (a new project starts at 0% progress).

use serde_json::Value;

use crate::types::Attributes;

/// Value kind of a field; decides how draft text becomes an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, stored as-is.
    Text,
    /// Whole number, parsed from the draft at submit time.
    Integer,
    /// `true` / `false`.
    Boolean,
}

impl FieldKind {
    /// Converts draft text into an attribute value.
    ///
    /// Returns `None` when the text is not a valid value of this kind.
    pub fn parse(self, raw: &str) -> Option<Value> {
        match self {
            FieldKind::Text => Some(Value::String(raw.to_string())),
            FieldKind::Integer => raw.trim().parse::<i64>().ok().map(Value::from),
            FieldKind::Boolean => match raw.trim() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },
        }
    }

    /// Renders an attribute value back into draft text.
    pub fn render(self, value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    /// Short human-readable description, used in validation messages.
    pub fn describe(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "a whole number",
            FieldKind::Boolean => "true or false",
        }
    }
}

/// When a field must be non-empty for a draft to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requirement {
    /// May be left empty.
    #[default]
    Optional,
    /// Must be filled in for both new and edited records.
    Always,
    /// Must be filled in when creating; may stay empty when editing.
    OnCreate,
}

impl Requirement {
    /// Returns `true` if the field must be non-empty in the given mode.
    pub fn is_required(self, creating: bool) -> bool {
        match self {
            Requirement::Optional => false,
            Requirement::Always => true,
            Requirement::OnCreate => creating,
        }
    }
}

/// Description of one editable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Attribute name, as serialized on the record.
    pub name: &'static str,
    /// Label shown next to the input.
    pub label: &'static str,
    /// Value kind.
    pub kind: FieldKind,
    /// Required flag.
    pub requirement: Requirement,
    /// Draft text used when a form is opened for a new record.
    pub default: &'static str,
    /// Whether the value is copied onto the record; draft-only fields
    /// (a password) are validated but never stored.
    pub stored: bool,
}

impl FieldSpec {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            requirement: Requirement::Optional,
            default: "",
            stored: true,
        }
    }

    /// An optional text field.
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// An optional integer field.
    pub fn integer(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Integer)
    }

    /// An optional boolean field.
    pub fn boolean(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Boolean)
    }

    /// Marks the field as always required.
    pub fn required(mut self) -> Self {
        self.requirement = Requirement::Always;
        self
    }

    /// Marks the field as required only when creating a record.
    pub fn required_on_create(mut self) -> Self {
        self.requirement = Requirement::OnCreate;
        self
    }

    /// Sets the draft default.
    pub fn with_default(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }

    /// Keeps the field in the draft only; it never reaches the record.
    pub fn draft_only(mut self) -> Self {
        self.stored = false;
        self
    }
}

/// Schema of one entity kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    kind: &'static str,
    fields: Vec<FieldSpec>,
    insert_defaults: Attributes,
}

impl Schema {
    /// Creates an empty schema for the given kind name.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            fields: Vec::new(),
            insert_defaults: Attributes::new(),
        }
    }

    /// Appends an editable field.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Adds an attribute every freshly inserted record starts with.
    pub fn insert_default(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert_defaults.insert(name.to_string(), value.into());
        self
    }

    /// Kind name (`"client"`, `"project"`, ...).
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Editable fields in display order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn field_named(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Attributes applied to a record on insert before the caller's values.
    pub fn insert_defaults(&self) -> &Attributes {
        &self.insert_defaults
    }
}
