//! The create/edit form state machine.

use std::fmt;
use std::marker::PhantomData;

use stroy_core::entity::record_attributes;
use stroy_core::{Attributes, Entity, EntityId, Error, FieldKind, FieldSpec, Result, Schema};
use stroy_store::EntityStore;

use crate::draft::Draft;

/// Which dialog, if any, the form is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// No dialog is open.
    #[default]
    Closed,
    /// Creating a new record.
    Create,
    /// Editing the record with this identifier.
    Edit(EntityId),
}

impl FormMode {
    /// Returns `true` for `Create` and `Edit`.
    pub fn is_open(&self) -> bool {
        !matches!(self, FormMode::Closed)
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormMode::Closed => write!(f, "closed"),
            FormMode::Create => write!(f, "create"),
            FormMode::Edit(id) => write!(f, "edit {id}"),
        }
    }
}

/// Draft holder for one entity kind's create/edit dialog.
///
/// The controller never owns a store; the screen that owns both passes its
/// store to [`submit`](FormController::submit), so every commit lands in the
/// store the form was opened against.
pub struct FormController<T: Entity> {
    schema: Schema,
    mode: FormMode,
    draft: Draft,
    _kind: PhantomData<fn() -> T>,
}

impl<T: Entity> FormController<T> {
    /// Creates a closed form for `T`.
    pub fn new() -> Self {
        let schema = T::schema();
        let draft = Draft::from_defaults(&schema);
        Self {
            schema,
            mode: FormMode::Closed,
            draft,
            _kind: PhantomData,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Returns `true` while a dialog is open.
    pub fn is_open(&self) -> bool {
        self.mode.is_open()
    }

    /// Identifier of the record being edited, if any.
    pub fn editing(&self) -> Option<EntityId> {
        match self.mode {
            FormMode::Edit(id) => Some(id),
            _ => None,
        }
    }

    /// The kind's schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The current draft.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Draft values paired with their field specs, in schema order.
    pub fn entries(&self) -> Vec<(&FieldSpec, &str)> {
        self.schema
            .fields()
            .iter()
            .map(|spec| (spec, self.draft.get(spec.name).unwrap_or_default()))
            .collect()
    }

    /// Opens the dialog for a new record with an empty-defaults draft.
    pub fn open_for_create(&mut self) {
        self.draft = Draft::from_defaults(&self.schema);
        self.mode = FormMode::Create;
        log::debug!("Opened {} form for create", T::KIND);
    }

    /// Opens the dialog for `record`, seeding the draft from its attributes.
    ///
    /// Draft-only fields start empty; the identifier is never part of the
    /// draft.
    pub fn open_for_edit(&mut self, record: &T) -> Result<()> {
        let attributes = record_attributes(record)?;
        let mut draft = Draft::default();
        for spec in self.schema.fields() {
            let text = match attributes.get(spec.name) {
                Some(value) if spec.stored => spec.kind.render(value),
                _ => String::new(),
            };
            draft.set(spec.name, text);
        }
        self.draft = draft;
        self.mode = FormMode::Edit(record.id());
        log::debug!("Opened {} form for edit of {}", T::KIND, record.id());
        Ok(())
    }

    /// Replaces the text of one draft field.
    ///
    /// The value is not validated until [`submit`](Self::submit).
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        if !self.is_open() {
            return Err(Error::FormClosed);
        }
        let spec = self
            .schema
            .field_named(name)
            .ok_or_else(|| Error::unknown_field(T::KIND, name))?;
        self.draft.set(spec.name, value.into());
        Ok(())
    }

    /// Checks the draft and converts it to stored attributes.
    ///
    /// Fields are examined in schema order; the first empty required field or
    /// unparsable value is reported.
    pub fn validate(&self) -> Result<Attributes> {
        let creating = match self.mode {
            FormMode::Closed => return Err(Error::FormClosed),
            FormMode::Create => true,
            FormMode::Edit(_) => false,
        };

        let mut attributes = Attributes::new();
        for spec in self.schema.fields() {
            let raw = self.draft.get(spec.name).unwrap_or_default();
            if self.draft.is_blank(spec.name) {
                if spec.requirement.is_required(creating) {
                    return Err(Error::missing_field(spec.name));
                }
                if spec.stored && spec.kind == FieldKind::Text {
                    attributes.insert(spec.name.to_string(), "".into());
                }
                continue;
            }
            let value = spec.kind.parse(raw).ok_or_else(|| {
                Error::validation_field(spec.name, format!("must be {}", spec.kind.describe()))
            })?;
            if spec.stored {
                attributes.insert(spec.name.to_string(), value);
            }
        }
        Ok(attributes)
    }

    /// Validates the draft and commits it to `store`.
    ///
    /// In `Create` mode the draft is inserted; in `Edit` mode it replaces the
    /// edited record's attributes. On success the form closes and the draft
    /// resets. On any error the form and the store are left as they were.
    pub fn submit(&mut self, store: &mut EntityStore<T>) -> Result<T> {
        let attributes = self.validate()?;
        let record = match self.mode {
            FormMode::Create => store.insert(&attributes)?,
            FormMode::Edit(id) => store.update(id, &attributes)?,
            FormMode::Closed => return Err(Error::FormClosed),
        };
        log::debug!("Committed {} form for {}", T::KIND, record.id());
        self.close();
        Ok(record)
    }

    /// Closes the dialog, discarding the draft.
    pub fn cancel(&mut self) {
        if self.is_open() {
            log::debug!("Cancelled {} form ({})", T::KIND, self.mode);
        }
        self.close();
    }

    fn close(&mut self) {
        self.mode = FormMode::Closed;
        self.draft = Draft::from_defaults(&self.schema);
    }
}

impl<T: Entity> Default for FormController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> fmt::Debug for FormController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("kind", &T::KIND)
            .field("mode", &self.mode)
            .field("draft", &self.draft)
            .finish()
    }
}
