//! A list screen: one store, its search box, and its create/edit dialog.

use std::fmt;

use stroy_core::{Entity, EntityId, Error, Result};
use stroy_form::{FormController, FormMode};
use stroy_query::ListFilter;
use stroy_store::EntityStore;

use crate::entities::CrmEntity;

/// One visible line of a list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Record identifier
    pub id: EntityId,
    /// Rendered record
    pub summary: String,
    /// Whether the delete action is enabled
    pub deletable: bool,
}

/// One line of an open form: label, field name, current draft text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLine {
    /// Field label
    pub label: &'static str,
    /// Attribute name accepted by `set_field`
    pub name: &'static str,
    /// Draft text
    pub value: String,
    /// Whether the field must be filled in the current mode
    pub required: bool,
}

/// Kind-erased operations of a list screen, driven by the shell.
pub trait ListScreen {
    /// Entity kind shown.
    fn kind(&self) -> &'static str;

    /// Current search query.
    fn query(&self) -> &str;

    /// Replaces the search query.
    fn set_query(&mut self, query: &str);

    /// Records matching the query, in store order.
    fn rows(&self) -> Vec<Row>;

    /// Total number of records, ignoring the query.
    fn total(&self) -> usize;

    /// Opens the create dialog.
    fn open_create(&mut self);

    /// Opens the edit dialog for `id`.
    fn open_edit(&mut self, id: EntityId) -> Result<()>;

    /// Edits one draft field.
    fn set_field(&mut self, name: &str, value: &str) -> Result<()>;

    /// Commits the dialog, returning the committed record's identifier.
    fn submit(&mut self) -> Result<EntityId>;

    /// Closes the dialog without committing.
    fn cancel(&mut self);

    /// Deletes a record; `Ok(false)` if it did not exist.
    fn delete(&mut self, id: EntityId) -> Result<bool>;

    /// Current dialog state.
    fn form_mode(&self) -> FormMode;

    /// Lines of the open dialog in display order.
    fn form_lines(&self) -> Vec<FormLine>;
}

/// A mounted list screen for entity kind `T`.
pub struct EntityScreen<T: CrmEntity> {
    store: EntityStore<T>,
    form: FormController<T>,
    filter: ListFilter<T>,
    query: String,
}

impl<T: CrmEntity> EntityScreen<T> {
    /// Mounts a screen over `store` with an empty query and a closed form.
    pub fn new(store: EntityStore<T>) -> Self {
        Self {
            store,
            form: FormController::new(),
            filter: ListFilter::new(T::search_fields()),
            query: String::new(),
        }
    }

    /// Mounts a screen over an unguarded store holding `records`.
    pub fn seeded(records: Vec<T>) -> Self {
        Self::new(EntityStore::with_records(records))
    }

    /// The underlying store.
    pub fn store(&self) -> &EntityStore<T> {
        &self.store
    }

    /// The create/edit dialog.
    pub fn form(&self) -> &FormController<T> {
        &self.form
    }

    /// Records matching the current query.
    pub fn visible(&self) -> Vec<&T> {
        self.filter.apply(self.store.records(), &self.query)
    }

    /// Commits the dialog and returns the committed record.
    ///
    /// If the edited record vanished while the dialog was open, the dialog
    /// is closed and the `NotFound` error is still returned.
    pub fn submit_record(&mut self) -> Result<T> {
        match self.form.submit(&mut self.store) {
            Err(err @ Error::NotFound { .. }) => {
                log::warn!("Closing {} form: {err}", T::KIND);
                self.form.cancel();
                Err(err)
            }
            other => other,
        }
    }
}

impl<T: CrmEntity> ListScreen for EntityScreen<T> {
    fn kind(&self) -> &'static str {
        T::KIND
    }

    fn query(&self) -> &str {
        &self.query
    }

    fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    fn rows(&self) -> Vec<Row> {
        self.visible()
            .into_iter()
            .map(|record| Row {
                id: record.id(),
                summary: record.summary(),
                deletable: self.store.can_delete(record.id()),
            })
            .collect()
    }

    fn total(&self) -> usize {
        self.store.len()
    }

    fn open_create(&mut self) {
        self.form.open_for_create();
    }

    fn open_edit(&mut self, id: EntityId) -> Result<()> {
        let record = self
            .store
            .get(id)
            .ok_or_else(|| Error::not_found(T::KIND, id))?;
        self.form.open_for_edit(record)
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        self.form.set_field(name, value)
    }

    fn submit(&mut self) -> Result<EntityId> {
        self.submit_record().map(|record| record.id())
    }

    fn cancel(&mut self) {
        self.form.cancel();
    }

    fn delete(&mut self, id: EntityId) -> Result<bool> {
        Ok(self.store.delete(id)?.is_some())
    }

    fn form_mode(&self) -> FormMode {
        self.form.mode()
    }

    fn form_lines(&self) -> Vec<FormLine> {
        let creating = self.form.mode() == FormMode::Create;
        self.form
            .entries()
            .into_iter()
            .map(|(spec, value)| FormLine {
                label: spec.label,
                name: spec.name,
                value: value.to_string(),
                required: spec.requirement.is_required(creating),
            })
            .collect()
    }
}

impl<T: CrmEntity> fmt::Debug for EntityScreen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityScreen")
            .field("kind", &T::KIND)
            .field("records", &self.store.len())
            .field("query", &self.query)
            .field("form", &self.form.mode())
            .finish()
    }
}
