//! The ordered in-memory entity store.

use std::fmt;

use stroy_core::entity::{build_record, merge_record};
use stroy_core::{Attributes, Entity, EntityId, Error, Result};

use crate::guard::DeletionGuard;

/// Ordered collection of records of one entity kind, keyed by identifier.
///
/// Records are kept in insertion order; updates keep a record's position.
/// Every mutation runs to completion before returning, and [`list`] returns
/// an owned snapshot, so callers re-read after mutating.
///
/// [`list`]: EntityStore::list
pub struct EntityStore<T: Entity> {
    records: Vec<T>,
    /// Largest identifier this store has ever held.
    high_water: EntityId,
    guard: Option<Box<dyn DeletionGuard<T>>>,
}

impl<T: Entity> EntityStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            high_water: EntityId::default(),
            guard: None,
        }
    }

    /// Creates a store seeded with existing records, kept in the given order.
    pub fn with_records(records: Vec<T>) -> Self {
        let high_water = records
            .iter()
            .map(T::id)
            .max()
            .unwrap_or_default();
        Self {
            records,
            high_water,
            guard: None,
        }
    }

    /// Installs the guard consulted before every deletion.
    pub fn with_guard(mut self, guard: impl DeletionGuard<T> + 'static) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    /// Identifier the next insert will receive.
    ///
    /// Fails with [`Error::IdsExhausted`] once `u64::MAX` has been handed out.
    pub fn next_id(&self) -> Result<EntityId> {
        let current_max = self
            .records
            .iter()
            .map(T::id)
            .max()
            .unwrap_or_default();
        let last = current_max.max(self.high_water);
        last.next().ok_or(Error::IdsExhausted { kind: T::KIND, last })
    }

    /// Appends a new record built from the kind's insert defaults and
    /// `attributes`, returning it.
    pub fn insert(&mut self, attributes: &Attributes) -> Result<T> {
        let id = self.next_id()?;
        let record: T = build_record(id, attributes)?;
        self.high_water = id;
        self.records.push(record.clone());
        log::debug!("Inserted {} {id}", T::KIND);
        Ok(record)
    }

    /// Replaces the supplied attributes of the record with identifier `id`.
    ///
    /// The identifier and position of the record never change. Fails with
    /// [`Error::ProtectedEntity`], leaving the record untouched, when the
    /// guard refuses the replacement.
    pub fn update(&mut self, id: EntityId, attributes: &Attributes) -> Result<T> {
        let index = self
            .position(id)
            .ok_or_else(|| Error::not_found(T::KIND, id))?;
        let updated = merge_record(&self.records[index], attributes)?;
        if let Some(guard) = &self.guard
            && let Err(reason) = guard.check_replace(&self.records[index], &updated, &self.records)
        {
            log::warn!("Refused to update {} {id}: {reason}", T::KIND);
            return Err(Error::protected(T::KIND, id, reason));
        }
        self.records[index] = updated.clone();
        log::debug!("Updated {} {id}", T::KIND);
        Ok(updated)
    }

    /// Removes the record with identifier `id`.
    ///
    /// Returns the removed record, or `None` if no such record exists.
    /// Fails with [`Error::ProtectedEntity`] when the deletion guard refuses.
    pub fn delete(&mut self, id: EntityId) -> Result<Option<T>> {
        let Some(index) = self.position(id) else {
            log::debug!("Delete of absent {} {id} ignored", T::KIND);
            return Ok(None);
        };
        if let Err(reason) = self.check_guard(&self.records[index]) {
            log::warn!("Refused to delete {} {id}: {reason}", T::KIND);
            return Err(Error::protected(T::KIND, id, reason));
        }
        let removed = self.records.remove(index);
        log::debug!("Deleted {} {id}", T::KIND);
        Ok(Some(removed))
    }

    /// Returns `true` if `id` exists and the deletion guard would allow
    /// removing it.
    pub fn can_delete(&self, id: EntityId) -> bool {
        self.get(id)
            .is_some_and(|record| self.check_guard(record).is_ok())
    }

    /// Snapshot of all records in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Borrowed view of all records in insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Looks up a record by identifier.
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn check_guard(&self, record: &T) -> std::result::Result<(), String> {
        match &self.guard {
            Some(guard) => guard.check(record, &self.records),
            None => Ok(()),
        }
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> fmt::Debug for EntityStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityStore")
            .field("kind", &T::KIND)
            .field("records", &self.records)
            .field("high_water", &self.high_water)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}
