//! Deletion guards.
//!
//! A [`DeletionGuard`] is consulted before a record leaves an
//! [`EntityStore`](crate::EntityStore), either by deletion or by an update
//! that turns it into a different kind of record. It sees the affected record
//! and the store's full contents, and either allows the change or returns the
//! reason it refuses.

use std::fmt;

/// Veto over record deletion, supplied when a store is built.
pub trait DeletionGuard<T>: Send + Sync {
    /// Returns `Err(reason)` if `target` must not be removed from `records`.
    ///
    /// `records` includes `target` itself.
    fn check(&self, target: &T, records: &[T]) -> Result<(), String>;

    /// Returns `Err(reason)` if `current` must not be replaced by `updated`.
    ///
    /// `records` still holds `current`. Allows every update by default.
    fn check_replace(&self, current: &T, updated: &T, records: &[T]) -> Result<(), String> {
        let _ = (current, updated, records);
        Ok(())
    }
}

impl<T, F> DeletionGuard<T> for F
where
    F: Fn(&T, &[T]) -> Result<(), String> + Send + Sync,
{
    fn check(&self, target: &T, records: &[T]) -> Result<(), String> {
        self(target, records)
    }
}

/// Protects the last record matching a predicate.
///
/// Records that do not match are always deletable; a matching record is
/// deletable only while another matching record remains. The same holds for
/// updates after which a matching record no longer matches.
///
/// ```
/// use stroy_store::{DeletionGuard, LastMatching};
///
/// let guard = LastMatching::new(|role: &&str| *role == "admin", "last admin");
/// assert!(guard.check(&"admin", &["admin", "user"]).is_err());
/// assert!(guard.check(&"admin", &["admin", "admin"]).is_ok());
/// assert!(guard.check(&"user", &["admin", "user"]).is_ok());
/// ```
pub struct LastMatching<T> {
    predicate: fn(&T) -> bool,
    reason: String,
}

impl<T> LastMatching<T> {
    /// Creates a guard protecting the final record for which `predicate` holds.
    pub fn new(predicate: fn(&T) -> bool, reason: impl Into<String>) -> Self {
        Self {
            predicate,
            reason: reason.into(),
        }
    }
}

impl<T> DeletionGuard<T> for LastMatching<T> {
    fn check(&self, target: &T, records: &[T]) -> Result<(), String> {
        if !(self.predicate)(target) {
            return Ok(());
        }
        let matching = records.iter().filter(|r| (self.predicate)(r)).count();
        if matching <= 1 {
            Err(self.reason.clone())
        } else {
            Ok(())
        }
    }

    fn check_replace(&self, current: &T, updated: &T, records: &[T]) -> Result<(), String> {
        if (self.predicate)(updated) {
            return Ok(());
        }
        self.check(current, records)
    }
}

impl<T> fmt::Debug for LastMatching<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LastMatching")
            .field("reason", &self.reason)
            .finish()
    }
}
