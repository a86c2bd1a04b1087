//! Integer identifiers for stored records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a record within one store.
///
/// Identifiers are positive integers local to a single entity kind. The store
/// allocates them; callers only ever read them back.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates an identifier from its raw value.
    ///
    /// # Examples
    ///
    /// ```
    /// use stroy_core::EntityId;
    ///
    /// let id = EntityId::new(3);
    /// assert_eq!(id.get(), 3);
    /// assert_eq!(id.to_string(), "3");
    /// ```
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one, or `None` past
    /// `u64::MAX`.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for EntityId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<EntityId> for u64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl std::str::FromStr for EntityId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_default_is_zero() {
        assert_eq!(EntityId::default().get(), 0);
    }

    #[test]
    fn test_entity_id_next() {
        assert_eq!(EntityId::new(4).next(), Some(EntityId::new(5)));
        assert_eq!(EntityId::default().next(), Some(EntityId::new(1)));
        assert_eq!(EntityId::new(u64::MAX).next(), None);
    }

    #[test]
    fn test_entity_id_ordering() {
        assert!(EntityId::new(2) < EntityId::new(10));
    }

    #[test]
    fn test_entity_id_serializes_as_integer() {
        let json = serde_json::to_string(&EntityId::new(42)).unwrap();
        assert_eq!(json, "42");
        let back: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EntityId::new(42));
    }

    #[test]
    fn test_entity_id_from_str() {
        let id: EntityId = " 12 ".parse().unwrap();
        assert_eq!(id.get(), 12);
        assert!("twelve".parse::<EntityId>().is_err());
    }
}
