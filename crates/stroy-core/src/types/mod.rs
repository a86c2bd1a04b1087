//! Core types for StroyCRM records.

mod ids;
mod proptests;
mod schema;

pub use ids::EntityId;
pub use schema::{FieldKind, FieldSpec, Requirement, Schema};

/// Named attribute values of a record, keyed by field name.
///
/// Values are JSON scalars (strings, numbers, booleans).
pub type Attributes = serde_json::Map<String, serde_json::Value>;
