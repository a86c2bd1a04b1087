//! The [`Entity`] trait and conversions between records and attribute maps.
//!
//! Records are plain serde structs. The generic store and form controller
//! never touch their fields directly; they go through the attribute map
//! produced by serializing the record, which lets one implementation of
//! insert/update/edit serve every entity kind.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::types::{Attributes, EntityId, Schema};

/// Name of the identifier attribute on every serialized record.
pub const ID_FIELD: &str = "id";

/// A record kind that can live in an entity store.
///
/// Implementors serialize to a flat JSON object whose `id` attribute is the
/// record's [`EntityId`].
pub trait Entity: Clone + std::fmt::Debug + Serialize + DeserializeOwned {
    /// Kind name used in errors and logs.
    const KIND: &'static str;

    /// The kind's schema.
    fn schema() -> Schema;

    /// The record's identifier.
    fn id(&self) -> EntityId;
}

/// Builds a new record from an identifier, the kind's insert defaults, and
/// caller-supplied attributes.
///
/// Caller attributes override insert defaults. An `id` attribute supplied by
/// the caller is ignored.
pub fn build_record<T: Entity>(id: EntityId, attributes: &Attributes) -> Result<T> {
    let mut object = T::schema().insert_defaults().clone();
    merge_into(&mut object, attributes);
    object.insert(ID_FIELD.to_string(), Value::from(id.get()));
    Ok(serde_json::from_value(Value::Object(object))?)
}

/// Returns a copy of `record` with every supplied attribute replaced.
///
/// Attributes not mentioned in `attributes` keep their current values; the
/// identifier is never replaced.
pub fn merge_record<T: Entity>(record: &T, attributes: &Attributes) -> Result<T> {
    let mut object = to_object(record)?;
    merge_into(&mut object, attributes);
    Ok(serde_json::from_value(Value::Object(object))?)
}

/// Returns every attribute of `record` except its identifier.
pub fn record_attributes<T: Entity>(record: &T) -> Result<Attributes> {
    let mut object = to_object(record)?;
    object.remove(ID_FIELD);
    Ok(object)
}

fn to_object<T: Entity>(record: &T) -> Result<Attributes> {
    match serde_json::to_value(record)? {
        Value::Object(object) => Ok(object),
        other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
            "{} did not serialize to an object: {other}",
            T::KIND
        ))
        .into()),
    }
}

fn merge_into(target: &mut Attributes, attributes: &Attributes) {
    for (name, value) in attributes {
        if name != ID_FIELD {
            target.insert(name.clone(), value.clone());
        }
    }
}
