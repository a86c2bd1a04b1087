//! The CRM's entity kinds.
//!
//! Each kind is a plain serde struct implementing [`Entity`] for the generic
//! store and form, plus [`CrmEntity`] for the list screens: which fields the
//! search box looks at and how a record reads as one line of a list.

pub mod chat;
pub mod client;
pub mod project;
pub mod user;

pub use chat::{ChatContact, ChatMessage, Sender};
pub use client::Client;
pub use project::Project;
pub use user::{ADMIN_ROLE, User};

use stroy_core::Entity;
use stroy_query::FieldSelector;

/// An entity kind shown on a searchable list screen.
pub trait CrmEntity: Entity {
    /// Fields the list's search box matches against.
    fn search_fields() -> Vec<FieldSelector<Self>>;

    /// One-line rendering for list output.
    fn summary(&self) -> String;
}
