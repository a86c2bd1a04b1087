//! Clients.

use serde::{Deserialize, Serialize};
use stroy_core::{Entity, EntityId, FieldSpec, Schema, initials};
use stroy_query::FieldSelector;

use super::CrmEntity;

/// A customer of the company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Identifier
    pub id: EntityId,
    /// Contact person
    pub name: String,
    /// Company name
    pub company: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Number of projects with this client
    pub projects: i64,
    /// Total contract value, as displayed (`"45М ₽"`)
    pub total_value: String,
}

impl Client {
    /// Contact person's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Company name.
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Email address.
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl Entity for Client {
    const KIND: &'static str = "client";

    fn schema() -> Schema {
        Schema::new(Self::KIND)
            .field(FieldSpec::text("name", "Имя").required())
            .field(FieldSpec::text("company", "Компания").required())
            .field(FieldSpec::text("email", "Email").required())
            .field(FieldSpec::text("phone", "Телефон").required())
            .insert_default("projects", 0)
            .insert_default("total_value", "0 ₽")
    }

    fn id(&self) -> EntityId {
        self.id
    }
}

impl CrmEntity for Client {
    fn search_fields() -> Vec<FieldSelector<Self>> {
        vec![Client::name, Client::company, Client::email]
    }

    fn summary(&self) -> String {
        format!(
            "[{}] {} · {} · {} · {} · проектов: {} · {}",
            initials(&self.name),
            self.name,
            self.company,
            self.email,
            self.phone,
            self.projects,
            self.total_value
        )
    }
}
