//! System users managed from the admin panel.

use serde::{Deserialize, Serialize};
use stroy_core::{Entity, EntityId, FieldSpec, Schema, initials};
use stroy_query::FieldSelector;
use stroy_store::{EntityStore, LastMatching};

use super::CrmEntity;

/// Role that may administer the system.
pub const ADMIN_ROLE: &str = "Администратор";

/// Role a new user is offered by default.
pub const DEFAULT_ROLE: &str = "Менеджер";

/// Roles offered by the user form.
pub const ROLES: [&str; 4] = [ADMIN_ROLE, DEFAULT_ROLE, "Бухгалтер", "Прораб"];

/// A system user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier
    pub id: EntityId,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Role (one of [`ROLES`])
    pub role: String,
    /// Account status
    pub status: String,
    /// Last-seen text (`"5 минут назад"`)
    pub last_active: String,
}

impl User {
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Login email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns `true` for administrators.
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    /// Builds the user store, which refuses to delete or demote the last
    /// administrator.
    pub fn store(records: Vec<User>) -> EntityStore<User> {
        EntityStore::with_records(records).with_guard(LastMatching::new(
            User::is_admin,
            "at least one administrator must remain",
        ))
    }
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn schema() -> Schema {
        Schema::new(Self::KIND)
            .field(FieldSpec::text("name", "Имя").required())
            .field(FieldSpec::text("email", "Email").required())
            .field(FieldSpec::text("role", "Роль").required().with_default(DEFAULT_ROLE))
            .field(
                FieldSpec::text("password", "Пароль")
                    .required_on_create()
                    .draft_only(),
            )
            .insert_default("status", "Активен")
            .insert_default("last_active", "Только что")
    }

    fn id(&self) -> EntityId {
        self.id
    }
}

impl CrmEntity for User {
    fn search_fields() -> Vec<FieldSelector<Self>> {
        vec![User::name, User::email]
    }

    fn summary(&self) -> String {
        format!(
            "[{}] {} · {} · {} · {} · {}",
            initials(&self.name),
            self.name,
            self.email,
            self.role,
            self.status,
            self.last_active
        )
    }
}
