//! Construction projects.

use serde::{Deserialize, Serialize};
use stroy_core::{Entity, EntityId, FieldSpec, Schema};
use stroy_query::FieldSelector;

use super::CrmEntity;

/// Status a new project starts in.
pub const STATUS_IN_PROGRESS: &str = "В работе";

/// Status of a suspended project.
pub const STATUS_PAUSED: &str = "На паузе";

/// Status of a finished project.
pub const STATUS_COMPLETED: &str = "Завершен";

/// Statuses offered by the project form.
pub const STATUSES: [&str; 3] = [STATUS_IN_PROGRESS, STATUS_PAUSED, STATUS_COMPLETED];

/// A construction project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Identifier
    pub id: EntityId,
    /// Project name
    pub name: String,
    /// Client label; free text, not a reference to a client record
    pub client: String,
    /// Workflow status
    pub status: String,
    /// Budget, as displayed (`"15М ₽"`)
    pub budget: String,
    /// Completion percentage
    pub progress: i64,
    /// Start date (`YYYY-MM-DD`)
    pub start_date: String,
    /// Planned end date (`YYYY-MM-DD`)
    pub end_date: String,
    /// Team size
    pub team: i64,
    /// Free-form description
    #[serde(default)]
    pub description: String,
}

impl Project {
    /// Project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Client label.
    pub fn client(&self) -> &str {
        &self.client
    }
}

impl Entity for Project {
    const KIND: &'static str = "project";

    fn schema() -> Schema {
        Schema::new(Self::KIND)
            .field(FieldSpec::text("name", "Название проекта").required())
            .field(FieldSpec::text("client", "Клиент").required())
            .field(
                FieldSpec::text("status", "Статус")
                    .required()
                    .with_default(STATUS_IN_PROGRESS),
            )
            .field(FieldSpec::text("budget", "Бюджет").required())
            .field(FieldSpec::text("start_date", "Дата начала").required())
            .field(FieldSpec::text("end_date", "Дата окончания").required())
            .field(FieldSpec::integer("team", "Размер команды").required())
            .field(FieldSpec::text("description", "Описание"))
            .insert_default("progress", 0)
    }

    fn id(&self) -> EntityId {
        self.id
    }
}

impl CrmEntity for Project {
    fn search_fields() -> Vec<FieldSelector<Self>> {
        vec![Project::name, Project::client]
    }

    fn summary(&self) -> String {
        format!(
            "{} · {} · {} · {}% · {} · {} – {} · команда: {}",
            self.name,
            self.client,
            self.status,
            self.progress,
            self.budget,
            self.start_date,
            self.end_date,
            self.team
        )
    }
}
