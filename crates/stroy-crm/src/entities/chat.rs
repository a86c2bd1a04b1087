//! Chat contacts and messages.

use std::fmt;

use serde::{Deserialize, Serialize};
use stroy_core::{Entity, EntityId, FieldSpec, Schema, initials};
use stroy_query::FieldSelector;

use super::CrmEntity;

/// A person the user chats with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatContact {
    /// Identifier
    pub id: EntityId,
    /// Display name
    pub name: String,
    /// Preview of the latest message
    pub last_message: String,
    /// When the latest message arrived, as displayed
    pub time: String,
    /// Unread message count
    pub unread: i64,
    /// Presence flag
    pub online: bool,
}

impl ChatContact {
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for ChatContact {
    const KIND: &'static str = "contact";

    fn schema() -> Schema {
        Schema::new(Self::KIND)
            .field(FieldSpec::text("name", "Имя").required())
            .field(FieldSpec::text("last_message", "Последнее сообщение"))
            .field(FieldSpec::text("time", "Время"))
            .field(FieldSpec::integer("unread", "Непрочитано").with_default("0"))
            .field(FieldSpec::boolean("online", "В сети").with_default("false"))
    }

    fn id(&self) -> EntityId {
        self.id
    }
}

impl CrmEntity for ChatContact {
    fn search_fields() -> Vec<FieldSelector<Self>> {
        vec![ChatContact::name]
    }

    fn summary(&self) -> String {
        let presence = if self.online { "●" } else { "○" };
        let mut line = format!(
            "{presence} [{}] {} · {} · {}",
            initials(&self.name),
            self.name,
            self.time,
            self.last_message
        );
        if self.unread > 0 {
            line.push_str(&format!(" ({})", self.unread));
        }
        line
    }
}

/// Which side of the conversation wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The local user
    Me,
    /// The contact
    Other,
}

impl Sender {
    /// Wire name (`"me"` / `"other"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::Me => "me",
            Sender::Other => "other",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message in a contact's thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Identifier
    pub id: EntityId,
    /// Contact whose thread holds the message
    pub contact_id: EntityId,
    /// Author side
    pub sender: Sender,
    /// Message body
    pub text: String,
    /// Send time (`HH:MM`)
    pub time: String,
}

impl Entity for ChatMessage {
    const KIND: &'static str = "message";

    fn schema() -> Schema {
        Schema::new(Self::KIND)
            .field(FieldSpec::integer("contact_id", "Контакт").required())
            .field(FieldSpec::text("sender", "Отправитель").required())
            .field(FieldSpec::text("text", "Текст").required())
            .field(FieldSpec::text("time", "Время").required())
    }

    fn id(&self) -> EntityId {
        self.id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use stroy_core::Attributes;
    use stroy_core::entity::build_record;

    #[test]
    fn test_sender_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Sender::Me).unwrap(), "me");
        assert_eq!(Sender::Other.to_string(), "other");
    }

    #[test]
    fn test_message_from_attributes() {
        let mut attrs = Attributes::new();
        attrs.insert("contact_id".into(), 2.into());
        attrs.insert("sender".into(), "me".into());
        attrs.insert("text".into(), "Привет".into());
        attrs.insert("time".into(), "09:05".into());
        let message: ChatMessage = build_record(EntityId::new(1), &attrs).unwrap();
        assert_eq!(message.contact_id, EntityId::new(2));
        assert_eq!(message.sender, Sender::Me);
    }

    #[test]
    fn test_contact_summary_shows_unread() {
        let contact = ChatContact {
            id: EntityId::new(1),
            name: "Мария Сидорова".into(),
            last_message: "Нужно обсудить изменения".into(),
            time: "Вчера".into(),
            unread: 1,
            online: true,
        };
        let line = contact.summary();
        assert!(line.starts_with("● [МС]"));
        assert!(line.ends_with("(1)"));
    }
}
