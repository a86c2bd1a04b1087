//! The chat screen: contact list, selection, and a local-echo thread.
//!
//! Nothing leaves the process. Sent messages are appended to the selected
//! contact's thread and are gone once the screen is unmounted.

use chrono::{Local, NaiveTime};
use stroy_core::{Attributes, Entity, EntityId, Error, Result};
use stroy_query::ListFilter;
use stroy_store::EntityStore;

use crate::entities::{ChatContact, ChatMessage, CrmEntity, Sender};

/// A mounted chat screen.
#[derive(Debug)]
pub struct ChatRoom {
    contacts: EntityStore<ChatContact>,
    messages: EntityStore<ChatMessage>,
    filter: ListFilter<ChatContact>,
    query: String,
    selected: Option<EntityId>,
}

impl ChatRoom {
    /// Mounts the room; the first contact starts selected.
    pub fn new(contacts: Vec<ChatContact>, messages: Vec<ChatMessage>) -> Self {
        let selected = contacts.first().map(ChatContact::id);
        Self {
            contacts: EntityStore::with_records(contacts),
            messages: EntityStore::with_records(messages),
            filter: ListFilter::new(ChatContact::search_fields()),
            query: String::new(),
            selected,
        }
    }

    /// Current contact search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the contact search query.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Contacts whose name matches the query.
    pub fn visible_contacts(&self) -> Vec<&ChatContact> {
        self.filter.apply(self.contacts.records(), &self.query)
    }

    /// Selects a contact; the selection may be hidden by the query.
    pub fn select(&mut self, id: EntityId) -> Result<&ChatContact> {
        let contact = self
            .contacts
            .get(id)
            .ok_or_else(|| Error::not_found(ChatContact::KIND, id))?;
        self.selected = Some(id);
        Ok(contact)
    }

    /// The selected contact, if any.
    pub fn selected(&self) -> Option<&ChatContact> {
        self.selected.and_then(|id| self.contacts.get(id))
    }

    /// Messages of the selected contact's thread, oldest first.
    pub fn thread(&self) -> Vec<&ChatMessage> {
        match self.selected {
            Some(id) => self
                .messages
                .records()
                .iter()
                .filter(|m| m.contact_id == id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Sends `text` to the selected contact, stamped with the local time.
    ///
    /// Blank text is ignored and yields `Ok(None)`.
    pub fn send(&mut self, text: &str) -> Result<Option<ChatMessage>> {
        self.send_at(text, Local::now().time())
    }

    /// Sends `text` to the selected contact, stamped with `at`.
    pub fn send_at(&mut self, text: &str, at: NaiveTime) -> Result<Option<ChatMessage>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        let Some(contact_id) = self.selected else {
            return Ok(None);
        };

        let mut attributes = Attributes::new();
        attributes.insert("contact_id".into(), contact_id.get().into());
        attributes.insert("sender".into(), Sender::Me.as_str().into());
        attributes.insert("text".into(), text.into());
        attributes.insert("time".into(), at.format("%H:%M").to_string().into());
        let message = self.messages.insert(&attributes)?;
        log::debug!("Sent message {} to contact {contact_id}", message.id);
        Ok(Some(message))
    }
}
