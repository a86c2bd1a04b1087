//! Common test utilities for StroyCRM integration tests.

use stroy_core::EntityId;
use stroy_crm::{ListScreen, Settings, ViewId, Workspace};

/// Test harness wrapping a workspace mounted on one view.
pub struct TestHarness {
    /// The workspace under test
    pub workspace: Workspace,
}

impl TestHarness {
    /// Creates a harness with default settings, mounted on `view`.
    pub fn on(view: ViewId) -> Self {
        Self {
            workspace: Workspace::new(view, Settings::default()),
        }
    }

    /// The mounted list screen.
    pub fn list(&mut self) -> &mut dyn ListScreen {
        self.workspace
            .list_screen_mut()
            .expect("view should have a list screen")
    }

    /// Fills the open dialog from `(field, value)` pairs.
    pub fn fill(&mut self, fields: &[(&str, &str)]) {
        let screen = self.list();
        for (name, value) in fields {
            screen
                .set_field(name, value)
                .unwrap_or_else(|e| panic!("set_field({name}) failed: {e}"));
        }
    }

    /// Identifiers of the visible rows.
    pub fn visible_ids(&mut self) -> Vec<u64> {
        self.list().rows().iter().map(|r| r.id.get()).collect()
    }
}

/// Shorthand for an identifier.
pub fn id(raw: u64) -> EntityId {
    EntityId::new(raw)
}

/// A complete, valid project draft.
pub fn project_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Склад \"Логистик\""),
        ("client", "ООО \"Стройком\""),
        ("budget", "9М ₽"),
        ("start_date", "2025-03-01"),
        ("end_date", "2025-10-01"),
        ("team", "8"),
    ]
}
