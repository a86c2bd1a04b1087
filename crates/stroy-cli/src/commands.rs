//! One-shot commands over freshly seeded data.

use stroy_crm::{DashboardSummary, EntityScreen, ListScreen, User, seed};

use crate::cli::ListKind;
use crate::render;

/// Mounts the seeded screen for `kind`.
fn mount(kind: ListKind) -> Box<dyn ListScreen> {
    match kind {
        ListKind::Clients => Box::new(EntityScreen::seeded(seed::clients())),
        ListKind::Projects => Box::new(EntityScreen::seeded(seed::projects())),
        ListKind::Users => Box::new(EntityScreen::new(User::store(seed::users()))),
        ListKind::Contacts => Box::new(EntityScreen::seeded(seed::contacts())),
    }
}

/// Lines printed by `stroycrm list`.
pub fn list_output(kind: ListKind, query: Option<&str>) -> Vec<String> {
    let mut screen = mount(kind);
    if let Some(query) = query {
        screen.set_query(query);
    }
    render::list_lines(screen.as_ref())
}

/// Lines printed by `stroycrm dashboard`.
pub fn dashboard_output() -> Vec<String> {
    DashboardSummary::seeded().render()
}

/// Handle `stroycrm list`.
pub fn cmd_list(kind: ListKind, query: Option<&str>) -> anyhow::Result<()> {
    tracing::debug!(?kind, query, "Listing records");
    for line in list_output(kind, query) {
        println!("{line}");
    }
    Ok(())
}

/// Handle `stroycrm dashboard`.
pub fn cmd_dashboard() -> anyhow::Result<()> {
    for line in dashboard_output() {
        println!("{line}");
    }
    Ok(())
}
