//! Text rendering of the mounted screen.

use stroy_crm::{
    AdminPanel, ChatRoom, CrmEntity, ListScreen, Screen, Settings, Switch, ViewId, Workspace,
};
use stroy_form::FormMode;

/// Lines for a list screen: header, query, rows.
pub fn list_lines(screen: &dyn ListScreen) -> Vec<String> {
    let rows = screen.rows();
    let mut lines = vec![format!("{} ({}/{})", screen.kind(), rows.len(), screen.total())];
    if !screen.query().is_empty() {
        lines.push(format!("поиск: \"{}\"", screen.query()));
    }
    if rows.is_empty() {
        lines.push("  (нет записей)".to_string());
    }
    for row in rows {
        let lock = if row.deletable { "" } else { " [защищено]" };
        lines.push(format!("  {:>3}. {}{lock}", row.id, row.summary));
    }
    lines
}

/// Lines for the open dialog, or nothing if it is closed.
pub fn form_lines(screen: &dyn ListScreen) -> Vec<String> {
    let title = match screen.form_mode() {
        FormMode::Closed => return Vec::new(),
        FormMode::Create => format!("Новый {}", screen.kind()),
        FormMode::Edit(id) => format!("Редактирование {} {id}", screen.kind()),
    };
    let mut lines = vec![title];
    for line in screen.form_lines() {
        let marker = if line.required { "*" } else { " " };
        lines.push(format!("  {marker} {} ({}): {}", line.label, line.name, line.value));
    }
    lines.push("  set <поле> <значение> | submit | cancel".to_string());
    lines
}

/// Lines for the chat screen.
pub fn chat_lines(room: &ChatRoom) -> Vec<String> {
    let selected = room.selected().map(|c| c.id);
    let mut lines = vec!["Сообщения".to_string()];
    if !room.query().is_empty() {
        lines.push(format!("поиск: \"{}\"", room.query()));
    }
    for contact in room.visible_contacts() {
        let cursor = if Some(contact.id) == selected { ">" } else { " " };
        lines.push(format!("{cursor} {:>3}. {}", contact.id, contact.summary()));
    }
    if let Some(contact) = room.selected() {
        lines.push(format!("-- {} --", contact.name));
        for message in room.thread() {
            lines.push(format!("  [{}] {}: {}", message.time, message.sender, message.text));
        }
    }
    lines
}

/// Lines for the admin panel: counters, users, activity, settings.
pub fn admin_lines(panel: &AdminPanel, settings: &Settings) -> Vec<String> {
    let stats = panel.stats();
    let mut lines = vec![
        "Админ панель".to_string(),
        format!(
            "Пользователей: {} · администраторов: {}",
            stats.users, stats.administrators
        ),
        format!(
            "Онлайн: {} · БД: {} · Безопасность: {}%",
            stats.online, stats.database_size, stats.security_score
        ),
    ];
    lines.extend(list_lines(panel.users()));
    lines.push("Журнал активности".to_string());
    for entry in panel.activity() {
        lines.push(format!("  {} · {} · {}", entry.time, entry.user, entry.action));
    }
    lines.push(format!(
        "Компания: {} · {} · {}",
        settings.company.name, settings.company.email, settings.company.phone
    ));
    for switch in Switch::ALL {
        let state = if settings.get(switch) { "вкл" } else { "выкл" };
        lines.push(format!("  [{}] {}: {state}", switch.name(), switch.label()));
    }
    lines
}

/// Lines for whatever the workspace has mounted, followed by an open dialog.
pub fn screen_lines(workspace: &Workspace) -> Vec<String> {
    let view = workspace.view();
    let mut lines = vec![format!("== {} ==", view.label())];
    match workspace.screen() {
        Screen::Dashboard(summary) => lines.extend(summary.render()),
        Screen::Projects(screen) => lines.extend(list_lines(screen)),
        Screen::Clients(screen) => lines.extend(list_lines(screen)),
        Screen::Chat(room) => lines.extend(chat_lines(room)),
        Screen::Admin(panel) => lines.extend(admin_lines(panel, workspace.settings())),
    }
    if let Some(screen) = workspace.list_screen() {
        lines.extend(form_lines(screen));
    }
    lines
}

/// The navigation sidebar.
pub fn nav_lines(active: ViewId) -> Vec<String> {
    ViewId::ALL
        .iter()
        .map(|view| {
            let cursor = if *view == active { ">" } else { " " };
            format!("{cursor} {:<10} {}", view.as_str(), view.label())
        })
        .collect()
}
