//! Navigation between the top-level screens.
//!
//! Exactly one screen is mounted at a time. Navigating mounts the target
//! screen from seed data and drops the previous one together with any edits
//! made on it; only the settings survive navigation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stroy_core::Error;

use crate::admin::AdminPanel;
use crate::dashboard::DashboardSummary;
use crate::entities::{Client, Project};
use crate::room::ChatRoom;
use crate::screen::{EntityScreen, ListScreen};
use crate::seed;
use crate::settings::Settings;

/// A top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    /// Overview figures
    #[default]
    Dashboard,
    /// Project list
    Projects,
    /// Client list
    Clients,
    /// Chat
    Chat,
    /// Users, activity log, settings
    Admin,
}

impl ViewId {
    /// Every view, in sidebar order.
    pub const ALL: [ViewId; 5] = [
        ViewId::Dashboard,
        ViewId::Projects,
        ViewId::Clients,
        ViewId::Chat,
        ViewId::Admin,
    ];

    /// Identifier accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Projects => "projects",
            ViewId::Clients => "clients",
            ViewId::Chat => "chat",
            ViewId::Admin => "admin",
        }
    }

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Дашборд",
            ViewId::Projects => "Проекты",
            ViewId::Clients => "Клиенты",
            ViewId::Chat => "Чат",
            ViewId::Admin => "Админ панель",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ViewId::ALL
            .into_iter()
            .find(|view| view.as_str() == wanted)
            .ok_or_else(|| {
                Error::validation_field("view", format!("unknown view '{}'", s.trim()))
            })
    }
}

/// The mounted screen and its state.
#[derive(Debug)]
pub enum Screen {
    /// Dashboard, computed when mounted
    Dashboard(DashboardSummary),
    /// Project list
    Projects(EntityScreen<Project>),
    /// Client list
    Clients(EntityScreen<Client>),
    /// Chat
    Chat(ChatRoom),
    /// Admin panel
    Admin(AdminPanel),
}

impl Screen {
    /// Mounts `view` from seed data.
    pub fn mount(view: ViewId) -> Self {
        match view {
            ViewId::Dashboard => Screen::Dashboard(DashboardSummary::seeded()),
            ViewId::Projects => Screen::Projects(EntityScreen::seeded(seed::projects())),
            ViewId::Clients => Screen::Clients(EntityScreen::seeded(seed::clients())),
            ViewId::Chat => Screen::Chat(ChatRoom::new(seed::contacts(), seed::messages())),
            ViewId::Admin => Screen::Admin(AdminPanel::seeded()),
        }
    }

    /// Which view this screen belongs to.
    pub fn view(&self) -> ViewId {
        match self {
            Screen::Dashboard(_) => ViewId::Dashboard,
            Screen::Projects(_) => ViewId::Projects,
            Screen::Clients(_) => ViewId::Clients,
            Screen::Chat(_) => ViewId::Chat,
            Screen::Admin(_) => ViewId::Admin,
        }
    }
}

/// The application shell state: the mounted screen plus settings.
#[derive(Debug)]
pub struct Workspace {
    screen: Screen,
    settings: Settings,
}

impl Workspace {
    /// Starts on `initial` with the given settings.
    pub fn new(initial: ViewId, settings: Settings) -> Self {
        log::debug!("Mounting {initial}");
        Self {
            screen: Screen::mount(initial),
            settings,
        }
    }

    /// Active view.
    pub fn view(&self) -> ViewId {
        self.screen.view()
    }

    /// Switches to `view`, remounting it even if it is already active.
    pub fn navigate(&mut self, view: ViewId) {
        log::debug!("Navigating from {} to {view}", self.view());
        self.screen = Screen::mount(view);
    }

    /// The mounted screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The mounted screen, mutably.
    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// The mounted list screen, if the active view has one.
    ///
    /// The admin panel's list is its user screen.
    pub fn list_screen(&self) -> Option<&dyn ListScreen> {
        match &self.screen {
            Screen::Projects(s) => Some(s),
            Screen::Clients(s) => Some(s),
            Screen::Admin(panel) => Some(panel.users()),
            Screen::Dashboard(_) | Screen::Chat(_) => None,
        }
    }

    /// The mounted list screen, mutably.
    pub fn list_screen_mut(&mut self) -> Option<&mut dyn ListScreen> {
        match &mut self.screen {
            Screen::Projects(s) => Some(s),
            Screen::Clients(s) => Some(s),
            Screen::Admin(panel) => Some(panel.users_mut()),
            Screen::Dashboard(_) | Screen::Chat(_) => None,
        }
    }

    /// The chat room, if the chat view is active.
    pub fn chat_mut(&mut self) -> Option<&mut ChatRoom> {
        match &mut self.screen {
            Screen::Chat(room) => Some(room),
            _ => None,
        }
    }

    /// Settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Settings, mutably.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(ViewId::default(), Settings::default())
    }
}
