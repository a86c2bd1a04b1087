//! The admin panel: user management and the activity log.

use stroy_core::EntityId;

use crate::entities::User;
use crate::screen::EntityScreen;
use crate::seed;

/// One line of the activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    /// Identifier
    pub id: EntityId,
    /// Who acted
    pub user: String,
    /// What they did
    pub action: String,
    /// When, as displayed
    pub time: String,
}

/// System figures reported alongside the user counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemHealth {
    /// Users currently online
    pub online: usize,
    /// Database size, as displayed
    pub database_size: String,
    /// Security score, percent
    pub security_score: u8,
}

/// Counters shown at the top of the admin panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminStats {
    /// Number of users
    pub users: usize,
    /// Number of administrators
    pub administrators: usize,
    /// Users currently online
    pub online: usize,
    /// Database size, as displayed
    pub database_size: String,
    /// Security score, percent
    pub security_score: u8,
}

/// A mounted admin panel.
#[derive(Debug)]
pub struct AdminPanel {
    users: EntityScreen<User>,
    activity: Vec<ActivityEntry>,
    health: SystemHealth,
}

impl AdminPanel {
    /// Mounts the panel. The user store protects the last administrator.
    pub fn new(users: Vec<User>, activity: Vec<ActivityEntry>) -> Self {
        Self {
            users: EntityScreen::new(User::store(users)),
            activity,
            health: SystemHealth::default(),
        }
    }

    /// Attaches system health figures.
    pub fn with_health(mut self, health: SystemHealth) -> Self {
        self.health = health;
        self
    }

    /// The panel over the sample users, activity and health figures.
    pub fn seeded() -> Self {
        Self::new(seed::users(), seed::activity()).with_health(seed::system_health())
    }

    /// The user management screen.
    pub fn users(&self) -> &EntityScreen<User> {
        &self.users
    }

    /// The user management screen, mutably.
    pub fn users_mut(&mut self) -> &mut EntityScreen<User> {
        &mut self.users
    }

    /// Read-only activity log, newest first.
    pub fn activity(&self) -> &[ActivityEntry] {
        &self.activity
    }

    /// Current counters.
    pub fn stats(&self) -> AdminStats {
        let records = self.users.store().records();
        AdminStats {
            users: records.len(),
            administrators: records.iter().filter(|u| u.is_admin()).count(),
            online: self.health.online,
            database_size: self.health.database_size.clone(),
            security_score: self.health.security_score,
        }
    }
}
