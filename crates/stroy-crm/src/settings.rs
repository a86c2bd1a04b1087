//! System settings shown on the admin panel.
//!
//! Every section deserializes with defaults, so a partial TOML document (or
//! none at all) yields a complete [`Settings`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stroy_core::Error;

/// Company contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanySettings {
    /// Company name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            name: "СтройCRM".to_string(),
            email: "info@stroycrm.ru".to_string(),
            phone: "+7 (495) 123-45-67".to_string(),
        }
    }
}

/// Notification channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Email notifications
    pub email: bool,
    /// Push notifications
    pub push: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
        }
    }
}

/// Security options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySettings {
    /// Two-factor authentication
    pub two_factor_auth: bool,
}

/// Backup options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupSettings {
    /// Automatic daily backup
    pub auto_backup: bool,
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self { auto_backup: true }
    }
}

/// All admin-panel settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `[company]`
    pub company: CompanySettings,
    /// `[notifications]`
    pub notifications: NotificationSettings,
    /// `[security]`
    pub security: SecuritySettings,
    /// `[backup]`
    pub backup: BackupSettings,
}

/// An on/off switch on the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    /// `notifications.email`
    EmailNotifications,
    /// `notifications.push`
    PushNotifications,
    /// `security.two_factor_auth`
    TwoFactorAuth,
    /// `backup.auto_backup`
    AutoBackup,
}

impl Switch {
    /// Every switch, in panel order.
    pub const ALL: [Switch; 4] = [
        Switch::EmailNotifications,
        Switch::PushNotifications,
        Switch::TwoFactorAuth,
        Switch::AutoBackup,
    ];

    /// Short name accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Switch::EmailNotifications => "email",
            Switch::PushNotifications => "push",
            Switch::TwoFactorAuth => "2fa",
            Switch::AutoBackup => "backup",
        }
    }

    /// Panel label.
    pub fn label(&self) -> &'static str {
        match self {
            Switch::EmailNotifications => "Email уведомления",
            Switch::PushNotifications => "Push уведомления",
            Switch::TwoFactorAuth => "Двухфакторная аутентификация",
            Switch::AutoBackup => "Автоматическое резервное копирование",
        }
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Switch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Switch::ALL
            .into_iter()
            .find(|switch| switch.name() == s.trim())
            .ok_or_else(|| {
                Error::validation_field("switch", format!("unknown setting switch '{}'", s.trim()))
            })
    }
}

impl Settings {
    /// Current state of a switch.
    pub fn get(&self, switch: Switch) -> bool {
        match switch {
            Switch::EmailNotifications => self.notifications.email,
            Switch::PushNotifications => self.notifications.push,
            Switch::TwoFactorAuth => self.security.two_factor_auth,
            Switch::AutoBackup => self.backup.auto_backup,
        }
    }

    /// Flips a switch and returns its new state.
    pub fn toggle(&mut self, switch: Switch) -> bool {
        let slot = match switch {
            Switch::EmailNotifications => &mut self.notifications.email,
            Switch::PushNotifications => &mut self.notifications.push,
            Switch::TwoFactorAuth => &mut self.security.two_factor_auth,
            Switch::AutoBackup => &mut self.backup.auto_backup,
        };
        *slot = !*slot;
        log::debug!("Setting {switch} is now {}", *slot);
        *slot
    }
}
