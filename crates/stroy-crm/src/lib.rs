//! # stroy-crm
//!
//! The construction CRM built on the generic entity toolkit.
//!
//! - [`entities`]: Client, Project, User, ChatContact, ChatMessage
//! - [`seed`]: sample records every screen is mounted from
//! - [`screen`]: a list screen (store + search + create/edit dialog)
//! - [`dashboard`]: headline figures derived from the records
//! - [`room`]: the chat screen
//! - [`admin`]: user management and the activity log
//! - [`settings`]: admin-panel settings
//! - [`workspace`]: navigation between screens

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod admin;
pub mod dashboard;
pub mod entities;
pub mod room;
pub mod screen;
pub mod seed;
pub mod settings;
pub mod workspace;

pub use admin::{ActivityEntry, AdminPanel, AdminStats, SystemHealth};
pub use dashboard::{DashboardReport, DashboardSummary, MonthlyFigure, RecentProject, StatCard};
pub use entities::{ChatContact, ChatMessage, Client, CrmEntity, Project, Sender, User};
pub use room::ChatRoom;
pub use screen::{EntityScreen, FormLine, ListScreen, Row};
pub use settings::{Settings, Switch};
pub use workspace::{Screen, ViewId, Workspace};
