//! The dashboard: company-wide report figures plus counts over the current
//! records.
//!
//! The report part (headline cards, monthly series, status distribution,
//! recent projects) is supplied as a [`DashboardReport`]; the live part is
//! computed from whatever projects, clients and users are passed in.

use crate::entities::project::{STATUS_COMPLETED, STATUS_IN_PROGRESS, STATUS_PAUSED};
use crate::entities::{Client, Project, User};
use crate::seed;

/// A headline card: title, value and change against the previous period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    /// Card title
    pub title: String,
    /// Displayed value
    pub value: String,
    /// Change, e.g. `+12%`
    pub change: String,
}

/// Revenue and project count for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyFigure {
    /// Short month name
    pub month: String,
    /// Revenue, thousands of roubles
    pub revenue: u32,
    /// Projects running that month
    pub projects: u32,
}

/// A project row on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentProject {
    /// Project name
    pub name: String,
    /// Client label
    pub client: String,
    /// Status
    pub status: String,
    /// Completion percentage
    pub progress: i64,
    /// Planned end date
    pub deadline: String,
}

/// Company-wide figures shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardReport {
    /// Headline cards, in display order
    pub cards: Vec<StatCard>,
    /// Monthly revenue and project counts, oldest first
    pub monthly: Vec<MonthlyFigure>,
    /// Project count per status, cancelled projects included
    pub status_distribution: Vec<(String, u32)>,
    /// Recently active projects
    pub recent: Vec<RecentProject>,
}

impl DashboardReport {
    /// Share of each status in the distribution, in whole percent.
    ///
    /// Empty when the distribution sums to zero.
    pub fn status_shares(&self) -> Vec<(&str, u32)> {
        let total: u32 = self.status_distribution.iter().map(|(_, n)| n).sum();
        if total == 0 {
            return Vec::new();
        }
        self.status_distribution
            .iter()
            .map(|(status, n)| {
                let share = (f64::from(*n) * 100.0 / f64::from(total)).round() as u32;
                (status.as_str(), share)
            })
            .collect()
    }
}

/// The dashboard screen's contents.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// Projects in progress
    pub active_projects: usize,
    /// Paused projects
    pub paused_projects: usize,
    /// Completed projects
    pub completed_projects: usize,
    /// Project count per status, in first-seen order
    pub status_counts: Vec<(String, usize)>,
    /// Number of clients
    pub client_count: usize,
    /// Number of users
    pub user_count: usize,
    /// Mean project progress; `0.0` with no projects
    pub average_progress: f64,
    /// Company-wide report figures
    pub report: DashboardReport,
}

impl DashboardSummary {
    /// Computes the live figures; the report starts empty.
    pub fn from_records(projects: &[Project], clients: &[Client], users: &[User]) -> Self {
        let mut status_counts: Vec<(String, usize)> = Vec::new();
        for project in projects {
            match status_counts.iter_mut().find(|(s, _)| *s == project.status) {
                Some((_, count)) => *count += 1,
                None => status_counts.push((project.status.clone(), 1)),
            }
        }
        let count_of = |status: &str| {
            status_counts
                .iter()
                .find(|(s, _)| s == status)
                .map_or(0, |(_, n)| *n)
        };

        let average_progress = if projects.is_empty() {
            0.0
        } else {
            projects.iter().map(|p| p.progress as f64).sum::<f64>() / projects.len() as f64
        };

        Self {
            active_projects: count_of(STATUS_IN_PROGRESS),
            paused_projects: count_of(STATUS_PAUSED),
            completed_projects: count_of(STATUS_COMPLETED),
            status_counts,
            client_count: clients.len(),
            user_count: users.len(),
            average_progress,
            report: DashboardReport::default(),
        }
    }

    /// Attaches the company-wide report.
    pub fn with_report(mut self, report: DashboardReport) -> Self {
        self.report = report;
        self
    }

    /// The dashboard over the sample records and the sample report.
    pub fn seeded() -> Self {
        Self::from_records(&seed::projects(), &seed::clients(), &seed::users())
            .with_report(seed::dashboard_report())
    }

    /// Renders the dashboard as text lines.
    pub fn render(&self) -> Vec<String> {
        let report = &self.report;
        let mut lines = vec![
            "Добро пожаловать в СтройCRM".to_string(),
            "Обзор ваших проектов и показателей".to_string(),
        ];

        if !report.cards.is_empty() {
            lines.push("Показатели:".to_string());
            lines.extend(
                report
                    .cards
                    .iter()
                    .map(|c| format!("  {}: {} ({})", c.title, c.value, c.change)),
            );
        }
        if !report.monthly.is_empty() {
            lines.push("Доход и проекты по месяцам:".to_string());
            lines.extend(report.monthly.iter().map(|m| {
                format!(
                    "  {}: доход {} тыс. ₽ · проектов {}",
                    m.month, m.revenue, m.projects
                )
            }));
        }
        let shares = report.status_shares();
        if !shares.is_empty() {
            lines.push("Статус проектов:".to_string());
            for ((status, count), (_, share)) in report.status_distribution.iter().zip(shares) {
                lines.push(format!("  {status}: {count} ({share}%)"));
            }
        }
        if !report.recent.is_empty() {
            lines.push("Недавние проекты:".to_string());
            lines.extend(report.recent.iter().map(|p| {
                format!(
                    "  {} · {} · {} · {}% · до {}",
                    p.name, p.client, p.status, p.progress, p.deadline
                )
            }));
        }

        lines.push("Текущие записи:".to_string());
        lines.push(format!("  Проекты в работе: {}", self.active_projects));
        lines.push(format!("  На паузе: {}", self.paused_projects));
        lines.push(format!("  Завершено: {}", self.completed_projects));
        lines.push(format!("  Клиентов: {}", self.client_count));
        lines.push(format!("  Пользователей: {}", self.user_count));
        lines.push(format!("  Средний прогресс: {:.0}%", self.average_progress));
        lines
    }
}
