//! Sample records every screen starts from.
//!
//! Screens are reseeded whenever they are mounted, so these functions return
//! fresh owned records on every call.

use stroy_core::EntityId;

use crate::admin::{ActivityEntry, SystemHealth};
use crate::dashboard::{DashboardReport, MonthlyFigure, RecentProject, StatCard};
use crate::entities::project::{STATUS_IN_PROGRESS, STATUS_PAUSED};
use crate::entities::{ADMIN_ROLE, ChatContact, ChatMessage, Client, Project, Sender, User};

/// The four sample clients.
pub fn clients() -> Vec<Client> {
    [
        (
            1,
            "Александр Иванов",
            "ООО \"Инвест\"",
            "ivanov@invest.ru",
            "+7 (495) 123-45-67",
            3,
            "45М ₽",
        ),
        (
            2,
            "Петр Смирнов",
            "ИП Петров",
            "petrov@mail.ru",
            "+7 (495) 234-56-78",
            1,
            "25М ₽",
        ),
        (
            3,
            "Мария Сидорова",
            "АО \"РемСтрой\"",
            "sidorova@remstroy.ru",
            "+7 (495) 345-67-89",
            2,
            "32М ₽",
        ),
        (
            4,
            "Дмитрий Козлов",
            "ООО \"Стройком\"",
            "kozlov@stroikom.ru",
            "+7 (495) 456-78-90",
            4,
            "58М ₽",
        ),
    ]
    .into_iter()
    .map(|(id, name, company, email, phone, projects, total_value)| Client {
        id: EntityId::new(id),
        name: name.into(),
        company: company.into(),
        email: email.into(),
        phone: phone.into(),
        projects,
        total_value: total_value.into(),
    })
    .collect()
}

/// The three sample projects.
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: EntityId::new(1),
            name: "ЖК \"Солнечный\"".into(),
            client: "ООО \"Инвест\"".into(),
            status: STATUS_IN_PROGRESS.into(),
            budget: "15М ₽".into(),
            progress: 75,
            start_date: "2024-01-15".into(),
            end_date: "2024-12-15".into(),
            team: 12,
            description: "Строительство жилого комплекса на 150 квартир".into(),
        },
        Project {
            id: EntityId::new(2),
            name: "Торговый центр \"Гранд\"".into(),
            client: "ИП Петров".into(),
            status: STATUS_IN_PROGRESS.into(),
            budget: "25М ₽".into(),
            progress: 45,
            start_date: "2024-03-01".into(),
            end_date: "2025-02-20".into(),
            team: 20,
            description: "Строительство торгового центра площадью 5000 кв.м".into(),
        },
        Project {
            id: EntityId::new(3),
            name: "Офисное здание \"Бизнес Парк\"".into(),
            client: "АО \"РемСтрой\"".into(),
            status: STATUS_PAUSED.into(),
            budget: "18М ₽".into(),
            progress: 30,
            start_date: "2024-02-10".into(),
            end_date: "2025-01-10".into(),
            team: 15,
            description: "Офисное здание класса А на 8 этажей".into(),
        },
    ]
}

/// The three sample users; the first is the only administrator.
pub fn users() -> Vec<User> {
    [
        (1, "Администратор", "admin@stroycrm.ru", ADMIN_ROLE, "Сейчас онлайн"),
        (2, "Иван Петров", "petrov@stroycrm.ru", "Менеджер", "5 минут назад"),
        (3, "Мария Сидорова", "sidorova@stroycrm.ru", "Бухгалтер", "1 час назад"),
    ]
    .into_iter()
    .map(|(id, name, email, role, last_active)| User {
        id: EntityId::new(id),
        name: name.into(),
        email: email.into(),
        role: role.into(),
        status: "Активен".into(),
        last_active: last_active.into(),
    })
    .collect()
}

/// The four sample chat contacts.
pub fn contacts() -> Vec<ChatContact> {
    [
        (1, "Александр Иванов", "Когда планируется начать работы?", "10:30", 2, true),
        (2, "Петр Смирнов", "Спасибо за смету", "Вчера", 0, false),
        (3, "Мария Сидорова", "Нужно обсудить изменения", "Вчера", 1, true),
        (4, "Дмитрий Козлов", "Отлично, согласовано", "15 ноя", 0, false),
    ]
    .into_iter()
    .map(|(id, name, last_message, time, unread, online)| ChatContact {
        id: EntityId::new(id),
        name: name.into(),
        last_message: last_message.into(),
        time: time.into(),
        unread,
        online,
    })
    .collect()
}

/// The five sample messages, all in the thread of contact 1.
pub fn messages() -> Vec<ChatMessage> {
    [
        (1, Sender::Other, "Здравствуйте! Хотел уточнить по проекту ЖК \"Солнечный\"", "10:25"),
        (2, Sender::Me, "Добрый день! Конечно, слушаю вас", "10:26"),
        (3, Sender::Other, "Когда планируется начать работы по фасаду?", "10:27"),
        (
            4,
            Sender::Me,
            "Работы начнутся со следующей недели, 25 ноября. Все материалы уже закуплены.",
            "10:28",
        ),
        (5, Sender::Other, "Отлично! А сроки окончания остаются прежними?", "10:30"),
    ]
    .into_iter()
    .map(|(id, sender, text, time)| ChatMessage {
        id: EntityId::new(id),
        contact_id: EntityId::new(1),
        sender,
        text: text.into(),
        time: time.into(),
    })
    .collect()
}

/// The four sample activity-log entries, newest first.
pub fn activity() -> Vec<ActivityEntry> {
    [
        (1, "Администратор", "Создал новый проект \"ЖК Солнечный\"", "10:30"),
        (2, "Иван Петров", "Обновил данные клиента \"ООО Инвест\"", "09:45"),
        (3, "Мария Сидорова", "Добавила смету для проекта", "09:15"),
        (4, "Администратор", "Изменил настройки системы", "Вчера"),
    ]
    .into_iter()
    .map(|(id, user, action, time)| ActivityEntry {
        id: EntityId::new(id),
        user: user.into(),
        action: action.into(),
        time: time.into(),
    })
    .collect()
}

/// Health figures shown on the admin panel.
pub fn system_health() -> SystemHealth {
    SystemHealth {
        online: 3,
        database_size: "2.4 ГБ".into(),
        security_score: 99,
    }
}

/// The dashboard's company-wide report.
pub fn dashboard_report() -> DashboardReport {
    let cards = [
        ("Активные проекты", "24", "+12%"),
        ("Всего клиентов", "156", "+8%"),
        ("Общий доход", "42.5М ₽", "+23%"),
        ("Завершено проектов", "89", "+15%"),
    ]
    .into_iter()
    .map(|(title, value, change)| StatCard {
        title: title.into(),
        value: value.into(),
        change: change.into(),
    })
    .collect();

    let monthly = [
        ("Янв", 4000, 12),
        ("Фев", 3000, 15),
        ("Мар", 5000, 18),
        ("Апр", 4500, 14),
        ("Май", 6000, 20),
        ("Июн", 5500, 24),
    ]
    .into_iter()
    .map(|(month, revenue, projects)| MonthlyFigure {
        month: month.into(),
        revenue,
        projects,
    })
    .collect();

    let status_distribution = [
        (STATUS_IN_PROGRESS, 24),
        (STATUS_PAUSED, 5),
        ("Завершены", 89),
        ("Отменены", 3),
    ]
    .into_iter()
    .map(|(status, count)| (status.to_string(), count))
    .collect();

    let recent = [
        ("ЖК \"Солнечный\"", "ООО \"Инвест\"", STATUS_IN_PROGRESS, 75, "2024-12-15"),
        ("Торговый центр \"Гранд\"", "ИП Петров", STATUS_IN_PROGRESS, 45, "2025-02-20"),
        (
            "Офисное здание \"Бизнес Парк\"",
            "АО \"РемСтрой\"",
            STATUS_PAUSED,
            30,
            "2025-01-10",
        ),
        ("Частный дом", "Иванов И.И.", STATUS_IN_PROGRESS, 90, "2024-11-30"),
    ]
    .into_iter()
    .map(|(name, client, status, progress, deadline)| RecentProject {
        name: name.into(),
        client: client.into(),
        status: status.into(),
        progress,
        deadline: deadline.into(),
    })
    .collect();

    DashboardReport {
        cards,
        monthly,
        status_distribution,
        recent,
    }
}
