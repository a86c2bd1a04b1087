//! Integration tests for user management on the admin panel.

use stroy_core::Error;
use stroy_crm::entities::ADMIN_ROLE;
use stroy_crm::{Screen, ViewId};
use stroy_form::FormMode;

use crate::common::{TestHarness, id};

#[test]
fn test_deleting_sole_admin_is_rejected() {
    let mut h = TestHarness::on(ViewId::Admin);
    let rows = h.list().rows();
    assert!(!rows[0].deletable);

    let err = h.list().delete(id(1)).unwrap_err();
    assert!(matches!(err, Error::ProtectedEntity { kind: "user", .. }));
    assert_eq!(h.list().total(), 3);
}

#[test]
fn test_deleting_non_admin_removes_exactly_one() {
    let mut h = TestHarness::on(ViewId::Admin);
    assert!(h.list().delete(id(2)).unwrap());
    assert_eq!(h.visible_ids(), vec![1, 3]);
}

#[test]
fn test_password_required_on_create_only() {
    let mut h = TestHarness::on(ViewId::Admin);
    h.list().open_create();
    h.fill(&[("name", "Ольга Зайцева"), ("email", "zaitseva@stroycrm.ru")]);
    let err = h.list().submit().unwrap_err();
    assert_eq!(err.field(), Some("password"));

    h.list().open_edit(id(3)).unwrap();
    h.fill(&[("role", "Прораб")]);
    assert_eq!(h.list().submit().unwrap(), id(3));
}

#[test]
fn test_new_user_gets_default_role_and_status() {
    let mut h = TestHarness::on(ViewId::Admin);
    h.list().open_create();
    h.fill(&[
        ("name", "Ольга Зайцева"),
        ("email", "zaitseva@stroycrm.ru"),
        ("password", "s3cret"),
    ]);
    let created = h.list().submit().unwrap();

    let Screen::Admin(panel) = h.workspace.screen() else {
        panic!("admin view should be mounted");
    };
    let user = panel.users().store().get(created).unwrap();
    assert_eq!(user.role, "Менеджер");
    assert_eq!(user.status, "Активен");
    assert_eq!(panel.stats().administrators, 1);
}

#[test]
fn test_demoting_sole_admin_is_rejected() {
    let mut h = TestHarness::on(ViewId::Admin);
    h.list().open_edit(id(1)).unwrap();
    h.fill(&[("role", "Менеджер")]);
    let err = h.list().submit().unwrap_err();
    assert!(matches!(err, Error::ProtectedEntity { kind: "user", .. }));
    assert!(err.is_user_correctable());
    assert_eq!(h.list().form_mode(), FormMode::Edit(id(1)));

    h.list().cancel();
    let Screen::Admin(panel) = h.workspace.screen() else {
        panic!("admin view should be mounted");
    };
    assert_eq!(panel.stats().administrators, 1);
    assert_eq!(panel.users().store().get(id(1)).unwrap().role, ADMIN_ROLE);
}

#[test]
fn test_demoting_admin_after_promoting_another() {
    let mut h = TestHarness::on(ViewId::Admin);
    h.list().open_edit(id(2)).unwrap();
    h.fill(&[("role", ADMIN_ROLE)]);
    h.list().submit().unwrap();

    h.list().open_edit(id(1)).unwrap();
    h.fill(&[("role", "Менеджер")]);
    h.list().submit().unwrap();

    let rows = h.list().rows();
    assert!(rows[0].deletable);
    assert!(!rows[1].deletable);
}
