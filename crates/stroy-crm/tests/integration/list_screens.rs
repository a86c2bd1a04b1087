//! Integration tests for the project and client list screens.

use proptest::prelude::*;
use stroy_core::Error;
use stroy_crm::{ListScreen, ViewId};
use stroy_form::FormMode;

use crate::common::{TestHarness, id, project_fields};

#[test]
fn test_create_project_appends_with_next_id() {
    let mut h = TestHarness::on(ViewId::Projects);
    h.list().open_create();
    h.fill(&project_fields());
    let created = h.list().submit().expect("valid draft should commit");

    assert_eq!(created, id(4));
    assert_eq!(h.visible_ids(), vec![1, 2, 3, 4]);
    let row = h.list().rows().pop().unwrap();
    assert!(row.summary.contains("В работе"));
    assert!(row.summary.contains("0%"));
}

#[test]
fn test_create_with_missing_field_leaves_store_unchanged() {
    let mut h = TestHarness::on(ViewId::Projects);
    h.list().open_create();
    let partial: Vec<_> = project_fields()
        .into_iter()
        .filter(|(name, _)| *name != "budget")
        .collect();
    h.fill(&partial);

    let err = h.list().submit().unwrap_err();
    assert_eq!(err.field(), Some("budget"));
    assert!(err.is_user_correctable());
    assert_eq!(h.list().total(), 3);
    assert_eq!(h.list().form_mode(), FormMode::Create);
}

#[test]
fn test_non_numeric_team_is_rejected() {
    let mut h = TestHarness::on(ViewId::Projects);
    h.list().open_create();
    h.fill(&project_fields());
    h.fill(&[("team", "двенадцать")]);

    let err = h.list().submit().unwrap_err();
    assert!(matches!(err, Error::Validation { ref field, .. } if field == "team"));
}

#[test]
fn test_edit_client_in_place() {
    let mut h = TestHarness::on(ViewId::Clients);
    h.list().open_edit(id(2)).unwrap();
    h.fill(&[("name", "Петр Смирнов-Старший")]);
    assert_eq!(h.list().submit().unwrap(), id(2));

    let rows = h.list().rows();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1].id, id(2));
    assert!(rows[1].summary.contains("Петр Смирнов-Старший"));
    assert!(rows[1].summary.contains("25М ₽"));
}

#[test]
fn test_deleted_id_is_not_reused() {
    let mut h = TestHarness::on(ViewId::Projects);
    assert!(h.list().delete(id(3)).unwrap());
    h.list().open_create();
    h.fill(&project_fields());
    assert_eq!(h.list().submit().unwrap(), id(4));
}

#[test]
fn test_delete_then_edit_is_not_found() {
    let mut h = TestHarness::on(ViewId::Clients);
    h.list().delete(id(1)).unwrap();
    let err = h.list().open_edit(id(1)).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn test_search_then_cancel_keeps_query() {
    let mut h = TestHarness::on(ViewId::Clients);
    h.list().set_query("РЕМСТРОЙ");
    assert_eq!(h.visible_ids(), vec![3]);
    h.list().open_create();
    h.fill(&[("name", "Черновик")]);
    h.list().cancel();
    assert_eq!(h.list().query(), "РЕМСТРОЙ");
    assert_eq!(h.list().total(), 4);
}

proptest! {
    #[test]
    fn test_created_ids_increase(
        deletions in prop::collection::vec(1u64..6, 0..4),
        creates in 1usize..5,
    ) {
        let mut h = TestHarness::on(ViewId::Projects);
        for raw in deletions {
            h.list().delete(id(raw)).unwrap();
        }
        let mut last = id(3);
        for _ in 0..creates {
            h.list().open_create();
            h.fill(&project_fields());
            let created = h.list().submit().unwrap();
            prop_assert!(created > last);
            last = created;
        }
    }

    #[test]
    fn test_filtered_rows_are_subset(query in "[а-яa-z]{0,3}") {
        let mut h = TestHarness::on(ViewId::Clients);
        let all = h.visible_ids();
        h.list().set_query(&query);
        let hits = h.visible_ids();
        prop_assert!(hits.iter().all(|hit| all.contains(hit)));
    }
}
