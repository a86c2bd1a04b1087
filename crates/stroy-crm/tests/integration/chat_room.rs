//! Integration tests for the chat screen.

use chrono::NaiveTime;
use stroy_crm::entities::Sender;
use stroy_crm::{ViewId, Workspace};

use crate::common::{TestHarness, id};

fn room(h: &mut TestHarness) -> &mut stroy_crm::ChatRoom {
    h.workspace.chat_mut().expect("chat view should be mounted")
}

#[test]
fn test_send_is_local_echo_until_navigation() {
    let mut h = TestHarness::on(ViewId::Chat);
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
    let sent = room(&mut h).send_at("Да, без изменений", noon).unwrap().unwrap();
    assert_eq!(sent.sender, Sender::Me);
    assert_eq!(sent.time, "12:00");
    assert_eq!(room(&mut h).thread().len(), 6);

    h.workspace.navigate(ViewId::Dashboard);
    h.workspace.navigate(ViewId::Chat);
    assert_eq!(room(&mut h).thread().len(), 5);
}

#[test]
fn test_search_and_select_contact() {
    let mut h = TestHarness::on(ViewId::Chat);
    let chat = room(&mut h);
    chat.set_query("КОЗЛОВ");
    let visible: Vec<_> = chat.visible_contacts().iter().map(|c| c.id).collect();
    assert_eq!(visible, vec![id(4)]);
    assert_eq!(chat.select(id(4)).unwrap().last_message, "Отлично, согласовано");
    assert!(chat.thread().is_empty());
}

#[test]
fn test_chat_has_no_list_screen() {
    let workspace = Workspace::new(ViewId::Chat, Default::default());
    assert!(workspace.list_screen().is_none());
}
