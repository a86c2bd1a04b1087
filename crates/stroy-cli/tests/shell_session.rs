//! End-to-end shell sessions driven from in-memory input.

#![allow(clippy::unwrap_used)]

use stroy_cli::{Shell, StroyConfig};
use stroy_crm::{ViewId, Workspace};

fn session(config: StroyConfig, script: &str) -> (Shell, String) {
    let workspace = Workspace::new(config.shell.initial_view, config.settings);
    let mut shell = Shell::new(workspace, config.shell.prompt);
    let mut out = Vec::new();
    shell.run(script.as_bytes(), &mut out).unwrap();
    (shell, String::from_utf8(out).unwrap())
}

#[test]
fn test_project_lifecycle() {
    let script = "\
view projects
new
set name Склад \"Восток\"
set client ООО \"Логистик\"
set budget 12 000 000 ₽
set start_date 2025-01-10
set end_date 2025-09-30
set team много
submit
set team 6
submit
edit 4
set progress 10
set description Первый этап
submit
delete 4
quit
";
    let (shell, out) = session(StroyConfig::default(), script);

    assert!(out.contains("Validation error on 'team'"));
    assert!(out.contains("сохранено: project 4"));
    assert!(out.contains("Unknown field 'progress' for project"));
    assert!(out.contains("удалено: project 4"));
    assert_eq!(shell.workspace().view(), ViewId::Projects);
}

#[test]
fn test_navigation_resets_unsaved_state() {
    let script = "\
view clients
search ооо
view dashboard
view clients
quit
";
    let (_, out) = session(StroyConfig::default(), script);
    assert!(out.contains("client (2/4)"));
    assert!(out.trim_end().ends_with("stroycrm>"));
    let last_list = out.rfind("client (").unwrap();
    assert!(out[last_list..].starts_with("client (4/4)"));
}

#[test]
fn test_config_picks_start_view_and_prompt() {
    let config: StroyConfig =
        toml::from_str("[shell]\ninitial_view = \"admin\"\nprompt = \"crm$ \"\n").unwrap();
    let (shell, out) = session(config, "toggle backup\n");
    assert!(out.contains("== Админ панель =="));
    assert!(out.contains("crm$ "));
    assert!(!shell.workspace().settings().backup.auto_backup);
}
