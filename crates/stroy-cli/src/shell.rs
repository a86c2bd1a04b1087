//! Line-oriented interactive shell over a [`Workspace`].
//!
//! Each input line is one command. Errors from the workspace (a missing
//! required field, a protected record) are printed and the shell carries on;
//! only I/O errors on the streams end the session.

use std::io::{self, BufRead, Write};

use anyhow::{Context, anyhow, bail};
use stroy_core::EntityId;
use stroy_crm::{ListScreen, Switch, ViewId, Workspace};

use crate::render;

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// End the session
    Quit,
}

struct Reply {
    lines: Vec<String>,
    flow: Flow,
}

impl Reply {
    fn show(lines: Vec<String>) -> Self {
        Self {
            lines,
            flow: Flow::Continue,
        }
    }
}

const HELP: &[&str] = &[
    "Команды:",
    "  view [dashboard|projects|clients|chat|admin]  перейти к разделу",
    "  list                       показать текущий раздел",
    "  search <текст>             фильтр списка (пусто = сбросить)",
    "  new | edit <id>            открыть форму",
    "  set <поле> <значение>      изменить поле формы",
    "  submit | cancel            сохранить или закрыть форму",
    "  delete <id>                удалить запись",
    "  select <id> | send <текст> чат",
    "  toggle <email|push|2fa|backup>  переключить настройку (админ панель)",
    "  help | quit",
];

const UNKNOWN_COMMAND: &str = "неизвестная команда";
const CHAT_ONLY: &str = "команда доступна только в разделе chat";
const EMPTY_MESSAGE: &str = "пустое сообщение не отправлено";

/// The interactive shell.
#[derive(Debug)]
pub struct Shell {
    workspace: Workspace,
    prompt: String,
}

impl Shell {
    /// Creates a shell over `workspace`.
    pub fn new(workspace: Workspace, prompt: impl Into<String>) -> Self {
        Self {
            workspace,
            prompt: prompt.into(),
        }
    }

    /// The driven workspace.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Reads commands from `input` until end of input or `quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        write_lines(out, &render::nav_lines(self.workspace.view()))?;
        write_lines(out, &render::screen_lines(&self.workspace))?;

        let mut lines = input.lines();
        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;
            let Some(line) = lines.next().transpose()? else {
                writeln!(out)?;
                break;
            };
            if self.execute(&line, out)? == Flow::Quit {
                break;
            }
        }
        tracing::info!("Shell session ended");
        Ok(())
    }

    /// Executes one command line, writing its output to `out`.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(c, r)| (c, r.trim()));
        tracing::debug!(command, view = %self.workspace.view(), "Shell command");

        match self.dispatch(command, rest) {
            Ok(reply) => {
                write_lines(out, &reply.lines)?;
                Ok(reply.flow)
            }
            Err(err) => {
                writeln!(out, "ошибка: {err:#}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, command: &str, rest: &str) -> anyhow::Result<Reply> {
        let lines = match command {
            "help" | "?" => HELP.iter().map(|s| s.to_string()).collect(),
            "quit" | "exit" | "q" => {
                return Ok(Reply {
                    lines: Vec::new(),
                    flow: Flow::Quit,
                });
            }
            "view" if rest.is_empty() => render::nav_lines(self.workspace.view()),
            "view" => {
                let view: ViewId = rest.parse()?;
                self.workspace.navigate(view);
                render::screen_lines(&self.workspace)
            }
            "list" | "ls" => render::screen_lines(&self.workspace),
            "search" => {
                if let Some(room) = self.workspace.chat_mut() {
                    room.set_query(rest);
                } else {
                    self.list()?.set_query(rest);
                }
                render::screen_lines(&self.workspace)
            }
            "new" => {
                self.list()?.open_create();
                render::form_lines(self.list()?)
            }
            "edit" => {
                let id = parse_id(rest)?;
                self.list()?.open_edit(id)?;
                render::form_lines(self.list()?)
            }
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(f, v)| (f, v.trim()));
                if field.is_empty() {
                    bail!("использование: set <поле> <значение>");
                }
                self.list()?.set_field(field, value)?;
                render::form_lines(self.list()?)
            }
            "submit" => {
                let screen = self.list()?;
                let kind = screen.kind();
                let id = screen.submit()?;
                let mut lines = vec![format!("сохранено: {kind} {id}")];
                lines.extend(render::list_lines(screen));
                lines
            }
            "cancel" => {
                let screen = self.list()?;
                screen.cancel();
                render::list_lines(screen)
            }
            "delete" => {
                let id = parse_id(rest)?;
                let screen = self.list()?;
                let kind = screen.kind();
                if screen.delete(id)? {
                    vec![format!("удалено: {kind} {id}")]
                } else {
                    vec![format!("нет записи {kind} {id}")]
                }
            }
            "select" => {
                let id = parse_id(rest)?;
                self.chat()?.select(id)?;
                render::screen_lines(&self.workspace)
            }
            "send" => match self.chat()?.send(rest)? {
                Some(message) => vec![format!(
                    "  [{}] {}: {}",
                    message.time, message.sender, message.text
                )],
                None => vec![EMPTY_MESSAGE.to_string()],
            },
            "toggle" => {
                if self.workspace.view() != ViewId::Admin {
                    bail!("настройки доступны в разделе admin");
                }
                let switch: Switch = rest.parse()?;
                let on = self.workspace.settings_mut().toggle(switch);
                vec![format!("{}: {}", switch.label(), if on { "вкл" } else { "выкл" })]
            }
            other => bail!("{UNKNOWN_COMMAND} '{other}' (список команд: help)"),
        };
        Ok(Reply::show(lines))
    }

    fn list(&mut self) -> anyhow::Result<&mut dyn ListScreen> {
        let view = self.workspace.view();
        self.workspace
            .list_screen_mut()
            .ok_or_else(|| anyhow!("в разделе {view} нет списка"))
    }

    fn chat(&mut self) -> anyhow::Result<&mut stroy_crm::ChatRoom> {
        self.workspace
            .chat_mut()
            .ok_or_else(|| anyhow!(CHAT_ONLY))
    }
}

fn parse_id(raw: &str) -> anyhow::Result<EntityId> {
    raw.parse::<EntityId>()
        .ok()
        .with_context(|| format!("ожидался номер записи, получено '{raw}'"))
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
