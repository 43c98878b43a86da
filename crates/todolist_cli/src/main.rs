//! Terminal front-end for the todolist core.
//!
//! # Responsibility
//! - Parse one command, apply it through `TodoApp`, print the list.
//! - Keep all state in the SQLite-backed durable slot between runs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use todolist_core::db::open_db;
use todolist_core::{
    default_log_level, init_logging, AppView, KeyValueStorage, SqliteStorage, TodoApp, TodoId,
};

#[derive(Parser, Debug)]
#[command(name = "todolist", version, about = "Minimal todo list manager")]
struct Cli {
    /// SQLite file holding the list
    #[arg(long, env = "TODOLIST_DB_PATH", default_value = "todolist.sqlite3")]
    db: PathBuf,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Show the list (default)
    List,
    /// Add a new item
    Add { text: String },
    /// Mark an item complete
    Toggle {
        id: TodoId,
        /// Mark incomplete instead
        #[arg(long)]
        undone: bool,
    },
    /// Delete an item
    Delete { id: TodoId },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Add { .. } => "add",
            Self::Toggle { .. } => "toggle",
            Self::Delete { .. } => "delete",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open `{}`", cli.db.display()))?;
    let mut app = TodoApp::start(SqliteStorage::new(&conn))?;

    let command = cli.command.unwrap_or(Command::List);
    info!("event=cli_command module=cli status=start command={}", command.name());
    let note = run(&mut app, command)?;
    if let Some(note) = note {
        println!("{note}");
    }
    print!("{}", render_text(&app.view()));
    Ok(())
}

/// Applies `command`; returns an optional one-line note for the user.
fn run<S: KeyValueStorage>(app: &mut TodoApp<S>, command: Command) -> Result<Option<String>> {
    let note = match command {
        Command::List => None,
        Command::Add { text } => app.submit_text(text)?.map(|id| format!("added {id}")),
        Command::Toggle { id, undone } => {
            app.toggle(&id, !undone)?;
            None
        }
        Command::Delete { id } => {
            app.delete(&id)?;
            None
        }
    };
    Ok(note)
}

fn render_text(view: &AppView) -> String {
    let mut out = format!("{}\n", view.header);
    if view.rows.is_empty() {
        out.push_str("  (empty)\n");
        return out;
    }
    for row in &view.rows {
        let mark = if row.checked { 'x' } else { ' ' };
        out.push_str(&format!("  [{mark}] {}  {}\n", row.title, row.key));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render_text, run, Cli, Command, TodoId};
    use clap::Parser;
    use todolist_core::{MemoryStorage, TodoApp};

    #[test]
    fn parses_toggle_with_undone_flag() {
        let id = "11111111-2222-4333-8444-555555555555";
        let cli = Cli::try_parse_from(["todolist", "toggle", id, "--undone"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Toggle {
                id: TodoId::from(id),
                undone: true
            })
        );
    }

    #[test]
    fn passes_any_id_text_through_verbatim() {
        let cli = Cli::try_parse_from(["todolist", "delete", "Legacy-1"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Delete {
                id: TodoId::from("Legacy-1")
            })
        );
    }

    #[test]
    fn run_applies_commands_and_renders_rows() {
        let mut app = TodoApp::start(MemoryStorage::new()).unwrap();

        let note = run(&mut app, Command::Add { text: "Buy milk".into() }).unwrap();
        assert!(note.unwrap().starts_with("added "));
        let id = app.store().todos().as_slice()[0].id.clone();

        let toggle = Command::Toggle {
            id: id.clone(),
            undone: false,
        };
        run(&mut app, toggle).unwrap();
        let text = render_text(&app.view());
        assert_eq!(text, format!("Todo List\n  [x] Buy milk  {id}\n"));

        run(&mut app, Command::Delete { id }).unwrap();
        assert_eq!(render_text(&app.view()), "Todo List\n  (empty)\n");
    }

    #[test]
    fn blank_add_reports_nothing() {
        let mut app = TodoApp::start(MemoryStorage::new()).unwrap();
        let note = run(&mut app, Command::Add { text: "   ".into() }).unwrap();
        assert!(note.is_none());
        assert!(app.store().is_empty());
    }
}
