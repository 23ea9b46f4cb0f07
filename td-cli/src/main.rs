//! td - Taskdeck CLI
//!
//! A command-line client for the taskdeck REST backend: projects, tasks,
//! status transitions and the kanban board, with JSON output.
//!
//! # Examples
//!
//! ```bash
//! # Sign in (persists the session under the config directory)
//! td auth login alice --password secret
//!
//! # List projects with their stepped progress
//! td project list --pretty
//!
//! # Flip a task's completion flag
//! td task toggle <project-id> <task-id>
//!
//! # Show the kanban board, hiding completed cards
//! td board <project-id> --hide-completed
//! ```

mod auth_commands;
mod cli;
mod commands;
mod error;
mod logger;
mod output;
mod project_commands;
mod task_commands;

#[cfg(test)]
mod tests;

use crate::{
    auth_commands::AuthCommands,
    cli::Cli,
    commands::Commands,
    error::Result as CliResult,
    output::{board_value, print_json, project_value, task_value},
    project_commands::ProjectCommands,
    task_commands::TaskCommands,
};

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::warn;
use serde_json::{Value, json};
use td_client::{ApiClient, ProjectPatch, Session, TaskPatch};
use td_config::Config;
use td_core::{Board, CardDrop, CardSlot, TaskStatus, User};
use td_store::{LogNotifier, ProjectStore, TaskTransition};

/// Everything resolved before a command runs: validated config, log sink,
/// and the persisted session if present.
struct Setup {
    config: Config,
    log_file: Option<PathBuf>,
    session_path: PathBuf,
    session: Option<Session>,
}

fn setup() -> CliResult<Setup> {
    let config = Config::load()?;
    config.validate()?;
    let log_file = config.log_file_path()?;
    let session_path = Config::session_path()?;
    let session = Session::load(&session_path)?;

    Ok(Setup {
        config,
        log_file,
        session_path,
        session,
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let setup = match setup() {
        Ok(setup) => setup,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(
        setup.config.logging.level,
        setup.log_file,
        std::io::stderr().is_terminal(),
    ) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    setup.config.log_summary();

    // Explicit flag > config file (already env-overridden)
    let base_url = cli
        .server
        .clone()
        .unwrap_or_else(|| setup.config.api.base_url.clone());
    let session_path = setup.session_path;
    let session = setup.session;

    match cli.command {
        Commands::Auth { action } => {
            run_auth(action, &base_url, &session_path, session, cli.pretty).await
        }
        Commands::Project { action } => match open_store(&base_url, session).await {
            Some(mut store) => run_project(&mut store, action, cli.pretty).await,
            None => ExitCode::FAILURE,
        },
        Commands::Task { action } => match open_store(&base_url, session).await {
            Some(mut store) => run_task(&mut store, action, cli.pretty).await,
            None => ExitCode::FAILURE,
        },
        Commands::Board {
            project_id,
            hide_completed,
        } => match open_store(&base_url, session).await {
            Some(store) => run_board(&store, &project_id, hide_completed, cli.pretty),
            None => ExitCode::FAILURE,
        },
    }
}

/// Build a store bound to the persisted session and load the initial
/// snapshot. Commands other than `auth` require being signed in.
async fn open_store(base_url: &str, session: Option<Session>) -> Option<ProjectStore> {
    let Some(session) = session else {
        eprintln!("Error: not signed in.");
        eprintln!();
        eprintln!("Sign in first:");
        eprintln!("  td auth login <username> --password <password>");
        return None;
    };

    let client = ApiClient::new(base_url, Some(&session.access_token));
    let mut store = ProjectStore::new(client, Arc::new(LogNotifier));
    store.handle_auth_change(Some(session.user)).await;
    Some(store)
}

async fn run_auth(
    action: AuthCommands,
    base_url: &str,
    session_path: &Path,
    session: Option<Session>,
    pretty: bool,
) -> ExitCode {
    match action {
        AuthCommands::Login { username, password } => {
            let client = ApiClient::new(base_url, None);
            match client.sign_in(&username, &password).await {
                Ok(token) => {
                    let session = Session::new(User::from_username(&username), token);
                    if let Err(e) = session.save(session_path) {
                        eprintln!("Error: {e}");
                        return ExitCode::FAILURE;
                    }
                    print_json(&json!({"user": session.user.id, "server": base_url}), pretty)
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        AuthCommands::Logout => {
            // The local session goes away even when the backend call fails.
            if let Some(session) = session {
                let client = ApiClient::new(base_url, Some(&session.access_token));
                if let Err(e) = client.logout().await {
                    warn!("Backend logout failed: {e}");
                }
            }
            if let Err(e) = Session::clear(session_path) {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
            print_json(&json!({"loggedOut": true}), pretty)
        }
        AuthCommands::Whoami => match session {
            Some(session) => print_json(&json!({"user": session.user.id}), pretty),
            None => {
                eprintln!("Error: not signed in.");
                ExitCode::FAILURE
            }
        },
    }
}

async fn run_project(store: &mut ProjectStore, action: ProjectCommands, pretty: bool) -> ExitCode {
    match action {
        ProjectCommands::List => {
            let values = store.projects().iter().map(project_value).collect();
            print_json(&Value::Array(values), pretty)
        }
        ProjectCommands::Get { id } => match store.project(&id) {
            Some(project) => print_json(&project_value(project), pretty),
            None => {
                eprintln!("Error: project not found: {id}");
                ExitCode::FAILURE
            }
        },
        ProjectCommands::Create {
            name,
            description,
            color,
        } => match store
            .add_project(&name, description.as_deref(), color.as_deref())
            .await
        {
            Ok(project) => print_json(&project_value(&project), pretty),
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
        ProjectCommands::Update {
            id,
            name,
            description,
            color,
        } => {
            let patch = ProjectPatch {
                name,
                description,
                color,
            };
            if !store.update_project(&id, patch).await {
                return ExitCode::FAILURE;
            }
            match store.project(&id) {
                Some(project) => print_json(&project_value(project), pretty),
                None => ExitCode::SUCCESS,
            }
        }
        ProjectCommands::Delete { id } => {
            if store.delete_project(&id).await {
                print_json(&json!({"deleted": id}), pretty)
            } else {
                ExitCode::FAILURE
            }
        }
        ProjectCommands::Progress { id } => match store.project(&id) {
            Some(_) => print_json(
                &json!({"projectId": id, "progress": store.progress(&id)}),
                pretty,
            ),
            None => {
                eprintln!("Error: project not found: {id}");
                ExitCode::FAILURE
            }
        },
    }
}

async fn run_task(store: &mut ProjectStore, action: TaskCommands, pretty: bool) -> ExitCode {
    match action {
        TaskCommands::Add {
            project_id,
            title,
            section,
            due_date,
        } => match store
            .add_task(&project_id, &title, section.as_deref(), due_date.as_deref())
            .await
        {
            Ok(task) => print_json(&task_value(&task), pretty),
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
        TaskCommands::List {
            project_id,
            overdue,
        } => match store.project(&project_id) {
            Some(project) => {
                let values = project
                    .tasks
                    .iter()
                    .filter(|t| !overdue || t.is_overdue_today())
                    .map(task_value)
                    .collect();
                print_json(&Value::Array(values), pretty)
            }
            None => {
                eprintln!("Error: project not found: {project_id}");
                ExitCode::FAILURE
            }
        },
        TaskCommands::Update {
            project_id,
            id,
            title,
            description,
            due_date,
            section,
        } => {
            let patch = TaskPatch {
                title,
                description,
                due_date,
                section,
                ..TaskPatch::default()
            };
            if !store.update_task(&project_id, &id, patch).await {
                return ExitCode::FAILURE;
            }
            print_updated_task(store, &project_id, &id, pretty)
        }
        TaskCommands::Delete { project_id, id } => {
            if store.delete_task(&project_id, &id).await {
                print_json(&json!({"deleted": id}), pretty)
            } else {
                ExitCode::FAILURE
            }
        }
        TaskCommands::Toggle { project_id, id } => {
            run_transition(store, &project_id, &id, TaskTransition::Toggle, pretty).await
        }
        TaskCommands::Advance { project_id, id } => {
            run_transition(store, &project_id, &id, TaskTransition::Advance, pretty).await
        }
        TaskCommands::SetStatus {
            project_id,
            id,
            status,
        } => {
            let transition = TaskTransition::Set(parse_column(&status));
            run_transition(store, &project_id, &id, transition, pretty).await
        }
        TaskCommands::Move {
            project_id,
            id,
            to,
            index,
        } => {
            let source = {
                let Some(project) = store.project(&project_id) else {
                    eprintln!("Error: project not found: {project_id}");
                    return ExitCode::FAILURE;
                };
                let Some(task) = project.task(&id) else {
                    eprintln!("Error: task not found: {id}");
                    return ExitCode::FAILURE;
                };
                let board = Board::group(&project.tasks);
                let position = board
                    .column(task.status)
                    .tasks
                    .iter()
                    .position(|t| t.id == id)
                    .unwrap_or(0);
                CardSlot {
                    column: task.status,
                    index: position,
                }
            };

            let drop = CardDrop {
                task_id: id.clone(),
                source,
                destination: CardSlot {
                    column: parse_column(&to),
                    index,
                },
            };

            if !store.move_card(&project_id, &drop).await {
                return ExitCode::FAILURE;
            }
            print_updated_task(store, &project_id, &id, pretty)
        }
    }
}

async fn run_transition(
    store: &mut ProjectStore,
    project_id: &str,
    task_id: &str,
    transition: TaskTransition,
    pretty: bool,
) -> ExitCode {
    if !store.transition_task(project_id, task_id, transition).await {
        return ExitCode::FAILURE;
    }
    print_updated_task(store, project_id, task_id, pretty)
}

fn print_updated_task(
    store: &ProjectStore,
    project_id: &str,
    task_id: &str,
    pretty: bool,
) -> ExitCode {
    match store.project(project_id).and_then(|p| p.task(task_id)) {
        Some(task) => print_json(&task_value(task), pretty),
        None => ExitCode::SUCCESS,
    }
}

fn run_board(store: &ProjectStore, project_id: &str, hide_completed: bool, pretty: bool) -> ExitCode {
    match store.board(project_id, hide_completed) {
        Some(board) => print_json(&board_value(project_id, &board), pretty),
        None => {
            eprintln!("Error: project not found: {project_id}");
            ExitCode::FAILURE
        }
    }
}

/// Map a CLI column name to its status. The clap value parser restricts the
/// input to the three known names.
fn parse_column(name: &str) -> TaskStatus {
    match name {
        "in-progress" => TaskStatus::InProgress,
        "completed" => TaskStatus::Completed,
        _ => TaskStatus::NotStarted,
    }
}
