//! JSON rendering of command results. Everything the CLI prints on stdout
//! goes through [`print_json`].

use std::process::ExitCode;

use serde_json::{Value, json};
use td_core::{Board, Project, Task};

pub(crate) fn print_json(value: &Value, pretty: bool) -> ExitCode {
    if pretty {
        match serde_json::to_string_pretty(value) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error serializing response: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        println!("{value}");
        ExitCode::SUCCESS
    }
}

pub(crate) fn task_value(task: &Task) -> Value {
    json!({
        "id": task.id,
        "projectId": task.project_id,
        "title": task.title,
        "description": task.description,
        "completed": task.completed,
        "status": task.status.as_str(),
        "dueDate": task.due_date,
        "overdue": task.is_overdue_today(),
        "section": task.section,
        "tags": task.tags.iter().map(|t| json!({
            "id": t.id,
            "name": t.name,
            "color": t.color.as_str(),
        })).collect::<Vec<_>>(),
    })
}

pub(crate) fn project_value(project: &Project) -> Value {
    json!({
        "id": project.id,
        "name": project.name,
        "description": project.description,
        "color": project.color,
        "progress": project.progress(),
        "tasks": project.tasks.iter().map(task_value).collect::<Vec<_>>(),
    })
}

pub(crate) fn board_value(project_id: &str, board: &Board<'_>) -> Value {
    json!({
        "projectId": project_id,
        "columns": board.columns.iter().map(|column| json!({
            "status": column.status.as_str(),
            "tasks": column.tasks.iter().map(|t| task_value(t)).collect::<Vec<_>>(),
        })).collect::<Vec<_>>(),
    })
}
