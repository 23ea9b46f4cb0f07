//! Single entry point for defaulting backend data into domain models.
//!
//! Absent `status` becomes `NotStarted`, absent `color` becomes the default
//! project color, absent `section` becomes the default section label. No
//! read path re-derives these defaults.

use std::str::FromStr;

use td_client::{ProjectDto, TagDto, TaskDto};
use td_core::models::project::DEFAULT_COLOR;
use td_core::models::task::DEFAULT_SECTION;
use td_core::{Project, Tag, TagColor, Task, TaskStatus};

pub(crate) fn project_from_dto(dto: ProjectDto, owner_id: &str) -> Project {
    let id = dto.id;
    let tasks = dto
        .tasks
        .unwrap_or_default()
        .into_iter()
        .map(|t| task_from_dto(t, &id))
        .collect();

    Project {
        name: dto.name.or(dto.title).unwrap_or_default(),
        description: dto.description.unwrap_or_default(),
        color: dto.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        tasks,
        created_at: dto.created_at.unwrap_or_default(),
        owner_id: owner_id.to_string(),
        id,
    }
}

pub(crate) fn task_from_dto(dto: TaskDto, project_id: &str) -> Task {
    // Snapshot imports keep the wire pair as-is even when status and
    // completed disagree; the board projection tolerates strays, and every
    // store mutation re-establishes coherence on write.
    Task {
        id: dto.id,
        project_id: project_id.to_string(),
        title: dto.title.unwrap_or_default(),
        description: dto.description.unwrap_or_default(),
        completed: dto.completed.unwrap_or(false),
        status: parse_status(dto.status.as_deref()),
        due_date: non_empty(dto.due_date),
        section: dto
            .section
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SECTION.to_string()),
        tags: dto
            .tags
            .unwrap_or_default()
            .into_iter()
            .map(tag_from_dto)
            .collect(),
        created_at: dto.created_at.unwrap_or_default(),
    }
}

fn tag_from_dto(dto: TagDto) -> Tag {
    Tag {
        id: dto.id,
        name: dto.name.unwrap_or_default(),
        color: dto
            .color
            .as_deref()
            .and_then(|c| TagColor::from_str(c).ok())
            .unwrap_or(TagColor::Blue),
    }
}

/// Merge backend-returned fields into a cached project, preferring backend
/// values. The task list is left alone; task merges go through
/// [`merge_task_fields`].
pub(crate) fn merge_project_fields(project: &mut Project, dto: &ProjectDto) {
    if let Some(name) = dto.name.clone().or_else(|| dto.title.clone()) {
        project.name = name;
    }
    if let Some(description) = &dto.description {
        project.description = description.clone();
    }
    if let Some(color) = &dto.color {
        project.color = color.clone();
    }
}

/// Merge backend-returned fields into a cached task, preferring backend
/// values. The caller re-establishes status/completed coherence afterwards.
pub(crate) fn merge_task_fields(task: &mut Task, dto: &TaskDto) {
    if let Some(title) = &dto.title {
        task.title = title.clone();
    }
    if let Some(description) = &dto.description {
        task.description = description.clone();
    }
    if let Some(completed) = dto.completed {
        task.completed = completed;
    }
    if let Some(status) = dto.status.as_deref().and_then(|s| TaskStatus::from_str(s).ok()) {
        task.status = status;
    }
    if let Some(due_date) = dto.due_date.clone() {
        task.due_date = if due_date.is_empty() { None } else { Some(due_date) };
    }
    if let Some(section) = &dto.section
        && !section.is_empty()
    {
        task.section = section.clone();
    }
}

fn parse_status(raw: Option<&str>) -> TaskStatus {
    raw.and_then(|s| TaskStatus::from_str(s).ok()).unwrap_or_default()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
