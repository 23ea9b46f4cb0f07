//! Task entity - a unit of work belonging to exactly one project.

use crate::models::tag::Tag;
use crate::models::task_status::TaskStatus;

use serde::{Deserialize, Serialize};

/// Section label applied when the backend omits one.
pub const DEFAULT_SECTION: &str = "Recently assigned";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub project_id: String,

    pub title: String,
    pub description: String,

    /// Kept in sync with `status`: `completed == true` iff
    /// `status == TaskStatus::Completed`.
    pub completed: bool,
    pub status: TaskStatus,

    /// ISO calendar date (`YYYY-MM-DD`), no time component.
    pub due_date: Option<String>,
    pub section: String,
    pub tags: Vec<Tag>,

    pub created_at: String,
}

impl Task {
    /// Create a task with default values for everything but identity and title.
    pub fn new(id: impl Into<String>, project_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
            title: title.into(),
            description: String::new(),
            completed: false,
            status: TaskStatus::NotStarted,
            due_date: None,
            section: DEFAULT_SECTION.to_string(),
            tags: Vec::new(),
            created_at: String::new(),
        }
    }

    /// Set the status and re-derive `completed` so the pair stays coherent.
    pub fn apply_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.completed = status == TaskStatus::Completed;
    }

    /// Set the completion flag and pull `status` back into agreement.
    ///
    /// Completing forces `Completed`; un-completing only moves the status
    /// when it still says `Completed`, so an `InProgress` task keeps its
    /// column across a flip of the flag.
    pub fn apply_completed(&mut self, completed: bool) {
        self.completed = completed;
        if completed {
            self.status = TaskStatus::Completed;
        } else if self.status == TaskStatus::Completed {
            self.status = TaskStatus::NotStarted;
        }
    }

    /// Whether the status/completed pair satisfies the sync invariant.
    pub fn is_coherent(&self) -> bool {
        self.completed == (self.status == TaskStatus::Completed)
    }

    /// Whether this task is overdue relative to the local calendar date.
    pub fn is_overdue_today(&self) -> bool {
        crate::rules::overdue::is_overdue_today(self)
    }
}
