//! Project entity - named container owning an ordered collection of tasks.

use crate::models::task::Task;

use serde::{Deserialize, Serialize};

/// Display color applied when the backend omits one.
pub const DEFAULT_COLOR: &str = "#0EA5E9";

/// A project owns its tasks: tasks cannot outlive the project or be shared
/// across projects, and every owned task carries `project_id == self.id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub tasks: Vec<Task>,
    pub created_at: String,
    pub owner_id: String,
}

impl Project {
    /// Create an empty project with default display attributes.
    pub fn new(id: impl Into<String>, name: impl Into<String>, owner_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            color: DEFAULT_COLOR.to_string(),
            tasks: Vec::new(),
            created_at: String::new(),
            owner_id: owner_id.into(),
        }
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == task_id)
    }

    /// Stepped completion percentage of the owned tasks.
    pub fn progress(&self) -> u8 {
        crate::rules::progress::project_progress(&self.tasks)
    }

    /// Check the task-ownership invariant.
    pub fn owns_all_tasks(&self) -> bool {
        self.tasks.iter().all(|t| t.project_id == self.id)
    }
}
