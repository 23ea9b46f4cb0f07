use crate::normalize::{
    merge_project_fields, merge_task_fields, project_from_dto, task_from_dto,
};
use crate::notify::Notifier;
use crate::{StoreError, StoreResult};

use std::str::FromStr;
use std::sync::Arc;

use log::{debug, warn};
use td_client::{ApiClient, NewProject, NewTask, ProjectPatch, TaskPatch};
use td_core::{Board, CardDrop, Project, Task, TaskStatus, User};

/// The single status-mutation entry point of the store.
///
/// `Set` carries an explicit target state; `Toggle` and `Advance` delegate
/// the decision to the backend's toggle and status endpoints. Whatever the
/// variant, the store re-establishes the status/completed sync invariant on
/// the merged result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskTransition {
    /// Move the task to an explicit status; `completed` follows the target.
    Set(TaskStatus),
    /// Flip the completion flag; the backend's returned value is
    /// authoritative.
    Toggle,
    /// Advance to the backend-computed next status in the cycle.
    Advance,
}

/// In-memory cache of projects and tasks, synchronized with the backend.
///
/// Constructed once at startup with its collaborators injected; consumers
/// receive a reference rather than reaching for globals. All mutations run
/// as discrete awaited operations: no locking, no cancellation, no retries,
/// and the later backend response wins when operations overlap.
pub struct ProjectStore {
    client: ApiClient,
    notifier: Arc<dyn Notifier>,
    projects: Vec<Project>,
    user: Option<User>,
}

impl ProjectStore {
    pub fn new(client: ApiClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            notifier,
            projects: Vec::new(),
            user: None,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Stepped completion percentage of a project's tasks; 0 for an unknown
    /// project. Recomputed from the cache on every call.
    pub fn progress(&self, project_id: &str) -> u8 {
        self.project(project_id).map(|p| p.progress()).unwrap_or(0)
    }

    /// Kanban projection of a project's tasks.
    pub fn board(&self, project_id: &str, hide_completed: bool) -> Option<Board<'_>> {
        self.project(project_id)
            .map(|p| Board::group_filtered(&p.tasks, hide_completed))
    }

    // =========================================================================
    // Auth gating
    // =========================================================================

    /// React to an authentication transition: losing the session clears the
    /// cache, gaining one triggers a refresh.
    pub async fn handle_auth_change(&mut self, user: Option<User>) {
        match user {
            None => {
                self.user = None;
                self.projects.clear();
                debug!("Auth cleared, dropping cached projects");
            }
            Some(user) => {
                self.user = Some(user);
                self.refresh_projects().await;
            }
        }
    }

    /// Replace the cache wholesale with the backend's current snapshot.
    ///
    /// Idempotent and safe to call repeatedly. A read failure notifies and
    /// leaves the cache as it was.
    pub async fn refresh_projects(&mut self) {
        let Some(owner_id) = self.user.as_ref().map(|u| u.id.clone()) else {
            self.projects.clear();
            return;
        };

        match self.client.list_projects().await {
            Ok(dtos) => {
                self.projects = dtos
                    .into_iter()
                    .map(|dto| project_from_dto(dto, &owner_id))
                    .collect();
                debug!("Refreshed {} projects", self.projects.len());
            }
            Err(e) => {
                warn!("Project refresh failed: {e}");
                self.notifier.failure("Unable to load projects");
            }
        }
    }

    // =========================================================================
    // Project mutations
    // =========================================================================

    /// Create a project. The backend-assigned identity is authoritative;
    /// creation failures propagate to the caller after notifying.
    pub async fn add_project(
        &mut self,
        name: &str,
        description: Option<&str>,
        color: Option<&str>,
    ) -> StoreResult<Project> {
        if name.trim().is_empty() {
            let err = StoreError::validation("Project name must not be empty");
            self.notifier.failure("Project name must not be empty");
            return Err(err);
        }

        let payload = NewProject {
            name: name.trim().to_string(),
            description: description.map(String::from),
            color: color.map(String::from),
        };

        match self.client.create_project(&payload).await {
            Ok(dto) => {
                let owner_id = self.user.as_ref().map(|u| u.id.as_str()).unwrap_or("");
                let project = project_from_dto(dto, owner_id);
                self.projects.push(project.clone());
                self.notifier.success("Project created");
                Ok(project)
            }
            Err(e) => {
                self.notifier.failure(&format!("Unable to create project: {e}"));
                Err(e.into())
            }
        }
    }

    /// Update a project's fields. Returns whether the update was applied.
    pub async fn update_project(&mut self, project_id: &str, patch: ProjectPatch) -> bool {
        match self.client.update_project(project_id, &patch).await {
            Ok(dto) => {
                if let Some(project) = self.project_mut(project_id) {
                    merge_project_fields(project, &dto);
                }
                self.notifier.success("Project updated");
                true
            }
            Err(e) => {
                self.notifier.failure(&format!("Unable to update project: {e}"));
                false
            }
        }
    }

    /// Delete a project. The local removal happens only once the backend
    /// confirms; a failure leaves the cache untouched.
    pub async fn delete_project(&mut self, project_id: &str) -> bool {
        match self.client.delete_project(project_id).await {
            Ok(()) => {
                self.projects.retain(|p| p.id != project_id);
                self.notifier.success("Project deleted");
                true
            }
            Err(e) => {
                self.notifier.failure(&format!("Unable to delete project: {e}"));
                false
            }
        }
    }

    // =========================================================================
    // Task mutations
    // =========================================================================

    /// Create a task in a project. Creation failures propagate to the
    /// caller after notifying.
    pub async fn add_task(
        &mut self,
        project_id: &str,
        title: &str,
        section: Option<&str>,
        due_date: Option<&str>,
    ) -> StoreResult<Task> {
        if title.trim().is_empty() {
            let err = StoreError::validation("Task title must not be empty");
            self.notifier.failure("Task title must not be empty");
            return Err(err);
        }
        if self.project(project_id).is_none() {
            let err = StoreError::not_found("Project", project_id);
            self.notifier.failure("Unable to create task: unknown project");
            return Err(err);
        }

        let payload = NewTask {
            title: title.trim().to_string(),
            description: None,
            section: section.map(String::from),
            due_date: due_date.map(String::from),
        };

        match self.client.create_task(project_id, &payload).await {
            Ok(dto) => {
                let task = task_from_dto(dto, project_id);
                // Checked above; the project cannot have vanished since.
                let project = self.project_mut(project_id).unwrap();
                project.tasks.push(task.clone());
                self.notifier.success("Task created");
                Ok(task)
            }
            Err(e) => {
                self.notifier.failure(&format!("Unable to create task: {e}"));
                Err(e.into())
            }
        }
    }

    /// Update a task's fields. Returns whether the update was applied.
    pub async fn update_task(&mut self, project_id: &str, task_id: &str, patch: TaskPatch) -> bool {
        match self.client.update_task(project_id, task_id, &patch).await {
            Ok(dto) => {
                if let Some(task) = self.task_mut(project_id, task_id) {
                    merge_task_fields(task, &dto);
                    enforce_coherence(task);
                }
                self.notifier.success("Task updated");
                true
            }
            Err(e) => {
                self.notifier.failure(&format!("Unable to update task: {e}"));
                false
            }
        }
    }

    /// Delete a task. Returns whether the deletion was applied.
    pub async fn delete_task(&mut self, project_id: &str, task_id: &str) -> bool {
        match self.client.delete_task(project_id, task_id).await {
            Ok(()) => {
                if let Some(project) = self.project_mut(project_id) {
                    project.tasks.retain(|t| t.id != task_id);
                }
                self.notifier.success("Task deleted");
                true
            }
            Err(e) => {
                self.notifier.failure(&format!("Unable to delete task: {e}"));
                false
            }
        }
    }

    /// Apply a status transition. Returns whether the transition was
    /// applied.
    pub async fn transition_task(
        &mut self,
        project_id: &str,
        task_id: &str,
        transition: TaskTransition,
    ) -> bool {
        match transition {
            TaskTransition::Set(target) => {
                let patch = TaskPatch::for_status(target);
                match self.client.update_task(project_id, task_id, &patch).await {
                    Ok(dto) => {
                        if let Some(task) = self.task_mut(project_id, task_id) {
                            merge_task_fields(task, &dto);
                            enforce_coherence(task);
                        }
                        self.notifier.success("Task status updated");
                        true
                    }
                    Err(e) => {
                        self.notifier
                            .failure(&format!("Unable to update task status: {e}"));
                        false
                    }
                }
            }
            TaskTransition::Toggle => match self.client.toggle_task(project_id, task_id).await {
                Ok(toggled) => {
                    if let Some(task) = self.task_mut(project_id, task_id) {
                        task.apply_completed(toggled.completed);
                    }
                    self.notifier.success("Task completion toggled");
                    true
                }
                Err(e) => {
                    self.notifier.failure(&format!("Unable to toggle task: {e}"));
                    false
                }
            },
            TaskTransition::Advance => {
                match self.client.advance_task_status(project_id, task_id).await {
                    Ok(advanced) => {
                        // The backend owns the cycle; the returned status is
                        // authoritative and completed is re-derived from it.
                        let status = TaskStatus::from_str(&advanced.status).unwrap_or_default();
                        if let Some(task) = self.task_mut(project_id, task_id) {
                            task.apply_status(status);
                        }
                        self.notifier.success("Task status advanced");
                        true
                    }
                    Err(e) => {
                        self.notifier
                            .failure(&format!("Unable to advance task status: {e}"));
                        false
                    }
                }
            }
        }
    }

    /// Apply a kanban card drop.
    ///
    /// A drop at the original column and position is a no-op: no mutation,
    /// no backend call. Otherwise the task takes the destination column's
    /// status (with `completed` following) as one atomic local update, and
    /// the full new state is pushed to the backend; a backend failure rolls
    /// the task back to its snapshot.
    pub async fn move_card(&mut self, project_id: &str, drop: &CardDrop) -> bool {
        if drop.is_noop() {
            return true;
        }

        let snapshot = match self.task_mut(project_id, &drop.task_id) {
            Some(task) => {
                let snapshot = task.clone();
                task.apply_status(drop.destination.column);
                snapshot
            }
            None => {
                self.notifier.failure("Unable to move task: unknown task");
                return false;
            }
        };

        // Push the full new state, not just the changed fields.
        let patch = {
            // Safe: the task was found just above.
            let task = self.task(project_id, &drop.task_id).unwrap();
            TaskPatch {
                title: Some(task.title.clone()),
                description: Some(task.description.clone()),
                completed: Some(task.completed),
                status: Some(task.status),
                due_date: task.due_date.clone(),
                section: Some(task.section.clone()),
            }
        };

        match self.client.update_task(project_id, &drop.task_id, &patch).await {
            Ok(dto) => {
                if let Some(task) = self.task_mut(project_id, &drop.task_id) {
                    merge_task_fields(task, &dto);
                    enforce_coherence(task);
                }
                self.notifier.success("Task moved");
                true
            }
            Err(e) => {
                if let Some(task) = self.task_mut(project_id, &drop.task_id) {
                    *task = snapshot;
                }
                self.notifier.failure(&format!("Unable to move task: {e}"));
                false
            }
        }
    }

    // =========================================================================
    // Internal lookups
    // =========================================================================

    fn project_mut(&mut self, project_id: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == project_id)
    }

    fn task(&self, project_id: &str, task_id: &str) -> Option<&Task> {
        self.project(project_id).and_then(|p| p.task(task_id))
    }

    fn task_mut(&mut self, project_id: &str, task_id: &str) -> Option<&mut Task> {
        self.project_mut(project_id).and_then(|p| p.task_mut(task_id))
    }
}

/// Re-establish the status/completed invariant after a merge; the merged
/// status wins over a contradictory flag.
fn enforce_coherence(task: &mut Task) {
    if !task.is_coherent() {
        let status = task.status;
        task.apply_status(status);
    }
}
