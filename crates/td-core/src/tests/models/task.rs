use crate::models::task::DEFAULT_SECTION;
use crate::{Task, TaskStatus};

#[test]
fn test_task_new_defaults() {
    let task = Task::new("t1", "p1", "Write the report");

    assert_eq!(task.id, "t1");
    assert_eq!(task.project_id, "p1");
    assert_eq!(task.title, "Write the report");
    assert!(!task.completed);
    assert_eq!(task.status, TaskStatus::NotStarted);
    assert_eq!(task.section, DEFAULT_SECTION);
    assert!(task.due_date.is_none());
    assert!(task.tags.is_empty());
    assert!(task.is_coherent());
}

#[test]
fn test_apply_status_syncs_completed() {
    let mut task = Task::new("t1", "p1", "Task");

    task.apply_status(TaskStatus::Completed);
    assert!(task.completed);
    assert!(task.is_coherent());

    task.apply_status(TaskStatus::InProgress);
    assert!(!task.completed);
    assert!(task.is_coherent());
}

#[test]
fn test_apply_completed_forces_completed_status() {
    let mut task = Task::new("t1", "p1", "Task");
    task.status = TaskStatus::InProgress;

    task.apply_completed(true);
    assert_eq!(task.status, TaskStatus::Completed);
    assert!(task.is_coherent());
}

#[test]
fn test_apply_completed_false_leaves_completed_bucket() {
    let mut task = Task::new("t1", "p1", "Task");
    task.apply_status(TaskStatus::Completed);

    task.apply_completed(false);
    assert_eq!(task.status, TaskStatus::NotStarted);
    assert!(task.is_coherent());
}

#[test]
fn test_toggle_twice_restores_pair() {
    let mut task = Task::new("t1", "p1", "Task");
    let original = (task.completed, task.status);

    task.apply_completed(!task.completed);
    task.apply_completed(!task.completed);

    assert_eq!((task.completed, task.status), original);
}
