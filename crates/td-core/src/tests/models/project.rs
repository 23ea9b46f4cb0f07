use crate::models::project::DEFAULT_COLOR;
use crate::{Project, Task};

#[test]
fn test_project_new_defaults() {
    let project = Project::new("p1", "Website", "alice");

    assert_eq!(project.id, "p1");
    assert_eq!(project.name, "Website");
    assert_eq!(project.color, DEFAULT_COLOR);
    assert_eq!(project.owner_id, "alice");
    assert!(project.tasks.is_empty());
    assert_eq!(project.progress(), 0);
}

#[test]
fn test_project_task_lookup() {
    let mut project = Project::new("p1", "Website", "alice");
    project.tasks.push(Task::new("t1", "p1", "Task A"));
    project.tasks.push(Task::new("t2", "p1", "Task B"));

    assert_eq!(project.task("t2").unwrap().title, "Task B");
    assert!(project.task("t3").is_none());

    project.task_mut("t1").unwrap().apply_completed(true);
    assert!(project.task("t1").unwrap().completed);
}

#[test]
fn test_project_owns_all_tasks() {
    let mut project = Project::new("p1", "Website", "alice");
    project.tasks.push(Task::new("t1", "p1", "Task A"));
    assert!(project.owns_all_tasks());

    project.tasks.push(Task::new("t2", "p2", "Stray"));
    assert!(!project.owns_all_tasks());
}
