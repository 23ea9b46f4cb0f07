use crate::{is_overdue, Task};

use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

fn task_due(due: Option<&str>) -> Task {
    let mut task = Task::new("t1", "p1", "Task");
    task.due_date = due.map(String::from);
    task
}

#[test]
fn test_no_due_date_is_never_overdue() {
    let task = task_due(None);
    assert!(!is_overdue(&task, today()));

    let mut completed = task_due(None);
    completed.apply_completed(true);
    assert!(!is_overdue(&completed, today()));
}

#[test]
fn test_completed_task_with_past_due_date_is_not_overdue() {
    let mut task = task_due(Some("2026-03-01"));
    task.apply_completed(true);
    assert!(!is_overdue(&task, today()));
}

#[test]
fn test_incomplete_task_with_past_due_date_is_overdue() {
    let task = task_due(Some("2026-03-14"));
    assert!(is_overdue(&task, today()));
}

#[test]
fn test_due_today_is_not_overdue() {
    let task = task_due(Some("2026-03-15"));
    assert!(!is_overdue(&task, today()));
}

#[test]
fn test_due_in_future_is_not_overdue() {
    let task = task_due(Some("2026-03-16"));
    assert!(!is_overdue(&task, today()));
}

#[test]
fn test_unparseable_due_date_is_not_overdue() {
    assert!(!is_overdue(&task_due(Some("")), today()));
    assert!(!is_overdue(&task_due(Some("next tuesday")), today()));
    assert!(!is_overdue(&task_due(Some("2026-13-40")), today()));
}
