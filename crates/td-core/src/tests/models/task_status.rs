use crate::TaskStatus;

use std::str::FromStr;

#[test]
fn test_task_status_as_str() {
    assert_eq!(TaskStatus::NotStarted.as_str(), "NOT_STARTED");
    assert_eq!(TaskStatus::InProgress.as_str(), "IN_PROGRESS");
    assert_eq!(TaskStatus::Completed.as_str(), "COMPLETED");
}

#[test]
fn test_task_status_from_str() {
    assert_eq!(
        TaskStatus::from_str("NOT_STARTED").unwrap(),
        TaskStatus::NotStarted
    );
    assert_eq!(
        TaskStatus::from_str("IN_PROGRESS").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(
        TaskStatus::from_str("COMPLETED").unwrap(),
        TaskStatus::Completed
    );
    assert!(TaskStatus::from_str("DONE").is_err());
    assert!(TaskStatus::from_str("completed").is_err());
}

#[test]
fn test_task_status_default() {
    assert_eq!(TaskStatus::default(), TaskStatus::NotStarted);
}

#[test]
fn test_task_status_wire_format() {
    let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
    assert_eq!(json, "\"IN_PROGRESS\"");

    let status: TaskStatus = serde_json::from_str("\"COMPLETED\"").unwrap();
    assert_eq!(status, TaskStatus::Completed);
}
