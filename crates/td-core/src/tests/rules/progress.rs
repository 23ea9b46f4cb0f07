use crate::{project_progress, Task};

fn tasks(total: usize, completed: usize) -> Vec<Task> {
    (0..total)
        .map(|i| {
            let mut task = Task::new(format!("t{i}"), "p1", format!("Task {i}"));
            if i < completed {
                task.apply_completed(true);
            }
            task
        })
        .collect()
}

#[test]
fn test_empty_collection_is_zero() {
    assert_eq!(project_progress(&[]), 0);
}

#[test]
fn test_one_of_three_rounds_up_to_35() {
    assert_eq!(project_progress(&tasks(3, 1)), 35);
}

#[test]
fn test_one_of_two_is_50() {
    assert_eq!(project_progress(&tasks(2, 1)), 50);
}

#[test]
fn test_two_of_three_rounds_down_to_65() {
    assert_eq!(project_progress(&tasks(3, 2)), 65);
}

#[test]
fn test_bounds() {
    assert_eq!(project_progress(&tasks(4, 0)), 0);
    assert_eq!(project_progress(&tasks(4, 4)), 100);
}

#[test]
fn test_monotone_in_completed_count() {
    let total = 7;
    let mut last = 0;
    for completed in 0..=total {
        let progress = project_progress(&tasks(total, completed));
        assert!(progress >= last, "{completed}/{total} regressed");
        last = progress;
    }
}
