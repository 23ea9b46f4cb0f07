//! Overdue rule: a task is overdue iff it has a due date strictly before the
//! reference calendar day and is not completed.

use crate::models::task::Task;

use chrono::{Local, NaiveDate};

const ISO_DATE: &str = "%Y-%m-%d";

/// Evaluate the overdue rule against an explicit reference date.
///
/// The comparison is date-only: a task due on `today` is not overdue.
/// Tasks without a due date, with an unparseable due date, or already
/// completed are never overdue.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    if task.completed {
        return false;
    }
    let Some(due) = task.due_date.as_deref() else {
        return false;
    };
    match NaiveDate::parse_from_str(due, ISO_DATE) {
        Ok(due_date) => due_date < today,
        Err(_) => false,
    }
}

/// Evaluate the overdue rule against the local calendar date.
pub fn is_overdue_today(task: &Task) -> bool {
    is_overdue(task, Local::now().date_naive())
}
