//! Progress rule: stepped completion percentage of a task collection.

use crate::models::task::Task;

/// Percentage of completed tasks, rounded to the nearest multiple of 5 and
/// clamped to `[0, 100]`. An empty collection is 0% complete.
///
/// Rounding is half-away-from-zero, so 1 of 3 completed (33.33%) reports 35
/// and 2 of 3 (66.67%) reports 65. Always recomputed from current state,
/// never cached.
pub fn project_progress(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks.iter().filter(|t| t.completed).count();
    let raw = completed as f64 * 100.0 / tasks.len() as f64;
    let stepped = (raw / 5.0).round() * 5.0;
    stepped.clamp(0.0, 100.0) as u8
}
