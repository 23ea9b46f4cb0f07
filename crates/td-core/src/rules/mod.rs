pub mod overdue;
pub mod progress;
