mod overdue;
mod progress;
