pub mod project;
pub mod tag;
pub mod task;
pub mod task_status;
pub mod user;
