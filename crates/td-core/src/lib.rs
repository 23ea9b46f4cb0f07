pub mod board;
pub mod error;
pub mod models;
pub mod rules;

pub use board::{Board, BoardColumn, CardDrop, CardSlot, BOARD_COLUMNS};
pub use error::{CoreError, Result as CoreResult};
pub use models::project::Project;
pub use models::tag::{Tag, TagColor};
pub use models::task::Task;
pub use models::task_status::TaskStatus;
pub use models::user::User;
pub use rules::overdue::{is_overdue, is_overdue_today};
pub use rules::progress::project_progress;

#[cfg(test)]
mod tests;
