//! Kanban board projection: a read-only grouping of a project's tasks into
//! the three status columns, plus the card-drop model used by drag-and-drop.

use crate::models::task::Task;
use crate::models::task_status::TaskStatus;

/// Column order on the board.
pub const BOARD_COLUMNS: [TaskStatus; 3] = [
    TaskStatus::NotStarted,
    TaskStatus::InProgress,
    TaskStatus::Completed,
];

/// One column of the board, borrowing the grouped tasks.
#[derive(Debug)]
pub struct BoardColumn<'a> {
    pub status: TaskStatus,
    pub tasks: Vec<&'a Task>,
}

/// Snapshot projection of tasks grouped by status. Recomputed per call,
/// never stored.
#[derive(Debug)]
pub struct Board<'a> {
    pub columns: [BoardColumn<'a>; 3],
}

impl<'a> Board<'a> {
    /// Group tasks by status into the three columns.
    pub fn group(tasks: &'a [Task]) -> Self {
        Self::group_filtered(tasks, false)
    }

    /// Group tasks by status, optionally hiding completed tasks.
    ///
    /// With `hide_completed`, the non-completed columns drop any task whose
    /// `completed` flag is set, and the `Completed` column keeps only tasks
    /// that are actually `completed` (hiding strays whose flag disagrees
    /// with their column).
    pub fn group_filtered(tasks: &'a [Task], hide_completed: bool) -> Self {
        let columns = BOARD_COLUMNS.map(|status| {
            let column_tasks = tasks
                .iter()
                .filter(|t| t.status == status)
                .filter(|t| {
                    if !hide_completed {
                        return true;
                    }
                    if status == TaskStatus::Completed {
                        t.completed
                    } else {
                        !t.completed
                    }
                })
                .collect();
            BoardColumn {
                status,
                tasks: column_tasks,
            }
        });
        Self { columns }
    }

    pub fn column(&self, status: TaskStatus) -> &BoardColumn<'a> {
        // BOARD_COLUMNS covers every status, so the lookup cannot miss.
        self.columns.iter().find(|c| c.status == status).unwrap()
    }
}

/// Position of a card on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub column: TaskStatus,
    pub index: usize,
}

/// A completed drag gesture: which card moved, from where, to where.
#[derive(Debug, Clone)]
pub struct CardDrop {
    pub task_id: String,
    pub source: CardSlot,
    pub destination: CardSlot,
}

impl CardDrop {
    /// A drop back onto the original column and position changes nothing.
    pub fn is_noop(&self) -> bool {
        self.source == self.destination
    }
}
