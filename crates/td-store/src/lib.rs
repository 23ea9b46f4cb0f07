//! In-memory project/task store.
//!
//! The store owns the client-side cache of projects and tasks, mediates
//! every mutation through the backend API, and reconciles backend responses
//! into the cache. Derived values (progress, board columns, overdue flags)
//! are recomputed on read from `td-core` rules.

pub(crate) mod error;
pub(crate) mod normalize;
pub(crate) mod notify;
pub(crate) mod store;

pub use error::{Result as StoreResult, StoreError};
pub use notify::{LogNotifier, Notifier, Outcome, RecordingNotifier};
pub use store::{ProjectStore, TaskTransition};
