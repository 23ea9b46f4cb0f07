//! HTTP client for the taskdeck REST backend.
//!
//! Exposes the typed API surface (`ApiClient`), the wire DTOs the backend
//! returns, and the locally persisted `Session`.

pub(crate) mod client;
pub(crate) mod dto;
pub(crate) mod error;
pub(crate) mod payload;
pub(crate) mod session;

pub use client::ApiClient;
pub use dto::{ProjectDto, ProgressDto, StatusDto, TagDto, TaskDto, ToggleDto};
pub use error::{ClientError, Result as ClientResult};
pub use payload::{NewProject, NewTask, ProjectPatch, TaskPatch};
pub use session::Session;

#[cfg(test)]
mod tests;
