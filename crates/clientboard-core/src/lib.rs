//! clientboard-core library.
//!
//! A flat-file store of client projects, a deterministic client color
//! assigner, read-only calendar/weekly/kanban projections, and the mutation
//! handlers a front end calls into.
//!
//! # Conventions
//!
//! - **Errors**: fallible operations return [`Result`] with the crate
//!   [`Error`]; each variant maps to a stable [`ErrorCode`].
//! - **Logging**: `tracing` macros only; the binary installs the subscriber.

pub mod color;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod store;
pub mod view;

pub use color::{ColorCode, color_for};
pub use error::{Error, ErrorCode};
pub use model::{NewProject, Project, ProjectPatch, Status};
pub use store::ProjectStore;

pub type Result<T, E = Error> = std::result::Result<T, E>;
