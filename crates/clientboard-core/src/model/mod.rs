pub mod project;

pub use project::{NewProject, ParseEnumError, Project, ProjectPatch, Status};
