use std::fmt;
use std::io;
use std::path::PathBuf;

/// Machine-readable error codes for scripts and front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    ProjectNotFound,
    InvalidField,
    AmbiguousId,
    InvalidStatus,
    ReconcileConflict,
    NothingSelected,
    CorruptStore,
    StoreIoFailed,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1002",
            Self::ProjectNotFound => "E2001",
            Self::InvalidField => "E2002",
            Self::AmbiguousId => "E2004",
            Self::InvalidStatus => "E2005",
            Self::ReconcileConflict => "E2006",
            Self::NothingSelected => "E2007",
            Self::CorruptStore => "E3003",
            Self::StoreIoFailed => "E5001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::ProjectNotFound => "Project not found",
            Self::InvalidField => "Invalid field value",
            Self::AmbiguousId => "Ambiguous project ID",
            Self::InvalidStatus => "Invalid status value",
            Self::ReconcileConflict => "Project in both kanban columns",
            Self::NothingSelected => "No project selected",
            Self::CorruptStore => "Corrupt project store",
            Self::StoreIoFailed => "Project store I/O failed",
        }
    }

    /// Optional remediation hint that can be surfaced to users.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in .clientboard/config.toml and retry."),
            Self::ProjectNotFound => Some("Run `cboard list` to see existing project IDs."),
            Self::InvalidField => Some("Client and project names must not be empty."),
            Self::AmbiguousId => Some("Use a longer ID prefix to disambiguate."),
            Self::InvalidStatus => Some("Use one of: todo, done."),
            Self::ReconcileConflict => Some("Each project ID must appear in exactly one column."),
            Self::NothingSelected => Some("Open a project in the detail panel first."),
            Self::CorruptStore => Some("Fix or remove the data file; it must hold a `projects` array."),
            Self::StoreIoFailed => Some("Check disk space and write permissions."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Everything that can go wrong in the store, handlers and config loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field is empty or a value is out of range.
    #[error("invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },

    /// Status text is not one of `todo` / `done`.
    #[error("invalid status '{got}' (expected todo or done)")]
    InvalidStatus { got: String },

    /// No project carries this id.
    #[error("project '{id}' not found")]
    NotFound { id: String },

    /// An id prefix matched more than one project.
    #[error("id prefix '{prefix}' matches {} projects", .matches.len())]
    AmbiguousId {
        prefix: String,
        matches: Vec<String>,
    },

    /// Kanban reconciliation received an id in both columns.
    #[error("project '{id}' appears in both the todo and done columns")]
    ReconcileConflict { id: String },

    /// A detail-panel action ran with no project open.
    #[error("no project is open in the detail panel")]
    NothingSelected,

    /// The persisted document exists but does not parse.
    #[error("failed to parse {}: {source}", .path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the persisted document failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A config file exists but does not parse.
    #[error("failed to parse {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Machine-readable code associated with this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { .. } => ErrorCode::InvalidField,
            Self::InvalidStatus { .. } => ErrorCode::InvalidStatus,
            Self::NotFound { .. } => ErrorCode::ProjectNotFound,
            Self::AmbiguousId { .. } => ErrorCode::AmbiguousId,
            Self::ReconcileConflict { .. } => ErrorCode::ReconcileConflict,
            Self::NothingSelected => ErrorCode::NothingSelected,
            Self::CorruptStore { .. } => ErrorCode::CorruptStore,
            Self::Io { .. } => ErrorCode::StoreIoFailed,
            Self::Config { .. } => ErrorCode::ConfigParseError,
        }
    }

    /// Optional remediation hint for users.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        self.code().hint()
    }

    /// True for errors the user can fix by changing their input.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::InvalidStatus { .. }
                | Self::NotFound { .. }
                | Self::AmbiguousId { .. }
                | Self::ReconcileConflict { .. }
                | Self::NothingSelected
        )
    }
}
