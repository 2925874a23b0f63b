use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

use crate::color::ColorCode;

/// The two kanban columns a project can sit in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Todo,
    Done,
}

impl Status {
    pub const ALL: [Self; 2] = [Self::Todo, Self::Done];

    const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Done => "done",
        }
    }
}

/// Missing, null, or unrecognized status values load as [`Status::Todo`].
impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(raw
            .as_str()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default())
    }
}

/// A tracked piece of client work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub client: String,
    pub project: String,
    #[serde(default)]
    pub detail: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub color: ColorCode,
    #[serde(default)]
    pub status: Status,
}

/// Field values for a project that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub client: String,
    pub project: String,
    pub detail: String,
    pub deadline: NaiveDate,
}

impl NewProject {
    pub fn new(
        client: impl Into<String>,
        project: impl Into<String>,
        detail: impl Into<String>,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            client: client.into(),
            project: project.into(),
            detail: detail.into(),
            deadline,
        }
    }
}

/// A partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub client: Option<String>,
    pub project: Option<String>,
    pub detail: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub status: Option<Status>,
}

impl ProjectPatch {
    /// Check if any fields are set for update.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.client.is_none()
            && self.project.is_none()
            && self.detail.is_none()
            && self.deadline.is_none()
            && self.status.is_none()
    }

    #[must_use]
    pub const fn status(status: Status) -> Self {
        Self {
            client: None,
            project: None,
            detail: None,
            deadline: None,
            status: Some(status),
        }
    }
}

/// Error returned when parsing an enum value from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub expected: &'static str,
    pub got: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: '{}'", self.expected, self.got)
    }
}

impl std::error::Error for ParseEnumError {}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn normalize(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}

impl FromStr for Status {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "todo" => Ok(Self::Todo),
            "done" => Ok(Self::Done),
            _ => Err(ParseEnumError {
                expected: "status",
                got: s.to_string(),
            }),
        }
    }
}
