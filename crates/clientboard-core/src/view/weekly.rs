//! Weekly agenda: projects due in the Monday-to-Sunday week around a date.

use std::collections::BTreeMap;
use std::{fmt, str::FromStr};

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::project::normalize;
use crate::model::{ParseEnumError, Project};

/// How days without any deadline appear in a weekly view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyDays {
    /// All seven days are present; empty ones carry an empty bucket.
    #[default]
    Show,
    /// Only days with at least one project are present.
    Hide,
}

impl EmptyDays {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Hide => "hide",
        }
    }
}

impl fmt::Display for EmptyDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmptyDays {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "show" => Ok(Self::Show),
            "hide" => Ok(Self::Hide),
            _ => Err(ParseEnumError {
                expected: "empty-days policy",
                got: s.to_string(),
            }),
        }
    }
}

/// Projects grouped by deadline within one ISO week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyBuckets<'a> {
    /// Monday of the week.
    pub start: NaiveDate,
    /// Sunday of the week.
    pub end: NaiveDate,
    pub days: BTreeMap<NaiveDate, Vec<&'a Project>>,
}

impl WeeklyBuckets<'_> {
    /// Number of projects across all days.
    #[must_use]
    pub fn project_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }
}

/// Monday and Sunday of the ISO week containing `reference`.
#[must_use]
pub fn week_bounds(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = u64::from(reference.weekday().num_days_from_monday());
    let monday = reference - Days::new(offset);
    (monday, monday + Days::new(6))
}

/// Bucket projects due in the week containing `reference` by exact date.
///
/// Within a day, projects keep collection order.
#[must_use]
pub fn weekly_buckets(
    projects: &[Project],
    reference: NaiveDate,
    empty_days: EmptyDays,
) -> WeeklyBuckets<'_> {
    let (start, end) = week_bounds(reference);

    let mut days: BTreeMap<NaiveDate, Vec<&Project>> = BTreeMap::new();
    if empty_days == EmptyDays::Show {
        for day in start.iter_days().take(7) {
            days.insert(day, Vec::new());
        }
    }

    for project in projects
        .iter()
        .filter(|p| (start..=end).contains(&p.deadline))
    {
        days.entry(project.deadline).or_default().push(project);
    }

    WeeklyBuckets { start, end, days }
}
