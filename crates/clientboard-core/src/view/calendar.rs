//! Calendar events: one entry per project, dated on its deadline.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::color::ColorCode;
use crate::error::Error;
use crate::model::Project;

/// A single entry on the month calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub color: ColorCode,
}

impl CalendarEvent {
    fn from_project(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: event_title(project),
            date: project.deadline,
            color: project.color.clone(),
        }
    }
}

/// `"{client} | {project} - {detail}"`
#[must_use]
pub fn event_title(project: &Project) -> String {
    format!("{} | {} - {}", project.client, project.project, project.detail)
}

/// One event per project, in collection order.
#[must_use]
pub fn calendar_events(projects: &[Project]) -> Vec<CalendarEvent> {
    projects.iter().map(CalendarEvent::from_project).collect()
}

/// Events dated within one month, sorted by date and then title.
///
/// # Errors
///
/// Returns [`Error::Validation`] if `month` is not in `1..=12`.
pub fn calendar_month(
    projects: &[Project],
    year: i32,
    month: u32,
) -> Result<Vec<CalendarEvent>, Error> {
    if !(1..=12).contains(&month) {
        return Err(Error::Validation {
            field: "month",
            reason: "must be between 1 and 12",
        });
    }

    let mut events: Vec<CalendarEvent> = projects
        .iter()
        .filter(|p| p.deadline.year() == year && p.deadline.month() == month)
        .map(CalendarEvent::from_project)
        .collect();
    events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.title.cmp(&b.title)));
    Ok(events)
}
