//! Read-only projections over a store snapshot.
//!
//! Nothing in here mutates or persists; every function takes the snapshot
//! slice and borrows from it.

pub mod calendar;
pub mod kanban;
pub mod weekly;

pub use calendar::{CalendarEvent, calendar_events, calendar_month, event_title};
pub use kanban::{KanbanColumns, kanban_columns};
pub use weekly::{EmptyDays, WeeklyBuckets, week_bounds, weekly_buckets};
