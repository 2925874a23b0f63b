//! Two-column kanban board.

use serde::Serialize;

use crate::model::{Project, Status};

/// Projects partitioned by status, each column in collection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KanbanColumns<'a> {
    pub todo: Vec<&'a Project>,
    pub done: Vec<&'a Project>,
}

impl<'a> KanbanColumns<'a> {
    #[must_use]
    pub fn column(&self, status: Status) -> &[&'a Project] {
        match status {
            Status::Todo => &self.todo,
            Status::Done => &self.done,
        }
    }

    /// Ids of one column, in display order.
    #[must_use]
    pub fn ids(&self, status: Status) -> Vec<String> {
        self.column(status).iter().map(|p| p.id.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.todo.len() + self.done.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todo.is_empty() && self.done.is_empty()
    }
}

/// Partition every project into exactly one column.
#[must_use]
pub fn kanban_columns(projects: &[Project]) -> KanbanColumns<'_> {
    let (done, todo): (Vec<&Project>, Vec<&Project>) =
        projects.iter().partition(|p| p.status == Status::Done);
    KanbanColumns { todo, done }
}
