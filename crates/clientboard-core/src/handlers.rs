//! Mutation handlers invoked by a front end in response to user actions.
//!
//! Each handler performs exactly one store operation and reports the
//! outcome. Front-end session state (which project the detail panel has
//! open) is owned by the caller as a [`DetailPanel`] and passed in.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::Error;
use crate::model::{NewProject, Project, ProjectPatch, Status};
use crate::store::{ProjectStore, StatusChange};

/// Which project, if any, is open for editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPanel {
    selected: Option<String>,
}

impl DetailPanel {
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Open `id` in the panel, replacing any previous selection.
    pub fn open(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// The selected project, if it still exists in `store`.
    #[must_use]
    pub fn project<'a>(&self, store: &'a ProjectStore) -> Option<&'a Project> {
        self.selected().and_then(|id| store.get(id))
    }

    fn require(&self) -> Result<String, Error> {
        self.selected.clone().ok_or(Error::NothingSelected)
    }
}

/// # Errors
///
/// See [`ProjectStore::create`].
pub fn add_project(store: &mut ProjectStore, fields: NewProject) -> Result<Project, Error> {
    store.create(fields)
}

/// # Errors
///
/// See [`ProjectStore::update`].
pub fn update_project(
    store: &mut ProjectStore,
    id: &str,
    patch: ProjectPatch,
) -> Result<Project, Error> {
    store.update(id, patch)
}

/// Apply `patch` to the project open in `panel`, then close the panel.
///
/// On failure the panel stays open so the user can correct the input.
///
/// # Errors
///
/// Returns [`Error::NothingSelected`] when the panel is closed, otherwise
/// see [`ProjectStore::update`].
pub fn update_selected(
    store: &mut ProjectStore,
    panel: &mut DetailPanel,
    patch: ProjectPatch,
) -> Result<Project, Error> {
    let id = panel.require()?;
    let updated = store.update(&id, patch)?;
    panel.close();
    Ok(updated)
}

/// Returns whether a record was removed.
///
/// # Errors
///
/// See [`ProjectStore::delete`].
pub fn delete_project(store: &mut ProjectStore, id: &str) -> Result<bool, Error> {
    store.delete(id)
}

/// Delete the project open in `panel`, then close the panel.
///
/// # Errors
///
/// Returns [`Error::NothingSelected`] when the panel is closed, otherwise
/// see [`ProjectStore::delete`].
pub fn delete_selected(store: &mut ProjectStore, panel: &mut DetailPanel) -> Result<bool, Error> {
    let id = panel.require()?;
    let removed = store.delete(&id)?;
    panel.close();
    Ok(removed)
}

/// Change one project's status from its textual form.
///
/// # Errors
///
/// See [`ProjectStore::set_status`].
pub fn change_status(store: &mut ProjectStore, id: &str, status: &str) -> Result<Project, Error> {
    store.set_status(id, status)
}

/// Result of applying post-drag kanban membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    /// Ids whose status changed.
    pub moved: Vec<String>,
    /// Ids already in the column they were dropped in.
    pub unchanged: Vec<String>,
    /// Ids the front end sent that are no longer in the store.
    pub stale: Vec<String>,
}

/// Write kanban column membership back onto the store and persist once.
///
/// Every id in `todo` gets status todo and every id in `done` gets status
/// done. Projects in neither column are left alone. An id listed in both
/// columns is rejected before anything is written. Repeats within one
/// column count once. Ids unknown to the store are skipped and reported
/// as stale.
///
/// # Errors
///
/// Returns [`Error::ReconcileConflict`] for an id in both columns, or a
/// persistence error.
pub fn reconcile_kanban(
    store: &mut ProjectStore,
    todo: &[String],
    done: &[String],
) -> Result<ReconcileReport, Error> {
    let todo_ids: HashSet<&str> = todo.iter().map(String::as_str).collect();
    if let Some(id) = done.iter().find(|id| todo_ids.contains(id.as_str())) {
        return Err(Error::ReconcileConflict { id: id.clone() });
    }

    let changes: Vec<StatusChange> = distinct(todo)
        .map(|id| (id, Status::Todo))
        .chain(distinct(done).map(|id| (id, Status::Done)))
        .map(|(id, status)| StatusChange {
            id: id.clone(),
            status,
        })
        .collect();

    let batch = store.set_statuses(&changes)?;

    if !batch.missing.is_empty() {
        warn!(stale = ?batch.missing, "kanban reconcile skipped unknown ids");
    }
    info!(
        moved = batch.changed.len(),
        unchanged = batch.unchanged.len(),
        "reconciled kanban board"
    );

    Ok(ReconcileReport {
        moved: batch.changed,
        unchanged: batch.unchanged,
        stale: batch.missing,
    })
}

/// First occurrence of each id, in order.
fn distinct(ids: &[String]) -> impl Iterator<Item = &String> {
    let mut seen = HashSet::new();
    ids.iter().filter(move |id| seen.insert(*id))
}
