//! The flat-file project store.
//!
//! The whole collection lives in one JSON document of the form
//! `{"projects": [...]}`. Every mutation rewrites the document in full:
//! the new snapshot is written to a sibling `*.tmp` file and renamed over
//! the target, so readers never observe a half-written document.
//!
//! Mutations are applied to a copy of the snapshot and only committed to
//! memory once the write succeeded, so a failed save leaves the store
//! exactly as it was.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::color::color_for;
use crate::error::Error;
use crate::model::{NewProject, Project, ProjectPatch, Status};

/// Prefix carried by every project id.
pub const ID_PREFIX: &str = "p-";

/// Hex digits of the BLAKE3 digest kept in an id.
const ID_HEX_LEN: usize = 12;

/// Separator between hashed id components (ASCII unit separator).
const ID_FIELD_SEP: char = '\u{1f}';

#[derive(Debug, Default, Deserialize)]
struct Document {
    #[serde(default)]
    projects: Vec<Project>,
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    projects: &'a [Project],
}

// ---------------------------------------------------------------------------
// Document I/O
// ---------------------------------------------------------------------------

/// Load the collection from `path`.
///
/// A missing document is an empty collection. Colors are recomputed from
/// the client name for every record, so a stale or hand-edited color never
/// survives a load.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file exists but cannot be read, and
/// [`Error::CorruptStore`] if it does not parse.
pub fn load(path: &Path) -> Result<Vec<Project>, Error> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no project store yet, starting empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(Error::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let document: Document =
        serde_json::from_str(&content).map_err(|source| Error::CorruptStore {
            path: path.to_path_buf(),
            source,
        })?;

    let projects = repair(document.projects, path);
    debug!(path = %path.display(), count = projects.len(), "loaded project store");
    Ok(projects)
}

/// Bring loaded records back in line with the store invariants.
///
/// Records with an empty client or project are dropped. A record whose id
/// is already taken by an earlier record gets a freshly minted id. Colors
/// are recomputed for every record.
fn repair(loaded: Vec<Project>, path: &Path) -> Vec<Project> {
    let mut projects: Vec<Project> = Vec::with_capacity(loaded.len());

    for mut project in loaded {
        if project.client.trim().is_empty() || project.project.trim().is_empty() {
            warn!(
                path = %path.display(),
                id = %project.id,
                "dropping record with empty client or project"
            );
            continue;
        }

        if project.id.trim().is_empty() || projects.iter().any(|p| p.id == project.id) {
            let fresh = mint_id(&project.client, &project.project, project.deadline, &projects);
            warn!(
                path = %path.display(),
                old = %project.id,
                new = %fresh,
                "re-minted duplicate project id"
            );
            project.id = fresh;
        }

        project.color = color_for(&project.client);
        projects.push(project);
    }

    projects
}

/// Overwrite the document at `path` with `projects`.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns [`Error::Io`] if the temporary file cannot be written or renamed.
pub fn save(path: &Path, projects: &[Project]) -> Result<(), Error> {
    let io_error = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let mut body = serde_json::to_vec_pretty(&DocumentRef { projects })
        .map_err(|err| io_error(io::Error::other(err)))?;
    body.push(b'\n');

    let tmp = temp_path(path);
    fs::write(&tmp, &body).map_err(io_error)?;
    if let Err(source) = fs::rename(&tmp, path) {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            warn!(path = %tmp.display(), error = %cleanup, "could not remove temporary file");
        }
        return Err(io_error(source));
    }

    debug!(path = %path.display(), count = projects.len(), bytes = body.len(), "saved project store");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

// ---------------------------------------------------------------------------
// Identity and validation
// ---------------------------------------------------------------------------

/// Derive a fresh id that is not taken in `existing`.
///
/// The id hashes client, project name and deadline. If that id is already
/// in use, a numeric salt is appended to the hash input until it is free.
fn mint_id(client: &str, project: &str, deadline: NaiveDate, existing: &[Project]) -> String {
    let base = format!("{client}{ID_FIELD_SEP}{project}{ID_FIELD_SEP}{deadline}");

    let mut salt = 0_u32;
    loop {
        let seed = if salt == 0 {
            base.clone()
        } else {
            format!("{base}{ID_FIELD_SEP}{salt}")
        };
        let digest = blake3::hash(seed.as_bytes()).to_hex().to_string();
        let id = format!("{ID_PREFIX}{}", &digest[..ID_HEX_LEN]);
        if !existing.iter().any(|p| p.id == id) {
            return id;
        }
        salt += 1;
    }
}

/// Trim a required field, rejecting empty and whitespace-only values.
fn required(field: &'static str, value: &str) -> Result<String, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation {
            field,
            reason: "must not be empty",
        });
    }
    Ok(trimmed.to_string())
}

/// Parse status text, mapping failures to [`Error::InvalidStatus`].
///
/// # Errors
///
/// Returns [`Error::InvalidStatus`] unless `raw` is `todo` or `done`.
pub fn parse_status(raw: &str) -> Result<Status, Error> {
    raw.parse()
        .map_err(|_| Error::InvalidStatus { got: raw.to_string() })
}

// ---------------------------------------------------------------------------
// ProjectStore
// ---------------------------------------------------------------------------

/// One status assignment applied by [`ProjectStore::set_statuses`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub id: String,
    pub status: Status,
}

/// Outcome of a batched status write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusBatch {
    /// Ids whose status actually changed.
    pub changed: Vec<String>,
    /// Ids that already had the requested status.
    pub unchanged: Vec<String>,
    /// Ids not present in the store.
    pub missing: Vec<String>,
}

/// The in-memory snapshot plus the path it persists to.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    path: PathBuf,
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Load the store at `path`, starting empty if the document is missing.
    ///
    /// # Errors
    ///
    /// Same as [`load`].
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let projects = load(&path)?;
        Ok(Self { path, projects })
    }

    /// Path of the persisted document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current snapshot in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Look up a project by exact id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Resolve an exact id or a unique id prefix to a full id.
    ///
    /// The `p-` prefix may be omitted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if nothing matches and
    /// [`Error::AmbiguousId`] if several projects match.
    pub fn resolve(&self, input: &str) -> Result<String, Error> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::NotFound { id: String::new() });
        }
        if self.get(input).is_some() {
            return Ok(input.to_string());
        }

        let needle = if input.starts_with(ID_PREFIX) {
            input.to_string()
        } else {
            format!("{ID_PREFIX}{input}")
        };

        let mut matches: Vec<String> = self
            .projects
            .iter()
            .filter(|p| p.id.starts_with(&needle))
            .map(|p| p.id.clone())
            .collect();

        match matches.len() {
            0 => Err(Error::NotFound {
                id: input.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(Error::AmbiguousId {
                prefix: input.to_string(),
                matches,
            }),
        }
    }

    /// Write the current snapshot back to disk.
    ///
    /// # Errors
    ///
    /// Same as [`save`].
    pub fn save(&self) -> Result<(), Error> {
        save(&self.path, &self.projects)
    }

    /// Persist `next` and make it the current snapshot.
    fn commit(&mut self, next: Vec<Project>) -> Result<(), Error> {
        save(&self.path, &next)?;
        self.projects = next;
        Ok(())
    }

    /// Add a new project with status `todo`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if client or project is empty, or a
    /// persistence error.
    pub fn create(&mut self, fields: NewProject) -> Result<Project, Error> {
        let fields = NewProject {
            client: required("client", &fields.client)?,
            project: required("project", &fields.project)?,
            ..fields
        };

        let project = Project {
            id: mint_id(&fields.client, &fields.project, fields.deadline, &self.projects),
            color: color_for(&fields.client),
            client: fields.client,
            project: fields.project,
            detail: fields.detail,
            deadline: fields.deadline,
            status: Status::Todo,
        };

        let mut next = self.projects.clone();
        next.push(project.clone());
        self.commit(next)?;

        info!(id = %project.id, client = %project.client, deadline = %project.deadline, "created project");
        Ok(project)
    }

    /// Merge `patch` into the project with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id, [`Error::Validation`]
    /// if the patch empties client or project, or a persistence error.
    pub fn update(&mut self, id: &str, patch: ProjectPatch) -> Result<Project, Error> {
        let index = self.index_of(id)?;
        let client = patch.client.as_deref().map(|c| required("client", c)).transpose()?;
        let name = patch.project.as_deref().map(|p| required("project", p)).transpose()?;

        let mut next = self.projects.clone();
        let record = &mut next[index];
        if let Some(client) = client {
            record.color = color_for(&client);
            record.client = client;
        }
        if let Some(name) = name {
            record.project = name;
        }
        if let Some(detail) = patch.detail {
            record.detail = detail;
        }
        if let Some(deadline) = patch.deadline {
            record.deadline = deadline;
        }
        if let Some(status) = patch.status {
            record.status = status;
        }
        let updated = record.clone();

        self.commit(next)?;
        debug!(id = %updated.id, "updated project");
        Ok(updated)
    }

    /// Remove the project with `id`. Unknown ids are a no-op.
    ///
    /// Returns whether a record was removed. The document is rewritten
    /// either way.
    ///
    /// # Errors
    ///
    /// Returns a persistence error.
    pub fn delete(&mut self, id: &str) -> Result<bool, Error> {
        let mut next = self.projects.clone();
        next.retain(|p| p.id != id);
        let removed = next.len() != self.projects.len();
        self.commit(next)?;

        if removed {
            info!(id, "deleted project");
        } else {
            debug!(id, "delete of unknown project ignored");
        }
        Ok(removed)
    }

    /// Set the status of one project from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStatus`] for anything but `todo`/`done`,
    /// [`Error::NotFound`] for an unknown id, or a persistence error.
    pub fn set_status(&mut self, id: &str, status: &str) -> Result<Project, Error> {
        let status = parse_status(status)?;
        self.update(id, ProjectPatch::status(status))
    }

    /// Apply many status assignments and persist once.
    ///
    /// Ids missing from the store are reported, not rejected. When an id
    /// appears more than once, the last assignment wins.
    ///
    /// # Errors
    ///
    /// Returns a persistence error.
    pub fn set_statuses(&mut self, changes: &[StatusChange]) -> Result<StatusBatch, Error> {
        let mut next = self.projects.clone();
        let mut batch = StatusBatch::default();

        for change in changes {
            let Some(record) = next.iter_mut().find(|p| p.id == change.id) else {
                batch.missing.push(change.id.clone());
                continue;
            };
            if record.status == change.status {
                batch.unchanged.push(change.id.clone());
            } else {
                record.status = change.status;
                batch.changed.push(change.id.clone());
            }
        }

        self.commit(next)?;
        Ok(batch)
    }

    fn index_of(&self, id: &str) -> Result<usize, Error> {
        self.projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::NotFound { id: id.to_string() })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ProjectStore) {
        let tmp = TempDir::new().expect("tempdir");
        let store = ProjectStore::open(tmp.path().join("data.json")).expect("open");
        (tmp, store)
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid date")
    }

    fn acme() -> NewProject {
        NewProject::new("Acme", "Site Redesign", "v2", date("2024-06-10"))
    }

    // -----------------------------------------------------------------------
    // load / save
    // -----------------------------------------------------------------------

    #[test]
    fn load_missing_document_is_empty() {
        let tmp = TempDir::new().expect("tempdir");
        let projects = load(&tmp.path().join("nope.json")).expect("load");
        assert!(projects.is_empty());
    }

    #[test]
    fn load_corrupt_document_fails() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("data.json");
        fs::write(&path, "{ not json").expect("write");
        let err = load(&path).expect_err("corrupt");
        assert!(matches!(err, Error::CorruptStore { .. }), "{err:?}");
    }

    #[test]
    fn load_document_without_projects_key_is_empty() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("data.json");
        fs::write(&path, "{}").expect("write");
        assert!(load(&path).expect("load").is_empty());
    }

    #[test]
    fn load_recomputes_colors() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("data.json");
        fs::write(
            &path,
            r##"{"projects":[{"id":"p-1","client":"Acme","project":"Site","detail":"","deadline":"2024-06-10","color":"#000000"}]}"##,
        )
        .expect("write");
        let projects = load(&path).expect("load");
        assert_eq!(projects[0].color, color_for("Acme"));
        assert_eq!(projects[0].status, Status::Todo);
    }

    #[test]
    fn load_reassigns_duplicate_ids() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("data.json");
        fs::write(
            &path,
            r#"{"projects":[
                {"id":"abc","client":"Acme","project":"Site","detail":"one","deadline":"2024-06-10"},
                {"id":"abc","client":"Acme","project":"Site","detail":"two","deadline":"2024-06-10"}
            ]}"#,
        )
        .expect("write");

        let projects = load(&path).expect("load");
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].id, "abc", "first occurrence keeps its id");
        assert_ne!(projects[1].id, "abc");
        assert!(projects[1].id.starts_with(ID_PREFIX));
        assert_eq!(projects[1].detail, "two");
    }

    #[test]
    fn load_drops_records_missing_required_fields() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("data.json");
        fs::write(
            &path,
            r#"{"projects":[
                {"id":"a","client":"Acme","project":"Site","deadline":"2024-06-10"},
                {"id":"b","client":"","project":"Site","deadline":"2024-06-10"},
                {"id":"c","client":"Acme","project":"   ","deadline":"2024-06-10"}
            ]}"#,
        )
        .expect("write");

        let ids: Vec<String> = load(&path).expect("load").into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["a".to_string()]);
    }

    #[test]
    fn save_creates_parent_dirs_and_leaves_no_temp_file() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("nested/dir/data.json");
        save(&path, &[]).expect("save");
        assert!(path.exists());
        assert!(!temp_path(&path).exists());
        let raw = fs::read_to_string(&path).expect("read");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(value["projects"], serde_json::json!([]));
    }

    #[test]
    fn temp_path_is_sibling() {
        assert_eq!(
            temp_path(Path::new("/a/b/data.json")),
            PathBuf::from("/a/b/data.json.tmp")
        );
    }

    // -----------------------------------------------------------------------
    // create
    // -----------------------------------------------------------------------

    #[test]
    fn create_assigns_id_color_and_todo() {
        let (_tmp, mut store) = setup();
        let project = store.create(acme()).expect("create");
        assert!(project.id.starts_with(ID_PREFIX));
        assert_eq!(project.id.len(), ID_PREFIX.len() + ID_HEX_LEN);
        assert_eq!(project.color, color_for("Acme"));
        assert_eq!(project.status, Status::Todo);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_persists_immediately() {
        let (_tmp, mut store) = setup();
        let project = store.create(acme()).expect("create");
        let reloaded = load(store.path()).expect("load");
        assert_eq!(reloaded, vec![project]);
    }

    #[test]
    fn create_rejects_empty_required_fields() {
        let (_tmp, mut store) = setup();
        let err = store
            .create(NewProject::new("  ", "Site", "", date("2024-06-10")))
            .expect_err("empty client");
        assert!(matches!(err, Error::Validation { field: "client", .. }));

        let err = store
            .create(NewProject::new("Acme", "", "", date("2024-06-10")))
            .expect_err("empty project");
        assert!(matches!(err, Error::Validation { field: "project", .. }));

        assert!(store.is_empty());
        assert!(!store.path().exists(), "failed create must not write");
    }

    #[test]
    fn create_trims_required_fields() {
        let (_tmp, mut store) = setup();
        let project = store
            .create(NewProject::new(" Acme ", " Site ", "", date("2024-06-10")))
            .expect("create");
        assert_eq!(project.client, "Acme");
        assert_eq!(project.project, "Site");
        assert_eq!(project.color, color_for("Acme"));
    }

    #[test]
    fn create_is_deterministic_but_never_collides() {
        let (_tmp, mut store) = setup();
        let first = store.create(acme()).expect("first");
        let second = store.create(acme()).expect("second");
        assert_ne!(first.id, second.id);

        let (_tmp2, mut other) = setup();
        let again = other.create(acme()).expect("other store");
        assert_eq!(first.id, again.id, "same fields mint the same first id");
    }

    // -----------------------------------------------------------------------
    // update / set_status / delete
    // -----------------------------------------------------------------------

    #[test]
    fn update_merges_fields_and_recolors_on_client_change() {
        let (_tmp, mut store) = setup();
        let id = store.create(acme()).expect("create").id;
        let updated = store
            .update(
                &id,
                ProjectPatch {
                    client: Some("Globex".to_string()),
                    deadline: Some(date("2024-07-01")),
                    ..ProjectPatch::default()
                },
            )
            .expect("update");
        assert_eq!(updated.id, id);
        assert_eq!(updated.client, "Globex");
        assert_eq!(updated.color, color_for("Globex"));
        assert_eq!(updated.project, "Site Redesign");
        assert_eq!(updated.detail, "v2");
        assert_eq!(updated.deadline, date("2024-07-01"));
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let (_tmp, mut store) = setup();
        let err = store
            .update("p-missing", ProjectPatch::default())
            .expect_err("unknown");
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn update_rejects_emptied_project_name() {
        let (_tmp, mut store) = setup();
        let id = store.create(acme()).expect("create").id;
        let err = store
            .update(
                &id,
                ProjectPatch {
                    project: Some(String::new()),
                    ..ProjectPatch::default()
                },
            )
            .expect_err("empty name");
        assert!(matches!(err, Error::Validation { field: "project", .. }));
        assert_eq!(store.get(&id).expect("still there").project, "Site Redesign");
    }

    #[test]
    fn set_status_validates_text() {
        let (_tmp, mut store) = setup();
        let id = store.create(acme()).expect("create").id;
        let err = store.set_status(&id, "blocked").expect_err("invalid");
        assert!(matches!(err, Error::InvalidStatus { ref got } if got == "blocked"));

        let done = store.set_status(&id, "done").expect("done");
        assert_eq!(done.status, Status::Done);
    }

    #[test]
    fn set_status_unknown_id_is_not_found() {
        let (_tmp, mut store) = setup();
        let err = store.set_status("p-nope", "done").expect_err("unknown");
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn delete_is_idempotent() {
        let (_tmp, mut store) = setup();
        let id = store.create(acme()).expect("create").id;
        assert!(store.delete(&id).expect("delete"));
        assert!(!store.delete(&id).expect("second delete"));
        assert!(store.is_empty());
        assert!(load(store.path()).expect("load").is_empty());
    }

    #[test]
    fn set_statuses_reports_each_id() {
        let (_tmp, mut store) = setup();
        let a = store.create(acme()).expect("a").id;
        let b = store
            .create(NewProject::new("Globex", "App", "", date("2024-06-11")))
            .expect("b")
            .id;

        let batch = store
            .set_statuses(&[
                StatusChange { id: a.clone(), status: Status::Todo },
                StatusChange { id: b.clone(), status: Status::Done },
                StatusChange { id: "p-gone".to_string(), status: Status::Done },
            ])
            .expect("batch");

        assert_eq!(batch.unchanged, vec![a]);
        assert_eq!(batch.changed, vec![b.clone()]);
        assert_eq!(batch.missing, vec!["p-gone".to_string()]);
        assert_eq!(load(store.path()).expect("load")[1].status, Status::Done);
        assert_eq!(store.get(&b).expect("b").status, Status::Done);
    }

    // -----------------------------------------------------------------------
    // resolve
    // -----------------------------------------------------------------------

    #[test]
    fn resolve_accepts_exact_and_prefix() {
        let (_tmp, mut store) = setup();
        let id = store.create(acme()).expect("create").id;
        assert_eq!(store.resolve(&id).expect("exact"), id);
        assert_eq!(store.resolve(&id[..6]).expect("prefix"), id);
        assert_eq!(store.resolve(&id[2..8]).expect("bare prefix"), id);
    }

    #[test]
    fn resolve_unknown_and_empty_are_not_found() {
        let (_tmp, mut store) = setup();
        store.create(acme()).expect("create");
        assert!(matches!(store.resolve("zzzz"), Err(Error::NotFound { .. })));
        assert!(matches!(store.resolve("  "), Err(Error::NotFound { .. })));
    }

    #[test]
    fn resolve_shared_prefix_is_ambiguous() {
        let (_tmp, mut store) = setup();
        store.create(acme()).expect("a");
        store.create(acme()).expect("b");
        let err = store.resolve(ID_PREFIX).expect_err("ambiguous");
        assert!(matches!(err, Error::AmbiguousId { ref matches, .. } if matches.len() == 2));
    }

    #[test]
    fn failed_save_leaves_snapshot_untouched() {
        let tmp = TempDir::new().expect("tempdir");
        // A directory where the document should be makes the rename fail.
        let path = tmp.path().join("data.json");
        fs::create_dir_all(path.join("occupied")).expect("mkdir");
        let mut store = ProjectStore {
            path,
            projects: Vec::new(),
        };
        let err = store.create(acme()).expect_err("save must fail");
        assert!(matches!(err, Error::Io { .. }));
        assert!(store.is_empty());
        assert!(!temp_path(store.path()).exists(), "temporary file is cleaned up");
    }
}
