//! Property tests for color assignment, identity, and the projections.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use clientboard_core::store::{self, ProjectStore};
use clientboard_core::view::{self, EmptyDays};
use clientboard_core::{NewProject, Project, ProjectPatch, Status, color_for};
use proptest::prelude::*;
use tempfile::TempDir;

const CLIENTS: [&str; 5] = ["Acme", "Globex", "Initech", "Umbrella", "Hooli"];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid base date")
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0_u64..800).prop_map(|offset| base_date() + Days::new(offset))
}

fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![Just(Status::Todo), Just(Status::Done)]
}

/// Well-formed snapshots: unique ids, non-empty names, colors derived.
fn arb_projects() -> impl Strategy<Value = Vec<Project>> {
    prop::collection::vec(
        (0..CLIENTS.len(), "[a-z]{1,8}", ".{0,12}", arb_date(), arb_status()),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (client, name, detail, deadline, status))| Project {
                id: format!("p-{i:012x}"),
                client: CLIENTS[client].to_string(),
                project: name,
                detail,
                deadline,
                color: color_for(CLIENTS[client]),
                status,
            })
            .collect()
    })
}

#[derive(Debug, Clone)]
enum Op {
    Create { client: usize, deadline: NaiveDate },
    Rename { target: usize, client: usize },
    Delete { target: usize },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..CLIENTS.len(), arb_date()).prop_map(|(client, deadline)| Op::Create { client, deadline }),
        1 => (0_usize..32, 0..CLIENTS.len()).prop_map(|(target, client)| Op::Rename { target, client }),
        1 => (0_usize..32).prop_map(|target| Op::Delete { target }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn color_for_is_idempotent(client in ".{1,40}") {
        prop_assert_eq!(color_for(&client), color_for(&client));
    }

    #[test]
    fn weekly_buckets_stay_inside_the_week(
        projects in arb_projects(),
        reference in arb_date(),
        hide in any::<bool>(),
    ) {
        let policy = if hide { EmptyDays::Hide } else { EmptyDays::Show };
        let (monday, sunday) = view::week_bounds(reference);
        prop_assert_eq!(sunday, monday + Days::new(6));
        prop_assert!(monday <= reference && reference <= sunday);

        let week = view::weekly_buckets(&projects, reference, policy);
        for (day, bucket) in &week.days {
            prop_assert!(monday <= *day && *day <= sunday);
            for project in bucket {
                prop_assert_eq!(project.deadline, *day);
            }
        }

        let expected = projects
            .iter()
            .filter(|p| monday <= p.deadline && p.deadline <= sunday)
            .count();
        prop_assert_eq!(week.project_count(), expected);

        let before = Project { deadline: monday - Days::new(1), ..projects.first().cloned().unwrap_or_else(sample) };
        let last = Project { deadline: sunday, ..before.clone() };
        let edges = [before, last];
        let edge_week = view::weekly_buckets(&edges, reference, EmptyDays::Hide);
        prop_assert_eq!(edge_week.project_count(), 1);
        prop_assert!(edge_week.days.contains_key(&sunday));
    }

    #[test]
    fn kanban_partitions_every_project_once(projects in arb_projects()) {
        let board = view::kanban_columns(&projects);
        prop_assert_eq!(board.len(), projects.len());

        let todo: HashSet<String> = board.ids(Status::Todo).into_iter().collect();
        let done: HashSet<String> = board.ids(Status::Done).into_iter().collect();
        prop_assert!(todo.is_disjoint(&done));

        let all: HashSet<String> = projects.iter().map(|p| p.id.clone()).collect();
        let union: HashSet<String> = todo.union(&done).cloned().collect();
        prop_assert_eq!(union, all);
    }

    #[test]
    fn save_then_load_roundtrips(projects in arb_projects()) {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("data.json");
        store::save(&path, &projects).expect("save");
        let loaded = store::load(&path).expect("load");
        store::save(&path, &loaded).expect("save again");
        prop_assert_eq!(store::load(&path).expect("reload"), projects);
    }

    #[test]
    fn ids_stay_unique_and_stable(ops in prop::collection::vec(arb_op(), 1..20)) {
        let tmp = TempDir::new().expect("tempdir");
        let mut store = ProjectStore::open(tmp.path().join("data.json")).expect("open");

        for op in ops {
            let before: Vec<Project> = store.snapshot().to_vec();
            let mut touched = None;

            match op {
                Op::Create { client, deadline } => {
                    store
                        .create(NewProject::new(CLIENTS[client], "Same name", "", deadline))
                        .expect("create");
                }
                Op::Rename { target, client } => {
                    if let Some(project) = before.get(target % before.len().max(1)) {
                        touched = Some(project.id.clone());
                        store
                            .update(&project.id, ProjectPatch {
                                client: Some(CLIENTS[client].to_string()),
                                ..ProjectPatch::default()
                            })
                            .expect("update");
                    }
                }
                Op::Delete { target } => {
                    if let Some(project) = before.get(target % before.len().max(1)) {
                        touched = Some(project.id.clone());
                        store.delete(&project.id).expect("delete");
                    }
                }
            }

            let ids: Vec<&str> = store.snapshot().iter().map(|p| p.id.as_str()).collect();
            let unique: HashSet<&str> = ids.iter().copied().collect();
            prop_assert_eq!(unique.len(), ids.len());

            for old in before.iter().filter(|p| Some(&p.id) != touched.as_ref()) {
                prop_assert_eq!(store.get(&old.id), Some(old));
            }

            for project in store.snapshot() {
                prop_assert_eq!(&project.color, &color_for(&project.client));
            }
        }
    }
}

fn sample() -> Project {
    Project {
        id: "p-000000000000".to_string(),
        client: "Acme".to_string(),
        project: "Site".to_string(),
        detail: String::new(),
        deadline: base_date(),
        color: color_for("Acme"),
        status: Status::Todo,
    }
}
