//! `cboard reconcile`: apply kanban column membership after a drag.

use std::io::Write;

use clap::Args;
use clientboard_core::handlers::{self, ReconcileReport};

use crate::cmd::{Context, resolve_or_raw};
use crate::output::render_mode;

#[derive(Args, Debug)]
pub struct ReconcileArgs {
    /// Comma-separated IDs that now sit in the todo column.
    #[arg(long, value_delimiter = ',')]
    pub todo: Vec<String>,

    /// Comma-separated IDs that now sit in the done column.
    #[arg(long, value_delimiter = ',')]
    pub done: Vec<String>,
}

pub fn run_reconcile(args: &ReconcileArgs, ctx: &Context) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let todo = resolve_all(&store, &args.todo)?;
    let done = resolve_all(&store, &args.done)?;
    let report = handlers::reconcile_kanban(&mut store, &todo, &done)?;

    render_mode(
        ctx.output,
        &report,
        |r, w| {
            write_ids(w, "moved", &r.moved)?;
            write_ids(w, "unchanged", &r.unchanged)?;
            write_ids(w, "stale", &r.stale)
        },
        |r, w| write_summary(w, r),
    )
}

fn resolve_all(
    store: &clientboard_core::ProjectStore,
    inputs: &[String],
) -> Result<Vec<String>, clientboard_core::Error> {
    inputs
        .iter()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| resolve_or_raw(store, raw))
        .collect()
}

fn write_ids(w: &mut dyn Write, label: &str, ids: &[String]) -> std::io::Result<()> {
    for id in ids {
        writeln!(w, "{label}  {id}")?;
    }
    Ok(())
}

fn write_summary(w: &mut dyn Write, report: &ReconcileReport) -> std::io::Result<()> {
    writeln!(
        w,
        "✓ reconciled board: {} moved, {} unchanged",
        report.moved.len(),
        report.unchanged.len()
    )?;
    if !report.stale.is_empty() {
        writeln!(w, "  skipped unknown: {}", report.stale.join(", "))?;
    }
    Ok(())
}
