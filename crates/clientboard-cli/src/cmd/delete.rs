//! `cboard delete`: remove a project. Unknown ids are a no-op.

use clap::Args;
use serde::Serialize;
use std::io::Write;

use clientboard_core::handlers;

use crate::cmd::{Context, resolve_or_raw};
use crate::output::render_mode;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Project ID (a unique prefix is enough).
    pub id: String,
}

#[derive(Debug, Serialize)]
struct DeleteResult {
    id: String,
    deleted: bool,
}

pub fn run_delete(args: &DeleteArgs, ctx: &Context) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_or_raw(&store, &args.id)?;
    let deleted = handlers::delete_project(&mut store, &id)?;
    let result = DeleteResult { id, deleted };

    render_mode(
        ctx.output,
        &result,
        |r, w| writeln!(w, "{}  {}", r.id, if r.deleted { "deleted" } else { "absent" }),
        |r, w| {
            if r.deleted {
                writeln!(w, "✓ deleted {}", r.id)
            } else {
                writeln!(w, "✓ {} was already gone", r.id)
            }
        },
    )
}
