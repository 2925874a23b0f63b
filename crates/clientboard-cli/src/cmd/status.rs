//! `cboard status`: move a project between the todo and done columns.

use clap::Args;
use clientboard_core::handlers;

use crate::cmd::Context;
use crate::output::render_item;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Project ID (a unique prefix is enough).
    pub id: String,

    /// New status: todo or done.
    pub status: String,
}

pub fn run_status(args: &StatusArgs, ctx: &Context) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let id = store.resolve(&args.id)?;
    let updated = handlers::change_status(&mut store, &id, &args.status)?;
    render_item(&updated, ctx.output)?;
    Ok(())
}
