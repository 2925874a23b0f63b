//! `cboard show`: the detail view of one project.

use clap::Args;
use clientboard_core::handlers::DetailPanel;

use crate::cmd::Context;
use crate::output::render_item;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Project ID (a unique prefix is enough).
    pub id: String,
}

pub fn run_show(args: &ShowArgs, ctx: &Context) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let mut panel = DetailPanel::new();
    panel.open(store.resolve(&args.id)?);

    let project = panel
        .project(&store)
        .ok_or_else(|| clientboard_core::Error::NotFound {
            id: args.id.clone(),
        })?;
    render_item(project, ctx.output)?;
    Ok(())
}
