//! `cboard add`: create a project.

use chrono::NaiveDate;
use clap::Args;
use clientboard_core::NewProject;
use clientboard_core::handlers;

use crate::cmd::Context;
use crate::output::render_item;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Client the work is for.
    #[arg(long)]
    pub client: String,

    /// Project name.
    #[arg(long)]
    pub project: String,

    /// Free-form detail shown after the project name.
    #[arg(long, default_value = "")]
    pub detail: String,

    /// Deadline as YYYY-MM-DD.
    #[arg(long)]
    pub deadline: NaiveDate,
}

impl AddArgs {
    fn to_new_project(&self) -> NewProject {
        NewProject::new(&*self.client, &*self.project, &*self.detail, self.deadline)
    }
}

pub fn run_add(args: &AddArgs, ctx: &Context) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let created = handlers::add_project(&mut store, args.to_new_project())?;
    render_item(&created, ctx.output)?;
    Ok(())
}
