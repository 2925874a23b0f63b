//! `cboard list`: every project in collection order.

use clap::Args;
use clientboard_core::{Project, Status};

use crate::cmd::Context;
use crate::output::{OutputMode, render_list};

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only show projects in this column (todo or done).
    #[arg(long)]
    pub status: Option<Status>,

    /// Only show projects for this client (exact match).
    #[arg(long)]
    pub client: Option<String>,
}

impl ListArgs {
    fn matches(&self, project: &Project) -> bool {
        self.status.is_none_or(|s| project.status == s)
            && self.client.as_deref().is_none_or(|c| project.client == c)
    }
}

pub fn run_list(args: &ListArgs, ctx: &Context) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let projects: Vec<Project> = store
        .snapshot()
        .iter()
        .filter(|p| args.matches(p))
        .cloned()
        .collect();

    if projects.is_empty() && ctx.output == OutputMode::Pretty {
        println!("No projects.");
        return Ok(());
    }
    render_list(&projects, ctx.output)?;
    Ok(())
}
