//! `cboard update`: edit fields of an existing project.

use chrono::NaiveDate;
use clap::Args;
use clientboard_core::handlers::{self, DetailPanel};
use clientboard_core::store::parse_status;
use clientboard_core::{Error, ProjectPatch};

use crate::cmd::Context;
use crate::output::render_item;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Project ID (a unique prefix is enough).
    pub id: String,

    #[arg(long)]
    pub client: Option<String>,

    #[arg(long)]
    pub project: Option<String>,

    #[arg(long)]
    pub detail: Option<String>,

    /// New deadline as YYYY-MM-DD.
    #[arg(long)]
    pub deadline: Option<NaiveDate>,

    /// New status: todo or done.
    #[arg(long)]
    pub status: Option<String>,
}

impl UpdateArgs {
    fn to_patch(&self) -> Result<ProjectPatch, Error> {
        Ok(ProjectPatch {
            client: self.client.clone(),
            project: self.project.clone(),
            detail: self.detail.clone(),
            deadline: self.deadline,
            status: self.status.as_deref().map(parse_status).transpose()?,
        })
    }
}

pub fn run_update(args: &UpdateArgs, ctx: &Context) -> anyhow::Result<()> {
    let patch = args.to_patch()?;
    if patch.is_empty() {
        anyhow::bail!("nothing to update: pass at least one of --client, --project, --detail, --deadline, --status");
    }

    let mut store = ctx.open_store()?;
    let mut panel = DetailPanel::new();
    panel.open(store.resolve(&args.id)?);
    let updated = handlers::update_selected(&mut store, &mut panel, patch)?;

    render_item(&updated, ctx.output)?;
    Ok(())
}
