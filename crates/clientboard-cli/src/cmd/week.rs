//! `cboard week`: the Monday-to-Sunday agenda around a date.

use std::io::Write;

use chrono::{Local, NaiveDate};
use clap::Args;
use clientboard_core::Status;
use clientboard_core::view::{self, EmptyDays, event_title};

use crate::cmd::Context;
use crate::output::{pretty_section, render_mode};

#[derive(Args, Debug)]
pub struct WeekArgs {
    /// Any date inside the week to show (default: today).
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Whether days without deadlines are listed (show or hide).
    #[arg(long)]
    pub empty_days: Option<EmptyDays>,
}

impl WeekArgs {
    fn policy(&self, ctx: &Context) -> EmptyDays {
        self.empty_days.unwrap_or(ctx.config.week.empty_days)
    }
}

pub fn run_week(args: &WeekArgs, ctx: &Context) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let reference = args.date.unwrap_or_else(|| Local::now().date_naive());
    let week = view::weekly_buckets(store.snapshot(), reference, args.policy(ctx));

    render_mode(
        ctx.output,
        &week,
        |week, w| {
            for (day, projects) in &week.days {
                for project in projects {
                    writeln!(
                        w,
                        "{day}  {}  {}  {}",
                        project.id,
                        project.status,
                        event_title(project)
                    )?;
                }
            }
            Ok(())
        },
        |week, w| {
            pretty_section(w, &format!("Week {} to {}", week.start, week.end))?;
            if week.days.is_empty() {
                writeln!(w, "Nothing due this week.")?;
            }
            for (day, projects) in &week.days {
                writeln!(w, "{}", day.format("%a %Y-%m-%d"))?;
                if projects.is_empty() {
                    writeln!(w, "  -")?;
                }
                for project in projects {
                    writeln!(
                        w,
                        "  [{}] {}  {}",
                        if project.status == Status::Done { "x" } else { " " },
                        event_title(project),
                        project.id
                    )?;
                }
            }
            Ok(())
        },
    )
}
