//! `cboard calendar`: deadline events, optionally limited to one month.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use clap::Args;
use clientboard_core::view::{self, CalendarEvent};

use crate::cmd::Context;
use crate::output::{pretty_section, render_mode};

/// A calendar month given as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map_err(|_| format!("expected YYYY-MM, got '{s}'"))?;
        Ok(Self {
            year: first.year(),
            month: first.month(),
        })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Args, Debug)]
pub struct CalendarArgs {
    /// Only show events in this month (YYYY-MM).
    #[arg(long)]
    pub month: Option<Month>,
}

pub fn run_calendar(args: &CalendarArgs, ctx: &Context) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let events = match args.month {
        Some(m) => view::calendar_month(store.snapshot(), m.year, m.month)?,
        None => view::calendar_events(store.snapshot()),
    };
    let heading = args
        .month
        .map_or_else(|| "Calendar".to_string(), |m| format!("Calendar {m}"));

    render_mode(
        ctx.output,
        &events,
        |events, w| {
            for event in events {
                write_event_row(w, event)?;
            }
            Ok(())
        },
        |events, w| {
            pretty_section(w, &heading)?;
            if events.is_empty() {
                writeln!(w, "No deadlines.")?;
            }
            for event in events {
                writeln!(w, "{}  {}  {}", event.date, event.color, event.title)?;
            }
            Ok(())
        },
    )
}

fn write_event_row(w: &mut dyn Write, event: &CalendarEvent) -> std::io::Result<()> {
    writeln!(
        w,
        "{}  {}  {}  {}",
        event.date, event.id, event.color, event.title
    )
}
