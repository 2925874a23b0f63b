//! `cboard board`: the two-column kanban board.

use std::io::Write;

use clientboard_core::view::{self, event_title};
use clientboard_core::{Project, Status};

use crate::cmd::Context;
use crate::output::{pretty_section, render_mode};

pub fn run_board(ctx: &Context) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let board = view::kanban_columns(store.snapshot());

    render_mode(
        ctx.output,
        &board,
        |board, w| {
            for status in Status::ALL {
                for project in board.column(status) {
                    writeln!(w, "{status}  {}  {}", project.id, project.deadline)?;
                }
            }
            Ok(())
        },
        |board, w| {
            for status in Status::ALL {
                let column = board.column(status);
                let heading = format!("{} ({})", status.to_string().to_uppercase(), column.len());
                pretty_section(w, &heading)?;
                for project in column {
                    write_card(w, project)?;
                }
                writeln!(w)?;
            }
            Ok(())
        },
    )
}

fn write_card(w: &mut dyn Write, project: &Project) -> std::io::Result<()> {
    writeln!(
        w,
        "  {}  {}  due {}",
        project.id,
        event_title(project),
        project.deadline
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_shows_title_and_deadline() {
        let project = Project {
            id: "p-3f2a9c0d1e4b".to_string(),
            client: "Acme".to_string(),
            project: "Site".to_string(),
            detail: "v2".to_string(),
            deadline: "2024-06-10".parse().expect("date"),
            color: clientboard_core::color_for("Acme"),
            status: Status::Todo,
        };
        let mut buf = Vec::new();
        write_card(&mut buf, &project).expect("write");
        assert_eq!(
            String::from_utf8(buf).expect("utf8"),
            "  p-3f2a9c0d1e4b  Acme | Site - v2  due 2024-06-10\n"
        );
    }
}
