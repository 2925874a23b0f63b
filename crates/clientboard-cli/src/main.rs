#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use clientboard_core::config::{self, DATA_ENV};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "cboard: client project deadlines on a calendar, a week and a kanban board",
    long_about = None
)]
struct Cli {
    /// Enable debug logging unless CLIENTBOARD_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Data file to read and write (overrides CLIENTBOARD_DATA and config).
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for --format json.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Projects",
        about = "Add a project",
        long_about = "Add a project with a client, a name, an optional detail and a deadline.",
        after_help = "EXAMPLES:\n    # Add a project due on June 10th\n    cboard add --client Acme --project \"Site Redesign\" --detail v2 --deadline 2024-06-10\n\n    # Capture the new id from a script\n    cboard add --client Acme --project Site --deadline 2024-06-10 --json"
    )]
    Add(cmd::add::AddArgs),

    #[command(
        next_help_heading = "Projects",
        about = "List projects",
        after_help = "EXAMPLES:\n    # Everything\n    cboard list\n\n    # Open work for one client\n    cboard list --status todo --client Acme"
    )]
    List(cmd::list::ListArgs),

    #[command(
        next_help_heading = "Projects",
        about = "Show one project",
        after_help = "EXAMPLES:\n    # Show a project\n    cboard show p-3f2a9c0d1e4b\n\n    # Use a short prefix when unique\n    cboard show 3f2a"
    )]
    Show(cmd::show::ShowArgs),

    #[command(
        next_help_heading = "Projects",
        about = "Edit a project",
        long_about = "Change any of a project's fields. The id never changes; the color follows the client.",
        after_help = "EXAMPLES:\n    # Move a deadline\n    cboard update 3f2a --deadline 2024-07-01\n\n    # Reassign to another client\n    cboard update 3f2a --client Globex"
    )]
    Update(cmd::update::UpdateArgs),

    #[command(
        next_help_heading = "Projects",
        about = "Delete a project",
        long_about = "Delete a project. Deleting an id that does not exist succeeds and changes nothing.",
        after_help = "EXAMPLES:\n    # Delete a project\n    cboard delete 3f2a"
    )]
    Delete(cmd::delete::DeleteArgs),

    #[command(
        next_help_heading = "Projects",
        about = "Set a project's status",
        after_help = "EXAMPLES:\n    # Mark as done\n    cboard status 3f2a done\n\n    # Reopen\n    cboard status 3f2a todo"
    )]
    Status(cmd::status::StatusArgs),

    #[command(
        next_help_heading = "Views",
        about = "Show deadlines as calendar events",
        after_help = "EXAMPLES:\n    # All events\n    cboard calendar\n\n    # One month\n    cboard calendar --month 2024-06"
    )]
    Calendar(cmd::calendar::CalendarArgs),

    #[command(
        next_help_heading = "Views",
        about = "Show the Monday-to-Sunday agenda",
        after_help = "EXAMPLES:\n    # This week\n    cboard week\n\n    # The week containing a date, without empty days\n    cboard week --date 2024-06-12 --empty-days hide"
    )]
    Week(cmd::week::WeekArgs),

    #[command(
        next_help_heading = "Views",
        about = "Show the kanban board",
        after_help = "EXAMPLES:\n    # Both columns\n    cboard board\n\n    # Machine-readable\n    cboard board --json"
    )]
    Board,

    #[command(
        next_help_heading = "Views",
        about = "Write kanban column membership back to the store",
        long_about = "Set every listed project's status from the column it sits in. Unknown ids are skipped and reported; an id in both columns is rejected.",
        after_help = "EXAMPLES:\n    # After dragging 3f2a to done\n    cboard reconcile --todo 91bc,77d0 --done 3f2a"
    )]
    Reconcile(cmd::reconcile::ReconcileArgs),

    #[command(
        next_help_heading = "Maintenance",
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    cboard completions bash"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("CLIENTBOARD_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "clientboard_core=debug,clientboard_cli=debug,info"
        } else {
            "clientboard_core=info,clientboard_cli=info,warn"
        })
    });

    let format = env::var("CLIENTBOARD_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(cli: Cli, output: OutputMode) -> anyhow::Result<()> {
    let project_root = env::current_dir()?;
    let project_config = config::load_project_config(&project_root)?;
    let env_data = env::var(DATA_ENV).ok();
    let data_path = config::resolve_data_path(
        &project_root,
        cli.data.as_deref(),
        env_data.as_deref(),
        &project_config,
    );
    debug!(path = %data_path.display(), "using data file");

    let ctx = cmd::Context {
        data_path,
        config: project_config,
        output,
    };

    match cli.command {
        Commands::Add(ref args) => cmd::add::run_add(args, &ctx),
        Commands::List(ref args) => cmd::list::run_list(args, &ctx),
        Commands::Show(ref args) => cmd::show::run_show(args, &ctx),
        Commands::Update(ref args) => cmd::update::run_update(args, &ctx),
        Commands::Delete(ref args) => cmd::delete::run_delete(args, &ctx),
        Commands::Status(ref args) => cmd::status::run_status(args, &ctx),
        Commands::Calendar(ref args) => cmd::calendar::run_calendar(args, &ctx),
        Commands::Week(ref args) => cmd::week::run_week(args, &ctx),
        Commands::Board => cmd::board::run_board(&ctx),
        Commands::Reconcile(ref args) => cmd::reconcile::run_reconcile(args, &ctx),
        Commands::Completions(ref args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}

fn report_error(output: OutputMode, err: &anyhow::Error) {
    debug!(error = ?err, "command failed");
    let cli_error = err
        .downcast_ref::<clientboard_core::Error>()
        .map_or_else(|| CliError::new(format!("{err:#}")), CliError::from);
    if render_error(output, &cli_error).is_err() {
        eprintln!("error: {err:#}");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let user_output = match config::load_user_config() {
        Ok(user) => user.output,
        Err(err) => {
            warn!(error = %err, "ignoring unreadable user config");
            None
        }
    };
    let output = resolve_output_mode(cli.format, cli.json, user_output.as_deref());

    match run(cli, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(output, &err);
            ExitCode::FAILURE
        }
    }
}
