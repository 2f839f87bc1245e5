mod commands;
mod render;
mod telemetry;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use teamcal_core::config::TeamCalConfig;
use teamcal_core::remote::{FirebaseStore, LocalOnly, RemoteStore};
use teamcal_core::{CalendarSession, LocalStorage};

use crate::utils::tui;

#[derive(Parser)]
#[command(name = "teamcal")]
#[command(about = "Shared task list and team availability calendar")]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the task list
    Task {
        #[command(subcommand)]
        command: TaskCommand,
    },
    /// Manage the availability calendar
    Cal {
        #[command(subcommand)]
        command: CalCommand,
    },
    /// Show configuration and storage paths
    Config,
}

#[derive(Subcommand)]
enum TaskCommand {
    /// Add a task to the top of the list
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List tasks, newest first
    List,
    /// Mark a task complete or incomplete
    Toggle { id: u64 },
    /// Delete a task
    Delete { id: u64 },
}

#[derive(Subcommand)]
enum CalCommand {
    /// Show the month grid, top dates and person of the month
    Show,
    /// Set who is available on a date (no names clears the date)
    Select {
        /// Date (YYYY-MM-DD)
        date: String,
        names: Vec<String>,
    },
    /// Show or edit the participant roster
    Roster {
        /// Write NAME into slot SLOT (1-7); an empty name clears the slot
        #[arg(long, num_args = 2, value_names = ["SLOT", "NAME"])]
        set: Option<Vec<String>>,
    },
    /// Go to the next month
    Next,
    /// Go to the previous month
    Prev,
    /// Save the calendar now
    Save,
    /// Remove all selections and participants
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Write a plain-text summary file
    Export {
        /// Directory to write into (defaults to the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Preview a text file for import
    Import { file: PathBuf },
    /// Follow remote changes to the current month
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    match cli.command {
        Commands::Config => commands::config::run(),
        Commands::Task { command } => {
            let config = TeamCalConfig::load()?;
            let storage = LocalStorage::new(config.data_path());
            commands::task::run(command, storage)
        }
        Commands::Cal { command } => {
            let config = TeamCalConfig::load()?;
            match &config.remote {
                Some(settings) => match FirebaseStore::new(settings) {
                    Ok(remote) => run_calendar(command, remote, &config).await,
                    Err(e) => {
                        tracing::warn!("remote store unavailable, working locally: {e}");
                        run_calendar(command, LocalOnly, &config).await
                    }
                },
                None => run_calendar(command, LocalOnly, &config).await,
            }
        }
    }
}

async fn run_calendar<R: RemoteStore>(
    command: CalCommand,
    remote: R,
    config: &TeamCalConfig,
) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let storage = LocalStorage::new(config.data_path());

    let spinner = tui::create_spinner("Loading calendar".to_string());
    let loaded = CalendarSession::load(storage, remote, config.rotation, today).await;
    spinner.finish_and_clear();
    let mut session = loaded?;

    if session.rolled_forward() {
        tui::notice("Calendar updated to current month!");
    }

    match command {
        CalCommand::Show => commands::show::run(&session, today),
        CalCommand::Select { date, names } => {
            commands::select::run(&mut session, &date, names, today).await
        }
        CalCommand::Roster { set } => commands::roster::run(&mut session, set).await,
        CalCommand::Next => commands::navigate::run(&mut session, 1, today).await,
        CalCommand::Prev => commands::navigate::run(&mut session, -1, today).await,
        CalCommand::Save => commands::save::run(&mut session).await,
        CalCommand::Clear { force } => commands::clear::run(&mut session, force).await,
        CalCommand::Export { out } => commands::export::run(&session, out, today),
        CalCommand::Import { file } => commands::import::run(&file),
        CalCommand::Watch => commands::watch::run(&mut session, today).await,
    }
}
