mod cli;

use clap::Parser;
use sprintboard::analytics::{self, AnalyticsSettings};
use sprintboard::config;
use sprintboard::error::SprintboardError;
use sprintboard::report::{self, OutputFormat, View};
use sprintboard::types::feature::CompletionStatus;
use sprintboard::types::report::SprintAnalytics;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NOT_FOUND: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load(args: &cli::SourceArgs) -> Result<SprintAnalytics, SprintboardError> {
    let cfg = config::load_config(&args.root)?;
    let settings = AnalyticsSettings::from_config(&cfg)?;
    let path = match &args.source {
        Some(path) => path.clone(),
        None => resolve_against(&args.root, cfg.source_path()),
    };
    analytics::sprint_analytics(&path, &settings)
}

fn resolve_against(root: &std::path::Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

fn output_format(format: cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn print(view: &View<'_>, format: cli::ReportFormat) -> Result<(), SprintboardError> {
    let rendered = report::render(view, output_format(format))?;
    println!("{rendered}");
    Ok(())
}

fn run(cli: cli::Cli) -> Result<i32, SprintboardError> {
    match cli.command {
        cli::Commands::Analytics(args) => {
            let analytics = load(&args)?;
            print(&View::Analytics(&analytics), args.format)?;
        }
        cli::Commands::Leaderboard(args) => {
            let analytics = load(&args)?;
            print(&View::Leaderboard(&analytics), args.format)?;
        }
        cli::Commands::Teams(args) => {
            let analytics = load(&args)?;
            print(&View::Teams(&analytics), args.format)?;
        }
        cli::Commands::Team(cmd) => {
            let analytics = load(&cmd.source)?;
            let detail = analytics::team_detail(&analytics, &cmd.name)?;
            print(&View::Team(&detail), cmd.source.format)?;
        }
        cli::Commands::Progress(args) => {
            let analytics = load(&args)?;
            print(&View::Progress(&analytics), args.format)?;
        }
        cli::Commands::Personas(args) => {
            let analytics = load(&args)?;
            print(&View::Personas(&analytics), args.format)?;
        }
        cli::Commands::Features(cmd) => {
            let analytics = load(&cmd.source)?;
            let status = cmd.status.map(|status| match status {
                cli::StatusFilter::Completed => CompletionStatus::Completed,
                cli::StatusFilter::InProgress => CompletionStatus::InProgress,
                cli::StatusFilter::NotStarted => CompletionStatus::NotStarted,
            });
            let features =
                analytics::filter_features(&analytics.features, status, cmd.team.as_deref());
            print(&View::Features(features), cmd.source.format)?;
        }
    }
    Ok(exit_code::SUCCESS)
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {}", e);
            let code = match e {
                SprintboardError::TeamNotFound(_) => exit_code::NOT_FOUND,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
