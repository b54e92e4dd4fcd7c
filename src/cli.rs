use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sprintboard",
    version,
    about = "Sprint game analytics: team KPIs, leaderboard and badges from a sprint export"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full analytics payload
    Analytics(SourceArgs),
    /// Teams ranked by score
    Leaderboard(SourceArgs),
    /// Statistics for every team
    Teams(SourceArgs),
    /// Statistics, features and rank of one team
    Team(TeamCommand),
    /// Per-sprint burndown averages
    Progress(SourceArgs),
    /// Statistics per epic owner
    Personas(SourceArgs),
    /// Feature rows, optionally filtered
    Features(FeaturesCommand),
}

#[derive(Args, Clone)]
pub struct SourceArgs {
    /// Sprint export to read; defaults to `[source] path` from config
    #[arg(long)]
    pub source: Option<PathBuf>,
    /// Directory holding sprintboard.toml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct TeamCommand {
    pub name: String,
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args)]
pub struct FeaturesCommand {
    #[arg(long, value_enum)]
    pub status: Option<StatusFilter>,
    #[arg(long)]
    pub team: Option<String>,
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusFilter {
    Completed,
    InProgress,
    NotStarted,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
