use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Japanese national holiday calendar.
#[derive(Parser)]
#[command(
    name = "jpholiday",
    version,
    about = "Weekday and national holiday lookup for Japanese calendar dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to JSON configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Classify one or more YYYY-MM-DD dates.
    Info(InfoArgs),
    /// List the holidays of a year.
    Year(YearArgs),
    /// List the holidays between two dates (inclusive).
    Range(RangeArgs),
}

/// Arguments for the `info` subcommand.
#[derive(clap::Args)]
pub struct InfoArgs {
    /// Dates in YYYY-MM-DD form.
    #[arg(required = true)]
    pub dates: Vec<String>,

    /// Print JSON instead of tab-separated text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    pub year: i32,

    /// Print JSON instead of tab-separated text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// First date, YYYY-MM-DD.
    pub start: String,

    /// Last date, YYYY-MM-DD.
    pub end: String,

    /// Print JSON instead of tab-separated text.
    #[arg(long)]
    pub json: bool,
}
