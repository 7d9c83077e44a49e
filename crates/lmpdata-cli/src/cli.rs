use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "lmpdata - convert LAMMPS molecular data files to JSON or rewrite them in normalized form.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a LAMMPS data file and export the topology as JSON.
    Json(ConvertArgs),
    /// Parse a LAMMPS data file and rewrite it in normalized data-file form.
    Data(ConvertArgs),
}

/// Arguments shared by both conversion subcommands.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the input LAMMPS data file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the converted output file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}
