use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use xyz2mol::core::models::units::LengthUnit;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "xyz2mol CLI - Perceives bonds and bond orders from Cartesian coordinates and writes MDL MOL (V2000) files.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an XYZ file into a MOL (V2000) file with perceived bond orders.
    Convert(ConvertArgs),
    /// Print the perceived bond table of an XYZ file.
    Bonds(BondsArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the input XYZ file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output MOL file. Writes to standard output when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Length unit of the input coordinates ('angstrom' or 'bohr').
    /// Overrides `input.units` from the config file.
    #[arg(short, long, value_name = "UNIT")]
    pub units: Option<LengthUnit>,

    /// Title line of the MOL record. Defaults to the XYZ comment line.
    #[arg(short, long, value_name = "TEXT")]
    pub title: Option<String>,
}

/// Arguments for the `bonds` subcommand.
#[derive(Args, Debug)]
pub struct BondsArgs {
    /// Path to the input XYZ file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Length unit of the input coordinates ('angstrom' or 'bohr').
    /// Overrides `input.units` from the config file.
    #[arg(short, long, value_name = "UNIT")]
    pub units: Option<LengthUnit>,
}
