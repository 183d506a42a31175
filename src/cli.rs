use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Sentiment map CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "sentimap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score records and aggregate mean sentiment per region
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Records file, or directory of .txt record files
    #[arg(value_hint = ValueHint::AnyPath)]
    pub records: PathBuf,

    /// Lexicon file (phrase,weight per line)
    #[arg(value_hint = ValueHint::FilePath)]
    pub lexicon: PathBuf,

    /// Region geometry file (JSON, code -> polygons)
    #[arg(value_hint = ValueHint::FilePath)]
    pub regions: PathBuf,

    /// Output results file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Cap the worker pool (defaults to all cores)
    #[arg(long)]
    pub threads: Option<usize>,
}
