use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, UnparsedPolicy};

#[derive(Parser, Debug)]
#[command(
    name = "fedora-summary",
    about = "Summarize Fedora object and datastream storage by namespace"
)]
pub struct Cli {
    /// Print totals and the largest files of each store
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the report as JSON instead of CSV-like text
    #[arg(long)]
    pub json: bool,

    /// Suppress progress and status messages on stderr
    #[arg(short, long, conflicts_with = "profile")]
    pub quiet: bool,

    /// Print phase timings on stderr (skips the progress spinner)
    #[arg(long)]
    pub profile: bool,

    /// Fail on files whose name carries no namespace
    #[arg(long)]
    pub strict: bool,

    /// Object store root directory
    #[arg(long, value_name = "PATH")]
    pub object_store: Option<PathBuf>,

    /// Datastream store root directory
    #[arg(long, value_name = "PATH")]
    pub datastream_store: Option<PathBuf>,

    /// Number of largest files to list per store
    #[arg(short = 'n', long = "largest", value_name = "N")]
    pub largest_n: Option<usize>,

    /// JSON config file (default: <config dir>/fedora-summary/config.json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(root) = &self.object_store {
            config.object_store_root = root.clone();
        }
        if let Some(root) = &self.datastream_store {
            config.datastream_store_root = root.clone();
        }
        if let Some(n) = self.largest_n {
            config.largest_n = n;
        }
        if self.strict {
            config.unparsed = UnparsedPolicy::Error;
        }
        config
    }
}
