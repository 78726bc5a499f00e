use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter};

use fedora_summary::cli::Cli;
use fedora_summary::config::Config;
use fedora_summary::scanner::StoreScanner;
use fedora_summary::{OutputOptions, run};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cli.apply(Config::load(cli.config.as_deref())?);

    let scanner = if cli.profile {
        StoreScanner::profiling()
    } else if cli.quiet {
        StoreScanner::quiet()
    } else {
        StoreScanner::new()
    };

    let options = OutputOptions {
        verbose: cli.verbose,
        json: cli.json,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&config, &scanner, options, &mut out)
}
