// Library crate exposing modules for integration tests and benchmarks

pub mod cli;
pub mod config;
pub mod model;
pub mod report;
pub mod scanner;
pub mod util;

use anyhow::{Context, Result};
use std::io::Write;

use config::Config;
use report::{Report, write_json, write_text};
use scanner::{StoreKind, StoreScanner};

/// Output options that do not affect the scan itself
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub verbose: bool,
    pub json: bool,
}

/// Scan both stores and write the report to `out`.
///
/// The object store is scanned first, then the datastream store. Nothing is
/// written unless both scans succeed, and an invalid config fails before any
/// scanning.
pub fn run(
    config: &Config,
    scanner: &StoreScanner,
    options: OutputOptions,
    out: &mut impl Write,
) -> Result<()> {
    let objects = scanner.scan(config, StoreKind::Object)?;
    let datastreams = scanner.scan(config, StoreKind::Datastream)?;

    let report = Report::new(&objects, &datastreams);
    if options.json {
        let now = time::OffsetDateTime::now_utc().unix_timestamp();
        write_json(&report, now, out).context("Failed to write JSON report")?;
    } else {
        write_text(&report, out, options.verbose).context("Failed to write report")?;
    }
    out.flush()?;

    Ok(())
}
