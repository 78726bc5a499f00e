//! Storage scanner
//!
//! Walks a Fedora storage root and tallies files per namespace.
//!
//! - **types**: Domain types (StoreKind, StoreScan)
//! - **progress**: Progress reporting abstraction
//! - **StoreScanner** (this module): the walk itself

mod progress;
mod types;

pub use progress::{
    IndicatifProgress, NoopProgress, ProgressHandle, ProgressReporter, VerboseProgress,
};
pub use types::{StoreKind, StoreScan};

use anyhow::{Context, Result};
use std::fs;
use std::time::Instant;
use walkdir::WalkDir;

use crate::config::{Config, UnparsedPolicy};
use crate::util::parse_namespace;

/// Walks one storage root at a time, building a [`StoreScan`]
pub struct StoreScanner {
    verbose: bool,
    profile: bool,
}

impl StoreScanner {
    pub fn new() -> Self {
        Self {
            verbose: true,
            profile: false,
        }
    }

    /// Create a quiet scanner (no logging output, used by tests and benchmarks)
    pub fn quiet() -> Self {
        Self {
            verbose: false,
            profile: false,
        }
    }

    /// Create a profiling scanner (detailed timing output, no spinner)
    pub fn profiling() -> Self {
        Self {
            verbose: true,
            profile: true,
        }
    }

    /// Scan every file below the configured root of `kind`.
    ///
    /// The config is validated first. Any traversal or stat failure aborts
    /// the scan.
    pub fn scan(&self, config: &Config, kind: StoreKind) -> Result<StoreScan> {
        config.validate()?;

        let start = Instant::now();
        let root = config.store_root(kind);
        let progress: Box<dyn ProgressReporter> = if self.profile {
            Box::new(NoopProgress)
        } else {
            Box::new(VerboseProgress::new(self.verbose))
        };

        self.log(&format!("Scanning {} store at {}...", kind, root.display()));

        let pb = progress.start(kind.label());
        let mut scan = StoreScan::new(kind, root, config.largest_n);

        for entry in WalkDir::new(root) {
            let entry = entry
                .with_context(|| format!("Failed to walk {} store at {}", kind, root.display()))?;
            if entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            // Follows symlinks, like stat(2)
            let metadata = fs::metadata(path)
                .with_context(|| format!("Failed to stat {}", path.display()))?;
            if metadata.is_dir() {
                continue;
            }

            // Non-UTF-8 bytes become U+FFFD, so such names may share a bucket
            let file_name = entry.file_name().to_string_lossy();
            match parse_namespace(&file_name) {
                Ok(namespace) => scan.record(namespace, path.display().to_string(), metadata.len()),
                Err(unparsed) => {
                    if config.unparsed == UnparsedPolicy::Error {
                        return Err(anyhow::Error::new(unparsed)
                            .context(format!("Unparsed file name: {}", path.display())));
                    }
                    scan.unparsed += 1;
                    scan.record(&unparsed.0, path.display().to_string(), metadata.len());
                }
            }
            pb.inc(1);
        }

        pb.finish();

        self.log(&format!(
            "{} store: {} files in {} namespaces",
            kind,
            scan.file_count(),
            scan.namespaces.len()
        ));
        if scan.unparsed > 0 && self.verbose {
            eprintln!(
                "warning: {} {} store file(s) had no namespace and were counted under their own name",
                scan.unparsed, kind
            );
        }
        self.profile_phase(&format!("Scan {} store", kind), start);

        Ok(scan)
    }

    fn log(&self, msg: &str) {
        if self.verbose {
            eprintln!("{}", msg);
        }
    }

    fn profile_phase(&self, name: &str, start: Instant) {
        if self.profile {
            eprintln!("[PROFILE] {}: {:?}", name, start.elapsed());
        }
    }
}

impl Default for StoreScanner {
    fn default() -> Self {
        Self::new()
    }
}
