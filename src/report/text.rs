use std::io::{self, Write};

use super::Report;
use crate::model::CombinedEntry;
use crate::scanner::StoreScan;
use crate::util::size_to_human;

const HEADER: &str = "Namespace,obj_count,ds_count,total_count,obj_size,obj_size_human,ds_size,ds_size_human,total_size,total_size_human";

/// Format one summary row, without a trailing newline
pub fn format_row(namespace: &str, entry: &CombinedEntry) -> String {
    let obj = entry.object_info();
    let ds = entry.datastream_info();
    let total_size = entry.total_size();

    format!(
        "{},{},{},{},{},{},{},{},{},{}",
        namespace,
        obj.count,
        ds.count,
        entry.total_count(),
        obj.size,
        size_to_human(obj.size),
        ds.size,
        size_to_human(ds.size),
        total_size,
        size_to_human(total_size)
    )
}

/// Write the namespace summary; with `verbose`, also totals and the largest
/// files of each store.
pub fn write_text(report: &Report<'_>, out: &mut impl Write, verbose: bool) -> io::Result<()> {
    writeln!(out, "=== Namespace Summary ===")?;
    writeln!(out, "{}", HEADER)?;
    for (namespace, entry) in &report.namespaces {
        writeln!(out, "{}", format_row(namespace, entry))?;
    }

    if verbose {
        let totals = &report.totals;
        writeln!(out, "Total objects {}", totals.object_count)?;
        writeln!(out, "Total files {}", totals.file_count)?;
        writeln!(out, "Total size {} ({})", totals.size, size_to_human(totals.size))?;
        write_largest(report.objects, out)?;
        write_largest(report.datastreams, out)?;
    }

    Ok(())
}

fn write_largest(scan: &StoreScan, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "=== {} Largest {} files ===",
        scan.largest.capacity(),
        scan.kind.label()
    )?;
    for entry in scan.largest.entries() {
        writeln!(out, "{} {}", size_to_human(entry.size), entry.path)?;
    }
    Ok(())
}
