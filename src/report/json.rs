use serde::Serialize;
use std::io::Write;
use std::path::Path;

use super::Report;
use crate::model::{LargestEntry, Totals};
use crate::scanner::StoreScan;
use crate::util::format_timestamp;

#[derive(Debug, Serialize)]
pub struct NamespaceRow<'a> {
    pub namespace: &'a str,
    pub obj_count: u64,
    pub ds_count: u64,
    pub total_count: u64,
    pub obj_size: u64,
    pub ds_size: u64,
    pub total_size: u64,
}

/// Per-store detail: storage type, file count and bytes
#[derive(Debug, Serialize)]
pub struct StoreDetail<'a> {
    pub storage_type: &'static str,
    pub root: &'a Path,
    pub file_count: u64,
    pub bytes: u64,
    pub unparsed: u64,
}

impl<'a> StoreDetail<'a> {
    fn new(scan: &'a StoreScan) -> Self {
        Self {
            storage_type: scan.kind.storage_type(),
            root: &scan.root,
            file_count: scan.file_count(),
            bytes: scan.total_size(),
            unparsed: scan.unparsed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LargestFiles<'a> {
    pub object: &'a [LargestEntry],
    pub datastream: &'a [LargestEntry],
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: String,
    pub namespaces: Vec<NamespaceRow<'a>>,
    pub stores: [StoreDetail<'a>; 2],
    pub totals: Totals,
    pub largest: LargestFiles<'a>,
}

impl<'a> JsonReport<'a> {
    pub fn new(report: &'a Report<'a>, generated_at: i64) -> Self {
        let namespaces = report
            .namespaces
            .iter()
            .map(|(namespace, entry)| {
                let obj = entry.object_info();
                let ds = entry.datastream_info();
                NamespaceRow {
                    namespace,
                    obj_count: obj.count,
                    ds_count: ds.count,
                    total_count: entry.total_count(),
                    obj_size: obj.size,
                    ds_size: ds.size,
                    total_size: entry.total_size(),
                }
            })
            .collect();

        Self {
            generated_at: format_timestamp(generated_at),
            namespaces,
            stores: [
                StoreDetail::new(report.objects),
                StoreDetail::new(report.datastreams),
            ],
            totals: report.totals,
            largest: LargestFiles {
                object: report.objects.largest.entries(),
                datastream: report.datastreams.largest.entries(),
            },
        }
    }
}

/// Write the report as pretty-printed JSON followed by a newline
pub fn write_json(
    report: &Report<'_>,
    generated_at: i64,
    out: &mut impl Write,
) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport::new(report, generated_at))?;
    writeln!(out).map_err(serde_json::Error::io)
}
