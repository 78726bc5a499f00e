//! Report assembly and rendering
//!
//! A [`Report`] joins the object and datastream scans; `text` renders the
//! CSV-like summary and `json` the machine-readable document.

mod json;
mod text;

pub use json::{JsonReport, write_json};
pub use text::{format_row, write_text};

use std::collections::BTreeMap;

use crate::model::{CombinedEntry, Totals, combine};
use crate::scanner::StoreScan;

/// Both store scans plus their per-namespace join and grand totals
pub struct Report<'a> {
    pub objects: &'a StoreScan,
    pub datastreams: &'a StoreScan,
    pub namespaces: BTreeMap<String, CombinedEntry>,
    pub totals: Totals,
}

impl<'a> Report<'a> {
    pub fn new(objects: &'a StoreScan, datastreams: &'a StoreScan) -> Self {
        let namespaces = combine(&objects.namespaces, &datastreams.namespaces);
        let totals = Totals::from_entries(namespaces.values());
        Self {
            objects,
            datastreams,
            namespaces,
            totals,
        }
    }
}
