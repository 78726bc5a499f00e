use serde::Serialize;
use std::collections::BTreeMap;

use super::namespace::{NamespaceInfo, NamespaceTable};

/// One namespace's statistics from both stores. Either side may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombinedEntry {
    pub object: Option<NamespaceInfo>,
    pub datastream: Option<NamespaceInfo>,
}

impl CombinedEntry {
    pub fn object_info(&self) -> NamespaceInfo {
        self.object.unwrap_or_default()
    }

    pub fn datastream_info(&self) -> NamespaceInfo {
        self.datastream.unwrap_or_default()
    }

    pub fn total_count(&self) -> u64 {
        self.object_info().count + self.datastream_info().count
    }

    pub fn total_size(&self) -> u64 {
        self.object_info().size + self.datastream_info().size
    }
}

/// Full outer join of the object and datastream tables, keyed and ordered
/// by namespace.
pub fn combine(
    objects: &NamespaceTable,
    datastreams: &NamespaceTable,
) -> BTreeMap<String, CombinedEntry> {
    let mut combined: BTreeMap<String, CombinedEntry> = BTreeMap::new();

    for (namespace, info) in objects {
        combined.entry(namespace.clone()).or_default().object = Some(*info);
    }
    for (namespace, info) in datastreams {
        combined.entry(namespace.clone()).or_default().datastream = Some(*info);
    }

    combined
}

/// Grand totals over every namespace
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub object_count: u64,
    pub file_count: u64,
    pub size: u64,
}

impl Totals {
    pub fn add(&mut self, entry: &CombinedEntry) {
        self.object_count += entry.object_info().count;
        self.file_count += entry.total_count();
        self.size += entry.total_size();
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a CombinedEntry>) -> Self {
        let mut totals = Self::default();
        for entry in entries {
            totals.add(entry);
        }
        totals
    }
}
