//! Domain types produced by a store scan

use std::fmt;
use std::path::PathBuf;

use crate::model::{LargestList, NamespaceTable};

/// Which of the two storage roots a scan covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKind {
    Object,
    Datastream,
}

impl StoreKind {
    /// Label used in report headings ("Largest Object files")
    pub fn label(self) -> &'static str {
        match self {
            StoreKind::Object => "Object",
            StoreKind::Datastream => "Datastream",
        }
    }

    /// Storage type name as recorded in storage detail rows
    pub fn storage_type(self) -> &'static str {
        match self {
            StoreKind::Object => "objectStore",
            StoreKind::Datastream => "datastreamStore",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything collected while walking one store
#[derive(Debug, Clone)]
pub struct StoreScan {
    pub kind: StoreKind,
    pub root: PathBuf,
    pub namespaces: NamespaceTable,
    pub largest: LargestList,
    /// Files whose name carried no namespace
    pub unparsed: u64,
}

impl StoreScan {
    pub fn new(kind: StoreKind, root: impl Into<PathBuf>, largest_n: usize) -> Self {
        Self {
            kind,
            root: root.into(),
            namespaces: NamespaceTable::default(),
            largest: LargestList::new(largest_n),
            unparsed: 0,
        }
    }

    /// Count one file of `size` bytes under `namespace`
    pub fn record(&mut self, namespace: &str, path: String, size: u64) {
        match self.namespaces.get_mut(namespace) {
            Some(info) => info.record(size),
            None => self
                .namespaces
                .entry(namespace.to_string())
                .or_default()
                .record(size),
        }
        self.largest.add(path, size);
    }

    pub fn file_count(&self) -> u64 {
        self.namespaces.values().map(|info| info.count).sum()
    }

    pub fn total_size(&self) -> u64 {
        self.namespaces.values().map(|info| info.size).sum()
    }
}
