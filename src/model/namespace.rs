use rustc_hash::FxHashMap;
use serde::Serialize;

/// File count and byte total of one namespace within one store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NamespaceInfo {
    pub count: u64,
    pub size: u64,
}

impl NamespaceInfo {
    pub fn record(&mut self, size: u64) {
        self.count += 1;
        self.size += size;
    }
}

/// Per-namespace statistics of one store
pub type NamespaceTable = FxHashMap<String, NamespaceInfo>;
