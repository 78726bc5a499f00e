mod combined;
mod largest;
mod namespace;

pub use combined::{CombinedEntry, Totals, combine};
pub use largest::{LargestEntry, LargestList};
pub use namespace::{NamespaceInfo, NamespaceTable};
