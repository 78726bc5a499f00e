mod format;
mod path;

pub use format::{format_timestamp, size_to_human};
pub use path::{UnparsedName, parse_namespace};
