use serde::Serialize;

/// A single file retained by a [`LargestList`]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct LargestEntry {
    pub size: u64,
    pub path: String,
}

/// Keeps the `capacity` largest files seen so far, largest first.
///
/// Entries are ordered by `(size, path)` descending, so equal sizes are
/// ordered by path descending. Once the list is full a new file must be
/// strictly larger than the current minimum to get in; a file that would only
/// tie the minimum is rejected.
#[derive(Debug, Clone)]
pub struct LargestList {
    capacity: usize,
    entries: Vec<LargestEntry>,
    smallest: u64,
}

impl LargestList {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "LargestList capacity must be at least 1");
        Self {
            capacity,
            entries: Vec::with_capacity(capacity + 1),
            smallest: 0,
        }
    }

    pub fn add(&mut self, path: impl Into<String>, size: u64) {
        if self.is_full() && size <= self.smallest {
            return;
        }

        self.entries.push(LargestEntry {
            size,
            path: path.into(),
        });
        self.entries.sort_unstable_by(|a, b| b.cmp(a));
        self.entries.truncate(self.capacity);

        if let Some(last) = self.entries.last() {
            self.smallest = last.size;
        }
    }

    pub fn entries(&self) -> &[LargestEntry] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }
}
