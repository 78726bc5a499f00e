// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use fedora_summary::config::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A pair of empty storage roots inside a temp directory
pub struct TestStores {
    pub dir: TempDir,
    pub objects: PathBuf,
    pub datastreams: PathBuf,
}

impl TestStores {
    pub fn config(&self, largest_n: usize) -> Config {
        Config {
            object_store_root: self.objects.clone(),
            datastream_store_root: self.datastreams.clone(),
            largest_n,
            ..Config::default()
        }
    }
}

pub fn create_test_stores() -> TestStores {
    let dir = TempDir::new().unwrap();
    let objects = dir.path().join("objectStore");
    let datastreams = dir.path().join("datastreamStore");
    std::fs::create_dir_all(&objects).unwrap();
    std::fs::create_dir_all(&datastreams).unwrap();

    TestStores {
        dir,
        objects,
        datastreams,
    }
}

/// URL-encoded object file name for `<namespace>:<id>`
pub fn object_name(namespace: &str, id: &str) -> String {
    format!("info%3Afedora%2F{}%3A{}", namespace, id)
}

/// URL-encoded datastream file name for `<namespace>:<id>/<dsid>`
pub fn datastream_name(namespace: &str, id: &str, dsid: &str) -> String {
    format!("info%3Afedora%2F{}%3A{}%2F{}%2F{}.0", namespace, id, dsid, dsid)
}

/// Write a file of `size` bytes at `root/subdir/name`, creating directories
pub fn write_file(root: &Path, subdir: &str, name: &str, size: usize) -> PathBuf {
    let dir = root.join(subdir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, vec![b'x'; size]).unwrap();
    path
}
