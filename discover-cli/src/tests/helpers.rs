//! Test helpers for writing catalog files and capturing command output.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Taj Mahal, Red Fort and Goa Beach; popularity order Taj Mahal, Goa Beach,
/// Red Fort.
pub(super) const THREE_LANDMARKS_CSV: &str = "\
State,City,Name,Google review rating,Number of google review in lakhs,Best Time to visit
Uttar Pradesh,Agra,Taj Mahal,4.8,50,October to March
Delhi,Delhi,Red Fort,4.5,30,October to March
Goa,Panaji,Goa Beach,4.2,40,November to February
";

/// A catalog file inside its own temporary directory.
#[derive(Debug)]
pub(super) struct CatalogFile {
    dir: TempDir,
    path: Utf8PathBuf,
}

impl CatalogFile {
    pub(super) fn with_contents(contents: &str) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        let path = root.join("places.csv");
        fs::write(&path, contents).expect("write catalog");
        Self { dir, path }
    }

    pub(super) fn three_landmarks() -> Self {
        Self::with_contents(THREE_LANDMARKS_CSV)
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub(super) fn missing_path(&self) -> Utf8PathBuf {
        self.path.with_file_name("absent.csv")
    }

    pub(super) fn directory_path(&self) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.dir.path().to_path_buf()).expect("utf-8 tempdir")
    }
}

/// Parse captured command output as JSON.
pub(super) fn json_output(buffer: &[u8]) -> serde_json::Value {
    serde_json::from_slice(buffer).expect("command output should be JSON")
}
