//! Capability-based filesystem helpers built on `cap-std` and `camino`.
//!
//! Catalog sources are opened through an ambient directory handle for the
//! file's parent so the rest of the workspace never touches `std::fs` paths
//! directly.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// What a path points at on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Nothing exists at the path.
    Missing,
    /// A regular file.
    File,
    /// Something other than a regular file, such as a directory.
    Other,
}

/// Open a UTF-8 file path using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Classify `path` without following it into a read.
///
/// A missing file or a missing parent directory both report
/// [`PathKind::Missing`]; other inspection failures are returned as errors.
pub fn probe(path: &Utf8Path) -> io::Result<PathKind> {
    let (dir, name) = match open_parent(path) {
        Ok(found) => found,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(PathKind::Missing),
        Err(err) => return Err(err),
    };
    match dir.metadata(name.as_str()) {
        Ok(meta) if meta.is_file() => Ok(PathKind::File),
        Ok(_) => Ok(PathKind::Other),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(PathKind::Missing),
        Err(err) => Err(err),
    }
}

fn open_parent(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use std::io::Read;
    use tempfile::TempDir;

    fn utf8_root(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp dir")
    }

    #[rstest]
    fn probe_classifies_paths() {
        let tmp = TempDir::new().expect("tempdir");
        let root = utf8_root(&tmp);
        let file = root.join("places.csv");
        std::fs::write(&file, b"Name\n").expect("write file");

        assert_eq!(probe(&file).expect("probe file"), PathKind::File);
        assert_eq!(probe(&root).expect("probe dir"), PathKind::Other);
        assert_eq!(
            probe(&root.join("absent.csv")).expect("probe missing"),
            PathKind::Missing
        );
        assert_eq!(
            probe(&root.join("nested/absent.csv")).expect("probe missing parent"),
            PathKind::Missing
        );
    }

    #[rstest]
    fn opens_files_for_reading() {
        let tmp = TempDir::new().expect("tempdir");
        let file = utf8_root(&tmp).join("places.csv");
        std::fs::write(&file, b"Name\nRed Fort\n").expect("write file");

        let mut contents = String::new();
        open_utf8_file(&file)
            .expect("open file")
            .read_to_string(&mut contents)
            .expect("read file");
        assert_eq!(contents, "Name\nRed Fort\n");
    }
}
