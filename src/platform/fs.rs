// Messager - platform/fs.rs
//
// Filesystem access for catalog loading: the existence check that guards
// initialisation and the raw reader that feeds the parser.

use crate::util::constants;
use std::io::{self, Read};
use std::path::Path;

/// Whether `path` exists (file or directory).
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Read a catalog file as raw bytes.
///
/// Decoding and line splitting are left to the parser so that encoding
/// problems are reported per line instead of failing the whole read. Files
/// larger than `MAX_CATALOG_FILE_SIZE` are refused.
pub fn read_catalog(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = std::fs::File::open(path)?;
    let size = file.metadata()?.len();
    if size > constants::MAX_CATALOG_FILE_SIZE {
        return Err(io::Error::other(format!(
            "file is {size} bytes, exceeds maximum of {} bytes",
            constants::MAX_CATALOG_FILE_SIZE
        )));
    }

    let mut content = Vec::with_capacity(size as usize);
    file.read_to_end(&mut content)?;

    tracing::trace!(path = %path.display(), bytes = content.len(), "Read catalog file");
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_catalog_keeps_invalid_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.txt");
        std::fs::write(&path, b"a: 1\rb: \xFF\r\nc: 3").unwrap();

        let content = read_catalog(&path).unwrap();
        assert_eq!(content, b"a: 1\rb: \xFF\r\nc: 3");
    }

    #[test]
    fn test_read_catalog_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_catalog(&dir.path().join("gone.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_exists() {
        let dir = tempfile::tempdir().unwrap();
        assert!(exists(dir.path()));
        assert!(!exists(&dir.path().join("nope")));
    }
}
