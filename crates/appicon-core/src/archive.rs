//! ZIP packaging of named byte buffers.

use log::{debug, info};
use std::collections::HashSet;
use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::config::ArchiveCompression;
use crate::error::IconError;

/// Writes a set of `(relative path, bytes)` entries into one in-memory ZIP.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArchiveBuilder {
    compression: ArchiveCompression,
}

impl ArchiveBuilder {
    pub fn new(compression: ArchiveCompression) -> Self {
        ArchiveBuilder { compression }
    }

    /// Build the archive.
    ///
    /// Paths containing `/` land in the matching directories inside the
    /// archive. Every path must be relative, free of `..` and unique; the first
    /// violation aborts the build.
    pub fn build<'a, I>(&self, entries: I) -> Result<Vec<u8>, IconError>
    where
        I: IntoIterator<Item = (&'a str, &'a [u8])>,
    {
        let options = SimpleFileOptions::default().compression_method(self.compression.method());
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let mut seen = HashSet::new();

        for (path, bytes) in entries {
            validate_path(path)?;
            if !seen.insert(path) {
                return Err(IconError::archive(format!("duplicate entry '{}'", path)));
            }

            zip.start_file(path, options)
                .map_err(|e| IconError::archive(format!("failed to start '{}': {}", path, e)))?;
            zip.write_all(bytes)
                .map_err(|e| IconError::archive(format!("failed to write '{}': {}", path, e)))?;
            debug!("archived {} ({} bytes)", path, bytes.len());
        }

        let archive = zip
            .finish()
            .map_err(|e| IconError::archive(format!("failed to finalize archive: {}", e)))?
            .into_inner();

        info!("archive built: {} entries, {} bytes", seen.len(), archive.len());
        Ok(archive)
    }
}

fn validate_path(path: &str) -> Result<(), IconError> {
    let reason = if path.is_empty() {
        Some("empty path")
    } else if path.starts_with('/') || path.starts_with('\\') {
        Some("absolute path")
    } else if path.ends_with('/') {
        Some("directory path")
    } else if path.split(['/', '\\']).any(|part| part == ".." || part.is_empty()) {
        Some("path escapes or has empty components")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(IconError::archive(format!("invalid entry '{}': {}", path, reason))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn read_back(archive: Vec<u8>) -> ZipArchive<Cursor<Vec<u8>>> {
        ZipArchive::new(Cursor::new(archive)).unwrap()
    }

    #[test]
    fn writes_every_entry() {
        let entries = [
            ("mipmap-mdpi/icon-48.png", &b"android"[..]),
            ("Icon-20.png", &b"ios"[..]),
            ("icon_16x16.png", &b"macos"[..]),
        ];

        let archive = ArchiveBuilder::default().build(entries).unwrap();
        let mut zip = read_back(archive);

        assert_eq!(zip.len(), 3);
        for (path, bytes) in entries {
            let mut file = zip.by_name(path).unwrap();
            let mut content = Vec::new();
            file.read_to_end(&mut content).unwrap();
            assert_eq!(content, bytes);
            assert_eq!(file.size(), bytes.len() as u64);
        }
    }

    #[test]
    fn nested_paths_keep_directories() {
        let archive = ArchiveBuilder::default()
            .build([("mipmap-xxxhdpi/icon-192.png", &b"x"[..])])
            .unwrap();
        let zip = read_back(archive);

        let names: Vec<&str> = zip.file_names().collect();
        assert_eq!(names, ["mipmap-xxxhdpi/icon-192.png"]);
    }

    #[test]
    fn stored_compression_keeps_raw_size() {
        let payload = vec![7u8; 4096];
        let archive = ArchiveBuilder::new(ArchiveCompression::Stored)
            .build([("blob.bin", payload.as_slice())])
            .unwrap();
        let mut zip = read_back(archive);

        let file = zip.by_index(0).unwrap();
        assert_eq!(file.compression(), zip::CompressionMethod::Stored);
        assert_eq!(file.compressed_size(), 4096);
    }

    #[test]
    fn empty_input_builds_empty_archive() {
        let archive = ArchiveBuilder::default()
            .build(std::iter::empty::<(&str, &[u8])>())
            .unwrap();
        assert_eq!(read_back(archive).len(), 0);
    }

    #[test]
    fn duplicate_path_rejected() {
        let result = ArchiveBuilder::default().build([("a.png", &b"1"[..]), ("a.png", &b"2"[..])]);
        assert!(matches!(result, Err(IconError::ArchiveWrite { .. })));
    }

    #[test]
    fn invalid_paths_rejected() {
        for path in ["", "/abs.png", "dir/", "../up.png", "a//b.png", "a/../b.png"] {
            let result = ArchiveBuilder::default().build([(path, &b"x"[..])]);
            assert!(
                matches!(result, Err(IconError::ArchiveWrite { .. })),
                "{:?} was accepted",
                path
            );
        }
    }
}
