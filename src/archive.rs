//! Compressed table files
//!
//! A compressed table is a ZIP archive holding one table entry. The
//! compression method follows the file extension.

use crate::error::{Result, TableError};
use s_zip::{CompressionMethod, StreamingZipReader, StreamingZipWriter};
use std::path::Path;

/// Entry suffixes recognised as table text
const TABLE_SUFFIXES: [&str; 2] = [".txt", ".dat"];

/// Compression method and level implied by the extension of `path`
///
/// - `.zst`, `.zip` → Zstd, level 3
/// - `.gz` → Deflate, level 6
/// - anything else → `None` (plain text)
pub fn compression_for(path: &Path) -> Option<(CompressionMethod, u32)> {
    let name = path.to_str().unwrap_or("");

    if name.ends_with(".zst") || name.ends_with(".zip") {
        Some((CompressionMethod::Zstd, 3))
    } else if name.ends_with(".gz") {
        Some((CompressionMethod::Deflate, 6))
    } else {
        None
    }
}

/// Name of the table entry stored inside the archive at `path`
///
/// `halos.txt.zst` and `halos.zst` both store `halos.txt`.
pub fn entry_name(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let base = TABLE_SUFFIXES
        .iter()
        .fold(stem, |s, suffix| s.trim_end_matches(suffix));

    if base.is_empty() {
        "table.txt".to_string()
    } else {
        format!("{}.txt", base)
    }
}

fn is_table_entry(name: &str) -> bool {
    TABLE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Decompress the table entry of the archive at `path`
///
/// The first entry with a table suffix is used, falling back to the first entry.
pub fn read(path: &Path) -> Result<Vec<u8>> {
    let mut zip = StreamingZipReader::open(path)
        .map_err(|e| TableError::ReadError(format!("Failed to open archive: {}", e)))?;

    let entry = zip
        .entries()
        .iter()
        .find(|e| is_table_entry(&e.name))
        .or_else(|| zip.entries().first())
        .map(|e| e.name.clone())
        .ok_or_else(|| TableError::ReadError("No table entry found in archive".to_string()))?;

    zip.read_entry_by_name(&entry).map_err(|e| {
        TableError::ReadError(format!("Failed to read archive entry {}: {}", entry, e))
    })
}

/// Write `data` as the single table entry of a new archive at `path`
pub fn write(path: &Path, method: CompressionMethod, level: u32, data: &[u8]) -> Result<()> {
    let mut zip = StreamingZipWriter::with_method(path, method, level)
        .map_err(|e| write_error("Failed to create ZIP writer", e))?;

    zip.start_entry(&entry_name(path))
        .map_err(|e| write_error("Failed to start ZIP entry", e))?;
    zip.write_data(data)
        .map_err(|e| write_error("Failed to write to ZIP", e))?;
    zip.finish()
        .map_err(|e| write_error("Failed to finish ZIP", e))?;
    Ok(())
}

fn write_error(context: &str, e: impl std::fmt::Display) -> TableError {
    TableError::WriteError(format!("{}: {}", context, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_for() {
        assert!(compression_for(Path::new("a.txt")).is_none());
        assert!(matches!(
            compression_for(Path::new("a.txt.zst")),
            Some((CompressionMethod::Zstd, 3))
        ));
        assert!(matches!(
            compression_for(Path::new("a.txt.gz")),
            Some((CompressionMethod::Deflate, 6))
        ));
    }

    #[test]
    fn test_entry_name() {
        assert_eq!(entry_name(Path::new("out/halos.txt.zst")), "halos.txt");
        assert_eq!(entry_name(Path::new("halos.dat.gz")), "halos.txt");
        assert_eq!(entry_name(Path::new("halos.zip")), "halos.txt");
        assert_eq!(entry_name(Path::new(".txt.gz")), "table.txt");
    }

    #[test]
    fn test_entry_name_is_recognised_on_read() {
        assert!(is_table_entry(&entry_name(Path::new("x.gz"))));
        assert!(!is_table_entry("meta.json"));
    }
}
