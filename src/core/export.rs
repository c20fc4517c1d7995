//! # Output Export
//!
//! Packages the current output text as a plain-text file with a fixed name.
//! Synchronous, no network; a write failure surfaces as a status-line
//! message in the caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

/// Fixed export filename.
pub const EXPORT_FILENAME: &str = "smartphone-marketing-content.txt";

/// Writes `output` to `dir/smartphone-marketing-content.txt`, returning the
/// full path. The file content is exactly the output text.
pub fn write_to(dir: &Path, output: &str) -> io::Result<PathBuf> {
    let path = dir.join(EXPORT_FILENAME);
    fs::write(&path, output)?;
    debug!("Exported {} bytes to {}", output.len(), path.display());
    Ok(path)
}

/// Exports into the current working directory.
pub fn write(output: &str) -> io::Result<PathBuf> {
    write_to(Path::new("."), output)
}
