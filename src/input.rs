//! Input path checks.
//!
//! The only hard precondition is that the input exists. The PDF header is
//! sniffed for logging, but a missing header is left for the backend to
//! reject.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Fail with [`Error::FileNotFound`] unless `path` exists.
pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::FileNotFound(path.to_path_buf()))
    }
}

/// PDF version from the header of `data` (e.g. "1.7"), if it has one.
pub fn header_version(data: &[u8]) -> Option<String> {
    if data.len() < PDF_MAGIC_LEN + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return None;
    }

    let version = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    let valid = version[0].is_ascii_digit() && version[1] == b'.' && version[2].is_ascii_digit();
    valid.then(|| String::from_utf8_lossy(version).to_string())
}

/// Check that `path` exists and log what its header says.
pub fn inspect(path: &Path) -> Result<()> {
    ensure_exists(path)?;

    let mut header = [0u8; 16];
    let read = File::open(path).and_then(|mut f| f.read(&mut header));
    match read.ok().and_then(|n| header_version(&header[..n])) {
        Some(version) => log::debug!("{}: PDF {}", path.display(), version),
        None => log::warn!("{} does not start with a PDF header", path.display()),
    }

    Ok(())
}
