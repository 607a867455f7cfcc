// crates/eurostat-core/src/loader/common_io.rs
use crate::error::{EurostatError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a cached text file, reporting an absent file as [`EurostatError::NotCached`].
pub fn read_cached_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => EurostatError::NotCached(path.to_path_buf()),
        _ => EurostatError::Io(e),
    })
}
