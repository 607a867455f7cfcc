// crates/eurostat-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library.
///
/// The fetcher never returns these directly (it reports a
/// [`FetchOutcome`](crate::FetchOutcome) instead); they reach callers from
/// the dataset and geodata loaders, or from [`FetchOutcome::into_result`](crate::FetchOutcome::into_result).
#[derive(Debug, Error)]
pub enum EurostatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("download failed: {0}")]
    FetchFailed(String),

    #[error("no cached copy at {}", .0.display())]
    NotCached(PathBuf),

    #[error("dataset has no header line")]
    MissingHeader,

    #[error("coded dimension '{0}' is not a column of the dataset")]
    MissingColumn(String),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[cfg(feature = "geodata")]
    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[cfg(feature = "geodata")]
    #[error("shapefile error: {0}")]
    Shapefile(#[from] shapefile::Error),

    #[cfg(feature = "geodata")]
    #[error("dBase error: {0}")]
    Dbase(#[from] shapefile::dbase::Error),

    #[cfg(feature = "geodata")]
    #[error("invalid geodata archive: {0}")]
    InvalidArchive(String),
}

pub type Result<T> = std::result::Result<T, EurostatError>;
