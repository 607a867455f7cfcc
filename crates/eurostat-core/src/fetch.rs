// crates/eurostat-core/src/fetch.rs

//! # Fetcher
//!
//! Populates a cache file from a URL unless a fresh copy already exists.
//! Fetching is best effort: every failure is logged and reported as
//! [`FetchOutcome::FetchFailed`], never raised, and leaves any previous
//! cached copy untouched.

use crate::cache::CacheStore;
use crate::error::{EurostatError, Result};
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

const LOG_TARGET: &str = "eurostat::fetch";

/// Network seam: a plain blocking GET returning the full body.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP(S) transport over `reqwest` with rustls.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("eurostat-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(EurostatError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes()?.to_vec())
    }
}

/// How the downloaded bytes are treated before being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    /// Must decode as UTF-8.
    Text,
    /// Written verbatim.
    Binary,
}

/// Framing of the remote resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    /// A single gzip member, unwrapped before decoding.
    Gzip,
}

/// What [`Fetcher::fetch`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A fresh cached copy existed; no network access happened.
    Fresh,
    /// The resource was downloaded and the cache file (over)written.
    Fetched,
    /// Download, decompression, decoding or writing failed. The cache file,
    /// if any, was left as it was.
    FetchFailed(String),
}

impl FetchOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::FetchFailed(_))
    }

    /// Strict view for callers that do not want the lenient default.
    pub fn into_result(self) -> Result<Self> {
        match self {
            Self::FetchFailed(reason) => Err(EurostatError::FetchFailed(reason)),
            other => Ok(other),
        }
    }
}

/// Download-and-cache primitive shared by every loader.
pub struct Fetcher {
    transport: Box<dyn Transport>,
    cache: CacheStore,
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl Fetcher {
    pub fn new(transport: Box<dyn Transport>, cache: CacheStore) -> Self {
        Self { transport, cache }
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Make sure `destination` holds a fresh copy of `url`.
    ///
    /// The destination directory must already exist.
    pub fn fetch(
        &self,
        url: &str,
        destination: &Path,
        mode: ContentMode,
        compression: Compression,
    ) -> FetchOutcome {
        if self.cache.is_fresh(destination) {
            return FetchOutcome::Fresh;
        }

        log::info!(target: LOG_TARGET, "downloading {url} -> {}", destination.display());
        match self.download(url, destination, mode, compression) {
            Ok(()) => FetchOutcome::Fetched,
            Err(e) => {
                log::warn!(target: LOG_TARGET, "failed to fetch {url}: {e}");
                FetchOutcome::FetchFailed(e.to_string())
            }
        }
    }

    fn download(
        &self,
        url: &str,
        destination: &Path,
        mode: ContentMode,
        compression: Compression,
    ) -> Result<()> {
        let body = self.transport.get(url)?;

        let content = match compression {
            Compression::None => body,
            Compression::Gzip => {
                let mut out = Vec::new();
                GzDecoder::new(body.as_slice()).read_to_end(&mut out)?;
                out
            }
        };

        let content = match mode {
            ContentMode::Text => String::from_utf8(content)?.into_bytes(),
            ContentMode::Binary => content,
        };

        write_replacing(destination, &content)
    }
}

/// Write `content` next to `destination` and move it into place, so a failed
/// write never clobbers the previous copy.
fn write_replacing(destination: &Path, content: &[u8]) -> Result<()> {
    let partial = partial_path(destination);
    let written = File::create(&partial)
        .and_then(|mut file| {
            file.write_all(content)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&partial, destination));

    if let Err(e) = written {
        let _ = fs::remove_file(&partial);
        return Err(e.into());
    }
    Ok(())
}

fn partial_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    destination.with_file_name(name)
}
