// crates/eurostat-core/src/loader/mod.rs

//! # Loaders
//!
//! [`Eurostat`] ties the configuration, the cache store and the fetcher
//! together. Each resource kind (dictionaries, datasets, boundaries) adds its
//! own `impl Eurostat` block in a sibling module.

use crate::cache::{CacheStore, Clock, SystemClock};
use crate::config::Config;
use crate::error::Result;
use crate::fetch::{Compression, ContentMode, FetchOutcome, Fetcher, HttpTransport, Transport};
use std::path::Path;
use std::sync::Arc;

mod common_io;
pub mod dataset;
pub mod dictionary;
#[cfg(feature = "geodata")]
pub mod geodata;

/// Client for the bulk-download service.
#[derive(Debug)]
pub struct Eurostat {
    config: Config,
    fetcher: Fetcher,
}

impl Eurostat {
    /// Client over HTTPS and the system clock.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_transport(config, Box::new(HttpTransport::new()?)))
    }

    pub fn with_transport(config: Config, transport: Box<dyn Transport>) -> Self {
        Self::with_parts(config, transport, Arc::new(SystemClock))
    }

    pub fn with_parts(config: Config, transport: Box<dyn Transport>, clock: Arc<dyn Clock>) -> Self {
        let cache = CacheStore::with_clock(config.max_age_hours, clock);
        Self {
            fetcher: Fetcher::new(transport, cache),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Age in whole hours of a cached file, `-1` if absent.
    pub fn age_in_hours(&self, path: impl AsRef<Path>) -> i64 {
        self.fetcher.cache().age_in_hours(path.as_ref())
    }

    /// Download `url` into `destination` unless a fresh copy is already there.
    pub fn fetch(
        &self,
        url: &str,
        destination: impl AsRef<Path>,
        mode: ContentMode,
        compression: Compression,
    ) -> FetchOutcome {
        self.fetcher
            .fetch(url, destination.as_ref(), mode, compression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::tests::ManualClock;
    use crate::fetch::tests::FakeTransport;

    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    #[test]
    fn client_can_be_shared_across_threads() {
        let tmp = tempfile::tempdir().unwrap();
        let transport = FakeTransport::default();
        transport.serve("http://test/geo.dic", "DE\tGermany\n");
        let eurostat = Arc::new(Eurostat::with_parts(
            Config::new(tmp.path()).with_dictionary_url("http://test/{name}.dic"),
            Box::new(transport.clone()),
            ManualClock::starting_now(),
        ));
        assert_send_sync(&*eurostat);
        assert_eq!(eurostat.load_dictionary("geo", false).len(), 1);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let eurostat = Arc::clone(&eurostat);
                std::thread::spawn(move || eurostat.load_dictionary("geo", false).len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
        assert_eq!(transport.call_count(), 1);
    }
}
