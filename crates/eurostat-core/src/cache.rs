// crates/eurostat-core/src/cache.rs

//! # Cache Store
//!
//! On-disk copies of remote resources, keyed by file path. Freshness is
//! derived purely from the file's modification time; there are no sidecar
//! metadata files and nothing is ever deleted here.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

const LOG_TARGET: &str = "eurostat::cache";

const SECONDS_PER_HOUR: u64 = 3600;

/// Source of "now" for age computations.
pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Age oracle over the files of one cache directory.
#[derive(Clone)]
pub struct CacheStore {
    clock: Arc<dyn Clock>,
    max_age_hours: i64,
}

impl std::fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheStore")
            .field("max_age_hours", &self.max_age_hours)
            .finish_non_exhaustive()
    }
}

impl CacheStore {
    pub fn new(max_age_hours: i64) -> Self {
        Self::with_clock(max_age_hours, Arc::new(SystemClock))
    }

    pub fn with_clock(max_age_hours: i64, clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            max_age_hours,
        }
    }

    pub fn max_age_hours(&self) -> i64 {
        self.max_age_hours
    }

    /// Age of the file at `path` in whole hours, or `-1` if there is none.
    ///
    /// A modification time in the future (clock skew) counts as age `0`.
    pub fn age_in_hours(&self, path: &Path) -> i64 {
        let modified = match fs::metadata(path).and_then(|m| m.modified()) {
            Ok(m) => m,
            Err(_) => return -1,
        };

        match self.clock.now().duration_since(modified) {
            Ok(age) => whole_hours(age),
            Err(_) => {
                log::debug!(
                    target: LOG_TARGET,
                    "{} was modified in the future, treating as fresh",
                    path.display()
                );
                0
            }
        }
    }

    /// `true` iff a file exists at `path` and is younger than the maximum age.
    pub fn is_fresh(&self, path: &Path) -> bool {
        let age = self.age_in_hours(path);
        if age < 0 {
            log::debug!(target: LOG_TARGET, "cache miss for {}", path.display());
            return false;
        }
        if age >= self.max_age_hours {
            log::debug!(
                target: LOG_TARGET,
                "cache expired for {} (age: {age}h, limit: {}h)",
                path.display(),
                self.max_age_hours
            );
            return false;
        }
        log::debug!(target: LOG_TARGET, "cache hit for {} (age: {age}h)", path.display());
        true
    }
}

fn whole_hours(age: Duration) -> i64 {
    i64::try_from(age.as_secs() / SECONDS_PER_HOUR).unwrap_or(i64::MAX)
}
