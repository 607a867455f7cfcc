// crates/eurostat-core/src/lib.rs

//! # eurostat-core
//!
//! Retrieve and reshape bulk statistical datasets, code dictionaries and
//! NUTS boundary files from the Eurostat bulk-download service.
//!
//! Every download goes through one primitive: fetch a URL into a file of the
//! cache directory unless a copy younger than a day is already there.
//! Failures are logged and reported as [`FetchOutcome::FetchFailed`]; the
//! loaders then work with whatever is on disk.
//!
//! ```no_run
//! use eurostat_core::{Config, DatasetOptions, Eurostat};
//!
//! let eurostat = Eurostat::new(Config::new("cache"))?;
//!
//! // Population on 1 January, periods as rows, country codes kept as-is.
//! let table = eurostat.load_dataset("tps00001", &DatasetOptions::default().keep_code("geo"))?;
//! println!("{} periods x {} series", table.row_count(), table.column_count());
//!
//! let units = eurostat.load_dictionary("unit", false);
//! println!("{} units", units.len());
//! # Ok::<(), eurostat_core::EurostatError>(())
//! ```

pub mod cache;
pub mod config;
pub mod delimited;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod model;

// Re-exports
pub use crate::cache::{CacheStore, Clock, SystemClock};
pub use crate::config::Config;
pub use crate::error::{EurostatError, Result};
pub use crate::fetch::{Compression, ContentMode, FetchOutcome, Fetcher, HttpTransport, Transport};
pub use crate::loader::dataset::DatasetOptions;
pub use crate::loader::dictionary::{parse_dictionary, Dictionary};
pub use crate::loader::Eurostat;
#[cfg(feature = "geodata")]
pub use crate::loader::geodata::read_shapefile_archive;
pub use crate::model::{DatasetTable, Layout, Value};
#[cfg(feature = "geodata")]
pub use crate::model::{Attribute, Feature, FeatureCollection};

pub mod prelude {
    pub use crate::{
        Compression, Config, ContentMode, DatasetOptions, DatasetTable, Eurostat, EurostatError,
        FetchOutcome, Layout, Result, Value,
    };
    #[cfg(feature = "geodata")]
    pub use crate::{Feature, FeatureCollection};
}
