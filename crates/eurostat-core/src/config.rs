// crates/eurostat-core/src/config.rs

//! # Configuration
//!
//! Every component receives its cache root and endpoints from a [`Config`]
//! value. Nothing in the library reads a hard-coded relative path, so tests
//! can point each client at its own temporary directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DICTIONARY_URL: &str = "https://ec.europa.eu/eurostat/estat-navtree-portlet-prod/BulkDownloadListing?sort=1&downfile=dic%2Fen%2F{name}.dic";

pub const DATASET_URL: &str =
    "https://ec.europa.eu/eurostat/estat-navtree-portlet-prod/BulkDownloadListing?file=data/{name}.tsv.gz";

pub const GEODATA_URL: &str =
    "https://gisco-services.ec.europa.eu/distribution/v2/nuts/shp/NUTS_RG_20M_2021_3035.shp.zip";

pub const GEODATA_FILENAME: &str = "NUTS_RG_20M_2021_3035.shp.zip";

/// Attribute of a NUTS feature holding its administrative level.
pub const LEVEL_ATTRIBUTE: &str = "LEVL_CODE";

/// Cached files younger than this (in whole hours) are not downloaded again.
pub const MAX_AGE_HOURS: i64 = 24;

const NAME_PLACEHOLDER: &str = "{name}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding one file per downloaded resource. Must already exist.
    pub cache_dir: PathBuf,
    /// URL template for code dictionaries; `{name}` is replaced by the lowercased name.
    pub dictionary_url: String,
    /// URL template for gzip-compressed datasets.
    pub dataset_url: String,
    pub geodata_url: String,
    pub geodata_filename: String,
    pub level_attribute: String,
    pub max_age_hours: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("cache"),
            dictionary_url: DICTIONARY_URL.to_owned(),
            dataset_url: DATASET_URL.to_owned(),
            geodata_url: GEODATA_URL.to_owned(),
            geodata_filename: GEODATA_FILENAME.to_owned(),
            level_attribute: LEVEL_ATTRIBUTE.to_owned(),
            max_age_hours: MAX_AGE_HOURS,
        }
    }
}

impl Config {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_dictionary_url(mut self, template: impl Into<String>) -> Self {
        self.dictionary_url = template.into();
        self
    }

    pub fn with_dataset_url(mut self, template: impl Into<String>) -> Self {
        self.dataset_url = template.into();
        self
    }

    pub fn with_geodata(mut self, url: impl Into<String>, filename: impl Into<String>) -> Self {
        self.geodata_url = url.into();
        self.geodata_filename = filename.into();
        self
    }

    pub fn with_level_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.level_attribute = attribute.into();
        self
    }

    pub fn with_max_age_hours(mut self, hours: i64) -> Self {
        self.max_age_hours = hours;
        self
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// `<cache>/<lowercased name>.dic`
    pub fn dictionary_path(&self, name: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.dic", name.to_lowercase()))
    }

    /// `<cache>/<lowercased name>.tsv`
    pub fn dataset_path(&self, name: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.tsv", name.to_lowercase()))
    }

    pub fn geodata_path(&self) -> PathBuf {
        self.cache_dir.join(&self.geodata_filename)
    }

    pub fn dictionary_url_for(&self, name: &str) -> String {
        self.dictionary_url
            .replace(NAME_PLACEHOLDER, &name.to_lowercase())
    }

    pub fn dataset_url_for(&self, name: &str) -> String {
        self.dataset_url.replace(NAME_PLACEHOLDER, &name.to_lowercase())
    }
}
