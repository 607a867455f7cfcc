// crates/eurostat-core/src/loader/dataset.rs

//! Tabular datasets: download, decompress, parse, translate coded
//! dimensions, optionally transpose.

use super::common_io;
use super::Eurostat;
use crate::delimited::{coded_dimensions, parse_table};
use crate::error::{EurostatError, Result};
use crate::fetch::{Compression, ContentMode};
use crate::model::DatasetTable;

const LOG_TARGET: &str = "eurostat::dataset";

/// How [`Eurostat::load_dataset`] reshapes the parsed table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetOptions {
    /// Replace codes by their dictionary labels.
    pub translate_codes: bool,
    /// Make the periods the rows and the coded series the columns.
    pub transpose: bool,
    /// Coded dimensions left untranslated, e.g. `geo` to keep country codes for joins.
    pub untranslated_codes: Vec<String>,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self {
            translate_codes: true,
            transpose: true,
            untranslated_codes: Vec::new(),
        }
    }
}

impl DatasetOptions {
    pub fn translate_codes(mut self, yes: bool) -> Self {
        self.translate_codes = yes;
        self
    }

    pub fn transpose(mut self, yes: bool) -> Self {
        self.transpose = yes;
        self
    }

    pub fn keep_code(mut self, dimension: impl Into<String>) -> Self {
        self.untranslated_codes.push(dimension.into());
        self
    }
}

impl Eurostat {
    /// Load dataset `name`. Parse and shape errors are returned to the caller,
    /// as is the absence of any cached copy after a failed download.
    pub fn load_dataset(&self, name: &str, options: &DatasetOptions) -> Result<DatasetTable> {
        let name = name.to_lowercase();
        let path = self.config.dataset_path(&name);
        let url = self.config.dataset_url_for(&name);
        self.fetch(&url, &path, ContentMode::Text, Compression::Gzip);

        let text = common_io::read_cached_text(&path)?;
        let first_line = text.lines().next().ok_or(EurostatError::MissingHeader)?;
        let dimensions = coded_dimensions(first_line);
        let mut table = DatasetTable::from_raw(parse_table(&text)?, &dimensions)?;
        log::debug!(
            target: LOG_TARGET,
            "parsed '{name}': {} series x {} periods, dimensions {dimensions:?}",
            table.series_keys().len(),
            table.periods().len()
        );

        if options.translate_codes {
            for dimension in &dimensions {
                if options.untranslated_codes.contains(dimension) {
                    continue;
                }
                let dictionary = self.load_dictionary(dimension, false);
                let replaced = table.translate(dimension, &dictionary)?;
                log::debug!(target: LOG_TARGET, "translated {replaced} '{dimension}' codes");
            }
        }

        if options.transpose {
            table = table.transpose();
        }
        Ok(table)
    }
}
