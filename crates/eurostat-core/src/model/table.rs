// crates/eurostat-core/src/model/table.rs
use super::value::{infer_column, Value};
use crate::delimited::RawTable;
use crate::error::{EurostatError, Result};
use std::collections::HashMap;
use std::io;

/// Which axis the series run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One row per series (composite coded key), one column per period.
    Wide,
    /// One row per period, one column per series.
    Transposed,
}

/// A dataset after parsing: coded dimensions identify each series, the
/// remaining header fields label the observations.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetTable {
    dimensions: Vec<String>,
    /// One composite key per series, ordered like `dimensions`.
    keys: Vec<Vec<String>>,
    periods: Vec<String>,
    /// Row-major in the current layout.
    cells: Vec<Vec<Option<Value>>>,
    layout: Layout,
}

impl DatasetTable {
    /// Split a raw table into coded dimension columns and typed observation
    /// columns. Every name in `dimensions` must be a header of `raw`.
    pub fn from_raw(raw: RawTable, dimensions: &[String]) -> Result<Self> {
        let dim_columns = dimensions
            .iter()
            .map(|name| {
                raw.headers
                    .iter()
                    .position(|h| h == name)
                    .ok_or_else(|| EurostatError::MissingColumn(name.clone()))
            })
            .collect::<Result<Vec<usize>>>()?;

        let obs_columns: Vec<usize> = (0..raw.headers.len())
            .filter(|i| !dim_columns.contains(i))
            .collect();
        let periods: Vec<String> = obs_columns
            .iter()
            .map(|&i| raw.headers[i].clone())
            .collect();

        let series_count = raw.rows.len();
        let mut keys = Vec::with_capacity(series_count);
        let mut columns: Vec<Vec<Option<String>>> = obs_columns
            .iter()
            .map(|_| Vec::with_capacity(series_count))
            .collect();

        for mut row in raw.rows {
            keys.push(
                dim_columns
                    .iter()
                    .map(|&i| row.get_mut(i).and_then(Option::take).unwrap_or_default())
                    .collect(),
            );
            for (column, &i) in columns.iter_mut().zip(&obs_columns) {
                column.push(row.get_mut(i).and_then(Option::take));
            }
        }

        let mut cells: Vec<Vec<Option<Value>>> = (0..series_count)
            .map(|_| Vec::with_capacity(periods.len()))
            .collect();
        for column in columns.into_iter().map(infer_column) {
            for (row, value) in cells.iter_mut().zip(column) {
                row.push(value);
            }
        }

        Ok(Self {
            dimensions: dimensions.to_vec(),
            keys,
            periods,
            cells,
            layout: Layout::Wide,
        })
    }

    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    pub fn series_keys(&self) -> &[Vec<String>] {
        &self.keys
    }

    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn column_count(&self) -> usize {
        match self.layout {
            Layout::Wide => self.periods.len(),
            Layout::Transposed => self.keys.len(),
        }
    }

    /// Cell at `(row, col)` of the current layout; `None` if missing or out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Value> {
        self.cells.get(row)?.get(col)?.as_ref()
    }

    /// Observation of one series in one period, independent of layout.
    pub fn value(&self, series: usize, period: usize) -> Option<&Value> {
        match self.layout {
            Layout::Wide => self.cell(series, period),
            Layout::Transposed => self.cell(period, series),
        }
    }

    pub fn series_index(&self, key: &[&str]) -> Option<usize> {
        self.keys
            .iter()
            .position(|k| k.iter().map(String::as_str).eq(key.iter().copied()))
    }

    pub fn period_index(&self, label: &str) -> Option<usize> {
        self.periods.iter().position(|p| p == label)
    }

    /// Values of one coded dimension, one per series.
    pub fn dimension_values(&self, dimension: &str) -> Option<Vec<&str>> {
        let d = self.dimensions.iter().position(|n| n == dimension)?;
        Some(self.keys.iter().map(|k| k[d].as_str()).collect())
    }

    /// Replace the codes of `dimension` by their labels. Codes without an
    /// entry stay as they are. Returns the number of replaced values.
    pub fn translate(&mut self, dimension: &str, dictionary: &HashMap<String, String>) -> Result<usize> {
        let d = self
            .dimensions
            .iter()
            .position(|n| n == dimension)
            .ok_or_else(|| EurostatError::MissingColumn(dimension.to_owned()))?;

        let mut replaced = 0;
        for key in &mut self.keys {
            if let Some(label) = dictionary.get(&key[d]) {
                key[d].clone_from(label);
                replaced += 1;
            }
        }
        Ok(replaced)
    }

    /// Swap rows and columns. Applying it twice gives back the same table.
    pub fn transpose(self) -> Self {
        let mut out: Vec<Vec<Option<Value>>> = (0..self.column_count())
            .map(|_| Vec::with_capacity(self.cells.len()))
            .collect();
        for row in self.cells {
            for (target, value) in out.iter_mut().zip(row) {
                target.push(value);
            }
        }

        Self {
            cells: out,
            layout: match self.layout {
                Layout::Wide => Layout::Transposed,
                Layout::Transposed => Layout::Wide,
            },
            ..self
        }
    }

    /// Render the current layout as CSV. In the transposed layout the
    /// composite column keys take one header line per coded dimension.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let render = |cell: &Option<Value>| cell.as_ref().map(Value::to_string).unwrap_or_default();

        match self.layout {
            Layout::Wide => {
                csv.write_record(self.dimensions.iter().chain(&self.periods))?;
                for (key, row) in self.keys.iter().zip(&self.cells) {
                    csv.write_record(key.iter().cloned().chain(row.iter().map(render)))?;
                }
            }
            Layout::Transposed => {
                for (d, name) in self.dimensions.iter().enumerate() {
                    csv.write_record(
                        std::iter::once(name.as_str()).chain(self.keys.iter().map(|k| k[d].as_str())),
                    )?;
                }
                for (period, row) in self.periods.iter().zip(&self.cells) {
                    csv.write_record(std::iter::once(period.clone()).chain(row.iter().map(render)))?;
                }
            }
        }
        csv.flush()?;
        Ok(())
    }
}
