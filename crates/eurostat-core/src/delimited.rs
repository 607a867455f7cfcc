// crates/eurostat-core/src/delimited.rs

//! # Delimited text
//!
//! Bulk dataset files mix three separators: a comma between the coded
//! dimensions of the first column, a tab between observations, and a space
//! plus an optional one-character flag before a tab (`"12.5 p\t"`). All
//! three are matched by one leftmost-first alternation, applied to the
//! header and data lines alike. The flag is swallowed by the separator.

use crate::error::{EurostatError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Separator alternatives, in match order.
pub const SEPARATOR_PATTERN: &str = r",|\t| [^ ]?\t";

/// Token marking a missing observation (surrounding whitespace ignored).
pub const MISSING_MARKER: &str = ":";

static SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(SEPARATOR_PATTERN).expect("separator pattern is a valid regex"));

/// A parsed table before any interpretation of its columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Cleaned header names.
    pub headers: Vec<String>,
    /// One entry per data line, padded to the header width. `None` is a missing cell.
    pub rows: Vec<Vec<Option<String>>>,
}

pub fn split_fields(line: &str) -> Vec<&str> {
    SEPARATOR.split(line).collect()
}

/// Drop the metadata after a backslash and surrounding spaces:
/// `"geo\\time"` becomes `"geo"`, `"2020 "` becomes `"2020"`.
pub fn clean_header(raw: &str) -> String {
    raw.split('\\')
        .next()
        .unwrap_or_default()
        .trim_matches(' ')
        .to_owned()
}

/// Names of the coded dimensions, read from the raw first line of a file.
///
/// `"unit,geo\\time\t2020 \t2021 "` yields `["unit", "geo"]`.
pub fn coded_dimensions(first_line: &str) -> Vec<String> {
    let line = first_line.trim_end_matches(['\r', '\n']);
    let leading = line.split('\t').next().unwrap_or_default();
    let names = leading.split('\\').next().unwrap_or_default();
    names.split(',').map(str::to_owned).collect()
}

fn cell(field: &str) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() || trimmed == MISSING_MARKER {
        None
    } else {
        Some(field.to_owned())
    }
}

/// Parse a whole file. Each line is trimmed before splitting, so the last
/// field carries no trailing padding. Blank lines are skipped; the first
/// remaining line is the header.
pub fn parse_table(text: &str) -> Result<RawTable> {
    let mut lines = text
        .lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, line)| !line.is_empty());

    let (_, header_line) = lines.next().ok_or(EurostatError::MissingHeader)?;
    let headers: Vec<String> = split_fields(header_line)
        .into_iter()
        .map(clean_header)
        .collect();
    let width = headers.len();

    let mut rows = Vec::new();
    for (index, line) in lines {
        let fields = split_fields(line);
        if fields.len() > width {
            return Err(EurostatError::Parse {
                line: index + 1,
                message: format!("expected {width} fields, saw {}", fields.len()),
            });
        }
        let mut row: Vec<Option<String>> = fields.into_iter().map(cell).collect();
        row.resize(width, None);
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_all_three_separators() {
        assert_eq!(split_fields("A,B\t1"), vec!["A", "B", "1"]);
        assert_eq!(split_fields("1.5 \t2.5"), vec!["1.5", "2.5"]);
        assert_eq!(split_fields("1.5 p\t2.5 e\t3"), vec!["1.5", "2.5", "3"]);
        assert_eq!(split_fields(": \t: c\t4"), vec![":", ":", "4"]);
    }

    #[test]
    fn comma_wins_over_later_tab() {
        // Leftmost-first: the comma at position 1 splits before the tab is considered.
        assert_eq!(split_fields("a,b \tc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn space_without_tab_is_not_a_separator() {
        assert_eq!(split_fields("12 p"), vec!["12 p"]);
        assert_eq!(split_fields("12  \t3"), vec!["12 ", "3"]);
    }

    #[test]
    fn any_single_character_before_tab_is_swallowed() {
        assert_eq!(split_fields("1 2\t3"), vec!["1", "3"]);
    }

    #[test]
    fn header_metadata_after_backslash_is_dropped() {
        assert_eq!(clean_header("geo\\time"), "geo");
        assert_eq!(clean_header(" 2020 "), "2020");
        assert_eq!(clean_header("time\\freq"), "time");
        assert_eq!(clean_header("unit"), "unit");
    }

    #[test]
    fn coded_dimensions_come_from_first_cell() {
        assert_eq!(
            coded_dimensions("unit,na_item,geo\\time\t2020 \t2019 \n"),
            vec!["unit", "na_item", "geo"]
        );
        assert_eq!(coded_dimensions("geo,time\\freq,2020,2021\n"), vec!["geo", "time"]);
        assert_eq!(coded_dimensions("geo\\time\t2020\r\n"), vec!["geo"]);
    }

    #[test]
    fn parses_header_and_missing_cells() {
        let raw = parse_table("geo,time\\freq,2020,2021\nDE,A,1.5,:\n\nFR,A,:,2\n").unwrap();
        assert_eq!(raw.headers, vec!["geo", "time", "2020", "2021"]);
        assert_eq!(
            raw.rows,
            vec![
                vec![Some("DE".into()), Some("A".into()), Some("1.5".into()), None],
                vec![Some("FR".into()), Some("A".into()), None, Some("2".into())],
            ]
        );
    }

    #[test]
    fn short_rows_are_padded() {
        let raw = parse_table("geo\\time\t2020 \t2021 \nDE\t1\n").unwrap();
        assert_eq!(raw.rows, vec![vec![Some("DE".into()), Some("1".into()), None]]);
    }

    #[test]
    fn long_rows_are_rejected() {
        let err = parse_table("geo\\time\t2020 \nDE\t1 \t2 \t3\n").unwrap_err();
        assert!(matches!(err, EurostatError::Parse { line: 2, .. }), "{err}");
    }

    #[test]
    fn last_field_loses_line_padding() {
        let raw = parse_table("geo\\time\t2020 \t2021 \nDE\t1 e\t2 b \nFR\t3 \t4 \r\n").unwrap();
        assert_eq!(raw.headers, vec!["geo", "2020", "2021"]);
        assert_eq!(raw.rows[0], vec![Some("DE".into()), Some("1".into()), Some("2 b".into())]);
        assert_eq!(raw.rows[1][2], Some("4".into()));
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(matches!(parse_table("\n\n"), Err(EurostatError::MissingHeader)));
    }
}
