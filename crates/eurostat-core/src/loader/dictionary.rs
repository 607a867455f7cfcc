// crates/eurostat-core/src/loader/dictionary.rs

//! Code dictionaries: flat `code<TAB>label` files used to translate the
//! coded dimensions of a dataset.

use super::common_io;
use super::Eurostat;
use crate::fetch::{Compression, ContentMode};
use std::collections::HashMap;

const LOG_TARGET: &str = "eurostat::dictionary";

/// Code to label (or label to code, when inverted).
pub type Dictionary = HashMap<String, String>;

impl Eurostat {
    /// Load the dictionary `name`, downloading it when the cached copy is
    /// missing or stale. Any failure yields an empty dictionary.
    pub fn load_dictionary(&self, name: &str, inverse: bool) -> Dictionary {
        let name = name.to_lowercase();
        let path = self.config.dictionary_path(&name);
        let url = self.config.dictionary_url_for(&name);
        self.fetch(&url, &path, ContentMode::Text, Compression::None);

        match common_io::read_cached_text(&path) {
            Ok(text) => parse_dictionary(&text, inverse),
            Err(e) => {
                log::debug!(target: LOG_TARGET, "dictionary '{name}' unavailable: {e}");
                Dictionary::new()
            }
        }
    }
}

/// Parse `code<TAB>label` lines. Lines without a tab, and lines of a single
/// character including the newline, are skipped; labels are
/// trimmed. With `inverse`, labels become keys and the last code seen for a
/// repeated label wins.
pub fn parse_dictionary(text: &str, inverse: bool) -> Dictionary {
    let mut forward = Dictionary::new();
    // First-insertion order of codes, so inversion sees codes in file order.
    let mut order: Vec<&str> = Vec::new();

    // Length is measured with the line terminator, so a lone tab still
    // counts as an (empty) entry while a lone character does not.
    for raw in text.split_inclusive('\n').filter(|l| l.len() > 1) {
        let line = raw.trim_end_matches(['\r', '\n']);
        let mut fields = line.split('\t');
        let (Some(code), Some(label)) = (fields.next(), fields.next()) else {
            continue;
        };
        if forward
            .insert(code.to_owned(), label.trim().to_owned())
            .is_none()
        {
            order.push(code);
        }
    }

    if !inverse {
        return forward;
    }

    let mut inverted = Dictionary::with_capacity(forward.len());
    for code in order {
        if let Some(label) = forward.get(code) {
            inverted.insert(label.clone(), code.to_owned());
        }
    }
    inverted
}
