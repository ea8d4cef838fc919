//! Line-level forward and reverse conversion.
//!
//! Lines are split on the single space character only; every word keeps the
//! capitalization style of its source (see [`CaseStyle`]). Characters with no
//! table entry pass through unchanged in both directions.

use tracing::debug_span;

use crate::case::CaseStyle;
use crate::error::TranslitError;
use crate::options::Options;
use crate::rewrite;
use crate::standard::Standard;
use crate::tables::TableStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Cyrillic → Latin.
    Forward,
    /// Latin → Cyrillic.
    Reverse,
}

impl From<bool> for Direction {
    fn from(reverse: bool) -> Self {
        if reverse {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }
}

/// Convert `line` with the global table store.
///
/// Returns the converted line in both directions.
pub fn transliterate(line: &str, options: &Options) -> Result<String, TranslitError> {
    let store = TableStore::global();
    match Direction::from(options.reverse) {
        Direction::Forward => {
            transliterate_direct(store, line, options.standard, &options.language)
        }
        Direction::Reverse => {
            transliterate_inverse(store, line, options.standard, &options.language)
        }
    }
}

/// Cyrillic → Latin.
pub fn transliterate_direct(
    store: &TableStore,
    line: &str,
    standard: Standard,
    language: &str,
) -> Result<String, TranslitError> {
    let tables = store.standard(language, standard)?;
    let words = line.split(' ').count();
    let _span = debug_span!("transliterate_direct", %standard, language, words).entered();

    Ok(map_words(line, |word| {
        let mut out = String::with_capacity(word.len() * 2);
        for c in word.chars() {
            match single_upper(c).and_then(|u| tables.forward(u)) {
                Some(latin) => out.push_str(latin),
                None => out.push(c),
            }
        }
        CaseStyle::of(word).apply(&out)
    }))
}

/// Latin → Cyrillic.
///
/// Only GOST recovers the original text reliably. ICAO folds several letters
/// together (`Е`/`Ё`/`Э`, `И`/`Й`) and drops `Ь`, so its result may differ
/// from the source; RADIO has no reverse mapping and is rejected with
/// [`TranslitError::ReverseUnsupported`].
pub fn transliterate_inverse(
    store: &TableStore,
    line: &str,
    standard: Standard,
    language: &str,
) -> Result<String, TranslitError> {
    if !standard.supports_reverse() {
        return Err(TranslitError::ReverseUnsupported(standard));
    }
    let reverse = store
        .standard(language, standard)?
        .reverse_table()
        .ok_or_else(|| TranslitError::MissingReverseTable {
            language: language.to_string(),
            standard,
        })?;
    let words = line.split(' ').count();
    let _span = debug_span!("transliterate_inverse", %standard, language, words).entered();

    let mut out_words = Vec::with_capacity(words);
    for word in line.split(' ') {
        let folded = rewrite::normalize(word, standard)?;
        let out: String = folded
            .chars()
            .map(|c| {
                single_upper(c)
                    .and_then(|u| reverse.get(&u).copied())
                    .unwrap_or(c)
            })
            .collect();
        out_words.push(CaseStyle::of(word).apply(&out));
    }
    Ok(out_words.join(" "))
}

/// Languages configured for `direction`, sorted.
pub fn languages(direction: Direction) -> Vec<&'static str> {
    let store = TableStore::global();
    match direction {
        Direction::Forward => store.forward_languages().collect(),
        Direction::Reverse => store.reverse_languages().collect(),
    }
}

/// Comma-separated language list for display.
pub fn languages_display(reverse: bool) -> String {
    languages(Direction::from(reverse)).join(", ")
}

fn map_words(line: &str, f: impl Fn(&str) -> String) -> String {
    line.split(' ').map(f).collect::<Vec<_>>().join(" ")
}

/// Uppercase form of `c` when it is a single character.
fn single_upper(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}
