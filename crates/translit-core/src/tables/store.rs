use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use tracing::debug;

use super::config::{parse_tables_toml, TableConfigError};
use super::DEFAULT_TOML;
use crate::error::TranslitError;
use crate::standard::Standard;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Forward and (optionally) reverse mapping of one standard.
#[derive(Debug)]
pub struct StandardTables {
    forward: HashMap<char, String>,
    reverse: Option<HashMap<char, char>>,
}

impl StandardTables {
    pub(crate) fn new(forward: HashMap<char, String>, reverse: Option<HashMap<char, char>>) -> Self {
        Self { forward, reverse }
    }

    /// Latin grapheme for an uppercase Cyrillic letter.
    pub fn forward(&self, letter: char) -> Option<&str> {
        self.forward.get(&letter).map(String::as_str)
    }

    pub fn forward_len(&self) -> usize {
        self.forward.len()
    }

    pub fn reverse_table(&self) -> Option<&HashMap<char, char>> {
        self.reverse.as_ref()
    }
}

#[derive(Debug)]
pub struct LanguageTables {
    alphabet: Vec<char>,
    standards: HashMap<Standard, StandardTables>,
}

impl LanguageTables {
    pub(crate) fn new(alphabet: Vec<char>, standards: HashMap<Standard, StandardTables>) -> Self {
        Self {
            alphabet,
            standards,
        }
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn get(&self, standard: Standard) -> Option<&StandardTables> {
        self.standards.get(&standard)
    }

    pub fn has_reverse(&self) -> bool {
        self.standards.values().any(|t| t.reverse.is_some())
    }
}

/// Immutable language → standard → letter lookup structure.
#[derive(Debug)]
pub struct TableStore {
    languages: BTreeMap<String, LanguageTables>,
}

impl TableStore {
    pub(crate) fn new(languages: BTreeMap<String, LanguageTables>) -> Self {
        Self { languages }
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableConfigError> {
        // Validate eagerly
        parse_tables_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static TableStore {
        static INSTANCE: OnceLock<TableStore> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let custom = CUSTOM_TOML.get();
            let toml_str = custom.map(|s| s.as_str()).unwrap_or(DEFAULT_TOML);
            let store = parse_tables_toml(toml_str).expect("tables TOML must be valid");
            debug!(
                custom = custom.is_some(),
                languages = store.languages.len(),
                "table store initialized"
            );
            store
        })
    }

    pub fn language(&self, language: &str) -> Option<&LanguageTables> {
        self.languages.get(language)
    }

    /// Tables for (`language`, `standard`), failing when either is not
    /// configured.
    pub fn standard(&self, language: &str, standard: Standard) -> Result<&StandardTables, TranslitError> {
        self.language(language)
            .ok_or_else(|| TranslitError::UnknownLanguage(language.to_string()))?
            .get(standard)
            .ok_or_else(|| TranslitError::UnsupportedStandard {
                language: language.to_string(),
                standard,
            })
    }

    /// Languages with at least one forward table, in sorted order.
    pub fn forward_languages(&self) -> impl Iterator<Item = &str> {
        self.languages
            .iter()
            .filter(|(_, t)| !t.standards.is_empty())
            .map(|(name, _)| name.as_str())
    }

    /// Languages with at least one reverse table, in sorted order.
    pub fn reverse_languages(&self) -> impl Iterator<Item = &str> {
        self.languages
            .iter()
            .filter(|(_, t)| t.has_reverse())
            .map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_has_russian() {
        let store = TableStore::global();
        let gost = store.standard("ru", Standard::Gost).unwrap();
        assert_eq!(gost.forward('Щ'), Some("SHH"));
        assert_eq!(gost.forward_len(), 33);
    }

    #[test]
    fn unknown_language() {
        let err = TableStore::global().standard("xx", Standard::Gost).unwrap_err();
        assert_eq!(err, TranslitError::UnknownLanguage("xx".into()));
    }

    #[test]
    fn radio_is_partial_and_forward_only() {
        let radio = TableStore::global().standard("ru", Standard::Radio).unwrap();
        assert_eq!(radio.forward('Ч'), None);
        assert_eq!(radio.forward('Щ'), Some("Q"));
        assert!(radio.reverse_table().is_none());
    }

    #[test]
    fn icao_drops_soft_sign() {
        let icao = TableStore::global().standard("ru", Standard::Icao).unwrap();
        assert_eq!(icao.forward('Ь'), Some(""));
    }

    #[test]
    fn store_is_shareable_across_threads() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<TableStore>();
    }

    #[test]
    fn init_custom_rejects_invalid_toml() {
        let err = TableStore::init_custom("bad".into()).unwrap_err();
        assert!(matches!(err, TableConfigError::Parse(_)));
        let err = TableStore::init_custom("[xx]\nalphabet = \"\"\n".into()).unwrap_err();
        assert!(matches!(err, TableConfigError::EmptyAlphabet { .. }));
    }

    #[test]
    fn init_custom_only_once() {
        // The embedded tables are installed, so the global store is unchanged
        // whichever test initializes it first.
        TableStore::init_custom(DEFAULT_TOML.to_string()).unwrap();
        let err = TableStore::init_custom(DEFAULT_TOML.to_string()).unwrap_err();
        assert!(matches!(err, TableConfigError::AlreadyInitialized));
        assert!(TableStore::global().language("ru").is_some());
    }

    #[test]
    fn missing_standard_for_language() {
        let toml = "[xx]\nalphabet = \"А\"\n[xx.GOST.forward]\n\"А\" = \"A\"\n";
        let store = parse_tables_toml(toml).unwrap();
        let err = store.standard("xx", Standard::Icao).unwrap_err();
        assert!(matches!(err, TranslitError::UnsupportedStandard { .. }));
        assert_eq!(store.forward_languages().collect::<Vec<_>>(), ["xx"]);
        assert_eq!(store.reverse_languages().count(), 0);
    }
}
