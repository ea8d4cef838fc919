use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::store::{LanguageTables, StandardTables, TableStore};
use crate::standard::Standard;

#[derive(Deserialize)]
struct LanguageConfig {
    alphabet: String,
    #[serde(flatten)]
    standards: BTreeMap<String, StandardConfig>,
}

#[derive(Deserialize)]
struct StandardConfig {
    /// Letters without an entry pass through unchanged instead of failing
    /// validation.
    #[serde(default)]
    partial: bool,
    forward: BTreeMap<String, String>,
    #[serde(default)]
    reverse: Option<BTreeMap<String, String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("no languages configured")]
    Empty,
    #[error("{language}: alphabet is empty")]
    EmptyAlphabet { language: String },
    #[error("{language}: unknown standard {name}")]
    UnknownStandard { language: String, name: String },
    #[error("{language}.{standard}: forward key {key:?} must be a single uppercase alphabet letter")]
    InvalidForwardKey {
        language: String,
        standard: Standard,
        key: String,
    },
    #[error("{language}.{standard}: non-ASCII value for {key:?}")]
    NonAsciiValue {
        language: String,
        standard: Standard,
        key: String,
    },
    #[error("{language}.{standard}: missing letters {missing}")]
    Incomplete {
        language: String,
        standard: Standard,
        missing: String,
    },
    #[error("{language}.{standard}: reverse entry {key:?} = {value:?} must map one ASCII letter to one letter")]
    InvalidReverseEntry {
        language: String,
        standard: Standard,
        key: String,
        value: String,
    },
    #[error("{language}.{standard}: reverse table given for a forward-only standard")]
    ReverseNotAllowed { language: String, standard: Standard },
    #[error("tables already initialized")]
    AlreadyInitialized,
}

/// Parse and validate TOML text into a [`TableStore`].
pub fn parse_tables_toml(toml_str: &str) -> Result<TableStore, TableConfigError> {
    let config: BTreeMap<String, LanguageConfig> =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if config.is_empty() {
        return Err(TableConfigError::Empty);
    }

    let mut languages = BTreeMap::new();
    for (language, lc) in config {
        let tables = build_language(&language, lc)?;
        languages.insert(language, tables);
    }
    Ok(TableStore::new(languages))
}

fn build_language(language: &str, lc: LanguageConfig) -> Result<LanguageTables, TableConfigError> {
    let alphabet: Vec<char> = lc.alphabet.chars().filter(|c| !c.is_whitespace()).collect();
    if alphabet.is_empty() {
        return Err(TableConfigError::EmptyAlphabet {
            language: language.to_string(),
        });
    }

    let mut standards = HashMap::new();
    for (name, sc) in lc.standards {
        let standard: Standard = name
            .parse()
            .map_err(|_| TableConfigError::UnknownStandard {
                language: language.to_string(),
                name: name.clone(),
            })?;
        let forward = build_forward(language, standard, &alphabet, &sc)?;
        let reverse = match sc.reverse {
            Some(raw) => Some(build_reverse(language, standard, raw)?),
            None => None,
        };
        standards.insert(standard, StandardTables::new(forward, reverse));
    }

    Ok(LanguageTables::new(alphabet, standards))
}

fn build_forward(
    language: &str,
    standard: Standard,
    alphabet: &[char],
    sc: &StandardConfig,
) -> Result<HashMap<char, String>, TableConfigError> {
    let mut forward = HashMap::with_capacity(sc.forward.len());
    for (key, value) in &sc.forward {
        let letter = single_char(key)
            .filter(|c| !c.is_lowercase() && alphabet.contains(c))
            .ok_or_else(|| TableConfigError::InvalidForwardKey {
                language: language.to_string(),
                standard,
                key: key.clone(),
            })?;
        if !value.is_ascii() {
            return Err(TableConfigError::NonAsciiValue {
                language: language.to_string(),
                standard,
                key: key.clone(),
            });
        }
        forward.insert(letter, value.clone());
    }

    if !sc.partial {
        let missing: String = alphabet
            .iter()
            .filter(|c| !forward.contains_key(*c))
            .collect();
        if !missing.is_empty() {
            return Err(TableConfigError::Incomplete {
                language: language.to_string(),
                standard,
                missing,
            });
        }
    }

    Ok(forward)
}

fn build_reverse(
    language: &str,
    standard: Standard,
    raw: BTreeMap<String, String>,
) -> Result<HashMap<char, char>, TableConfigError> {
    if !standard.supports_reverse() {
        return Err(TableConfigError::ReverseNotAllowed {
            language: language.to_string(),
            standard,
        });
    }

    let mut reverse = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        let entry = single_char(&key)
            .filter(|c| c.is_ascii() && !c.is_ascii_lowercase())
            .zip(single_char(&value));
        match entry {
            Some((latin, letter)) => {
                reverse.insert(latin, letter);
            }
            None => {
                return Err(TableConfigError::InvalidReverseEntry {
                    language: language.to_string(),
                    standard,
                    key,
                    value,
                })
            }
        }
    }
    Ok(reverse)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
