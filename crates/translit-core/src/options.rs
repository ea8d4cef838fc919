use serde::{Deserialize, Serialize};

use crate::standard::Standard;

pub const DEFAULT_LANGUAGE: &str = "ru";

/// Parameters of a single [`transliterate`](crate::transliterate) call.
///
/// Defaults: forward direction, [`Standard::Gost`], language `"ru"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub reverse: bool,
    pub standard: Standard,
    pub language: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            reverse: false,
            standard: Standard::Gost,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Options {
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn standard(mut self, standard: Standard) -> Self {
        self.standard = standard;
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}
