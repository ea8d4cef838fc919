//! Named transliteration standards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TranslitError;

/// A conversion scheme between Cyrillic and Latin script.
///
/// Only [`Standard::Gost`] converts in both directions without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Standard {
    /// GOST 7.79-2000 System B, equivalent to ISO 9-95.
    #[default]
    #[serde(rename = "GOST")]
    Gost,
    /// Morse code letter equivalents. Forward only; several letters have no
    /// Latin counterpart.
    #[serde(rename = "RADIO")]
    Radio,
    /// ICAO Doc 9303. Meant for Cyrillic to Latin only; the reverse
    /// direction is lossy.
    #[serde(rename = "ICAO")]
    Icao,
}

impl Standard {
    pub const ALL: [Standard; 3] = [Standard::Gost, Standard::Radio, Standard::Icao];

    pub fn as_str(self) -> &'static str {
        match self {
            Standard::Gost => "GOST",
            Standard::Radio => "RADIO",
            Standard::Icao => "ICAO",
        }
    }

    /// Whether the standard defines a reverse rewrite pass at all.
    pub fn supports_reverse(self) -> bool {
        crate::rewrite::rules_for(self).is_some()
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Standard {
    type Err = TranslitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Standard::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TranslitError::UnknownStandard(s.to_string()))
    }
}
