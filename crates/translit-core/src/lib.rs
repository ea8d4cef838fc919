//! Cyrillic ⇄ Latin transliteration under the GOST, RADIO and ICAO standards.
//!
//! The table store is embedded TOML parsed once into an immutable
//! [`TableStore`]; conversion functions are pure and safe to call from any
//! number of threads.

pub mod case;
pub mod convert;
pub mod error;
pub mod options;
pub mod rewrite;
pub mod standard;
pub mod tables;

#[cfg(test)]
mod tests;

pub use convert::{
    languages, languages_display, transliterate, transliterate_direct, transliterate_inverse,
    Direction,
};
pub use error::TranslitError;
pub use options::Options;
pub use standard::Standard;
pub use tables::{TableConfigError, TableStore};
