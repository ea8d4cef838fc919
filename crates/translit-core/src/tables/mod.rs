//! Table store: per-language, per-standard character mappings.
//!
//! Tables are embedded TOML, validated at compile time by `build.rs` and
//! parsed into a [`TableStore`] on first use. A custom TOML may replace the
//! embedded one via [`TableStore::init_custom`] before the first
//! [`TableStore::global`] call.

mod config;
mod store;

pub use config::{parse_tables_toml, TableConfigError};
pub use store::{LanguageTables, StandardTables, TableStore};

pub(crate) const DEFAULT_TOML: &str = include_str!("default_tables.toml");

/// Returns the embedded default tables TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
