use std::fs;
use std::path::Path;

use translit_core::tables::{default_toml, parse_tables_toml};
use translit_core::{Standard, TableConfigError, TableStore};

#[derive(Debug, thiserror::Error)]
pub enum TablesFileError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] TableConfigError),
}

fn read(path: &Path) -> Result<String, TablesFileError> {
    fs::read_to_string(path).map_err(|source| TablesFileError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// One line per (language, standard): letter count and reverse support.
pub fn summarize(store: &TableStore) -> Vec<String> {
    let mut lines = Vec::new();
    for language in store.forward_languages() {
        let Some(tables) = store.language(language) else {
            continue;
        };
        for standard in Standard::ALL {
            if let Some(t) = tables.get(standard) {
                lines.push(format!(
                    "{language}.{standard}: {}/{} letters{}",
                    t.forward_len(),
                    tables.alphabet().len(),
                    if t.reverse_table().is_some() {
                        ", reversible"
                    } else {
                        ""
                    }
                ));
            }
        }
    }
    lines
}

/// Validate a tables file without installing it.
pub fn validate_file(path: &Path) -> Result<TableStore, TablesFileError> {
    Ok(parse_tables_toml(&read(path)?)?)
}

/// Install custom tables for the rest of the process.
pub fn load_custom(path: &Path) -> Result<(), TablesFileError> {
    let content = read(path)?;
    TableStore::init_custom(content)?;
    tracing::debug!(path = %path.display(), "custom tables installed");
    Ok(())
}

pub fn tables_export() {
    print!("{}", default_toml());
}

pub fn tables_validate(file: &str) {
    let store = die!(validate_file(Path::new(file)), "Error: {}");
    println!("OK");
    for line in summarize(&store) {
        println!("  {line}");
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn validate_default_export() {
        let f = write_temp(default_toml());
        let store = validate_file(f.path()).unwrap();
        let lines = summarize(&store);
        assert_eq!(
            lines,
            [
                "ru.GOST: 33/33 letters, reversible",
                "ru.RADIO: 27/33 letters",
                "ru.ICAO: 33/33 letters, reversible",
            ]
        );
    }

    #[test]
    fn validate_rejects_incomplete() {
        let f = write_temp("[xx]\nalphabet = \"АБ\"\n[xx.GOST.forward]\n\"А\" = \"A\"\n");
        let err = validate_file(f.path()).unwrap_err();
        assert!(matches!(
            err,
            TablesFileError::Config(TableConfigError::Incomplete { .. })
        ));
    }

    #[test]
    fn load_custom_rejects_invalid_file() {
        let f = write_temp("not valid toml {{{");
        let err = load_custom(f.path()).unwrap_err();
        assert!(matches!(
            err,
            TablesFileError::Config(TableConfigError::Parse(_))
        ));
        let err = load_custom(&f.path().with_extension("absent")).unwrap_err();
        assert!(matches!(err, TablesFileError::Io { .. }));
        // Nothing was installed; the built-in tables still serve conversions.
        assert!(TableStore::global().language("ru").is_some());
    }

    #[test]
    fn validate_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, TablesFileError::Io { .. }));
    }
}
