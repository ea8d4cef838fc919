use crate::standard::Standard;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslitError {
    #[error("language not configured: {0}")]
    UnknownLanguage(String),
    #[error("unknown standard: {0}")]
    UnknownStandard(String),
    #[error("standard {standard} is not configured for language {language}")]
    UnsupportedStandard { language: String, standard: Standard },
    #[error("reverse transliteration is not supported by {0}")]
    ReverseUnsupported(Standard),
    #[error("no reverse table for {standard} in language {language}")]
    MissingReverseTable { language: String, standard: Standard },
}
