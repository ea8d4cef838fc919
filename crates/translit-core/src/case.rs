//! Word-level capitalization style.
//!
//! The style is read from the source word and re-applied to the converted
//! word, so table output casing never leaks into the result.

/// Capitalization pattern of a word. Exactly one variant applies, checked
/// in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// Every cased character is uppercase.
    Upper,
    /// Every cased character is lowercase.
    Lower,
    /// Uppercase letters only start cased runs and lowercase letters only
    /// continue them, e.g. `Москва` or `Ростов-На-Дону`.
    Title,
    /// Mixed case, or no cased characters at all.
    Other,
}

impl CaseStyle {
    pub fn of(word: &str) -> Self {
        if is_upper(word) {
            CaseStyle::Upper
        } else if is_lower(word) {
            CaseStyle::Lower
        } else if is_title(word) {
            CaseStyle::Title
        } else {
            CaseStyle::Other
        }
    }

    pub fn apply(self, s: &str) -> String {
        match self {
            CaseStyle::Upper => s.to_uppercase(),
            CaseStyle::Lower => s.to_lowercase(),
            CaseStyle::Title => capitalize(s),
            CaseStyle::Other => s.to_string(),
        }
    }
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

fn is_upper(word: &str) -> bool {
    word.chars().any(is_cased) && !word.chars().any(char::is_lowercase)
}

fn is_lower(word: &str) -> bool {
    word.chars().any(is_cased) && !word.chars().any(char::is_uppercase)
}

fn is_title(word: &str) -> bool {
    let mut cased = false;
    let mut prev_cased = false;
    for c in word.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            cased = true;
        } else {
            prev_cased = false;
        }
    }
    cased
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
