//! Ordered multigraph rewrite pass for Latin → Cyrillic conversion.
//!
//! Each rule is a literal substring replacement applied to the whole
//! (uppercased) word, one rule at a time in list order. A rule folds a Latin
//! multigraph into the single Cyrillic letter it stands for, so the reverse
//! table only ever sees one Latin character per Cyrillic letter.
//!
//! The pass is textual: a Latin fragment that merely looks like a multigraph
//! is folded as well. That is a known limitation of GOST and, more so, of
//! ICAO reverse conversion, and it is kept as is.

use tracing::debug;

use crate::error::TranslitError;
use crate::standard::Standard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteRule {
    pub pattern: &'static str,
    pub replacement: char,
}

const fn rule(pattern: &'static str, replacement: char) -> RewriteRule {
    RewriteRule {
        pattern,
        replacement,
    }
}

/// GOST-specific rules. `YA` is listed twice; the second pass never matches.
pub const GOST_RULES: &[RewriteRule] = &[
    rule("SHH", 'Щ'),
    rule("YA", 'Я'),
    rule("YO", 'Ё'),
    rule("YU", 'Ю'),
    rule("YA", 'Я'),
    rule("E`", 'Э'),
    rule("``", 'Ъ'),
    rule("`", 'Ь'),
];

pub const ICAO_RULES: &[RewriteRule] = &[
    rule("SHCH", 'Щ'),
    rule("KH", 'Х'),
    rule("TS", 'Ц'),
    rule("IE", 'Ъ'),
    rule("IU", 'Ю'),
    rule("IA", 'Я'),
];

/// Digraphs shared by GOST and ICAO, applied after the standard's own rules.
pub const COMMON_RULES: &[RewriteRule] = &[rule("SH", 'Ш'), rule("ZH", 'Ж'), rule("CH", 'Ч')];

/// Rule lists for `standard` in application order, or `None` when the
/// standard has no reverse direction.
pub fn rules_for(standard: Standard) -> Option<[&'static [RewriteRule]; 2]> {
    match standard {
        Standard::Gost => Some([GOST_RULES, COMMON_RULES]),
        Standard::Icao => Some([ICAO_RULES, COMMON_RULES]),
        Standard::Radio => None,
    }
}

/// Uppercase `word` and fold its multigraphs for `standard`.
pub fn normalize(word: &str, standard: Standard) -> Result<String, TranslitError> {
    let lists = rules_for(standard).ok_or(TranslitError::ReverseUnsupported(standard))?;
    let upper = word.to_uppercase();
    let folded = lists
        .iter()
        .flat_map(|list| list.iter())
        .fold(upper, |acc, r| apply_rule(acc, r));
    debug!(word, %standard, folded = folded.as_str(), "rewrite");
    Ok(folded)
}

fn apply_rule(s: String, r: &RewriteRule) -> String {
    if s.contains(r.pattern) {
        s.replace(r.pattern, r.replacement.encode_utf8(&mut [0; 4]))
    } else {
        s
    }
}
