//! Race Normalization
//!
//! Maps free-text race input onto the closed self-declaration vocabulary,
//! ignoring case, surrounding whitespace, and diacritics.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical spellings, in display order
pub const RACE_OPTIONS: [&str; 5] = ["Preta", "Parda", "Branca", "Indígena", "Amarela"];

/// Races counted as PPI (Preta, Parda, Indígena)
pub const PPI_RACES: [&str; 3] = ["Preta", "Parda", "Indígena"];

/// Remove diacritics: canonical decomposition, then drop combining marks.
pub fn strip_accents(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Lowercased, trimmed, accent-free comparison key
pub fn fold_key(value: &str) -> String {
    strip_accents(value.trim()).to_lowercase()
}

/// Canonical race spelling for `value`, or `""` when nothing matches.
pub fn normalize_race(value: &str) -> &'static str {
    let key = fold_key(value);
    if key.is_empty() {
        return "";
    }
    RACE_OPTIONS
        .iter()
        .copied()
        .find(|option| fold_key(option) == key)
        .unwrap_or("")
}

/// Whether `value` normalizes to one of the PPI races
pub fn is_ppi(value: &str) -> bool {
    let race = normalize_race(value);
    !race.is_empty() && PPI_RACES.contains(&race)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_accent_variants_resolve() {
        for input in ["preta", "Preta", "PRETA", "prêta", "  Preta  "] {
            assert_eq!(normalize_race(input), "Preta", "input {:?}", input);
        }
        assert_eq!(normalize_race("indigena"), "Indígena");
        assert_eq!(normalize_race("INDÍGENA"), "Indígena");
        // decomposed: i + combining acute
        assert_eq!(normalize_race("Indi\u{0301}gena"), "Indígena");
    }

    #[test]
    fn test_unknown_and_empty_input() {
        assert_eq!(normalize_race(""), "");
        assert_eq!(normalize_race("   "), "");
        assert_eq!(normalize_race("Azul"), "");
        assert_eq!(normalize_race("pret"), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["preta", "PARDA", "branca ", "Indígena", "amarela", "x", "", "Prêta"];
        for input in inputs {
            let once = normalize_race(input);
            assert_eq!(normalize_race(once), once, "input {:?}", input);
        }
    }

    #[test]
    fn test_ppi_membership() {
        assert!(is_ppi("parda"));
        assert!(is_ppi("Indigena"));
        assert!(!is_ppi("Branca"));
        assert!(!is_ppi("Amarela"));
        assert!(!is_ppi(""));
    }

    #[test]
    fn test_strip_accents() {
        assert_eq!(strip_accents("Em negociação"), "Em negociacao");
        assert_eq!(strip_accents("SÃO PAULO"), "SAO PAULO");
        assert_eq!(strip_accents("Parďa Prĕta"), "Parda Preta");
    }

    #[test]
    fn test_diacritics_outside_latin1_resolve() {
        assert_eq!(normalize_race("Prẽta"), "Preta");
        assert_eq!(normalize_race("Prĕta"), "Preta");
        assert_eq!(normalize_race("Pārda"), "Parda");
        assert_eq!(normalize_race("Parďa"), "Parda");
        assert_eq!(normalize_race("Indīgena"), "Indígena");
        assert!(is_ppi("Pārda"));
    }
}
