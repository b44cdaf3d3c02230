// 🔤 Accent Folder - Diacritics → plain ASCII
// Fixed lookup table: French, Spanish, German, Scandinavian, Eastern European
//
// Problem solved:
// - "Élysée" → "ElysEe": accents become uppercase ASCII, other letters keep their case
// - Ligatures expand: "ß" → "SS", "Æ" → "AE", "Œ" → "OE"

use std::collections::HashMap;
use std::sync::LazyLock;

// ============================================================================
// ACCENT TABLE
// ============================================================================

/// One entry per character. Replacements are already uppercase.
const ACCENT_TABLE: &[(char, &str)] = &[
    // A
    ('À', "A"), ('Á', "A"), ('Â', "A"), ('Ã', "A"), ('Ä', "A"), ('Å', "A"), ('Ā', "A"), ('Ă', "A"), ('Ą', "A"),
    ('à', "A"), ('á', "A"), ('â', "A"), ('ã', "A"), ('ä', "A"), ('å', "A"), ('ā', "A"), ('ă', "A"), ('ą', "A"),
    // C
    ('Ç', "C"), ('Ć', "C"), ('Ĉ', "C"), ('Ċ', "C"), ('Č', "C"),
    ('ç', "C"), ('ć', "C"), ('ĉ', "C"), ('ċ', "C"), ('č', "C"),
    // E
    ('È', "E"), ('É', "E"), ('Ê', "E"), ('Ë', "E"), ('Ē', "E"), ('Ĕ', "E"), ('Ė', "E"), ('Ę', "E"), ('Ě', "E"),
    ('è', "E"), ('é', "E"), ('ê', "E"), ('ë', "E"), ('ē', "E"), ('ĕ', "E"), ('ė', "E"), ('ę', "E"), ('ě', "E"),
    // I
    ('Ì', "I"), ('Í', "I"), ('Î', "I"), ('Ï', "I"), ('Ĩ', "I"), ('Ī', "I"), ('Ĭ', "I"), ('Į', "I"), ('İ', "I"),
    ('ì', "I"), ('í', "I"), ('î', "I"), ('ï', "I"), ('ĩ', "I"), ('ī', "I"), ('ĭ', "I"), ('į', "I"), ('ı', "I"),
    // N
    ('Ñ', "N"), ('Ń', "N"), ('Ņ', "N"), ('Ň', "N"),
    ('ñ', "N"), ('ń', "N"), ('ņ', "N"), ('ň', "N"),
    // O
    ('Ò', "O"), ('Ó', "O"), ('Ô', "O"), ('Õ', "O"), ('Ö', "O"), ('Ø', "O"), ('Ō', "O"), ('Ŏ', "O"), ('Ő', "O"),
    ('ò', "O"), ('ó', "O"), ('ô', "O"), ('õ', "O"), ('ö', "O"), ('ø', "O"), ('ō', "O"), ('ŏ', "O"), ('ő', "O"),
    // U
    ('Ù', "U"), ('Ú', "U"), ('Û', "U"), ('Ü', "U"), ('Ũ', "U"), ('Ū', "U"), ('Ŭ', "U"), ('Ů', "U"), ('Ű', "U"), ('Ų', "U"),
    ('ù', "U"), ('ú', "U"), ('û', "U"), ('ü', "U"), ('ũ', "U"), ('ū', "U"), ('ŭ', "U"), ('ů', "U"), ('ű', "U"), ('ų', "U"),
    // Y
    ('Ý', "Y"), ('ý', "Y"), ('ÿ', "Y"), ('Ÿ', "Y"),
    // Ligatures
    ('Œ', "OE"), ('œ', "OE"),
    ('Æ', "AE"), ('æ', "AE"),
    ('ß', "SS"),
    // Eastern European / Slavic
    ('Ł', "L"), ('ł', "L"),
    ('Š', "S"), ('š', "S"),
    ('Ž', "Z"), ('ž', "Z"),
    ('Đ', "D"), ('đ', "D"),
    ('Ř', "R"), ('ř', "R"),
];

static ACCENT_MAP: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| ACCENT_TABLE.iter().copied().collect());

// ============================================================================
// FOLDING
// ============================================================================

/// ASCII replacement for a single character, if the table has one
pub fn replacement(c: char) -> Option<&'static str> {
    ACCENT_MAP.get(&c).copied()
}

/// Replace every accented character with its ASCII equivalent
///
/// Unmapped characters pass through unchanged, so this never fails.
///
/// Example: "Élysée" → "ElysEe", "Straße" → "StraSSe"
pub fn fold(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match replacement(c) {
            Some(ascii) => out.push_str(ascii),
            None => out.push(c),
        }
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_french() {
        assert_eq!(fold("Élysée"), "ElysEe");
        assert_eq!(fold("François"), "FranCois");
    }

    #[test]
    fn test_fold_ligatures_expand() {
        assert_eq!(fold("ß"), "SS");
        assert_eq!(fold("Æsir"), "AEsir");
        assert_eq!(fold("cœur"), "cOEur");
        assert!(fold("Straße").chars().count() > "Straße".chars().count());
    }

    #[test]
    fn test_fold_eastern_european() {
        assert_eq!(fold("Łukasz"), "Lukasz");
        assert_eq!(fold("Dvořák"), "DvoRAk");
        assert_eq!(fold("Đoković"), "DokoviC");
    }

    #[test]
    fn test_fold_unmapped_passes_through() {
        assert_eq!(fold("Smith"), "Smith");
        assert_eq!(fold("O'Neil 42"), "O'Neil 42");
        assert_eq!(fold("Иван"), "Иван");
        assert_eq!(fold(""), "");
    }

    #[test]
    fn test_fold_idempotent() {
        let samples = ["Élysée", "Müller", "Søren", "Œdipe", "Straße", "Plain", "ÀÁÂÃÄÅĀĂĄ"];
        for s in samples {
            let once = fold(s);
            assert_eq!(fold(&once), once, "fold not idempotent for {}", s);
        }

        for (c, _) in ACCENT_TABLE {
            let once = fold(&c.to_string());
            assert_eq!(fold(&once), once, "fold not idempotent for {}", c);
        }
    }

    #[test]
    fn test_every_replacement_is_ascii_uppercase() {
        for (c, ascii) in ACCENT_TABLE {
            assert!(
                ascii.chars().all(|a| a.is_ascii_uppercase()),
                "{} maps to {}",
                c,
                ascii
            );
            assert!((1..=2).contains(&ascii.len()));
        }
    }

    #[test]
    fn test_table_has_no_duplicate_keys() {
        assert_eq!(ACCENT_MAP.len(), ACCENT_TABLE.len());
    }
}
