// 🪪 Names - Validation + key normalization
// Raw names are displayed; normalized keys are only used for identity.

use crate::accents;
use unicode_general_category::{get_general_category, GeneralCategory};

/// True if `c` is in a Unicode letter category (Lu, Ll, Lt, Lm, Lo)
///
/// Letter-numbers like 'Ⅻ' and combining marks are not letters.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// True if every character is a letter, a space or a hyphen
///
/// The empty string is valid here; callers reject blank names themselves.
///
/// Example: "Jean-Paul" → true, "Jean123" → false
pub fn is_valid_name(s: &str) -> bool {
    s.chars().all(|c| is_letter(c) || c == ' ' || c == '-')
}

/// Fold accents, uppercase, then strip spaces and hyphens
///
/// Example: "Élysée-Champs" → "ELYSEECHAMPS"
pub fn normalize_key(s: &str) -> String {
    accents::fold(s)
        .to_uppercase()
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect()
}

// ============================================================================
// NORMALIZED KEY
// ============================================================================

/// Registry identity for a student: (normalized last, normalized first)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedKey {
    pub last: String,
    pub first: String,
}

impl NormalizedKey {
    pub fn new(last_name: &str, first_name: &str) -> Self {
        NormalizedKey {
            last: normalize_key(last_name),
            first: normalize_key(first_name),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("Jean-Paul"));
        assert!(is_valid_name("Van der Berg"));
        assert!(is_valid_name("Élysée"));
        assert!(is_valid_name("Иван"));
        assert!(is_valid_name(""));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_name("Jean123"));
        assert!(!is_valid_name("O'Neil"));
        assert!(!is_valid_name("Smith."));
        assert!(!is_valid_name("Anne_Marie"));
        assert!(!is_valid_name("Tab\tName"));
    }

    #[test]
    fn test_non_letter_alphabetics_rejected() {
        // Roman numerals are letter-numbers (Nl)
        assert!(!is_valid_name("Ⅻ"));
        assert!(!is_valid_name("Henri Ⅳ"));
        // Devanagari vowel sign is a combining mark (Mc)
        assert!(!is_valid_name("राम"));
        // Modifier and other letters still count
        assert!(is_valid_name("ʻOla"));
        assert!(is_valid_name("李"));
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Élysée-Champs"), "ELYSEECHAMPS");
        assert_eq!(normalize_key("van der Berg"), "VANDERBERG");
        assert_eq!(normalize_key("Müller"), "MULLER");
        assert_eq!(normalize_key("Straße"), "STRASSE");
        assert_eq!(normalize_key(" - "), "");
    }

    #[test]
    fn test_normalized_key_ignores_accents_case_and_separators() {
        let a = NormalizedKey::new("Élysée", "Jean-Paul");
        let b = NormalizedKey::new("elysee", "JEAN PAUL");
        assert_eq!(a, b);
        assert_eq!(a.last, "ELYSEE");
        assert_eq!(a.first, "JEANPAUL");
    }

    #[test]
    fn test_normalized_key_keeps_halves_apart() {
        // Same letters split differently must not collide
        assert_ne!(NormalizedKey::new("Ann", "Lee"), NormalizedKey::new("An", "NLee"));
    }
}
