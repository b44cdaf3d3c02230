// 🧩 Field Extractors - Fixed 3-character code fragments
// Both take an already-normalized (uppercase, folded) name.

/// Width of every field
pub const FIELD_LEN: usize = 3;

/// Padding used when a name is too short
pub const PAD: char = 'X';

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

fn pad(chars: impl Iterator<Item = char>) -> String {
    let mut field: String = chars.take(FIELD_LEN).collect();
    let missing = FIELD_LEN - field.chars().count();
    field.extend(std::iter::repeat(PAD).take(missing));
    field
}

/// First three non-vowels, padded with 'X'
///
/// Example: "SMITH" → "SMT", "ELYSEE" → "LYS", "O" → "XXX"
pub fn consonant_field(normalized: &str) -> String {
    pad(normalized.chars().filter(|c| !VOWELS.contains(c)))
}

/// First three characters, padded with 'X'
///
/// Example: "JEAN" → "JEA", "AL" → "ALX"
pub fn letter_field(normalized: &str) -> String {
    pad(normalized.chars())
}
