// 🎓 Student Registry - Code generation + duplicate detection
//
// Code = consonant_field(last) + letter_field(first) + zero-padded counter
// Example: ("Élysée", "Jean") as the first entry → "LYSJEA001"
//
// Append-only: a key goes ABSENT → PRESENT once and never back.

use crate::fields::{consonant_field, letter_field};
use crate::names::{is_valid_name, NormalizedKey};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;
use thiserror::Error;
use tracing::{debug, info};

// ============================================================================
// STUDENT RECORD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    /// Registration code, unique across the registry
    pub code: String,

    /// Last name exactly as entered
    pub last_name: String,

    /// First name exactly as entered
    pub first_name: String,

    pub registered_at: DateTime<Utc>,
}

// ============================================================================
// REGISTRATION OUTCOMES
// ============================================================================

/// The two non-success outcomes of a registration
///
/// Neither is fatal: the caller re-prompts and the registry is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Error: Names must contain only letters, spaces, or hyphens.")]
    InvalidName,

    #[error("⚠️ Already registered: {code}")]
    AlreadyRegistered { code: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl RegistrationError {
    /// Duplicates are warnings; invalid input is an error
    pub fn severity(&self) -> Severity {
        match self {
            RegistrationError::InvalidName => Severity::Error,
            RegistrationError::AlreadyRegistered { .. } => Severity::Warning,
        }
    }

    /// Code of the existing record for a duplicate
    pub fn existing_code(&self) -> Option<&str> {
        match self {
            RegistrationError::AlreadyRegistered { code } => Some(code),
            RegistrationError::InvalidName => None,
        }
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// In-memory registry of students, one per normalized (last, first) pair
///
/// `counter` always equals the number of successful registrations.
#[derive(Debug, Default)]
pub struct Registry {
    /// Records in registration order (append-only, never delete)
    records: Vec<StudentRecord>,

    /// Normalized key → index into `records`
    index: HashMap<NormalizedKey, usize>,

    counter: u32,
}

impl Registry {
    /// Create an empty registry with the counter at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a student and return the new code
    ///
    /// Validation happens before any mutation. A key that is already present
    /// returns the stored code and leaves the counter unchanged.
    pub fn register(&mut self, last_name: &str, first_name: &str) -> Result<String, RegistrationError> {
        if !is_valid_name(last_name) || !is_valid_name(first_name) {
            debug!(last_name, first_name, "rejected invalid name");
            return Err(RegistrationError::InvalidName);
        }

        let key = NormalizedKey::new(last_name, first_name);
        if let Some(&i) = self.index.get(&key) {
            let code = self.records[i].code.clone();
            debug!(%code, "duplicate registration");
            return Err(RegistrationError::AlreadyRegistered { code });
        }

        let field1 = consonant_field(&key.last);
        let field2 = letter_field(&key.first);

        self.counter += 1;
        let code = format!("{}{}{:03}", field1, field2, self.counter);

        self.records.push(StudentRecord {
            code: code.clone(),
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            registered_at: Utc::now(),
        });
        self.index.insert(key, self.records.len() - 1);

        info!(%code, count = self.counter, "registered student");
        Ok(code)
    }

    /// Register and render the outcome as the text the shells print
    ///
    /// Success → the code itself; otherwise the error message.
    pub fn generate_registration_number(&mut self, last_name: &str, first_name: &str) -> String {
        match self.register(last_name, first_name) {
            Ok(code) => code,
            Err(e) => e.to_string(),
        }
    }

    /// Find a student by raw names (normalized before lookup)
    pub fn lookup(&self, last_name: &str, first_name: &str) -> Option<&StudentRecord> {
        self.index
            .get(&NormalizedKey::new(last_name, first_name))
            .map(|&i| &self.records[i])
    }

    /// All records in registration order
    pub fn records(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of successful registrations so far
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Export all records as CSV (last_name, first_name, code, registered_at)
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["last_name", "first_name", "code", "registered_at"])?;

        for record in &self.records {
            wtr.write_record([
                record.last_name.as_str(),
                record.first_name.as_str(),
                record.code.as_str(),
                record.registered_at.to_rfc3339().as_str(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_registration() {
        let mut registry = Registry::new();

        let code = registry.register("Élysée", "Jean").unwrap();

        assert_eq!(code, "LYSJEA001");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.counter(), 1);
    }

    #[test]
    fn test_duplicate_returns_existing_code() {
        let mut registry = Registry::new();

        let code = registry.register("Élysée", "Jean").unwrap();
        let again = registry.register("Élysée", "Jean");

        assert_eq!(
            again,
            Err(RegistrationError::AlreadyRegistered { code: code.clone() })
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.counter(), 1);

        // Idempotent: any number of repeats gives the same answer
        for _ in 0..3 {
            let err = registry.register("Élysée", "Jean").unwrap_err();
            assert_eq!(err.existing_code(), Some(code.as_str()));
        }
        assert_eq!(registry.counter(), 1);
    }

    #[test]
    fn test_duplicate_detected_across_spelling_variants() {
        let mut registry = Registry::new();

        let code = registry.register("Élysée-Champs", "Jean Paul").unwrap();
        let err = registry.register("ELYSEE CHAMPS", "jean-paul").unwrap_err();

        assert_eq!(err.existing_code(), Some(code.as_str()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_invalid_name_does_not_mutate() {
        let mut registry = Registry::new();

        assert_eq!(registry.register("Jean123", "Paul"), Err(RegistrationError::InvalidName));
        assert_eq!(registry.register("Smith", "J0hn"), Err(RegistrationError::InvalidName));

        assert!(registry.is_empty());
        assert_eq!(registry.counter(), 0);
    }

    #[test]
    fn test_letter_numbers_are_not_registered() {
        let mut registry = Registry::new();

        assert_eq!(registry.register("Ⅻ", "Ⅳ"), Err(RegistrationError::InvalidName));
        assert_eq!(registry.register("Sharma", "राम"), Err(RegistrationError::InvalidName));

        assert!(registry.is_empty());
        assert_eq!(registry.counter(), 0);
    }

    #[test]
    fn test_short_names_are_padded() {
        let mut registry = Registry::new();
        registry.register("Smith", "John").unwrap();

        let code = registry.register("O", "Ai").unwrap();

        assert_eq!(code, "XXXAIX002");
    }

    #[test]
    fn test_counter_disambiguates_same_fields() {
        let mut registry = Registry::new();

        let a = registry.register("Smith", "John").unwrap();
        let b = registry.register("Smyth", "Johanna").unwrap();

        assert_eq!(a, "SMTJOH001");
        assert_eq!(b, "SMYJOH002");

        let c = registry.register("Smithe", "John").unwrap();
        assert_eq!(c, "SMTJOH003");
        assert_ne!(a, c);
    }

    #[test]
    fn test_counter_grows_past_three_digits() {
        let mut registry = Registry::new();
        registry.counter = 999;

        let code = registry.register("Smith", "John").unwrap();

        assert_eq!(code, "SMTJOH1000");
        assert_eq!(code.len(), 10);
    }

    #[test]
    fn test_generate_registration_number_messages() {
        let mut registry = Registry::new();

        assert_eq!(registry.generate_registration_number("Élysée", "Jean"), "LYSJEA001");
        assert_eq!(
            registry.generate_registration_number("Élysée", "Jean"),
            "⚠️ Already registered: LYSJEA001"
        );
        assert_eq!(
            registry.generate_registration_number("Jean123", "Paul"),
            "Error: Names must contain only letters, spaces, or hyphens."
        );
    }

    #[test]
    fn test_severity() {
        assert_eq!(RegistrationError::InvalidName.severity(), Severity::Error);
        let dup = RegistrationError::AlreadyRegistered { code: "SMTJOH001".to_string() };
        assert_eq!(dup.severity(), Severity::Warning);
    }

    #[test]
    fn test_lookup_and_order() {
        let mut registry = Registry::new();
        registry.register("Müller", "Anna").unwrap();
        registry.register("Dupont", "Marie").unwrap();

        let found = registry.lookup("MULLER", "anna").unwrap();
        assert_eq!(found.code, "MLLANN001");
        assert_eq!(found.last_name, "Müller");
        assert!(registry.lookup("Nobody", "Here").is_none());

        let codes: Vec<&str> = registry.records().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["MLLANN001", "DPNMAR002"]);
    }

    #[test]
    fn test_codes_are_unique() {
        let mut registry = Registry::new();
        let names = [("Smith", "John"), ("Smith", "Jane"), ("Smyth", "John"), ("O", "Ai"), ("Lee", "Al")];
        for (last, first) in names {
            registry.register(last, first).unwrap();
        }

        let mut codes: Vec<&str> = registry.records().map(|r| r.code.as_str()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), names.len());
        assert_eq!(registry.counter() as usize, registry.len());
    }

    #[test]
    fn test_write_csv() {
        let mut registry = Registry::new();
        registry.register("Élysée", "Jean").unwrap();
        registry.register("Smith", "John").unwrap();

        let mut buf = Vec::new();
        registry.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "last_name,first_name,code,registered_at");
        assert!(lines[1].starts_with("Élysée,Jean,LYSJEA001,"));
        assert!(lines[2].starts_with("Smith,John,SMTJOH002,"));
    }
}
