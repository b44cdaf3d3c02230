// Student Registry - Core Library
// Exposes the registration pipeline for the CLI, the web server, and tests

pub mod accents;   // Accent Folder - fixed diacritic table
pub mod names;     // Name validation + key normalization
pub mod fields;    // 3-character code fields
pub mod registry;  // Code generation + duplicate detection
pub mod session;   // Interactive CLI loop

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use accents::fold;
pub use names::{is_valid_name, normalize_key, NormalizedKey};
pub use fields::{consonant_field, letter_field};
pub use registry::{Registry, RegistrationError, Severity, StudentRecord};
pub use session::{print_summary, run_session};

/// Install the fmt subscriber used by both binaries
///
/// RUST_LOG overrides the default `student_registry=info`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("student_registry=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
