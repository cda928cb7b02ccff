//! Error handling for the modkit application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for modkit operations.
///
/// This enum represents all possible errors that can occur within the modkit
/// application. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// No template root contained the requested template
    #[error("Template '{template_id}' not found. Searched roots: {}.", format_roots(.searched_roots))]
    TemplateNotFound { template_id: String, searched_roots: Vec<PathBuf> },

    /// The scaffold destination already exists
    #[error("Destination '{destination}' already exists.")]
    DestinationExists { destination: String },

    /// Module name does not follow the kebab-case rule
    #[error("Invalid module name '{name}': must be kebab-case (lowercase letters, digits and single hyphens, starting with a letter).")]
    InvalidModuleName { name: String },

    /// A template file references a variable that was never provided
    #[error("Unresolved variable '{variable}'.")]
    UndefinedVariable { variable: String },

    /// Represents errors raised by the MiniJinja engine
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// A structured-data file could not be parsed
    #[error("Malformed data in '{path}': {reason}.")]
    MalformedData { path: String, reason: String },

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors in processing .modignore files
    #[error("Ignore pattern error: {0}.")]
    IgnoreError(String),
}

fn format_roots(roots: &[PathBuf]) -> String {
    roots.iter().map(|r| r.display().to_string()).collect::<Vec<_>>().join(", ")
}

/// Convenience type alias for Results with modkit's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
