//! modkit scaffolds learning modules from templates and validates the
//! structural and content correctness of module trees.

/// Command-line interface module for the modkit application
pub mod cli;

/// Configuration handling: default variables and extra template roots
/// Supports JSON and YAML formats (modkit.json, modkit.yml, modkit.yaml)
pub mod config;

/// Common constants: file names, layout paths, limits
pub mod constants;

/// Module descriptor (module.json), difficulty enum and naming rules
pub mod descriptor;

/// Error types and handling for the modkit application
pub mod error;

/// File and directory ignore patterns
/// Processes .modignore files to exclude specific paths
pub mod ignore;

/// User input and interaction handling
pub mod prompt;

/// Variable substitution over template file content
pub mod renderer;

/// Template lookup across ordered search roots
pub mod resolver;

/// Core scaffolding orchestration
/// Combines resolver and renderer to generate a module tree
pub mod scaffold;

/// Module tree handle and scaffolding outcome types
pub mod tree;

/// Module validation pipeline and checkers
pub mod validator;
