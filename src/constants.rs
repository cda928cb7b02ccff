//! Common constants used throughout the modkit application.

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["modkit.json", "modkit.yml", "modkit.yaml"];

/// Template ignore file name
pub const IGNORE_FILE: &str = ".modignore";

/// Module descriptor file name
pub const DESCRIPTOR_FILE: &str = "module.json";

/// Directory holding lesson content, relative to the module root
pub const CONTENT_DIR: &str = "content";

/// The primary content entry point, relative to the module root
pub const ENTRY_POINT: &str = "content/index.md";

/// Directory holding quiz definitions, relative to the module root
pub const QUIZZES_DIR: &str = "quizzes";

/// Directory holding static assets, relative to the module root
pub const ASSETS_DIR: &str = "assets";

/// File extensions that get variable substitution during scaffolding
pub const TEMPLATE_ELIGIBLE_EXTENSIONS: [&str; 8] =
    ["md", "markdown", "json", "yaml", "yml", "html", "htm", "txt"];

/// File extensions recognized as lesson content
pub const CONTENT_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Static assets above this size draw a validation warning
pub const ASSET_SIZE_LIMIT: u64 = 10 * 1024 * 1024;
