//! The module descriptor (`module.json`) and its invariants.

use crate::constants::DESCRIPTOR_FILE;
use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

/// Module names are kebab-case: lowercase segments of letters and digits
/// separated by single hyphens, starting with a letter.
static KEBAB_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$").unwrap());

/// Returns true if `name` satisfies the kebab-case module name rule.
pub fn is_kebab_case(name: &str) -> bool {
    KEBAB_CASE.is_match(name)
}

/// Validates a module name, returning it untouched on success.
pub fn validate_module_name(name: &str) -> Result<&str> {
    if is_kebab_case(name) {
        Ok(name)
    } else {
        Err(Error::InvalidModuleName { name: name.to_string() })
    }
}

/// Module difficulty levels. Unknown values in a descriptor are a
/// validation error, never silently accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] =
        [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

/// The on-disk module metadata.
///
/// Written once during scaffolding (as a rendered template file), possibly
/// hand-edited afterwards, and read back by validation and the CLI. Extra
/// fields are preserved through the `extra` map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub name: String,
    pub version: String,
    pub category: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ModuleDescriptor {
    /// Loads and parses the descriptor from a module root directory.
    pub fn load<P: AsRef<Path>>(module_root: P) -> Result<Self> {
        let path = module_root.as_ref().join(DESCRIPTOR_FILE);
        let content = std::fs::read_to_string(&path).map_err(Error::IoError)?;
        serde_json::from_str(&content).map_err(|e| Error::MalformedData {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
