//! Descriptor checks: `module.json` must parse and carry the required
//! fields with valid values.

use super::{Checker, ValidationReport};
use crate::constants::DESCRIPTOR_FILE;
use crate::descriptor::{is_kebab_case, Difficulty};
use crate::error::Result;
use crate::tree::ModuleTree;
use std::str::FromStr;

/// Fields a descriptor cannot do without. Each missing one is a separate
/// error so a fix list reads off the report directly.
const REQUIRED_FIELDS: [&str; 4] = ["name", "version", "category", "difficulty"];

pub struct MetadataChecker;

impl Checker for MetadataChecker {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn check(&self, tree: &ModuleTree, report: &mut ValidationReport) -> Result<()> {
        let descriptor_path = tree.descriptor_path();
        if !descriptor_path.is_file() {
            // The structure checker already reported the missing file.
            return Ok(());
        }

        let content = std::fs::read_to_string(&descriptor_path)?;
        let value: serde_json::Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(err) => {
                report.error(format!("Malformed '{}': {}", DESCRIPTOR_FILE, err));
                return Ok(());
            }
        };

        for field in REQUIRED_FIELDS {
            match value.get(field).and_then(|v| v.as_str()) {
                Some(_) => {}
                None => report.error(format!(
                    "'{}' is missing required field '{}'",
                    DESCRIPTOR_FILE, field
                )),
            }
        }

        if let Some(difficulty) = value.get("difficulty").and_then(|v| v.as_str()) {
            if Difficulty::from_str(difficulty).is_err() {
                report.error(format!(
                    "'{}' has invalid difficulty '{}' (expected one of: beginner, intermediate, advanced)",
                    DESCRIPTOR_FILE, difficulty
                ));
            }
        }

        if let Some(name) = value.get("name").and_then(|v| v.as_str()) {
            if !is_kebab_case(name) {
                report.error(format!(
                    "'{}' has invalid name '{}': module names must be kebab-case",
                    DESCRIPTOR_FILE, name
                ));
            }
        }

        Ok(())
    }
}
