//! Structural checks: required files must exist, recommended directories
//! draw warnings when missing.

use super::{Checker, ValidationReport};
use crate::constants::{ASSETS_DIR, CONTENT_DIR, DESCRIPTOR_FILE, ENTRY_POINT, QUIZZES_DIR};
use crate::error::Result;
use crate::tree::ModuleTree;

pub struct StructureChecker;

impl Checker for StructureChecker {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn check(&self, tree: &ModuleTree, report: &mut ValidationReport) -> Result<()> {
        if !tree.descriptor_path().is_file() {
            report.error(format!("Missing required file '{}'", DESCRIPTOR_FILE));
        }
        if !tree.entry_point().is_file() {
            report.error(format!("Missing required file '{}'", ENTRY_POINT));
        }

        let recommended = [
            (tree.content_dir(), CONTENT_DIR),
            (tree.quizzes_dir(), QUIZZES_DIR),
            (tree.assets_dir(), ASSETS_DIR),
        ];
        for (path, name) in recommended {
            if !path.is_dir() {
                report.warning(format!("Missing recommended directory '{}'", name));
            }
        }

        Ok(())
    }
}
