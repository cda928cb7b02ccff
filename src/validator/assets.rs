//! Asset checks: large static files are flagged as warnings. Size alone
//! never fails validation.

use super::{Checker, ValidationReport};
use crate::constants::ASSET_SIZE_LIMIT;
use crate::error::{Error, Result};
use crate::tree::ModuleTree;
use walkdir::WalkDir;

pub struct AssetsChecker;

impl Checker for AssetsChecker {
    fn name(&self) -> &'static str {
        "assets"
    }

    fn check(&self, tree: &ModuleTree, report: &mut ValidationReport) -> Result<()> {
        let assets_dir = tree.assets_dir();
        if !assets_dir.is_dir() {
            return Ok(());
        }

        for entry in WalkDir::new(&assets_dir).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let size = entry.metadata().map_err(|e| Error::IoError(e.into()))?.len();
            if size > ASSET_SIZE_LIMIT {
                let relative = entry
                    .path()
                    .strip_prefix(tree.root())
                    .unwrap_or(entry.path())
                    .display()
                    .to_string();
                report.warning(format!(
                    "Asset '{}' is {:.1} MiB, above the recommended {} MiB",
                    relative,
                    size as f64 / (1024.0 * 1024.0),
                    ASSET_SIZE_LIMIT / (1024 * 1024)
                ));
            }
        }

        Ok(())
    }
}
