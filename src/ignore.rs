//! File and directory ignore pattern handling for modkit templates.
//! This module processes .modignore files to exclude specific paths
//! from scaffolding, similar to .gitignore functionality.

use crate::constants::IGNORE_FILE;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Reads a template's .modignore file into a set of glob patterns.
///
/// # Arguments
/// * `template_root` - Directory of the resolved template
///
/// # Notes
/// - If the .modignore file doesn't exist, returns an empty GlobSet
/// - Each non-empty, non-comment line is a separate glob pattern
/// - Invalid patterns will result in an IgnoreError
pub fn parse_ignore_file<P: AsRef<Path>>(template_root: P) -> Result<GlobSet> {
    let ignore_path = template_root.as_ref().join(IGNORE_FILE);
    let mut builder = GlobSetBuilder::new();
    if let Ok(contents) = read_to_string(&ignore_path) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            builder.add(Glob::new(line).map_err(|e| {
                Error::IgnoreError(format!(".modignore loading failed: {}", e))
            })?);
        }
    } else {
        debug!(".modignore does not exist");
    }
    let glob_set = builder
        .build()
        .map_err(|e| Error::IgnoreError(format!(".modignore loading failed: {}", e)))?;

    Ok(glob_set)
}
