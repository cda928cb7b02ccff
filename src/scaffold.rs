//! Core scaffolding orchestration: resolves a template, copies its tree
//! into the destination and substitutes variables into template-eligible
//! files.

use crate::constants::TEMPLATE_ELIGIBLE_EXTENSIONS;
use crate::descriptor::validate_module_name;
use crate::error::{Error, Result};
use crate::ignore::parse_ignore_file;
use crate::renderer::{TemplateRenderer, TemplateVariables};
use crate::resolver::TemplateResolver;
use crate::tree::{ModuleTree, ScaffoldOutcome};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Returns true if a file gets variable substitution, judged by extension.
pub fn is_template_eligible(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            TEMPLATE_ELIGIBLE_EXTENSIONS.iter().any(|e| *e == ext)
        })
        .unwrap_or(false)
}

/// Creates module trees from resolved templates.
pub struct Scaffolder<'a> {
    resolver: &'a TemplateResolver,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Scaffolder<'a> {
    pub fn new(resolver: &'a TemplateResolver, renderer: &'a dyn TemplateRenderer) -> Self {
        Self { resolver, renderer }
    }

    /// Instantiates `template_id` as `destination_parent/target_name`.
    ///
    /// The template tree is first copied verbatim (directories, assets and
    /// all), then every template-eligible file is rendered in place. A file
    /// that fails to render keeps its verbatim copy and contributes a
    /// warning to the returned outcome; the run as a whole still succeeds.
    ///
    /// # Errors
    /// * `Error::InvalidModuleName` before any filesystem access
    /// * `Error::DestinationExists` if the target directory is already there;
    ///   the existing directory is left untouched
    /// * `Error::TemplateNotFound` from resolution, nothing written
    /// * `Error::IoError` on copy failure; the partially written destination
    ///   is removed on a best-effort basis
    pub fn scaffold(
        &self,
        template_id: &str,
        target_name: &str,
        variables: &TemplateVariables,
        destination_parent: &Path,
    ) -> Result<ScaffoldOutcome> {
        validate_module_name(target_name)?;

        let destination = destination_parent.join(target_name);
        if destination.exists() {
            return Err(Error::DestinationExists {
                destination: destination.display().to_string(),
            });
        }

        let template_root = self.resolver.resolve(template_id)?;
        let ignored = parse_ignore_file(&template_root)?;

        debug!(
            "Scaffolding '{}' from template '{}' into {}",
            target_name,
            template_id,
            destination.display()
        );

        let copied = match self.copy_tree(&template_root, &destination, &ignored) {
            Ok(copied) => copied,
            Err(err) => {
                // The copy phase is all-or-nothing; drop the partial tree.
                if let Err(cleanup_err) = fs::remove_dir_all(&destination) {
                    warn!(
                        "Could not clean up partial output {}: {}",
                        destination.display(),
                        cleanup_err
                    );
                }
                return Err(err);
            }
        };

        let mut warnings = Vec::new();
        for file in &copied {
            if !is_template_eligible(file) {
                continue;
            }
            if let Err(reason) = self.render_in_place(file, variables) {
                let message = format!(
                    "Left '{}' unrendered: {}",
                    file.display(),
                    reason
                );
                warn!("{}", message);
                warnings.push(message);
            }
        }

        Ok(ScaffoldOutcome { tree: ModuleTree::new(destination), warnings })
    }

    /// Mirrors the template tree under `destination`, skipping ignored
    /// paths and the ignore file itself. Returns the copied file paths in
    /// traversal order.
    fn copy_tree(
        &self,
        template_root: &Path,
        destination: &Path,
        ignored: &globset::GlobSet,
    ) -> Result<Vec<PathBuf>> {
        let mut copied = Vec::new();

        for entry in WalkDir::new(template_root).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            let relative = entry
                .path()
                .strip_prefix(template_root)
                .map_err(|e| Error::ConfigError(e.to_string()))?;
            if relative.as_os_str().is_empty() {
                fs::create_dir_all(destination).map_err(Error::IoError)?;
                continue;
            }
            if relative == Path::new(crate::constants::IGNORE_FILE) {
                continue;
            }
            if ignored.is_match(relative) {
                debug!("Skipping '{}' per .modignore", relative.display());
                continue;
            }

            let target = destination.join(relative);
            if entry.file_type().is_dir() {
                fs::create_dir_all(&target).map_err(Error::IoError)?;
            } else {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).map_err(Error::IoError)?;
                }
                fs::copy(entry.path(), &target).map_err(Error::IoError)?;
                debug!("Copied '{}'", relative.display());
                copied.push(target);
            }
        }

        Ok(copied)
    }

    /// Renders one copied file in place. Every failure mode here (non-text
    /// content, unresolved variable, write error) is reported back to the
    /// caller as a reason string and downgraded to a warning.
    fn render_in_place(
        &self,
        file: &Path,
        variables: &TemplateVariables,
    ) -> std::result::Result<(), String> {
        let content = fs::read_to_string(file).map_err(|e| e.to_string())?;
        let rendered = self.renderer.render(&content, variables).map_err(|e| e.to_string())?;
        fs::write(file, rendered).map_err(|e| e.to_string())
    }
}
