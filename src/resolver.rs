//! Template lookup across an ordered list of root directories.
//! The first root containing `<root>/<template_id>` as a directory wins.

use crate::error::{Error, Result};
use log::debug;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Resolves template identifiers against an ordered list of search roots:
/// typically the user's override directory first, then the bundled built-in
/// templates, then a system-wide shared location, then any extra roots from
/// configuration.
#[derive(Debug)]
pub struct TemplateResolver {
    roots: Vec<PathBuf>,
}

impl TemplateResolver {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// The ordered search roots, highest precedence first.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Resolves a template id to the directory of the first matching root.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` naming the id and every searched root
    pub fn resolve(&self, template_id: &str) -> Result<PathBuf> {
        for root in &self.roots {
            let candidate = root.join(template_id);
            if candidate.is_dir() {
                debug!("Resolved template '{}' at {}", template_id, candidate.display());
                return Ok(candidate);
            }
            debug!("Template '{}' not under {}", template_id, root.display());
        }

        Err(Error::TemplateNotFound {
            template_id: template_id.to_string(),
            searched_roots: self.roots.clone(),
        })
    }

    /// Lists the template ids available across all roots, sorted and
    /// deduplicated (an id shadowed by an earlier root appears once).
    pub fn list(&self) -> Vec<String> {
        let mut ids = BTreeSet::new();
        for root in &self.roots {
            let Ok(entries) = std::fs::read_dir(root) else {
                continue;
            };
            for entry in entries.flatten() {
                if !entry.path().is_dir() {
                    continue;
                }
                if let Some(name) = entry.file_name().to_str() {
                    if !name.starts_with('.') {
                        ids.insert(name.to_string());
                    }
                }
            }
        }
        ids.into_iter().collect()
    }
}

/// Builds the conventional root order from the optional user, bundled and
/// system locations plus configured extras. Roots that do not exist are
/// kept; `resolve` reports them in its searched list, which is what the
/// user needs to see when a lookup fails.
pub fn search_roots(
    user_dir: Option<PathBuf>,
    bundled_dir: PathBuf,
    system_dir: PathBuf,
    extra_roots: &[PathBuf],
) -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Some(user_dir) = user_dir {
        roots.push(user_dir);
    }
    roots.push(bundled_dir);
    roots.push(system_dir);
    roots.extend(extra_roots.iter().cloned());
    roots
}
