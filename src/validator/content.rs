//! Content checks: front matter presence and `ref("...")` cross-reference
//! resolution over the markdown files under `content/`.

use super::{Checker, ValidationReport};
use crate::constants::CONTENT_EXTENSIONS;
use crate::error::{Error, Result};
use crate::tree::ModuleTree;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::WalkDir;

static CROSS_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"ref\("([^"]+)"\)"#).unwrap());

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            CONTENT_EXTENSIONS.iter().any(|e| *e == ext)
        })
        .unwrap_or(false)
}

/// A recognized front matter header is a leading `---` fence closed by a
/// second `---` line.
fn has_front_matter(content: &str) -> bool {
    let mut lines = content.lines();
    if lines.next().map(str::trim_end) != Some("---") {
        return false;
    }
    lines.any(|line| line.trim_end() == "---")
}

fn target_resolves(content_dir: &Path, target: &str) -> bool {
    CONTENT_EXTENSIONS
        .iter()
        .any(|ext| content_dir.join(format!("{}.{}", target, ext)).is_file())
}

pub struct ContentChecker;

impl Checker for ContentChecker {
    fn name(&self) -> &'static str {
        "content"
    }

    fn check(&self, tree: &ModuleTree, report: &mut ValidationReport) -> Result<()> {
        let content_dir = tree.content_dir();
        if !content_dir.is_dir() {
            // The structure checker already warned about the missing dir.
            return Ok(());
        }

        for entry in WalkDir::new(&content_dir).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            if !entry.file_type().is_file() || !is_content_file(entry.path()) {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(tree.root())
                .unwrap_or(entry.path())
                .display()
                .to_string();
            let content = std::fs::read_to_string(entry.path())?;

            if !has_front_matter(&content) {
                report.warning(format!("'{}' has no front matter header", relative));
            }

            for capture in CROSS_REF.captures_iter(&content) {
                let target = &capture[1];
                if !target_resolves(&content_dir, target) {
                    report.error(format!(
                        "Broken reference in '{}': no content file for '{}'",
                        relative, target
                    ));
                }
            }
        }

        Ok(())
    }
}
