//! The module tree handle returned by scaffolding and consumed by
//! validation. Owns nothing on disk; it is a typed view over the module's
//! root directory and conventional layout.

use crate::constants::{ASSETS_DIR, CONTENT_DIR, DESCRIPTOR_FILE, ENTRY_POINT, QUIZZES_DIR};
use crate::descriptor::ModuleDescriptor;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// A handle to a module directory.
///
/// Created by `Scaffolder::scaffold` for freshly generated modules, or with
/// `ModuleTree::new` for existing (possibly hand-edited) ones. The engine
/// never retains a copy after returning it.
#[derive(Debug, Clone)]
pub struct ModuleTree {
    root: PathBuf,
}

impl ModuleTree {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the `module.json` descriptor.
    pub fn descriptor_path(&self) -> PathBuf {
        self.root.join(DESCRIPTOR_FILE)
    }

    /// Parses the descriptor file.
    pub fn descriptor(&self) -> Result<ModuleDescriptor> {
        ModuleDescriptor::load(&self.root)
    }

    /// The primary content entry point (`content/index.md`).
    pub fn entry_point(&self) -> PathBuf {
        self.root.join(ENTRY_POINT)
    }

    pub fn content_dir(&self) -> PathBuf {
        self.root.join(CONTENT_DIR)
    }

    pub fn quizzes_dir(&self) -> PathBuf {
        self.root.join(QUIZZES_DIR)
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root.join(ASSETS_DIR)
    }
}

/// The result of a best-effort scaffolding run: the new tree plus warnings
/// for any file that kept its unrendered content.
#[derive(Debug)]
pub struct ScaffoldOutcome {
    pub tree: ModuleTree,
    pub warnings: Vec<String>,
}
