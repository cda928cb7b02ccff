//! Module validation pipeline.
//!
//! Five independent checkers run in a fixed order over a module tree, each
//! appending to a shared report. A checker's internal failure (an `Err`
//! from `check`, e.g. an unreadable directory) is recorded as a warning
//! naming the checker so the remaining checkers still run: validation
//! always returns a complete report and never raises to the caller.

mod assets;
mod content;
mod metadata;
mod quizzes;
mod structure;

pub use assets::AssetsChecker;
pub use content::ContentChecker;
pub use metadata::MetadataChecker;
pub use quizzes::QuizzesChecker;
pub use structure::StructureChecker;

use crate::error::Result;
use crate::tree::ModuleTree;
use log::debug;

/// The accumulated findings of one validation run.
///
/// Errors and warnings keep insertion order: checker execution order first,
/// then directory-traversal order within a checker. Callers may rely on
/// this for stable output.
#[derive(Debug, Default)]
pub struct ValidationReport {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error<S: Into<String>>(&mut self, message: S) {
        self.errors.push(message.into());
    }

    pub fn warning<S: Into<String>>(&mut self, message: S) {
        self.warnings.push(message.into());
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// A module is valid when no checker recorded an error. Warnings never
    /// affect validity.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// One independent validation stage.
///
/// Implementations only ever append to the report. Data problems in the
/// module itself go into the report as errors or warnings; an `Err` return
/// means the checker could not do its job at all.
pub trait Checker {
    fn name(&self) -> &'static str;

    fn check(&self, tree: &ModuleTree, report: &mut ValidationReport) -> Result<()>;
}

/// Runs one checker, downgrading its internal failure to a warning so the
/// rest of the pipeline still gets to run.
pub fn run_checker(checker: &dyn Checker, tree: &ModuleTree, report: &mut ValidationReport) {
    debug!("Running {} checker on {}", checker.name(), tree.root().display());
    if let Err(err) = checker.check(tree, report) {
        report.warning(format!("Checker '{}' failed to run: {}", checker.name(), err));
    }
}

/// Runs the full pipeline over a module tree and aggregates the report.
pub fn validate(tree: &ModuleTree) -> ValidationReport {
    let checkers: [&dyn Checker; 5] = [
        &StructureChecker,
        &MetadataChecker,
        &ContentChecker,
        &QuizzesChecker,
        &AssetsChecker,
    ];

    let mut report = ValidationReport::new();
    for checker in checkers {
        run_checker(checker, tree, &mut report);
    }
    report
}
