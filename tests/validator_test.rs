use modkit::error::Error;
use modkit::tree::ModuleTree;
use modkit::validator::{run_checker, validate, Checker, ValidationReport};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Writes a module that passes every checker.
fn write_valid_module(root: &Path) {
    fs::create_dir_all(root.join("content")).unwrap();
    fs::create_dir_all(root.join("quizzes")).unwrap();
    fs::create_dir_all(root.join("assets")).unwrap();
    fs::write(
        root.join("module.json"),
        r#"{
  "name": "rust-intro",
  "version": "0.1.0",
  "category": "programming",
  "difficulty": "beginner",
  "language": "en",
  "author": "Test Author"
}
"#,
    )
    .unwrap();
    fs::write(
        root.join("content/index.md"),
        "---\ntitle: \"Rust Intro\"\n---\n\n# Rust Intro\n\nSee ref(\"getting-started\").\n",
    )
    .unwrap();
    fs::write(
        root.join("content/getting-started.md"),
        "---\ntitle: \"Getting Started\"\n---\n\n# Getting Started\n",
    )
    .unwrap();
    fs::write(
        root.join("quizzes/checkpoint.json"),
        r#"{
  "title": "Checkpoint",
  "questions": [
    {
      "type": "multiple_choice",
      "question": "Pick one",
      "options": ["a", "b"],
      "correct": 0
    },
    {
      "type": "true_false",
      "question": "Yes?",
      "correct": true
    }
  ]
}
"#,
    )
    .unwrap();
}

fn edit_descriptor(root: &Path, edit: impl FnOnce(&mut serde_json::Value)) {
    let path = root.join("module.json");
    let mut value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    edit(&mut value);
    fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

#[test]
fn test_valid_module_has_no_findings() {
    let dir = TempDir::new().unwrap();
    write_valid_module(dir.path());

    let report = validate(&ModuleTree::new(dir.path()));
    assert!(report.is_valid(), "errors: {:?}", report.errors());
    assert!(report.errors().is_empty());
    assert!(report.warnings().is_empty(), "warnings: {:?}", report.warnings());
}

#[test]
fn test_missing_required_files_are_errors() {
    let dir = TempDir::new().unwrap();

    let report = validate(&ModuleTree::new(dir.path()));
    assert!(!report.is_valid());
    assert!(report.errors().iter().any(|e| e.contains("module.json")));
    assert!(report.errors().iter().any(|e| e.contains("content/index.md")));
}

#[test]
fn test_missing_recommended_dirs_are_warnings_only() {
    let dir = TempDir::new().unwrap();
    write_valid_module(dir.path());
    fs::remove_dir_all(dir.path().join("quizzes")).unwrap();
    fs::remove_dir_all(dir.path().join("assets")).unwrap();

    let report = validate(&ModuleTree::new(dir.path()));
    assert!(report.is_valid());
    assert!(report.warnings().iter().any(|w| w.contains("quizzes")));
    assert!(report.warnings().iter().any(|w| w.contains("assets")));
}

#[test]
fn test_malformed_descriptor_is_one_error_and_pipeline_continues() {
    let dir = TempDir::new().unwrap();
    write_valid_module(dir.path());
    fs::write(dir.path().join("module.json"), "{ not json").unwrap();
    // Break a quiz too; the quizzes checker must still run.
    fs::write(dir.path().join("quizzes/checkpoint.json"), "also { not json").unwrap();

    let report = validate(&ModuleTree::new(dir.path()));
    assert!(report.errors().iter().any(|e| e.contains("Malformed 'module.json'")));
    assert!(report.errors().iter().any(|e| e.contains("checkpoint.json")));
}

#[test]
fn test_missing_difficulty_is_exactly_one_error() {
    let dir = TempDir::new().unwrap();
    write_valid_module(dir.path());
    edit_descriptor(dir.path(), |v| {
        v.as_object_mut().unwrap().remove("difficulty");
    });

    let report = validate(&ModuleTree::new(dir.path()));
    let difficulty_errors: Vec<_> =
        report.errors().iter().filter(|e| e.contains("difficulty")).collect();
    assert_eq!(difficulty_errors.len(), 1, "errors: {:?}", report.errors());
    assert_eq!(report.errors().len(), 1);

    // Restoring a valid value clears the finding without side effects.
    edit_descriptor(dir.path(), |v| {
        v["difficulty"] = serde_json::json!("advanced");
    });
    let report = validate(&ModuleTree::new(dir.path()));
    assert!(report.is_valid(), "errors: {:?}", report.errors());
}

#[test]
fn test_unknown_difficulty_value_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_valid_module(dir.path());
    edit_descriptor(dir.path(), |v| {
        v["difficulty"] = serde_json::json!("expert");
    });

    let report = validate(&ModuleTree::new(dir.path()));
    assert_eq!(report.errors().len(), 1);
    assert!(report.errors()[0].contains("expert"));
}

#[test]
fn test_non_kebab_case_name_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_valid_module(dir.path());
    edit_descriptor(dir.path(), |v| {
        v["name"] = serde_json::json!("Rust_Intro");
    });

    let report = validate(&ModuleTree::new(dir.path()));
    assert_eq!(report.errors().len(), 1);
    assert!(report.errors()[0].contains("kebab-case"));
}

#[test]
fn test_content_without_front_matter_is_a_warning() {
    let dir = TempDir::new().unwrap();
    write_valid_module(dir.path());
    fs::write(dir.path().join("content/loose.md"), "# No header here\n").unwrap();

    let report = validate(&ModuleTree::new(dir.path()));
    assert!(report.is_valid());
    assert!(report
        .warnings()
        .iter()
        .any(|w| w.contains("loose.md") && w.contains("front matter")));
}

#[test]
fn test_broken_reference_names_source_and_target() {
    let dir = TempDir::new().unwrap();
    write_valid_module(dir.path());
    fs::write(
        dir.path().join("content/extra.md"),
        "---\ntitle: \"Extra\"\n---\n\nSee ref(\"missing-page\").\n",
    )
    .unwrap();

    let report = validate(&ModuleTree::new(dir.path()));
    let broken: Vec<_> = report
        .errors()
        .iter()
        .filter(|e| e.contains("Broken reference"))
        .collect();
    assert_eq!(broken.len(), 1);
    assert!(broken[0].contains("extra.md"));
    assert!(broken[0].contains("missing-page"));

    // Creating the target resolves the reference.
    fs::write(
        dir.path().join("content/missing-page.md"),
        "---\ntitle: \"Found\"\n---\n",
    )
    .unwrap();
    let report = validate(&ModuleTree::new(dir.path()));
    assert!(report.is_valid(), "errors: {:?}", report.errors());
}

#[test]
fn test_quiz_missing_title_and_questions() {
    let dir = TempDir::new().unwrap();
    write_valid_module(dir.path());
    fs::write(dir.path().join("quizzes/empty.json"), "{}").unwrap();

    let report = validate(&ModuleTree::new(dir.path()));
    assert!(report
        .errors()
        .iter()
        .any(|e| e.contains("empty.json") && e.contains("'title'")));
    assert!(report
        .errors()
        .iter()
        .any(|e| e.contains("empty.json") && e.contains("'questions'")));
}

#[test]
fn test_multiple_choice_missing_correct_is_one_indexed_error() {
    let dir = TempDir::new().unwrap();
    write_valid_module(dir.path());
    fs::write(
        dir.path().join("quizzes/broken.json"),
        r#"{
  "title": "Broken",
  "questions": [
    { "type": "true_false", "question": "Fine?", "correct": false },
    { "type": "multiple_choice", "question": "Oops", "options": ["a", "b"] }
  ]
}
"#,
    )
    .unwrap();

    let report = validate(&ModuleTree::new(dir.path()));
    assert_eq!(report.errors().len(), 1, "errors: {:?}", report.errors());
    assert!(report.errors()[0].contains("Question 1"));
    assert!(report.errors()[0].contains("broken.json"));
    assert!(report.errors()[0].contains("'correct'"));

    // Adding the field clears only that finding.
    fs::write(
        dir.path().join("quizzes/broken.json"),
        r#"{
  "title": "Broken",
  "questions": [
    { "type": "true_false", "question": "Fine?", "correct": false },
    { "type": "multiple_choice", "question": "Oops", "options": ["a", "b"], "correct": 1 }
  ]
}
"#,
    )
    .unwrap();
    let report = validate(&ModuleTree::new(dir.path()));
    assert!(report.is_valid(), "errors: {:?}", report.errors());
}

#[test]
fn test_unknown_question_type_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_valid_module(dir.path());
    fs::write(
        dir.path().join("quizzes/odd.yaml"),
        "title: Odd\nquestions:\n  - type: essay\n    question: Write things\n",
    )
    .unwrap();

    let report = validate(&ModuleTree::new(dir.path()));
    assert_eq!(report.errors().len(), 1);
    assert!(report.errors()[0].contains("unknown type 'essay'"));
    assert!(report.errors()[0].contains("odd.yaml"));
}

#[test]
fn test_oversized_asset_is_a_warning_not_an_error() {
    let dir = TempDir::new().unwrap();
    write_valid_module(dir.path());
    fs::write(dir.path().join("assets/big.bin"), vec![0u8; 15 * 1024 * 1024]).unwrap();

    let report = validate(&ModuleTree::new(dir.path()));
    assert!(report.is_valid());
    let size_warnings: Vec<_> =
        report.warnings().iter().filter(|w| w.contains("big.bin")).collect();
    assert_eq!(size_warnings.len(), 1);
    assert!(size_warnings[0].contains("15.0 MiB"));
}

#[test]
fn test_report_follows_checker_order() {
    let dir = TempDir::new().unwrap();
    write_valid_module(dir.path());
    fs::remove_file(dir.path().join("content/index.md")).unwrap();
    edit_descriptor(dir.path(), |v| {
        v.as_object_mut().unwrap().remove("version");
    });

    let report = validate(&ModuleTree::new(dir.path()));
    assert_eq!(report.errors().len(), 2);
    // Structure runs before metadata.
    assert!(report.errors()[0].contains("content/index.md"));
    assert!(report.errors()[1].contains("version"));
}

struct ExplodingChecker;

impl Checker for ExplodingChecker {
    fn name(&self) -> &'static str {
        "exploding"
    }

    fn check(
        &self,
        _tree: &ModuleTree,
        _report: &mut ValidationReport,
    ) -> modkit::error::Result<()> {
        Err(Error::ConfigError("simulated internal failure".to_string()))
    }
}

#[test]
fn test_checker_internal_failure_becomes_a_warning() {
    let dir = TempDir::new().unwrap();
    write_valid_module(dir.path());

    let mut report = ValidationReport::new();
    run_checker(&ExplodingChecker, &ModuleTree::new(dir.path()), &mut report);

    assert!(report.is_valid());
    assert_eq!(report.warnings().len(), 1);
    assert!(report.warnings()[0].contains("exploding"));
    assert!(report.warnings()[0].contains("simulated internal failure"));
}
