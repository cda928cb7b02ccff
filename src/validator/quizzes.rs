//! Quiz definition checks: each file under `quizzes/` must parse and carry
//! a title plus well-formed questions for its declared type.

use super::{Checker, ValidationReport};
use crate::error::{Error, Result};
use crate::tree::ModuleTree;
use std::path::Path;
use walkdir::WalkDir;

/// Recognized question types. A type string outside this set is an error,
/// never a silent pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuestionType {
    MultipleChoice,
    TrueFalse,
}

impl QuestionType {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "multiple_choice" => Some(QuestionType::MultipleChoice),
            "true_false" => Some(QuestionType::TrueFalse),
            _ => None,
        }
    }

    /// Fields this question type requires beyond `type` and `question`.
    fn required_fields(&self) -> &'static [&'static str] {
        match self {
            QuestionType::MultipleChoice => &["options", "correct"],
            QuestionType::TrueFalse => &["correct"],
        }
    }
}

fn is_quiz_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("json") | Some("yml") | Some("yaml")
    )
}

fn parse_quiz(path: &Path, content: &str) -> std::result::Result<serde_json::Value, String> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(content).map_err(|e| e.to_string()),
        _ => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    }
}

pub struct QuizzesChecker;

impl QuizzesChecker {
    fn check_question(
        quiz_name: &str,
        index: usize,
        question: &serde_json::Value,
        report: &mut ValidationReport,
    ) {
        let mut complete = true;
        for field in ["type", "question"] {
            if question.get(field).is_none() {
                report.error(format!(
                    "Question {} in '{}' is missing required field '{}'",
                    index, quiz_name, field
                ));
                complete = false;
            }
        }
        if !complete {
            return;
        }

        let Some(type_str) = question.get("type").and_then(|v| v.as_str()) else {
            report.error(format!(
                "Question {} in '{}' has a non-string 'type'",
                index, quiz_name
            ));
            return;
        };

        let Some(question_type) = QuestionType::parse(type_str) else {
            report.error(format!(
                "Question {} in '{}' has unknown type '{}'",
                index, quiz_name, type_str
            ));
            return;
        };

        for field in question_type.required_fields() {
            if question.get(*field).is_none() {
                report.error(format!(
                    "Question {} in '{}' ({}) is missing required field '{}'",
                    index, quiz_name, type_str, field
                ));
            }
        }
    }

    fn check_quiz(quiz_name: &str, quiz: &serde_json::Value, report: &mut ValidationReport) {
        if quiz.get("title").is_none() {
            report.error(format!("Quiz '{}' is missing required field 'title'", quiz_name));
        }
        match quiz.get("questions") {
            None => {
                report.error(format!(
                    "Quiz '{}' is missing required field 'questions'",
                    quiz_name
                ));
            }
            Some(questions) => match questions.as_array() {
                Some(questions) => {
                    for (index, question) in questions.iter().enumerate() {
                        Self::check_question(quiz_name, index, question, report);
                    }
                }
                None => {
                    report.error(format!("Quiz '{}' field 'questions' is not a list", quiz_name));
                }
            },
        }
    }
}

impl Checker for QuizzesChecker {
    fn name(&self) -> &'static str {
        "quizzes"
    }

    fn check(&self, tree: &ModuleTree, report: &mut ValidationReport) -> Result<()> {
        let quizzes_dir = tree.quizzes_dir();
        if !quizzes_dir.is_dir() {
            return Ok(());
        }

        for entry in WalkDir::new(&quizzes_dir).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            if !entry.file_type().is_file() || !is_quiz_file(entry.path()) {
                continue;
            }

            let quiz_name = entry
                .path()
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("quiz")
                .to_string();
            let content = std::fs::read_to_string(entry.path())?;

            match parse_quiz(entry.path(), &content) {
                Ok(quiz) => Self::check_quiz(&quiz_name, &quiz, report),
                Err(reason) => {
                    report.error(format!("Malformed quiz '{}': {}", quiz_name, reason));
                }
            }
        }

        Ok(())
    }
}
