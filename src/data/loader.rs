use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{BankError, Question, QuestionBank};

/// Failure to load a question bank from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Invalid(#[from] BankError),
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<QuestionBank, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let bank = QuestionBank::new(questions)?;
    tracing::debug!(path = %path.display(), questions = bank.len(), "loaded question bank");
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{TempDir, tempdir};

    fn write_bank(contents: &str) -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("questions.json");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_valid_file() {
        let (_dir, path) = write_bank(
            r#"[{"question": "2 + 2?", "options": ["3", "4", "5", "6"], "answer": "4"}]"#,
        );
        let bank = load_questions_from_json(&path).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank[0].prompt, "2 + 2?");
    }

    #[test]
    fn test_empty_file_rejected() {
        let (_dir, path) = write_bank("[]");
        let err = load_questions_from_json(&path).unwrap_err();
        assert!(matches!(err, LoadError::Invalid(BankError::Empty)));
    }

    #[test]
    fn test_answer_missing_from_options_rejected() {
        let (_dir, path) = write_bank(
            r#"[{"question": "2 + 2?", "options": ["3", "5", "6", "7"], "answer": "4"}]"#,
        );
        let err = load_questions_from_json(&path).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid(BankError::AnswerNotInOptions { index: 0, .. })
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let (_dir, path) = write_bank("{not json");
        let err = load_questions_from_json(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_temp_bank_removed_on_drop() {
        let (dir, path) = write_bank("[]");
        assert!(path.exists());
        drop(dir);
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = load_questions_from_json(&path).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
