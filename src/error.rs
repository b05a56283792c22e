use std::io;

use thiserror::Error;

use crate::data::LoadError;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),

    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Submit was pressed with no option chosen.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Please select an option before proceeding!")]
pub struct NoSelectionError;
