use std::ops::Index;
use std::sync::Arc;

use thiserror::Error;

use super::Question;

/// Reasons a list of questions cannot form a bank.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("question bank must contain at least one question")]
    Empty,

    #[error("question {index}: answer {answer:?} is not one of the options")]
    AnswerNotInOptions { index: usize, answer: String },

    #[error("question {index}: options must be distinct")]
    DuplicateOptions { index: usize },
}

/// An immutable, validated sequence of questions.
///
/// Cloning is cheap; every clone shares the same questions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Arc<[Question]>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        for (index, question) in questions.iter().enumerate() {
            if question.has_duplicate_options() {
                return Err(BankError::DuplicateOptions { index });
            }
            if question.correct_index().is_none() {
                return Err(BankError::AnswerNotInOptions {
                    index,
                    answer: question.correct_answer.clone(),
                });
            }
        }

        Ok(Self {
            questions: questions.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; an empty bank cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

impl Index<usize> for QuestionBank {
    type Output = Question;

    fn index(&self, index: usize) -> &Question {
        &self.questions[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(answer: &str) -> Question {
        Question::new("prompt", ["a", "b", "c", "d"], answer)
    }

    #[test]
    fn test_empty_bank_rejected() {
        assert_eq!(QuestionBank::new(Vec::new()).unwrap_err(), BankError::Empty);
    }

    #[test]
    fn test_answer_must_be_an_option() {
        let err = QuestionBank::new(vec![question("a"), question("z")]).unwrap_err();
        assert_eq!(
            err,
            BankError::AnswerNotInOptions {
                index: 1,
                answer: "z".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_options_rejected() {
        let dup = Question::new("prompt", ["a", "a", "c", "d"], "a");
        let err = QuestionBank::new(vec![dup]).unwrap_err();
        assert_eq!(err, BankError::DuplicateOptions { index: 0 });
    }

    #[test]
    fn test_valid_bank() {
        let bank = QuestionBank::new(vec![question("a"), question("d")]).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.last_index(), 1);
        assert_eq!(bank[1].correct_answer, "d");
        assert!(bank.get(2).is_none());
    }
}
