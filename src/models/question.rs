use serde::Deserialize;

pub const NUM_OPTIONS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(rename = "question", alias = "prompt")]
    pub prompt: String,
    pub options: [String; NUM_OPTIONS],
    #[serde(rename = "answer", alias = "correct_answer")]
    pub correct_answer: String,
}

impl Question {
    pub fn new(prompt: &str, options: [&str; NUM_OPTIONS], correct_answer: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.map(str::to_string),
            correct_answer: correct_answer.to_string(),
        }
    }

    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }

    /// Position of the correct answer among the options, if present.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_answer)
    }

    pub fn has_duplicate_options(&self) -> bool {
        self.options
            .iter()
            .enumerate()
            .any(|(i, a)| self.options[i + 1..].contains(a))
    }
}
