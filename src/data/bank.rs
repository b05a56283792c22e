use crate::models::{Question, QuestionBank};

pub fn builtin_questions() -> Vec<Question> {
    vec![
        Question::new(
            "Who developed the Python language?",
            [
                "Dennis Ritchie",
                "Guido van Rossum",
                "James Gosling",
                "Bjarne Stroustrup",
            ],
            "Guido van Rossum",
        ),
        Question::new(
            "What will be the output of: print(2 ** 3)?",
            ["6", "8", "9", "5"],
            "8",
        ),
        Question::new(
            "What keyword is used to define a function in Python?",
            ["func", "def", "define", "lambda"],
            "def",
        ),
        Question::new(
            "Which of the following is used to take input from the user in Python?",
            ["get()", "input()", "scan()", "read()"],
            "input()",
        ),
        Question::new(
            "What does the len() function do in Python?",
            [
                "Returns the type of a variable",
                "Returns the length of an object",
                "Returns the memory size",
                "Returns the sum of numbers",
            ],
            "Returns the length of an object",
        ),
        Question::new(
            "Which one is a mutable data type in Python?",
            ["Tuple", "String", "List", "Integer"],
            "List",
        ),
    ]
}

/// The question bank compiled into the binary.
pub fn builtin_bank() -> QuestionBank {
    match QuestionBank::new(builtin_questions()) {
        Ok(bank) => bank,
        Err(err) => unreachable!("built-in question bank is invalid: {err}"),
    }
}
