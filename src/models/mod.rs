mod bank;
mod question;
mod result;

pub use bank::{BankError, QuestionBank};
pub use question::{NUM_OPTIONS, Question};
pub use result::{QuizResult, Remark, percentage};
