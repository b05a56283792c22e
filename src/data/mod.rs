mod bank;
mod loader;

pub use bank::{builtin_bank, builtin_questions};
pub use loader::{LoadError, load_questions_from_json};
