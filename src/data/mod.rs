//! Flat-file question bank access.

mod answers;
mod line;
mod questions;

pub use answers::{is_match, normalize_response, AnswerStore};
pub use line::{classify, is_header, LineKind};
pub use questions::{find_question, QuestionReader};
