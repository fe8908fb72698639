mod question;
mod stats;

pub use question::{Question, OPTIONS_PER_QUESTION};
pub use stats::SessionStats;
