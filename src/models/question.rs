/// Number of option lines that follow each question prompt.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A single multiple-choice question as read from the question file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// 1-based position in the question file.
    pub number: u32,
    pub prompt: String,
    /// Up to [`OPTIONS_PER_QUESTION`] lines; fewer if the file ends early.
    pub options: Vec<String>,
}
