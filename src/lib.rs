//! # quiz-runner
//!
//! An interactive multiple-choice quiz for the terminal. Questions and the
//! answer key are read from two plain text files:
//!
//! ```text
//! questions.txt            answers.txt
//! 1. What is 2 + 2?        1. B) 4
//! A) 3                     2. D) Paris
//! B) 4
//! C) 5
//! D) 22
//! 2. Capital of France?
//! ...
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::io;
//!
//! use quiz_runner::{Console, Quiz, QuizConfig, QuizError, Theme};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::from_config(QuizConfig::default())?;
//!
//!     let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), Theme::plain());
//!     let stats = quiz.play(&mut console)?;
//!     println!("{} of {} correct", stats.correct, stats.attempted);
//!
//!     Ok(())
//! }
//! ```

mod config;
mod console;
mod data;
mod models;
mod selector;
mod session;
pub mod ui;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use rand::Rng;
use thiserror::Error;

pub use config::{QuizConfig, DEFAULT_ANSWERS_PATH, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_QUESTIONS_PATH};
pub use console::Console;
pub use data::{
    classify, find_question, is_header, is_match, normalize_response, AnswerStore, LineKind,
    QuestionReader,
};
pub use models::{Question, SessionStats, OPTIONS_PER_QUESTION};
pub use selector::QuestionSelector;
pub use session::{parse_count, prompt_question_count, CountError, QuizSession};
pub use ui::Theme;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The answer key could not be opened or read.
    #[error("failed to read answer file {}: {source}", .path.display())]
    AnswerFile { path: PathBuf, source: io::Error },

    /// The question file could not be opened or read.
    #[error("failed to read question file {}: {source}", .path.display())]
    QuestionFile { path: PathBuf, source: io::Error },

    /// The answer key contained no numbered entries.
    #[error("answer file {} contains no answers", .path.display())]
    EmptyAnswerKey { path: PathBuf },

    /// The configured question range is empty or starts at zero.
    #[error("invalid question range {min}-{max}: expected 1 <= min <= max")]
    InvalidRange { min: u32, max: u32 },

    /// Input ended before a question count was entered.
    #[error("input closed before a question count was entered")]
    InputClosed,

    #[error("failed to encode summary: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A question bank with its answer key loaded, ready to play.
pub struct Quiz {
    config: QuizConfig,
    answers: AnswerStore,
    reader: QuestionReader,
}

impl Quiz {
    /// Validate the configuration and load the answer key.
    ///
    /// The question file is not touched here; it is read once per question
    /// during play.
    pub fn from_config(config: QuizConfig) -> Result<Self, QuizError> {
        config.validate()?;
        let answers = AnswerStore::load(&config.answers_path)?;
        let reader = QuestionReader::new(&config.questions_path);

        Ok(Self {
            config,
            answers,
            reader,
        })
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    /// Greet the user, ask how many questions to play, and run the session
    /// with questions drawn using system entropy.
    pub fn play<I: BufRead, O: Write>(
        &self,
        console: &mut Console<I, O>,
    ) -> Result<SessionStats, QuizError> {
        let selector = QuestionSelector::new(self.config.min, self.config.max);
        self.play_with(console, selector)
    }

    /// Like [`Quiz::play`], drawing questions from the given random source.
    pub fn play_with_rng<I: BufRead, O: Write, R: Rng>(
        &self,
        console: &mut Console<I, O>,
        rng: R,
    ) -> Result<SessionStats, QuizError> {
        let selector = QuestionSelector::with_rng(self.config.min, self.config.max, rng);
        self.play_with(console, selector)
    }

    fn play_with<I: BufRead, O: Write, R: Rng>(
        &self,
        console: &mut Console<I, O>,
        selector: QuestionSelector<R>,
    ) -> Result<SessionStats, QuizError> {
        let theme = console.theme();
        console.print(&ui::welcome::banner(&self.config, &theme))?;

        let target = prompt_question_count(console, self.config.max)?;
        tracing::debug!(target, pool = self.config.pool_size(), "question count accepted");
        console.print(&ui::welcome::start(target, &theme))?;

        QuizSession::new(&self.answers, &self.reader, selector).run(target, console)
    }
}
