//! Quiz configuration.

use std::path::PathBuf;

use crate::QuizError;

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.txt";
pub const DEFAULT_ANSWERS_PATH: &str = "answers.txt";
pub const DEFAULT_MIN: u32 = 1;
pub const DEFAULT_MAX: u32 = 20;

/// Where the question bank lives and which question numbers it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub questions_path: PathBuf,
    pub answers_path: PathBuf,
    /// First question number in the pool (inclusive, 1-based).
    pub min: u32,
    /// Last question number in the pool (inclusive). Also the largest count a user may request.
    pub max: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_path: PathBuf::from(DEFAULT_QUESTIONS_PATH),
            answers_path: PathBuf::from(DEFAULT_ANSWERS_PATH),
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl QuizConfig {
    /// Check that the question range is non-empty and 1-based.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.min == 0 || self.min > self.max {
            return Err(QuizError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Number of questions in the pool.
    pub fn pool_size(&self) -> u32 {
        if self.min > self.max {
            0
        } else {
            self.max - self.min + 1
        }
    }
}
