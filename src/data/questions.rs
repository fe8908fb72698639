//! Positional question lookup.
//!
//! Questions are stored as blocks of one numbered prompt line followed by four
//! option lines. A question is identified by its position in the file, not by
//! the number written in front of it.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::models::{Question, OPTIONS_PER_QUESTION};
use crate::QuizError;

use super::line::is_header;

/// Reads individual questions from the question file on demand.
#[derive(Debug, Clone)]
pub struct QuestionReader {
    path: PathBuf,
}

impl QuestionReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fetch the `number`th question (1-based).
    ///
    /// The file is opened and scanned on every call and closed before this
    /// returns. `Ok(None)` means the file holds fewer than `number` questions.
    pub fn fetch(&self, number: u32) -> Result<Option<Question>, QuizError> {
        let access_error = |source| QuizError::QuestionFile {
            path: self.path.clone(),
            source,
        };

        let file = File::open(&self.path).map_err(access_error)?;
        find_question(BufReader::new(file), number).map_err(access_error)
    }
}

/// Scan `reader` for the `number`th question block.
pub fn find_question<R: BufRead>(reader: R, number: u32) -> io::Result<Option<Question>> {
    let mut lines = reader.lines();
    let mut current = 0u32;

    while let Some(line) = lines.next() {
        let line = line?;
        if !is_header(&line) {
            continue;
        }

        current += 1;
        if current == number {
            let mut options = Vec::with_capacity(OPTIONS_PER_QUESTION);
            for option in lines.by_ref().take(OPTIONS_PER_QUESTION) {
                options.push(option?);
            }
            return Ok(Some(Question {
                number,
                prompt: line,
                options,
            }));
        }

        // The rest of a block belongs to its header, whatever it looks like.
        for skipped in lines.by_ref().take(OPTIONS_PER_QUESTION) {
            skipped?;
        }
    }

    Ok(None)
}
