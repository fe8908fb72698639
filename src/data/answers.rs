//! Answer key loading.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::QuizError;

use super::line::{classify, LineKind};

/// Correct answers keyed by question number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    entries: HashMap<u32, String>,
}

impl AnswerStore {
    /// Load the answer key from a file.
    ///
    /// Lines that are not of the form `<number>. <answer>` are ignored. A file
    /// that yields no entries at all is rejected with
    /// [`QuizError::EmptyAnswerKey`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let path = path.as_ref();
        let access_error = |source| QuizError::AnswerFile {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(access_error)?;
        let store = Self::from_reader(BufReader::new(file)).map_err(access_error)?;

        if store.is_empty() {
            return Err(QuizError::EmptyAnswerKey {
                path: path.to_path_buf(),
            });
        }

        tracing::info!(path = %path.display(), entries = store.len(), "loaded answer key");
        Ok(store)
    }

    /// Parse an answer key from any buffered reader. Duplicate numbers keep the last entry.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut entries = HashMap::new();

        for line in reader.lines() {
            let line = line?;
            if let LineKind::QuestionHeader {
                number: Some(number),
                text,
            } = classify(&line)
            {
                entries.insert(number, text.to_string());
            }
        }

        Ok(Self { entries })
    }

    /// The correct answer for a question, if one is on record.
    pub fn get(&self, number: u32) -> Option<&str> {
        self.entries.get(&number).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalize a raw response line for comparison.
pub fn normalize_response(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Lenient answer check: the normalized response only has to appear somewhere
/// in the uppercased answer text, so "B" and "PARIS" both match "B) Paris".
pub fn is_match(expected: &str, response: &str) -> bool {
    expected.to_uppercase().contains(response)
}
