//! Interactive quiz session.

use std::io::{BufRead, Write};

use rand::Rng;
use thiserror::Error;

use crate::console::Console;
use crate::data::{is_match, normalize_response, AnswerStore, QuestionReader};
use crate::models::SessionStats;
use crate::selector::QuestionSelector;
use crate::ui;
use crate::QuizError;

/// Why a requested question count was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CountError {
    #[error("Please enter a valid number!")]
    NotANumber,
    #[error("Please enter a number between 1 and {max}")]
    OutOfRange { max: u32 },
}

/// Parse a requested question count, accepting `1..=max`.
pub fn parse_count(input: &str, max: u32) -> Result<u32, CountError> {
    let count: i64 = input.trim().parse().map_err(|_| CountError::NotANumber)?;

    if count < 1 || count > i64::from(max) {
        return Err(CountError::OutOfRange { max });
    }
    Ok(count as u32)
}

/// Keep prompting until the user enters a count in `1..=max`.
pub fn prompt_question_count<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    max: u32,
) -> Result<u32, QuizError> {
    let theme = console.theme();

    loop {
        console.print(&ui::welcome::count_prompt(max))?;
        let Some(line) = console.read_line()? else {
            return Err(QuizError::InputClosed);
        };

        match parse_count(&line, max) {
            Ok(count) => return Ok(count),
            Err(e) => {
                tracing::debug!(input = line.trim(), error = %e, "rejected question count");
                console.println(&ui::quiz::count_error(&e, &theme))?;
            }
        }
    }
}

/// One pass through the quiz: draw, show, read, score.
pub struct QuizSession<'a, R> {
    answers: &'a AnswerStore,
    reader: &'a QuestionReader,
    selector: QuestionSelector<R>,
}

impl<'a, R: Rng> QuizSession<'a, R> {
    pub fn new(
        answers: &'a AnswerStore,
        reader: &'a QuestionReader,
        selector: QuestionSelector<R>,
    ) -> Self {
        Self {
            answers,
            reader,
            selector,
        }
    }

    /// Ask up to `target` questions and return the final tallies.
    ///
    /// Ends early when the pool runs out or input is closed. Questions that
    /// cannot be read are skipped and do not count as attempted.
    pub fn run<I: BufRead, O: Write>(
        mut self,
        target: u32,
        console: &mut Console<I, O>,
    ) -> Result<SessionStats, QuizError> {
        let theme = console.theme();
        let mut stats = SessionStats::new(target);
        let span = tracing::info_span!("session", id = %stats.id);
        let _enter = span.enter();

        while !stats.is_complete() {
            let Some(number) = self.selector.draw_next() else {
                tracing::info!(attempted = stats.attempted, "question pool exhausted");
                break;
            };
            tracing::debug!(number, remaining = self.selector.remaining(), "drew question");

            let question = match self.reader.fetch(number) {
                Ok(Some(question)) => question,
                Ok(None) => {
                    tracing::warn!(number, path = %self.reader.path().display(), "question not found, skipping");
                    continue;
                }
                Err(e) => {
                    tracing::error!(number, error = %e, "failed to read question");
                    console.println(&ui::quiz::fetch_failure(number, &e, &theme))?;
                    continue;
                }
            };

            console.print(&ui::quiz::question(
                &question,
                stats.attempted + 1,
                target,
                &theme,
            ))?;

            let Some(line) = console.read_line()? else {
                tracing::info!(attempted = stats.attempted, "input closed, ending session");
                console.println("")?;
                break;
            };
            let response = normalize_response(&line);

            let expected = self.answers.get(number);
            if expected.is_none() {
                tracing::warn!(number, "no answer on record");
            }
            let is_correct = expected.is_some_and(|answer| is_match(answer, &response));
            stats.record(is_correct);
            tracing::debug!(number, response = %response, is_correct, "answer recorded");

            if is_correct {
                console.print(&ui::quiz::correct(&theme))?;
            } else {
                console.print(&ui::quiz::incorrect(expected, &theme))?;
            }
        }

        tracing::info!(
            attempted = stats.attempted,
            correct = stats.correct,
            incorrect = stats.incorrect,
            "session finished"
        );
        Ok(stats)
    }
}
