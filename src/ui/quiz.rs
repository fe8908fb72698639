use crossterm::style::Color;

use crate::models::Question;
use crate::session::CountError;
use crate::QuizError;

use super::Theme;

/// Shown in place of the correct answer when the answer key has no entry.
pub const NOT_FOUND: &str = "[Not found]";

const RULE_WIDTH: usize = 50;

/// Progress header, prompt, options and the answer prompt for one question.
pub fn question(question: &Question, position: u32, target: u32, theme: &Theme) -> String {
    let mut lines = vec![
        theme.paint(
            &format!("📋 Question {} of {}", position, target),
            Color::Cyan,
        ),
        "═".repeat(RULE_WIDTH),
        String::new(),
        theme.bold(&question.prompt),
    ];
    lines.extend(question.options.iter().cloned());
    lines.push(String::new());
    lines.push("Enter your answer (A, B, C, or D): ".to_string());

    lines.join("\n")
}

pub fn correct(theme: &Theme) -> String {
    format!("{}\n\n", theme.paint("✅ Correct!", Color::Green))
}

/// Feedback for a wrong answer, revealing the expected one.
pub fn incorrect(expected: Option<&str>, theme: &Theme) -> String {
    format!(
        "\n{}\nThe correct answer is: {}\n\n",
        theme.paint("❌ Sorry, that's incorrect.", Color::Red),
        expected.unwrap_or(NOT_FOUND)
    )
}

pub fn count_error(error: &CountError, theme: &Theme) -> String {
    theme.paint(&format!("❌ {}", error), Color::Red)
}

pub fn fetch_failure(number: u32, error: &QuizError, theme: &Theme) -> String {
    theme.paint(
        &format!("⚠ Could not load question {}: {}", number, error),
        Color::Yellow,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question {
            number: 4,
            prompt: "4. What is the capital of France?".to_string(),
            options: vec![
                "A) Berlin".to_string(),
                "B) Paris".to_string(),
                "C) Rome".to_string(),
                "D) Madrid".to_string(),
            ],
        }
    }

    #[test]
    fn test_question_layout() {
        let text = question(&sample(), 2, 5, &Theme::plain());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "📋 Question 2 of 5");
        assert_eq!(lines[3], "4. What is the capital of France?");
        assert_eq!(&lines[4..8], ["A) Berlin", "B) Paris", "C) Rome", "D) Madrid"]);
        assert!(text.ends_with("Enter your answer (A, B, C, or D): "));
    }

    #[test]
    fn test_incorrect_reveals_answer() {
        let text = incorrect(Some("B) Paris"), &Theme::plain());
        assert!(text.contains("The correct answer is: B) Paris"));

        let text = incorrect(None, &Theme::plain());
        assert!(text.contains("The correct answer is: [Not found]"));
    }

    #[test]
    fn test_count_errors_are_distinct() {
        let theme = Theme::plain();
        let not_a_number = count_error(&CountError::NotANumber, &theme);
        let out_of_range = count_error(&CountError::OutOfRange { max: 20 }, &theme);

        assert_eq!(not_a_number, "❌ Please enter a valid number!");
        assert_eq!(out_of_range, "❌ Please enter a number between 1 and 20");
    }
}
