//! Final score report.

use std::fmt;

use crossterm::style::Color;
use serde::Serialize;
use uuid::Uuid;

use crate::models::SessionStats;

use super::Theme;

/// Number of cells in the score bar.
pub const BAR_LENGTH: usize = 30;

const BANNER_WIDTH: usize = 60;
const BOX_WIDTH: usize = 54;

/// Grade tier derived from the score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Map a percentage to its tier. Thresholds are inclusive lower bounds.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::APlus
        } else if percentage >= 80.0 {
            Grade::A
        } else if percentage >= 70.0 {
            Grade::B
        } else if percentage >= 60.0 {
            Grade::C
        } else {
            Grade::D
        }
    }

    pub fn letter(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Grade::APlus => "Outstanding",
            Grade::A => "Excellent",
            Grade::B => "Good",
            Grade::C => "Fair",
            Grade::D => "Study More",
        }
    }

    /// Headline and two lines of encouragement for the performance box.
    fn messages(&self) -> [&'static str; 3] {
        match self {
            Grade::APlus => [
                "CONGRATULATIONS!",
                "QUIZ CHAMPION!",
                "Absolutely phenomenal work!",
            ],
            Grade::A => [
                "WELL DONE!",
                "Great performance!",
                "Keep up the great work!",
            ],
            Grade::B => ["GOOD JOB!", "Nice progress!", "You're doing well!"],
            Grade::C => ["KEEP GOING!", "Keep practicing!", "You're improving!"],
            Grade::D => [
                "DON'T GIVE UP!",
                "Practice makes perfect!",
                "Keep learning and grow!",
            ],
        }
    }

    fn color(&self) -> Color {
        match self {
            Grade::APlus | Grade::A => Color::Green,
            Grade::B => Color::Cyan,
            Grade::C => Color::Yellow,
            Grade::D => Color::Red,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.letter(), self.title())
    }
}

/// Machine-readable session result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub session_id: Uuid,
    pub requested: u32,
    pub attempted: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub percentage: Option<f64>,
    pub grade: Option<Grade>,
}

pub fn summary(stats: &SessionStats) -> ReportSummary {
    let percentage = stats.percentage();
    ReportSummary {
        session_id: stats.id,
        requested: stats.target,
        attempted: stats.attempted,
        correct: stats.correct,
        incorrect: stats.incorrect,
        percentage,
        grade: percentage.map(Grade::from_percentage),
    }
}

/// Number of filled bar cells for a percentage, rounded down.
pub fn filled_units(percentage: f64) -> usize {
    let filled = (percentage / 100.0 * BAR_LENGTH as f64).floor();
    (filled as usize).min(BAR_LENGTH)
}

pub fn progress_bar(percentage: f64) -> String {
    let filled = filled_units(percentage);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_LENGTH - filled))
}

/// Render the full end-of-quiz report.
pub fn render(stats: &SessionStats, theme: &Theme) -> String {
    let mut lines = vec![String::new(), String::new()];
    lines.extend(banner("FINAL QUIZ RESULTS", theme));
    lines.push(String::new());

    match stats.percentage() {
        Some(percentage) => {
            lines.extend(score_box(stats, percentage));
            lines.push(String::new());

            let grade = Grade::from_percentage(percentage);
            lines.extend(
                performance_box(grade)
                    .iter()
                    .map(|line| theme.paint(line, grade.color())),
            );
        }
        None => lines.extend(boxed(
            "",
            &["", "No questions attempted.", "Better luck next time!", ""],
        )),
    }

    lines.push(String::new());
    lines.extend(banner("Thanks for playing! Come back soon!", theme));
    lines.push(String::new());

    lines.join("\n")
}

fn score_box(stats: &SessionStats, percentage: f64) -> Vec<String> {
    let attempted = format!("Total Questions Attempted:  {}", stats.attempted);
    let correct = format!("Correct Answers:            {}", stats.correct);
    let incorrect = format!("Wrong Answers:              {}", stats.incorrect);
    let score = format!("Score Percentage:           {:.1}%", percentage);
    let bar = format!("Progress: [{}]", progress_bar(percentage));

    boxed(
        " SCORE SUMMARY ",
        &[
            "",
            &attempted,
            &correct,
            &incorrect,
            "",
            &score,
            "",
            &bar,
            "",
        ],
    )
}

fn performance_box(grade: Grade) -> Vec<String> {
    let [headline, first, second] = grade.messages();
    let grade_line = format!("Grade: {}", grade);

    boxed(
        " PERFORMANCE ",
        &[headline, "", &grade_line, first, "", second, ""],
    )
}

/// Centered rows inside a single-line box of `BOX_WIDTH` inner columns.
fn boxed(title: &str, rows: &[&str]) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!("┌{}┐", center(title, BOX_WIDTH, '─')));
    lines.extend(
        rows.iter()
            .map(|row| format!("│{}│", center(row, BOX_WIDTH, ' '))),
    );
    lines.push(format!("└{}┘", "─".repeat(BOX_WIDTH)));
    lines
}

fn banner(text: &str, theme: &Theme) -> Vec<String> {
    vec![
        format!("╔{}╗", "═".repeat(BANNER_WIDTH)),
        format!(
            "║{}║",
            theme.bold(&center(text, BANNER_WIDTH, ' '))
        ),
        format!("╚{}╝", "═".repeat(BANNER_WIDTH)),
    ]
}

// Counts chars, so callers stick to single-column glyphs.
fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let left = (width - len) / 2;
    let right = width - len - left;
    let fill = fill.to_string();
    format!("{}{}{}", fill.repeat(left), text, fill.repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(correct: u32, incorrect: u32) -> SessionStats {
        let mut stats = SessionStats::new(correct + incorrect);
        for _ in 0..correct {
            stats.record(true);
        }
        for _ in 0..incorrect {
            stats.record(false);
        }
        stats
    }

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_percentage(100.0), Grade::APlus);
        assert_eq!(Grade::from_percentage(90.0), Grade::APlus);
        assert_eq!(Grade::from_percentage(89.9), Grade::A);
        assert_eq!(Grade::from_percentage(80.0), Grade::A);
        assert_eq!(Grade::from_percentage(75.0), Grade::B);
        assert_eq!(Grade::from_percentage(70.0), Grade::B);
        assert_eq!(Grade::from_percentage(60.0), Grade::C);
        assert_eq!(Grade::from_percentage(59.9), Grade::D);
        assert_eq!(Grade::from_percentage(0.0), Grade::D);
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(Grade::APlus.to_string(), "A+ / Outstanding");
        assert_eq!(Grade::D.to_string(), "D / Study More");
    }

    #[test]
    fn test_filled_units() {
        assert_eq!(filled_units(50.0), 15);
        assert_eq!(filled_units(100.0), 30);
        assert_eq!(filled_units(0.0), 0);
        assert_eq!(filled_units(66.7), 20);
        assert_eq!(filled_units(99.9), 29);
    }

    #[test]
    fn test_progress_bar_length() {
        let bar = progress_bar(50.0);
        assert_eq!(bar.chars().count(), BAR_LENGTH);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 15);
    }

    #[test]
    fn test_render_three_of_four() {
        let report = render(&stats(3, 1), &Theme::plain());

        assert!(report.contains("Total Questions Attempted:  4"));
        assert!(report.contains("Correct Answers:            3"));
        assert!(report.contains("Wrong Answers:              1"));
        assert!(report.contains("75.0%"));
        assert!(report.contains("Grade: B / Good"));
        assert!(report.contains("GOOD JOB!"));
    }

    #[test]
    fn test_render_nothing_attempted() {
        let report = render(&SessionStats::new(5), &Theme::plain());

        assert!(report.contains("No questions attempted."));
        assert!(!report.contains("SCORE SUMMARY"));
        assert!(!report.contains("Grade:"));
    }

    #[test]
    fn test_boxes_are_aligned() {
        let report = render(&stats(9, 1), &Theme::plain());

        for line in report.lines() {
            let width = line.chars().count();
            if line.starts_with('│') || line.starts_with('┌') || line.starts_with('└') {
                assert_eq!(width, BOX_WIDTH + 2, "misaligned: {line}");
            }
            if line.starts_with('║') || line.starts_with('╔') || line.starts_with('╚') {
                assert_eq!(width, BANNER_WIDTH + 2, "misaligned: {line}");
            }
        }
    }

    #[test]
    fn test_summary() {
        let summary = summary(&stats(3, 1));
        assert_eq!(summary.percentage, Some(75.0));
        assert_eq!(summary.grade, Some(Grade::B));

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"grade\":\"B\""));
        assert!(json.contains("\"attempted\":4"));

        let empty = super::summary(&SessionStats::new(2));
        assert_eq!(empty.percentage, None);
        assert_eq!(empty.grade, None);
    }

    #[test]
    fn test_summary_serializes_a_plus() {
        let json = serde_json::to_string(&summary(&stats(1, 0))).unwrap();
        assert!(json.contains("\"grade\":\"A+\""));
    }
}
