use crossterm::style::Color;

use crate::config::QuizConfig;

use super::Theme;

pub fn banner(config: &QuizConfig, theme: &Theme) -> String {
    format!(
        "{}\nAvailable questions: {}-{} ({} in the pool)\n",
        theme.paint("🎯 Welcome to the Quiz Runner! 🎯", Color::Cyan),
        config.min,
        config.max,
        config.pool_size()
    )
}

pub fn count_prompt(max: u32) -> String {
    format!("How many questions would you like to play? (1-{}): ", max)
}

pub fn start(target: u32, theme: &Theme) -> String {
    let noun = if target == 1 { "question" } else { "questions" };
    format!(
        "{}\n\n",
        theme.paint(
            &format!("🚀 Great! You'll play {} {}. Let's start!", target, noun),
            Color::Green
        )
    )
}
