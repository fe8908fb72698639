use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use quiz_runner::ui::result;
use quiz_runner::{
    Console, Quiz, QuizConfig, QuizError, Theme, DEFAULT_ANSWERS_PATH, DEFAULT_MAX, DEFAULT_MIN,
    DEFAULT_QUESTIONS_PATH,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Interactive multiple-choice quiz runner", long_about = None)]
struct Args {
    /// Question file: numbered prompts, each followed by four option lines
    #[arg(long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Answer key: one "<number>. <answer>" line per question
    #[arg(long, default_value = DEFAULT_ANSWERS_PATH)]
    answers: PathBuf,

    /// First question number in the pool
    #[arg(long, default_value_t = DEFAULT_MIN)]
    min: u32,

    /// Last question number in the pool
    #[arg(long, default_value_t = DEFAULT_MAX)]
    max: u32,

    /// Print the final summary as JSON instead of the score report
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log session events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let directive = if verbose {
        "quiz_runner=debug"
    } else {
        "quiz_runner=warn"
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .init();
}

fn run(args: Args) -> Result<(), QuizError> {
    let config = QuizConfig {
        questions_path: args.questions,
        answers_path: args.answers,
        min: args.min,
        max: args.max,
    };
    let quiz = Quiz::from_config(config)?;

    let theme = Theme::detect(args.no_color);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), theme);
    let stats = quiz.play(&mut console)?;

    if args.json {
        console.println(&serde_json::to_string_pretty(&result::summary(&stats))?)?;
    } else {
        console.print(&result::render(&stats, &theme))?;
    }

    Ok(())
}
