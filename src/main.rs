use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use python_quiz::Quiz;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from (defaults to the built-in bank)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// How long answer feedback is shown, in milliseconds
    #[arg(long, default_value_t = 1200)]
    delay_ms: u64,

    /// Write logs to this file; the terminal is taken over by the quiz
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(args: &Args) -> std::io::Result<Option<WorkerGuard>> {
    let Some(path) = &args.log_file else {
        return Ok(None);
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match args.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let (writer, guard) = tracing_appender::non_blocking(File::create(path)?);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn main() {
    let args = Args::parse();

    let guard = match init_logging(&args) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error opening log file: {}", e);
            std::process::exit(1);
        }
    };

    let quiz = match &args.questions {
        Some(path) => match Quiz::from_json(path) {
            Ok(quiz) => quiz,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => Quiz::builtin(),
    };
    let quiz = quiz.with_feedback_delay(Duration::from_millis(args.delay_ms));

    tracing::info!(questions = quiz.bank().len(), "starting quiz");
    if let Err(e) = quiz.run() {
        tracing::error!(error = %e, "quiz aborted");
        eprintln!("Error running quiz: {}", e);
        drop(guard);
        std::process::exit(1);
    }
}
