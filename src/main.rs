use std::path::PathBuf;
use std::time::Duration;

use capital_quiz::{Quiz, QuizConfig, QuizError, SelectionPolicy, logging, us_states};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Endless draws any region each time; exhaustion ends once every capital is named
    #[arg(short, long, value_enum, default_value_t = SelectionPolicy::UntilExhausted)]
    mode: SelectionPolicy,

    /// JSON file to load the regions from instead of the built-in U.S. states
    #[arg(short, long)]
    facts: Option<PathBuf>,

    /// Milliseconds to show feedback before the next prompt (default depends on mode)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed for reproducible prompt order
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> QuizConfig {
        let config = QuizConfig::for_policy(self.mode).with_seed(self.seed);
        match self.delay_ms {
            Some(ms) => config.with_advance_delay(Duration::from_millis(ms)),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), QuizError> {
    logging::init(args.log_file.as_deref())?;

    let config = args.config();
    let quiz = match &args.facts {
        Some(path) => Quiz::from_json(path, config)?,
        None => Quiz::new(us_states(), config),
    };

    quiz.run().await
}
