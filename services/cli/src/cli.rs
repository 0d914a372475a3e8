use crate::commands::{
    file_service, run_archetypes, run_compat, run_results, run_score, ArchetypesArgs, CompatArgs,
    ResultsArgs, ScoreArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::infra::{load_bank, JsonFileStore};
use clap::{Parser, Subcommand};
use spectrum_quiz::config::AppConfig;
use spectrum_quiz::error::AppError;
use spectrum_quiz::telemetry;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "spectrum-quiz",
    about = "Score spectrum quiz responses, classify archetypes, and explore compatibility",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a file of responses and print the resulting report
    Score(ScoreArgs),
    /// List the 27 archetypes with their coordinate ranges
    Archetypes(ArchetypesArgs),
    /// Score compatibility between two positions, or against every archetype
    Compat(CompatArgs),
    /// Show the stored result for a question set
    Results(ResultsArgs),
    /// Walk a scripted respondent through a full session (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));
    let default_version = config.quiz.default_version;

    match command {
        Command::Archetypes(args) => run_archetypes(args),
        Command::Compat(args) => run_compat(args),
        Command::Demo(args) => {
            let bank = Arc::new(load_bank(&config)?);
            run_demo(args, default_version, bank)
        }
        Command::Score(args) => {
            let service = file_service(Arc::new(load_bank(&config)?), store(&config));
            run_score(args, default_version, &service)
        }
        Command::Results(args) => {
            let service = file_service(Arc::new(load_bank(&config)?), store(&config));
            run_results(args, default_version, &service)
        }
    }
}

fn store(config: &AppConfig) -> JsonFileStore {
    info!(
        ?config.environment,
        data_dir = %config.storage.data_dir.display(),
        "using file-backed quiz store"
    );
    JsonFileStore::new(&config.storage.data_dir)
}
