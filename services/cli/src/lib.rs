mod cli;
mod commands;
mod demo;
mod infra;

use spectrum_quiz::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
