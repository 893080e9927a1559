mod advance;
mod classify;
mod cli;

use gilded_rose::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
