use crate::advance::{run_advance, AdvanceArgs};
use crate::classify::{run_classify, ClassifyArgs};
use clap::{Parser, Subcommand};
use gilded_rose::config::AppConfig;
use gilded_rose::error::AppError;
use gilded_rose::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "gilded-rose",
    about = "Age the Gilded Rose inventory by one day",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read an inventory, advance it by one day and print the result
    Advance(AdvanceArgs),
    /// Show how item names are classified
    Classify(ClassifyArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Advance(args) => run_advance(args, &config),
        Command::Classify(args) => run_classify(args),
    }
}
