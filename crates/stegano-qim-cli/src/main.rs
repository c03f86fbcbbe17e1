use clap::Parser;
use stegano_qim::{QimError, QimOptions};

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, QimError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = QimOptions::default().with_step(args.quantization_step)?;

    match args.command {
        Commands::Hide(args) => args.run(options),
        Commands::Unveil(args) => args.run(options),
        Commands::Capacity(args) => args.run(),
        Commands::Quality(args) => args.run(),
    }
}
