//! Headless driver for the Quarterturn move engine.

use clap::Parser;

mod cli;
mod net;

fn main() -> eyre::Result<()> {
    color_eyre::install().expect("error initializing panic handler");
    env_logger::builder().init();

    let args = cli::Args::parse();
    cli::exec(args.subcommand)
}
