//! The mdp command-line executable.

use std::io;

use clap::Parser;

use mdp::cli::Cli;
use mdp::Options;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = Options::from(Cli::parse());

    mdp::run(&options, &mut io::stdout())
}
