//! CLI entry point for the word search puzzle generator

use clap::Parser;
use wordsearch::io::cli::{Cli, run};

fn main() -> wordsearch::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    run(&cli)
}
