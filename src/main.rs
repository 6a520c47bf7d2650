//! artcp - artifact coordinate resolution and copy tool
//!
//! Resolves a list of artifact coordinates, optionally with their transitive
//! dependencies, against an ordered repository list and copies the resulting
//! files into an output directory under a deterministic naming scheme.

use clap::Parser;

mod cli;
mod commands;
mod coordinate;
mod copier;
mod error;
mod progress;
mod project;
mod repository;
mod resolver;
mod settings;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Copy(args) => commands::copy::run(args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
