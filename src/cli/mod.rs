//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - copy: Copy command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod copy;

pub use completions::CompletionsArgs;
pub use copy::CopyArgs;

/// artcp - artifact coordinate resolution and copy tool
#[derive(Parser, Debug)]
#[command(
    name = "artcp",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve artifact coordinates and copy the artifacts into a directory",
    long_about = "artcp resolves a list of artifact coordinates \
                  (groupId:artifactId:version[:type[:classifier]]) against an ordered \
                  repository list, optionally with transitive dependencies, and copies \
                  the resulting files into an output directory.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  artcp copy org.example:foo:1.0 -o out              \x1b[90m# Copy one artifact and its dependencies\x1b[0m\n   \
                  artcp copy org.example:foo:1.0 --transitive false  \x1b[90m# Copy only the artifact itself\x1b[0m\n   \
                  artcp copy g:a:1.0 --remote-repositories central::default::file:///srv/repo\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve coordinates and copy the artifacts
    Copy(CopyArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_copy() {
        let cli = Cli::try_parse_from(["artcp", "copy", "org.example:foo:1.0"]).unwrap();
        match cli.command {
            Commands::Copy(args) => {
                assert_eq!(args.artifacts, vec!["org.example:foo:1.0"]);
            }
            _ => panic!("Expected Copy command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["artcp", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["artcp", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_global_verbose() {
        let cli = Cli::try_parse_from(["artcp", "-v", "copy", "a:b:1"]).unwrap();
        assert!(cli.verbose);
    }
}
