pub mod generate;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use nbrmap_common::config::{Config, DEFAULT_OUTPUT};

const EXAMPLES: &str = "\
Examples:
  nbrmap network_data.csv
  nbrmap network_data.csv -o diagram.md
  nbrmap network_data.csv --no-save

View the generated diagram at: https://mermaid.live";

#[derive(Parser, Debug)]
#[command(name = "nbrmap", version)]
#[command(about = "Generate Mermaid network diagrams from CSV neighbor-discovery dumps.")]
#[command(after_help = EXAMPLES)]
pub struct CommandLine {
    /// Path to the input CSV file
    pub csv_file: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Only print to console, do not save to file
    #[arg(long)]
    pub no_save: bool,

    /// Less console output; -qq prints the bare diagram
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// More diagnostics on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            input: self.csv_file.clone(),
            output: (!self.no_save).then(|| self.output.clone()),
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}
