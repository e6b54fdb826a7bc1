use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dualize")]
#[command(about = "Derives the categorical dual of an interface declaration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dualize a parsed declaration tree (JSON in, JSON out)
    Dualize {
        /// Path to the declaration tree JSON (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Override for the dual interface name
        #[arg(long = "dual-name")]
        dual_name: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the generated JSON
        #[arg(long)]
        pretty: bool,

        /// Synthesize internal names for parameters derived from tuple
        /// elements
        #[arg(long = "name-parameters")]
        name_parameters: bool,
    },
}
