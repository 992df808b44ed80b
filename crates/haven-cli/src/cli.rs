use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "haven")]
#[command(about = "Haven mental-health screening (PHQ-9, GAD-7)")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available screening instruments
    List,

    /// Take a screening interactively
    Take {
        /// Instrument id (phq9, gad7)
        instrument: String,
    },

    /// Score a full set of answers without prompting
    Score {
        /// Instrument id (phq9, gad7)
        instrument: String,

        /// One score per question, in order (e.g. 1,2,1,0,1,0,0,0,0)
        #[arg(short, long, required = true, value_delimiter = ',')]
        answers: Vec<u32>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default config file if none exists
    Init,
    /// Print the config file path
    Path,
}
