use crate::parse::SignalPolicy;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sigmap")]
#[command(about = "Signal flow and module dependency analyzer for requirements documents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive the module dependency graph from signal declarations
    Analyze {
        /// Directory containing the requirement documents
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Restrict the edge view to signals consumed by exactly one module
        #[arg(long)]
        singular: bool,

        /// Persist the fact tables to a SQLite database (full rebuild)
        #[arg(long)]
        database: Option<PathBuf>,

        /// Signal-case policy override (default from config)
        #[arg(long, value_enum)]
        policy: Option<SignalPolicy>,

        /// Configuration file (defaults to ./sigmap.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Flat census of every bracketed token, regardless of position
    Census {
        /// Directory containing the requirement documents
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: CensusFormat,

        /// Configuration file (defaults to ./sigmap.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Create a default sigmap.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary
    Terminal,
    /// Full report as JSON
    Json,
    /// Pivot-table rows: HLR_Out,HLR_In,Signals
    Csv,
    /// Graphviz digraph with weight labels
    Dot,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Csv => crate::io::OutputFormat::Csv,
            OutputFormat::Dot => crate::io::OutputFormat::Dot,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum CensusFormat {
    Terminal,
    Json,
}
