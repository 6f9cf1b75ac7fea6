use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autotag")]
#[command(author, version, about = "Media metadata lookup and tagging tool")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up metadata for media files and hand it to the tag writer
    Tag {
        /// Media files to tag
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Always ask which match to use when a search is ambiguous
        #[arg(long)]
        manual: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse filenames and show the extracted search key
    Parse {
        /// Filenames to parse
        #[arg(required = true)]
        names: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
