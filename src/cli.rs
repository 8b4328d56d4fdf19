//! CLI definitions for framescope.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use framescope_config::OutputFormat;

/// framescope CLI.
#[derive(Parser)]
#[command(name = "framescope")]
#[command(about = "Extract and validate frame cards from HTML meta declarations")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.framescope/config.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Extract a frame and print it
    Extract {
        /// HTML file to read ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        /// Page URL, used as the post target when the page declares none
        #[arg(short, long, env = "FRAMESCOPE_URL")]
        url: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Report whether a document encodes a valid frame
    Check {
        /// HTML file to read ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        /// Page URL, used as the post target when the page declares none
        #[arg(short, long, env = "FRAMESCOPE_URL")]
        url: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArg {
    Json,
    Html,
    Flat,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Flat => OutputFormat::Flat,
        }
    }
}
