use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::types::{OutputFormat, PreviewArg};

/// Find confusingly similar names in the same scope
#[derive(Parser, Debug)]
#[command(name = "namesake")]
#[command(author, version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Reduce the level of "smart" filtering. Can be repeated up to 3 times.
    /// -u: Don't respect .gitignore files
    /// -uu: Don't respect any ignore files (.gitignore, .ignore, .rgignore, .nsignore), include hidden files
    /// -uuu: Same as -uu, plus treat binary files as text
    #[arg(short = 'u', long = "unrestricted", global = true, action = clap::ArgAction::Count, verbatim_doc_comment)]
    pub unrestricted: u8,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan paths and report confusingly similar names in each scope
    Check {
        /// Paths to scan (files or directories). Defaults to current directory
        #[arg(help = "Scan paths (files or directories)")]
        paths: Vec<PathBuf>,

        /// Similarity threshold in (0.0, 1.0]; pairs scoring strictly above it are reported
        #[arg(long, value_name = "SCORE")]
        threshold: Option<f64>,

        /// Skip names shorter than this many characters
        #[arg(long, value_name = "N")]
        min_length: Option<usize>,

        /// Include glob patterns
        #[arg(long, value_delimiter = ',')]
        include: Vec<String>,

        /// Exclude glob patterns
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Preview output format (defaults from config if not specified)
        #[arg(long, value_enum)]
        preview: Option<PreviewArg>,

        /// Use fixed column widths for table output (useful in CI environments or other non-TTY use cases)
        #[arg(long)]
        fixed_table_width: bool,

        /// Write the full report as JSON to this path
        #[arg(long, value_name = "PATH")]
        report_out: Option<PathBuf>,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress all output (alias for --preview none)
        #[arg(long)]
        quiet: bool,
    },

    /// Score one pair of names without scanning anything
    Compare {
        /// First name
        name_a: String,

        /// Second name
        name_b: String,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Write the completion file into this directory instead of stdout
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Print version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}
