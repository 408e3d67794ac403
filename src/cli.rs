//! Command-line argument parsing and command definitions.
//!
//! Uses clap with derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// DevCloud i18n - site translation tooling
#[derive(Parser, Debug)]
#[command(name = "devcloud-i18n")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Bundle location: base URL or directory containing <lang>.json files
    #[arg(long, global = true, env = "DEVCLOUD_BUNDLES")]
    pub bundles: Option<String>,

    /// Output format [default: table, or `output.format` from config]
    #[arg(short, long, global = true, value_parser = ["table", "json", "yaml"])]
    pub output: Option<String>,

    /// Color output mode [default: auto, or `output.color` from config]
    #[arg(long, global = true, value_parser = ["auto", "always", "never"])]
    pub color: Option<String>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the language the site would start in
    Detect,

    /// List supported languages
    Languages,

    /// Look up a translation key
    Lookup {
        /// Dotted key path (e.g., contact.form_sent)
        key: String,

        /// Language to look up in (defaults to the detected language)
        #[arg(long, short)]
        lang: Option<String>,
    },

    /// Switch the site language and remember the choice
    Switch {
        /// Language code (en, fr, ar)
        lang: String,
    },

    /// Apply translations to a page snapshot (JSON or YAML)
    Apply {
        /// Page snapshot file
        page: PathBuf,

        /// Language to apply (defaults to the detected language)
        #[arg(long, short)]
        lang: Option<String>,

        /// Write the translated snapshot to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
}
