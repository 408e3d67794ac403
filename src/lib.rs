//! DevCloud i18n Library
//!
//! Localization for the DevCloud corporate site: one JSON translation
//! bundle per language (English, French, Arabic), a translation service
//! that switches languages and caches bundles, and a document adapter the
//! service patches (content, placeholders, attributes, title, direction
//! and the language switcher).
//!
//! ## Usage
//!
//! The `devcloud-i18n` binary drives the service from a terminal:
//!
//! ```bash
//! devcloud-i18n detect                          # Language the site starts in
//! devcloud-i18n lookup contact.form_sent -l fr  # Look up a key
//! devcloud-i18n switch ar                       # Remember a language choice
//! devcloud-i18n apply page.json --lang ar       # Translate a page snapshot
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod i18n;
pub mod output;

pub use cli::Cli;
pub use error::{Error, Result};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the CLI with the given arguments.
///
/// This is the main entry point for the CLI, parsing arguments and
/// dispatching to the appropriate command handler.
pub async fn run(args: Vec<String>) -> Result<()> {
    use clap::Parser;

    let cli_args = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            // Print clap error (includes help/version)
            e.print().ok();
            use clap::error::ErrorKind;
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return Ok(()),
                _ => return Err(Error::other("")),
            }
        }
    };

    if cli_args.debug {
        init_logging();
    }

    let ctx = context::Context::new(
        cli_args.bundles,
        cli_args.output.as_deref(),
        cli_args.color.as_deref(),
        cli_args.quiet,
    )?;

    commands::execute(&ctx, &cli_args.command).await
}

/// Initialize tracing/logging for debug mode.
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("devcloud_i18n=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
