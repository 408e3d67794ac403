//! Command implementations for the DevCloud i18n tool.
//!
//! Each submodule implements a group of related commands.

mod apply;
mod language;
mod lookup;

pub use apply::apply;
pub use language::{detect, languages, switch};
pub use lookup::lookup;

use crate::cli::{Commands, Shell};
use crate::context::Context;
use crate::error::Result;
use crate::i18n::Language;

/// Execute a CLI command.
pub async fn execute(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::Detect => detect(ctx).await,
        Commands::Languages => languages(ctx).await,
        Commands::Lookup { key, lang } => lookup(ctx, key, lang.as_deref()).await,
        Commands::Switch { lang } => switch(ctx, lang).await,
        Commands::Apply { page, lang, out } => {
            apply(ctx, page, lang.as_deref(), out.as_deref()).await
        }
        Commands::Completions { shell } => completion(shell),
    }
}

/// Parse a language given on the command line.
///
/// Unlike the site's switcher, an explicit argument naming an unsupported
/// language is an error rather than a silent no-op.
fn parse_language_arg(code: &str) -> Result<Language> {
    Language::from_code(&code.to_ascii_lowercase())
}

fn completion(shell: &Shell) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Generator};

    fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
        let name = cmd.get_name().to_string();
        generate(generator, cmd, name, &mut std::io::stdout());
    }

    let mut cmd = crate::cli::Cli::command();

    match shell {
        Shell::Bash => print_completions(clap_complete::shells::Bash, &mut cmd),
        Shell::Zsh => print_completions(clap_complete::shells::Zsh, &mut cmd),
        Shell::Fish => print_completions(clap_complete::shells::Fish, &mut cmd),
        Shell::PowerShell => print_completions(clap_complete::shells::PowerShell, &mut cmd),
    }

    Ok(())
}
