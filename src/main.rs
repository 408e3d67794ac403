//! DevCloud i18n CLI
//!
//! Command-line front end for the DevCloud site translation service.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match devcloud_i18n::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Don't print if it's an empty error (e.g., from clap usage errors)
            let msg = e.to_string();
            if !msg.is_empty() {
                eprintln!("Error: {}", e);
            }

            let code = e.exit_code();
            ExitCode::from(code as u8)
        }
    }
}
