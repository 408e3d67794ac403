//! Apply translations to a page snapshot.

use std::path::Path;

use super::parse_language_arg;
use crate::context::Context;
use crate::error::Result;
use crate::i18n::{switch_controls, ApplyReport, LoadOutcome, MemoryDocument};

/// Translate the page snapshot at `page` and print (or write) the result.
pub async fn apply(
    ctx: &Context,
    page: &Path,
    lang: Option<&str>,
    out: Option<&Path>,
) -> Result<()> {
    let mut document = MemoryDocument::load(page)?;
    let mut service = ctx.service(false)?;

    let outcome = match lang {
        Some(code) => {
            let language = parse_language_arg(code)?;
            service.load_language(language, &mut document).await?
        }
        None => service.start(&mut document).await?,
    };

    let report = match outcome {
        LoadOutcome::Applied(report) => report,
        LoadOutcome::Stale => ApplyReport::default(),
    };

    match out {
        Some(path) => write_snapshot(path, &document)?,
        None => ctx.output.value(&document)?,
    }

    let controls: Vec<String> =
        switch_controls(&document).iter().map(ToString::to_string).collect();
    ctx.output.success(&format!(
        "Applied '{}': {} translated, {} missing, switcher [{}]",
        service.language(),
        report.translated,
        report.missing,
        controls.join(", ")
    ));
    Ok(())
}

fn write_snapshot(path: &Path, document: &MemoryDocument) -> Result<()> {
    let contents = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => serde_yaml::to_string(document)?,
        _ => serde_json::to_string_pretty(document)?,
    };
    std::fs::write(path, contents)?;
    Ok(())
}
