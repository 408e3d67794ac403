//! Translation key lookup.

use super::parse_language_arg;
use crate::context::Context;
use crate::error::Result;
use crate::i18n::{resolve_key, MemoryDocument};

/// Look up `key` in the detected language, or in `lang` when given.
///
/// Prints the translation, or the key itself when it has none, the same
/// fallback the site shows.
pub async fn lookup(ctx: &Context, key: &str, lang: Option<&str>) -> Result<()> {
    let mut service = ctx.service(false)?;
    let mut document = MemoryDocument::new();

    match lang {
        Some(code) => {
            let language = parse_language_arg(code)?;
            service.load_language(language, &mut document).await?;
        }
        None => {
            service.start(&mut document).await?;
        }
    }

    if resolve_key(service.active_bundle(), key).is_none() {
        ctx.output.warn(&format!("No '{}' translation for '{}'", service.language(), key));
    }

    ctx.output.scalar("value", &service.t(key))
}
