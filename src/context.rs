//! Execution context shared by all commands.

use crate::config::Config;
use crate::error::Result;
use crate::i18n::{
    locales, AnyBundleSource, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore,
    TranslationService, LANGUAGE_KEY,
};
use crate::output::Output;

/// The translation service as wired up by the CLI.
pub type SiteService = TranslationService<AnyBundleSource, Box<dyn PreferenceStore>>;

/// Context for CLI command execution.
///
/// Contains everything needed to execute CLI commands:
/// - Configuration (with CLI overrides applied)
/// - Output configuration
pub struct Context {
    /// Effective configuration.
    pub config: Config,

    /// Output configuration.
    pub output: Output,
}

impl Context {
    /// Create a new context from CLI options, layered over the loaded config.
    pub fn new(
        bundles: Option<String>,
        output_format: Option<&str>,
        color: Option<&str>,
        quiet: bool,
    ) -> Result<Self> {
        Self::with_config(Config::load()?, bundles, output_format, color, quiet)
    }

    /// Create a context from an already loaded config. Flags that were
    /// given override the config; the rest fall back to it.
    pub fn with_config(
        mut config: Config,
        bundles: Option<String>,
        output_format: Option<&str>,
        color: Option<&str>,
        quiet: bool,
    ) -> Result<Self> {
        if bundles.is_some() {
            config.bundles = bundles;
        }

        let output = Output::from_cli(
            output_format.unwrap_or(&config.output.format),
            color.unwrap_or(&config.output.color),
            quiet,
        )?;

        Ok(Self { config, output })
    }

    /// Bundle source for the configured location.
    pub fn bundle_source(&self) -> Result<AnyBundleSource> {
        AnyBundleSource::from_location(
            self.config.bundles_or_default(),
            self.config.fetch_timeout(),
        )
    }

    /// The persistent preference store, if a state directory is available.
    pub fn preferences(&self) -> Result<Option<FilePreferenceStore>> {
        Config::preferences_path().map(FilePreferenceStore::open).transpose()
    }

    /// Build the translation service, starting in the detected language.
    ///
    /// With `persist` unset, language changes are kept in memory only; the
    /// saved preference is still read for detection.
    pub fn service(&self, persist: bool) -> Result<SiteService> {
        let store: Box<dyn PreferenceStore> = match (self.preferences()?, persist) {
            (Some(file), true) => Box::new(file),
            (Some(file), false) => Box::new(match file.get(LANGUAGE_KEY) {
                Some(code) => MemoryPreferenceStore::with_language(code),
                None => MemoryPreferenceStore::new(),
            }),
            (None, _) => {
                tracing::warn!(
                    "No state directory available; language preference will not be saved"
                );
                Box::new(MemoryPreferenceStore::new())
            }
        };

        let hint = locales::detect_locale();
        Ok(TranslationService::detect(
            self.bundle_source()?,
            store,
            hint.as_deref(),
            self.config.fallback_language(),
        ))
    }
}
