//! Bundle sources: where translation bundles are fetched from.
//!
//! Each language has one resource at `<base>/<lang>.json`.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use super::{Language, TranslationBundle};
use crate::error::{Error, Result};

/// Default bundle location, relative to the site root.
pub const DEFAULT_BUNDLE_DIR: &str = "i18n";

/// Fetches and parses the bundle for a language.
pub trait BundleSource {
    /// Fetch the bundle for `language`.
    ///
    /// Unreachable resources, non-success responses and malformed payloads
    /// are all errors.
    fn fetch(&self, language: Language) -> impl Future<Output = Result<TranslationBundle>>;
}

/// Fetches bundles over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpBundleSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpBundleSource {
    /// Create a source rooted at `base` (e.g. `https://devcloud.example/i18n/`).
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let mut base = Url::parse(base)
            .map_err(|e| Error::config(format!("Invalid bundle URL '{}': {}", base, e)))?;

        // Without the trailing slash, joining would replace the last segment
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base })
    }

    /// URL of the bundle for `language`.
    pub fn bundle_url(&self, language: Language) -> Result<Url> {
        self.base
            .join(&language.bundle_file())
            .map_err(|e| Error::config(format!("Invalid bundle URL: {}", e)))
    }
}

impl BundleSource for HttpBundleSource {
    async fn fetch(&self, language: Language) -> Result<TranslationBundle> {
        let url = self.bundle_url(language)?;
        tracing::debug!(%url, "Fetching translation bundle");

        let response =
            self.client.get(url).send().await.map_err(|e| Error::fetch(language, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { language, status: status.as_u16() });
        }

        let body = response.text().await.map_err(|e| Error::fetch(language, e))?;
        TranslationBundle::from_json_str(&body)
    }
}

/// Reads bundles from a local directory.
#[derive(Debug, Clone)]
pub struct DirBundleSource {
    dir: PathBuf,
}

impl DirBundleSource {
    /// Create a source reading `<dir>/<lang>.json`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the bundles are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl BundleSource for DirBundleSource {
    async fn fetch(&self, language: Language) -> Result<TranslationBundle> {
        let path = self.dir.join(language.bundle_file());
        tracing::debug!(path = %path.display(), "Reading translation bundle");

        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::fetch(language, format!("{}: {}", path.display(), e)))?;
        TranslationBundle::from_json_str(&contents)
    }
}

/// A bundle source chosen at runtime from configuration.
#[derive(Debug, Clone)]
pub enum AnyBundleSource {
    /// Remote bundles.
    Http(HttpBundleSource),
    /// Local bundles.
    Dir(DirBundleSource),
}

impl AnyBundleSource {
    /// Pick a source from a location string: `http(s)://` URLs are fetched
    /// remotely, anything else is treated as a directory.
    pub fn from_location(location: &str, timeout: Duration) -> Result<Self> {
        if location.starts_with("http://") || location.starts_with("https://") {
            Ok(Self::Http(HttpBundleSource::new(location, timeout)?))
        } else {
            Ok(Self::Dir(DirBundleSource::new(location)))
        }
    }
}

impl BundleSource for AnyBundleSource {
    async fn fetch(&self, language: Language) -> Result<TranslationBundle> {
        match self {
            Self::Http(source) => source.fetch(language).await,
            Self::Dir(source) => source.fetch(language).await,
        }
    }
}
