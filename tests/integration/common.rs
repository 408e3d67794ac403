//! Common test utilities.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const EN_BUNDLE: &str = r#"{
  "site": { "title": "DevCloud | Cloud Engineering" },
  "nav": { "home": "Home", "contact": "Contact" },
  "contact": {
    "form_sent": "Message Sent",
    "form_submit": "Send",
    "name_placeholder": "Your name"
  },
  "meta": { "description": "Cloud engineering for growing teams" }
}"#;

pub const FR_BUNDLE: &str = r#"{
  "site": { "title": "DevCloud | Ingénierie cloud" },
  "nav": { "home": "Accueil", "contact": "Contact" },
  "contact": {
    "form_sent": "Message envoyé",
    "form_submit": "Envoyer",
    "name_placeholder": "Votre nom"
  }
}"#;

pub const AR_BUNDLE: &str = r#"{
  "site": { "title": "ديف كلاود" },
  "nav": { "home": "الرئيسية" },
  "contact": { "form_submit": "إرسال" }
}"#;

pub const PAGE: &str = r##"{
  "title": "DevCloud",
  "elements": [
    { "tag": "title", "attributes": { "data-i18n-title": "site.title" } },
    { "tag": "meta", "attributes": { "data-i18n-content": "meta.description", "name": "description" } },
    { "tag": "a", "attributes": { "data-i18n": "nav.home", "href": "#home" }, "inner_html": "Home" },
    { "tag": "button", "attributes": { "data-i18n": "contact.form_submit" }, "inner_html": "Send" },
    { "tag": "input", "attributes": { "data-i18n-placeholder": "contact.name_placeholder" } },
    { "tag": "p", "attributes": { "data-i18n": "contact.untranslated" }, "inner_html": "Original copy" },
    { "tag": "button", "attributes": { "data-lang": "en" }, "classes": ["lang-btn", "active"] },
    { "tag": "button", "attributes": { "data-lang": "fr" }, "classes": ["lang-btn"] },
    { "tag": "button", "attributes": { "data-lang": "ar" }, "classes": ["lang-btn"] }
  ]
}"##;

/// An isolated site checkout: bundles, a page snapshot, and private
/// config/state directories.
pub struct TestSite {
    pub dir: TempDir,
}

impl TestSite {
    /// Create a site with bundles for every language.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let bundles = dir.path().join("i18n");
        std::fs::create_dir_all(&bundles).expect("Failed to create bundle dir");
        std::fs::write(bundles.join("en.json"), EN_BUNDLE).expect("write en");
        std::fs::write(bundles.join("fr.json"), FR_BUNDLE).expect("write fr");
        std::fs::write(bundles.join("ar.json"), AR_BUNDLE).expect("write ar");
        std::fs::write(dir.path().join("page.json"), PAGE).expect("write page");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn bundles(&self) -> PathBuf {
        self.root().join("i18n")
    }

    pub fn page(&self) -> PathBuf {
        self.root().join("page.json")
    }

    /// Path of the saved language preference.
    pub fn preferences_file(&self) -> PathBuf {
        self.root().join("state").join("devcloud").join("preferences.json")
    }

    /// Write the project config file read from the working directory.
    pub fn write_project_config(&self, yaml: &str) {
        std::fs::write(self.root().join(".devcloud-i18n.yaml"), yaml).expect("write config");
    }

    /// Remove a language's bundle to simulate an unreachable resource.
    pub fn remove_bundle(&self, code: &str) {
        std::fs::remove_file(self.bundles().join(format!("{code}.json"))).expect("remove bundle");
    }

    /// Command for the binary, isolated from the host environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("devcloud-i18n"));
        cmd.current_dir(self.root())
            .env("XDG_CONFIG_HOME", self.root().join("config"))
            .env("XDG_STATE_HOME", self.root().join("state"))
            .env("DEVCLOUD_LOCALE", "en-US")
            .env_remove("DEVCLOUD_BUNDLES")
            .env_remove("DEVCLOUD_DEFAULT_LANG")
            .arg("--bundles")
            .arg(self.bundles())
            .args(["--color", "never"]);
        cmd
    }
}
