//! Persisted language preference (JSON under the XDG state dir).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::Language;

#[derive(Debug, Serialize, Deserialize)]
struct PersistedPreference {
    lang: Language,
}

/// Location of the saved language choice. Read at startup, written on every toggle.
#[derive(Debug, Clone)]
pub struct LanguagePreference {
    path: PathBuf,
}

impl LanguagePreference {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `~/.local/state/skinpack/preferences.json`.
    pub fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("skinpack")?;
        Ok(Self::at(xdg_dirs.get_state_home().join("preferences.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved language, if any. A missing file means no preference; an
    /// unreadable or malformed one is logged and treated the same way.
    pub fn load(&self) -> Option<Language> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "read language preference: {}", e);
                return None;
            }
        };
        match serde_json::from_slice::<PersistedPreference>(&bytes) {
            Ok(p) => Some(p.lang),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "ignoring malformed language preference: {}", e);
                None
            }
        }
    }

    /// Save `lang` (creates parent dir if needed).
    pub fn save(&self, lang: Language) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string(&PersistedPreference { lang })
            .context("serialize language preference")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write language preference: {}", self.path.display()))?;
        Ok(())
    }
}
