//! UI controller: validation, fetch, preview, packaging and language toggle.
//!
//! The controller owns the [`Session`] and drives a [`View`]. User input
//! arrives as [`Action`]s through [`Controller::dispatch`]; handlers never
//! propagate errors, they show a localized message and log the detail.

mod session;
mod view;

pub use session::{HeldSkin, Phase, Session};
pub use view::{Label, View};

use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::SkinpackError;
use crate::fetch::{FetchError, SkinSource};
use crate::i18n::{detect_language, keys, Language, LanguagePreference};
use crate::mcid::Username;
use crate::pack::{build_pack, PACK_FILENAME};
use crate::save::SaveTarget;

/// Keys the input field reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
}

/// Every user-initiated action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The input text changed.
    Input(String),
    KeyPress(Key),
    Fetch,
    Download,
    ToggleLanguage,
}

/// A fetch that passed validation and is awaiting its result.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    username: Username,
}

impl FetchTicket {
    pub fn username(&self) -> &Username {
        &self.username
    }
}

pub struct Controller<V: View> {
    view: V,
    session: Session,
    source: Arc<dyn SkinSource>,
    target: Arc<dyn SaveTarget>,
    preference: LanguagePreference,
    output_filename: String,
}

impl<V: View> Controller<V> {
    /// Create a controller and render the initial labels. The language is
    /// the saved preference, or the one inferred from `locale`.
    pub fn new(
        view: V,
        source: Arc<dyn SkinSource>,
        target: Arc<dyn SaveTarget>,
        preference: LanguagePreference,
        locale: Option<&str>,
    ) -> Self {
        let language = detect_language(preference.load(), locale);
        let mut controller = Self {
            view,
            session: Session::new(language),
            source,
            target,
            preference,
            output_filename: PACK_FILENAME.to_string(),
        };
        controller.apply_translations();
        controller
    }

    pub fn with_output_filename(mut self, name: impl Into<String>) -> Self {
        self.output_filename = name.into();
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn language(&self) -> Language {
        self.session.language
    }

    pub async fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatch");
        match action {
            Action::Input(text) => self.set_input(text),
            Action::KeyPress(Key::Enter) | Action::Fetch => self.fetch().await,
            Action::KeyPress(Key::Char(_)) => {}
            Action::Download => self.download().await,
            Action::ToggleLanguage => self.toggle_language(),
        }
    }

    /// Re-render every localized element in the current language.
    pub fn apply_translations(&mut self) {
        let lang = self.session.language;
        self.view.set_document_language(lang);
        for label in Label::ALL {
            let key = if label == Label::DownloadButton && self.session.packaging {
                keys::BTN_DOWNLOADING
            } else {
                label.key()
            };
            self.view.set_label(label, lang.t(key));
        }
        self.view.set_placeholder(lang.t(keys::PLACEHOLDER_MCID));
        self.view.set_language_toggle(lang.toggle_label());
    }

    /// Switch to the other language, persist the choice and re-render.
    pub fn toggle_language(&mut self) {
        let lang = self.session.language.other();
        self.set_language(lang);
    }

    pub fn set_language(&mut self, lang: Language) {
        self.session.language = lang;
        if let Err(e) = self.preference.save(lang) {
            tracing::warn!("could not persist language preference: {:#}", e);
        }
        self.apply_translations();
    }

    fn set_input(&mut self, text: String) {
        self.session.input = text;
        self.clear_error();
    }

    async fn fetch(&mut self) {
        let Some(ticket) = self.begin_fetch() else {
            return;
        };
        let result =
            fetch_on_blocking_pool(Arc::clone(&self.source), ticket.username.clone()).await;
        self.complete_fetch(ticket, result);
    }

    /// Validate the input and start a fetch. Returns `None` (with the error
    /// shown) if the input is rejected; no request is made in that case.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        let username = match Username::parse(&self.session.input) {
            Ok(u) => u,
            Err(e) => {
                self.show_error(&e);
                return None;
            }
        };

        self.clear_error();
        self.release_skin();
        self.session.generation += 1;
        self.session.in_flight = Some(self.session.generation);
        self.view.set_fetch_loading(true);
        tracing::info!(%username, generation = self.session.generation, "fetching skin");

        Some(FetchTicket {
            generation: self.session.generation,
            username,
        })
    }

    /// Apply the result of a fetch. Results of superseded fetches are dropped.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<u8>, FetchError>) {
        if ticket.generation != self.session.generation {
            tracing::debug!(
                username = %ticket.username,
                generation = ticket.generation,
                current = self.session.generation,
                "discarding result of superseded fetch"
            );
            return;
        }

        self.session.in_flight = None;
        self.view.set_fetch_loading(false);

        match result {
            Ok(bytes) => {
                self.view.show_preview(&ticket.username, &bytes);
                self.session.skin = Some(HeldSkin {
                    username: ticket.username,
                    bytes: bytes.into(),
                });
            }
            Err(source) => {
                tracing::warn!(username = %ticket.username, "skin fetch failed: {}", source);
                self.show_error(&SkinpackError::NotFound {
                    username: ticket.username.to_string(),
                    source,
                });
            }
        }
    }

    async fn download(&mut self) {
        let Some(skin) = self.session.skin.as_ref() else {
            self.show_error(&SkinpackError::FetchFirst);
            return;
        };
        if self.session.packaging {
            return;
        }
        let bytes = Arc::clone(&skin.bytes);
        let username = skin.username.clone();

        self.session.packaging = true;
        let lang = self.session.language;
        self.view.set_download_busy(true, lang.t(keys::BTN_DOWNLOADING));

        let result = package_and_save(
            bytes,
            Arc::clone(&self.target),
            self.output_filename.clone(),
        )
        .await;
        match result {
            Ok(path) => {
                tracing::info!(%username, path = %path.display(), "resource pack generated");
                self.view.saved(&path);
            }
            Err(e) => {
                tracing::error!(%username, "resource pack generation failed: {:?}", e);
                self.show_error(&SkinpackError::PackGeneration(e.into()));
            }
        }

        self.session.packaging = false;
        let lang = self.session.language;
        self.view.set_download_busy(false, lang.t(keys::BTN_DOWNLOAD));
    }

    fn release_skin(&mut self) {
        self.view.hide_preview();
        self.session.skin = None;
    }

    fn show_error(&mut self, err: &SkinpackError) {
        self.session.error = Some(err.message_key());
        let message = err.localized(self.session.language);
        self.view.show_error(message);
    }

    fn clear_error(&mut self) {
        self.session.error = None;
        self.view.clear_error();
    }
}

async fn fetch_on_blocking_pool(
    source: Arc<dyn SkinSource>,
    username: Username,
) -> Result<Vec<u8>, FetchError> {
    tokio::task::spawn_blocking(move || source.fetch(&username))
        .await
        .map_err(|e| FetchError::Task(e.to_string()))?
}

async fn package_and_save(
    skin: Arc<[u8]>,
    target: Arc<dyn SaveTarget>,
    filename: String,
) -> anyhow::Result<PathBuf> {
    tokio::task::spawn_blocking(move || {
        let archive = build_pack(&skin).context("build resource pack")?;
        target.save(&archive, &filename)
    })
    .await
    .context("packaging task did not complete")?
}
