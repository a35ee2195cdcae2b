//! Session state owned by the controller.

use std::sync::Arc;

use crate::i18n::Language;
use crate::mcid::Username;

/// Where the interface is in the fetch → package flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
    Previewing,
    Packaging,
}

/// The skin currently held for packaging.
#[derive(Debug, Clone)]
pub struct HeldSkin {
    pub username: Username,
    pub bytes: Arc<[u8]>,
}

#[derive(Debug)]
pub struct Session {
    pub(super) language: Language,
    pub(super) input: String,
    pub(super) skin: Option<HeldSkin>,
    /// Message key of the error currently displayed.
    pub(super) error: Option<&'static str>,
    /// Bumped by every fetch that passes validation.
    pub(super) generation: u64,
    /// Generation of the fetch whose result is still awaited.
    pub(super) in_flight: Option<u64>,
    pub(super) packaging: bool,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            input: String::new(),
            skin: None,
            error: None,
            generation: 0,
            in_flight: None,
            packaging: false,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn held_skin(&self) -> Option<&HeldSkin> {
        self.skin.as_ref()
    }

    pub fn error_key(&self) -> Option<&'static str> {
        self.error
    }

    pub fn phase(&self) -> Phase {
        if self.packaging {
            Phase::Packaging
        } else if self.in_flight.is_some() {
            Phase::Fetching
        } else if self.skin.is_some() {
            Phase::Previewing
        } else {
            Phase::Idle
        }
    }
}
