//! User-facing error taxonomy. Every variant maps to a localized message.

use crate::i18n::{keys, Language};

#[derive(Debug, thiserror::Error)]
pub enum SkinpackError {
    #[error("no MCID entered")]
    EmptyInput,
    #[error("MCID must be 3-16 letters, digits or underscores")]
    InvalidFormat,
    #[error("skin not found for {username}")]
    NotFound {
        username: String,
        #[source]
        source: crate::fetch::FetchError,
    },
    #[error("resource pack generation failed")]
    PackGeneration(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("no skin fetched yet")]
    FetchFirst,
}

impl SkinpackError {
    /// Localization key of the message shown to the user.
    pub fn message_key(&self) -> &'static str {
        match self {
            SkinpackError::EmptyInput => keys::ERR_EMPTY,
            SkinpackError::InvalidFormat => keys::ERR_INVALID,
            SkinpackError::NotFound { .. } => keys::ERR_NOT_FOUND,
            SkinpackError::PackGeneration(_) => keys::ERR_GENERATE,
            SkinpackError::FetchFirst => keys::ERR_FETCH_FIRST,
        }
    }

    pub fn localized(&self, lang: Language) -> &'static str {
        lang.t(self.message_key())
    }
}
