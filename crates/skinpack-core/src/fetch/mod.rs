//! Skin fetcher: one HTTP GET per request, whole body returned as bytes.
//!
//! Uses the curl crate (libcurl). No retry and no caching; each call hits
//! the skin host.

mod url;

pub use url::skin_url;

use crate::mcid::Username;
use std::time::Duration;

/// Default skin endpoint. `{username}` is replaced with the MCID.
pub const DEFAULT_SKIN_URL_TEMPLATE: &str = "https://minotar.net/skin/{username}";

/// Why a skin could not be fetched.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    #[error("fetch task did not complete: {0}")]
    Task(String),
}

/// Something that can produce skin image bytes for a player.
///
/// Implementations block; async callers run them on the blocking pool.
pub trait SkinSource: Send + Sync {
    fn fetch(&self, username: &Username) -> Result<Vec<u8>, FetchError>;
}

/// Fetches skins over HTTP(S) from a URL template.
#[derive(Debug, Clone)]
pub struct HttpSkinSource {
    url_template: String,
    user_agent: Option<String>,
    connect_timeout: Option<Duration>,
}

impl HttpSkinSource {
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            user_agent: None,
            connect_timeout: None,
        }
    }

    pub fn from_config(cfg: &crate::config::SkinpackConfig) -> Self {
        Self {
            url_template: cfg.skin_url_template.clone(),
            user_agent: cfg.user_agent.clone(),
            connect_timeout: cfg.connect_timeout(),
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Performs the GET; returns the response code and the collected body.
    fn get(&self, url: &str) -> Result<(u32, Vec<u8>), curl::Error> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        if let Some(timeout) = self.connect_timeout {
            easy.connect_timeout(timeout)?;
        }
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

impl SkinSource for HttpSkinSource {
    fn fetch(&self, username: &Username) -> Result<Vec<u8>, FetchError> {
        let url = skin_url(&self.url_template, username);
        tracing::debug!(%url, "fetching skin");
        let (code, body) = self.get(&url).map_err(|source| FetchError::Transport {
            url: url.clone(),
            source,
        })?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Status { url, code });
        }
        tracing::debug!(%url, bytes = body.len(), "skin fetched");
        Ok(body)
    }
}
