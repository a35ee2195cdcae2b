//! Rendering surface the controller drives.

use std::path::Path;

use crate::i18n::{keys, Language};
use crate::mcid::Username;

/// Interface elements whose text comes from the localization table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Subtitle,
    FetchButton,
    PreviewTitle,
    DownloadButton,
}

impl Label {
    pub const ALL: [Label; 4] = [
        Label::Subtitle,
        Label::FetchButton,
        Label::PreviewTitle,
        Label::DownloadButton,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Label::Subtitle => keys::SUBTITLE,
            Label::FetchButton => keys::BTN_FETCH,
            Label::PreviewTitle => keys::PREVIEW_TITLE,
            Label::DownloadButton => keys::BTN_DOWNLOAD,
        }
    }
}

/// A user interface the controller can render into.
///
/// Calls arrive from the controller only, one at a time.
pub trait View {
    fn set_document_language(&mut self, lang: Language);
    fn set_label(&mut self, label: Label, text: &str);
    /// Hint text of the MCID input.
    fn set_placeholder(&mut self, text: &str);
    /// Text of the language toggle (code of the language it switches to).
    fn set_language_toggle(&mut self, text: &str);
    fn show_error(&mut self, message: &str);
    fn clear_error(&mut self);
    /// Fetch control disabled with a loading indicator while `loading`.
    fn set_fetch_loading(&mut self, loading: bool);
    /// Display the skin. The view owns whatever it creates to show it
    /// until the next `hide_preview`.
    fn show_preview(&mut self, username: &Username, skin: &[u8]);
    fn hide_preview(&mut self);
    /// Download control disabled while `busy`; `label` is its new text.
    fn set_download_busy(&mut self, busy: bool, label: &str);
    /// The archive was saved at `path`.
    fn saved(&mut self, path: &Path);
}
