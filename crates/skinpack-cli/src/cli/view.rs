//! Terminal rendering of the controller's view.

use skinpack_core::i18n::Language;
use skinpack_core::mcid::Username;
use skinpack_core::ui::{Label, View};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The file a preview was written to.
enum PreviewFile {
    /// Removed on the next fetch or when the view is dropped (interactive shell).
    Temp(NamedTempFile),
    /// Left on disk for the user after the command exits.
    Kept(PathBuf),
}

impl PreviewFile {
    fn path(&self) -> &Path {
        match self {
            PreviewFile::Temp(f) => f.path(),
            PreviewFile::Kept(p) => p,
        }
    }
}

/// Prints to stdout/stderr. The preview is written to a `.png` file so it
/// can be opened in an image viewer.
#[derive(Default)]
pub struct TerminalView {
    language: Language,
    labels: HashMap<Label, String>,
    placeholder: String,
    toggle: String,
    keep_previews: bool,
    preview: Option<PreviewFile>,
}

impl TerminalView {
    /// View for one-shot commands: preview files outlive the process.
    pub fn keeping_previews() -> Self {
        Self {
            keep_previews: true,
            ..Self::default()
        }
    }

    fn label(&self, label: Label) -> &str {
        self.labels.get(&label).map(String::as_str).unwrap_or("")
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Path of the preview currently shown, if any.
    pub fn preview_path(&self) -> Option<&Path> {
        self.preview.as_ref().map(PreviewFile::path)
    }

    /// Subtitle, current language and the toggle hint.
    pub fn print_banner(&self) {
        println!("skinpack - {}", self.label(Label::Subtitle));
        println!("[{}] (:lang -> {})", self.language, self.toggle);
    }

    fn write_preview(&self, username: &Username, skin: &[u8]) -> std::io::Result<PreviewFile> {
        use std::io::Write;
        let prefix = format!("skinpack-{}-", username);
        let mut file = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".png")
            .tempfile()?;
        file.write_all(skin)?;
        file.flush()?;
        if self.keep_previews {
            let path = file.into_temp_path().keep().map_err(|e| e.error)?;
            Ok(PreviewFile::Kept(path))
        } else {
            Ok(PreviewFile::Temp(file))
        }
    }
}

impl View for TerminalView {
    fn set_document_language(&mut self, lang: Language) {
        self.language = lang;
    }

    fn set_label(&mut self, label: Label, text: &str) {
        self.labels.insert(label, text.to_string());
    }

    fn set_placeholder(&mut self, text: &str) {
        self.placeholder = text.to_string();
    }

    fn set_language_toggle(&mut self, text: &str) {
        self.toggle = text.to_string();
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("✗ {}", message);
    }

    // Printed lines cannot be taken back.
    fn clear_error(&mut self) {}

    fn set_fetch_loading(&mut self, loading: bool) {
        if loading {
            println!("{} ...", self.label(Label::FetchButton));
        }
    }

    fn show_preview(&mut self, username: &Username, skin: &[u8]) {
        println!("{}: {} ({} bytes)", self.label(Label::PreviewTitle), username, skin.len());
        match self.write_preview(username, skin) {
            Ok(file) => {
                println!("  {}", file.path().display());
                self.preview = Some(file);
            }
            Err(e) => tracing::warn!("could not write preview file: {}", e),
        }
    }

    fn hide_preview(&mut self) {
        self.preview = None;
    }

    fn set_download_busy(&mut self, busy: bool, label: &str) {
        self.labels.insert(Label::DownloadButton, label.to_string());
        if busy {
            println!("{}", label);
        }
    }

    fn saved(&mut self, path: &Path) {
        println!("✓ {}", path.display());
    }
}
