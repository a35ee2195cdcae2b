//! Localization table: Japanese and English user-facing strings.
//!
//! Lookups never fail. A key missing from the requested language falls back
//! to English, and a key missing from both is returned as-is.

mod preference;

pub use preference::LanguagePreference;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message keys shared by the controller and views.
pub mod keys {
    pub const SUBTITLE: &str = "subtitle";
    pub const PLACEHOLDER_MCID: &str = "placeholder_mcid";
    pub const BTN_FETCH: &str = "btn_fetch";
    pub const PREVIEW_TITLE: &str = "preview_title";
    pub const BTN_DOWNLOAD: &str = "btn_download";
    pub const BTN_DOWNLOADING: &str = "btn_downloading";
    pub const ERR_EMPTY: &str = "err_empty";
    pub const ERR_INVALID: &str = "err_invalid";
    pub const ERR_NOT_FOUND: &str = "err_not_found";
    pub const ERR_GENERATE: &str = "err_generate";
    pub const ERR_FETCH_FIRST: &str = "err_fetch_first";
    pub const ERR_UNKNOWN_COMMAND: &str = "err_unknown_command";
    pub const HELP_FETCH: &str = "help_fetch";
    pub const HELP_DOWNLOAD: &str = "help_download";
    pub const HELP_LANG: &str = "help_lang";
    pub const HELP_QUIT: &str = "help_quit";
}

const JA: &[(&str, &str)] = &[
    (keys::SUBTITLE, "Toi's Item Animator用"),
    (keys::PLACEHOLDER_MCID, "例: Notch"),
    (keys::BTN_FETCH, "取得"),
    (keys::PREVIEW_TITLE, "スキンプレビュー"),
    (keys::BTN_DOWNLOAD, "📦 リソースパックをダウンロード"),
    (keys::BTN_DOWNLOADING, "📦 生成中..."),
    (keys::ERR_EMPTY, "MCIDを入力してください。"),
    (
        keys::ERR_INVALID,
        "無効なMCIDです。3-16文字の英数字とアンダースコアのみ使用できます。",
    ),
    (
        keys::ERR_NOT_FOUND,
        "スキンが見つかりませんでした。MCIDを確認してください。",
    ),
    (keys::ERR_GENERATE, "リソースパックの生成に失敗しました。"),
    (keys::ERR_FETCH_FIRST, "先にスキンを取得してください。"),
    (keys::ERR_UNKNOWN_COMMAND, "不明なコマンドです"),
    (keys::HELP_FETCH, "プレイヤーのスキンを取得"),
    (keys::HELP_DOWNLOAD, "取得したスキンのリソースパックを保存"),
    (keys::HELP_LANG, "言語を切り替え (ja/en)"),
    (keys::HELP_QUIT, "終了"),
];

const EN: &[(&str, &str)] = &[
    (keys::SUBTITLE, "For Toi's Item Animator"),
    (keys::PLACEHOLDER_MCID, "e.g. Notch"),
    (keys::BTN_FETCH, "Fetch"),
    (keys::PREVIEW_TITLE, "Skin Preview"),
    (keys::BTN_DOWNLOAD, "📦 Download Resource Pack"),
    (keys::BTN_DOWNLOADING, "📦 Generating..."),
    (keys::ERR_EMPTY, "Please enter a MCID."),
    (
        keys::ERR_INVALID,
        "Invalid MCID. Only 3-16 alphanumeric characters and underscores are allowed.",
    ),
    (keys::ERR_NOT_FOUND, "Skin not found. Please check the MCID."),
    (keys::ERR_GENERATE, "Failed to generate the resource pack."),
    (keys::ERR_FETCH_FIRST, "Please fetch a skin first."),
    (keys::ERR_UNKNOWN_COMMAND, "Unknown command"),
    (keys::HELP_FETCH, "fetch the skin of a player"),
    (keys::HELP_DOWNLOAD, "save the resource pack for the fetched skin"),
    (keys::HELP_LANG, "switch language (ja/en)"),
    (keys::HELP_QUIT, "leave"),
];

/// Interface language. `En` is the default and the fallback for missing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ja,
    #[default]
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ja, Language::En];

    /// Short language code, e.g. `"ja"`.
    pub fn code(self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }

    pub fn other(self) -> Language {
        match self {
            Language::Ja => Language::En,
            Language::En => Language::Ja,
        }
    }

    /// Label for the language toggle: the code of the language it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self.other() {
            Language::Ja => "JA",
            Language::En => "EN",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ja" => Some(Language::Ja),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::Ja => JA,
            Language::En => EN,
        }
    }

    fn lookup(self, key: &str) -> Option<&'static str> {
        self.table()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Translate `key` in this language, falling back to English, then to the key.
    pub fn t<'a>(self, key: &'a str) -> &'a str {
        let found: Option<&'static str> = self
            .lookup(key)
            .or_else(|| Language::default().lookup(key));
        match found {
            Some(text) => text,
            None => key,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| format!("unknown language: {s}"))
    }
}

/// Translate `key` for an arbitrary language tag. Unknown tags get the English text.
pub fn translate<'a>(tag: &str, key: &'a str) -> &'a str {
    match Language::from_code(tag) {
        Some(lang) => lang.t(key),
        None => Language::default().t(key),
    }
}

/// Pick the interface language: a saved preference wins, otherwise a
/// locale starting with `ja` selects Japanese and everything else English.
pub fn detect_language(saved: Option<Language>, locale: Option<&str>) -> Language {
    if let Some(lang) = saved {
        return lang;
    }
    match locale {
        Some(l) if l.trim().to_ascii_lowercase().starts_with("ja") => Language::Ja,
        _ => Language::En,
    }
}

/// Locale of the current process, from `LC_ALL`, `LC_MESSAGES` or `LANG`.
pub fn env_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[&str] = &[
        keys::SUBTITLE,
        keys::PLACEHOLDER_MCID,
        keys::BTN_FETCH,
        keys::PREVIEW_TITLE,
        keys::BTN_DOWNLOAD,
        keys::BTN_DOWNLOADING,
        keys::ERR_EMPTY,
        keys::ERR_INVALID,
        keys::ERR_NOT_FOUND,
        keys::ERR_GENERATE,
        keys::ERR_FETCH_FIRST,
        keys::ERR_UNKNOWN_COMMAND,
        keys::HELP_FETCH,
        keys::HELP_DOWNLOAD,
        keys::HELP_LANG,
        keys::HELP_QUIT,
    ];

    #[test]
    fn both_languages_define_every_key() {
        for lang in Language::ALL {
            for key in ALL_KEYS {
                assert!(lang.lookup(key).is_some(), "{lang} missing {key}");
            }
        }
    }

    #[test]
    fn translate_known_tags() {
        assert_eq!(translate("ja", keys::BTN_FETCH), "取得");
        assert_eq!(translate("en", keys::BTN_FETCH), "Fetch");
        assert_eq!(translate("EN", keys::ERR_EMPTY), "Please enter a MCID.");
    }

    #[test]
    fn translate_unknown_tag_falls_back_to_english() {
        for key in ALL_KEYS {
            assert_eq!(translate("fr", key), Language::En.t(key));
            assert_ne!(translate("fr", key), *key);
        }
    }

    #[test]
    fn translate_unknown_key_returns_key() {
        assert_eq!(translate("ja", "no_such_key"), "no_such_key");
        assert_eq!(translate("de", "no_such_key"), "no_such_key");
    }

    #[test]
    fn toggle_label_names_other_language() {
        assert_eq!(Language::Ja.toggle_label(), "EN");
        assert_eq!(Language::En.toggle_label(), "JA");
        assert_eq!(Language::Ja.other(), Language::En);
        assert_eq!(Language::En.other().other(), Language::En);
    }

    #[test]
    fn detect_prefers_saved_value() {
        assert_eq!(
            detect_language(Some(Language::En), Some("ja_JP.UTF-8")),
            Language::En
        );
        assert_eq!(detect_language(Some(Language::Ja), None), Language::Ja);
    }

    #[test]
    fn detect_from_locale() {
        assert_eq!(detect_language(None, Some("ja_JP.UTF-8")), Language::Ja);
        assert_eq!(detect_language(None, Some("ja")), Language::Ja);
        assert_eq!(detect_language(None, Some("en_US.UTF-8")), Language::En);
        assert_eq!(detect_language(None, Some("C")), Language::En);
        assert_eq!(detect_language(None, None), Language::En);
    }

    #[test]
    fn language_from_str() {
        assert_eq!("ja".parse::<Language>().unwrap(), Language::Ja);
        assert_eq!(" En ".parse::<Language>().unwrap(), Language::En);
        assert!("jp".parse::<Language>().is_err());
    }
}
