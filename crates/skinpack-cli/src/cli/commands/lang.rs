//! `skinpack lang [ja|en]` – switch the interface language.

use anyhow::Result;
use skinpack_core::i18n::Language;
use skinpack_core::ui::Controller;

use crate::cli::TerminalView;

pub fn run_lang(controller: &mut Controller<TerminalView>, lang: Option<Language>) -> Result<()> {
    match lang {
        Some(lang) => controller.set_language(lang),
        None => controller.toggle_language(),
    }
    controller.view().print_banner();
    Ok(())
}
