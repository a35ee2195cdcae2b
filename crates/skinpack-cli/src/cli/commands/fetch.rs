//! `skinpack fetch <mcid>` – fetch and preview a skin.

use anyhow::{Context, Result};
use skinpack_core::ui::{Action, Controller};
use std::path::Path;

use crate::cli::{ensure_no_error, TerminalView};

pub async fn run_fetch(
    controller: &mut Controller<TerminalView>,
    mcid: &str,
    save_preview: Option<&Path>,
) -> Result<()> {
    controller.dispatch(Action::Input(mcid.to_string())).await;
    controller.dispatch(Action::Fetch).await;
    ensure_no_error(controller)?;
    if let Some(preview) = controller.view().preview_path() {
        tracing::debug!(path = %preview.display(), "preview kept");
    }

    if let (Some(path), Some(skin)) = (save_preview, controller.session().held_skin()) {
        std::fs::write(path, &skin.bytes)
            .with_context(|| format!("write skin to {}", path.display()))?;
        println!("{}", path.display());
    }
    Ok(())
}
