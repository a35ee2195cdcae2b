//! `skinpack pack <mcid>` – fetch a skin, then build and save the resource pack.

use anyhow::Result;
use skinpack_core::ui::{Action, Controller};

use crate::cli::{ensure_no_error, TerminalView};

pub async fn run_pack(controller: &mut Controller<TerminalView>, mcid: &str) -> Result<()> {
    controller.dispatch(Action::Input(mcid.to_string())).await;
    controller.dispatch(Action::Fetch).await;
    ensure_no_error(controller)?;

    controller.dispatch(Action::Download).await;
    ensure_no_error(controller)
}
