//! CLI for skinpack.

mod commands;
mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use skinpack_core::config::{self, SkinpackConfig};
use skinpack_core::fetch::HttpSkinSource;
use skinpack_core::i18n::{env_locale, Language, LanguagePreference};
use skinpack_core::save::DirectoryTarget;
use skinpack_core::ui::Controller;
use std::path::PathBuf;
use std::sync::Arc;

use commands::{run_completions, run_fetch, run_lang, run_man, run_pack, run_shell};
pub use view::TerminalView;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "skinpack")]
#[command(
    about = "Fetch a Minecraft skin and package it as a resource pack for Toi's Item Animator",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a player's skin and show a preview.
    Fetch {
        /// Player name (MCID), 3-16 letters, digits or underscores.
        mcid: String,
        /// Also write the skin image to this path.
        #[arg(long, value_name = "PATH")]
        save_preview: Option<PathBuf>,
    },

    /// Fetch a player's skin and save the resource pack.
    Pack {
        /// Player name (MCID), 3-16 letters, digits or underscores.
        mcid: String,
        /// Directory to save the pack into (default: config `output_dir`, else current dir).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Toggle the interface language, or set it explicitly.
    Lang {
        /// `ja` or `en`. Without it the language is toggled.
        lang: Option<Language>,
    },

    /// Interactive session: type a MCID to fetch, `:download` to save the pack.
    Shell {
        /// Directory to save packs into (default: config `output_dir`, else current dir).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

/// Error already shown to the user through the view; only the exit code is left to set.
#[derive(Debug)]
pub struct Reported;

impl std::fmt::Display for Reported {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error already reported")
    }
}

impl std::error::Error for Reported {}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { mcid, save_preview } => {
                let mut controller =
                    build_controller(&cfg, TerminalView::keeping_previews(), None)?;
                run_fetch(&mut controller, &mcid, save_preview.as_deref()).await?;
            }
            CliCommand::Pack { mcid, output_dir } => {
                let mut controller =
                    build_controller(&cfg, TerminalView::keeping_previews(), output_dir)?;
                run_pack(&mut controller, &mcid).await?;
            }
            CliCommand::Lang { lang } => {
                let mut controller = build_controller(&cfg, TerminalView::default(), None)?;
                run_lang(&mut controller, lang)?;
            }
            CliCommand::Shell { output_dir } => {
                let mut controller = build_controller(&cfg, TerminalView::default(), output_dir)?;
                run_shell(&mut controller).await?;
            }
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

/// Wire the core controller to the terminal, the configured skin host and the output dir.
fn build_controller(
    cfg: &SkinpackConfig,
    view: TerminalView,
    output_dir: Option<PathBuf>,
) -> Result<Controller<TerminalView>> {
    let dir = match output_dir.or_else(|| cfg.output_dir.clone()) {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let preference = LanguagePreference::open_default()?;
    let locale = env_locale();
    let controller = Controller::new(
        view,
        Arc::new(HttpSkinSource::from_config(cfg)),
        Arc::new(DirectoryTarget::new(dir)),
        preference,
        locale.as_deref(),
    )
    .with_output_filename(cfg.output_filename.clone());
    Ok(controller)
}

/// Fail with [`Reported`] if the last action left an error on screen.
fn ensure_no_error(controller: &Controller<TerminalView>) -> Result<()> {
    match controller.session().error_key() {
        Some(key) => {
            tracing::debug!(key, "command ended with an error");
            Err(Reported.into())
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests;
