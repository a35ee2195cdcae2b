//! `skinpack shell` – interactive session driving the controller line by line.

use anyhow::Result;
use skinpack_core::i18n::{keys, Language};
use skinpack_core::ui::{Action, Controller, Key};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::TerminalView;

/// What one input line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum ShellLine {
    Actions(Vec<Action>),
    Help,
    Quit,
    Unknown(String),
}

/// Map a line to actions. Plain text is typed into the MCID field and submitted.
pub fn parse_line(line: &str) -> ShellLine {
    let trimmed = line.trim();
    match trimmed {
        ":q" | ":quit" | ":exit" => ShellLine::Quit,
        ":h" | ":help" | ":?" => ShellLine::Help,
        ":d" | ":download" => ShellLine::Actions(vec![Action::Download]),
        ":l" | ":lang" => ShellLine::Actions(vec![Action::ToggleLanguage]),
        cmd if cmd.starts_with(':') => ShellLine::Unknown(cmd.to_string()),
        _ => ShellLine::Actions(vec![
            Action::Input(line.trim_end_matches(['\r', '\n']).to_string()),
            Action::KeyPress(Key::Enter),
        ]),
    }
}

/// Command overview in the interface language.
pub fn help_text(lang: Language) -> String {
    [
        ("<MCID>", keys::HELP_FETCH),
        (":download", keys::HELP_DOWNLOAD),
        (":lang", keys::HELP_LANG),
        (":quit", keys::HELP_QUIT),
    ]
    .iter()
    .map(|(cmd, key)| format!("  {:<11} {}\n", cmd, lang.t(key)))
    .collect()
}

pub fn unknown_command_message(lang: Language, cmd: &str) -> String {
    format!("{}: {} (:help)", lang.t(keys::ERR_UNKNOWN_COMMAND), cmd)
}

fn prompt(view: &TerminalView) {
    print!("{} > ", view.placeholder());
    let _ = std::io::stdout().flush();
}

pub async fn run_shell(controller: &mut Controller<TerminalView>) -> Result<()> {
    controller.view().print_banner();
    print!("{}", help_text(controller.language()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt(controller.view());
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            ShellLine::Quit => break,
            ShellLine::Help => print!("{}", help_text(controller.language())),
            ShellLine::Unknown(cmd) => {
                eprintln!("{}", unknown_command_message(controller.language(), &cmd))
            }
            ShellLine::Actions(actions) => {
                for action in actions {
                    let toggles = action == Action::ToggleLanguage;
                    controller.dispatch(action).await;
                    if toggles {
                        controller.view().print_banner();
                    }
                }
            }
        }
        prompt(controller.view());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_types_and_submits() {
        assert_eq!(
            parse_line("Notch"),
            ShellLine::Actions(vec![
                Action::Input("Notch".into()),
                Action::KeyPress(Key::Enter),
            ])
        );
    }

    #[test]
    fn empty_line_still_submits() {
        assert_eq!(
            parse_line(""),
            ShellLine::Actions(vec![Action::Input(String::new()), Action::KeyPress(Key::Enter)])
        );
    }

    #[test]
    fn commands() {
        assert_eq!(parse_line(":download"), ShellLine::Actions(vec![Action::Download]));
        assert_eq!(parse_line(" :d "), ShellLine::Actions(vec![Action::Download]));
        assert_eq!(parse_line(":lang"), ShellLine::Actions(vec![Action::ToggleLanguage]));
        assert_eq!(parse_line(":q"), ShellLine::Quit);
        assert_eq!(parse_line(":help"), ShellLine::Help);
        assert_eq!(parse_line(":zip"), ShellLine::Unknown(":zip".into()));
    }

    #[test]
    fn help_follows_language() {
        let en = help_text(Language::En);
        assert!(en.contains("  :download   save the resource pack for the fetched skin\n"));
        assert_eq!(en.lines().count(), 4);
        let ja = help_text(Language::Ja);
        assert!(ja.contains("  :lang       言語を切り替え (ja/en)\n"));
    }

    #[test]
    fn unknown_command_is_localized() {
        assert_eq!(
            unknown_command_message(Language::En, ":zip"),
            "Unknown command: :zip (:help)"
        );
        assert_eq!(
            unknown_command_message(Language::Ja, ":zip"),
            "不明なコマンドです: :zip (:help)"
        );
    }
}
