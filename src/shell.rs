//! Interactive line-based front end.
//!
//! Each line is either a `:command` or text typed into the calculator.
//! Text starting with an operator continues the current input (usually the
//! previous result); anything else replaces it. The input is then submitted.

use std::io::{BufRead, Write};

use anyhow::Result;
use thiserror::Error;

use crate::calculator::copy_to_clipboard;
use crate::session::Session;
use crate::ui::{CalcTheme, render_history, render_preview, render_submission};

const HELP: &str = "\
Type an expression and press Enter, e.g. sin(30)+2^3 or 5!/3
Start a line with + - * / ^ to continue from the last result.

Commands:
  :history      list previous calculations
  :replay N     load calculation N into the input and preview it
  =             submit the current input
  :theme        toggle light/dark mode
  :copy         copy the last result to the clipboard
  :clear        clear input and history
  :help         show this help
  :quit         exit (an empty line also exits)";

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command ':{0}' (try :help)")]
    Unknown(String),

    #[error(":replay needs a history number")]
    MissingIndex,

    #[error("'{0}' is not a history number")]
    InvalidIndex(String),
}

/// One line of shell input.
#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Typed text: continue or replace the input, then submit.
    Type(String),
    Submit,
    History,
    /// Zero-based history index.
    Replay(usize),
    Theme,
    Copy,
    Clear,
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line == "=" {
            return Ok(Self::Submit);
        }
        let Some(command) = line.strip_prefix(':') else {
            return Ok(Self::Type(line.to_string()));
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        match name {
            "history" | "h" => Ok(Self::History),
            "replay" | "r" => {
                let arg = parts.next().ok_or(CommandError::MissingIndex)?;
                match arg.parse::<usize>() {
                    Ok(n) if n >= 1 => Ok(Self::Replay(n - 1)),
                    _ => Err(CommandError::InvalidIndex(arg.to_string())),
                }
            }
            "submit" => Ok(Self::Submit),
            "theme" | "t" => Ok(Self::Theme),
            "copy" | "c" => Ok(Self::Copy),
            "clear" => Ok(Self::Clear),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

pub struct Shell {
    session: Session,
    copy_on_submit: bool,
}

impl Shell {
    pub fn new(session: Session, copy_on_submit: bool) -> Self {
        Self {
            session,
            copy_on_submit,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read lines until end of input, an empty line or `:quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        writeln!(out, "{}", self.banner())?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                break;
            }

            match ShellCommand::parse(&line) {
                Ok(ShellCommand::Quit) => break,
                Ok(command) => self.execute(command, &mut out)?,
                Err(err) => {
                    let theme = self.theme();
                    writeln!(out, "{}", CalcTheme::paint(theme.error, &err.to_string()))?;
                }
            }
        }

        out.flush()?;
        Ok(())
    }

    pub fn execute<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> Result<()> {
        let theme = self.theme();

        match command {
            ShellCommand::Type(text) => {
                // A whole line is taken as typed; the evaluator reports bad characters.
                if continues_input(&text) && !self.session.history().is_empty() {
                    self.session.continue_with(&text);
                } else {
                    self.session.set_input(&text);
                }
                self.submit(out)?;
            }
            ShellCommand::Submit => self.submit(out)?,
            ShellCommand::History => {
                for line in render_history(self.session.history(), &theme) {
                    writeln!(out, "{line}")?;
                }
            }
            ShellCommand::Replay(index) => match self.session.replay(index) {
                Some(expression) => {
                    write!(out, "{}", CalcTheme::paint(theme.expression, &expression))?;
                    if let Some(preview) = self.session.preview() {
                        write!(out, " {}", render_preview(preview, &theme))?;
                    }
                    writeln!(out)?;
                }
                None => writeln!(
                    out,
                    "{}",
                    CalcTheme::paint(theme.error, &format!("no history entry {}", index + 1))
                )?,
            },
            ShellCommand::Theme => {
                let mode = self.session.toggle_theme();
                let theme = mode.theme();
                writeln!(
                    out,
                    "{}",
                    CalcTheme::paint(theme.accent, &format!("[{}]", mode.button_label()))
                )?;
            }
            ShellCommand::Copy => match self.session.history().latest() {
                Some(entry) => {
                    let text = entry.text_for_clipboard().to_string();
                    self.copy(&text, out)?;
                }
                None => writeln!(out, "{}", CalcTheme::paint(theme.error, "nothing to copy"))?,
            },
            ShellCommand::Clear => {
                self.session.clear();
                writeln!(out, "{}", CalcTheme::paint(theme.preview, "cleared"))?;
            }
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Quit => {}
        }

        Ok(())
    }

    fn submit<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let result = self.session.submit();
        writeln!(out, "{}", render_submission(&result, &self.theme()))?;

        if self.copy_on_submit
            && let Some(text) = result.clipboard()
        {
            self.copy(text, out)?;
        }
        Ok(())
    }

    fn copy<W: Write>(&self, text: &str, out: &mut W) -> Result<()> {
        let theme = self.theme();
        match copy_to_clipboard(text) {
            Ok(()) => writeln!(out, "{}", CalcTheme::paint(theme.preview, "copied"))?,
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err:#}");
                writeln!(out, "{}", CalcTheme::paint(theme.error, &format!("{err:#}")))?;
            }
        }
        Ok(())
    }

    fn theme(&self) -> CalcTheme {
        self.session.theme().theme()
    }

    fn banner(&self) -> String {
        let theme = self.theme();
        format!(
            "{}  {}",
            CalcTheme::paint(theme.accent, "scicalc"),
            CalcTheme::paint(theme.preview, ":help for commands, empty line to quit")
        )
    }
}

/// Whether typed text continues the current input rather than replacing it.
fn continues_input(text: &str) -> bool {
    text.starts_with(['+', '-', '*', '/', '^'])
}
