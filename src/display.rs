//! Turning [`Output`] blocks into terminal text.
//!
//! Colour is a presentation concern only. The styler is picked once at startup
//! and the rest of the program never asks whether the terminal supports it.

use std::io::{self, Write};

use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use log::debug;

use crate::engine::{Output, OutputBlock, Tone};

/// What a piece of text is, as far as styling cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Title,
    Tone(Tone),
}

pub trait Styler {
    fn paint(&self, emphasis: Emphasis, text: &str) -> String;
}

/// Default: text passes through untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn paint(&self, _emphasis: Emphasis, text: &str) -> String {
        text.to_string()
    }
}

/// ANSI colours via crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiStyler;

impl Styler for AnsiStyler {
    fn paint(&self, emphasis: Emphasis, text: &str) -> String {
        match emphasis {
            Emphasis::Title => text.cyan().bold().to_string(),
            Emphasis::Tone(Tone::Movement) => text.blue().to_string(),
            Emphasis::Tone(Tone::Combat) => text.yellow().to_string(),
            Emphasis::Tone(Tone::Hurt) => text.red().to_string(),
            Emphasis::Tone(Tone::Victory) => text.green().bold().to_string(),
            Emphasis::Tone(Tone::Defeat) => text.red().bold().to_string(),
        }
    }
}

/// Colour only when stdout is a terminal, `NO_COLOR` is unset, and the caller did not opt out.
pub fn choose_styler(no_color: bool) -> Box<dyn Styler> {
    let env_opt_out = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let is_tty = io::stdout().is_tty();
    debug!("styler selection: no_color={no_color} NO_COLOR={env_opt_out} tty={is_tty}");

    if no_color || env_opt_out || !is_tty {
        Box::new(PlainStyler)
    } else {
        Box::new(AnsiStyler)
    }
}

pub fn write_output<W: Write>(w: &mut W, out: &Output, styler: &dyn Styler) -> io::Result<()> {
    for block in &out.blocks {
        match block {
            OutputBlock::Title(t) => {
                writeln!(w, "\n{}", styler.paint(Emphasis::Title, t))?;
            }
            OutputBlock::Text(line) | OutputBlock::Exits(line) => {
                writeln!(w, "{}", line)?;
            }
            OutputBlock::Event(tone, ev) => {
                writeln!(w, "{}", styler.paint(Emphasis::Tone(*tone), ev))?;
            }
        }
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Output {
        let mut out = Output::new();
        out.title("== Hall ==");
        out.say("A damp corridor stretches before you.");
        out.set_exits("Exits: south");
        out.event(Tone::Victory, "You defeated all enemies. Victory!");
        out
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let mut buf = Vec::new();
        write_output(&mut buf, &sample(), &PlainStyler).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "\n== Hall ==\nA damp corridor stretches before you.\nExits: south\nYou defeated all enemies. Victory!\n"
        );
    }

    #[test]
    fn ansi_output_wraps_highlighted_lines_only() {
        let mut buf = Vec::new();
        write_output(&mut buf, &sample(), &AnsiStyler).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("\u{1b}["));
        assert!(text.contains("Victory!"));
        assert!(text.contains("\nA damp corridor stretches before you.\n"));
    }
}
