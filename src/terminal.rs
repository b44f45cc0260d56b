//! Menus, prompts and notices over a line-oriented text stream.
//!
//! The [`Terminal`] is generic over its input and output so sessions can be
//! driven from a scripted buffer in tests. Colors come from the [`Palette`]
//! it is constructed with.

use crate::config::UiConfig;
use colored::{Color, Colorize};
use std::io::{self, BufRead, Write};

/// Colors used when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Whether to emit ANSI colors at all.
    pub enabled: bool,
    /// Menu titles and prompts.
    pub title: Color,
    /// Odd-numbered menu lines and fast-mode progress.
    pub primary: Color,
    /// Even-numbered menu lines and encode-mode progress.
    pub secondary: Color,
    pub success: Color,
    pub failure: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            enabled: true,
            title: Color::White,
            primary: Color::Green,
            secondary: Color::Red,
            success: Color::Green,
            failure: Color::Red,
        }
    }
}

impl Palette {
    /// A palette that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn from_config(ui: &UiConfig) -> Self {
        Self {
            enabled: ui.color,
            ..Self::default()
        }
    }
}

/// Which palette slot a line is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Title,
    Primary,
    Secondary,
    Success,
    Failure,
}

/// Interactive text terminal.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, palette: Palette) -> Self {
        Self {
            input,
            output,
            palette,
        }
    }

    /// Give back the output sink, e.g. to inspect what a test session printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        let color = match tone {
            Tone::Plain => return text.to_string(),
            Tone::Title => self.palette.title,
            Tone::Primary => self.palette.primary,
            Tone::Secondary => self.palette.secondary,
            Tone::Success => self.palette.success,
            Tone::Failure => self.palette.failure,
        };
        if self.palette.enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Print a line in the given tone.
    pub fn say(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        let painted = self.paint(text, tone);
        writeln!(self.output, "{painted}")
    }

    /// Print a plain line.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        self.say(text, Tone::Plain)
    }

    /// Print a title followed by options in alternating colors.
    pub fn menu(&mut self, title: &str, options: &[&str]) -> io::Result<()> {
        self.say(title, Tone::Title)?;
        for (i, option) in options.iter().enumerate() {
            let tone = if i % 2 == 0 {
                Tone::Primary
            } else {
                Tone::Secondary
            };
            self.say(option, tone)?;
        }
        Ok(())
    }

    /// Ask a question and read one line.
    ///
    /// Returns `None` once the input is exhausted. The answer is trimmed.
    pub fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        let painted = self.paint(question, Tone::Title);
        write!(self.output, "{painted}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Write text verbatim, for tool output shown to the user.
    pub fn raw(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            writeln!(self.output)?;
        }
        Ok(())
    }
}
