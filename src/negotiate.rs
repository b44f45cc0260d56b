//! Choosing between a fast stream-copy split and a re-encoding split.
//!
//! The decision is a small state machine. [`advance`] is the pure transition
//! function; [`negotiate`] drives it against a [`Terminal`].

use crate::terminal::{Terminal, Tone};
use crate::Result;
use clipsplit_av::MediaToolkit;
use std::io::{BufRead, Write};
use std::path::Path;

/// How segments are extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitStrategy {
    /// Stream copy, no re-encoding.
    Fast,
    /// Re-encode each segment.
    Encode,
}

/// The resolved extraction mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeChoice {
    pub strategy: SplitStrategy,
    /// Target container extension. Always `None` for [`SplitStrategy::Fast`].
    pub target_format: Option<String>,
}

impl ModeChoice {
    pub fn fast() -> Self {
        Self {
            strategy: SplitStrategy::Fast,
            target_format: None,
        }
    }

    pub fn encode(target_format: Option<String>) -> Self {
        Self {
            strategy: SplitStrategy::Encode,
            target_format,
        }
    }
}

/// Outcome of a negotiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Resolved(ModeChoice),
    /// The user asked to change the strategy; the caller starts over.
    BackOneLevel,
    /// The user abandoned the whole operation.
    ReturnToMainMenu,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    ChooseStrategy,
    ChooseEncodeOption,
    ChooseFormat,
    Done(Navigation),
}

/// Why a state asks its question again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reprompt {
    InvalidChoice,
    EmptyFormat,
    /// Show the supported formats, then ask again.
    ListFormats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    To(State),
    Stay(Reprompt),
}

/// The container of `source`, taken from its extension.
pub fn source_format(source: &Path) -> Option<String> {
    source
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .filter(|e| !e.is_empty())
}

/// Apply one line of input to `state`.
///
/// `source_format` is the container used by "keep same format".
pub fn advance(state: &State, input: &str, source_format: Option<&str>) -> Transition {
    let input = input.trim();
    match state {
        State::ChooseStrategy => match input {
            "1" => Transition::To(State::Done(Navigation::Resolved(ModeChoice::fast()))),
            "2" => Transition::To(State::ChooseEncodeOption),
            _ => Transition::Stay(Reprompt::InvalidChoice),
        },
        State::ChooseEncodeOption => match input {
            "1" => Transition::To(State::Done(Navigation::Resolved(ModeChoice::encode(
                source_format.map(str::to_string),
            )))),
            "2" => Transition::To(State::ChooseFormat),
            "3" => Transition::To(State::Done(Navigation::BackOneLevel)),
            "4" => Transition::To(State::Done(Navigation::ReturnToMainMenu)),
            _ => Transition::Stay(Reprompt::InvalidChoice),
        },
        State::ChooseFormat => {
            if input == "1" {
                return Transition::Stay(Reprompt::ListFormats);
            }
            let format = input.trim_start_matches('.');
            if format.is_empty() {
                Transition::Stay(Reprompt::EmptyFormat)
            } else {
                Transition::To(State::Done(Navigation::Resolved(ModeChoice::encode(Some(
                    format.to_string(),
                )))))
            }
        }
        State::Done(_) => Transition::To(state.clone()),
    }
}

fn render<R: BufRead, W: Write>(term: &mut Terminal<R, W>, state: &State) -> std::io::Result<()> {
    match state {
        State::ChooseStrategy => term.menu(
            "Choose splitting mode:",
            &[
                "1) Fast mode (no re-encoding)",
                "2) Precise mode (re-encoding, might take more time)",
            ],
        ),
        State::ChooseEncodeOption => term.menu(
            "Choose re-encode option:",
            &[
                "1) Keep same format",
                "2) Choose a different format",
                "3) Go back (change mode)",
                "4) Go to main menu",
            ],
        ),
        State::ChooseFormat => term.menu(
            "Choose a new format extension (e.g. mp4, mkv, mov).",
            &["(Type '1' to see the formats supported by ffmpeg.)"],
        ),
        State::Done(_) => Ok(()),
    }
}

fn question(state: &State) -> &'static str {
    match state {
        State::ChooseFormat => "Your choice: ",
        _ => "Option: ",
    }
}

/// Run the negotiation for `source` until it resolves.
///
/// End of input is treated as a request to return to the main menu.
pub fn negotiate<R, W, T>(term: &mut Terminal<R, W>, toolkit: &T, source: &Path) -> Result<Navigation>
where
    R: BufRead,
    W: Write,
    T: MediaToolkit + ?Sized,
{
    let format = source_format(source);
    let mut state = State::ChooseStrategy;

    loop {
        if let State::Done(navigation) = state {
            tracing::debug!(?navigation, "mode negotiation finished");
            return Ok(navigation);
        }

        render(term, &state)?;
        let Some(answer) = term.prompt(question(&state))? else {
            return Ok(Navigation::ReturnToMainMenu);
        };

        match advance(&state, &answer, format.as_deref()) {
            Transition::To(next) => state = next,
            Transition::Stay(Reprompt::InvalidChoice) => {
                term.say("Invalid choice, try again.", Tone::Failure)?;
            }
            Transition::Stay(Reprompt::EmptyFormat) => {
                term.say("Invalid format, try again.", Tone::Failure)?;
            }
            Transition::Stay(Reprompt::ListFormats) => {
                term.line("\nFormats supported by ffmpeg:\n")?;
                match toolkit.list_formats() {
                    Ok(table) => term.raw(&table)?,
                    Err(e) => {
                        tracing::warn!("listing formats failed: {}", e);
                        term.say(&format!("Could not list formats: {e}"), Tone::Failure)?;
                    }
                }
                term.line("--- End of format list ---\n")?;
            }
        }
    }
}
