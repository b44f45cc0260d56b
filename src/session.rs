//! The interactive session: main menu, planning, negotiation, execution.

use crate::config::SessionConfig;
use crate::executor::{execute_plan, BatchOutcome, Confirmation};
use crate::negotiate::{negotiate, Navigation, SplitStrategy};
use crate::plan::{plan_equal_parts, plan_fixed_length, SegmentPlan};
use crate::terminal::{Terminal, Tone};
use crate::timecode::{format_hms, parse_duration};
use crate::{Error, Result};
use clipsplit_av::MediaToolkit;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// How the user wants the file divided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    EqualParts,
    FixedLength,
}

impl Operation {
    fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Operation::EqualParts),
            "2" => Some(Operation::FixedLength),
            _ => None,
        }
    }
}

/// Where control goes after a batch.
enum AfterBatch {
    /// The batch ran, failed or was declined; offer to reuse the file.
    Finished,
    MainMenu,
    /// Input ended.
    Quit,
}

const OPERATION_OPTIONS: [&str; 2] = [
    "1 - Split into equal parts",
    "2 - Split into fixed-length clips",
];

/// One interactive run of the program.
pub struct Session<'a, R, W, T: ?Sized> {
    term: Terminal<R, W>,
    toolkit: &'a T,
    settings: SessionConfig,
}

impl<'a, R, W, T> Session<'a, R, W, T>
where
    R: BufRead,
    W: Write,
    T: MediaToolkit + ?Sized,
{
    pub fn new(term: Terminal<R, W>, toolkit: &'a T, settings: SessionConfig) -> Self {
        Self {
            term,
            toolkit,
            settings,
        }
    }

    pub fn into_terminal(self) -> Terminal<R, W> {
        self.term
    }

    /// Loop over the main menu until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.heading()?;
            let mut options = OPERATION_OPTIONS.to_vec();
            options.push("3 - Quit");
            self.term.menu("Choose an option:", &options)?;

            let Some(choice) = self.term.prompt("Option: ")? else {
                return Ok(());
            };

            if choice == "3" {
                self.term.line("Thanks, hope to see you again!")?;
                return Ok(());
            }

            let Some(mut operation) = Operation::from_choice(&choice) else {
                self.term.say("Invalid choice. Try again.", Tone::Failure)?;
                continue;
            };

            let Some(source) = self.ask_source()? else {
                return Ok(());
            };

            let total = match self.probe(&source) {
                Ok(total) => total,
                Err(e @ (Error::FileNotFound(_) | Error::DurationUnavailable(_))) => {
                    tracing::info!("cannot use {:?}: {}", source, e);
                    self.term.say(&e.to_string(), Tone::Failure)?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            self.term.line(&format!(
                "Total video duration: {:.2}s ({})\n",
                total,
                format_hms(total)
            ))?;

            loop {
                match self.batch(operation, &source, total)? {
                    AfterBatch::Finished => {}
                    AfterBatch::MainMenu => break,
                    AfterBatch::Quit => return Ok(()),
                }

                self.term.menu(
                    "Choose:",
                    &["1) Process the same file again", "2) Go back to the main menu"],
                )?;
                let Some(next) = self.term.prompt("Option: ")? else {
                    return Ok(());
                };
                if next != "1" {
                    break;
                }

                match self.ask_operation()? {
                    Some(op) => operation = op,
                    None => return Ok(()),
                }
            }
        }
    }

    fn heading(&mut self) -> Result<()> {
        self.term.say("\n== clipsplit ==", Tone::Secondary)?;
        self.term
            .say("Split a video into equal parts or fixed-length clips with ffmpeg.\n", Tone::Title)?;
        Ok(())
    }

    fn ask_operation(&mut self) -> Result<Option<Operation>> {
        loop {
            self.term.menu("Choose an option:", &OPERATION_OPTIONS)?;
            let Some(choice) = self.term.prompt("Option: ")? else {
                return Ok(None);
            };
            match Operation::from_choice(&choice) {
                Some(op) => return Ok(Some(op)),
                None => self.term.say("Please make a valid choice.", Tone::Failure)?,
            }
        }
    }

    fn ask_source(&mut self) -> Result<Option<PathBuf>> {
        loop {
            let Some(answer) = self.term.prompt("\nEnter the path of the video file: ")? else {
                return Ok(None);
            };
            let unquoted = answer.trim_matches(|c: char| c == '"' || c == '\'');
            if unquoted.is_empty() {
                self.term.say("Please enter a path.", Tone::Failure)?;
                continue;
            }
            let expanded = shellexpand::tilde(unquoted);
            return Ok(Some(PathBuf::from(expanded.as_ref())));
        }
    }

    fn probe(&self, source: &Path) -> Result<f64> {
        self.toolkit
            .probe_duration(source)
            .map_err(Error::from)
            .map_err(|e| match e {
                Error::ExternalToolFailure { .. } => Error::DurationUnavailable(e.to_string()),
                other => other,
            })
    }

    fn ask_plan(&mut self, operation: Operation, source: &Path, total: f64) -> Result<Option<SegmentPlan>> {
        loop {
            let (question, hint) = match operation {
                Operation::EqualParts => ("How many parts? ", "Invalid number of parts."),
                Operation::FixedLength => (
                    "Clip length (e.g. 10s, 2m, 1m30s, or just '10'): ",
                    "Invalid format. Try e.g. '10s', '2m', '1m30s', '1h'...",
                ),
            };

            let Some(answer) = self.term.prompt(question)? else {
                return Ok(None);
            };

            let planned = match operation {
                Operation::EqualParts => answer
                    .parse::<i64>()
                    .map_err(|_| Error::InvalidParameter(format!("not a whole number: {answer:?}")))
                    .and_then(|parts| plan_equal_parts(source, total, parts)),
                Operation::FixedLength => parse_duration(&answer)
                    .and_then(|chunk| plan_fixed_length(source, total, chunk)),
            };

            match planned {
                Ok(plan) => return Ok(Some(plan)),
                Err(e) if e.is_reprompt() => {
                    tracing::debug!("rejected answer {:?}: {}", answer, e);
                    self.term.say(hint, Tone::Failure)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn batch(&mut self, operation: Operation, source: &Path, total: f64) -> Result<AfterBatch> {
        let Some(plan) = self.ask_plan(operation, source, total)? else {
            return Ok(AfterBatch::Quit);
        };
        self.term.line(&format!("\n{}", plan.recap()))?;

        let choice = loop {
            match negotiate(&mut self.term, self.toolkit, source)? {
                Navigation::Resolved(choice) => {
                    if choice.strategy == SplitStrategy::Encode && choice.target_format.is_none() {
                        let e = Error::UnknownFormat(source.to_path_buf());
                        self.term.say(&e.to_string(), Tone::Failure)?;
                        self.term
                            .say("Please choose a format explicitly.", Tone::Failure)?;
                        continue;
                    }
                    break choice;
                }
                Navigation::BackOneLevel => continue,
                Navigation::ReturnToMainMenu => {
                    self.term.line("Returning to main menu...")?;
                    return Ok(AfterBatch::MainMenu);
                }
            }
        };

        let plan = plan.with_target_format(choice.target_format.as_deref());

        let Some(answer) = self.term.prompt("Proceed with splitting? [y/N]: ")? else {
            return Ok(AfterBatch::Quit);
        };
        let confirmation = Confirmation::from_answer(&answer, &self.settings.confirm_tokens);
        if confirmation == Confirmation::Declined {
            self.term.line("Operation canceled.")?;
        } else {
            self.term.line("\nSplitting...\n")?;
        }

        let toolkit = self.toolkit;
        let term = &mut self.term;
        let outcome = execute_plan(toolkit, &plan, &choice, confirmation, |segment, strategy| {
            let (mode, tone) = match strategy {
                SplitStrategy::Fast => ("fast mode", Tone::Primary),
                SplitStrategy::Encode => ("precise mode", Tone::Secondary),
            };
            term.say(
                &format!("Processing \"{}\" ({})...", segment.output_name, mode),
                tone,
            )
        });

        match outcome {
            Ok(BatchOutcome::Canceled) => {}
            Ok(BatchOutcome::Completed { segments }) => {
                self.term
                    .say(&format!("\nDone! {segments} file(s) written.\n"), Tone::Success)?;
            }
            Err(Error::Io(e)) => return Err(Error::Io(e)),
            Err(e) => {
                self.term
                    .say(&format!("\nSplitting stopped: {e}\n"), Tone::Failure)?;
            }
        }

        Ok(AfterBatch::Finished)
    }
}
