//! Running a plan through the external tool.

use crate::negotiate::{ModeChoice, SplitStrategy};
use crate::plan::{Segment, SegmentPlan};
use crate::Result;
use clipsplit_av::MediaToolkit;
use std::path::Path;

/// The user's answer to "proceed with splitting?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    /// Interpret an answer; only one of `accepted` (case-insensitive) confirms.
    pub fn from_answer(answer: &str, accepted: &[String]) -> Self {
        let answer = answer.trim();
        if accepted.iter().any(|token| token.eq_ignore_ascii_case(answer)) {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// What a batch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Nothing ran because the user declined.
    Canceled,
    /// Every segment was written.
    Completed { segments: usize },
}

/// Extract every segment of `plan`, in index order, one at a time.
///
/// `on_segment` is called just before each segment is dispatched. The first
/// failing invocation stops the batch and its error is returned.
pub fn execute_plan<T, F>(
    toolkit: &T,
    plan: &SegmentPlan,
    choice: &ModeChoice,
    confirmation: Confirmation,
    mut on_segment: F,
) -> Result<BatchOutcome>
where
    T: MediaToolkit + ?Sized,
    F: FnMut(&Segment, SplitStrategy) -> std::io::Result<()>,
{
    if confirmation == Confirmation::Declined {
        tracing::debug!("batch declined, nothing executed");
        return Ok(BatchOutcome::Canceled);
    }

    let source = plan.source();
    for segment in plan.segments() {
        on_segment(segment, choice.strategy)?;
        let output = Path::new(&segment.output_name);

        let result = match choice.strategy {
            SplitStrategy::Fast => {
                toolkit.split_fast(source, segment.start, segment.length, output)
            }
            SplitStrategy::Encode => {
                toolkit.split_encode(source, segment.start, segment.length, output)
            }
        };

        if let Err(e) = result {
            tracing::error!(
                "segment {} of {} failed, stopping batch: {}",
                segment.index,
                plan.len(),
                e
            );
            return Err(e.into());
        }
    }

    tracing::info!("wrote {} segments from {:?}", plan.len(), source);
    Ok(BatchOutcome::Completed {
        segments: plan.len(),
    })
}
