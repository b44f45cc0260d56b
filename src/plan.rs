//! Segment planning.
//!
//! A plan is an ordered list of contiguous segments covering the whole source.
//! Each start is the previous start plus the previous length, and the last
//! segment takes whatever remains of the total, so lengths always add back up
//! to the probed duration.

use crate::timecode::format_hms;
use crate::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Lengths closer than this are reported as equal.
pub const TOLERANCE: f64 = 0.01;

/// Upper bound on the number of segments in one plan.
pub const MAX_SEGMENTS: usize = 100_000;

/// How the source is divided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// A fixed number of equally long parts.
    EqualParts(u32),
    /// Clips of a fixed length, the last one possibly shorter.
    FixedLength(f64),
}

impl Strategy {
    fn noun(&self, count: usize) -> &'static str {
        match (self, count) {
            (Strategy::EqualParts(_), 1) => "part",
            (Strategy::EqualParts(_), _) => "parts",
            (Strategy::FixedLength(_), 1) => "clip",
            (Strategy::FixedLength(_), _) => "clips",
        }
    }
}

/// One planned output file.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// 1-based position in the plan.
    pub index: usize,
    /// Offset into the source, in seconds.
    pub start: f64,
    /// Length in seconds.
    pub length: f64,
    /// File name the segment is written to.
    pub output_name: String,
}

/// An ordered, contiguous division of a source file.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPlan {
    source: PathBuf,
    total: f64,
    strategy: Strategy,
    segments: Vec<Segment>,
}

/// Divide `total` seconds into `parts` equal segments.
///
/// # Errors
///
/// [`Error::InvalidParameter`] when `parts` or `total` is not positive, or
/// when the parts would be shorter than [`TOLERANCE`] or more than
/// [`MAX_SEGMENTS`].
pub fn plan_equal_parts(source: &Path, total: f64, parts: i64) -> Result<SegmentPlan> {
    check_total(total)?;
    let count = u32::try_from(parts)
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| Error::InvalidParameter(format!("number of parts must be positive, got {parts}")))?;

    let regular = total / f64::from(count);
    check_segments(count as usize, regular)?;
    Ok(SegmentPlan::build(
        source,
        total,
        Strategy::EqualParts(count),
        count as usize,
        regular,
    ))
}

/// Divide `total` seconds into clips of `chunk` seconds.
///
/// # Errors
///
/// [`Error::InvalidParameter`] when `chunk` or `total` is not positive, or
/// when the clips would be shorter than [`TOLERANCE`] or more than
/// [`MAX_SEGMENTS`].
pub fn plan_fixed_length(source: &Path, total: f64, chunk: f64) -> Result<SegmentPlan> {
    check_total(total)?;
    if !(chunk.is_finite() && chunk > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "clip length must be positive, got {chunk}"
        )));
    }

    let count = (total / chunk).ceil().max(1.0);
    if count > MAX_SEGMENTS as f64 {
        return Err(Error::InvalidParameter(format!(
            "{chunk}s clips would need {count} segments, at most {MAX_SEGMENTS} are allowed"
        )));
    }
    let count = count as usize;
    check_segments(count, chunk)?;
    Ok(SegmentPlan::build(
        source,
        total,
        Strategy::FixedLength(chunk),
        count,
        chunk,
    ))
}

fn check_segments(count: usize, length: f64) -> Result<()> {
    if count > MAX_SEGMENTS {
        return Err(Error::InvalidParameter(format!(
            "{count} segments requested, at most {MAX_SEGMENTS} are allowed"
        )));
    }
    if length < TOLERANCE {
        return Err(Error::InvalidParameter(format!(
            "segments of {length}s are too short"
        )));
    }
    Ok(())
}

fn check_total(total: f64) -> Result<()> {
    if total.is_finite() && total > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "total duration must be positive, got {total}"
        )))
    }
}

/// Build the output file name for segment `index` of `source`.
///
/// The extension is the source's own, or `target_format` when given. It is
/// replaced, never appended, so `movie.mp4` with `mkv` gives `movie_2.mkv`.
///
/// ```
/// use clipsplit::plan::output_name;
/// use std::path::Path;
///
/// assert_eq!(output_name(Path::new("movie.mp4"), 2, None), "movie_2.mp4");
/// assert_eq!(output_name(Path::new("movie.mp4"), 2, Some("mkv")), "movie_2.mkv");
/// ```
pub fn output_name(source: &Path, index: usize, target_format: Option<&str>) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let extension = match target_format.map(|f| f.trim_start_matches('.')) {
        Some(format) if !format.is_empty() => format!(".{format}"),
        _ => source
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default(),
    };

    format!("{stem}_{index}{extension}")
}

impl SegmentPlan {
    fn build(source: &Path, total: f64, strategy: Strategy, count: usize, regular: f64) -> Self {
        let mut segments = Vec::new();
        let mut start = 0.0;

        for index in 1..=count {
            let length = if index == count { total - start } else { regular };
            segments.push(Segment {
                index,
                start,
                length,
                output_name: output_name(source, index, None),
            });
            start += length;
        }

        Self {
            source: source.to_path_buf(),
            total,
            strategy,
            segments,
        }
    }

    /// Re-derive every output name for the chosen target container.
    pub fn with_target_format(mut self, target_format: Option<&str>) -> Self {
        for segment in &mut self.segments {
            segment.output_name = output_name(&self.source, segment.index, target_format);
        }
        self
    }

    /// The file being split.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Total duration covered by the plan, in seconds.
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Classify the plan as uniform or "N-1 equal plus one different".
    pub fn summary(&self) -> PlanSummary {
        let count = self.segments.len();
        let regular = self.segments.first().map(|s| s.length).unwrap_or(0.0);
        let last = self.segments.last().map(|s| s.length).unwrap_or(0.0);

        if count <= 1 || (last - regular).abs() < TOLERANCE || last < TOLERANCE {
            PlanSummary::AllEqual {
                count,
                length: regular,
            }
        } else {
            PlanSummary::Uneven {
                equal_count: count - 1,
                length: regular,
                last_length: last,
            }
        }
    }

    /// Human-readable recap of the plan.
    pub fn recap(&self) -> Recap<'_> {
        Recap { plan: self }
    }
}

/// Shape of a plan's segment lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlanSummary {
    /// Every segment has (about) the same length.
    AllEqual { count: usize, length: f64 },
    /// All but the last segment share `length`.
    Uneven {
        equal_count: usize,
        length: f64,
        last_length: f64,
    },
}

/// [`fmt::Display`] adapter returned by [`SegmentPlan::recap`].
pub struct Recap<'a> {
    plan: &'a SegmentPlan,
}

impl fmt::Display for Recap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = self.plan.strategy;
        match self.plan.summary() {
            PlanSummary::AllEqual { count, length } => write!(
                f,
                "Recap: {} {}, each ~ {}.",
                count,
                strategy.noun(count),
                format_hms(length)
            ),
            PlanSummary::Uneven {
                equal_count,
                length,
                last_length,
            } => write!(
                f,
                "Recap: {} {} of ~ {} and 1 {} of {}.",
                equal_count,
                strategy.noun(equal_count),
                format_hms(length),
                strategy.noun(1),
                format_hms(last_length)
            ),
        }
    }
}
