//! Interactive session tests.
//!
//! Each test scripts stdin line by line and checks what reached the toolkit.

mod common;

use assert_matches::assert_matches;
use common::{lengths, run_session, Call, FakeToolkit};
use std::path::PathBuf;

#[test]
fn quit_from_main_menu() {
    let toolkit = FakeToolkit::with_duration(100.0);
    let out = run_session(&toolkit, "3\n");

    assert!(out.contains("Choose an option:"));
    assert!(out.contains("Thanks, hope to see you again!"));
    assert!(toolkit.calls().is_empty());
}

#[test]
fn end_of_input_ends_session() {
    let toolkit = FakeToolkit::with_duration(100.0);
    run_session(&toolkit, "1\nmovie.mp4\n");

    assert_eq!(toolkit.calls(), vec![Call::Probe(PathBuf::from("movie.mp4"))]);
}

#[test]
fn invalid_main_menu_choice_reprompts() {
    let toolkit = FakeToolkit::with_duration(100.0);
    let out = run_session(&toolkit, "9\n3\n");

    assert!(out.contains("Invalid choice. Try again."));
    assert!(toolkit.calls().is_empty());
}

#[test]
fn equal_parts_fast_split() {
    let toolkit = FakeToolkit::with_duration(100.0);
    let out = run_session(&toolkit, "1\nmovie.mp4\n3\n1\ny\n2\n3\n");

    assert!(out.contains("Total video duration: 100.00s (00:01:40.00)"));
    assert!(out.contains("Recap: 3 parts, each ~ 00:00:33.33."));
    assert!(out.contains("Processing \"movie_1.mp4\" (fast mode)..."));
    assert!(out.contains("Done! 3 file(s) written."));

    assert_eq!(toolkit.outputs(), ["movie_1.mp4", "movie_2.mp4", "movie_3.mp4"]);
    let splits = toolkit.splits();
    let total: f64 = lengths(&splits).iter().sum();
    assert!((total - 100.0).abs() < 0.01);

    let mut expected_start = 0.0;
    for call in &splits {
        match call {
            Call::Fast { start, length, .. } => {
                assert!((start - expected_start).abs() < 1e-9);
                expected_start = start + length;
            }
            other => panic!("expected a fast split, got {other:?}"),
        }
    }
}

#[test]
fn declined_confirmation_runs_nothing() {
    let toolkit = FakeToolkit::with_duration(100.0);
    let out = run_session(&toolkit, "1\nmovie.mp4\n3\n1\nn\n2\n3\n");

    assert!(out.contains("Operation canceled."));
    assert!(toolkit.splits().is_empty());
    // The repeat/main-menu choice is still offered after a canceled batch.
    assert!(out.contains("1) Process the same file again"));
}

#[test]
fn empty_confirmation_is_a_decline() {
    let toolkit = FakeToolkit::with_duration(100.0);
    run_session(&toolkit, "1\nmovie.mp4\n2\n1\n\n2\n3\n");

    assert!(toolkit.splits().is_empty());
}

#[test]
fn fixed_length_encode_to_other_format_with_listing() {
    let toolkit = FakeToolkit::with_duration(95.0);
    let out = run_session(&toolkit, "2\nclip.mp4\n30s\n2\n2\n1\nmkv\nyes\n2\n3\n");

    assert!(out.contains("Recap: 3 clips of ~ 00:00:30.00 and 1 clip of 00:00:05.00."));
    assert!(out.contains("Matroska / WebM"));
    // After the listing the format question is asked again.
    assert_eq!(out.matches("Your choice: ").count(), 2);

    assert_eq!(
        toolkit.outputs(),
        ["clip_1.mkv", "clip_2.mkv", "clip_3.mkv", "clip_4.mkv"]
    );
    assert_eq!(lengths(&toolkit.splits()), vec![30.0, 30.0, 30.0, 5.0]);
    assert!(toolkit
        .splits()
        .iter()
        .all(|c| matches!(c, Call::Encode { .. })));
    assert!(out.contains("(precise mode)"));
}

#[test]
fn keep_same_format_uses_source_extension() {
    let toolkit = FakeToolkit::with_duration(20.0);
    run_session(&toolkit, "1\nholiday.MOV\n2\n2\n1\ny\n2\n3\n");

    assert_eq!(toolkit.outputs(), ["holiday_1.MOV", "holiday_2.MOV"]);
    assert_matches!(toolkit.splits()[0], Call::Encode { .. });
}

#[test]
fn back_one_level_returns_to_strategy() {
    let toolkit = FakeToolkit::with_duration(10.0);
    let out = run_session(&toolkit, "1\nm.mp4\n2\n2\n3\n1\ny\n2\n3\n");

    assert_eq!(out.matches("Choose splitting mode:").count(), 2);
    assert_eq!(toolkit.outputs(), ["m_1.mp4", "m_2.mp4"]);
    assert!(toolkit
        .splits()
        .iter()
        .all(|c| matches!(c, Call::Fast { .. })));
}

#[test]
fn main_menu_from_negotiation_aborts_batch() {
    let toolkit = FakeToolkit::with_duration(10.0);
    let out = run_session(&toolkit, "1\nm.mp4\n2\n2\n4\n3\n");

    assert!(out.contains("Returning to main menu..."));
    assert!(!out.contains("Proceed with splitting?"));
    assert!(toolkit.splits().is_empty());
}

#[test]
fn invalid_negotiation_input_reprompts() {
    let toolkit = FakeToolkit::with_duration(10.0);
    let out = run_session(&toolkit, "1\nm.mp4\n2\nx\n2\n9\n2\n\npng\ny\n2\n3\n");

    assert_eq!(out.matches("Invalid choice, try again.").count(), 2);
    assert!(out.contains("Invalid format, try again."));
    assert_eq!(toolkit.outputs(), ["m_1.png", "m_2.png"]);
}

#[test]
fn invalid_part_count_reprompts() {
    let toolkit = FakeToolkit::with_duration(60.0);
    let out = run_session(&toolkit, "1\nm.mp4\n0\nabc\n-4\n2\n1\ny\n2\n3\n");

    assert_eq!(out.matches("Invalid number of parts.").count(), 3);
    assert_eq!(toolkit.splits().len(), 2);
}

#[test]
fn huge_part_count_reprompts() {
    let toolkit = FakeToolkit::with_duration(100.0);
    let out = run_session(&toolkit, "1\nmovie.mp4\n4000000000\n2\n1\nn\n2\n3\n");

    assert_eq!(out.matches("Invalid number of parts.").count(), 1);
    assert!(out.contains("Recap: 2 parts, each ~ 00:00:50.00."));
    assert!(out.contains("Thanks, hope to see you again!"));
    assert!(toolkit.splits().is_empty());
}

#[test]
fn invalid_clip_length_reprompts() {
    let toolkit = FakeToolkit::with_duration(60.0);
    let out = run_session(&toolkit, "2\nm.mp4\n10x\n\n0s\n1m\n1\ny\n2\n3\n");

    assert_eq!(
        out.matches("Invalid format. Try e.g. '10s', '2m', '1m30s', '1h'...")
            .count(),
        3
    );
    assert_eq!(toolkit.outputs(), ["m_1.mp4"]);
}

#[test]
fn missing_file_returns_to_main_menu() {
    let toolkit = FakeToolkit::missing_file();
    let out = run_session(&toolkit, "1\n/nowhere/missing.mp4\n3\n");

    assert!(out.contains("file does not exist: /nowhere/missing.mp4"));
    assert!(out.contains("Thanks, hope to see you again!"));
    assert_eq!(toolkit.calls().len(), 1);
}

#[test]
fn quoted_path_is_unquoted() {
    let toolkit = FakeToolkit::with_duration(10.0);
    run_session(&toolkit, "1\n\"my movie.mp4\"\n3\n");

    assert_eq!(toolkit.calls(), vec![Call::Probe(PathBuf::from("my movie.mp4"))]);
}

#[test]
fn tool_failure_stops_batch() {
    let toolkit = FakeToolkit::with_duration(100.0).failing_on(2);
    let out = run_session(&toolkit, "1\nmovie.mp4\n4\n1\ny\n2\n3\n");

    assert!(out.contains("Splitting stopped: ffmpeg failed (exit status 1)"));
    assert!(!out.contains("Done!"));
    assert_eq!(toolkit.outputs(), ["movie_1.mp4", "movie_2.mp4"]);
}

#[test]
fn repeat_same_file_with_new_strategy() {
    let toolkit = FakeToolkit::with_duration(25.0);
    let out = run_session(&toolkit, "1\nm.mp4\n2\n1\ny\n1\n7\n2\n10s\n1\ny\n2\n3\n");

    assert!(out.contains("Please make a valid choice."));
    let probes = toolkit
        .calls()
        .iter()
        .filter(|c| matches!(c, Call::Probe(_)))
        .count();
    assert_eq!(probes, 1);
    assert_eq!(
        toolkit.outputs(),
        ["m_1.mp4", "m_2.mp4", "m_1.mp4", "m_2.mp4", "m_3.mp4"]
    );
    assert_eq!(
        lengths(&toolkit.splits())[2..].to_vec(),
        vec![10.0, 10.0, 5.0]
    );
}

#[test]
fn extensionless_source_requires_explicit_format() {
    let toolkit = FakeToolkit::with_duration(10.0);
    let out = run_session(&toolkit, "1\nmovie\n2\n2\n1\n2\n2\nmp4\ny\n2\n3\n");

    assert!(out.contains("cannot determine an output format for movie"));
    assert_eq!(toolkit.outputs(), ["movie_1.mp4", "movie_2.mp4"]);
}
