// ABOUTME: Replays recorded keypoint sessions stored as JSON Lines through a drill analyzer
// ABOUTME: Each line carries a capture timestamp and the 17 nullable keypoint slots of one frame
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session replay
//!
//! ```text
//! {"timestamp": 0, "keypoints": [{"x": 320.0, "y": 88.5, "score": 0.93}, null, ...]}
//! ```
//!
//! Blank lines are skipped. The first malformed line aborts the replay with its
//! 1-based line number.

use std::io::BufRead;

use drillsense_core::{AppError, AppResult, DrillResult, Frame};
use drillsense_intelligence::DrillAnalyzer;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One recorded frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedFrame {
    /// Capture time in milliseconds
    pub timestamp: f64,
    /// Pose landmarks in slot order
    pub keypoints: Frame,
}

/// Parse one JSON Lines entry; blank lines yield `None`
///
/// # Errors
///
/// Returns `INVALID_INPUT` naming `line_number` when the line is not a recorded frame
pub fn parse_line(line: &str, line_number: usize) -> AppResult<Option<RecordedFrame>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some).map_err(|e| {
        AppError::invalid_input(format!("Malformed frame on line {line_number}: {e}"))
            .with_source(e)
    })
}

/// Feed every recorded frame from `reader` to `analyzer` and return its result
///
/// # Errors
///
/// Returns `INVALID_INPUT` for the first malformed line, or `INTERNAL_ERROR`
/// if the reader fails
pub fn replay<R, A>(reader: R, analyzer: &mut A) -> AppResult<DrillResult>
where
    R: BufRead,
    A: DrillAnalyzer + ?Sized,
{
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| {
            AppError::internal(format!("Failed to read line {line_number}: {e}")).with_source(e)
        })?;
        if let Some(recorded) = parse_line(&line, line_number)? {
            analyzer.process_frame(&recorded.keypoints, recorded.timestamp);
        }
    }

    debug!(
        drill = %analyzer.drill(),
        frames = analyzer.frames_processed(),
        "Replay complete"
    );
    Ok(analyzer.results())
}
