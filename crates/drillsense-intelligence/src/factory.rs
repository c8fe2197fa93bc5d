// ABOUTME: Maps a drill identifier to a freshly initialized analyzer instance
// ABOUTME: Unknown identifiers fail with UNKNOWN_DRILL instead of silently picking a default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use drillsense_core::{AppResult, DrillKind};
use tracing::{debug, warn};

use crate::analyzers::Analyzer;
use crate::config::AnalysisConfig;

/// Create an analyzer for `drill_id` using the global configuration
///
/// # Errors
///
/// Returns `UNKNOWN_DRILL` when `drill_id` names no supported drill
pub fn create_analyzer(drill_id: &str) -> AppResult<Analyzer> {
    let drill = drill_id.parse::<DrillKind>().inspect_err(|_| {
        warn!(drill_id, "Rejected analyzer request for unknown drill");
    })?;
    Ok(create_analyzer_with_config(drill, AnalysisConfig::global()))
}

/// Create an analyzer for a known drill with explicit configuration
#[must_use]
pub fn create_analyzer_with_config(drill: DrillKind, config: &AnalysisConfig) -> Analyzer {
    debug!(
        drill = %drill,
        smoothing = config.smoothing.enabled,
        "Creating drill analyzer"
    );
    Analyzer::new(drill, config)
}
