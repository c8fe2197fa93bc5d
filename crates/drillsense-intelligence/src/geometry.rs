// ABOUTME: Stateless joint-angle and joint-velocity primitives on 2-D keypoints
// ABOUTME: Low-confidence or missing landmarks yield the 0 "unmeasurable" sentinel instead of errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Geometry primitives
//!
//! All functions are total: absent landmarks, degenerate vectors and clock
//! anomalies produce `0.0` rather than an error or a NaN.

use drillsense_core::constants::geometry::{MILLIS_PER_SECOND, UNMEASURABLE_ANGLE};
use drillsense_core::Keypoint;

/// Component of joint motion a velocity is measured along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Euclidean speed, always non-negative
    Speed,
    /// Signed vertical velocity, positive when the joint rises on screen
    Vertical,
    /// Signed horizontal velocity, positive when the joint moves right
    Horizontal,
}

fn confident(keypoint: Option<&Keypoint>) -> Option<&Keypoint> {
    keypoint.filter(|kp| kp.is_confident())
}

/// Angle in degrees at vertex `b` between rays `b -> a` and `b -> c`
///
/// Returns a value in `[0, 180]`, or `0.0` when any point is missing, below the
/// confidence threshold, or coincides with the vertex.
#[must_use]
pub fn angle_at(a: Option<&Keypoint>, b: Option<&Keypoint>, c: Option<&Keypoint>) -> f64 {
    let (Some(a), Some(b), Some(c)) = (confident(a), confident(b), confident(c)) else {
        return UNMEASURABLE_ANGLE;
    };

    let (abx, aby) = (a.x - b.x, a.y - b.y);
    let (cbx, cby) = (c.x - b.x, c.y - b.y);

    let magnitude_ab = abx.hypot(aby);
    let magnitude_cb = cbx.hypot(cby);
    if magnitude_ab <= 0.0 || magnitude_cb <= 0.0 {
        return UNMEASURABLE_ANGLE;
    }

    let dot = abx.mul_add(cbx, aby * cby);
    let cosine = (dot / (magnitude_ab * magnitude_cb)).clamp(-1.0, 1.0);
    let degrees = cosine.acos().to_degrees();
    if degrees.is_finite() {
        degrees
    } else {
        UNMEASURABLE_ANGLE
    }
}

/// Euclidean speed between two observations of the same joint, in pixels per second
///
/// Returns `0.0` if either point is missing or unconfident, or `dt_millis <= 0`.
#[must_use]
pub fn velocity(prev: Option<&Keypoint>, curr: Option<&Keypoint>, dt_millis: f64) -> f64 {
    directional_velocity(prev, curr, dt_millis, Motion::Speed)
}

/// Velocity of a joint along one motion component, in pixels per second
///
/// Same gating as [`velocity`]; `Vertical` flips the screen y axis so that
/// rising joints are positive.
#[must_use]
pub fn directional_velocity(
    prev: Option<&Keypoint>,
    curr: Option<&Keypoint>,
    dt_millis: f64,
    motion: Motion,
) -> f64 {
    let (Some(prev), Some(curr)) = (confident(prev), confident(curr)) else {
        return 0.0;
    };
    if dt_millis.is_nan() || dt_millis <= 0.0 {
        return 0.0;
    }

    let displacement = match motion {
        Motion::Speed => prev.distance_to(curr),
        Motion::Vertical => prev.y - curr.y,
        Motion::Horizontal => curr.x - prev.x,
    };
    let per_second = displacement / dt_millis * MILLIS_PER_SECOND;
    if per_second.is_finite() {
        per_second
    } else {
        0.0
    }
}
