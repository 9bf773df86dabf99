// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated marks.
//!
//! Marks carry an explicit `z_index`; surfaces sort by `(z_index, MarkId)` for
//! a deterministic tie-break. The chart layer assigns these consistently so
//! callers don't hand-tune paint order per variant.

/// Filled series marks (bars).
pub const SERIES_FILL: i32 = 0;
/// Stroked series marks (rules).
pub const SERIES_STROKE: i32 = 10;
/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Data labels drawn above bars.
pub const VALUE_LABELS: i32 = 50;
/// Annotation fills (the percent-difference pills).
pub const ANNOTATION_FILL: i32 = 60;
/// Annotation labels drawn on top of annotation fills.
pub const ANNOTATION_LABELS: i32 = 70;
