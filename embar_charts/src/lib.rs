// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for `embar_core`.
//!
//! This crate is a small, reusable layer above `embar_core`:
//! - **Scales** map data values into scene coordinates.
//! - **Mark specs** (bars, rects, text, rules) and **guides** (axes) generate
//!   `embar_core::Mark`s with stable identities suitable for incremental
//!   diffing.
//! - **Formatters** compute the display strings the bar visual needs
//!   (percent difference, magnitude suffixes, percent of max).
//!
//! Text shaping is out of scope; text marks store unshaped strings and layout
//! uses a heuristic measurer.

mod axis;
mod bar_mark;
mod format;
mod measure;
mod rect_mark;
mod rule_mark;
mod scale;
mod text_mark;
mod z_order;

pub use axis::{AxisOrient, AxisSpec, AxisStyle, StrokeStyle};
pub use bar_mark::{BarMarkSpec, BarOrient};
pub use format::{format_tick_with_step, magnitude_label, percent_diff, percent_of_max};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use rect_mark::RectMarkSpec;
pub use rule_mark::RuleMarkSpec;
pub use scale::{ScaleBand, ScaleBandSpec, ScaleLinear, ScaleLinearSpec, ScaleSpec};
pub use text_mark::TextMarkSpec;
pub use z_order::*;
