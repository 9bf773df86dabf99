// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for guide layout.
//!
//! Shaping lives downstream of this crate, so layout code that needs rough
//! text extents (axis margins for category labels) accepts a measurer rather
//! than assuming one.

/// A minimal text measurement interface used by guide and layout code.
pub trait TextMeasurer {
    /// Returns `(width, height)` in the same coordinate system as the marks.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A tiny heuristic text measurer.
///
/// It assumes an average glyph width of ~0.6em and a height of 1em, which is
/// plenty for margin estimation in an SVG surface without font metrics.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}
