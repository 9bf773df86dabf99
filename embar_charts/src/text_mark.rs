// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text mark generation.

use embar_core::{Mark, MarkId, MarkPayload, TextAnchor, TextBaseline, TextMark};
use kurbo::Point;
use peniko::Brush;

/// A text mark spec.
#[derive(Clone, Debug)]
pub struct TextMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Text rotation angle in degrees.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// CSS-style font weight (400 = normal).
    pub font_weight: u16,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

impl TextMarkSpec {
    /// Creates a new text mark spec with default styling.
    pub fn new(id: MarkId, pos: Point, text: impl Into<String>) -> Self {
        Self {
            id,
            pos,
            text: text.into(),
            font_size: 12.0,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            font_weight: 400,
            fill: Brush::default(),
            z_index: crate::z_order::VALUE_LABELS,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the text rotation angle (degrees).
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the font weight.
    pub fn with_font_weight(mut self, font_weight: u16) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::new(
            self.id,
            self.z_index,
            MarkPayload::Text(TextMark {
                pos: self.pos,
                text: self.text.clone(),
                font_size: self.font_size,
                angle: self.angle,
                anchor: self.anchor,
                baseline: self.baseline,
                font_weight: self.font_weight,
                fill: self.fill.clone(),
            }),
        )
    }
}
