// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle mark generation.

use embar_core::{Mark, MarkId, MarkPayload, RectMark};
use kurbo::Rect;
use peniko::Brush;

/// A rectangle mark spec.
#[derive(Clone, Debug)]
pub struct RectMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
    /// Corner radius in scene coordinates.
    pub corner_radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

impl RectMarkSpec {
    /// Creates a new rectangle mark spec with sharp corners and a default fill.
    pub fn new(id: MarkId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            corner_radius: 0.0,
            fill: Brush::default(),
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the corner radius.
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius.max(0.0);
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
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
            MarkPayload::Rect(RectMark {
                rect: self.rect,
                corner_radius: self.corner_radius,
                fill: self.fill.clone(),
            }),
        )
    }
}
