// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mark model: stable identities plus plain-data payloads.

use kurbo::{BezPath, Point, Rect};
use peniko::Brush;

/// Stable identity for a retained mark.
///
/// Identity must survive across updates for the same logical primitive, so the
/// scene can tell an update apart from a remove/add pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    ///
    /// Useful for singleton marks (axis domain lines, titles) where the caller
    /// manages its own id space.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Composes an id from a group namespace and a per-row key.
    ///
    /// The group occupies the top 16 bits, so row keys from different mark
    /// groups (bars vs. labels over the same rows) never collide.
    pub fn for_key(group: u16, key: u64) -> Self {
        Self((u64::from(group) << 48) | (key & 0x0000_FFFF_FFFF_FFFF))
    }
}

/// Horizontal text anchor, matching the SVG `text-anchor` values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Anchor at the start of the text run.
    #[default]
    Start,
    /// Anchor at the middle of the text run.
    Middle,
    /// Anchor at the end of the text run.
    End,
}

/// Vertical text baseline, matching the SVG `dominant-baseline` values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// Alphabetic baseline (the default for Latin text).
    #[default]
    Alphabetic,
    /// Vertically centered on the midline.
    Middle,
    /// Hanging baseline (top-aligned).
    Hanging,
    /// Ideographic baseline.
    Ideographic,
}

/// A filled, optionally rounded, axis-aligned rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectMark {
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
    /// Corner radius in scene coordinates (`0.0` for sharp corners).
    pub corner_radius: f64,
    /// Fill paint.
    pub fill: Brush,
}

/// A positioned text run (unshaped).
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation angle in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// CSS-style font weight (400 = normal).
    pub font_weight: u16,
    /// Fill paint.
    pub fill: Brush,
}

/// A filled and/or stroked path.
#[derive(Clone, Debug)]
pub struct PathMark {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates (`0.0` disables stroking).
    pub stroke_width: f64,
}

impl PartialEq for PathMark {
    fn eq(&self, other: &Self) -> bool {
        self.path.elements() == other.path.elements()
            && self.fill == other.fill
            && self.stroke == other.stroke
            && self.stroke_width == other.stroke_width
    }
}

/// Payload of a single mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A rectangle mark.
    Rect(RectMark),
    /// A text mark.
    Text(TextMark),
    /// A path mark.
    Path(PathMark),
}

/// A mark: stable id, render-order hint, and payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity across updates.
    pub id: MarkId,
    /// Render-order hint; surfaces sort by `(z_index, id)`.
    pub z_index: i32,
    /// The visual payload.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a new mark.
    pub fn new(id: MarkId, z_index: i32, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_key_namespaces_groups() {
        let a = MarkId::for_key(1, 7);
        let b = MarkId::for_key(2, 7);
        assert_ne!(a, b);
        assert_eq!(a, MarkId::for_key(1, 7));
    }

    #[test]
    fn path_marks_compare_by_elements() {
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.line_to((1.0, 1.0));
        let a = PathMark {
            path: p.clone(),
            fill: Brush::default(),
            stroke: Brush::default(),
            stroke_width: 1.0,
        };
        let mut b = a.clone();
        assert_eq!(a, b);
        b.stroke_width = 2.0;
        assert_ne!(a, b);
    }
}
