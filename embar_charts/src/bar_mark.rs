// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar mark generation.
//!
//! Generates one rect mark per row, with geometry derived from a band scale
//! (position along the categorical direction), a linear scale (extent along
//! the value direction), and a baseline. Mark identity is derived from the
//! row key so it stays stable across frames.

use embar_core::{Mark, MarkId, MarkPayload, RectMark};
use kurbo::Rect;
use peniko::Brush;

use crate::scale::{ScaleBand, ScaleLinear};

/// Direction of the value extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarOrient {
    /// Bands along x, values along y (columns).
    Vertical,
    /// Bands along y, values along x.
    Horizontal,
}

/// A bar mark derived from a keyed value sequence.
#[derive(Clone, Debug)]
pub struct BarMarkSpec {
    /// Mark id namespace; combined with each row key via [`MarkId::for_key`].
    pub group: u16,
    /// Direction of the value extent.
    pub orient: BarOrient,
    /// Band scale for positions along the categorical direction.
    pub band: ScaleBand,
    /// Linear scale for positions along the value direction.
    pub value_scale: ScaleLinear,
    /// Baseline in data units (typically `0.0`).
    pub baseline: f64,
    /// Corner radius for the generated rects.
    pub corner_radius: f64,
    /// Fill paint for bars.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

impl BarMarkSpec {
    /// Creates a bar mark spec with `baseline = 0` and a default fill.
    pub fn new(group: u16, orient: BarOrient, band: ScaleBand, value_scale: ScaleLinear) -> Self {
        Self {
            group,
            orient,
            band,
            value_scale,
            baseline: 0.0,
            corner_radius: 0.0,
            fill: Brush::default(),
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the baseline in data units.
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the corner radius for the generated rects.
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

    /// Generates marks for the provided `(row_key, value)` pairs.
    ///
    /// Row order determines band position; row keys determine identity.
    pub fn marks(&self, rows: &[(u64, f64)]) -> Vec<Mark> {
        let bw = self.band.band_width();
        let base = self.value_scale.map(self.baseline);

        rows.iter()
            .copied()
            .enumerate()
            .map(|(row, (row_key, value))| {
                let pos = self.band.x(row);
                let v = self.value_scale.map(value);
                let rect = match self.orient {
                    BarOrient::Vertical => {
                        Rect::new(pos, v.min(base), pos + bw, v.max(base))
                    }
                    BarOrient::Horizontal => {
                        Rect::new(v.min(base), pos, v.max(base), pos + bw)
                    }
                };
                Mark::new(
                    MarkId::for_key(self.group, row_key),
                    self.z_index,
                    MarkPayload::Rect(RectMark {
                        rect,
                        corner_radius: self.corner_radius,
                        fill: self.fill.clone(),
                    }),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_spec() -> BarMarkSpec {
        // 200px tall plot, y grows downward: data 0 -> y=200, data 100 -> y=0.
        let band = ScaleBand::new((0.0, 100.0), 2).with_padding(0.2, 0.2);
        let y = ScaleLinear::new((0.0, 100.0), (200.0, 0.0));
        BarMarkSpec::new(1, BarOrient::Vertical, band, y)
    }

    #[test]
    fn vertical_bars_rise_from_the_baseline() {
        let spec = vertical_spec();
        let marks = spec.marks(&[(10, 50.0), (11, 100.0)]);
        assert_eq!(marks.len(), 2);
        let MarkPayload::Rect(r) = &marks[0].payload else {
            panic!("expected rect");
        };
        assert_eq!(r.rect.y0, 100.0);
        assert_eq!(r.rect.y1, 200.0);
        let MarkPayload::Rect(r) = &marks[1].payload else {
            panic!("expected rect");
        };
        assert_eq!(r.rect.y0, 0.0);
        assert_eq!(r.rect.y1, 200.0);
    }

    #[test]
    fn zero_value_bar_is_empty_but_present() {
        let spec = vertical_spec();
        let marks = spec.marks(&[(10, 0.0)]);
        let MarkPayload::Rect(r) = &marks[0].payload else {
            panic!("expected rect");
        };
        assert_eq!(r.rect.height(), 0.0);
    }

    #[test]
    fn horizontal_bars_extend_from_the_left() {
        let band = ScaleBand::new((0.0, 100.0), 1);
        let x = ScaleLinear::new((0.0, 10.0), (0.0, 300.0));
        let spec = BarMarkSpec::new(2, BarOrient::Horizontal, band, x);
        let marks = spec.marks(&[(7, 5.0)]);
        let MarkPayload::Rect(r) = &marks[0].payload else {
            panic!("expected rect");
        };
        assert_eq!(r.rect.x0, 0.0);
        assert_eq!(r.rect.x1, 150.0);
    }

    #[test]
    fn diverging_bars_anchor_at_the_baseline() {
        let band = ScaleBand::new((0.0, 100.0), 2);
        let x = ScaleLinear::new((-100.0, 100.0), (0.0, 400.0));
        let spec = BarMarkSpec::new(3, BarOrient::Horizontal, band, x);
        let marks = spec.marks(&[(1, -50.0), (2, 50.0)]);
        let MarkPayload::Rect(neg) = &marks[0].payload else {
            panic!("expected rect");
        };
        let MarkPayload::Rect(pos) = &marks[1].payload else {
            panic!("expected rect");
        };
        // Baseline at data 0 maps to x=200.
        assert_eq!(neg.rect.x1, 200.0);
        assert_eq!(neg.rect.x0, 100.0);
        assert_eq!(pos.rect.x0, 200.0);
        assert_eq!(pos.rect.x1, 300.0);
    }

    #[test]
    fn identity_follows_row_keys_not_order() {
        let spec = vertical_spec();
        let a = spec.marks(&[(10, 50.0), (11, 60.0)]);
        let b = spec.marks(&[(11, 60.0)]);
        // Key 11 keeps its id even after key 10 is gone.
        assert_eq!(a[1].id, b[0].id);
    }
}
