// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! A single [`AxisSpec`] with an `orient` covers the two placements the bar
//! visual uses: a bottom axis under vertical columns and a left axis beside
//! horizontal bars. The axis generates domain/tick/label marks with
//! deterministic id offsets from `id_base`, so axis marks reconcile in place
//! across updates just like series marks.

use std::sync::Arc;

use embar_core::{Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use crate::format::format_tick_with_step;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{ScaleBand, ScaleLinear, ScaleSpec};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A paint + width pair for stroked rules (domain lines, ticks).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            label_fill: rule.brush.clone(),
            label_font_size: 10.0,
            rule,
        }
    }
}

/// Axis placement relative to the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
}

/// An axis specification.
#[derive(Clone)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// The axis scale specification.
    pub scale: ScaleSpec,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks (continuous scales only).
    pub tick_count: usize,
    /// Tick line length in scene coordinates.
    pub tick_size: f64,
    /// Whether to draw tick marks.
    pub ticks: bool,
    /// Whether to draw tick labels.
    pub labels: bool,
    /// Whether to draw the axis domain line.
    pub show_domain: bool,
    /// Padding between the tick end and the tick label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional tick label formatter.
    ///
    /// The first argument is the tick value (for band scales, the band index);
    /// the second is the tick step, usable for consistent decimal formatting.
    pub tick_formatter: Option<Arc<dyn Fn(f64, f64) -> String>>,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("id_base", &self.id_base)
            .field("scale", &self.scale)
            .field("orient", &self.orient)
            .field("tick_count", &self.tick_count)
            .field("tick_size", &self.tick_size)
            .field("ticks", &self.ticks)
            .field("labels", &self.labels)
            .field("show_domain", &self.show_domain)
            .field("tick_padding", &self.tick_padding)
            .field("style", &self.style)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl AxisSpec {
    /// Creates a new axis specification with sensible defaults.
    pub fn new(id_base: u64, scale: impl Into<ScaleSpec>, orient: AxisOrient) -> Self {
        let tick_padding = match orient {
            AxisOrient::Bottom => 12.0,
            AxisOrient::Left => 6.0,
        };
        Self {
            id_base,
            scale: scale.into(),
            orient,
            tick_count: 10,
            tick_size: 5.0,
            ticks: true,
            labels: true,
            show_domain: true,
            tick_padding,
            style: AxisStyle::default(),
            tick_formatter: None,
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Bottom)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Left)
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set tick size in scene coordinates.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Enable or disable tick marks.
    pub fn with_ticks(mut self, ticks: bool) -> Self {
        self.ticks = ticks;
        self
    }

    /// Enable or disable tick labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Enable or disable the axis domain line.
    pub fn with_domain(mut self, domain: bool) -> Self {
        self.show_domain = domain;
        self
    }

    /// Set tick padding in scene coordinates.
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Set a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64, f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Returns a linear scale mapping axis values into plot coordinates.
    ///
    /// Panics if this axis does not use a linear scale.
    pub fn scale_linear(&self, plot: Rect) -> ScaleLinear {
        let range = match self.orient {
            AxisOrient::Bottom => (plot.x0, plot.x1),
            AxisOrient::Left => (plot.y1, plot.y0),
        };
        match self.scale {
            ScaleSpec::Linear(s) => s.instantiate_resolved(range, self.tick_count),
            ScaleSpec::Band(_) => panic!("scale_linear called on a band axis scale"),
        }
    }

    /// Returns a band scale mapping indices into plot coordinates.
    ///
    /// Panics if this axis does not use a band scale.
    pub fn scale_band(&self, plot: Rect) -> ScaleBand {
        let range = match self.orient {
            AxisOrient::Bottom => (plot.x0, plot.x1),
            AxisOrient::Left => (plot.y0, plot.y1),
        };
        match self.scale {
            ScaleSpec::Band(s) => s.instantiate(range),
            ScaleSpec::Linear(_) => panic!("scale_band called on a linear axis scale"),
        }
    }

    fn tick_values(&self) -> (Vec<f64>, f64) {
        match self.scale {
            ScaleSpec::Linear(s) => {
                let domain = s.resolved_domain(self.tick_count);
                let tmp = ScaleLinear::new(domain, (0.0, 1.0));
                let ticks = tmp.ticks(self.tick_count);
                let step = tick_step(&ticks);
                (ticks, step)
            }
            ScaleSpec::Band(s) => {
                let ticks: Vec<f64> = (0..s.count).map(|i| i as f64).collect();
                (ticks, 1.0)
            }
        }
    }

    fn format_tick(&self, v: f64, step: f64) -> String {
        match &self.tick_formatter {
            Some(f) => (f)(v, step),
            None => format_tick_with_step(v, step),
        }
    }

    /// Measure the thickness this axis needs along its normal direction.
    pub fn measure(&self, measurer: &dyn crate::measure::TextMeasurer) -> f64 {
        let tick_extent = if self.ticks { self.tick_size.abs() } else { 0.0 };
        if !self.labels {
            return tick_extent;
        }
        let (ticks, step) = self.tick_values();
        let mut max_label_extent = 0.0_f64;
        for v in ticks {
            let label = self.format_tick(v, step);
            let (w, h) = measurer.measure(&label, self.style.label_font_size);
            let extent = match self.orient {
                AxisOrient::Bottom => h,
                AxisOrient::Left => w,
            };
            max_label_extent = max_label_extent.max(extent);
        }
        tick_extent + self.tick_padding.max(0.0) + max_label_extent
    }

    /// Generate axis marks for the given plot rectangle.
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        match self.orient {
            AxisOrient::Bottom => self.marks_bottom(plot),
            AxisOrient::Left => self.marks_left(plot),
        }
    }

    fn tick_pos(&self, v: f64, plot: Rect) -> f64 {
        match self.scale {
            ScaleSpec::Linear(_) => self.scale_linear(plot).map(v),
            ScaleSpec::Band(_) => {
                let band = self.scale_band(plot);
                band.center(v as usize)
            }
        }
    }

    fn marks_bottom(&self, plot: Rect) -> Vec<Mark> {
        let y = plot.y1;
        let tick_size = self.tick_size.abs();
        let tick_extent = if self.ticks { tick_size } else { 0.0 };
        let (ticks, step) = self.tick_values();
        let banded = matches!(self.scale, ScaleSpec::Band(_));

        let mut out = Vec::new();
        if self.show_domain {
            out.push(
                RuleMarkSpec::horizontal(MarkId::from_raw(self.id_base), y, plot.x0, plot.x1)
                    .with_stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
                    .with_z_index(z_order::AXIS_RULES)
                    .mark(),
            );
        }

        let ticks_len = ticks.len();
        for (i, v) in ticks.iter().copied().enumerate() {
            let x = self.tick_pos(v, plot);
            if x < plot.x0 - 1.0e-9 || x > plot.x1 + 1.0e-9 {
                continue;
            }

            if self.ticks {
                out.push(
                    RuleMarkSpec::vertical(
                        MarkId::from_raw(self.id_base + 100 + i as u64),
                        x,
                        y,
                        y + tick_size,
                    )
                    .with_stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
                    .with_z_index(z_order::AXIS_RULES)
                    .mark(),
                );
            }

            if self.labels {
                // Clamp the outermost labels of a continuous axis inward so
                // they stay inside the plot span; band labels sit at band
                // centers and never need it.
                let (anchor, x) = if banded || (i != 0 && i + 1 != ticks_len) {
                    (TextAnchor::Middle, x)
                } else if i == 0 {
                    (TextAnchor::Start, x.clamp(plot.x0, plot.x1))
                } else {
                    (TextAnchor::End, x.clamp(plot.x0, plot.x1))
                };
                out.push(
                    TextMarkSpec::new(
                        MarkId::from_raw(self.id_base + 1000 + i as u64),
                        Point::new(x, y + tick_extent + self.tick_padding.max(0.0)),
                        self.format_tick(v, step),
                    )
                    .with_anchor(anchor)
                    .with_baseline(TextBaseline::Hanging)
                    .with_font_size(self.style.label_font_size)
                    .with_fill(self.style.label_fill.clone())
                    .with_z_index(z_order::AXIS_LABELS)
                    .mark(),
                );
            }
        }

        out
    }

    fn marks_left(&self, plot: Rect) -> Vec<Mark> {
        let x = plot.x0;
        let tick_size = self.tick_size.abs();
        let tick_extent = if self.ticks { tick_size } else { 0.0 };
        let (ticks, step) = self.tick_values();

        let mut out = Vec::new();
        if self.show_domain {
            out.push(
                RuleMarkSpec::vertical(MarkId::from_raw(self.id_base), x, plot.y0, plot.y1)
                    .with_stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
                    .with_z_index(z_order::AXIS_RULES)
                    .mark(),
            );
        }

        for (i, v) in ticks.iter().copied().enumerate() {
            let y = self.tick_pos(v, plot);
            if y < plot.y0 - 1.0e-9 || y > plot.y1 + 1.0e-9 {
                continue;
            }

            if self.ticks {
                out.push(
                    RuleMarkSpec::horizontal(
                        MarkId::from_raw(self.id_base + 100 + i as u64),
                        y,
                        x - tick_size,
                        x,
                    )
                    .with_stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
                    .with_z_index(z_order::AXIS_RULES)
                    .mark(),
                );
            }

            if self.labels {
                out.push(
                    TextMarkSpec::new(
                        MarkId::from_raw(self.id_base + 1000 + i as u64),
                        Point::new(x - tick_extent - self.tick_padding.max(0.0), y),
                        self.format_tick(v, step),
                    )
                    .with_anchor(TextAnchor::End)
                    .with_baseline(TextBaseline::Middle)
                    .with_font_size(self.style.label_font_size)
                    .with_fill(self.style.label_fill.clone())
                    .with_z_index(z_order::AXIS_LABELS)
                    .mark(),
                );
            }
        }

        out
    }
}

fn tick_step(ticks: &[f64]) -> f64 {
    if ticks.len() >= 2 {
        (ticks[1] - ticks[0]).abs()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use embar_core::MarkPayload;

    use super::*;
    use crate::scale::{ScaleBandSpec, ScaleLinearSpec};

    fn plot() -> Rect {
        Rect::new(50.0, 20.0, 450.0, 220.0)
    }

    #[test]
    fn band_axis_labels_use_the_formatter() {
        let names = vec!["alpha".to_owned(), "beta".to_owned()];
        let axis = AxisSpec::bottom(1000, ScaleBandSpec::new(2))
            .with_tick_formatter(move |v, _| names[v as usize].clone());
        let marks = axis.marks(plot());
        let labels: Vec<&str> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, ["alpha", "beta"]);
    }

    #[test]
    fn band_axis_emits_domain_ticks_and_labels() {
        let axis = AxisSpec::bottom(1000, ScaleBandSpec::new(3));
        let marks = axis.marks(plot());
        // 1 domain + 3 ticks + 3 labels.
        assert_eq!(marks.len(), 7);
    }

    #[test]
    fn axis_marks_have_stable_ids_across_calls() {
        let axis = AxisSpec::bottom(1000, ScaleBandSpec::new(2));
        let a = axis.marks(plot());
        let b = axis.marks(plot());
        let ids = |marks: &[Mark]| marks.iter().map(|m| m.id).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn left_linear_axis_labels_sit_left_of_the_plot() {
        let axis = AxisSpec::left(2000, ScaleLinearSpec::new((0.0, 100.0))).with_tick_count(5);
        for mark in axis.marks(plot()) {
            if let MarkPayload::Text(t) = &mark.payload {
                assert!(t.pos.x < 50.0);
            }
        }
    }

    #[test]
    fn measure_accounts_for_label_extent() {
        let axis = AxisSpec::left(0, ScaleBandSpec::new(1))
            .with_tick_formatter(|_, _| "a long category".to_owned());
        let thin = AxisSpec::left(0, ScaleBandSpec::new(1)).with_tick_formatter(|_, _| "x".into());
        let m = crate::measure::HeuristicTextMeasurer;
        assert!(axis.measure(&m) > thin.measure(&m));
    }
}
