// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The four render variants.
//!
//! Each variant is an independent layout recipe over the same view model: it
//! instantiates scales against the viewport, then emits one primitive set per
//! data point keyed by category. All geometry is a pure function of
//! (view model, viewport, settings); an empty view model emits no marks at
//! all, leaving a correctly sized but blank canvas.

use embar_charts::{
    ANNOTATION_FILL, ANNOTATION_LABELS, AxisSpec, BarMarkSpec, BarOrient, HeuristicTextMeasurer,
    RectMarkSpec, ScaleBand, ScaleBandSpec, ScaleLinear, ScaleLinearSpec, TextMarkSpec,
    magnitude_label, percent_diff, percent_of_max,
};
use embar_core::{Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::{Point, Rect};
use peniko::{Brush, Color, Gradient};
use serde::{Deserialize, Serialize};

use crate::data::ViewModel;
use crate::keys::CategoryKeys;
use crate::settings::VisualSettings;
use crate::visual::Viewport;

/// Which layout recipe the visual renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartVariant {
    /// Vertical bars with percent-difference pills, magnitude labels and
    /// percent-of-max labels.
    #[default]
    LabeledColumns,
    /// Vertical bars with a category axis only.
    Columns,
    /// Horizontal bars, single color, category axis only.
    Bars,
    /// Diverging horizontal bars over a fixed [-100, 100] domain with a
    /// gradient fill and raw-value labels.
    DivergingScale,
}

// Mark id namespaces. Series marks combine these with per-category keys;
// axes use the namespace shifted into a raw id base.
const BARS: u16 = 1;
const PILLS: u16 = 2;
const DIFF_LABELS: u16 = 3;
const VALUE_LABELS: u16 = 4;
const PERCENT_LABELS: u16 = 5;
const X_AXIS: u16 = 100;
const Y_AXIS: u16 = 101;

fn axis_id_base(group: u16) -> u64 {
    u64::from(group) << 48
}

/// Inner padding of the category band, in band units.
const BAND_PADDING: f64 = 0.2;

fn bar_brush(settings: &VisualSettings) -> Brush {
    let [r, g, b] = settings.chart.bar_color;
    Brush::Solid(Color::from_rgb8(r, g, b))
}

fn pill_brush(settings: &VisualSettings) -> Brush {
    let [r, g, b, a] = settings.chart.pill_color;
    Brush::Solid(Color::from_rgba8(r, g, b, a))
}

fn category_formatter(view: &ViewModel) -> impl Fn(f64, f64) -> String + 'static {
    let names: Vec<String> = view
        .data_points
        .iter()
        .map(|p| p.category.clone())
        .collect();
    move |v, _| names.get(v as usize).cloned().unwrap_or_default()
}

/// Generates the desired mark set for one update.
pub(crate) fn build_marks(
    view: &ViewModel,
    keys: &mut CategoryKeys,
    viewport: Viewport,
    settings: &VisualSettings,
) -> Vec<Mark> {
    if view.is_empty() {
        return Vec::new();
    }
    match settings.chart.variant {
        ChartVariant::LabeledColumns => columns(view, keys, viewport, settings, true),
        ChartVariant::Columns => columns(view, keys, viewport, settings, false),
        ChartVariant::Bars => horizontal_bars(view, keys, viewport, settings),
        ChartVariant::DivergingScale => diverging_scale(view, keys, viewport, settings),
    }
}

fn keyed_rows(view: &ViewModel, keys: &mut CategoryKeys) -> Vec<(u64, f64)> {
    view.data_points
        .iter()
        .map(|p| (keys.key_for(&p.category), p.value))
        .collect()
}

/// Variants (a) and (b): vertical bars over a bottom category axis, with the
/// full label set when `labeled` is true.
fn columns(
    view: &ViewModel,
    keys: &mut CategoryKeys,
    viewport: Viewport,
    settings: &VisualSettings,
    labeled: bool,
) -> Vec<Mark> {
    let width = viewport.width;
    let height = viewport.height;
    let x_padding = settings.axis.x_padding;
    // The top fifth of the canvas stays clear for labels above the tallest bar.
    let plot = Rect::new(0.0, height * 0.2, width, height - x_padding);

    let rows = keyed_rows(view, keys);
    let values = view.values();

    let band = ScaleBand::new((plot.x0, plot.x1), rows.len())
        .with_padding(BAND_PADDING, BAND_PADDING);
    let bw = band.band_width();
    let y_scale = ScaleLinear::new((0.0, view.max_value), (plot.y1, plot.y0));

    let mut marks = BarMarkSpec::new(BARS, BarOrient::Vertical, band, y_scale)
        .with_fill(bar_brush(settings))
        .marks(&rows);

    let x_axis = AxisSpec::bottom(
        axis_id_base(X_AXIS),
        ScaleBandSpec::new(rows.len()).with_padding(BAND_PADDING, BAND_PADDING),
    )
    .with_tick_size(settings.axis.tick_size)
    .with_tick_formatter(category_formatter(view));
    marks.extend(x_axis.marks(plot));

    if !labeled {
        return marks;
    }

    let font_size = settings.labels.font_size;
    for (i, (key, value)) in rows.iter().copied().enumerate() {
        let center = band.center(i);

        if settings.labels.show_percent_labels {
            marks.push(
                TextMarkSpec::new(
                    MarkId::for_key(PERCENT_LABELS, key),
                    Point::new(center, y_scale.map(value) - height * 0.01),
                    percent_of_max(value, &values),
                )
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Alphabetic)
                .with_font_size(font_size * 0.9)
                .mark(),
            );
        }

        if settings.labels.show_value_labels {
            marks.push(
                TextMarkSpec::new(
                    MarkId::for_key(VALUE_LABELS, key),
                    Point::new(center, y_scale.map(value) - 23.0),
                    magnitude_label(value),
                )
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Alphabetic)
                .with_font_size(font_size * 1.05)
                .with_font_weight(500)
                .with_fill(bar_brush(settings))
                .mark(),
            );
        }

        if settings.labels.show_diff_labels {
            let diff = percent_diff(&values, i);
            if !diff.is_empty() {
                // The pill straddles the gap between this bar and the next.
                marks.push(
                    RectMarkSpec::new(
                        MarkId::for_key(PILLS, key),
                        Rect::new(
                            band.x(i) + bw - 10.0,
                            plot.y1 - 40.0,
                            band.x(i) + bw - 10.0 + bw / 4.0 + 20.0,
                            plot.y1 - 10.0,
                        ),
                    )
                    .with_corner_radius(settings.chart.pill_corner_radius)
                    .with_fill(pill_brush(settings))
                    .with_z_index(ANNOTATION_FILL)
                    .mark(),
                );
                marks.push(
                    TextMarkSpec::new(
                        MarkId::for_key(DIFF_LABELS, key),
                        Point::new(band.x(i) + bw + bw / 8.0, plot.y1 - 20.0),
                        diff,
                    )
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Middle)
                    .with_font_size(font_size * 0.85)
                    .with_fill(Color::WHITE)
                    .with_z_index(ANNOTATION_LABELS)
                    .mark(),
                );
            }
        }
    }

    marks
}

/// Variant (c): horizontal bars, single color, left category axis only.
fn horizontal_bars(
    view: &ViewModel,
    keys: &mut CategoryKeys,
    viewport: Viewport,
    settings: &VisualSettings,
) -> Vec<Mark> {
    let rows = keyed_rows(view, keys);

    let y_axis = AxisSpec::left(
        axis_id_base(Y_AXIS),
        ScaleBandSpec::new(rows.len()).with_padding(BAND_PADDING, BAND_PADDING),
    )
    .with_tick_size(settings.axis.tick_size)
    .with_tick_formatter(category_formatter(view));

    // Reserve exactly what the longest category label needs, bounded below by
    // the configured y padding.
    let left = y_axis
        .measure(&HeuristicTextMeasurer)
        .max(settings.axis.y_padding);
    let plot = plot_with_margins(viewport, left, 10.0);

    let band = ScaleBand::new((plot.y0, plot.y1), rows.len())
        .with_padding(BAND_PADDING, BAND_PADDING);
    let x_scale = ScaleLinear::new((0.0, view.max_value), (plot.x0, plot.x1));

    let mut marks = BarMarkSpec::new(BARS, BarOrient::Horizontal, band, x_scale)
        .with_fill(bar_brush(settings))
        .marks(&rows);
    marks.extend(y_axis.marks(plot));
    marks
}

/// Variant (d): diverging horizontal bars over a fixed [-100, 100] domain
/// with a gradient fill and raw-value labels.
fn diverging_scale(
    view: &ViewModel,
    keys: &mut CategoryKeys,
    viewport: Viewport,
    settings: &VisualSettings,
) -> Vec<Mark> {
    // Clamp into the fixed domain so out-of-range host data cannot push bars
    // outside the plot.
    let rows: Vec<(u64, f64)> = view
        .data_points
        .iter()
        .map(|p| (keys.key_for(&p.category), p.value.clamp(-100.0, 100.0)))
        .collect();

    let y_axis = AxisSpec::left(
        axis_id_base(Y_AXIS),
        ScaleBandSpec::new(rows.len()).with_padding(BAND_PADDING, BAND_PADDING),
    )
    .with_tick_size(settings.axis.tick_size)
    .with_tick_formatter(category_formatter(view));
    let left = y_axis
        .measure(&HeuristicTextMeasurer)
        .max(settings.axis.y_padding);
    let plot = plot_with_margins(viewport, left, settings.axis.x_padding);

    let band = ScaleBand::new((plot.y0, plot.y1), rows.len())
        .with_padding(BAND_PADDING, BAND_PADDING);
    let x_scale = ScaleLinear::new((-100.0, 100.0), (plot.x0, plot.x1));

    // One shared gradient in plot coordinates; each bar samples the span it
    // covers, so color encodes position on the scale.
    let gradient = Gradient::new_linear(
        Point::new(plot.x0, 0.0),
        Point::new(plot.x1, 0.0),
    )
    .with_stops([
        (0.0, Color::from_rgb8(196, 30, 58)),
        (0.5, Color::from_rgb8(221, 221, 221)),
        (1.0, Color::from_rgb8(27, 158, 119)),
    ]);

    let mut marks = BarMarkSpec::new(BARS, BarOrient::Horizontal, band, x_scale)
        .with_fill(gradient)
        .marks(&rows);

    let x_axis = AxisSpec::bottom(
        axis_id_base(X_AXIS),
        ScaleLinearSpec::new((-100.0, 100.0)),
    )
    .with_tick_count(5)
    .with_tick_size(settings.axis.tick_size);
    marks.extend(x_axis.marks(plot));
    marks.extend(y_axis.marks(plot));

    let font_size = settings.labels.font_size;
    for (i, (key, value)) in rows.iter().copied().enumerate() {
        let end = x_scale.map(value);
        let (anchor, dx) = if value >= 0.0 {
            (TextAnchor::Start, 4.0)
        } else {
            (TextAnchor::End, -4.0)
        };
        marks.push(
            TextMarkSpec::new(
                MarkId::for_key(VALUE_LABELS, key),
                Point::new(end + dx, band.center(i)),
                format!("{value}"),
            )
            .with_anchor(anchor)
            .with_baseline(TextBaseline::Middle)
            .with_font_size(font_size * 0.85)
            .mark(),
        );
    }

    marks
}

fn plot_with_margins(viewport: Viewport, left: f64, bottom: f64) -> Rect {
    let right = viewport.width.max(left + 1.0);
    let low = viewport.height.max(bottom + 11.0);
    Rect::new(left, 10.0, right, low - bottom)
}
