// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained SVG render surface.
//!
//! The surface mirrors the scene: it holds one element worth of state per
//! retained mark, applies the per-update diff stream, and serializes the
//! whole document on demand. Marks are emitted in (z-index, id) order so
//! paint order is deterministic; gradient brushes are hoisted into `<defs>`
//! and referenced by generated ids.

use embar_core::{MarkDiff, MarkId, MarkPayload, TextAnchor, TextBaseline};
use hashbrown::HashMap;
use peniko::color::Srgb;
use peniko::{Brush, Gradient, GradientKind};

/// An SVG document kept in sync with the scene through diffs.
#[derive(Debug, Default)]
pub struct SvgSurface {
    marks: HashMap<MarkId, (i32, MarkPayload)>,
    size: (f64, f64),
}

impl SvgSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document size in CSS pixels.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = (width, height);
    }

    /// Returns the number of retained elements.
    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    /// Applies one update's diff stream.
    pub fn apply_diffs(&mut self, diffs: &[MarkDiff]) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter { id, z_index, new } => {
                    self.marks.insert(*id, (*z_index, (**new).clone()));
                }
                MarkDiff::Update {
                    id,
                    new_z_index,
                    new,
                    ..
                } => {
                    self.marks.insert(*id, (*new_z_index, (**new).clone()));
                }
                MarkDiff::Exit { id, .. } => {
                    self.marks.remove(id);
                }
            }
        }
    }

    /// Serializes the current document.
    pub fn to_svg_string(&self) -> String {
        let (width, height) = self.size;
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
        ));
        out.push('\n');

        let mut ids: Vec<_> = self.marks.keys().copied().collect();
        ids.sort_by_key(|id| {
            let (z, _payload) = self.marks.get(id).expect("id from keys");
            (*z, id.0)
        });

        let gradients = self.collect_gradients(&ids);
        write_gradient_defs(&mut out, &gradients);

        for id in &ids {
            let (_z, payload) = self.marks.get(id).expect("id from keys");
            match payload {
                MarkPayload::Rect(r) => {
                    out.push_str(&format!(
                        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                        r.rect.x0,
                        r.rect.y0,
                        r.rect.width(),
                        r.rect.height(),
                    ));
                    if r.corner_radius > 0.0 {
                        out.push_str(&format!(r#" rx="{}""#, r.corner_radius));
                    }
                    write_paint_attr(&mut out, "fill", &r.fill, &gradients);
                    out.push_str("/>\n");
                }
                MarkPayload::Text(t) => {
                    let baseline = match t.baseline {
                        TextBaseline::Middle => "middle",
                        TextBaseline::Alphabetic => "alphabetic",
                        TextBaseline::Hanging => "hanging",
                        TextBaseline::Ideographic => "ideographic",
                    };
                    out.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                        t.pos.x, t.pos.y, t.font_size, baseline
                    ));
                    if t.angle != 0.0 {
                        out.push_str(&format!(
                            r#" transform="rotate({} {} {})""#,
                            t.angle, t.pos.x, t.pos.y
                        ));
                    }
                    if t.font_weight != 400 {
                        out.push_str(&format!(r#" font-weight="{}""#, t.font_weight));
                    }
                    out.push_str(match t.anchor {
                        TextAnchor::Start => r#" text-anchor="start""#,
                        TextAnchor::Middle => r#" text-anchor="middle""#,
                        TextAnchor::End => r#" text-anchor="end""#,
                    });
                    write_paint_attr(&mut out, "fill", &t.fill, &gradients);
                    out.push('>');
                    out.push_str(&escape_xml(&t.text));
                    out.push_str("</text>\n");
                }
                MarkPayload::Path(p) => {
                    let d = p.path.to_svg();
                    out.push_str(&format!(r#"<path d="{d}""#));
                    write_paint_attr(&mut out, "fill", &p.fill, &gradients);
                    if p.stroke_width > 0.0 {
                        write_paint_attr(&mut out, "stroke", &p.stroke, &gradients);
                        out.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
                    }
                    out.push_str("/>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }

    /// Collects the distinct gradient brushes in paint order.
    fn collect_gradients(&self, ids: &[MarkId]) -> Vec<Gradient> {
        let mut gradients: Vec<Gradient> = Vec::new();
        let mut push = |brush: &Brush| {
            if let Brush::Gradient(g) = brush
                && !gradients.iter().any(|seen| seen == g)
            {
                gradients.push(g.clone());
            }
        };
        for id in ids {
            let (_z, payload) = self.marks.get(id).expect("id from keys");
            match payload {
                MarkPayload::Rect(r) => push(&r.fill),
                MarkPayload::Text(t) => push(&t.fill),
                MarkPayload::Path(p) => {
                    push(&p.fill);
                    push(&p.stroke);
                }
            }
        }
        gradients
    }
}

fn write_gradient_defs(out: &mut String, gradients: &[Gradient]) {
    if gradients.is_empty() {
        return;
    }
    out.push_str("<defs>\n");
    for (i, gradient) in gradients.iter().enumerate() {
        // Only linear gradients are produced by the chart layer.
        let GradientKind::Linear(pos) = &gradient.kind else {
            continue;
        };
        out.push_str(&format!(
            r#"<linearGradient id="grad{i}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
            pos.start.x, pos.start.y, pos.end.x, pos.end.y
        ));
        out.push('\n');
        for stop in gradient.stops.iter() {
            let rgba = stop.color.to_alpha_color::<Srgb>().to_rgba8();
            out.push_str(&format!(
                r##"<stop offset="{}" stop-color="#{:02x}{:02x}{:02x}""##,
                stop.offset, rgba.r, rgba.g, rgba.b
            ));
            if rgba.a != 255 {
                out.push_str(&format!(
                    r#" stop-opacity="{}""#,
                    f64::from(rgba.a) / 255.0
                ));
            }
            out.push_str("/>\n");
        }
        out.push_str("</linearGradient>\n");
    }
    out.push_str("</defs>\n");
}

fn svg_paint(brush: &Brush, gradients: &[Gradient]) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (value, opacity)
        }
        Brush::Gradient(g) => match gradients.iter().position(|seen| seen == g) {
            Some(i) => (format!("url(#grad{i})"), None),
            None => ("none".to_owned(), None),
        },
        _ => ("none".to_owned(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush, gradients: &[Gradient]) {
    let (value, opacity) = svg_paint(brush, gradients);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
