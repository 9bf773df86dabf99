// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-facing visual contract and its bar-chart implementation.

use embar_core::Scene;

use crate::data::{CategoricalTable, build_view_model};
use crate::settings::{SettingsInstance, VisualSettings, enumerate_settings};
use crate::svg::SvgSurface;
use crate::{keys::CategoryKeys, variant};

/// The visual's allotted area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Construction-time context handed over by the host.
#[derive(Clone, Debug, Default)]
pub struct VisualContext {
    /// The host's locale tag, e.g. `en-US`.
    pub locale: String,
}

/// One host update: the new viewport plus whatever data and settings the host
/// chose to rebind. `None` fields mean "nothing bound", not "unchanged".
#[derive(Clone, Copy, Debug)]
pub struct UpdateOptions<'a> {
    /// The visual's allotted area.
    pub viewport: Viewport,
    /// The bound categorical table, if any.
    pub table: Option<&'a CategoricalTable>,
    /// The raw settings payload, if any.
    pub settings: Option<&'a serde_json::Value>,
}

/// The contract a host drives an embedded visual through.
pub trait HostVisual {
    /// Processes one host update end to end.
    fn update(&mut self, options: &UpdateOptions<'_>);

    /// Enumerates the configurable objects for the host's property pane.
    fn enumerate_settings(&self) -> Vec<SettingsInstance>;
}

/// The embeddable bar chart.
///
/// Holds all cross-update state: the effective settings, the category key
/// registry, the retained scene, and the SVG surface the scene is mirrored
/// into. One instance corresponds to one mount point in the host.
#[derive(Debug)]
pub struct BarChartVisual {
    locale: String,
    settings: VisualSettings,
    keys: CategoryKeys,
    scene: Scene,
    surface: SvgSurface,
    update_count: u64,
}

impl BarChartVisual {
    /// Creates a visual for one host mount point.
    pub fn new(context: VisualContext) -> Self {
        Self {
            locale: context.locale,
            settings: VisualSettings::default(),
            keys: CategoryKeys::new(),
            scene: Scene::new(),
            surface: SvgSurface::new(),
            update_count: 0,
        }
    }

    /// Returns the host locale this visual was constructed with.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Returns the currently effective settings.
    pub fn settings(&self) -> &VisualSettings {
        &self.settings
    }

    /// Serializes the current SVG document.
    pub fn svg(&self) -> String {
        self.surface.to_svg_string()
    }

    /// Returns the number of retained marks.
    pub fn mark_count(&self) -> usize {
        self.scene.len()
    }
}

impl HostVisual for BarChartVisual {
    fn update(&mut self, options: &UpdateOptions<'_>) {
        self.update_count += 1;
        if let Some(payload) = options.settings {
            self.settings = VisualSettings::parse_or_default(payload);
        }

        let view = build_view_model(options.table);
        let marks = variant::build_marks(&view, &mut self.keys, options.viewport, &self.settings);
        let diffs = self.scene.tick(marks);

        self.surface
            .set_size(options.viewport.width, options.viewport.height);
        self.surface.apply_diffs(&diffs);

        log::debug!(
            "update #{}: {} points, {} diffs, {} retained marks",
            self.update_count,
            view.data_points.len(),
            diffs.len(),
            self.scene.len()
        );
    }

    fn enumerate_settings(&self) -> Vec<SettingsInstance> {
        enumerate_settings(&self.settings)
    }
}
