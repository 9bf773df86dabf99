// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An embeddable bar-chart visual for a business-intelligence host.
//!
//! The host drives the component through a three-operation contract:
//! construct ([`BarChartVisual::new`]), update ([`HostVisual::update`]) and
//! settings enumeration ([`HostVisual::enumerate_settings`]). Each update
//! flattens the host's categorical table into a [`ViewModel`], generates marks
//! for the configured [`ChartVariant`], reconciles them against the retained
//! scene by category key, and refreshes an SVG document for the host's mount
//! point.
//!
//! Malformed host data never panics: it degrades to an empty view model, and
//! malformed settings payloads fall back to defaults with a logged warning.

mod data;
mod keys;
mod settings;
mod svg;
mod variant;
mod visual;

#[cfg(test)]
mod visual_tests;

pub use data::{CategoricalTable, DataPoint, ViewModel, build_view_model};
pub use keys::CategoryKeys;
pub use settings::{
    AxisSettings, ChartSettings, LabelSettings, SettingsInstance, VisualSettings,
    enumerate_settings,
};
pub use svg::SvgSurface;
pub use variant::ChartVariant;
pub use visual::{BarChartVisual, HostVisual, UpdateOptions, Viewport, VisualContext};
