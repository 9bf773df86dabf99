// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The settings model exposed to the host's property pane.
//!
//! Hosts push overrides as JSON objects; every section and field falls back to
//! its default when absent, and a payload that fails to deserialize falls back
//! to the full defaults with a logged warning. Enumeration is a pure
//! pass-through of the (possibly overridden) configuration.

use serde::{Deserialize, Serialize};

use crate::variant::ChartVariant;

/// Chart-level appearance settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartSettings {
    /// Which render variant to use.
    pub variant: ChartVariant,
    /// Bar fill color as an `[r, g, b]` triple.
    pub bar_color: [u8; 3],
    /// Percent-difference pill color as an `[r, g, b, a]` quad.
    pub pill_color: [u8; 4],
    /// Corner radius for the percent-difference pills.
    pub pill_corner_radius: f64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            variant: ChartVariant::default(),
            bar_color: [57, 123, 180],
            pill_color: [220, 0, 0, 159],
            pill_corner_radius: 5.0,
        }
    }
}

/// Axis paddings and tick styling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisSettings {
    /// Vertical space reserved below the plot for the x axis.
    pub x_padding: f64,
    /// Horizontal space reserved left of the plot for the y axis.
    pub y_padding: f64,
    /// Tick line length.
    pub tick_size: f64,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            x_padding: 50.0,
            y_padding: 50.0,
            tick_size: 1.0,
        }
    }
}

/// Data-label toggles and sizing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelSettings {
    /// Show magnitude-suffixed value labels above bars.
    pub show_value_labels: bool,
    /// Show percent-of-max labels above bars.
    pub show_percent_labels: bool,
    /// Show percent-difference pills between adjacent bars.
    pub show_diff_labels: bool,
    /// Base font size for data labels.
    pub font_size: f64,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            show_value_labels: true,
            show_percent_labels: true,
            show_diff_labels: true,
            font_size: 12.0,
        }
    }
}

/// The full visual configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisualSettings {
    /// Chart-level appearance.
    pub chart: ChartSettings,
    /// Axis paddings and tick styling.
    pub axis: AxisSettings,
    /// Data-label toggles and sizing.
    pub labels: LabelSettings,
}

impl VisualSettings {
    /// Deserializes a host settings payload.
    pub fn parse(payload: &serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(payload.clone())
    }

    /// Deserializes a host settings payload, falling back to defaults.
    pub fn parse_or_default(payload: &serde_json::Value) -> Self {
        match Self::parse(payload) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("malformed settings payload, using defaults: {err}");
                Self::default()
            }
        }
    }
}

/// One configurable-object descriptor returned to the host's property pane.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SettingsInstance {
    /// The object name the host shows as a section.
    pub object_name: &'static str,
    /// The section's current property values.
    pub properties: serde_json::Value,
}

/// Enumerates the configurable objects of `settings` for the host.
///
/// Pure pass-through: one descriptor per settings section, properties taken
/// from the given configuration as-is.
pub fn enumerate_settings(settings: &VisualSettings) -> Vec<SettingsInstance> {
    let sections: [(&'static str, Result<serde_json::Value, _>); 3] = [
        ("chart", serde_json::to_value(&settings.chart)),
        ("axis", serde_json::to_value(&settings.axis)),
        ("labels", serde_json::to_value(&settings.labels)),
    ];
    sections
        .into_iter()
        .filter_map(|(object_name, properties)| match properties {
            Ok(properties) => Some(SettingsInstance {
                object_name,
                properties,
            }),
            Err(err) => {
                log::warn!("skipping unserializable settings object {object_name}: {err}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_are_stable() {
        let s = VisualSettings::default();
        assert_eq!(s.axis.x_padding, 50.0);
        assert_eq!(s.chart.bar_color, [57, 123, 180]);
        assert_eq!(s.chart.variant, ChartVariant::LabeledColumns);
    }

    #[test]
    fn partial_payload_fills_in_defaults() {
        let payload = json!({ "axis": { "xPadding": 64.0 } });
        let s = VisualSettings::parse_or_default(&payload);
        assert_eq!(s.axis.x_padding, 64.0);
        assert_eq!(s.axis.y_padding, 50.0);
        assert!(s.labels.show_value_labels);
    }

    #[test]
    fn malformed_payload_falls_back_to_defaults() {
        let payload = json!({ "axis": { "xPadding": "not a number" } });
        assert_eq!(
            VisualSettings::parse_or_default(&payload),
            VisualSettings::default()
        );
    }

    #[test]
    fn enumeration_passes_the_configuration_through() {
        let instances = enumerate_settings(&VisualSettings::default());
        assert_eq!(instances.len(), 3);
        assert_eq!(instances[0].object_name, "chart");
        assert_eq!(instances[1].properties["xPadding"], json!(50.0));
    }

    #[test]
    fn settings_round_trip_through_json() {
        let mut s = VisualSettings::default();
        s.chart.variant = ChartVariant::DivergingScale;
        let value = serde_json::to_value(&s).expect("serialize");
        assert_eq!(VisualSettings::parse(&value).expect("parse"), s);
    }
}
