// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests driving [`BarChartVisual`] through the host contract.

use serde_json::json;

use crate::{
    BarChartVisual, CategoricalTable, ChartVariant, HostVisual, UpdateOptions, Viewport,
    VisualContext,
};

fn visual() -> BarChartVisual {
    BarChartVisual::new(VisualContext {
        locale: "en-US".to_owned(),
    })
}

fn table(categories: &[&str], values: &[f64]) -> CategoricalTable {
    CategoricalTable {
        categories: Some(categories.iter().map(|c| Some((*c).to_owned())).collect()),
        values: Some(values.to_vec()),
    }
}

fn options<'a>(table: Option<&'a CategoricalTable>) -> UpdateOptions<'a> {
    UpdateOptions {
        viewport: Viewport::new(800.0, 400.0),
        table,
        settings: None,
    }
}

#[test]
fn update_without_data_renders_an_empty_document() {
    let mut v = visual();
    v.update(&options(None));
    assert_eq!(v.mark_count(), 0);
    let svg = v.svg();
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"viewBox="0 0 800 400""#));
    assert!(!svg.contains("<rect"));
}

#[test]
fn first_update_populates_the_scene() {
    let mut v = visual();
    let t = table(&["a", "b", "c"], &[10.0, 20.0, 30.0]);
    v.update(&options(Some(&t)));
    assert!(v.mark_count() > 0);
    let svg = v.svg();
    // Three bars plus the pill between each adjacent pair.
    assert!(svg.matches("<rect").count() >= 5);
    assert!(svg.contains(">a</text>"));
    assert!(svg.contains(">100%</text>"));
}

#[test]
fn identical_updates_are_idempotent() {
    let mut v = visual();
    let t = table(&["a", "b"], &[1.0, 2.0]);
    v.update(&options(Some(&t)));
    let first = v.svg();
    v.update(&options(Some(&t)));
    assert_eq!(v.svg(), first);
}

#[test]
fn removing_a_category_exits_its_marks() {
    let mut v = visual();
    let t3 = table(&["a", "b", "c"], &[10.0, 20.0, 30.0]);
    v.update(&options(Some(&t3)));
    let with_three = v.mark_count();

    let t2 = table(&["a", "b"], &[10.0, 20.0]);
    v.update(&options(Some(&t2)));
    assert!(v.mark_count() < with_three);
    assert!(!v.svg().contains(">c</text>"));
}

#[test]
fn clearing_the_data_clears_the_document() {
    let mut v = visual();
    let t = table(&["a", "b"], &[1.0, 2.0]);
    v.update(&options(Some(&t)));
    v.update(&options(None));
    assert_eq!(v.mark_count(), 0);
}

#[test]
fn malformed_settings_fall_back_to_defaults() {
    let mut v = visual();
    let t = table(&["a"], &[1.0]);
    let bad = json!({ "chart": { "barColor": "blue" } });
    v.update(&UpdateOptions {
        viewport: Viewport::new(800.0, 400.0),
        table: Some(&t),
        settings: Some(&bad),
    });
    assert_eq!(v.settings(), &crate::VisualSettings::default());
    assert!(v.mark_count() > 0);
}

#[test]
fn settings_select_the_variant() {
    let mut v = visual();
    let t = table(&["a", "b"], &[-50.0, 50.0]);
    let payload = json!({ "chart": { "variant": "divergingScale" } });
    v.update(&UpdateOptions {
        viewport: Viewport::new(800.0, 400.0),
        table: Some(&t),
        settings: Some(&payload),
    });
    assert_eq!(v.settings().chart.variant, ChartVariant::DivergingScale);
    let svg = v.svg();
    assert!(svg.contains("url(#grad0)"));
    assert!(svg.contains(">-50</text>"));
}

#[test]
fn label_toggles_remove_annotations() {
    let mut v = visual();
    let t = table(&["a", "b"], &[10.0, 20.0]);
    let payload = json!({ "labels": {
        "showValueLabels": false,
        "showPercentLabels": false,
        "showDiffLabels": false,
    }});
    v.update(&UpdateOptions {
        viewport: Viewport::new(800.0, 400.0),
        table: Some(&t),
        settings: Some(&payload),
    });
    let svg = v.svg();
    assert!(!svg.contains("%</text>"));
    // Only the two bars remain as rects.
    assert_eq!(svg.matches("<rect").count(), 2);
}

#[test]
fn settings_enumeration_reflects_overrides() {
    let mut v = visual();
    let t = table(&["a"], &[1.0]);
    let payload = json!({ "axis": { "xPadding": 64.0 } });
    v.update(&UpdateOptions {
        viewport: Viewport::new(800.0, 400.0),
        table: Some(&t),
        settings: Some(&payload),
    });
    let instances = v.enumerate_settings();
    assert_eq!(instances.len(), 3);
    let axis = instances
        .iter()
        .find(|i| i.object_name == "axis")
        .expect("axis section");
    assert_eq!(axis.properties["xPadding"], json!(64.0));
}

#[test]
fn resize_moves_marks_without_changing_their_count() {
    let mut v = visual();
    let t = table(&["a", "b"], &[1.0, 2.0]);
    v.update(&options(Some(&t)));
    let count = v.mark_count();
    let before = v.svg();

    v.update(&UpdateOptions {
        viewport: Viewport::new(400.0, 300.0),
        table: Some(&t),
        settings: None,
    });
    assert_eq!(v.mark_count(), count);
    assert_ne!(v.svg(), before);
    assert!(v.svg().contains(r#"viewBox="0 0 400 300""#));
}

#[test]
fn locale_is_retained_from_construction() {
    let v = visual();
    assert_eq!(v.locale(), "en-US");
}
