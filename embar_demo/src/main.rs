// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-simulation demos for `embar_visual`.
//!
//! Each section constructs a visual, feeds it one or more host updates, and
//! snapshots the resulting SVG document, exercising the incremental paths a
//! real host would hit: first bind, value changes, category removal, resize,
//! and each render variant.
mod html;

use embar_visual::{
    BarChartVisual, CategoricalTable, HostVisual, UpdateOptions, Viewport, VisualContext,
};
use serde_json::json;

const VIEWPORT: Viewport = Viewport {
    width: 640.0,
    height: 360.0,
};

fn main() {
    let sections = vec![
        labeled_columns_demo(),
        value_change_demo(),
        category_removal_demo(),
        resize_demo(),
        columns_demo(),
        bars_demo(),
        diverging_scale_demo(),
        settings_demo(),
    ];

    let html = html::render_report("Embar visual demo", &sections);
    std::fs::write("embar_demo.html", html).expect("write embar_demo.html");
    println!("wrote embar_demo.html");
}

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

fn sales_table() -> CategoricalTable {
    table(
        &["North", "South", "East", "West", "Online"],
        &[125_000.0, 74_500.0, 98_200.0, 41_000.0, 212_600.0],
    )
}

fn update(v: &mut BarChartVisual, t: &CategoricalTable) {
    v.update(&UpdateOptions {
        viewport: VIEWPORT,
        table: Some(t),
        settings: None,
    });
}

fn labeled_columns_demo() -> html::HtmlSection {
    let mut v = visual();
    update(&mut v, &sales_table());

    html::HtmlSection {
        title: "Labeled columns",
        description: "The default variant: columns with magnitude value labels, \
                      percent-of-max labels, and percent-difference pills between \
                      adjacent categories.",
        svg: v.svg(),
    }
}

fn value_change_demo() -> html::HtmlSection {
    let mut v = visual();
    update(&mut v, &sales_table());
    // Second frame: same categories, new values; marks update in place.
    update(
        &mut v,
        &table(
            &["North", "South", "East", "West", "Online"],
            &[140_000.0, 60_000.0, 98_200.0, 55_000.0, 190_000.0],
        ),
    );

    html::HtmlSection {
        title: "Value change",
        description: "The same categories rebound with new values. Every bar keeps \
                      its identity and updates in place; nothing enters or exits.",
        svg: v.svg(),
    }
}

fn category_removal_demo() -> html::HtmlSection {
    let mut v = visual();
    update(&mut v, &sales_table());
    update(
        &mut v,
        &table(&["North", "East", "Online"], &[125_000.0, 98_200.0, 212_600.0]),
    );

    html::HtmlSection {
        title: "Category removal",
        description: "South and West were removed from the bound table; their marks \
                      exit while the survivors keep their keys and re-lay out.",
        svg: v.svg(),
    }
}

fn resize_demo() -> html::HtmlSection {
    let mut v = visual();
    update(&mut v, &sales_table());
    v.update(&UpdateOptions {
        viewport: Viewport {
            width: 420.0,
            height: 260.0,
        },
        table: Some(&sales_table()),
        settings: None,
    });

    html::HtmlSection {
        title: "Resize",
        description: "The host shrank the viewport. All geometry re-derives from the \
                      new size; the retained mark set is unchanged.",
        svg: v.svg(),
    }
}

fn columns_demo() -> html::HtmlSection {
    let mut v = visual();
    let payload = json!({ "chart": { "variant": "columns" } });
    v.update(&UpdateOptions {
        viewport: VIEWPORT,
        table: Some(&sales_table()),
        settings: Some(&payload),
    });

    html::HtmlSection {
        title: "Columns",
        description: "The plain column variant: bars and a category axis, no data labels.",
        svg: v.svg(),
    }
}

fn bars_demo() -> html::HtmlSection {
    let mut v = visual();
    let payload = json!({ "chart": { "variant": "bars" } });
    v.update(&UpdateOptions {
        viewport: VIEWPORT,
        table: Some(&sales_table()),
        settings: Some(&payload),
    });

    html::HtmlSection {
        title: "Bars",
        description: "Horizontal bars with the category axis on the left; the axis \
                      gutter is sized to the longest label.",
        svg: v.svg(),
    }
}

fn diverging_scale_demo() -> html::HtmlSection {
    let mut v = visual();
    let payload = json!({ "chart": { "variant": "divergingScale" } });
    v.update(&UpdateOptions {
        viewport: VIEWPORT,
        table: Some(&table(
            &["Churn", "Margin", "NPS", "Growth", "Backlog"],
            &[-62.0, 18.0, 44.0, 87.0, -15.0],
        )),
        settings: Some(&payload),
    });

    html::HtmlSection {
        title: "Diverging scale",
        description: "Bars diverge from zero over a fixed [-100, 100] domain with a \
                      position-keyed gradient fill and raw-value labels at the bar ends.",
        svg: v.svg(),
    }
}

fn settings_demo() -> html::HtmlSection {
    let mut v = visual();
    let payload = json!({
        "chart": { "barColor": [46, 112, 84], "pillColor": [20, 20, 160, 200] },
        "labels": { "showPercentLabels": false },
    });
    v.update(&UpdateOptions {
        viewport: VIEWPORT,
        table: Some(&sales_table()),
        settings: Some(&payload),
    });

    html::HtmlSection {
        title: "Settings overrides",
        description: "Host-supplied settings recolor the bars and pills and hide the \
                      percent-of-max labels; everything else keeps its default.",
        svg: v.svg(),
    }
}
