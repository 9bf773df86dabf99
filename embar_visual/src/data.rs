// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host payload types and the view-model builder.

/// The categorical table shape the host binds to the visual.
///
/// Either column (or the table itself) may be absent, and individual cells may
/// be null (`None` categories) or malformed (non-finite values). The builder
/// tolerates all of it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoricalTable {
    /// Category labels, one per row; `None` cells are null categories.
    pub categories: Option<Vec<Option<String>>>,
    /// Numeric values, one per row; missing cells may be encoded as `NaN`.
    pub values: Option<Vec<f64>>,
}

/// One row of the host-bound table, normalized for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    /// The category label (x-axis grouping key).
    pub category: String,
    /// The numeric value.
    pub value: f64,
}

/// The render-ready projection of host data.
///
/// A fresh view model is built on every host update, stays immutable for one
/// render pass, and is discarded afterward. Point order matches host category
/// order; adjacent-pair comparisons depend on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewModel {
    /// The normalized rows, in host order.
    pub data_points: Vec<DataPoint>,
    /// The maximum emitted value, or `0.0` when no points exist.
    pub max_value: f64,
}

impl ViewModel {
    /// Returns `true` if there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.data_points.is_empty()
    }

    /// Collects the value column, in point order.
    pub fn values(&self) -> Vec<f64> {
        self.data_points.iter().map(|p| p.value).collect()
    }
}

/// Flattens a nullable host table into a [`ViewModel`]. Never panics.
///
/// Absence of the table or of either column yields the empty view model.
/// Otherwise rows are scanned up to the longer column's length:
/// - rows past the category column, or with a null category, are skipped
///   (a bar without a key has no stable identity);
/// - values past the value column, or non-finite values, are coerced to `0.0`.
pub fn build_view_model(table: Option<&CategoricalTable>) -> ViewModel {
    let Some(table) = table else {
        return ViewModel::default();
    };
    let (Some(categories), Some(values)) = (&table.categories, &table.values) else {
        return ViewModel::default();
    };

    let len = categories.len().max(values.len());
    let mut data_points = Vec::with_capacity(len);
    for i in 0..len {
        let Some(category) = categories.get(i).and_then(|c| c.as_deref()) else {
            continue;
        };
        let value = values
            .get(i)
            .copied()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        data_points.push(DataPoint {
            category: category.to_owned(),
            value,
        });
    }

    let max_value = data_points
        .iter()
        .map(|p| p.value)
        .fold(f64::NEG_INFINITY, f64::max);
    let max_value = if max_value.is_finite() { max_value } else { 0.0 };

    ViewModel {
        data_points,
        max_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(categories: &[&str], values: &[f64]) -> CategoricalTable {
        CategoricalTable {
            categories: Some(categories.iter().map(|c| Some((*c).to_owned())).collect()),
            values: Some(values.to_vec()),
        }
    }

    #[test]
    fn missing_table_yields_empty_model() {
        let vm = build_view_model(None);
        assert!(vm.data_points.is_empty());
        assert_eq!(vm.max_value, 0.0);
    }

    #[test]
    fn missing_columns_yield_empty_model() {
        let no_values = CategoricalTable {
            categories: Some(vec![Some("a".to_owned())]),
            values: None,
        };
        let no_categories = CategoricalTable {
            categories: None,
            values: Some(vec![1.0]),
        };
        assert_eq!(build_view_model(Some(&no_values)), ViewModel::default());
        assert_eq!(build_view_model(Some(&no_categories)), ViewModel::default());
    }

    #[test]
    fn rows_flatten_in_host_order() {
        let vm = build_view_model(Some(&table(&["a", "b", "c"], &[1.0, 3.0, 2.0])));
        assert_eq!(vm.data_points.len(), 3);
        assert_eq!(vm.data_points[1].category, "b");
        assert_eq!(vm.max_value, 3.0);
    }

    #[test]
    fn short_value_column_coerces_missing_to_zero() {
        let vm = build_view_model(Some(&table(&["a", "b"], &[5.0])));
        assert_eq!(vm.data_points.len(), 2);
        assert_eq!(vm.data_points[1].value, 0.0);
        assert_eq!(vm.max_value, 5.0);
    }

    #[test]
    fn rows_past_the_category_column_are_skipped() {
        let vm = build_view_model(Some(&table(&["a"], &[5.0, 9.0])));
        assert_eq!(vm.data_points.len(), 1);
        assert_eq!(vm.max_value, 5.0);
    }

    #[test]
    fn null_categories_and_non_finite_values_are_tolerated() {
        let t = CategoricalTable {
            categories: Some(vec![Some("a".to_owned()), None, Some("c".to_owned())]),
            values: Some(vec![f64::NAN, 2.0, f64::INFINITY]),
        };
        let vm = build_view_model(Some(&t));
        assert_eq!(vm.data_points.len(), 2);
        assert_eq!(vm.data_points[0].value, 0.0);
        assert_eq!(vm.data_points[1].value, 0.0);
        assert_eq!(vm.max_value, 0.0);
    }

    #[test]
    fn all_negative_values_keep_their_maximum() {
        let vm = build_view_model(Some(&table(&["a", "b"], &[-5.0, -2.0])));
        assert_eq!(vm.max_value, -2.0);
    }
}
