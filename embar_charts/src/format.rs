// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label formatters for the bar visual.
//!
//! These are pure functions over the view-model value sequence. Numeric edge
//! cases (zero denominators, missing maxima, negative magnitudes) are pinned
//! to deterministic outputs rather than leaking `NaN`/`Infinity` into labels.

/// Formats the percent change from `values[i]` to its successor.
///
/// Returns the empty string when `values[i]` is missing, zero, or non-finite,
/// or when there is no successor. The change is
/// `(next - cur) / |cur| * 100` with exactly two decimals, prefixed `+` when
/// the successor is strictly greater and rendered bare (the number carries its
/// own `-`) when strictly less. Equal adjacent values yield `"+0.00%"`.
pub fn percent_diff(values: &[f64], i: usize) -> String {
    let Some(&cur) = values.get(i) else {
        return String::new();
    };
    // Zero is excluded before the division below, not just as a display rule.
    if cur == 0.0 || !cur.is_finite() {
        return String::new();
    }
    let Some(&next) = values.get(i + 1) else {
        return String::new();
    };
    if next == cur {
        return "+0.00%".to_owned();
    }
    let diff = ((next - cur) / cur.abs()) * 100.0;
    if next > cur {
        format!("+{diff:.2}%")
    } else {
        format!("{diff:.2}%")
    }
}

/// Leading-digit count and suffix, keyed by digit-string length 5..=13.
const MAGNITUDE_TABLE: [(usize, &str); 9] = [
    (2, "K"), // 12.3K
    (3, "K"), // 123.4K
    (1, "M"), // 1.2M
    (2, "M"), // 12.3M
    (3, "M"), // 123.4M
    (1, "B"), // 1.2B
    (2, "B"), // 12.3B
    (3, "B"), // 123.4B
    (1, "T"), // 1.2T
];

/// Formats a value as a compact magnitude-suffixed label.
///
/// The value is rounded to the nearest integer and formatted from its digit
/// string: lengths below 4 pass through, length 4 gets a thousands comma, and
/// lengths 5..=13 keep one to three leading digits plus one fractional digit
/// and a `K`/`M`/`B`/`T` suffix. Longer digit strings pass through unchanged.
///
/// Negative values format their absolute digits and re-apply the sign; the
/// table itself only ever sees unsigned digit strings.
pub fn magnitude_label(value: f64) -> String {
    let rounded = value.round();
    if !rounded.is_finite() {
        return "0".to_owned();
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{}", rounded.abs() as u64);
    let body = match digits.len() {
        0..=3 => digits,
        4 => format!("{},{}", &digits[..1], &digits[1..]),
        len @ 5..=13 => {
            let (lead, suffix) = MAGNITUDE_TABLE[len - 5];
            format!("{}.{}{}", &digits[..lead], &digits[lead..lead + 1], suffix)
        }
        _ => digits,
    };
    format!("{sign}{body}")
}

/// Formats `value` as a rounded percentage of the maximum of `values`.
///
/// A missing, zero, or otherwise degenerate maximum yields `"0%"`.
pub fn percent_of_max(value: f64, values: &[f64]) -> String {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let ratio = (value / max) * 100.0;
    if !ratio.is_finite() {
        return "0%".to_owned();
    }
    format!("{}%", ratio.round() as i64)
}

/// Formats an axis tick value with decimals appropriate to the tick step.
///
/// A step of `10` formats `20` as `"20"`; a step of `0.25` formats `0.5` as
/// `"0.50"`. Unknown steps (zero or non-finite) fall back to trimming.
pub fn format_tick_with_step(value: f64, step: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    // Avoid "-0" labels on diverging axes.
    let value = if value == 0.0 { 0.0 } else { value };
    if step.is_finite() && step > 0.0 && step < 1.0 {
        // Decimals of the step's decimal expansion: 0.5 -> 1, 0.25 -> 2.
        let mut decimals = 0;
        let mut scaled = step;
        while decimals < 6 && (scaled - scaled.round()).abs() > 1.0e-9 {
            scaled *= 10.0;
            decimals += 1;
        }
        return format!("{value:.decimals$}");
    }
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_diff_spec_cases() {
        assert_eq!(percent_diff(&[100.0, 150.0], 0), "+50.00%");
        assert_eq!(percent_diff(&[100.0, 50.0], 0), "-50.00%");
        assert_eq!(percent_diff(&[100.0, 100.0], 0), "+0.00%");
    }

    #[test]
    fn percent_diff_empty_on_zero_or_last() {
        assert_eq!(percent_diff(&[0.0, 100.0], 0), "");
        assert_eq!(percent_diff(&[100.0, 50.0], 1), "");
        assert_eq!(percent_diff(&[], 0), "");
        assert_eq!(percent_diff(&[100.0], 5), "");
    }

    #[test]
    fn percent_diff_negative_current_uses_absolute_denominator() {
        // -100 -> -50 is a +50% move relative to |−100|.
        assert_eq!(percent_diff(&[-100.0, -50.0], 0), "+50.00%");
        assert_eq!(percent_diff(&[-100.0, -150.0], 0), "-50.00%");
    }

    #[test]
    fn magnitude_label_spec_cases() {
        assert_eq!(magnitude_label(1234.0), "1,234");
        assert_eq!(magnitude_label(12345.0), "12.3K");
        assert_eq!(magnitude_label(1234567.0), "1.2M");
    }

    #[test]
    fn magnitude_label_full_table() {
        assert_eq!(magnitude_label(0.0), "0");
        assert_eq!(magnitude_label(999.0), "999");
        assert_eq!(magnitude_label(123456.0), "123.4K");
        assert_eq!(magnitude_label(12345678.0), "12.3M");
        assert_eq!(magnitude_label(123456789.0), "123.4M");
        assert_eq!(magnitude_label(1234567890.0), "1.2B");
        assert_eq!(magnitude_label(12345678901.0), "12.3B");
        assert_eq!(magnitude_label(123456789012.0), "123.4B");
        assert_eq!(magnitude_label(1234567890123.0), "1.2T");
        // 14 digits: past the table, raw digits.
        assert_eq!(magnitude_label(12345678901234.0), "12345678901234");
    }

    #[test]
    fn magnitude_label_rounds_and_signs() {
        assert_eq!(magnitude_label(999.4), "999");
        assert_eq!(magnitude_label(999.6), "1,000");
        assert_eq!(magnitude_label(-12345.0), "-12.3K");
        assert_eq!(magnitude_label(-1234.0), "-1,234");
    }

    #[test]
    fn percent_of_max_spec_cases() {
        assert_eq!(percent_of_max(50.0, &[50.0, 100.0]), "50%");
        assert_eq!(percent_of_max(100.0, &[50.0, 100.0]), "100%");
    }

    #[test]
    fn percent_of_max_degenerate_max_is_zero_percent() {
        assert_eq!(percent_of_max(0.0, &[0.0, 0.0]), "0%");
        assert_eq!(percent_of_max(5.0, &[0.0]), "0%");
        assert_eq!(percent_of_max(5.0, &[]), "0%");
    }

    #[test]
    fn tick_formatting_follows_step() {
        assert_eq!(format_tick_with_step(20.0, 10.0), "20");
        assert_eq!(format_tick_with_step(-0.0, 10.0), "0");
    }

    #[test]
    fn fractional_steps_format_with_their_expansion_decimals() {
        assert_eq!(format_tick_with_step(0.5, 0.25), "0.50");
        assert_eq!(format_tick_with_step(1.5, 0.5), "1.5");
        assert_eq!(format_tick_with_step(0.3, 0.1), "0.3");
    }
}
