// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny scale utilities.
//!
//! Scales follow a spec/instance split: a *spec* carries the domain and
//! options, and is instantiated against a concrete pixel range once the plot
//! rectangle is known.

/// A scale specification (domain + options, no range yet).
#[derive(Clone, Copy, Debug)]
pub enum ScaleSpec {
    /// Continuous linear scale.
    Linear(ScaleLinearSpec),
    /// Discrete band scale.
    Band(ScaleBandSpec),
}

impl From<ScaleLinearSpec> for ScaleSpec {
    fn from(value: ScaleLinearSpec) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleBandSpec> for ScaleSpec {
    fn from(value: ScaleBandSpec) -> Self {
        Self::Band(value)
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a linear scale (domain + options, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
    /// Whether to "nice" the domain based on tick generation.
    pub nice: bool,
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A degenerate domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns “nice-ish” tick values for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            domain,
            nice: false,
        }
    }

    /// Enables or disables nice-domain behavior.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// Returns the effective domain after applying `nice` (if enabled).
    pub fn resolved_domain(&self, tick_count: usize) -> (f64, f64) {
        if !self.nice {
            return self.domain;
        }
        let ticks = nice_ticks(self.domain.0, self.domain.1, tick_count);
        match (ticks.first(), ticks.last()) {
            (Some(&first), Some(&last)) if ticks.len() >= 2 => (first, last),
            _ => self.domain,
        }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new(self.domain, range)
    }

    /// Instantiates a concrete scale using the `resolved_domain` (respecting `nice`).
    pub fn instantiate_resolved(&self, range: (f64, f64), tick_count: usize) -> ScaleLinear {
        ScaleLinear::new(self.resolved_domain(tick_count), range)
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        n_f.min(10_000.0) as u64
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A discrete band scale for categorical charts.
#[derive(Clone, Copy, Debug)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

/// Specification for a band scale (count + padding, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleBandSpec {
    /// Number of bands.
    pub count: usize,
    /// Inner padding in band units.
    pub padding_inner: f64,
    /// Outer padding in band units.
    pub padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the position of the leading edge of the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let start = if r1 >= r0 { r0 } else { r1 };
        start + bw * self.padding_outer + step * index as f64
    }

    /// Returns the center of the band at `index`.
    pub fn center(&self, index: usize) -> f64 {
        self.x(index) + 0.5 * self.band_width()
    }
}

impl ScaleBandSpec {
    /// Creates a new band scale spec with default padding.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleBand {
        ScaleBand::new(range, self.count).with_padding(self.padding_inner, self.padding_outer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_endpoints_to_range() {
        let s = ScaleLinear::new((0.0, 100.0), (0.0, 500.0));
        assert_eq!(s.map(0.0), 0.0);
        assert_eq!(s.map(100.0), 500.0);
        assert_eq!(s.map(50.0), 250.0);
    }

    #[test]
    fn linear_inverted_range_flips() {
        // A y-scale maps data up to pixel down.
        let s = ScaleLinear::new((0.0, 10.0), (200.0, 0.0));
        assert_eq!(s.map(0.0), 200.0);
        assert_eq!(s.map(10.0), 0.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = ScaleLinear::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(s.map(5.0), 0.0);
        assert_eq!(s.map(7.0), 0.0);
    }

    #[test]
    fn band_positions_are_monotonic_and_padded() {
        let b = ScaleBand::new((0.0, 100.0), 4).with_padding(0.2, 0.2);
        assert!(b.band_width() > 0.0);
        assert!(b.x(0) > 0.0);
        assert!(b.x(0) < b.x(1));
        assert!(b.x(3) + b.band_width() < 100.0 + 1e-9);
    }

    #[test]
    fn band_with_zero_count_is_degenerate() {
        let b = ScaleBand::new((0.0, 100.0), 0);
        assert_eq!(b.band_width(), 0.0);
    }

    #[test]
    fn nice_ticks_cover_domain() {
        let s = ScaleLinear::new((0.0, 97.0), (0.0, 1.0));
        let ticks = s.ticks(5);
        assert!(!ticks.is_empty());
        assert!(ticks[0] <= 0.0);
        assert!(*ticks.last().unwrap() >= 97.0 || ticks.len() == 1);
    }
}
