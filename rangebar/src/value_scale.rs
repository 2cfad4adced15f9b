//! Mapping between tick indices and application values.
//!
//! The controller only speaks in indices. When the ticks stand for values
//! (prices, years, percentages) a [`ValueScale`] translates in both
//! directions and tells the bar how many ticks it needs.

use crate::error::{ConfigurationError, Result};

/// Evenly stepped values from `min` to `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    min: f64,
    step: f64,
    tick_count: usize,
}

impl ValueScale {
    /// Ticks at `min`, `min + step`, ... up to the last step not past `max`.
    /// A `max` that falls a hair short of a step through float error still
    /// gets that step. Needs at least two ticks, so `max >= min + step`.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        let invalid = || ConfigurationError::ValueScale { min, max, step };
        if !(min.is_finite() && max.is_finite() && step.is_finite()) || step <= 0.0 {
            return Err(invalid().into());
        }
        let segments = ((max - min) / step * (1.0 + 1e-9)).floor();
        if segments < 1.0 || segments >= usize::MAX as f64 {
            return Err(invalid().into());
        }

        Ok(Self {
            min,
            step,
            tick_count: segments as usize + 1,
        })
    }

    /// Number of ticks the bar needs to represent this scale.
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.value_of(self.tick_count - 1)
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Value at `index`; indices past the end map to the last value.
    pub fn value_of(&self, index: usize) -> f64 {
        self.min + index.min(self.tick_count - 1) as f64 * self.step
    }

    /// Index of the tick whose value is nearest `value`, clamped to the
    /// scale. Halfway values round up.
    pub fn index_of(&self, value: f64) -> usize {
        if value.is_nan() {
            return 0;
        }
        let steps = ((value - self.min) / self.step + 0.5).floor();
        (steps.max(0.0) as usize).min(self.tick_count - 1)
    }

    /// Values of an index pair, e.g. the bar's published range.
    pub fn range_of(&self, (left, right): (usize, usize)) -> (f64, f64) {
        (self.value_of(left), self.value_of(right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_ticks_inclusively() {
        let scale = ValueScale::new(10.0, 20.0, 1.0).expect("valid");
        assert_eq!(scale.tick_count(), 11);
        assert_eq!(scale.max(), 20.0);

        let scale = ValueScale::new(0.0, 1.0, 0.25).expect("valid");
        assert_eq!(scale.tick_count(), 5);
    }

    #[test]
    fn maps_both_ways() {
        let scale = ValueScale::new(1990.0, 2020.0, 5.0).expect("valid");
        assert_eq!(scale.value_of(2), 2000.0);
        assert_eq!(scale.index_of(2000.0), 2);
        assert_eq!(scale.index_of(2002.5), 3);
        assert_eq!(scale.index_of(1800.0), 0);
        assert_eq!(scale.index_of(3000.0), 6);
        assert_eq!(scale.index_of(f64::NAN), 0);
        assert_eq!(scale.range_of((1, 4)), (1995.0, 2010.0));
    }

    #[test]
    fn rejects_degenerate_scales() {
        assert!(ValueScale::new(0.0, 10.0, 0.0).is_err());
        assert!(ValueScale::new(0.0, 10.0, -1.0).is_err());
        assert!(ValueScale::new(5.0, 5.0, 1.0).is_err());
        assert!(ValueScale::new(10.0, 0.0, 1.0).is_err());
        assert!(ValueScale::new(0.0, f64::INFINITY, 1.0).is_err());
        assert!(ValueScale::new(0.0, 0.6, 1.0).is_err());
    }

    #[test]
    fn last_tick_never_passes_max() {
        let scale = ValueScale::new(0.0, 1.6, 1.0).expect("valid");
        assert_eq!(scale.tick_count(), 2);
        assert_eq!(scale.max(), 1.0);
        assert_eq!(scale.range_of((0, 1)), (0.0, 1.0));

        let scale = ValueScale::new(0.0, 0.3, 0.1).expect("valid");
        assert_eq!(scale.tick_count(), 4);
    }
}
