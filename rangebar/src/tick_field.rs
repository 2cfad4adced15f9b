//! Discrete tick coordinate space along the track.
//!
//! A [`TickField`] spreads `tick_count` ticks evenly over
//! `[left_bound, right_bound]` and converts between pixel x-coordinates and
//! tick indices.

use smallvec::SmallVec;

use crate::error::{ConfigurationError, Result};

/// `tick_count` evenly spaced tick positions over a fixed pixel span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickField {
    tick_count: usize,
    left_bound: f32,
    right_bound: f32,
    tick_distance: f32,
}

impl TickField {
    /// Builds a tick field.
    ///
    /// Fails with `InvalidConfiguration` when `tick_count < 2`, when a bound is
    /// not finite, when `left_bound >= right_bound`, or when neighbouring
    /// ticks would be closer than `f32` can tell apart at these bounds.
    pub fn new(tick_count: usize, left_bound: f32, right_bound: f32) -> Result<Self> {
        if tick_count < 2 {
            return Err(ConfigurationError::TickCount(tick_count).into());
        }
        if !left_bound.is_finite() || !right_bound.is_finite() {
            return Err(ConfigurationError::NonFiniteBounds {
                left: left_bound,
                right: right_bound,
            }
            .into());
        }
        if left_bound >= right_bound {
            return Err(ConfigurationError::NonIncreasingBounds {
                left: left_bound,
                right: right_bound,
            }
            .into());
        }

        let step = span_step(tick_count, left_bound, right_bound);
        let resolution =
            f64::from(f32::EPSILON) * f64::from(left_bound.abs().max(right_bound.abs()));
        if step < 2.0 * resolution {
            return Err(ConfigurationError::TickSpacing {
                tick_count,
                left: left_bound,
                right: right_bound,
            }
            .into());
        }

        Ok(Self {
            tick_count,
            left_bound,
            right_bound,
            tick_distance: step as f32,
        })
    }

    /// Same span, different number of ticks.
    pub fn with_tick_count(&self, tick_count: usize) -> Result<Self> {
        Self::new(tick_count, self.left_bound, self.right_bound)
    }

    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    /// Index of the right-most tick.
    pub fn last_index(&self) -> usize {
        self.tick_count - 1
    }

    pub fn left_bound(&self) -> f32 {
        self.left_bound
    }

    pub fn right_bound(&self) -> f32 {
        self.right_bound
    }

    /// Pixel distance between two neighbouring ticks.
    pub fn tick_distance(&self) -> f32 {
        self.tick_distance
    }

    /// X-coordinate of the tick at `index`. Indices past the end map to the
    /// last tick.
    pub fn position_of(&self, index: usize) -> f32 {
        let index = index.min(self.last_index());
        if index == self.last_index() {
            return self.right_bound;
        }
        (f64::from(self.left_bound) + index as f64 * self.step()) as f32
    }

    /// Index of the tick closest to `x`.
    ///
    /// `x` is clamped to the field's bounds first. Halfway points round up to
    /// the larger index. NaN maps to the first tick.
    pub fn nearest_index(&self, x: f32) -> usize {
        if x.is_nan() {
            return 0;
        }
        let clamped = x.clamp(self.left_bound, self.right_bound);
        let offset = f64::from(clamped) - f64::from(self.left_bound);
        let steps = (offset / self.step() + 0.5).floor();
        (steps.max(0.0) as usize).min(self.last_index())
    }

    /// X-coordinates of every tick, left to right.
    ///
    /// The last tick sits exactly on `right_bound`.
    pub fn tick_positions(&self) -> SmallVec<[f32; 16]> {
        (0..self.tick_count).map(|i| self.position_of(i)).collect()
    }

    fn step(&self) -> f64 {
        span_step(self.tick_count, self.left_bound, self.right_bound)
    }
}

fn span_step(tick_count: usize, left_bound: f32, right_bound: f32) -> f64 {
    (f64::from(right_bound) - f64::from(left_bound)) / (tick_count - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RangeBarError;

    fn field(count: usize, left: f32, right: f32) -> TickField {
        TickField::new(count, left, right).expect("valid field")
    }

    #[test]
    fn rejects_too_few_ticks() {
        assert_eq!(
            TickField::new(1, 0.0, 100.0),
            Err(RangeBarError::InvalidConfiguration(
                ConfigurationError::TickCount(1)
            ))
        );
        assert!(TickField::new(0, 0.0, 100.0).is_err());
    }

    #[test]
    fn rejects_bad_bounds() {
        assert!(matches!(
            TickField::new(5, 10.0, 10.0),
            Err(RangeBarError::InvalidConfiguration(
                ConfigurationError::NonIncreasingBounds { .. }
            ))
        ));
        assert!(TickField::new(5, 20.0, 10.0).is_err());
        assert!(matches!(
            TickField::new(5, f32::NAN, 10.0),
            Err(RangeBarError::InvalidConfiguration(
                ConfigurationError::NonFiniteBounds { .. }
            ))
        ));
        assert!(TickField::new(5, 0.0, f32::INFINITY).is_err());
    }

    #[test]
    fn derives_tick_distance() {
        let f = field(11, 10.0, 110.0);
        assert_eq!(f.tick_distance(), 10.0);
        assert_eq!(f.last_index(), 10);
        assert_eq!(f.position_of(0), 10.0);
        assert_eq!(f.position_of(4), 50.0);
        assert_eq!(f.position_of(10), 110.0);
        assert_eq!(f.position_of(99), 110.0);
    }

    #[test]
    fn nearest_index_round_trips_every_tick() {
        for (count, left, right) in [(2, 0.0, 1.0), (11, 12.5, 487.5), (401, 0.0, 400.0), (7, -30.0, 91.0)] {
            let f = field(count, left, right);
            for i in 0..count {
                assert_eq!(f.nearest_index(f.position_of(i)), i, "count {count} index {i}");
            }
        }
    }

    #[test]
    fn dense_fields_keep_round_trip_or_are_rejected() {
        assert!(matches!(
            TickField::new(20_000_001, 0.0, 400.0),
            Err(RangeBarError::InvalidConfiguration(
                ConfigurationError::TickSpacing { tick_count: 20_000_001, .. }
            ))
        ));
        assert!(TickField::new(3_000, 1.0e6, 1.0e6 + 100.0).is_err());

        let f = field(1_000_001, 0.0, 400.0);
        for i in [0, 1, 499_999, 777_777, 999_999, 1_000_000] {
            assert_eq!(f.nearest_index(f.position_of(i)), i, "index {i}");
        }
        assert_eq!(f.position_of(1_000_000), 400.0);
    }

    #[test]
    fn nearest_index_clamps_outside_bounds() {
        let f = field(11, 0.0, 100.0);
        assert_eq!(f.nearest_index(-1000.0), 0);
        assert_eq!(f.nearest_index(1100.0), 10);
        assert_eq!(f.nearest_index(f32::NEG_INFINITY), 0);
        assert_eq!(f.nearest_index(f32::INFINITY), 10);
        assert_eq!(f.nearest_index(f32::NAN), 0);
    }

    #[test]
    fn halfway_rounds_to_larger_index() {
        let f = field(11, 0.0, 100.0);
        assert_eq!(f.nearest_index(15.0), 2);
        assert_eq!(f.nearest_index(14.9), 1);
        assert_eq!(f.nearest_index(5.0), 1);
    }

    #[test]
    fn tick_positions_end_on_right_bound() {
        let f = field(4, 0.0, 1.0);
        let ticks = f.tick_positions();
        assert_eq!(ticks.len(), 4);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(ticks[3], 1.0);
    }

    #[test]
    fn with_tick_count_keeps_span() {
        let f = field(3, 5.0, 45.0).with_tick_count(5).expect("valid");
        assert_eq!(f.tick_count(), 5);
        assert_eq!(f.left_bound(), 5.0);
        assert_eq!(f.right_bound(), 45.0);
        assert_eq!(f.tick_distance(), 10.0);
        assert!(f.with_tick_count(1).is_err());
    }
}
