//! Error types for range bar construction and the programmatic API.

use thiserror::Error;

/// Why a configuration was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// Fewer than two ticks cannot form a range.
    #[error("tick count must be at least 2, got {0}")]
    TickCount(usize),
    /// A pixel bound was NaN or infinite.
    #[error("bounds must be finite, got [{left}, {right}]")]
    NonFiniteBounds { left: f32, right: f32 },
    /// The left bound was not strictly smaller than the right bound.
    #[error("left bound {left} must be smaller than right bound {right}")]
    NonIncreasingBounds { left: f32, right: f32 },
    /// Neighbouring ticks would collapse onto the same `f32` pixel.
    #[error("{tick_count} ticks are too dense to resolve over [{left}, {right}]")]
    TickSpacing {
        tick_count: usize,
        left: f32,
        right: f32,
    },
    /// The control was given a size it cannot lay a track out in.
    #[error("cannot lay out a {width}x{height} control with thumb radius {thumb_radius}")]
    Size {
        width: f32,
        height: f32,
        thumb_radius: f32,
    },
    /// The scale factor used for dp conversion was not positive.
    #[error("scale factor must be positive and finite, got {0}")]
    ScaleFactor(f32),
    /// A value scale with a degenerate step or span.
    #[error("value scale [{min}, {max}] with step {step} has fewer than two ticks")]
    ValueScale { min: f64, max: f64, step: f64 },
}

/// Errors returned by the range bar.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeBarError {
    /// The tick field or control could not be built from the given
    /// parameters. Reconstruct with valid ones.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),
    /// `set_thumb_indices` was called with indices outside
    /// `0..=last_index` or with `left > right`. State is unchanged.
    #[error("thumb indices ({left}, {right}) must satisfy 0 <= left <= right <= {last_index}")]
    InvalidRange {
        left: isize,
        right: isize,
        last_index: usize,
    },
}

pub type Result<T, E = RangeBarError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_convert() {
        let err: RangeBarError = ConfigurationError::TickCount(1).into();
        assert_eq!(
            err.to_string(),
            "invalid configuration: tick count must be at least 2, got 1"
        );
    }

    #[test]
    fn invalid_range_message_names_bounds() {
        let err = RangeBarError::InvalidRange {
            left: -1,
            right: 5,
            last_index: 10,
        };
        assert!(err.to_string().contains("<= 10"));
    }
}
