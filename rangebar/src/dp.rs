//! # Density-Independent Pixels (Dp)
//!
//! Sizes that should look the same on every screen (thumb radius, tick
//! height, the minimum touch target) are given in [`Dp`] and converted to
//! physical pixels with the scale factor the host reports for its window.
//!
//! ```
//! use rangebar::Dp;
//!
//! let radius = Dp(14.0);
//! assert_eq!(radius.to_px(2.0), 28.0);
//! assert_eq!(Dp::from_px(28.0, 2.0), radius);
//! ```
//!
//! Unlike a framework-wide global, the scale factor is passed explicitly so
//! two controls on windows with different densities never interfere.

/// Density-independent pixels.
///
/// One dp is one physical pixel at scale factor 1.0.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dp(pub f32);

impl Dp {
    /// Converts to physical pixels at the given scale factor.
    pub fn to_px(self, scale_factor: f32) -> f32 {
        self.0 * scale_factor
    }

    /// Converts physical pixels back to dp at the given scale factor.
    pub fn from_px(px: f32, scale_factor: f32) -> Self {
        Dp(px / scale_factor)
    }

    /// The larger of two dp values.
    pub fn max(self, other: Dp) -> Dp {
        Dp(self.0.max(other.0))
    }
}
