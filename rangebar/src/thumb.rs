//! A single draggable thumb.
//!
//! A [`Thumb`] knows where it is, whether it is pressed, and how large its
//! touch target is. It has no idea a sibling exists; ordering between the two
//! thumbs is enforced by [`RangeController`](crate::RangeController).

use crate::dp::Dp;

/// Radius of the touchable area around a thumb, half of the 48dp touch
/// rhythm. The hit radius never drops below this, however small the thumb is
/// drawn.
pub const MINIMUM_TARGET_RADIUS: Dp = Dp(24.0);

/// Visual radius used when the style does not specify one.
pub const DEFAULT_THUMB_RADIUS: Dp = Dp(14.0);

/// Visual and touch radii of a thumb, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbMetrics {
    /// Radius the thumb is drawn with.
    pub radius: f32,
    /// Half side of the square hit box.
    pub hit_radius: f32,
}

impl ThumbMetrics {
    /// Metrics for a thumb drawn with `radius`; the hit radius is widened to
    /// [`MINIMUM_TARGET_RADIUS`] if needed.
    pub fn from_dp(radius: Dp, scale_factor: f32) -> Self {
        Self {
            radius: radius.to_px(scale_factor),
            hit_radius: radius.max(MINIMUM_TARGET_RADIUS).to_px(scale_factor),
        }
    }

    /// Metrics given directly in pixels. `hit_radius` is raised to at least
    /// `radius`.
    pub fn from_px(radius: f32, hit_radius: f32) -> Self {
        Self {
            radius,
            hit_radius: hit_radius.max(radius),
        }
    }
}

impl Default for ThumbMetrics {
    fn default() -> Self {
        Self::from_dp(DEFAULT_THUMB_RADIUS, 1.0)
    }
}

/// One endpoint handle of the range.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumb {
    index: usize,
    x: f32,
    y: f32,
    pressed: bool,
    metrics: ThumbMetrics,
}

impl Thumb {
    /// Creates an unpressed thumb centred at `(x, y)` standing on tick
    /// `index`.
    pub fn new(index: usize, x: f32, y: f32, metrics: ThumbMetrics) -> Self {
        Self {
            index,
            x,
            y,
            pressed: false,
            metrics,
        }
    }

    /// Whether `(px, py)` falls inside this thumb's square hit box.
    pub fn is_in_target_zone(&self, px: f32, py: f32) -> bool {
        (px - self.x).abs() <= self.metrics.hit_radius
            && (py - self.y).abs() <= self.metrics.hit_radius
    }

    pub fn press(&mut self) {
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Moves the thumb horizontally. The cached index is left alone; the
    /// controller updates both together.
    pub fn set_position(&mut self, x: f32) {
        self.x = x;
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn radius(&self) -> f32 {
        self.metrics.radius
    }

    pub fn hit_radius(&self) -> f32 {
        self.metrics.hit_radius
    }

    pub fn metrics(&self) -> ThumbMetrics {
        self.metrics
    }

    /// Squared euclidean distance from the thumb centre to `(px, py)`.
    pub fn distance_squared_to(&self, px: f32, py: f32) -> f32 {
        let dx = px - self.x;
        let dy = py - self.y;
        dx * dx + dy * dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumb() -> Thumb {
        Thumb::new(3, 100.0, 50.0, ThumbMetrics::from_px(10.0, 24.0))
    }

    #[test]
    fn hit_box_is_square() {
        let t = thumb();
        assert!(t.is_in_target_zone(100.0, 50.0));
        assert!(t.is_in_target_zone(124.0, 74.0));
        assert!(t.is_in_target_zone(76.0, 26.0));
        assert!(!t.is_in_target_zone(124.1, 50.0));
        assert!(!t.is_in_target_zone(100.0, 25.9));
    }

    #[test]
    fn press_and_release_are_idempotent() {
        let mut t = thumb();
        t.press();
        t.press();
        assert!(t.is_pressed());
        t.release();
        let once = t.clone();
        t.release();
        assert_eq!(t, once);
        assert!(!t.is_pressed());
    }

    #[test]
    fn set_position_does_not_touch_index() {
        let mut t = thumb();
        t.set_position(300.0);
        assert_eq!(t.x(), 300.0);
        assert_eq!(t.index(), 3);
    }

    #[test]
    fn hit_radius_never_below_minimum_target() {
        let small = ThumbMetrics::from_dp(Dp(4.0), 2.0);
        assert_eq!(small.radius, 8.0);
        assert_eq!(small.hit_radius, 48.0);

        let large = ThumbMetrics::from_dp(Dp(30.0), 1.0);
        assert_eq!(large.hit_radius, 30.0);

        assert_eq!(ThumbMetrics::from_px(20.0, 5.0).hit_radius, 20.0);
    }
}
