//! Presentation attributes of the range bar.
//!
//! Nothing here feeds back into index state: changing a colour or weight at
//! runtime only changes what the next [`RenderFrame`](crate::RenderFrame)
//! looks like, and changing the thumb radius only moves the track inset.

use derive_setters::Setters;

use crate::{
    color::Color,
    dp::Dp,
    thumb::{DEFAULT_THUMB_RADIUS, ThumbMetrics},
};

/// Colours, weights and sizes used to draw the range bar.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeBarStyle {
    /// Stroke width of the bar and the tick marks, in pixels.
    pub bar_weight: f32,
    /// Colour of the bar and the tick marks.
    pub bar_color: Color,
    /// Full height of each tick mark.
    pub tick_height: Dp,
    /// Stroke width of the line between the thumbs, in pixels.
    pub connecting_line_weight: f32,
    /// Colour of the line between the thumbs.
    pub connecting_line_color: Color,
    /// Visual radius of each thumb.
    pub thumb_radius: Dp,
    /// Thumb colour while not pressed.
    pub thumb_color_normal: Color,
    /// Thumb colour while pressed.
    pub thumb_color_pressed: Color,
}

impl Default for RangeBarStyle {
    fn default() -> Self {
        Self {
            bar_weight: 2.0,
            bar_color: Color::LIGHT_GRAY,
            tick_height: Dp(24.0),
            connecting_line_weight: 4.0,
            connecting_line_color: Color::HOLO_BLUE_LIGHT,
            thumb_radius: DEFAULT_THUMB_RADIUS,
            thumb_color_normal: Color::HOLO_BLUE_LIGHT,
            thumb_color_pressed: Color::HOLO_BLUE_LIGHT,
        }
    }
}

impl RangeBarStyle {
    /// Thumb radii in pixels for this style.
    pub fn thumb_metrics(&self, scale_factor: f32) -> ThumbMetrics {
        ThumbMetrics::from_dp(self.thumb_radius, scale_factor)
    }

    pub fn thumb_color(&self, pressed: bool) -> Color {
        if pressed {
            self.thumb_color_pressed
        } else {
            self.thumb_color_normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_chain() {
        let style = RangeBarStyle::default()
            .bar_weight(3.0)
            .thumb_radius(Dp(20.0))
            .thumb_color_pressed(Color::BLACK);
        assert_eq!(style.bar_weight, 3.0);
        assert_eq!(style.thumb_radius, Dp(20.0));
        assert_eq!(style.thumb_color(true), Color::BLACK);
        assert_eq!(style.thumb_color(false), Color::HOLO_BLUE_LIGHT);
    }

    #[test]
    fn thumb_metrics_follow_radius_and_scale() {
        let metrics = RangeBarStyle::default().thumb_metrics(2.0);
        assert_eq!(metrics.radius, 28.0);
        assert_eq!(metrics.hit_radius, 48.0);
    }
}
