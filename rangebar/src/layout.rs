//! Measuring the control and deriving its track geometry from a size.

use crate::{
    error::{ConfigurationError, Result},
    tick_field::TickField,
};

/// Width used when the host imposes no width constraint.
pub const DEFAULT_WIDTH: f32 = 500.0;
/// Height used when the host imposes no height constraint, and the cap
/// applied to `AtMost` heights.
pub const DEFAULT_HEIGHT: f32 = 100.0;

/// How the host constrains one dimension of the control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeConstraint {
    /// The control must be exactly this size.
    Exactly(f32),
    /// The control may be any size up to this one.
    AtMost(f32),
    /// The host has no opinion.
    Unspecified,
}

/// Resolves the control size for the given constraints.
///
/// The track wants to be as wide as possible and as short as possible.
pub fn measure(width: SizeConstraint, height: SizeConstraint) -> (f32, f32) {
    let width = match width {
        SizeConstraint::Exactly(w) | SizeConstraint::AtMost(w) => w,
        SizeConstraint::Unspecified => DEFAULT_WIDTH,
    };
    let height = match height {
        SizeConstraint::Exactly(h) => h,
        SizeConstraint::AtMost(h) => DEFAULT_HEIGHT.min(h),
        SizeConstraint::Unspecified => DEFAULT_HEIGHT,
    };
    (width, height)
}

/// Track geometry for a control of a given size.
///
/// The track is inset by one thumb radius on each side so thumbs resting on
/// the end ticks are drawn fully inside the control, and runs along the
/// vertical centre line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBarLayout {
    width: f32,
    height: f32,
    margin: f32,
}

impl RangeBarLayout {
    pub fn new(width: f32, height: f32, thumb_radius: f32) -> Result<Self> {
        let fits = width.is_finite()
            && height.is_finite()
            && thumb_radius.is_finite()
            && height > 0.0
            && thumb_radius >= 0.0
            && width - 2.0 * thumb_radius > 0.0;
        if !fits {
            return Err(ConfigurationError::Size {
                width,
                height,
                thumb_radius,
            }
            .into());
        }

        Ok(Self {
            width,
            height,
            margin: thumb_radius,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Horizontal inset of the track on either side.
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Y-coordinate of the track and both thumb centres.
    pub fn baseline_y(&self) -> f32 {
        self.height / 2.0
    }

    pub fn track_left(&self) -> f32 {
        self.margin
    }

    pub fn track_right(&self) -> f32 {
        self.width - self.margin
    }

    pub fn track_length(&self) -> f32 {
        self.track_right() - self.track_left()
    }

    /// The tick field spanning the track.
    pub fn tick_field(&self, tick_count: usize) -> Result<TickField> {
        TickField::new(tick_count, self.track_left(), self.track_right())
    }
}
