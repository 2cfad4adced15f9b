//! Drag state machine for the two thumbs.
//!
//! ## Usage
//!
//! Forward the host's pointer events to [`RangeController::on_press_start`],
//! [`RangeController::on_move`], [`RangeController::on_press_end`] and
//! [`RangeController::cancel`]; read the published indices back or listen
//! for them with [`RangeController::set_on_index_change`].
//!
//! ```
//! use rangebar::{RangeController, ThumbMetrics, ThumbSide, TickField};
//!
//! let field = TickField::new(11, 0.0, 100.0)?;
//! let mut controller = RangeController::new(field, 20.0, ThumbMetrics::from_px(8.0, 12.0));
//!
//! assert_eq!(controller.on_press_start(100.0, 20.0), Some(ThumbSide::Right));
//! controller.on_move(42.0, 20.0);
//! controller.on_press_end();
//! assert_eq!(controller.indices(), (0, 4));
//! # Ok::<(), rangebar::RangeBarError>(())
//! ```

use tracing::{debug, trace};

use crate::{
    callback::IndexCallback,
    error::{RangeBarError, Result},
    thumb::{Thumb, ThumbMetrics},
    tick_field::TickField,
};

/// Which of the two thumbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbSide {
    Left,
    Right,
}

/// Drag session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No pointer is holding a thumb.
    #[default]
    Idle,
    DraggingLeft,
    DraggingRight,
}

/// Owns both thumbs and keeps `left.index <= right.index` at all times.
///
/// Programmatic calls are strict ([`set_thumb_indices`] rejects bad input
/// and leaves state alone) while pointer motion is lenient ([`on_move`]
/// clamps against the field and the sibling thumb and never fails).
///
/// [`set_thumb_indices`]: RangeController::set_thumb_indices
/// [`on_move`]: RangeController::on_move
#[derive(Debug, Clone)]
pub struct RangeController {
    field: TickField,
    left: Thumb,
    right: Thumb,
    active: Option<ThumbSide>,
    on_index_change: Option<IndexCallback>,
    on_release: Option<IndexCallback>,
}

impl RangeController {
    /// Creates a controller with the thumbs on the first and last tick.
    pub fn new(field: TickField, y: f32, metrics: ThumbMetrics) -> Self {
        let last = field.last_index();
        Self {
            field,
            left: Thumb::new(0, field.position_of(0), y, metrics),
            right: Thumb::new(last, field.position_of(last), y, metrics),
            active: None,
            on_index_change: None,
            on_release: None,
        }
    }

    /// Creates a controller with the thumbs on caller-supplied ticks.
    pub fn with_indices(
        field: TickField,
        y: f32,
        metrics: ThumbMetrics,
        left: usize,
        right: usize,
    ) -> Result<Self> {
        let mut controller = Self::new(field, y, metrics);
        let (left, right) = checked_indices(&field, signed(left), signed(right))?;
        controller.place(left, right);
        Ok(controller)
    }

    /// Installs the listener called with `(left_index, right_index)` whenever
    /// the published indices change. `None` removes it.
    pub fn set_on_index_change(&mut self, callback: Option<IndexCallback>) {
        self.on_index_change = callback;
    }

    /// Installs the listener called with the final indices when a drag
    /// session ends. `None` removes it.
    pub fn set_on_release(&mut self, callback: Option<IndexCallback>) {
        self.on_release = callback;
    }

    /// Starts a drag session if `(px, py)` hits a thumb.
    ///
    /// When both hit boxes contain the point, the thumb whose centre is
    /// closer wins; on an exact tie the thumb with the smaller index (the
    /// left one) wins. A press during a running session is ignored.
    pub fn on_press_start(&mut self, px: f32, py: f32) -> Option<ThumbSide> {
        if let Some(active) = self.active {
            trace!(?active, "press ignored, drag already in progress");
            return None;
        }

        let side = self.resolve_target(px, py)?;
        self.thumb_mut(side).press();
        self.active = Some(side);
        trace!(?side, px, py, "thumb pressed");
        Some(side)
    }

    /// Moves the active thumb to the tick nearest `px`.
    ///
    /// The target index is clamped so the thumbs never cross; they may meet.
    /// Returns `true` and notifies the listener only when the published
    /// indices changed.
    pub fn on_move(&mut self, px: f32, _py: f32) -> bool {
        let Some(side) = self.active else {
            return false;
        };

        let candidate = self.field.nearest_index(px);
        let target = match side {
            ThumbSide::Left => candidate.min(self.right.index()),
            ThumbSide::Right => candidate.max(self.left.index()),
        };
        if target == self.thumb(side).index() {
            return false;
        }

        let x = self.field.position_of(target);
        let thumb = self.thumb_mut(side);
        thumb.set_position(x);
        thumb.set_index(target);
        trace!(?side, candidate, target, "thumb moved");

        self.notify_index_change();
        true
    }

    /// Ends the drag session. No-op when idle.
    pub fn on_press_end(&mut self) {
        if self.release_active().is_some()
            && let Some(callback) = &self.on_release
        {
            callback.call(self.indices());
        }
    }

    /// Abandons the drag session after the host lost pointer capture. Same
    /// as [`on_press_end`](Self::on_press_end).
    pub fn cancel(&mut self) {
        trace!("drag cancelled");
        self.on_press_end();
    }

    /// Places both thumbs on the given ticks.
    ///
    /// Requires `0 <= left <= right <= last_index`; otherwise returns
    /// [`RangeBarError::InvalidRange`] and nothing changes. On success any
    /// drag is dropped and the listener is notified even if the indices are
    /// the same as before.
    pub fn set_thumb_indices(&mut self, left: isize, right: isize) -> Result<()> {
        let (left, right) = checked_indices(&self.field, left, right)
            .inspect_err(|err| debug!(%err, "rejected thumb indices"))?;

        self.release_active();
        self.place(left, right);
        self.notify_index_change();
        Ok(())
    }

    pub fn left_index(&self) -> usize {
        self.left.index()
    }

    pub fn right_index(&self) -> usize {
        self.right.index()
    }

    /// `(left_index, right_index)`.
    pub fn indices(&self) -> (usize, usize) {
        (self.left.index(), self.right.index())
    }

    pub fn drag_state(&self) -> DragState {
        match self.active {
            None => DragState::Idle,
            Some(ThumbSide::Left) => DragState::DraggingLeft,
            Some(ThumbSide::Right) => DragState::DraggingRight,
        }
    }

    pub fn active_thumb(&self) -> Option<ThumbSide> {
        self.active
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn left_thumb(&self) -> &Thumb {
        &self.left
    }

    pub fn right_thumb(&self) -> &Thumb {
        &self.right
    }

    pub fn thumb(&self, side: ThumbSide) -> &Thumb {
        match side {
            ThumbSide::Left => &self.left,
            ThumbSide::Right => &self.right,
        }
    }

    pub fn tick_field(&self) -> &TickField {
        &self.field
    }

    /// Moves both thumbs onto a new field, baseline and size, keeping the
    /// published indices and the drag session. Callers reset indices that
    /// do not fit the new field; until then they are clamped to it.
    pub(crate) fn relayout(&mut self, field: TickField, y: f32, metrics: ThumbMetrics) {
        let right = self.right.index().min(field.last_index());
        let left = self.left.index().min(right);

        self.field = field;
        self.left = Thumb::new(left, field.position_of(left), y, metrics);
        self.right = Thumb::new(right, field.position_of(right), y, metrics);
        if let Some(side) = self.active {
            self.thumb_mut(side).press();
        }
    }

    fn resolve_target(&self, px: f32, py: f32) -> Option<ThumbSide> {
        match (
            self.left.is_in_target_zone(px, py),
            self.right.is_in_target_zone(px, py),
        ) {
            (false, false) => None,
            (true, false) => Some(ThumbSide::Left),
            (false, true) => Some(ThumbSide::Right),
            (true, true) => {
                let to_left = self.left.distance_squared_to(px, py);
                let to_right = self.right.distance_squared_to(px, py);
                // Exact ties go to the smaller index, which is always the left thumb.
                if to_right < to_left {
                    Some(ThumbSide::Right)
                } else {
                    Some(ThumbSide::Left)
                }
            }
        }
    }

    fn release_active(&mut self) -> Option<ThumbSide> {
        let side = self.active.take()?;
        self.thumb_mut(side).release();
        trace!(?side, "thumb released");
        Some(side)
    }

    fn place(&mut self, left: usize, right: usize) {
        let left_x = self.field.position_of(left);
        let right_x = self.field.position_of(right);
        self.left.set_position(left_x);
        self.left.set_index(left);
        self.right.set_position(right_x);
        self.right.set_index(right);
    }

    fn notify_index_change(&self) {
        if let Some(callback) = &self.on_index_change {
            callback.call(self.indices());
        }
    }

    fn thumb_mut(&mut self, side: ThumbSide) -> &mut Thumb {
        match side {
            ThumbSide::Left => &mut self.left,
            ThumbSide::Right => &mut self.right,
        }
    }
}

fn signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

fn checked_indices(field: &TickField, left: isize, right: isize) -> Result<(usize, usize)> {
    match (usize::try_from(left), usize::try_from(right)) {
        (Ok(l), Ok(r)) if l <= r && r <= field.last_index() => Ok((l, r)),
        _ => Err(RangeBarError::InvalidRange {
            left,
            right,
            last_index: field.last_index(),
        }),
    }
}
