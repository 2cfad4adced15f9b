//! The complete range bar control.
//!
//! ## Usage
//!
//! Build a [`RangeBar`] once the host knows the control's size, forward
//! pointer events with [`RangeBar::handle_pointer`], and draw from
//! [`RangeBar::frame`] whenever the host redraws.
//!
//! ```
//! use rangebar::{PointerEvent, RangeBar, RangeBarConfig};
//!
//! let mut bar = RangeBar::new(RangeBarConfig::default().tick_count(5).width(428.0))?;
//! let y = bar.layout().baseline_y();
//!
//! assert!(bar.handle_pointer(PointerEvent::Pressed { x: 14.0, y }));
//! bar.handle_pointer(PointerEvent::Moved { x: 214.0, y });
//! bar.handle_pointer(PointerEvent::Released);
//! assert_eq!(bar.indices(), (2, 4));
//! # Ok::<(), rangebar::RangeBarError>(())
//! ```

use derive_setters::Setters;
use tracing::debug;

use crate::{
    callback::IndexCallback,
    controller::RangeController,
    error::{ConfigurationError, RangeBarError, Result},
    layout::{DEFAULT_HEIGHT, DEFAULT_WIDTH, RangeBarLayout},
    render::{RenderFrame, build_frame},
    snapshot::RangeBarSnapshot,
    style::RangeBarStyle,
    thumb::ThumbMetrics,
};

/// Tick count used when none is configured.
pub const DEFAULT_TICK_COUNT: usize = 3;

/// Arguments for building a [`RangeBar`].
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct RangeBarConfig {
    /// Number of ticks, at least 2.
    pub tick_count: usize,
    /// Control width in pixels.
    pub width: f32,
    /// Control height in pixels.
    pub height: f32,
    /// Physical pixels per dp.
    pub scale_factor: f32,
    pub style: RangeBarStyle,
    /// Starting `(left, right)` indices; the full range when `None`.
    #[setters(strip_option)]
    pub initial_indices: Option<(usize, usize)>,
}

impl Default for RangeBarConfig {
    fn default() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale_factor: 1.0,
            style: RangeBarStyle::default(),
            initial_indices: None,
        }
    }
}

/// Pointer input delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed { x: f32, y: f32 },
    Moved { x: f32, y: f32 },
    Released,
    /// The host lost pointer capture mid-gesture.
    Cancelled,
}

/// Range controller plus the layout and style needed to draw it.
#[derive(Debug, Clone)]
pub struct RangeBar {
    controller: RangeController,
    layout: RangeBarLayout,
    style: RangeBarStyle,
    scale_factor: f32,
    enabled: bool,
    // Cleared until a user press or an explicit `set_thumb_indices`; while
    // clear, a tick count change resets the range to the full span.
    indices_pinned: bool,
}

impl RangeBar {
    pub fn new(config: RangeBarConfig) -> Result<Self> {
        let scale_factor = checked_scale_factor(config.scale_factor)?;
        let metrics = config.style.thumb_metrics(scale_factor);
        let layout = RangeBarLayout::new(config.width, config.height, metrics.radius)?;
        let field = layout.tick_field(config.tick_count)?;
        let y = layout.baseline_y();

        let controller = match config.initial_indices {
            Some((left, right)) => RangeController::with_indices(field, y, metrics, left, right)?,
            None => RangeController::new(field, y, metrics),
        };

        Ok(Self {
            controller,
            layout,
            style: config.style,
            scale_factor,
            enabled: true,
            indices_pinned: config.initial_indices.is_some(),
        })
    }

    /// Routes one pointer event into the drag state machine.
    ///
    /// Returns whether the control consumed the event: a press that landed on
    /// a thumb, or any later event of that gesture. A disabled control
    /// consumes nothing.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if !self.enabled {
            return false;
        }

        match event {
            PointerEvent::Pressed { x, y } => {
                let hit = self.controller.on_press_start(x, y).is_some();
                self.indices_pinned |= hit;
                hit
            }
            PointerEvent::Moved { x, y } => {
                if !self.controller.is_dragging() {
                    return false;
                }
                self.controller.on_move(x, y);
                true
            }
            PointerEvent::Released => {
                let consumed = self.controller.is_dragging();
                self.controller.on_press_end();
                consumed
            }
            PointerEvent::Cancelled => {
                let consumed = self.controller.is_dragging();
                self.controller.cancel();
                consumed
            }
        }
    }

    /// Enables or disables pointer input. Disabling cancels a running drag.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.controller.cancel();
        }
        if self.enabled != enabled {
            debug!(enabled, "range bar input toggled");
        }
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// See [`RangeController::set_thumb_indices`].
    pub fn set_thumb_indices(&mut self, left: isize, right: isize) -> Result<()> {
        self.controller.set_thumb_indices(left, right)?;
        self.indices_pinned = true;
        Ok(())
    }

    /// Changes the number of ticks, keeping the track span.
    ///
    /// Until the user has pressed a thumb or indices were set explicitly,
    /// the range resets to the full span. Afterwards the indices are kept
    /// unless they no longer fit, in which case they also reset. Either reset
    /// notifies the index listener.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn set_tick_count(&mut self, tick_count: usize) -> Result<()> {
        let field = self.controller.tick_field().with_tick_count(tick_count)?;
        let reset = !self.indices_pinned || self.controller.right_index() >= tick_count;
        let metrics = self.thumb_metrics();

        self.controller
            .relayout(field, self.layout.baseline_y(), metrics);
        if reset {
            debug!("resetting thumb indices to the full range");
            self.controller
                .set_thumb_indices(0, signed(field.last_index()))?;
        }
        Ok(())
    }

    pub fn tick_count(&self) -> usize {
        self.controller.tick_field().tick_count()
    }

    /// Re-lays the control out for a new size, keeping the indices. A
    /// running drag is cancelled.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resize(&mut self, width: f32, height: f32) -> Result<()> {
        let metrics = self.thumb_metrics();
        let layout = RangeBarLayout::new(width, height, metrics.radius)?;
        let field = layout.tick_field(self.tick_count())?;

        self.controller.cancel();
        self.controller.relayout(field, layout.baseline_y(), metrics);
        self.layout = layout;
        Ok(())
    }

    /// Changes the dp scale factor, e.g. when the window moves to another
    /// monitor. Indices and any drag session are kept.
    pub fn set_scale_factor(&mut self, scale_factor: f32) -> Result<()> {
        let scale_factor = checked_scale_factor(scale_factor)?;
        self.apply_style(self.style, scale_factor)
    }

    /// Replaces the style. A new thumb radius moves the track inset; indices
    /// and any drag session are kept.
    pub fn set_style(&mut self, style: RangeBarStyle) -> Result<()> {
        self.apply_style(style, self.scale_factor)
    }

    /// Captures the state a host needs to persist.
    pub fn snapshot(&self) -> RangeBarSnapshot {
        let (left_index, right_index) = self.indices();
        RangeBarSnapshot {
            tick_count: self.tick_count(),
            left_index,
            right_index,
            style: self.style,
        }
    }

    /// Restores a snapshot taken with [`snapshot`](Self::snapshot).
    ///
    /// Everything is validated before anything changes; on success the
    /// indices are applied through `set_thumb_indices`, so the index
    /// listener fires.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn restore(&mut self, snapshot: &RangeBarSnapshot) -> Result<()> {
        let metrics = snapshot.style.thumb_metrics(self.scale_factor);
        let layout = RangeBarLayout::new(self.layout.width(), self.layout.height(), metrics.radius)?;
        let field = layout.tick_field(snapshot.tick_count)?;
        let (left, right) = (signed(snapshot.left_index), signed(snapshot.right_index));
        if snapshot.left_index > snapshot.right_index || snapshot.right_index > field.last_index() {
            return Err(RangeBarError::InvalidRange {
                left,
                right,
                last_index: field.last_index(),
            });
        }

        self.style = snapshot.style;
        self.layout = layout;
        self.controller.relayout(field, layout.baseline_y(), metrics);
        self.set_thumb_indices(left, right)
    }

    pub fn set_on_index_change(&mut self, callback: Option<IndexCallback>) {
        self.controller.set_on_index_change(callback);
    }

    pub fn set_on_release(&mut self, callback: Option<IndexCallback>) {
        self.controller.set_on_release(callback);
    }

    pub fn indices(&self) -> (usize, usize) {
        self.controller.indices()
    }

    pub fn left_index(&self) -> usize {
        self.controller.left_index()
    }

    pub fn right_index(&self) -> usize {
        self.controller.right_index()
    }

    pub fn controller(&self) -> &RangeController {
        &self.controller
    }

    pub fn layout(&self) -> &RangeBarLayout {
        &self.layout
    }

    pub fn style(&self) -> &RangeBarStyle {
        &self.style
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Describes the current state for drawing.
    pub fn frame(&self) -> RenderFrame {
        build_frame(&self.controller, &self.layout, &self.style, self.scale_factor)
    }

    fn thumb_metrics(&self) -> ThumbMetrics {
        self.style.thumb_metrics(self.scale_factor)
    }

    fn apply_style(&mut self, style: RangeBarStyle, scale_factor: f32) -> Result<()> {
        let metrics = style.thumb_metrics(scale_factor);
        let layout = RangeBarLayout::new(self.layout.width(), self.layout.height(), metrics.radius)?;
        let field = layout.tick_field(self.tick_count())?;

        self.style = style;
        self.scale_factor = scale_factor;
        self.layout = layout;
        self.controller.relayout(field, layout.baseline_y(), metrics);
        Ok(())
    }
}

fn checked_scale_factor(scale_factor: f32) -> Result<f32> {
    if scale_factor.is_finite() && scale_factor > 0.0 {
        Ok(scale_factor)
    } else {
        Err(ConfigurationError::ScaleFactor(scale_factor).into())
    }
}

fn signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}
