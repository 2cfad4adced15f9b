//! Thread-shareable handle to a [`RangeBar`].
//!
//! The control itself is single-threaded: it expects its events serialized.
//! Hosts that deliver input on one thread and draw on another wrap it in a
//! [`SharedRangeBar`] and go through [`with`](SharedRangeBar::with) /
//! [`with_mut`](SharedRangeBar::with_mut).
//!
//! Listener callbacks run while the write lock is held. A callback must not
//! touch the same `SharedRangeBar` again or it will deadlock.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    error::Result,
    range_bar::{PointerEvent, RangeBar, RangeBarConfig},
    render::RenderFrame,
};

/// Cloneable, lock-protected [`RangeBar`].
#[derive(Debug, Clone)]
pub struct SharedRangeBar {
    inner: Arc<RwLock<RangeBar>>,
}

impl SharedRangeBar {
    pub fn new(config: RangeBarConfig) -> Result<Self> {
        Ok(Self::from(RangeBar::new(config)?))
    }

    /// Execute a closure with a shared reference to the bar.
    pub fn with<R>(&self, f: impl FnOnce(&RangeBar) -> R) -> R {
        f(&self.inner.read())
    }

    /// Execute a closure with an exclusive reference to the bar.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut RangeBar) -> R) -> R {
        f(&mut self.inner.write())
    }

    pub fn handle_pointer(&self, event: PointerEvent) -> bool {
        self.with_mut(|bar| bar.handle_pointer(event))
    }

    pub fn indices(&self) -> (usize, usize) {
        self.with(RangeBar::indices)
    }

    pub fn frame(&self) -> RenderFrame {
        self.with(RangeBar::frame)
    }
}

impl From<RangeBar> for SharedRangeBar {
    fn from(bar: RangeBar) -> Self {
        Self {
            inner: Arc::new(RwLock::new(bar)),
        }
    }
}
