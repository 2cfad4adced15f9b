//! A dual-thumb range selector over discrete ticks.
//!
//! The user picks a closed interval `[left, right]` of tick indices by
//! dragging two thumbs along a horizontal track. This crate holds the part
//! with invariants: thumb hit-testing, the drag state machine, and the
//! pixel/index quantization. Drawing, event delivery and persistence belong
//! to the host, which talks to the control through plain data.
//!
//! # Layers
//!
//! - [`TickField`] converts between pixel x-coordinates and tick indices.
//! - [`Thumb`] is one draggable handle with a touch target that never
//!   shrinks below [`MINIMUM_TARGET_RADIUS`].
//! - [`RangeController`] owns both thumbs and keeps `left <= right`.
//! - [`RangeBar`] adds layout, style, enabling, tick count changes and
//!   snapshots, and describes itself for drawing as a [`RenderFrame`].
//!
//! # Example
//!
//! ```
//! use rangebar::{IndexCallback, PointerEvent, RangeBar, RangeBarConfig, ValueScale};
//!
//! let years = ValueScale::new(1990.0, 2020.0, 5.0)?;
//! let mut bar = RangeBar::new(
//!     RangeBarConfig::default()
//!         .tick_count(years.tick_count())
//!         .width(328.0),
//! )?;
//! bar.set_on_index_change(Some(IndexCallback::new(move |range| {
//!     println!("{:?}", years.range_of(range));
//! })));
//!
//! bar.set_thumb_indices(1, 4)?;
//! assert_eq!(years.range_of(bar.indices()), (1995.0, 2010.0));
//!
//! // Out-of-range requests are rejected and change nothing.
//! assert!(bar.set_thumb_indices(-1, 4).is_err());
//! assert_eq!(bar.indices(), (1, 4));
//!
//! let y = bar.layout().baseline_y();
//! assert!(bar.handle_pointer(PointerEvent::Pressed { x: 64.0, y }));
//! # Ok::<(), rangebar::RangeBarError>(())
//! ```
//!
//! # Logging
//!
//! State transitions are reported through [`tracing`] at `trace` level and
//! rejected calls at `debug`. The crate never installs a subscriber.

pub mod callback;
pub mod color;
pub mod controller;
pub mod dp;
pub mod error;
pub mod layout;
pub mod range_bar;
pub mod render;
pub mod shared;
pub mod snapshot;
pub mod style;
pub mod thumb;
pub mod tick_field;
pub mod value_scale;

pub use callback::{CallbackWith, IndexCallback};
pub use color::Color;
pub use controller::{DragState, RangeController, ThumbSide};
pub use dp::Dp;
pub use error::{ConfigurationError, RangeBarError, Result};
pub use layout::{RangeBarLayout, SizeConstraint, measure};
pub use range_bar::{PointerEvent, RangeBar, RangeBarConfig};
pub use render::{LineSegment, RenderFrame, ThumbVisual, TickMarks};
pub use shared::SharedRangeBar;
pub use snapshot::RangeBarSnapshot;
pub use style::RangeBarStyle;
pub use thumb::{DEFAULT_THUMB_RADIUS, MINIMUM_TARGET_RADIUS, Thumb, ThumbMetrics};
pub use tick_field::TickField;
pub use value_scale::ValueScale;

#[cfg(doctest)]
#[doc = include_str!("../../README.md")]
struct ReadmeDoctests;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use tracing_subscriber::EnvFilter;

    use crate::callback::IndexCallback;

    /// Installs a test-writer subscriber once; `RUST_LOG=rangebar=trace`
    /// shows the state machine.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// A callback that records every pair it receives.
    pub fn recorder() -> (IndexCallback, Arc<Mutex<Vec<(usize, usize)>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let callback = IndexCallback::new(move |pair| sink.lock().push(pair));
        (callback, seen)
    }
}
