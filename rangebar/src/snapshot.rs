//! Persisted range bar state.

use crate::style::RangeBarStyle;

/// What a host saves to rebuild the control after a layout change or a
/// process restart.
///
/// Restoring goes through [`RangeBar::restore`](crate::RangeBar::restore),
/// which validates the indices like any other programmatic update.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeBarSnapshot {
    pub tick_count: usize,
    pub left_index: usize,
    pub right_index: usize,
    pub style: RangeBarStyle,
}
