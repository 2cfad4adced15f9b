//! Backend-agnostic draw description.
//!
//! A rendering adapter asks the [`RangeBar`](crate::RangeBar) for a
//! [`RenderFrame`] once per redraw and strokes/fills what it describes:
//! the bar, its tick marks, the connecting line, then both thumbs on top.

use smallvec::SmallVec;

use crate::{
    color::Color, controller::RangeController, layout::RangeBarLayout, style::RangeBarStyle,
    thumb::Thumb,
};

/// A horizontal stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from_x: f32,
    pub to_x: f32,
    pub y: f32,
    pub weight: f32,
    pub color: Color,
}

/// Vertical tick marks crossing the bar.
#[derive(Debug, Clone, PartialEq)]
pub struct TickMarks {
    pub xs: SmallVec<[f32; 16]>,
    pub top_y: f32,
    pub bottom_y: f32,
    pub weight: f32,
    pub color: Color,
}

/// A filled thumb circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbVisual {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    pub pressed: bool,
    pub color: Color,
}

/// Everything needed to draw the control once.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub bar: LineSegment,
    pub ticks: TickMarks,
    pub connecting_line: LineSegment,
    pub left_thumb: ThumbVisual,
    pub right_thumb: ThumbVisual,
}

pub(crate) fn build_frame(
    controller: &RangeController,
    layout: &RangeBarLayout,
    style: &RangeBarStyle,
    scale_factor: f32,
) -> RenderFrame {
    let field = controller.tick_field();
    let y = layout.baseline_y();
    let half_tick = style.tick_height.to_px(scale_factor) / 2.0;

    RenderFrame {
        bar: LineSegment {
            from_x: field.left_bound(),
            to_x: field.right_bound(),
            y,
            weight: style.bar_weight,
            color: style.bar_color,
        },
        ticks: TickMarks {
            xs: field.tick_positions(),
            top_y: y - half_tick,
            bottom_y: y + half_tick,
            weight: style.bar_weight,
            color: style.bar_color,
        },
        connecting_line: LineSegment {
            from_x: controller.left_thumb().x(),
            to_x: controller.right_thumb().x(),
            y,
            weight: style.connecting_line_weight,
            color: style.connecting_line_color,
        },
        left_thumb: thumb_visual(controller.left_thumb(), style),
        right_thumb: thumb_visual(controller.right_thumb(), style),
    }
}

fn thumb_visual(thumb: &Thumb, style: &RangeBarStyle) -> ThumbVisual {
    ThumbVisual {
        center_x: thumb.x(),
        center_y: thumb.y(),
        radius: thumb.radius(),
        pressed: thumb.is_pressed(),
        color: style.thumb_color(thumb.is_pressed()),
    }
}
