// Anchored popup placement. Pure: no layout queries, no clamping.
// Viewport fitting is the view's job (see ui::prompt).

use crate::model::prompt::{AnchorRect, Direction, PopupPosition, Side};

/// Popup width in device pixels.
pub const POPUP_WIDTH: f64 = 300.0;
/// Horizontal distance between anchor and popup.
pub const GAP: f64 = 25.0;

/// Which edge of the popup carries the pointer arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowEdge {
    /// Arrow on the left edge, pointing left.
    Left,
    /// Arrow on the right edge, pointing right.
    Right,
}

/// Top-left corner of the popup for `anchor`, or `None` for the default
/// (centred) placement.
///
/// Right-to-left layouts always place the popup to the right of the anchor,
/// whatever `side` asks for.
pub fn resolve(
    anchor: Option<&AnchorRect>,
    side: Side,
    direction: Direction,
) -> Option<PopupPosition> {
    let a = anchor.filter(|a| a.is_finite())?;
    let top = a.top - a.height;

    if direction.is_right_to_left() {
        return Some(PopupPosition { top, left: a.right + GAP });
    }

    match side {
        Side::Left => Some(PopupPosition { top, left: a.left - POPUP_WIDTH - GAP }),
        Side::Right => Some(PopupPosition { top, left: a.right + GAP }),
        Side::Unspecified => None,
    }
}

pub fn arrow_edge(direction: Direction) -> ArrowEdge {
    if direction.is_right_to_left() { ArrowEdge::Left } else { ArrowEdge::Right }
}
