//! Edge and center alignment for the selected field.

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Alignment command applied to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    Top,
    Bottom,
    Left,
    Right,
    /// Vertical centering: the field's center lands on H/2.
    CenterV,
    /// Horizontal centering: the field's center lands on W/2.
    CenterH,
}

/// Compute the new top-left origin for a field of `size` currently at
/// `origin`, aligned within a canvas of `canvas` size. The orthogonal axis
/// is left unchanged.
///
/// No re-clamping is applied: a field larger than the canvas yields a
/// negative origin, which is accepted.
pub fn aligned_position(alignment: Alignment, origin: Point, size: Size, canvas: Size) -> Point {
    match alignment {
        Alignment::Top => Point::new(origin.x, 0.0),
        Alignment::Bottom => Point::new(origin.x, canvas.height - size.height),
        Alignment::Left => Point::new(0.0, origin.y),
        Alignment::Right => Point::new(canvas.width - size.width, origin.y),
        Alignment::CenterV => Point::new(origin.x, canvas.height / 2.0 - size.height / 2.0),
        Alignment::CenterH => Point::new(canvas.width / 2.0 - size.width / 2.0, origin.y),
    }
}
