//! Flow ordering: single-pass greedy shelf packing.

use kurbo::{Point, Size};

/// Spacing between fields and from the canvas edges.
pub const FLOW_PADDING: f64 = 10.0;

/// Compute left-to-right, top-to-bottom placements for `sizes`, in order.
///
/// Items are never reordered or resized; wrapping happens when an item
/// would overflow the canvas width. On wrap, the row advance uses the
/// height of the item being wrapped, not the tallest item of the finished
/// row.
///
/// Packing stops as soon as a placed item extends past the canvas bottom,
/// so the result may be shorter than `sizes`; callers leave the remaining
/// items where they are.
pub fn flow_positions(sizes: &[Size], canvas: Size) -> Vec<Point> {
    let mut positions = Vec::with_capacity(sizes.len());
    let mut current_x = FLOW_PADDING;
    let mut current_y = FLOW_PADDING;

    for size in sizes {
        if current_x + size.width + FLOW_PADDING > canvas.width {
            current_x = FLOW_PADDING;
            current_y += size.height + FLOW_PADDING;
        }
        positions.push(Point::new(current_x, current_y));
        current_x += size.width + FLOW_PADDING;
        if current_y + size.height > canvas.height {
            break;
        }
    }

    positions
}
