//! Presentational position transitions.
//!
//! Alignment updates the model immediately; the visual move is a
//! fire-and-forget interpolation the rendering layer plays back. Nothing in
//! the core ever waits on a transition.

use crate::field::FieldId;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Duration of the alignment transition, in seconds.
pub const ALIGN_DURATION: f64 = 0.3;

/// A pending visual transition for one field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transition {
    /// The field being animated.
    pub field: FieldId,
    /// Position when the transition started.
    pub from: Point,
    /// Position the model already holds.
    pub to: Point,
    /// Duration in seconds.
    pub duration: f64,
}

impl Transition {
    /// Create a transition with the standard alignment duration.
    pub fn new(field: FieldId, from: Point, to: Point) -> Self {
        Self {
            field,
            from,
            to,
            duration: ALIGN_DURATION,
        }
    }

    /// Sample the animated position `elapsed` seconds in, with smooth
    /// ease-in-out interpolation. Clamps to the endpoints.
    pub fn position_at(&self, elapsed: f64) -> Point {
        if elapsed <= 0.0 {
            return self.from;
        }
        if self.duration <= 0.0 || elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed / self.duration;
        let eased = t * t * (3.0 - 2.0 * t);
        Point::new(
            self.from.x + (self.to.x - self.from.x) * eased,
            self.from.y + (self.to.y - self.from.y) * eased,
        )
    }

    /// Whether the transition has finished at `elapsed` seconds.
    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.duration
    }
}
