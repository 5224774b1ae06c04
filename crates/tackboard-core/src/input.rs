//! Gesture and text-input events delivered by the host.

use crate::field::FieldId;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// A discrete gesture delivered by the host gesture source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum GestureEvent {
    /// Tap-style pick on a field; binds the selection to it.
    Pick { target: FieldId },
    /// Incremental drag delta, applied to the current selection.
    Drag { delta: Vec2 },
}

/// Events from the text-input collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TextInputEvent {
    /// The content of a field changed.
    Changed { target: FieldId, text: String },
    /// Return/submit pressed; the field relinquishes input focus.
    Submit { target: FieldId },
}

/// Converts absolute pointer positions into consumed per-callback deltas.
///
/// Mirrors the gesture-source contract: the accumulated translation resets
/// after every callback, so deltas are never double-applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTracker {
    last: Option<Point>,
}

impl DragTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag at the given pointer position.
    pub fn begin(&mut self, position: Point) {
        self.last = Some(position);
    }

    /// Advance the drag and return the delta since the previous callback.
    /// Returns zero while no drag is active.
    pub fn update(&mut self, position: Point) -> Vec2 {
        let Some(last) = self.last else {
            return Vec2::ZERO;
        };
        self.last = Some(position);
        Vec2::new(position.x - last.x, position.y - last.y)
    }

    /// End the drag.
    pub fn end(&mut self) {
        self.last = None;
    }

    /// Whether a drag is in progress.
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }
}
