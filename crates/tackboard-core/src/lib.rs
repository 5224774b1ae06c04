//! Tackboard Core Library
//!
//! Platform-agnostic model and layout logic for the Tackboard canvas editor:
//! a bounded canvas of draggable, alignable text fields.

pub mod align;
pub mod canvas;
pub mod field;
pub mod flow;
pub mod input;
pub mod measure;
pub mod transition;

pub use align::{aligned_position, Alignment};
pub use canvas::Canvas;
pub use field::{Field, FieldColor, FieldId, FieldStyle};
pub use flow::{flow_positions, FLOW_PADDING};
pub use input::{DragTracker, GestureEvent, TextInputEvent};
pub use measure::{constraint_width, CharWidthMeasurer, TextMeasurer};
pub use transition::{Transition, ALIGN_DURATION};
