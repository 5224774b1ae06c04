//! Single-screen editing session: command routing and event handling.

use crate::commands::{Command, CommandBar};
use kurbo::Size;
use tackboard_core::{
    Canvas, CharWidthMeasurer, GestureEvent, TextInputEvent, Transition,
};

/// Height reserved at the bottom of the host view for the command bar.
pub const COMMAND_BAR_INSET: f64 = 100.0;

/// A single-screen editing session.
///
/// Owns the canvas and routes commands, gestures, and text-input events to
/// it, all on the one event-processing thread. Presentational transitions
/// are queued for the rendering layer to drain; the session never waits on
/// them.
pub struct Session {
    canvas: Canvas,
    bar: CommandBar,
    measurer: CharWidthMeasurer,
    host_size: Size,
    transitions: Vec<Transition>,
}

impl Session {
    /// Create a session for a host view of the given size. The canvas
    /// occupies the host minus the command-bar inset.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            canvas: Canvas::new(width, (height - COMMAND_BAR_INSET).max(0.0)),
            bar: CommandBar::new(),
            measurer: CharWidthMeasurer,
            host_size: Size::new(width, height),
            transitions: Vec::new(),
        }
    }

    /// Handle a command invocation from the control bar.
    pub fn invoke(&mut self, command: Command) {
        log::debug!("command invoked: {}", command.label());
        self.bar.invoke(command);
        match command {
            Command::Add => {
                self.canvas.add_field();
            }
            Command::Order => self.canvas.order_fields(),
            _ => {
                if let Some(alignment) = command.alignment() {
                    if let Some(transition) = self.canvas.align_selected(alignment) {
                        self.transitions.push(transition);
                    }
                }
            }
        }
    }

    /// Handle a gesture from the host gesture source.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Pick { target } => self.canvas.select(target),
            GestureEvent::Drag { delta } => self.canvas.drag_selected(delta),
        }
    }

    /// Handle an event from the text-input collaborator. A content change
    /// implies the field holds input focus; submit relinquishes it.
    pub fn handle_text_event(&mut self, event: TextInputEvent) {
        match event {
            TextInputEvent::Changed { target, text } => {
                self.canvas.focus(target);
                self.canvas
                    .content_changed(target, text, &self.measurer, self.host_size.width);
            }
            TextInputEvent::Submit { .. } => self.canvas.blur(),
        }
    }

    /// Host view resized; the canvas keeps the region above the command bar.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.host_size = Size::new(width, height);
        self.canvas
            .set_size(width, (height - COMMAND_BAR_INSET).max(0.0));
    }

    /// Drain the pending presentational transitions for the renderer.
    pub fn take_transitions(&mut self) -> Vec<Transition> {
        std::mem::take(&mut self.transitions)
    }

    /// Get the canvas.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Get the canvas mutably.
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Get the command bar state.
    pub fn command_bar(&self) -> &CommandBar {
        &self.bar
    }
}
