//! Status screen rendering.

use heapless::Vec;

use crate::config::STATUS_LINES;
use crate::display::StatusDisplay;
use crate::state::ControllerState;
use crate::time::TimeInstant;
use crate::types::{Color, Mode};

/// Label for the raw button level.
pub fn button_label(pressed: bool) -> &'static str {
    if pressed { "PRESSED" } else { "NOT PRESSED" }
}

/// The text lines of one status screen, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFrame {
    lines: Vec<&'static str, STATUS_LINES>,
}

impl StatusFrame {
    /// Builds the frame for the given mode, color and button level.
    pub fn new(mode: Mode, color: Color, button_pressed: bool) -> Self {
        let lines = Vec::from_array([
            "Current State:",
            mode.label(),
            "",
            "Current Colour:",
            color.label(),
            "",
            "Button State:",
            button_label(button_pressed),
        ]);
        Self { lines }
    }

    /// Builds the frame for a controller state.
    pub fn from_state<I: TimeInstant>(state: &ControllerState<I>) -> Self {
        Self::new(state.mode(), state.color(), state.button_pressed())
    }

    pub fn lines(&self) -> &[&'static str] {
        &self.lines
    }

    /// Clears the display and draws every line.
    pub fn draw<D: StatusDisplay>(&self, display: &mut D) {
        display.clear();
        for line in &self.lines {
            display.draw_line(line);
        }
    }
}

/// Redraws the status screen when the controller state has changed.
///
/// Keeps its own copy of the last rendered button level, because the level
/// can change without any other field changing.
#[derive(Debug, Clone, Copy)]
pub struct StatusRenderer {
    last_rendered_button: bool,
}

impl StatusRenderer {
    /// Creates a renderer whose first [`render`](Self::render) always draws.
    pub fn new(initial_button_pressed: bool) -> Self {
        Self {
            last_rendered_button: !initial_button_pressed,
        }
    }

    /// Returns true if the next render call would draw.
    pub fn needs_redraw<I: TimeInstant>(&self, state: &ControllerState<I>) -> bool {
        state.is_dirty() || self.last_rendered_button != state.button_pressed()
    }

    /// Draws the status screen if needed and clears the dirty flag.
    ///
    /// Returns `true` if the display was redrawn.
    pub fn render<I: TimeInstant, D: StatusDisplay>(
        &mut self,
        state: &mut ControllerState<I>,
        display: &mut D,
    ) -> bool {
        if !self.needs_redraw(state) {
            return false;
        }

        StatusFrame::from_state(state).draw(display);

        state.mark_rendered();
        self.last_rendered_button = state.button_pressed();
        true
    }
}

impl Default for StatusRenderer {
    fn default() -> Self {
        Self::new(false)
    }
}
