//! Mode/color state machine.
//!
//! [`ControllerState`] is the single aggregate mutated by the control loop.
//! Every transition that changes something shown on the display marks the
//! state dirty; only the renderer clears it again.

use crate::config::{AUTO_ADVANCE_INTERVAL_MS, WRAP_GUARD_MS};
use crate::event::ButtonEvent;
use crate::led::LedOutput;
use crate::time::{TimeDuration, TimeInstant};
use crate::types::{Color, Mode};

/// Current color, mode and display bookkeeping of the controller.
#[derive(Debug, Clone, Copy)]
pub struct ControllerState<I: TimeInstant> {
    color: Color,
    mode: Mode,
    button_pressed: bool,
    dirty: bool,
    last_auto_advance: I,
}

impl<I: TimeInstant> ControllerState<I> {
    /// Creates the startup state: Red, Auto, button released, dirty.
    ///
    /// `now` starts the automatic cycling interval. The LED is not touched;
    /// call [`apply_color`](Self::apply_color) to bring the pins in line.
    pub fn new(now: I) -> Self {
        Self {
            color: Color::Red,
            mode: Mode::Auto,
            button_pressed: false,
            dirty: true,
            last_auto_advance: now,
        }
    }

    /// Writes the pin levels for the current color.
    pub fn apply_color<L: LedOutput>(&self, led: &mut L) {
        led.set_levels(self.color.pin_levels());
    }

    /// Moves to the next color in the cycle and updates the LED.
    ///
    /// Writes the LED exactly once and marks the state dirty.
    pub fn advance_color<L: LedOutput>(&mut self, led: &mut L) -> Color {
        self.color = Color::from_index((self.color.index() + 1) % Color::COUNT);
        self.apply_color(led);
        self.dirty = true;
        debug!("color -> {}", self.color);
        self.color
    }

    /// Advances the color if the auto interval has elapsed.
    ///
    /// Only acts in [`Mode::Auto`]. Returns `true` if the color advanced.
    pub fn tick_auto<L: LedOutput>(&mut self, now: I, led: &mut L) -> bool {
        if self.mode != Mode::Auto {
            return false;
        }

        let elapsed = now.duration_since(self.last_auto_advance).as_millis();

        if elapsed >= WRAP_GUARD_MS {
            warn!("implausible elapsed time {} ms, resetting auto timer", elapsed);
            self.last_auto_advance = now;
            return false;
        }

        if elapsed < AUTO_ADVANCE_INTERVAL_MS {
            return false;
        }

        self.last_auto_advance = now;
        self.advance_color(led);
        self.dirty = true;
        true
    }

    /// Toggles between Auto and Manual mode.
    pub fn on_long_press_start(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.dirty = true;
        info!("mode -> {}", self.mode);
        self.mode
    }

    /// Advances the color in Manual mode.
    ///
    /// In Auto mode the color is left alone, but the state is still marked
    /// dirty so every press triggers a redraw.
    pub fn on_short_press<L: LedOutput>(&mut self, led: &mut L) {
        if self.mode == Mode::Manual {
            self.advance_color(led);
        }
        self.dirty = true;
    }

    /// Records the raw button level.
    pub fn set_button_pressed(&mut self, pressed: bool) {
        if self.button_pressed != pressed {
            self.button_pressed = pressed;
            self.dirty = true;
        }
    }

    /// Dispatches a button event to the matching transition.
    pub fn handle_event<L: LedOutput>(&mut self, event: ButtonEvent, led: &mut L) {
        trace!("event {}", event);
        match event {
            ButtonEvent::Pressed => self.set_button_pressed(true),
            ButtonEvent::Released => self.set_button_pressed(false),
            ButtonEvent::ShortPress => self.on_short_press(led),
            ButtonEvent::LongPressStart => {
                self.on_long_press_start();
            }
        }
    }

    /// Clears the dirty flag after the display has been redrawn.
    pub(crate) fn mark_rendered(&mut self) {
        self.dirty = false;
    }

    /// Returns the current color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the raw button level.
    pub fn button_pressed(&self) -> bool {
        self.button_pressed
    }

    /// Returns true if the display is stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the instant of the last automatic advance.
    pub fn last_auto_advance(&self) -> I {
        self.last_auto_advance
    }
}
