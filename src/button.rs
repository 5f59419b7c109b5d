//! Button event detection.
//!
//! [`ButtonDetector`] turns sampled raw button levels into [`ButtonEvent`]s:
//! debounced level changes, a single long-press notification once the hold
//! time is reached, and a short press on release if no long press fired.

use heapless::Vec;

use crate::config::{DEBOUNCE_MS, LONG_PRESS_MS};
use crate::event::ButtonEvent;
use crate::time::{TimeDuration, TimeInstant};

/// Events produced by one sample. A release can yield two.
pub type SampleEvents = Vec<ButtonEvent, 2>;

/// Debounced press, release, short-press and long-press detection.
#[derive(Debug, Clone, Copy)]
pub struct ButtonDetector<I: TimeInstant> {
    pressed: bool,
    last_change: Option<I>,
    long_press_fired: bool,
}

impl<I: TimeInstant> ButtonDetector<I> {
    /// Creates a detector with the button released.
    pub fn new() -> Self {
        Self {
            pressed: false,
            last_change: None,
            long_press_fired: false,
        }
    }

    /// Returns the debounced button level.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Feeds one raw sample.
    ///
    /// # Arguments
    /// * `pressed` - Raw button level (true if pressed)
    /// * `now` - Time of the sample
    pub fn sample(&mut self, pressed: bool, now: I) -> SampleEvents {
        let mut events = SampleEvents::new();

        if pressed != self.pressed && self.settled(now) {
            self.pressed = pressed;
            self.last_change = Some(now);

            if pressed {
                self.long_press_fired = false;
                let _ = events.push(ButtonEvent::Pressed);
            } else {
                let _ = events.push(ButtonEvent::Released);
                if !self.long_press_fired {
                    let _ = events.push(ButtonEvent::ShortPress);
                }
            }
            return events;
        }

        if self.pressed
            && !self.long_press_fired
            && let Some(start) = self.last_change
            && now.duration_since(start).as_millis() >= LONG_PRESS_MS
        {
            self.long_press_fired = true;
            let _ = events.push(ButtonEvent::LongPressStart);
        }

        events
    }

    fn settled(&self, now: I) -> bool {
        match self.last_change {
            Some(last) => now.duration_since(last).as_millis() >= DEBOUNCE_MS,
            None => true,
        }
    }
}

impl<I: TimeInstant> Default for ButtonDetector<I> {
    fn default() -> Self {
        Self::new()
    }
}
