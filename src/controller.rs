//! Control loop glue.
//!
//! Provides [`Controller`], which owns the state machine, the renderer and the
//! hardware collaborators, and runs one loop iteration per [`poll`](Controller::poll)
//! call in a fixed order: automatic tick, queued button events, render.
//!
//! Interrupt handlers and button tasks should only [`push_event`](Controller::push_event);
//! all state changes happen inside `poll`.

use heapless::Deque;

use crate::button::ButtonDetector;
use crate::config::EVENT_QUEUE_DEPTH;
use crate::display::StatusDisplay;
use crate::error::ControllerError;
use crate::event::ButtonEvent;
use crate::led::LedOutput;
use crate::renderer::StatusRenderer;
use crate::state::ControllerState;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{Color, Mode};

/// What happened during one [`Controller::poll`] iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollReport {
    /// The automatic tick advanced the color.
    pub auto_advanced: bool,
    /// Number of button events handled.
    pub events_handled: usize,
    /// The status screen was redrawn.
    pub redrawn: bool,
}

/// Drives a two-wire LED and a status display from time and button input.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `L` - LED output implementation type
/// * `D` - Status display implementation type
/// * `T` - Time source implementation type
/// * `Q` - Capacity of the button event queue
pub struct Controller<'t, I, L, D, T, const Q: usize = EVENT_QUEUE_DEPTH>
where
    I: TimeInstant,
    L: LedOutput,
    D: StatusDisplay,
    T: TimeSource<I>,
{
    state: ControllerState<I>,
    renderer: StatusRenderer,
    led: L,
    display: D,
    time_source: &'t T,
    events: Deque<ButtonEvent, Q>,
}

impl<'t, I, L, D, T, const Q: usize> Controller<'t, I, L, D, T, Q>
where
    I: TimeInstant,
    L: LedOutput,
    D: StatusDisplay,
    T: TimeSource<I>,
{
    /// Creates a controller in the startup state and lights the LED red.
    ///
    /// The display is drawn on the first [`poll`](Self::poll).
    pub fn new(mut led: L, display: D, time_source: &'t T) -> Self {
        let state = ControllerState::new(time_source.now());
        state.apply_color(&mut led);
        info!("controller started: {} / {}", state.mode(), state.color());

        Self {
            renderer: StatusRenderer::new(state.button_pressed()),
            state,
            led,
            display,
            time_source,
            events: Deque::new(),
        }
    }

    /// Queues a button event for the next [`poll`](Self::poll).
    ///
    /// # Returns
    /// * `Ok(())` - Event queued
    /// * `Err(ControllerError::EventQueueFull)` - Queue full, event rejected
    pub fn push_event(&mut self, event: ButtonEvent) -> Result<(), ControllerError> {
        self.events.push_back(event).map_err(|event| {
            warn!("event queue full, dropping {}", event);
            ControllerError::EventQueueFull(event)
        })
    }

    /// Samples the raw button level through `detector` and queues the resulting events.
    ///
    /// The sample is all or nothing: if the queue cannot take every event it
    /// produces, nothing is queued and `detector` is left unchanged, so the
    /// next sample sees the same edge again.
    ///
    /// # Returns
    /// * `Ok(())` - Sample taken, events queued
    /// * `Err(ControllerError::EventQueueFull)` - Not enough room, first event that did not fit
    pub fn sample_button(
        &mut self,
        detector: &mut ButtonDetector<I>,
        pressed: bool,
    ) -> Result<(), ControllerError> {
        let now = self.time_source.now();
        let mut next = *detector;
        let events = next.sample(pressed, now);

        let free = Q - self.events.len();
        if let Some(&rejected) = events.get(free) {
            warn!("event queue full, deferring button sample");
            return Err(ControllerError::EventQueueFull(rejected));
        }

        for event in events {
            self.push_event(event)?;
        }
        *detector = next;
        Ok(())
    }

    /// Runs one loop iteration: tick, button events, render.
    pub fn poll(&mut self) -> PollReport {
        let mut report = PollReport::default();

        let now = self.time_source.now();
        report.auto_advanced = self.state.tick_auto(now, &mut self.led);

        while let Some(event) = self.events.pop_front() {
            self.state.handle_event(event, &mut self.led);
            report.events_handled += 1;
        }

        report.redrawn = self.renderer.render(&mut self.state, &mut self.display);
        report
    }

    /// Returns the state machine.
    pub fn state(&self) -> &ControllerState<I> {
        &self.state
    }

    /// Returns the current color.
    pub fn color(&self) -> Color {
        self.state.color()
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Returns the number of queued, unhandled events.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Consumes the controller and returns the LED and display.
    pub fn release(self) -> (L, D) {
        (self.led, self.display)
    }
}
