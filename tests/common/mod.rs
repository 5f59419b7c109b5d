//! Shared test infrastructure for bicolor-led-controller integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use bicolor_led_controller::{
    LedOutput, LedPin, Millis, PinLevel, PinLevels, StatusDisplay, TimeSource,
};

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records every pin write
pub struct MockLed {
    history: heapless::Vec<PinLevels, 64>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
        }
    }

    pub fn last_levels(&self) -> Option<PinLevels> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[PinLevels] {
        &self.history
    }

    pub fn write_count(&self) -> usize {
        self.history.len()
    }
}

impl LedOutput for MockLed {
    /// Records the resulting levels of both pins
    fn set_pin(&mut self, pin: LedPin, level: PinLevel) {
        let current = self
            .last_levels()
            .unwrap_or(PinLevels::new(PinLevel::Low, PinLevel::Low));
        let levels = match pin {
            LedPin::Red => PinLevels::new(level, current.green),
            LedPin::Green => PinLevels::new(current.red, level),
        };
        let _ = self.history.push(levels);
    }

    fn set_levels(&mut self, levels: PinLevels) {
        let _ = self.history.push(levels);
    }
}

// ============================================================================
// Mock Display
// ============================================================================

/// Mock display that records each cleared-and-drawn frame as a list of lines
pub struct MockDisplay {
    frames: Vec<Vec<String>>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn last_frame(&self) -> &[String] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Mode, color and button values of the last frame
    pub fn last_values(&self) -> (&str, &str, &str) {
        let frame = self.last_frame();
        (&frame[1], &frame[4], &frame[7])
    }
}

impl StatusDisplay for MockDisplay {
    fn clear(&mut self) {
        self.frames.push(Vec::new());
    }

    fn draw_line(&mut self, line: &str) {
        if let Some(frame) = self.frames.last_mut() {
            frame.push(line.to_string());
        }
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<Millis>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(millis: u32) -> Self {
        Self {
            current_time: core::cell::Cell::new(Millis(millis)),
        }
    }

    /// Advance time by the given number of milliseconds, wrapping like a hardware counter
    pub fn advance(&self, millis: u32) {
        let current = self.current_time.get();
        self.current_time.set(Millis(current.0.wrapping_add(millis)));
    }

    pub fn set_time(&self, time: Millis) {
        self.current_time.set(time);
    }
}

impl TimeSource<Millis> for MockTimeSource {
    fn now(&self) -> Millis {
        self.current_time.get()
    }
}
