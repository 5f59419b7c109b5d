//! Timing and capacity constants.
//!
//! All values are in milliseconds unless stated otherwise.

// =============================================================================
// Color Cycling
// =============================================================================

/// Interval between automatic color advances in Auto mode.
pub const AUTO_ADVANCE_INTERVAL_MS: u64 = 1000;

/// Elapsed times at or above this value are treated as a clock wrap or a
/// backwards jump rather than real time passing.
///
/// Half the range of a 32-bit millisecond counter (~24.8 days).
pub const WRAP_GUARD_MS: u64 = 0x8000_0000;

// =============================================================================
// Button Timing
// =============================================================================

/// Hold time after which a press becomes a long press.
pub const LONG_PRESS_MS: u64 = 1000;

/// Minimum time a new raw level must follow the previous accepted change.
pub const DEBOUNCE_MS: u64 = 50;

// =============================================================================
// Capacities
// =============================================================================

/// Default number of button events the controller can buffer between polls.
pub const EVENT_QUEUE_DEPTH: usize = 8;

/// Number of text lines in one status frame.
pub const STATUS_LINES: usize = 8;
