//! Controller errors.

use crate::event::ButtonEvent;

/// Errors that can occur while feeding the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerError {
    /// The event queue is full. The rejected event is returned.
    EventQueueFull(ButtonEvent),
}

impl core::fmt::Display for ControllerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ControllerError::EventQueueFull(event) => {
                write!(f, "event queue full, dropped {:?}", event)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ControllerError {}
