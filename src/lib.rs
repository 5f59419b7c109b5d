#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! Mode/color state machine for a two-wire red/green LED with a button and a
//! status display.
//!
//! # Core Concepts
//!
//! - **`Color`**: The LED color, cycling Red -> Green -> Orange
//! - **`Mode`**: `Auto` advances the color every second, `Manual` on each short press
//! - **`ControllerState`**: The single state aggregate and its transitions
//! - **`StatusRenderer`**: Redraws the status screen only when something changed
//! - **`Controller`**: Runs one loop iteration per `poll`: tick, button events, render
//! - **`ButtonDetector`**: Turns raw button samples into press, release, short and long press events
//! - **`LedOutput`**: Trait to implement for your LED pins (`GpioLed` and `RgbLedOutput` provided)
//! - **`StatusDisplay`**: Trait to implement for your display (`TextDisplay` provided for `embedded-graphics`)
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Long-press detection, debounce and all hardware access sit behind these
//! traits, so the state machine runs unchanged on a host for testing.

#[macro_use]
mod fmt;

pub mod config;
pub mod time;
pub mod types;
pub mod event;
pub mod error;
pub mod led;
pub mod display;
pub mod state;
pub mod renderer;
pub mod button;
pub mod controller;

pub use button::ButtonDetector;
pub use controller::{Controller, PollReport};
pub use display::{StatusDisplay, TextDisplay};
pub use error::ControllerError;
pub use event::ButtonEvent;
pub use led::{GpioLed, LedOutput, RgbLed, RgbLedOutput};
pub use renderer::{StatusFrame, StatusRenderer};
pub use state::ControllerState;
pub use time::{Millis, MillisDuration, TimeDuration, TimeInstant, TimeSource};
pub use types::{Color, LedPin, Mode, PinLevel, PinLevels};
