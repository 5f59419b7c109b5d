//! LED output abstraction and hardware adapters.
//!
//! The controller only talks to [`LedOutput`]. Two adapters are provided:
//! [`GpioLed`] for a two-wire LED on plain GPIO pins, and [`RgbLedOutput`]
//! for anything that takes an RGB color.

use embedded_hal::digital::{OutputPin, PinState};
use palette::Srgb;

use crate::types::{LedPin, PinLevel, PinLevels};

/// Trait for abstracting the red/green LED pins.
///
/// Handle any hardware errors internally - these methods cannot fail.
pub trait LedOutput {
    /// Sets a single pin level.
    fn set_pin(&mut self, pin: LedPin, level: PinLevel);

    /// Sets both pin levels as one write.
    ///
    /// The default writes the red pin, then the green pin. Override it when
    /// the hardware can update both at once.
    fn set_levels(&mut self, levels: PinLevels) {
        self.set_pin(LedPin::Red, levels.red);
        self.set_pin(LedPin::Green, levels.green);
    }
}

impl<L: LedOutput + ?Sized> LedOutput for &mut L {
    fn set_pin(&mut self, pin: LedPin, level: PinLevel) {
        (**self).set_pin(pin, level);
    }

    fn set_levels(&mut self, levels: PinLevels) {
        (**self).set_levels(levels);
    }
}

fn pin_state(level: PinLevel) -> PinState {
    match level {
        PinLevel::High => PinState::High,
        PinLevel::Low => PinState::Low,
    }
}

/// Two-wire LED on two GPIO output pins.
pub struct GpioLed<R: OutputPin, G: OutputPin> {
    red: R,
    green: G,
}

impl<R: OutputPin, G: OutputPin> GpioLed<R, G> {
    /// Wraps the red and green output pins.
    pub fn new(red: R, green: G) -> Self {
        Self { red, green }
    }

    /// Returns the pins.
    pub fn release(self) -> (R, G) {
        (self.red, self.green)
    }
}

impl<R: OutputPin, G: OutputPin> LedOutput for GpioLed<R, G> {
    fn set_pin(&mut self, pin: LedPin, level: PinLevel) {
        // A stuck pin is the board's problem, not the state machine's.
        match pin {
            LedPin::Red => {
                let _ = self.red.set_state(pin_state(level));
            }
            LedPin::Green => {
                let _ = self.green.set_state(pin_state(level));
            }
        }
    }
}

/// Trait for abstracting RGB LED hardware.
///
/// Color components are in the range 0.0-1.0. Implementations should convert
/// these to their hardware's native format (PWM duty cycles, 8-bit values).
pub trait RgbLed {
    /// Sets the LED to the specified RGB color.
    fn set_color(&mut self, color: Srgb);
}

/// Drives an RGB LED as if it were a two-wire red/green LED.
///
/// Remembers the last levels so a single pin write keeps the other channel.
pub struct RgbLedOutput<L: RgbLed> {
    led: L,
    levels: PinLevels,
}

impl<L: RgbLed> RgbLedOutput<L> {
    /// Wraps the LED. Both channels start low.
    pub fn new(led: L) -> Self {
        Self {
            led,
            levels: PinLevels::new(PinLevel::Low, PinLevel::Low),
        }
    }

    /// Returns the wrapped LED.
    pub fn into_inner(self) -> L {
        self.led
    }
}

impl<L: RgbLed> LedOutput for RgbLedOutput<L> {
    fn set_pin(&mut self, pin: LedPin, level: PinLevel) {
        let levels = match pin {
            LedPin::Red => PinLevels::new(level, self.levels.green),
            LedPin::Green => PinLevels::new(self.levels.red, level),
        };
        self.set_levels(levels);
    }

    fn set_levels(&mut self, levels: PinLevels) {
        self.levels = levels;
        self.led.set_color(levels.to_srgb());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;
    use core::convert::Infallible;
    use core::cell::Cell;
    use embedded_hal::digital::ErrorType;

    struct FakePin<'a> {
        high: &'a Cell<bool>,
        writes: &'a Cell<u32>,
    }

    impl ErrorType for FakePin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for FakePin<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high.set(false);
            self.writes.set(self.writes.get() + 1);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high.set(true);
            self.writes.set(self.writes.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn gpio_led_writes_both_pins() {
        let (red, green, writes) = (Cell::new(false), Cell::new(false), Cell::new(0));
        let mut led = GpioLed::new(
            FakePin { high: &red, writes: &writes },
            FakePin { high: &green, writes: &writes },
        );

        led.set_levels(Color::Orange.pin_levels());
        assert!(red.get() && green.get());

        led.set_levels(Color::Green.pin_levels());
        assert!(!red.get() && green.get());
        assert_eq!(writes.get(), 4);
    }

    #[test]
    fn gpio_set_pin_writes_only_that_pin() {
        let (red, green, writes) = (Cell::new(true), Cell::new(false), Cell::new(0));
        let mut led = GpioLed::new(
            FakePin { high: &red, writes: &writes },
            FakePin { high: &green, writes: &writes },
        );

        led.set_pin(LedPin::Green, PinLevel::High);
        assert!(red.get() && green.get());
        assert_eq!(writes.get(), 1);
    }

    struct RecordingRgb {
        last: Option<Srgb>,
    }

    impl RgbLed for RecordingRgb {
        fn set_color(&mut self, color: Srgb) {
            self.last = Some(color);
        }
    }

    #[test]
    fn rgb_output_converts_levels_to_channels() {
        let mut output = RgbLedOutput::new(RecordingRgb { last: None });
        output.set_levels(Color::Green.pin_levels());

        let color = output.into_inner().last.unwrap();
        assert_eq!((color.red, color.green, color.blue), (0.0, 1.0, 0.0));
    }

    #[test]
    fn rgb_set_pin_keeps_other_channel() {
        let mut output = RgbLedOutput::new(RecordingRgb { last: None });
        output.set_levels(Color::Red.pin_levels());
        output.set_pin(LedPin::Green, PinLevel::High);

        let color = output.into_inner().last.unwrap();
        assert_eq!((color.red, color.green, color.blue), (1.0, 1.0, 0.0));
    }
}
