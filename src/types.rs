//! Core value types: LED colors, operating modes and pin levels.

use palette::Srgb;

/// Color shown by the two-wire LED.
///
/// Colors cycle Red -> Green -> Orange -> Red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Red pin high, green pin low.
    #[default]
    Red,

    /// Red pin low, green pin high.
    Green,

    /// Both pins high.
    Orange,
}

impl Color {
    /// Number of colors in the cycle.
    pub const COUNT: u8 = 3;

    /// Position of this color in the cycle.
    #[inline]
    pub fn index(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Orange => 2,
        }
    }

    /// Maps a cycle position back to a color.
    ///
    /// Any index outside the cycle falls back to [`Color::Red`].
    #[inline]
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Color::Red,
            1 => Color::Green,
            2 => Color::Orange,
            _ => Color::Red,
        }
    }

    /// Returns the next color in the cycle.
    #[inline]
    pub fn next(self) -> Self {
        Color::from_index((self.index() + 1) % Self::COUNT)
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Orange => "ORANGE",
        }
    }

    /// Pin levels that produce this color.
    pub fn pin_levels(self) -> PinLevels {
        match self {
            Color::Red => PinLevels::new(PinLevel::High, PinLevel::Low),
            Color::Green => PinLevels::new(PinLevel::Low, PinLevel::High),
            Color::Orange => PinLevels::new(PinLevel::High, PinLevel::High),
        }
    }
}

impl From<u8> for Color {
    fn from(index: u8) -> Self {
        Color::from_index(index)
    }
}

/// Operating mode of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Color advances on a fixed interval.
    #[default]
    Auto,

    /// Color advances on each short press.
    Manual,
}

impl Mode {
    /// Returns the other mode.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Mode::Auto => Mode::Manual,
            Mode::Manual => Mode::Auto,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Auto => "AUTO MODE",
            Mode::Manual => "MANUAL MODE",
        }
    }
}

/// One of the two LED pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedPin {
    Red,
    Green,
}

/// Digital output level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    High,
    Low,
}

impl PinLevel {
    #[inline]
    pub fn is_high(self) -> bool {
        self == PinLevel::High
    }
}

/// Levels for both LED pins, written together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinLevels {
    pub red: PinLevel,
    pub green: PinLevel,
}

impl PinLevels {
    /// Creates a pin level pair.
    #[inline]
    pub const fn new(red: PinLevel, green: PinLevel) -> Self {
        Self { red, green }
    }

    /// Channel drive for an RGB LED: each high pin drives its channel fully.
    pub fn to_srgb(self) -> Srgb {
        let drive = |level: PinLevel| if level.is_high() { 1.0 } else { 0.0 };
        Srgb::new(drive(self.red), drive(self.green), 0.0)
    }
}

impl From<Color> for PinLevels {
    fn from(color: Color) -> Self {
        color.pin_levels()
    }
}
