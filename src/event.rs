//! Button events delivered to the controller.

/// Events produced by the button event source.
///
/// `Pressed` and `Released` track the raw button level. `ShortPress` and
/// `LongPressStart` are synthesized from press timing and drive the mode and
/// color transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Button went down.
    Pressed,
    /// Button went up.
    Released,
    /// Press and release completed before the long-press threshold.
    ShortPress,
    /// Press has been held for the long-press threshold. Fires once per hold.
    LongPressStart,
}
