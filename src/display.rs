//! Status display abstraction and an `embedded-graphics` text adapter.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::PixelColor,
    prelude::*,
    text::{Baseline, Text},
};

/// Trait for abstracting a line-oriented text display.
pub trait StatusDisplay {
    /// Clears the display and moves the cursor to the top.
    fn clear(&mut self);

    /// Draws one line of text below the previous one.
    fn draw_line(&mut self, line: &str);
}

impl<S: StatusDisplay + ?Sized> StatusDisplay for &mut S {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn draw_line(&mut self, line: &str) {
        (**self).draw_line(line);
    }
}

/// Text display on top of any `embedded-graphics` draw target.
///
/// Lines are drawn top to bottom, one font height apart, starting at `origin`.
pub struct TextDisplay<'s, D: DrawTarget<Color = C>, C: PixelColor> {
    target: D,
    style: MonoTextStyle<'s, C>,
    background: C,
    origin: Point,
    cursor: Point,
}

impl<'s, D: DrawTarget<Color = C>, C: PixelColor> TextDisplay<'s, D, C> {
    /// Creates a text display drawing from the top-left corner.
    pub fn new(target: D, style: MonoTextStyle<'s, C>, background: C) -> Self {
        Self::with_origin(target, style, background, Point::zero())
    }

    /// Creates a text display drawing from `origin`.
    pub fn with_origin(target: D, style: MonoTextStyle<'s, C>, background: C, origin: Point) -> Self {
        Self {
            target,
            style,
            background,
            origin,
            cursor: origin,
        }
    }

    /// Height of one text line in pixels.
    pub fn line_height(&self) -> u32 {
        self.style.font.character_size.height
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn release(self) -> D {
        self.target
    }
}

impl<D: DrawTarget<Color = C>, C: PixelColor> StatusDisplay for TextDisplay<'_, D, C> {
    fn clear(&mut self) {
        // Draw errors belong to the display driver.
        self.target.clear(self.background).ok();
        self.cursor = self.origin;
    }

    fn draw_line(&mut self, line: &str) {
        if !line.is_empty() {
            Text::with_baseline(line, self.cursor, self.style, Baseline::Top)
                .draw(&mut self.target)
                .ok();
        }
        self.cursor.y += self.line_height() as i32;
    }
}
