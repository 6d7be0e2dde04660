//! Text display over any embedded-graphics draw target.
//!
//! Lines are fixed-height bands starting at the top edge. Printing a string
//! first fills its whole band with the current background, then draws the
//! glyphs on top, so a line never keeps pixels from its previous contents
//! and alert lines show as a full-width band.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use super::{TextColor, TextDisplay};

/// Foreground/background pairs for each [`TextColor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette<C> {
    pub background: C,
    pub normal: C,
    pub alert: C,
    pub alert_background: C,
}

impl Palette<BinaryColor> {
    /// Monochrome panels have no red, so alerts are drawn inverted.
    pub const fn monochrome() -> Self {
        Self {
            background: BinaryColor::Off,
            normal: BinaryColor::On,
            alert: BinaryColor::Off,
            alert_background: BinaryColor::On,
        }
    }
}

impl<C: Copy> Palette<C> {
    fn colors(&self, color: TextColor) -> (C, C) {
        match color {
            TextColor::Normal => (self.normal, self.background),
            TextColor::Alert => (self.alert, self.alert_background),
        }
    }
}

/// [`TextDisplay`] adapter for an embedded-graphics [`DrawTarget`].
pub struct GraphicsTextDisplay<D: DrawTarget> {
    target: D,
    font: &'static MonoFont<'static>,
    line_pitch: u32,
    palette: Palette<D::Color>,
    color: TextColor,
}

impl<D: DrawTarget> GraphicsTextDisplay<D> {
    /// `line_pitch` may be smaller than the font height when the panel is
    /// short; glyph descenders then spill into the next band.
    pub fn new(
        target: D,
        font: &'static MonoFont<'static>,
        line_pitch: u32,
        palette: Palette<D::Color>,
    ) -> Self {
        Self {
            target,
            font,
            line_pitch,
            palette,
            color: TextColor::Normal,
        }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn color(&self) -> TextColor {
        self.color
    }

    fn line_origin(&self, line: u8) -> Point {
        Point::new(0, (u32::from(line) * self.line_pitch) as i32)
    }

    fn fill_line(&mut self, line: u8, color: D::Color) -> Result<(), D::Error> {
        let width = self.target.bounding_box().size.width;
        Rectangle::new(self.line_origin(line), Size::new(width, self.line_pitch))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
    }
}

impl<D: DrawTarget> TextDisplay for GraphicsTextDisplay<D> {
    type Error = D::Error;

    fn clear_line(&mut self, line: u8) -> Result<(), Self::Error> {
        self.fill_line(line, self.palette.background)
    }

    fn set_text_color(&mut self, color: TextColor) {
        self.color = color;
    }

    fn display_string_at_line(&mut self, line: u8, text: &str) -> Result<(), Self::Error> {
        let (text_color, background) = self.palette.colors(self.color);
        self.fill_line(line, background)?;

        let style = MonoTextStyleBuilder::new()
            .font(self.font)
            .text_color(text_color)
            .build();
        Text::with_baseline(text, self.line_origin(line), style, Baseline::Top)
            .draw(&mut self.target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::mono_font::ascii::FONT_4X6;

    fn display(pitch: u32) -> GraphicsTextDisplay<MockDisplay<BinaryColor>> {
        let mut target = MockDisplay::new();
        target.set_allow_overdraw(true);
        target.set_allow_out_of_bounds_drawing(true);
        GraphicsTextDisplay::new(target, &FONT_4X6, pitch, Palette::monochrome())
    }

    #[test]
    fn clear_line_blanks_one_row_band() {
        let mut display = display(5);
        display.clear_line(2).unwrap();

        let target = display.target();
        assert_eq!(target.get_pixel(Point::new(0, 10)), Some(BinaryColor::Off));
        assert_eq!(target.get_pixel(Point::new(63, 14)), Some(BinaryColor::Off));
        assert_eq!(target.get_pixel(Point::new(0, 9)), None);
        assert_eq!(target.get_pixel(Point::new(0, 15)), None);
    }

    #[test]
    fn printing_fills_the_whole_band() {
        let mut display = display(6);
        display.set_text_color(TextColor::Alert);
        display.display_string_at_line(3, "1").unwrap();

        let target = display.target();
        assert_eq!(target.get_pixel(Point::new(63, 18)), Some(BinaryColor::On));
        assert_eq!(target.get_pixel(Point::new(63, 23)), Some(BinaryColor::On));
        assert_eq!(target.get_pixel(Point::new(63, 24)), None);
    }

    #[test]
    fn normal_text_uses_dark_background() {
        let mut display = display(6);
        display.display_string_at_line(1, " ").unwrap();
        assert_eq!(display.target().get_pixel(Point::new(1, 7)), Some(BinaryColor::Off));
    }

    #[test]
    fn alert_text_is_inverted_on_monochrome() {
        let mut display = display(6);
        display.set_text_color(TextColor::Alert);
        display.display_string_at_line(1, " ").unwrap();

        assert_eq!(display.color(), TextColor::Alert);
        assert_eq!(display.target().get_pixel(Point::new(1, 7)), Some(BinaryColor::On));
    }

    #[test]
    fn color_sticks_until_changed() {
        let mut display = display(6);
        display.set_text_color(TextColor::Alert);
        display.display_string_at_line(0, " ").unwrap();
        display.display_string_at_line(2, " ").unwrap();
        display.set_text_color(TextColor::Normal);
        display.display_string_at_line(4, " ").unwrap();

        let target = display.target();
        assert_eq!(target.get_pixel(Point::new(0, 12)), Some(BinaryColor::On));
        assert_eq!(target.get_pixel(Point::new(0, 24)), Some(BinaryColor::Off));
    }
}
