//! User interface subsystem - text display + mode button.
//!
//! The monitor loop only ever writes whole text lines at fixed indices; how a
//! line turns into pixels is up to the [`TextDisplay`] implementation.
//!
//! ## Components
//!
//! - **Display**: any line-addressed text display ([`display`] adapts
//!   embedded-graphics targets such as the SSD1306 OLED)
//! - **Button**: single mode pushbutton, level or edge triggered

pub mod buttons;
#[cfg(feature = "graphics")]
pub mod display;
pub mod input_logic;

use core::fmt::Write;

use heapless::String;

use crate::config;

/// Text colors the loop can select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextColor {
    /// Frame, captions and values within limits.
    #[default]
    Normal,
    /// Values at or over their alarm threshold.
    Alert,
}

/// Line-addressed text display.
///
/// Mirrors the primitives a character LCD driver offers: clear a line, pick a
/// color, print a string at a line. The selected color applies to every
/// string printed after it.
pub trait TextDisplay {
    type Error;

    /// Blank `line` in the background color.
    fn clear_line(&mut self, line: u8) -> Result<(), Self::Error>;

    /// Select the color for subsequent strings.
    fn set_text_color(&mut self, color: TextColor);

    /// Print `text` starting at the left edge of `line`.
    fn display_string_at_line(&mut self, line: u8, text: &str) -> Result<(), Self::Error>;

    /// Push buffered drawing to the panel. Called once at the end of a tick.
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Value line text: fixed indent, then the value right-aligned.
pub fn format_value(value: u16) -> String<{ config::LINE_WIDTH }> {
    let mut line: String<{ config::LINE_WIDTH }> = String::new();
    for _ in 0..config::VALUE_INDENT {
        let _ = line.push(' ');
    }
    let _ = write!(line, "{:>width$}", value, width = config::VALUE_WIDTH);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_right_aligned_after_indent() {
        assert_eq!(format_value(50).as_str(), "                   50");
        assert_eq!(format_value(0).as_str(), "                    0");
        assert_eq!(format_value(409).len(), config::VALUE_INDENT + config::VALUE_WIDTH);
    }

    #[test]
    fn wide_values_grow_the_field() {
        assert_eq!(format_value(6553).as_str(), "                 6553");
        assert_eq!(format_value(u16::MAX).as_str(), "                 65535");
    }
}
