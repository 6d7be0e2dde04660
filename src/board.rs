//! nRF52840 board adapters.
//!
//! - **SaadcSource**: the three sensor inputs on the SAADC, one scan per read
//! - **OledDisplay**: SSD1306 128×64 OLED via I²C, driven as an 11-line
//!   text display

use embassy_futures::block_on;
use embassy_nrf::saadc::Saadc;
use embedded_graphics::mono_font::ascii::FONT_4X6;
use embedded_hal::i2c::I2c;
use smart_meter::config::{self, CHANNEL_COUNT};
use smart_meter::ui::display::{GraphicsTextDisplay, Palette};
use smart_meter::{AnalogSource, ChannelId, Error, TextColor, TextDisplay};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// 11 lines on a 64 px panel: 5 px bands, FONT_4X6 descenders overlap.
const LINE_PITCH: u32 = 64 / config::LINE_COUNT as u32;

// SAADC

/// Sensor inputs, channel order matching [`ChannelId::index`].
pub struct SaadcSource {
    adc: Saadc<'static, CHANNEL_COUNT>,
}

impl SaadcSource {
    /// Calibrate the converter once before first use.
    pub fn new(mut adc: Saadc<'static, CHANNEL_COUNT>) -> Self {
        block_on(adc.calibrate());
        Self { adc }
    }
}

impl AnalogSource for SaadcSource {
    fn read(&mut self, channel: ChannelId) -> u16 {
        let mut samples = [0i16; CHANNEL_COUNT];
        block_on(self.adc.sample(&mut samples));
        // Single-ended inputs can read slightly negative near ground.
        samples[channel.index()].max(0) as u16
    }
}

// OLED

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Panel<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Line-addressed text display on the SSD1306.
pub struct OledDisplay<I2C: I2c> {
    text: GraphicsTextDisplay<Panel<I2C>>,
}

impl<I2C: I2c> OledDisplay<I2C> {
    /// Initialise the SSD1306 display and clear the screen.
    pub fn init(i2c: I2C) -> Result<Self, Error> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        panel.init().map_err(|_| Error::Display)?;
        panel.clear_buffer();
        panel.flush().map_err(|_| Error::Display)?;

        Ok(Self {
            text: GraphicsTextDisplay::new(panel, &FONT_4X6, LINE_PITCH, Palette::monochrome()),
        })
    }
}

impl<I2C: I2c> TextDisplay for OledDisplay<I2C> {
    type Error = Error;

    fn clear_line(&mut self, line: u8) -> Result<(), Self::Error> {
        self.text.clear_line(line).map_err(|_| Error::Display)
    }

    fn set_text_color(&mut self, color: TextColor) {
        self.text.set_text_color(color);
    }

    fn display_string_at_line(&mut self, line: u8, text: &str) -> Result<(), Self::Error> {
        self.text
            .display_string_at_line(line, text)
            .map_err(|_| Error::Display)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.text.target_mut().flush().map_err(|_| Error::Display)
    }
}
