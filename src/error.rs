//! Unified error type for smart-meter.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! Nothing in the sample/render loop is fatal: peripheral failures during a
//! tick are reported and the tick carries on. Only the startup frame draw is
//! allowed to stop the firmware.

use crate::sensor::ChannelId;

/// Top-level error type used across the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Sensors
    /// The analog source could not produce a reading for a channel.
    ///
    /// Reserved: sampling is treated as always succeeding and no current
    /// source raises it.
    SensorFault(ChannelId),

    // UI / Display
    /// A clear, draw or flush on the text display failed.
    Display,

    /// The mode button could not be read; the tick treats it as released.
    Button,

    // Indicators
    /// Driving a channel's indicator output failed.
    Indicator(ChannelId),
}
