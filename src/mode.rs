//! Display mode shared by all channels.
//!
//! ```text
//!   UsageRate ──press──▶ CostRate ──press──▶ UsageRate ...
//! ```
//!
//! The mode picks both the conversion applied to raw readings and the unit
//! label printed in every caption.

use core::fmt::Write;

use heapless::String;

use crate::config;
use crate::sensor::ChannelId;

/// Unit mode for the whole display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Physical units per hour.
    #[default]
    UsageRate,
    /// Currency per hour.
    CostRate,
}

impl DisplayMode {
    /// Flip to the other mode.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// The mode a button press would switch to.
    pub const fn toggled(self) -> Self {
        match self {
            DisplayMode::UsageRate => DisplayMode::CostRate,
            DisplayMode::CostRate => DisplayMode::UsageRate,
        }
    }

    /// Raw counts per displayed unit.
    pub const fn divisor(self) -> u16 {
        match self {
            DisplayMode::UsageRate => config::USAGE_RATE_DIVISOR,
            DisplayMode::CostRate => config::COST_RATE_DIVISOR,
        }
    }
}

/// Map a raw reading to the value shown under `mode` (truncating).
pub const fn convert(raw: u16, mode: DisplayMode) -> u16 {
    raw / mode.divisor()
}

/// Unit label for `channel` under `mode`.
pub const fn label(mode: DisplayMode, channel: ChannelId) -> &'static str {
    match (mode, channel) {
        (DisplayMode::UsageRate, ChannelId::Electricity) => "KW/h",
        (DisplayMode::UsageRate, ChannelId::Gas | ChannelId::Water) => "M^3",
        (DisplayMode::CostRate, _) => "$/hr",
    }
}

/// Full caption line, e.g. `" GAS USAGE (M^3):"`.
pub fn caption(mode: DisplayMode, channel: ChannelId) -> String<{ config::LINE_WIDTH }> {
    let mut line = String::new();
    // Longest caption is " ELECTRICITY USAGE ($/hr):" (26 chars).
    let _ = write!(line, " {} USAGE ({}):", channel.name(), label(mode, channel));
    line
}
